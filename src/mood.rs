//! Moods and the eyelid shapes they produce

use crate::eye::Side;

const MOOD_NAME_NEUTRAL: &str = "neutral";
const MOOD_NAME_ANGRY: &str = "angry";
const MOOD_NAME_TIRED: &str = "tired";
const MOOD_NAME_HAPPY: &str = "happy";
const MOOD_NAME_SAD: &str = "sad";

const MOOD_ID_NEUTRAL: u8 = 0;
const MOOD_ID_ANGRY: u8 = 1;
const MOOD_ID_TIRED: u8 = 2;
const MOOD_ID_HAPPY: u8 = 3;
const MOOD_ID_SAD: u8 = 4;

/// Facial expression of the eyes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum Mood {
    #[default]
    Neutral = MOOD_ID_NEUTRAL,
    Angry = MOOD_ID_ANGRY,
    Tired = MOOD_ID_TIRED,
    Happy = MOOD_ID_HAPPY,
    Sad = MOOD_ID_SAD,
}

/// Upper eyelid cutoff lines of a single eye
///
/// Each value is the y coordinate where the slanted eyelid edge meets
/// the left or right side of the eye.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EyelidCutoffs {
    pub left: f32,
    pub right: f32,
}

impl Mood {
    pub const ALL: [Self; 5] = [
        Self::Neutral,
        Self::Angry,
        Self::Tired,
        Self::Happy,
        Self::Sad,
    ];

    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            MOOD_ID_NEUTRAL => Self::Neutral,
            MOOD_ID_ANGRY => Self::Angry,
            MOOD_ID_TIRED => Self::Tired,
            MOOD_ID_HAPPY => Self::Happy,
            MOOD_ID_SAD => Self::Sad,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Neutral => MOOD_NAME_NEUTRAL,
            Self::Angry => MOOD_NAME_ANGRY,
            Self::Tired => MOOD_NAME_TIRED,
            Self::Happy => MOOD_NAME_HAPPY,
            Self::Sad => MOOD_NAME_SAD,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            MOOD_NAME_NEUTRAL => Some(Self::Neutral),
            MOOD_NAME_ANGRY => Some(Self::Angry),
            MOOD_NAME_TIRED => Some(Self::Tired),
            MOOD_NAME_HAPPY => Some(Self::Happy),
            MOOD_NAME_SAD => Some(Self::Sad),
            _ => None,
        }
    }

    /// Eyelid cutoff targets for an eye currently at `y` with height `h`
    ///
    /// Tables are written for the left eye; the right eye mirrors them,
    /// so expressive moods slant the two eyelids in opposite directions.
    pub fn eyelid_targets(self, side: Side, y: f32, h: f32) -> EyelidCutoffs {
        let (outer, inner) = match self {
            Self::Neutral | Self::Happy => {
                return EyelidCutoffs { left: y, right: y };
            }
            Self::Angry => (4.0, 2.0),
            Self::Sad => (2.0, 4.0),
            Self::Tired => (1.2, 1.4),
        };
        let (left, right) = match side {
            Side::Left => (outer, inner),
            Side::Right => (inner, outer),
        };
        EyelidCutoffs {
            left: y + h / left,
            right: y + h / right,
        }
    }

    /// Target divisor for the happy lower eyelid
    ///
    /// `1.0` keeps the lid at the bottom edge of the eye, where it is hidden.
    pub fn happy_eyelid_target(self, thickness: f32) -> f32 {
        if self == Self::Happy { thickness } else { 1.0 }
    }
}
