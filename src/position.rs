//! Gaze positions and the area the eyes may move in

use rand::Rng;

use crate::config::EyesConfig;

const POSITION_NAME_CENTER: &str = "center";
const POSITION_NAME_TOP: &str = "top";
const POSITION_NAME_LEFT: &str = "left";
const POSITION_NAME_BOTTOM: &str = "bottom";
const POSITION_NAME_RIGHT: &str = "right";
const POSITION_NAME_TOP_LEFT: &str = "top_left";
const POSITION_NAME_TOP_RIGHT: &str = "top_right";
const POSITION_NAME_BOTTOM_LEFT: &str = "bottom_left";
const POSITION_NAME_BOTTOM_RIGHT: &str = "bottom_right";

const POSITION_ID_CENTER: u8 = 0;
const POSITION_ID_TOP: u8 = 1;
const POSITION_ID_LEFT: u8 = 2;
const POSITION_ID_BOTTOM: u8 = 3;
const POSITION_ID_RIGHT: u8 = 4;
const POSITION_ID_TOP_LEFT: u8 = 5;
const POSITION_ID_TOP_RIGHT: u8 = 6;
const POSITION_ID_BOTTOM_LEFT: u8 = 7;
const POSITION_ID_BOTTOM_RIGHT: u8 = 8;

/// Named gaze direction
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum Position {
    #[default]
    Center = POSITION_ID_CENTER,
    Top = POSITION_ID_TOP,
    Left = POSITION_ID_LEFT,
    Bottom = POSITION_ID_BOTTOM,
    Right = POSITION_ID_RIGHT,
    TopLeft = POSITION_ID_TOP_LEFT,
    TopRight = POSITION_ID_TOP_RIGHT,
    BottomLeft = POSITION_ID_BOTTOM_LEFT,
    BottomRight = POSITION_ID_BOTTOM_RIGHT,
}

/// Area the top-left corner of the left eye may occupy
///
/// Both eyes and the gap between them stay on screen anywhere inside
/// `[0, max_x] x [0, max_y]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegalRange {
    pub max_x: f32,
    pub max_y: f32,
}

impl LegalRange {
    /// Compute the range from the default eye size
    pub fn from_config(config: &EyesConfig) -> Self {
        let max_x = config.screen_width - config.eye_width - config.eye_gap - config.eye_width;
        let max_y = config.screen_height - config.eye_height;
        Self {
            max_x: max_x.max(0.0),
            max_y: max_y.max(0.0),
        }
    }

    /// Uniformly random point inside the range
    pub fn random_point<R: Rng>(self, rng: &mut R) -> (f32, f32) {
        (random_coord(rng, self.max_x), random_coord(rng, self.max_y))
    }
}

fn random_coord<R: Rng>(rng: &mut R, max: f32) -> f32 {
    if max > 0.0 {
        rng.random_range(0.0..=max)
    } else {
        0.0
    }
}

impl Position {
    pub const ALL: [Self; 9] = [
        Self::Center,
        Self::Top,
        Self::Left,
        Self::Bottom,
        Self::Right,
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
    ];

    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            POSITION_ID_CENTER => Self::Center,
            POSITION_ID_TOP => Self::Top,
            POSITION_ID_LEFT => Self::Left,
            POSITION_ID_BOTTOM => Self::Bottom,
            POSITION_ID_RIGHT => Self::Right,
            POSITION_ID_TOP_LEFT => Self::TopLeft,
            POSITION_ID_TOP_RIGHT => Self::TopRight,
            POSITION_ID_BOTTOM_LEFT => Self::BottomLeft,
            POSITION_ID_BOTTOM_RIGHT => Self::BottomRight,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Center => POSITION_NAME_CENTER,
            Self::Top => POSITION_NAME_TOP,
            Self::Left => POSITION_NAME_LEFT,
            Self::Bottom => POSITION_NAME_BOTTOM,
            Self::Right => POSITION_NAME_RIGHT,
            Self::TopLeft => POSITION_NAME_TOP_LEFT,
            Self::TopRight => POSITION_NAME_TOP_RIGHT,
            Self::BottomLeft => POSITION_NAME_BOTTOM_LEFT,
            Self::BottomRight => POSITION_NAME_BOTTOM_RIGHT,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            POSITION_NAME_CENTER => Some(Self::Center),
            POSITION_NAME_TOP => Some(Self::Top),
            POSITION_NAME_LEFT => Some(Self::Left),
            POSITION_NAME_BOTTOM => Some(Self::Bottom),
            POSITION_NAME_RIGHT => Some(Self::Right),
            POSITION_NAME_TOP_LEFT => Some(Self::TopLeft),
            POSITION_NAME_TOP_RIGHT => Some(Self::TopRight),
            POSITION_NAME_BOTTOM_LEFT => Some(Self::BottomLeft),
            POSITION_NAME_BOTTOM_RIGHT => Some(Self::BottomRight),
            _ => None,
        }
    }

    /// Left eye target for this position
    pub fn resolve(self, range: LegalRange) -> (f32, f32) {
        let LegalRange { max_x, max_y } = range;
        let mid_x = max_x / 2.0;
        let mid_y = max_y / 2.0;
        match self {
            Self::Center => (mid_x, mid_y),
            Self::Top => (mid_x, 0.0),
            Self::Left => (0.0, mid_y),
            Self::Bottom => (mid_x, max_y),
            Self::Right => (max_x, mid_y),
            Self::TopLeft => (0.0, 0.0),
            Self::TopRight => (max_x, 0.0),
            Self::BottomLeft => (0.0, max_y),
            Self::BottomRight => (max_x, max_y),
        }
    }
}
