use embassy_time::Duration;

/// Default target frame period (50 FPS).
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(20);

/// Range for randomized deadlines, `[min, max)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub min: Duration,
    pub max: Duration,
}

impl Interval {
    pub const fn from_millis(min: u64, max: u64) -> Self {
        Self {
            min: Duration::from_millis(min),
            max: Duration::from_millis(max),
        }
    }
}

/// Configuration for autonomous behaviors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BehaviorTimings {
    /// Delay between two blinks
    pub blink: Interval,
    /// Delay between two idle gaze changes
    pub idle: Interval,
}

/// Configuration for the eyes renderer
///
/// All geometry is in display pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EyesConfig {
    pub screen_width: f32,
    pub screen_height: f32,
    pub eye_width: f32,
    pub eye_height: f32,
    /// Corner radius of the eye bodies and happy eyelids
    pub eye_radius: f32,
    /// Horizontal space between the two eyes
    pub eye_gap: f32,
    pub frame_duration: Duration,
    pub timings: BehaviorTimings,
    /// Divisor applied to the eye height by the lower eyelid in happy mood
    pub happy_eyelid_thickness: f32,
}

impl EyesConfig {
    /// 128x64 monochrome OLED (SH1106/SSD1306) with 36px eyes
    pub const DEFAULT: Self = Self {
        screen_width: 128.0,
        screen_height: 64.0,
        eye_width: 36.0,
        eye_height: 36.0,
        eye_radius: 8.0,
        eye_gap: 10.0,
        frame_duration: DEFAULT_FRAME_DURATION,
        timings: BehaviorTimings {
            blink: Interval::from_millis(3_000, 6_000),
            idle: Interval::from_millis(3_000, 6_000),
        },
        happy_eyelid_thickness: 3.0,
    };

    /// Horizontal distance between the left edges of the two eyes
    pub fn pair_offset(&self) -> f32 {
        self.eye_width + self.eye_gap
    }
}

impl Default for EyesConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
