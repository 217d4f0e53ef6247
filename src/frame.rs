//! Draw primitives produced by the renderer
//!
//! A frame is a fixed list of filled shapes painted in order onto a cleared
//! canvas. Eye bodies are drawn lit, then both kinds of eyelids are drawn
//! unlit on top of them to carve out the expression.

use crate::eye::Eye;

/// Number of primitives in every frame
pub const FRAME_LEN: usize = 6;

/// How far the upper eyelid reaches past the eye box
pub const EYELID_OVERHANG: f32 = 2.0;

/// 1-bit pixel color
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BinaryColor {
    #[default]
    Off,
    On,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle between two corners
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub top_left: Point,
    pub bottom_right: Point,
}

impl Rect {
    pub const fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self {
            top_left: Point::new(x0, y0),
            bottom_right: Point::new(x1, y1),
        }
    }

    pub fn width(&self) -> f32 {
        self.bottom_right.x - self.top_left.x
    }

    pub fn height(&self) -> f32 {
        self.bottom_right.y - self.top_left.y
    }
}

/// Filled rectangle with rounded corners
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RoundedRect {
    pub rect: Rect,
    pub radius: f32,
    pub color: BinaryColor,
}

/// Filled quadrilateral, vertices in drawing order
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Quad {
    pub points: [Point; 4],
    pub color: BinaryColor,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    RoundedRect(RoundedRect),
    Polygon(Quad),
}

impl Default for Primitive {
    fn default() -> Self {
        Self::RoundedRect(RoundedRect::default())
    }
}

/// A complete set of draw calls for both eyes
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Frame {
    primitives: [Primitive; FRAME_LEN],
}

impl Frame {
    /// Assemble a frame from the current eye state
    pub fn compose(left: &Eye, right: &Eye, happy_eyelid: f32, radius: f32) -> Self {
        Self {
            primitives: [
                Primitive::RoundedRect(eye_body(left, radius)),
                Primitive::RoundedRect(eye_body(right, radius)),
                Primitive::Polygon(upper_eyelid(left)),
                Primitive::Polygon(upper_eyelid(right)),
                Primitive::RoundedRect(happy_eyelid_rect(left, happy_eyelid, radius)),
                Primitive::RoundedRect(happy_eyelid_rect(right, happy_eyelid, radius)),
            ],
        }
    }

    /// Primitives in painting order
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }
}

fn eye_body(eye: &Eye, radius: f32) -> RoundedRect {
    let x = eye.x.current();
    let y = eye.y.current();
    RoundedRect {
        rect: Rect::new(x, y, x + eye.w.current(), y + eye.h.current()),
        radius,
        color: BinaryColor::On,
    }
}

fn upper_eyelid(eye: &Eye) -> Quad {
    let left = eye.x.current() - EYELID_OVERHANG;
    let right = eye.x.current() + eye.w.current() + EYELID_OVERHANG;
    let top = eye.y.current() - EYELID_OVERHANG;
    Quad {
        points: [
            Point::new(left, top),
            Point::new(right, top),
            Point::new(right, eye.eyelid_right.current() - 1.0),
            Point::new(left, eye.eyelid_left.current() - 1.0),
        ],
        color: BinaryColor::Off,
    }
}

fn happy_eyelid_rect(eye: &Eye, happy_eyelid: f32, radius: f32) -> RoundedRect {
    let x = eye.x.current();
    let y = eye.y.current();
    let w = eye.w.current();
    let h = eye.h.current();
    RoundedRect {
        rect: Rect::new(
            x,
            y + h / happy_eyelid + EYELID_OVERHANG,
            x + w,
            y + h + EYELID_OVERHANG,
        ),
        radius,
        color: BinaryColor::Off,
    }
}
