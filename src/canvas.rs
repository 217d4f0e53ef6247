//! In-memory 1-bit display
//!
//! Rasterizes frames into a pixel buffer. Useful as a back buffer for
//! displays that take raw pixel data, and for previews and tests.

use core::convert::Infallible;

use crate::Display;
use crate::frame::{BinaryColor, Frame, Point, Primitive, Quad, RoundedRect};

/// Monochrome pixel buffer of `W` x `H` pixels
///
/// Pixels are sampled at their centers, `(px + 0.5, py + 0.5)`.
#[derive(Debug, Clone)]
pub struct Canvas<const W: usize, const H: usize> {
    pixels: [[bool; W]; H],
}

impl<const W: usize, const H: usize> Default for Canvas<W, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const W: usize, const H: usize> Canvas<W, H> {
    pub const fn new() -> Self {
        Self {
            pixels: [[false; W]; H],
        }
    }

    pub const fn width(&self) -> usize {
        W
    }

    pub const fn height(&self) -> usize {
        H
    }

    /// Check if a pixel is lit; out of bounds pixels are never lit
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        self.pixels
            .get(y)
            .and_then(|row| row.get(x))
            .copied()
            .unwrap_or(false)
    }

    /// Rows of pixels, top to bottom
    pub fn rows(&self) -> &[[bool; W]; H] {
        &self.pixels
    }

    pub fn lit_pixels(&self) -> usize {
        self.pixels
            .iter()
            .map(|row| row.iter().filter(|lit| **lit).count())
            .sum()
    }

    pub fn clear(&mut self) {
        self.pixels = [[false; W]; H];
    }

    /// Paint all primitives of a frame on top of the current content
    pub fn draw(&mut self, frame: &Frame) {
        for primitive in frame.primitives() {
            match primitive {
                Primitive::RoundedRect(shape) => self.fill_rounded_rect(shape),
                Primitive::Polygon(shape) => self.fill_quad(shape),
            }
        }
    }

    /// Fill a rounded rectangle, corners clipped by the radius
    pub fn fill_rounded_rect(&mut self, shape: &RoundedRect) {
        let Point { x: x0, y: y0 } = shape.rect.top_left;
        let Point { x: x1, y: y1 } = shape.rect.bottom_right;
        if x1 < x0 || y1 < y0 {
            return;
        }
        let radius = shape
            .radius
            .min(shape.rect.width() / 2.0)
            .min(shape.rect.height() / 2.0)
            .max(0.0);
        let lit = shape.color == BinaryColor::On;

        let (col_start, col_end) = span::<W>(x0, x1);
        let (row_start, row_end) = span::<H>(y0, y1);
        for py in row_start..row_end {
            let cy = center(py);
            if cy < y0 || cy > y1 {
                continue;
            }
            let dy = (y0 + radius - cy).max(cy - (y1 - radius)).max(0.0);
            for px in col_start..col_end {
                let cx = center(px);
                if cx < x0 || cx > x1 {
                    continue;
                }
                let dx = (x0 + radius - cx).max(cx - (x1 - radius)).max(0.0);
                if dx * dx + dy * dy <= radius * radius {
                    self.pixels[py][px] = lit;
                }
            }
        }
    }

    /// Fill a quadrilateral with an even-odd scanline rule
    pub fn fill_quad(&mut self, shape: &Quad) {
        let points = &shape.points;
        let lit = shape.color == BinaryColor::On;

        let (top, bottom) = points
            .iter()
            .fold((f32::MAX, f32::MIN), |(lo, hi), p| (lo.min(p.y), hi.max(p.y)));
        let (row_start, row_end) = span::<H>(top, bottom);

        for py in row_start..row_end {
            let cy = center(py);
            let mut crossings = [0.0_f32; 4];
            let mut count = 0;
            for (i, a) in points.iter().enumerate() {
                let b = &points[(i + 1) % points.len()];
                if (a.y <= cy) != (b.y <= cy) {
                    crossings[count] = a.x + (cy - a.y) * (b.x - a.x) / (b.y - a.y);
                    count += 1;
                }
            }
            let crossings = &mut crossings[..count];
            crossings.sort_unstable_by(f32::total_cmp);

            for pair in crossings.chunks_exact(2) {
                let (col_start, col_end) = span::<W>(pair[0], pair[1]);
                for px in col_start..col_end {
                    let cx = center(px);
                    if cx >= pair[0] && cx < pair[1] {
                        self.pixels[py][px] = lit;
                    }
                }
            }
        }
    }
}

impl<const W: usize, const H: usize> Display for Canvas<W, H> {
    type Error = Infallible;

    fn present(&mut self, frame: &Frame) -> Result<(), Self::Error> {
        self.clear();
        self.draw(frame);
        Ok(())
    }
}

#[allow(clippy::cast_precision_loss)]
fn center(index: usize) -> f32 {
    index as f32 + 0.5
}

/// Pixel indices that may have their center within `[from, to]`, clipped
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn span<const LIMIT: usize>(from: f32, to: f32) -> (usize, usize) {
    let clip = |value: f32| -> usize {
        if value <= 0.0 {
            0
        } else {
            (value as usize).min(LIMIT)
        }
    };
    (clip(libm::floorf(from)), clip(libm::ceilf(to) + 1.0))
}
