use crate::foundation::error::{LayerstackError, LayerstackResult};

use kurbo::Vec2;

pub use kurbo::Affine;

/// Largest canvas edge accepted by the renderers.
pub const MAX_CANVAS_DIM: u32 = u16::MAX as u32;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Output canvas dimensions in pixels.
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Build a canvas, rejecting empty or oversized dimensions.
    pub fn new(width: u32, height: u32) -> LayerstackResult<Self> {
        if width == 0 || height == 0 {
            return Err(LayerstackError::invalid_metadata(
                "canvas width and height must be > 0",
            ));
        }
        if width > MAX_CANVAS_DIM || height > MAX_CANVAS_DIM {
            return Err(LayerstackError::invalid_metadata(format!(
                "canvas {width}x{height} exceeds {MAX_CANVAS_DIM}x{MAX_CANVAS_DIM}"
            )));
        }
        Ok(Self { width, height })
    }

    /// Number of bytes in a tightly packed RGBA8 buffer of this size.
    pub fn rgba_len(self) -> usize {
        (self.width as usize) * (self.height as usize) * 4
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// A position in canvas pixels relative to the template's zero origin.
pub struct Position {
    /// Horizontal offset.
    pub x: f64,
    /// Vertical offset.
    pub y: f64,
}

impl Position {
    /// Origin position.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Build a position.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Integer pixel offset, rounding halves towards positive infinity.
    pub fn to_pixel(self) -> (i64, i64) {
        (round_half_up(self.x), round_half_up(self.y))
    }

    /// Translation for this position.
    pub fn to_affine(self) -> Affine {
        Affine::translate(Vec2::new(self.x, self.y))
    }
}

/// Round to the nearest integer with halves going up (`-0.5 -> 0`, `2.5 -> 3`).
pub fn round_half_up(v: f64) -> i64 {
    if !v.is_finite() {
        return 0;
    }
    (v + 0.5).floor() as i64
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// Straight (non-premultiplied) RGBA8 color.
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Opaque black.
    pub const BLACK: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: 255,
    };

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa` (leading `#` optional).
    pub fn parse_hex(s: &str) -> LayerstackResult<Self> {
        let hex = s.trim().trim_start_matches('#');
        let bad = || LayerstackError::invalid_metadata(format!("invalid color '{s}'"));
        if !hex.is_ascii() {
            return Err(bad());
        }
        let nibble = |i: usize| -> LayerstackResult<u8> {
            u8::from_str_radix(&hex[i..i + 1], 16).map_err(|_| bad())
        };
        let byte = |i: usize| -> LayerstackResult<u8> {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| bad())
        };
        match hex.len() {
            3 => Ok(Self {
                r: nibble(0)? * 17,
                g: nibble(1)? * 17,
                b: nibble(2)? * 17,
                a: 255,
            }),
            6 => Ok(Self {
                r: byte(0)?,
                g: byte(2)?,
                b: byte(4)?,
                a: 255,
            }),
            8 => Ok(Self {
                r: byte(0)?,
                g: byte(2)?,
                b: byte(4)?,
                a: byte(6)?,
            }),
            _ => Err(bad()),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
