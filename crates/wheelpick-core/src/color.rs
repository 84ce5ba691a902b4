//! Colours and WCAG contrast.
//!
//! The wheel derives its label colour from the background through
//! [`Color::adaptive_foreground`] and its edge fades through
//! [`Color::with_alpha`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Straight (non-premultiplied) RGBA, each channel in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };

    /// Channels outside `[0.0, 1.0]` are clamped.
    #[must_use]
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
            a: a.clamp(0.0, 1.0),
        }
    }

    #[must_use]
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa`. The leading `#` is optional and
    /// surrounding whitespace is ignored.
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let digits = hex.trim().trim_start_matches('#');
        let nibbles = digits
            .chars()
            .map(|c| c.to_digit(16).ok_or(ColorParseError::InvalidHex))
            .collect::<Result<Vec<u32>, _>>()?;
        let unit = |byte: u32| byte as f32 / 255.0;

        match nibbles.as_slice() {
            [r, g, b] => Ok(Self::rgb(unit(r * 17), unit(g * 17), unit(b * 17))),
            [r1, r0, g1, g0, b1, b0] => Ok(Self::rgb(
                unit(r1 * 16 + r0),
                unit(g1 * 16 + g0),
                unit(b1 * 16 + b0),
            )),
            [r1, r0, g1, g0, b1, b0, a1, a0] => Ok(Self::new(
                unit(r1 * 16 + r0),
                unit(g1 * 16 + g0),
                unit(b1 * 16 + b0),
                unit(a1 * 16 + a0),
            )),
            _ => Err(ColorParseError::InvalidLength),
        }
    }

    /// `#rrggbb`, alpha dropped.
    #[must_use]
    pub fn to_hex(&self) -> String {
        let byte = |c: f32| (c * 255.0).round() as u8;
        format!("#{:02x}{:02x}{:02x}", byte(self.r), byte(self.g), byte(self.b))
    }

    /// Same colour with the alpha channel replaced.
    #[must_use]
    pub fn with_alpha(&self, alpha: f32) -> Self {
        Self::new(self.r, self.g, self.b, alpha)
    }

    /// WCAG 2.1 relative luminance. Alpha is ignored.
    ///
    /// See: <https://www.w3.org/TR/WCAG21/#dfn-relative-luminance>
    #[must_use]
    pub fn relative_luminance(&self) -> f32 {
        let [r, g, b] = [self.r, self.g, self.b].map(Self::linearize);
        0.0722f32.mul_add(b, 0.2126f32.mul_add(r, 0.7152 * g))
    }

    /// WCAG 2.1 contrast ratio, from 1.0 (identical) up to 21.0 (black on white).
    #[must_use]
    pub fn contrast_ratio(&self, other: &Self) -> f32 {
        let a = self.relative_luminance();
        let b = other.relative_luminance();
        (a.max(b) + 0.05) / (a.min(b) + 0.05)
    }

    /// Black or white, whichever reads better on `self`. Ties go to black.
    #[must_use]
    pub fn adaptive_foreground(&self) -> Self {
        if self.contrast_ratio(&Self::BLACK) >= self.contrast_ratio(&Self::WHITE) {
            Self::BLACK
        } else {
            Self::WHITE
        }
    }

    fn linearize(c: f32) -> f32 {
        if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("invalid hex characters")]
    InvalidHex,
    #[error("invalid hex string length (expected 3, 6 or 8)")]
    InvalidLength,
}
