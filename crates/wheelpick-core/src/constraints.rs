//! Size limits handed down from the host at measure time.
//!
//! A wheel asks for `5 * row_height` vertically; a `fill` width takes
//! whatever [`Constraints::biggest_width`] offers.

use crate::geometry::Size;
use serde::{Deserialize, Serialize};

/// Minimum and maximum sizes a parent allows a child to take.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Constraints {
    /// Narrowest acceptable width
    pub min_width: f32,
    /// Widest acceptable width, possibly infinite
    pub max_width: f32,
    /// Shortest acceptable height
    pub min_height: f32,
    /// Tallest acceptable height, possibly infinite
    pub max_height: f32,
}

impl Constraints {
    #[must_use]
    pub const fn new(min_width: f32, max_width: f32, min_height: f32, max_height: f32) -> Self {
        Self {
            min_width,
            max_width,
            min_height,
            max_height,
        }
    }

    /// Pin both axes to `size`.
    #[must_use]
    pub const fn tight(size: Size) -> Self {
        Self::new(size.width, size.width, size.height, size.height)
    }

    /// Anything from zero up to `size`.
    #[must_use]
    pub const fn loose(size: Size) -> Self {
        Self::new(0.0, size.width, 0.0, size.height)
    }

    /// No upper bound in either direction.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self::new(0.0, f32::INFINITY, 0.0, f32::INFINITY)
    }

    /// Clamp `size` into range on each axis.
    #[must_use]
    pub fn constrain(&self, size: Size) -> Size {
        Size::new(
            size.width.clamp(self.min_width, self.max_width),
            size.height.clamp(self.min_height, self.max_height),
        )
    }

    /// Whether a `fill` width has something finite to fill.
    #[must_use]
    pub fn has_bounded_width(&self) -> bool {
        self.max_width.is_finite()
    }

    /// Largest width allowed, falling back to the minimum when unbounded.
    #[must_use]
    pub fn biggest_width(&self) -> f32 {
        if self.has_bounded_width() {
            self.max_width
        } else {
            self.min_width
        }
    }
}

impl Default for Constraints {
    fn default() -> Self {
        Self::unbounded()
    }
}
