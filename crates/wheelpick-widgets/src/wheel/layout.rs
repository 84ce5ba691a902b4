//! Row and viewport sizing.

use super::item::{DisplayRow, WheelItem};
use super::padding::pad_items;
use super::{DEFAULT_ROW_HEIGHT, DEFAULT_VIEWPORT_HEIGHT, SENTINEL_ROWS, VISIBLE_ROWS};

/// Row and viewport heights.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowMetrics {
    /// Height of one row
    pub row_height: f32,
    /// Height of the visible window
    pub viewport_height: f32,
}

impl RowMetrics {
    /// Size rows from an optional explicit pixel height.
    ///
    /// With `Some(h)` the viewport is `h` and each row `h / 5`. Non-positive
    /// or non-finite heights are not rejected here; the layout they produce
    /// is unspecified.
    #[must_use]
    pub fn for_height(height: Option<f32>) -> Self {
        match height {
            Some(h) => Self {
                row_height: h / VISIBLE_ROWS as f32,
                viewport_height: h,
            },
            None => Self::default(),
        }
    }

    /// Font size of the centred row.
    #[must_use]
    pub fn base_font_size(&self) -> f32 {
        self.row_height / 2.0
    }

    /// Height of each edge overlay (the rows above or below the centre).
    #[must_use]
    pub fn overlay_height(&self) -> f32 {
        SENTINEL_ROWS as f32 * self.row_height
    }
}

impl Default for RowMetrics {
    fn default() -> Self {
        Self {
            row_height: DEFAULT_ROW_HEIGHT,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
        }
    }
}

/// Everything derived from `(items, height)`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DerivedLayout {
    /// Padded rows
    pub display: Vec<DisplayRow>,
    /// Row sizing
    pub metrics: RowMetrics,
}

impl DerivedLayout {
    /// Check if there is nothing to render.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.display.is_empty()
    }
}

/// Recompute the display sequence and sizing. Re-run whenever the items or
/// the height change.
#[must_use]
pub fn derive_layout(items: &[WheelItem], height: Option<f32>) -> DerivedLayout {
    let layout = DerivedLayout {
        display: pad_items(items),
        metrics: RowMetrics::for_height(height),
    };
    log::debug!(
        "wheel layout derived: {} rows, row height {}, viewport {}",
        layout.display.len(),
        layout.metrics.row_height,
        layout.metrics.viewport_height
    );
    layout
}
