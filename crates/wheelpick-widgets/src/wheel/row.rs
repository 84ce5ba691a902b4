//! Per-row text sizing and painting.

use super::item::DisplayRow;
use super::SENTINEL_ROWS;
use crate::label::Label;
use serde::{Deserialize, Serialize};
use wheelpick_core::{Canvas, Color, Rect, TextAlign, Widget};

/// Caller-supplied row painter.
///
/// Receives the computed props and the row rectangle; draws in place of the
/// default [`Label`]. The row background is already filled.
pub type RenderRowFn = Box<dyn Fn(&RowRenderProps, Rect, &mut dyn Canvas) + Send + Sync>;

/// Distance of display row `display_index` from the centred row.
#[must_use]
pub const fn center_gap(display_index: usize, selected_index: usize) -> usize {
    display_index.abs_diff(selected_index + SENTINEL_ROWS)
}

/// Text size tier by distance from the centre.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FontTier {
    /// The centred row
    Centered,
    /// One row away
    Adjacent,
    /// Two or more rows away
    Distant,
}

impl FontTier {
    /// Tier for a gap.
    #[must_use]
    pub const fn from_gap(gap: usize) -> Self {
        match gap {
            0 => Self::Centered,
            1 => Self::Adjacent,
            _ => Self::Distant,
        }
    }

    /// Divisor applied to the base font size.
    #[must_use]
    pub const fn divisor(self) -> f32 {
        match self {
            Self::Centered => 1.0,
            Self::Adjacent => 1.5,
            Self::Distant => 2.0,
        }
    }
}

/// Font size for a row `gap` rows from the centre.
#[must_use]
pub fn font_size_for_gap(base_font_size: f32, gap: usize) -> f32 {
    base_font_size / FontTier::from_gap(gap).divisor()
}

/// Inputs handed to a row painter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowRenderProps {
    /// Tiered font size
    pub font_size: f32,
    /// Foreground readable on the wheel background
    pub font_color: Color,
    /// Row label, empty for sentinels
    pub label: String,
    /// Always centred
    pub text_align: TextAlign,
}

/// Props for display row `display_index` of the wheel.
pub(crate) fn row_props(
    row: &DisplayRow,
    display_index: usize,
    selected_index: usize,
    base_font_size: f32,
    background: Color,
) -> RowRenderProps {
    RowRenderProps {
        font_size: font_size_for_gap(base_font_size, center_gap(display_index, selected_index)),
        font_color: background.adaptive_foreground(),
        label: row.label().to_string(),
        text_align: TextAlign::Center,
    }
}

/// Fill the row background, then draw its content.
pub(crate) fn paint_row(
    canvas: &mut dyn Canvas,
    rect: Rect,
    background: Color,
    props: &RowRenderProps,
    render_row: Option<&RenderRowFn>,
) {
    canvas.fill_rect(rect, background);
    if let Some(render) = render_row {
        render(props, rect, canvas);
        return;
    }

    let mut label = Label::new(props.label.as_str())
        .font_size(props.font_size)
        .color(props.font_color)
        .align(props.text_align);
    label.layout(rect);
    label.paint(canvas);
}
