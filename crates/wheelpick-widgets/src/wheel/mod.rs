//! Wheel selector: a snapping vertical list that centres one item.
//!
//! The caller's items are padded with [`SENTINEL_ROWS`] empty rows on each
//! end so the first and last items can reach the centre of a
//! [`VISIBLE_ROWS`]-row viewport. Scroll offsets are measured at the centre
//! line: display row `p` is centred when the offset equals
//! `p * row_height`.
//!
//! ```
//! use wheelpick_widgets::wheel::{pad_items, real_index_for_offset, WheelItem};
//!
//! let items = vec![WheelItem::simple("A"), WheelItem::simple("B"), WheelItem::simple("C")];
//! assert_eq!(pad_items(&items).len(), items.len() + 4);
//! assert_eq!(real_index_for_offset(120.0, 40.0, items.len()), Some(1));
//! ```

mod item;
mod layout;
mod mapper;
mod padding;
mod picker;
mod row;
mod selection;

pub use item::{DisplayRow, WheelItem};
pub use layout::{derive_layout, DerivedLayout, RowMetrics};
pub use mapper::{
    offset_extent, offset_for_index, raw_index, real_index_for_offset, snap_offset, ScrollCommand,
};
pub use padding::{display_index_of, pad_items, real_index_of};
pub use picker::{
    OnChangeFn, Platform, ScrollOptions, SelectedStyle, TouchStartFn, WheelPicker, WheelWidth,
};
pub use row::{center_gap, font_size_for_gap, FontTier, RenderRowFn, RowRenderProps};
pub use selection::{SelectionChanged, SelectionState, Transition};

/// Empty rows placed before and after the real items.
pub const SENTINEL_ROWS: usize = 2;

/// Rows visible in the viewport at once.
pub const VISIBLE_ROWS: usize = 5;

/// Row height when no explicit height is configured.
pub const DEFAULT_ROW_HEIGHT: f32 = 40.0;

/// Viewport height when no explicit height is configured.
pub const DEFAULT_VIEWPORT_HEIGHT: f32 = 200.0;
