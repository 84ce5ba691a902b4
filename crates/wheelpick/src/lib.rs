//! Wheelpick: a snapping wheel selector.
//!
//! The wheel pads its items with empty rows so the first and last items
//! can reach the centre, shrinks text with distance from the centre, fades
//! both edges and reports every selection change.
//!
//! ```
//! use wheelpick::prelude::*;
//!
//! let mut picker = WheelPicker::new()
//!     .items(["Apple", "Banana", "Cherry"].map(WheelItem::simple))
//!     .selected_index(0);
//! picker.layout(Rect::new(0.0, 0.0, 150.0, 200.0));
//!
//! let changed = picker.on_scroll_offset(120.0);
//! assert_eq!(changed.map(|c| c.item.label), Some("Banana".to_string()));
//! ```

pub use wheelpick_core::*;
pub use wheelpick_widgets as widgets;

/// Everything needed to build and drive a wheel.
pub mod prelude {
    pub use wheelpick_core::{
        Brick, Canvas, Color, Event, HapticFeedback, ImpactStyle, Key, Point, Rect, Size, Widget,
    };
    pub use wheelpick_widgets::wheel::{
        Platform, RowRenderProps, ScrollCommand, ScrollOptions, SelectedStyle, SelectionChanged,
        WheelItem, WheelPicker, WheelWidth,
    };
    pub use wheelpick_widgets::{ConfigError, WheelConfig, WheelError};
}
