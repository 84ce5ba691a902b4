//! Wheel selector widget for wheelpick.
//!
//! [`WheelPicker`] renders a snapping vertical list that centres one item,
//! fades its edges and reports selection changes. Rows are drawn with the
//! default [`Label`] view unless a custom row painter is supplied.

pub mod config;
pub mod error;
pub mod label;
pub mod wheel;

pub use config::{SelectedStyleConfig, WheelConfig};
pub use error::{ConfigError, Result, WheelError};
pub use label::Label;
pub use wheel::{
    ScrollCommand, SelectionChanged, WheelItem, WheelPicker, WheelWidth, SENTINEL_ROWS,
    VISIBLE_ROWS,
};
