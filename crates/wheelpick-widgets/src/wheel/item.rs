//! Items and the padded rows built from them.

use serde::{Deserialize, Serialize};
use serde_json::Value;

static NULL: Value = Value::Null;

/// One selectable entry.
///
/// `value` is opaque to the wheel and handed back untouched in
/// selection messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WheelItem {
    /// Display label
    pub label: String,
    /// Caller-defined payload
    #[serde(default)]
    pub value: Value,
}

impl WheelItem {
    /// Create an item with an explicit value.
    #[must_use]
    pub fn new(label: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    /// Create an item whose value is its label.
    #[must_use]
    pub fn simple(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            value: Value::String(label.clone()),
            label,
        }
    }
}

/// A row of the display sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayRow {
    /// Empty padding row (label `""`, value `null`)
    Sentinel,
    /// A real item with its index in the caller's collection
    Item {
        /// Real index
        index: usize,
        /// The item
        item: WheelItem,
    },
}

impl DisplayRow {
    /// Label to draw; empty for sentinels.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Sentinel => "",
            Self::Item { item, .. } => &item.label,
        }
    }

    /// Value carried by the row; `null` for sentinels.
    #[must_use]
    pub fn value(&self) -> &Value {
        match self {
            Self::Sentinel => &NULL,
            Self::Item { item, .. } => &item.value,
        }
    }

    /// Real index, `None` for sentinels.
    #[must_use]
    pub const fn real_index(&self) -> Option<usize> {
        match self {
            Self::Sentinel => None,
            Self::Item { index, .. } => Some(*index),
        }
    }

    /// Check if this is a padding row.
    #[must_use]
    pub const fn is_sentinel(&self) -> bool {
        matches!(self, Self::Sentinel)
    }
}
