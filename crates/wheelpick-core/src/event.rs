//! Input events delivered by the host to widgets.
//!
//! The wheel only cares about the vertical axis: finger drags and mouse
//! wheel notches move the scroll offset, taps and clicks pick a row, and
//! arrow keys step one item at a time.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Pointer, touch and keyboard input in widget coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// Pointer hover.
    MouseMove {
        /// Pointer location
        position: Point,
    },
    /// Button went down over the widget.
    MouseDown {
        /// Pointer location at press
        position: Point,
        /// Which button
        button: MouseButton,
    },
    /// Button came back up.
    MouseUp {
        /// Pointer location at release
        position: Point,
        /// Which button
        button: MouseButton,
    },
    /// Wheel or trackpad scroll.
    Scroll {
        /// Sideways notches, ignored by vertical widgets
        delta_x: f32,
        /// Vertical notches; positive moves toward later items
        delta_y: f32,
    },
    /// Keyboard press while focused.
    KeyDown {
        /// The key
        key: Key,
    },
    /// Keyboard focus arrived.
    FocusIn,
    /// Keyboard focus left.
    FocusOut,
    /// A finger landed.
    TouchStart {
        /// Finger identity for the rest of the gesture
        id: TouchId,
        /// Contact point
        position: Point,
    },
    /// A finger slid.
    TouchMove {
        /// Finger identity
        id: TouchId,
        /// Current contact point
        position: Point,
    },
    /// A finger lifted.
    TouchEnd {
        /// Finger identity
        id: TouchId,
        /// Last contact point
        position: Point,
    },
    /// The host aborted the gesture.
    TouchCancel {
        /// Finger identity
        id: TouchId,
    },
    /// Tap recognised by the host gesture system.
    GestureTap {
        /// Where the tap landed
        position: Point,
    },
}

impl Event {
    /// True for the four raw touch phases. `GestureTap` is not included.
    #[must_use]
    pub const fn is_touch(&self) -> bool {
        matches!(
            self,
            Self::TouchStart { .. }
                | Self::TouchMove { .. }
                | Self::TouchEnd { .. }
                | Self::TouchCancel { .. }
        )
    }

    /// Location attached to the event. Keys, focus, scroll and cancel carry none.
    #[must_use]
    pub const fn position(&self) -> Option<Point> {
        match self {
            Self::MouseMove { position }
            | Self::MouseDown { position, .. }
            | Self::MouseUp { position, .. }
            | Self::TouchStart { position, .. }
            | Self::TouchMove { position, .. }
            | Self::TouchEnd { position, .. }
            | Self::GestureTap { position } => Some(*position),
            Self::Scroll { .. }
            | Self::KeyDown { .. }
            | Self::FocusIn
            | Self::FocusOut
            | Self::TouchCancel { .. } => None,
        }
    }
}

/// Identifies one finger across its start, moves and end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct TouchId(pub u32);

impl TouchId {
    /// Wrap a host finger id.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

/// Pointer buttons. Only `Left` selects rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    /// Primary
    Left,
    /// Secondary
    Right,
    /// Wheel click
    Middle,
}

/// Keyboard keys the wheel reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Previous item
    Up,
    /// Next item
    Down,
    /// First item
    Home,
    /// Last item
    End,
    /// Enter / Return
    Enter,
    /// Escape
    Escape,
}
