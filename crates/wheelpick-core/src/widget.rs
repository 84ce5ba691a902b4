//! The widget contract the wheel is written against.
//!
//! A host drives each widget through measure, layout, paint and event in
//! that order, and may call [`Brick::verify`] at any point to check the
//! widget can render legibly.
//!
//! # Examples
//!
//! ```
//! use wheelpick_core::{TextAlign, TextStyle, TypeId};
//!
//! let row = TextStyle { size: 20.0, ..TextStyle::default() };
//! assert_eq!(row.align, TextAlign::Center);
//! assert_ne!(TypeId::of::<String>(), TypeId::of::<i32>());
//! ```

use crate::brick::Brick;
use crate::color::Color;
use crate::constraints::Constraints;
use crate::event::Event;
use crate::geometry::{Point, Rect, Size};
use serde::{Deserialize, Serialize};
use std::any::Any;

/// Opaque per-type tag, comparable across trait objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeId(std::any::TypeId);

impl TypeId {
    /// Tag for `T`.
    #[must_use]
    pub fn of<T: 'static>() -> Self {
        Self(std::any::TypeId::of::<T>())
    }
}

/// What `layout` settled on.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutResult {
    /// Final size inside the offered bounds
    pub size: Size,
}

/// A paintable, event-driven element.
pub trait Widget: Brick + Send + Sync {
    /// Tag identifying the concrete widget type.
    fn type_id(&self) -> TypeId;

    /// Preferred size under `constraints`. Must not mutate state.
    fn measure(&self, constraints: Constraints) -> Size;

    /// Accept `bounds`. The first call is where stateful widgets mount.
    fn layout(&mut self, bounds: Rect) -> LayoutResult;

    /// Emit draw calls for the current state.
    fn paint(&self, canvas: &mut dyn Canvas);

    /// React to input. A returned box is a message for the host to downcast.
    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>>;

    /// Whether the host should route input here.
    fn is_interactive(&self) -> bool {
        false
    }

    /// Label announced by assistive technology.
    fn accessible_name(&self) -> Option<&str> {
        None
    }

    /// Semantic role announced by assistive technology.
    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Generic
    }

    /// Stable handle for test lookups.
    fn test_id(&self) -> Option<&str> {
        None
    }

    /// Bounds accepted by the most recent `layout`.
    fn bounds(&self) -> Rect {
        Rect::default()
    }
}

/// Drawing surface supplied by the host.
pub trait Canvas {
    /// Solid fill.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Fill a rectangle with a top-to-bottom linear gradient.
    fn fill_vertical_gradient(&mut self, rect: Rect, top: Color, bottom: Color);

    /// Draw text anchored at `position` (top-left of the line box).
    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle);

    /// Straight stroke from `from` to `to`.
    fn draw_line(&mut self, from: Point, to: Point, color: Color, width: f32);

    /// Restrict drawing to `rect` until the matching `pop_clip`.
    fn push_clip(&mut self, rect: Rect);

    /// Undo the latest `push_clip`.
    fn pop_clip(&mut self);
}

/// Horizontal placement of a row label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    /// Host default, treated as left
    Auto,
    /// Flush left
    Left,
    /// Centred in the row
    #[default]
    Center,
    /// Flush right
    Right,
    /// Single-line justify, drawn centred
    Justify,
}

/// Font parameters for one text run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Pixel size
    pub size: f32,
    /// Fill colour
    pub color: Color,
    /// Horizontal alignment within the line box
    pub align: TextAlign,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: 16.0,
            color: Color::BLACK,
            align: TextAlign::Center,
        }
    }
}

/// Semantic role announced by assistive technology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AccessibleRole {
    /// No particular semantics
    #[default]
    Generic,
    /// Static text
    Text,
    /// Single-choice list
    ListBox,
}
