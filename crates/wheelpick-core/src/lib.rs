//! Core types and traits for the wheelpick wheel selector.
//!
//! This crate provides the host-facing primitives the selector is built on:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`]
//! - Color representation: [`Color`] with WCAG contrast calculations
//! - Layout constraints: [`Constraints`]
//! - Input: [`Event`], [`Key`], [`MouseButton`], [`TouchId`]
//! - Rendering: [`Widget`], [`Canvas`], [`RecordingCanvas`]
//! - Side effects: [`HapticFeedback`]

mod brick;
mod canvas;
mod color;
mod constraints;
mod event;
mod geometry;
pub mod haptics;
pub mod widget;

pub use brick::{Brick, BrickAssertion, BrickVerification};
pub use canvas::{DrawCommand, RecordingCanvas};
pub use color::{Color, ColorParseError};
pub use constraints::Constraints;
pub use event::{Event, Key, MouseButton, TouchId};
pub use geometry::{Point, Rect, Size};
pub use haptics::{
    request_impact, HapticError, HapticFeedback, ImpactStyle, NoopHaptics, RecordingHaptics,
};
pub use widget::{
    AccessibleRole, Canvas, LayoutResult, TextAlign, TextStyle, TypeId, Widget,
};
