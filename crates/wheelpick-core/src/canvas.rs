//! Recording canvas for tests and headless hosts.
//!
//! Every call on [`RecordingCanvas`] becomes a [`DrawCommand`], so a paint
//! pass can be inspected after the fact: which labels were drawn at which
//! size, where the fade overlays sit, where the border lines run.

use crate::widget::{Canvas, TextStyle};
use crate::{Color, Point, Rect};
use serde::{Deserialize, Serialize};

/// One paint call, as recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Row background or widget background.
    FillRect {
        /// Area covered
        bounds: Rect,
        /// Solid colour
        color: Color,
    },
    /// Fade overlay.
    Gradient {
        /// Area covered
        bounds: Rect,
        /// Colour at the top edge
        top: Color,
        /// Colour at the bottom edge
        bottom: Color,
    },
    /// Label run.
    Text {
        /// The characters drawn
        content: String,
        /// Top-left of the line box
        position: Point,
        /// Size, colour and alignment
        style: TextStyle,
    },
    /// Border or indicator stroke.
    Line {
        /// First endpoint
        from: Point,
        /// Second endpoint
        to: Point,
        /// Stroke colour
        color: Color,
        /// Stroke thickness
        width: f32,
    },
}

/// A [`Canvas`] that keeps what it is told instead of rasterising.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
    clip_stack: Vec<Rect>,
}

impl RecordingCanvas {
    /// Empty canvas with no clip pushed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything drawn so far, in paint order.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Clips still open. A balanced paint leaves this at zero.
    #[must_use]
    pub fn clip_depth(&self) -> usize {
        self.clip_stack.len()
    }

    /// Label runs with their styles, in paint order.
    #[must_use]
    pub fn texts(&self) -> Vec<(&str, &TextStyle)> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Text { content, style, .. } => Some((content.as_str(), style)),
                _ => None,
            })
            .collect()
    }

    /// Gradient fills as `(bounds, top, bottom)`, in paint order.
    #[must_use]
    pub fn gradients(&self) -> Vec<(Rect, Color, Color)> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Gradient {
                    bounds,
                    top,
                    bottom,
                } => Some((*bounds, *top, *bottom)),
                _ => None,
            })
            .collect()
    }

    /// Line strokes as `(from, to, color)`, in paint order.
    #[must_use]
    pub fn lines(&self) -> Vec<(Point, Point, Color)> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Line {
                    from, to, color, ..
                } => Some((*from, *to, *color)),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect {
            bounds: rect,
            color,
        });
    }

    fn fill_vertical_gradient(&mut self, rect: Rect, top: Color, bottom: Color) {
        self.commands.push(DrawCommand::Gradient {
            bounds: rect,
            top,
            bottom,
        });
    }

    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle) {
        self.commands.push(DrawCommand::Text {
            content: text.to_owned(),
            position,
            style: style.clone(),
        });
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Color, width: f32) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            color,
            width,
        });
    }

    fn push_clip(&mut self, rect: Rect) {
        self.clip_stack.push(rect);
    }

    fn pop_clip(&mut self) {
        self.clip_stack.pop();
    }
}
