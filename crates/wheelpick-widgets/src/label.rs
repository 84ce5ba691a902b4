//! Single-line label, the default content of a wheel row.

use serde::{Deserialize, Serialize};
use std::any::Any;
use std::time::Instant;
use wheelpick_core::{
    AccessibleRole, Brick, BrickAssertion, BrickVerification, Canvas, Color, Constraints, Event,
    LayoutResult, Point, Rect, Size, TextAlign, TextStyle, TypeId, Widget,
};

const ASSERTIONS: &[BrickAssertion] = &[
    BrickAssertion::TextVisible,
    BrickAssertion::MaxLatencyMs(16),
];

/// Average glyph advance as a fraction of the font size.
const CHAR_WIDTH_EM: f32 = 0.6;

/// Single-line text aligned inside its bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    content: String,
    font_size: f32,
    color: Color,
    align: TextAlign,
    #[serde(skip)]
    bounds: Rect,
}

impl Label {
    /// Create a label.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            font_size: 16.0,
            color: Color::BLACK,
            align: TextAlign::Center,
            bounds: Rect::default(),
        }
    }

    /// Set font size.
    #[must_use]
    pub const fn font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    /// Set text color.
    #[must_use]
    pub const fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set horizontal alignment.
    #[must_use]
    pub const fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    /// The text content.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Estimated single-line size (no font metrics available).
    fn estimate_size(&self) -> Size {
        let width = self.content.chars().count() as f32 * self.font_size * CHAR_WIDTH_EM;
        Size::new(width, self.font_size)
    }

    /// Top-left anchor for the text run inside the bounds.
    fn anchor(&self) -> Point {
        let text = self.estimate_size();
        let y = self.bounds.y + (self.bounds.height - text.height) / 2.0;
        let x = match self.align {
            TextAlign::Center | TextAlign::Justify => {
                self.bounds.x + (self.bounds.width - text.width) / 2.0
            }
            TextAlign::Right => self.bounds.right() - text.width,
            TextAlign::Auto | TextAlign::Left => self.bounds.x,
        };
        Point::new(x, y)
    }
}

impl Widget for Label {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        constraints.constrain(self.estimate_size())
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        if self.content.is_empty() {
            return;
        }
        let style = TextStyle {
            size: self.font_size,
            color: self.color,
            align: self.align,
            ..TextStyle::default()
        };
        canvas.draw_text(&self.content, self.anchor(), &style);
    }

    fn event(&mut self, _event: &Event) -> Option<Box<dyn Any + Send>> {
        None
    }

    fn accessible_name(&self) -> Option<&str> {
        Some(&self.content)
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Text
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}

impl Brick for Label {
    fn brick_name(&self) -> &'static str {
        "Label"
    }

    fn assertions(&self) -> &[BrickAssertion] {
        ASSERTIONS
    }

    fn verify(&self) -> BrickVerification {
        let started = Instant::now();
        let mut passed = Vec::new();
        let mut failed = Vec::new();

        if self.content.is_empty() || self.color.a == 0.0 {
            failed.push((BrickAssertion::TextVisible, "label is not visible".into()));
        } else {
            passed.push(BrickAssertion::TextVisible);
        }
        passed.push(BrickAssertion::MaxLatencyMs(16));

        BrickVerification {
            passed,
            failed,
            verification_time: started.elapsed(),
        }
    }

    fn to_html(&self) -> String {
        format!(
            r#"<span class="brick-label">{}</span>"#,
            escape_html(&self.content)
        )
    }

    fn to_css(&self) -> String {
        format!(
            ".brick-label {{ color: {}; font-size: {}px; text-align: {}; }}",
            self.color.to_hex(),
            self.font_size,
            css_align(self.align)
        )
    }
}

pub(crate) const fn css_align(align: TextAlign) -> &'static str {
    match align {
        TextAlign::Auto => "start",
        TextAlign::Left => "left",
        TextAlign::Center => "center",
        TextAlign::Right => "right",
        TextAlign::Justify => "justify",
    }
}

pub(crate) fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
