//! Test harness for wheelpick widgets.

use std::any::Any;
use std::collections::VecDeque;
use wheelpick_core::{
    Constraints, Event, Key, MouseButton, Point, RecordingCanvas, Rect, Size, TouchId, Widget,
};

/// Intermediate `TouchMove` events emitted by [`Harness::drag`].
pub const DRAG_STEPS: usize = 4;

/// Test harness for interacting with a widget.
pub struct Harness<W: Widget> {
    /// Widget under test
    root: W,
    /// Event queue for simulation
    event_queue: VecDeque<Event>,
    /// Messages returned by the widget, oldest first
    messages: Vec<Box<dyn Any + Send>>,
    /// Current viewport size
    viewport: Rect,
    /// Next touch identifier
    next_touch: u32,
}

impl<W: Widget> Harness<W> {
    /// Create a new harness around a widget.
    pub fn new(root: W) -> Self {
        Self {
            root,
            event_queue: VecDeque::new(),
            messages: Vec::new(),
            viewport: Rect::new(0.0, 0.0, 390.0, 844.0),
            next_touch: 1,
        }
    }

    /// Set the viewport size.
    pub fn viewport(mut self, width: f32, height: f32) -> Self {
        self.viewport = Rect::new(0.0, 0.0, width, height);
        self
    }

    /// The widget under test.
    pub const fn widget(&self) -> &W {
        &self.root
    }

    /// Mutable access for driving the widget directly.
    pub fn widget_mut(&mut self) -> &mut W {
        &mut self.root
    }

    // === Lifecycle ===

    /// Measure against the viewport and lay the widget out at the origin.
    pub fn mount(&mut self) -> &mut Self {
        let size = self
            .root
            .measure(Constraints::loose(self.viewport.size()));
        self.root.layout(Rect::from_size(size));
        self
    }

    /// Re-run layout at the current bounds.
    pub fn relayout(&mut self) -> &mut Self {
        let bounds = self.root.bounds();
        self.root.layout(bounds);
        self
    }

    // === Event Simulation ===

    /// Drag a finger vertically through the widget's horizontal centre.
    pub fn drag(&mut self, from_y: f32, to_y: f32) -> &mut Self {
        let x = self.root.bounds().center().x;
        let id = self.touch_id();
        self.event_queue.push_back(Event::TouchStart {
            id,
            position: Point::new(x, from_y),
        });
        for step in 1..=DRAG_STEPS {
            let t = step as f32 / DRAG_STEPS as f32;
            self.event_queue.push_back(Event::TouchMove {
                id,
                position: Point::new(x, (to_y - from_y).mul_add(t, from_y)),
            });
        }
        self.event_queue.push_back(Event::TouchEnd {
            id,
            position: Point::new(x, to_y),
        });
        self.process_events();
        self
    }

    /// Touch and release at one point.
    pub fn tap(&mut self, position: Point) -> &mut Self {
        let id = self.touch_id();
        self.event_queue.push_back(Event::TouchStart { id, position });
        self.event_queue.push_back(Event::TouchEnd { id, position });
        self.process_events();
        self
    }

    /// Start a touch and cancel it.
    pub fn cancel_touch(&mut self, position: Point) -> &mut Self {
        let id = self.touch_id();
        self.event_queue.push_back(Event::TouchStart { id, position });
        self.event_queue.push_back(Event::TouchCancel { id });
        self.process_events();
        self
    }

    /// Left click at a point.
    pub fn click(&mut self, position: Point) -> &mut Self {
        self.event_queue.push_back(Event::MouseMove { position });
        self.event_queue.push_back(Event::MouseDown {
            position,
            button: MouseButton::Left,
        });
        self.event_queue.push_back(Event::MouseUp {
            position,
            button: MouseButton::Left,
        });
        self.process_events();
        self
    }

    /// Mouse wheel scroll by `delta` notches.
    pub fn scroll(&mut self, delta: f32) -> &mut Self {
        self.event_queue.push_back(Event::Scroll {
            delta_x: 0.0,
            delta_y: delta,
        });
        self.process_events();
        self
    }

    /// Simulate a key press.
    pub fn press_key(&mut self, key: Key) -> &mut Self {
        self.event_queue.push_back(Event::KeyDown { key });
        self.process_events();
        self
    }

    /// Deliver an arbitrary event.
    pub fn send(&mut self, event: Event) -> &mut Self {
        self.event_queue.push_back(event);
        self.process_events();
        self
    }

    // === Messages ===

    /// Messages of type `T` emitted so far.
    pub fn messages<T: 'static>(&self) -> Vec<&T> {
        self.messages
            .iter()
            .filter_map(|m| m.downcast_ref::<T>())
            .collect()
    }

    /// Total messages emitted so far.
    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    /// Forget collected messages.
    pub fn clear_messages(&mut self) -> &mut Self {
        self.messages.clear();
        self
    }

    // === Painting ===

    /// Paint the widget into a fresh recording canvas.
    pub fn paint(&self) -> RecordingCanvas {
        let mut canvas = RecordingCanvas::new();
        self.root.paint(&mut canvas);
        canvas
    }

    /// Text runs drawn by one paint, in order.
    pub fn drawn_texts(&self) -> Vec<String> {
        self.paint()
            .texts()
            .into_iter()
            .map(|(text, _)| text.to_string())
            .collect()
    }

    /// Font size of the first text run equal to `text`.
    pub fn font_size_of(&self, text: &str) -> Option<f32> {
        self.paint()
            .texts()
            .into_iter()
            .find(|(drawn, _)| *drawn == text)
            .map(|(_, style)| style.size)
    }

    // === Assertions ===

    /// Assert `text` is drawn.
    pub fn assert_text_drawn(&self, text: &str) -> &Self {
        let drawn = self.drawn_texts();
        assert!(
            drawn.iter().any(|t| t == text),
            "Expected '{text}' to be drawn, drew {drawn:?}"
        );
        self
    }

    /// Assert `text` is not drawn.
    pub fn assert_text_not_drawn(&self, text: &str) -> &Self {
        let drawn = self.drawn_texts();
        assert!(
            !drawn.iter().any(|t| t == text),
            "Expected '{text}' not to be drawn, drew {drawn:?}"
        );
        self
    }

    /// Assert a paint records no commands.
    pub fn assert_nothing_painted(&self) -> &Self {
        let count = self.paint().command_count();
        assert_eq!(count, 0, "Expected an empty paint, got {count} commands");
        self
    }

    /// Assert the widget reports `id` as its test ID.
    pub fn assert_test_id(&self, id: &str) -> &Self {
        assert_eq!(self.root.test_id(), Some(id), "Test ID mismatch");
        self
    }

    /// Size the widget measured at mount.
    pub fn size(&self) -> Size {
        self.root.bounds().size()
    }

    // === Internal ===

    fn touch_id(&mut self) -> TouchId {
        let id = TouchId::new(self.next_touch);
        self.next_touch += 1;
        id
    }

    fn process_events(&mut self) {
        while let Some(event) = self.event_queue.pop_front() {
            if let Some(message) = self.root.event(&event) {
                self.messages.push(message);
            }
        }
    }
}
