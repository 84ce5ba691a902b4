#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::manual_assert)]
//! Headless test harness for wheelpick widgets.
//!
//! Drives a widget with touch drags, taps, wheel scrolls and key presses,
//! collects the messages it emits, and paints it into a
//! [`RecordingCanvas`](wheelpick_core::RecordingCanvas) for assertions on
//! drawn text.
//!
//! ```ignore
//! let mut harness = Harness::new(picker).viewport(150.0, 200.0);
//! harness.mount().drag(100.0, 60.0);
//! harness.assert_text_drawn("B");
//! ```

mod harness;

pub use harness::{Harness, DRAG_STEPS};
