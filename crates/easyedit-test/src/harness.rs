//! Test harness for driving a single widget.

use easyedit_core::{
    Canvas, Constraints, Event, Key, LifecyclePhase, Message, MouseButton, Point, Rect,
    RecordingCanvas, TouchId, Widget,
};
use std::collections::VecDeque;

/// Test harness for interacting with a widget.
pub struct Harness<W: Widget> {
    /// Widget being tested
    root: W,
    /// Event queue for simulation
    event_queue: VecDeque<Event>,
    /// Messages emitted so far
    messages: Vec<Message>,
    /// Current viewport
    viewport: Rect,
}

impl<W: Widget> Harness<W> {
    /// Create a harness and lay the widget out in a 400x800 viewport.
    pub fn new(root: W) -> Self {
        let mut harness = Self {
            root,
            event_queue: VecDeque::new(),
            messages: Vec::new(),
            viewport: Rect::new(0.0, 0.0, 400.0, 800.0),
        };
        harness.relayout();
        harness
    }

    /// Set the viewport size and lay the widget out again.
    #[must_use]
    pub fn viewport(mut self, width: f32, height: f32) -> Self {
        self.viewport = Rect::new(0.0, 0.0, width, height);
        self.relayout();
        self
    }

    /// The widget under test.
    pub const fn widget(&self) -> &W {
        &self.root
    }

    /// Mutable access to the widget, e.g. to register listeners.
    pub fn widget_mut(&mut self) -> &mut W {
        &mut self.root
    }

    /// Bounds assigned to the widget.
    pub fn bounds(&self) -> Rect {
        self.root.bounds()
    }

    // === Lifecycle ===

    /// Attach the widget.
    pub fn mount(&mut self) -> &mut Self {
        self.root.lifecycle(LifecyclePhase::Attached);
        self
    }

    /// Detach the widget.
    pub fn unmount(&mut self) -> &mut Self {
        self.root.lifecycle(LifecyclePhase::Detached);
        self
    }

    // === Event Simulation ===

    /// Give the widget keyboard focus.
    pub fn focus(&mut self) -> &mut Self {
        self.send(Event::FocusIn)
    }

    /// Take keyboard focus away.
    pub fn blur(&mut self) -> &mut Self {
        self.send(Event::FocusOut)
    }

    /// Focus the widget and type `text` one character at a time.
    pub fn type_text(&mut self, text: &str) -> &mut Self {
        self.event_queue.push_back(Event::FocusIn);
        for c in text.chars() {
            self.event_queue.push_back(Event::TextInput {
                text: c.to_string(),
            });
        }
        self.process_events();
        self
    }

    /// Focus the widget and insert `text` as a single input event.
    pub fn paste(&mut self, text: &str) -> &mut Self {
        self.event_queue.push_back(Event::FocusIn);
        self.event_queue.push_back(Event::TextInput {
            text: text.to_string(),
        });
        self.process_events();
        self
    }

    /// Simulate a key press.
    pub fn press_key(&mut self, key: Key) -> &mut Self {
        self.event_queue.push_back(Event::KeyDown { key });
        self.event_queue.push_back(Event::KeyUp { key });
        self.process_events();
        self
    }

    /// Press backspace `times` times.
    pub fn backspace(&mut self, times: usize) -> &mut Self {
        for _ in 0..times {
            self.event_queue.push_back(Event::KeyDown {
                key: Key::Backspace,
            });
        }
        self.process_events();
        self
    }

    /// Click at `position`.
    pub fn tap(&mut self, position: Point) -> &mut Self {
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

    /// Touch at `position`.
    pub fn touch(&mut self, position: Point) -> &mut Self {
        let id = TouchId(0);
        self.event_queue
            .push_back(Event::TouchStart { id, position });
        self.event_queue.push_back(Event::TouchEnd { id, position });
        self.process_events();
        self
    }

    /// Click `inset` units left of the widget's right edge, vertically centered.
    pub fn tap_from_right(&mut self, inset: f32) -> &mut Self {
        let bounds = self.root.bounds();
        self.tap(Point::new(bounds.right() - inset, bounds.center().y))
    }

    /// Click just inside the widget's right edge.
    pub fn tap_trailing_edge(&mut self) -> &mut Self {
        self.tap_from_right(1.0)
    }

    /// Deliver a single event.
    pub fn send(&mut self, event: Event) -> &mut Self {
        self.event_queue.push_back(event);
        self.process_events();
        self
    }

    // === Messages ===

    /// All messages emitted so far.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Messages of type `T`, oldest first.
    pub fn messages_of<T: 'static>(&self) -> Vec<&T> {
        self.messages
            .iter()
            .filter_map(|message| message.downcast_ref::<T>())
            .collect()
    }

    /// The most recent message of type `T`.
    pub fn last_message<T: 'static>(&self) -> Option<&T> {
        self.messages
            .iter()
            .rev()
            .find_map(|message| message.downcast_ref::<T>())
    }

    /// Drain all collected messages.
    pub fn take_messages(&mut self) -> Vec<Message> {
        std::mem::take(&mut self.messages)
    }

    // === Rendering ===

    /// Paint the widget into a fresh recording canvas.
    pub fn paint(&self) -> RecordingCanvas {
        let mut canvas = RecordingCanvas::new();
        self.root.paint(&mut canvas as &mut dyn Canvas);
        canvas
    }

    // === Assertions ===

    /// Assert that exactly `expected` messages of type `T` were emitted.
    ///
    /// # Panics
    ///
    /// Panics if the count does not match.
    pub fn assert_message_count<T: 'static>(&self, expected: usize) -> &Self {
        let actual = self.messages_of::<T>().len();
        assert_eq!(
            actual,
            expected,
            "Expected {expected} messages of type {} but found {actual}",
            std::any::type_name::<T>()
        );
        self
    }

    /// Assert that painting draws exactly `expected` as its trailing icon.
    ///
    /// # Panics
    ///
    /// Panics if the painted icons differ.
    pub fn assert_icon(&self, expected: Option<&str>) -> &Self {
        let canvas = self.paint();
        let icons = canvas.icons();
        let expected: Vec<&str> = expected.into_iter().collect();
        assert_eq!(
            icons, expected,
            "Expected icon {expected:?} but painted {icons:?}"
        );
        self
    }

    /// Assert that painting draws `expected` as text.
    ///
    /// # Panics
    ///
    /// Panics if no painted text matches.
    pub fn assert_painted_text(&self, expected: &str) -> &Self {
        let canvas = self.paint();
        let texts = canvas.texts();
        assert!(
            texts.contains(&expected),
            "Expected painted text '{expected}' but got {texts:?}"
        );
        self
    }

    // === Internal ===

    fn relayout(&mut self) {
        let size = self.root.measure(Constraints::loose(self.viewport.size()));
        self.root.layout(Rect::new(
            self.viewport.x,
            self.viewport.y,
            self.viewport.width,
            size.height,
        ));
    }

    fn process_events(&mut self) {
        while let Some(event) = self.event_queue.pop_front() {
            if let Some(message) = self.root.event(&event) {
                self.messages.push(message);
            }
        }
    }
}
