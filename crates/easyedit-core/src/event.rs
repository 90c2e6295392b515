//! Input events for widgets.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Input event types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// Mouse button pressed
    MouseDown {
        /// Position of click
        position: Point,
        /// Button pressed
        button: MouseButton,
    },
    /// Mouse button released
    MouseUp {
        /// Position of release
        position: Point,
        /// Button released
        button: MouseButton,
    },
    /// Key pressed
    KeyDown {
        /// Key pressed
        key: Key,
    },
    /// Key released
    KeyUp {
        /// Key released
        key: Key,
    },
    /// Text input received
    TextInput {
        /// Input text
        text: String,
    },
    /// Widget gained focus
    FocusIn,
    /// Widget lost focus
    FocusOut,
    /// Touch started
    TouchStart {
        /// Touch identifier
        id: TouchId,
        /// Touch position
        position: Point,
    },
    /// Touch ended
    TouchEnd {
        /// Touch identifier
        id: TouchId,
        /// Final position
        position: Point,
    },
    /// Pointer down
    PointerDown {
        /// Pointer ID
        pointer_id: PointerId,
        /// Pointer type
        pointer_type: PointerType,
        /// Position
        position: Point,
    },
    /// Pointer up
    PointerUp {
        /// Pointer ID
        pointer_id: PointerId,
        /// Pointer type
        pointer_type: PointerType,
        /// Position
        position: Point,
    },
}

impl Event {
    /// Position of a press (mouse down, touch start, pointer down).
    #[must_use]
    pub const fn press_position(&self) -> Option<Point> {
        match self {
            Self::MouseDown { position, .. }
            | Self::TouchStart { position, .. }
            | Self::PointerDown { position, .. } => Some(*position),
            _ => None,
        }
    }

    /// Position of a release (mouse up, touch end, pointer up).
    #[must_use]
    pub const fn release_position(&self) -> Option<Point> {
        match self {
            Self::MouseUp { position, .. }
            | Self::TouchEnd { position, .. }
            | Self::PointerUp { position, .. } => Some(*position),
            _ => None,
        }
    }
}

/// Touch identifier for multi-touch tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct TouchId(pub u32);

/// Pointer identifier for pointer events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct PointerId(pub u32);

/// Type of pointer device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PointerType {
    /// Mouse pointer
    #[default]
    Mouse,
    /// Touch pointer
    Touch,
    /// Pen/stylus pointer
    Pen,
}

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button (wheel click)
    Middle,
}

/// Keyboard key identifiers relevant to text editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Backspace key
    Backspace,
    /// Delete key
    Delete,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
    /// Home key
    Home,
    /// End key
    End,
    /// Enter / Return key
    Enter,
    /// Tab key
    Tab,
    /// Escape key
    Escape,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_position() {
        let p = Point::new(3.0, 4.0);
        let events = [
            Event::MouseUp {
                position: p,
                button: MouseButton::Left,
            },
            Event::TouchEnd {
                id: TouchId(1),
                position: p,
            },
            Event::PointerUp {
                pointer_id: PointerId(7),
                pointer_type: PointerType::Touch,
                position: p,
            },
        ];
        for event in &events {
            assert_eq!(event.release_position(), Some(p));
            assert_eq!(event.press_position(), None);
        }
    }

    #[test]
    fn test_press_position() {
        let p = Point::new(1.0, 1.0);
        let event = Event::TouchStart {
            id: TouchId(0),
            position: p,
        };
        assert_eq!(event.press_position(), Some(p));
        assert_eq!(event.release_position(), None);
        assert_eq!(Event::FocusIn.release_position(), None);
    }

    #[test]
    fn test_pointer_type_default() {
        assert_eq!(PointerType::default(), PointerType::Mouse);
    }
}
