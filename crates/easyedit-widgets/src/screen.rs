//! Screen: a vertical stack of [`EasyEdit`] fields built from a layout file.

use crate::edit::EasyEdit;
use easyedit_core::{
    widget::LayoutResult, Canvas, Constraints, Event, LifecyclePhase, Message, Rect, Size, TypeId,
    Widget,
};
use easyedit_yaml::{Layout, ParseError};
use tracing::debug;

/// Message from one field of a [`Screen`].
pub struct FieldMessage {
    /// Id of the field that emitted the message, if it has one
    pub field: Option<String>,
    /// The field's own message
    pub message: Message,
}

impl FieldMessage {
    /// Downcast the inner message.
    #[must_use]
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.message.downcast_ref::<T>()
    }
}

impl std::fmt::Debug for FieldMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldMessage")
            .field("field", &self.field)
            .finish_non_exhaustive()
    }
}

/// Vertical stack of text fields.
///
/// Press and release events reach every field; each one decides for itself
/// whether the position is inside it. Keyboard and text input only reach the
/// focused field.
pub struct Screen {
    name: String,
    title: Option<String>,
    gap: f32,
    fields: Vec<EasyEdit>,
    bounds: Rect,
}

impl Screen {
    /// Create an empty screen.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: None,
            gap: 8.0,
            fields: Vec::new(),
            bounds: Rect::default(),
        }
    }

    /// Build a screen with one field per layout entry.
    #[must_use]
    pub fn from_layout(layout: &Layout) -> Self {
        let mut screen = Self::new(layout.name.clone());
        screen.title.clone_from(&layout.title);
        screen.fields = layout.fields.iter().map(EasyEdit::from_attributes).collect();
        debug!(screen = %screen.name, fields = screen.fields.len(), "built screen");
        screen
    }

    /// Parse a layout file and build its screen.
    pub fn from_yaml(yaml: &str) -> Result<Self, ParseError> {
        Ok(Self::from_layout(&Layout::from_yaml(yaml)?))
    }

    /// Set the title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the gap between fields.
    #[must_use]
    pub fn gap(mut self, gap: f32) -> Self {
        self.gap = gap.max(0.0);
        self
    }

    /// Append a field.
    #[must_use]
    pub fn field(mut self, field: EasyEdit) -> Self {
        self.fields.push(field);
        self
    }

    /// Screen name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Screen title.
    #[must_use]
    pub fn get_title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// All fields, top to bottom.
    #[must_use]
    pub fn fields(&self) -> &[EasyEdit] {
        &self.fields
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the screen has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field with the given id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&EasyEdit> {
        self.fields.iter().find(|field| field.test_id() == Some(id))
    }

    /// Mutable field with the given id, for wiring listeners.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut EasyEdit> {
        self.fields
            .iter_mut()
            .find(|field| field.test_id() == Some(id))
    }

    /// The focused field, if any.
    #[must_use]
    pub fn focused(&self) -> Option<&EasyEdit> {
        self.fields.iter().find(|field| field.is_focused())
    }

    fn wrap(field: &EasyEdit, message: Message) -> Message {
        Box::new(FieldMessage {
            field: field.test_id().map(str::to_owned),
            message,
        })
    }
}

impl Widget for Screen {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        if self.fields.is_empty() {
            return Size::ZERO;
        }

        let mut max_width = 0.0f32;
        let mut total_height = 0.0f32;
        for (i, field) in self.fields.iter().enumerate() {
            let size = field.measure(Constraints::new(
                0.0,
                constraints.max_width,
                0.0,
                (constraints.max_height - total_height).max(0.0),
            ));
            max_width = max_width.max(size.width);
            total_height += size.height;
            if i + 1 < self.fields.len() {
                total_height += self.gap;
            }
        }

        constraints.constrain(Size::new(max_width, total_height))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        let mut y = bounds.y;
        for field in &mut self.fields {
            let size = field.measure(Constraints::loose(bounds.size()));
            field.layout(Rect::new(bounds.x, y, bounds.width, size.height));
            y += size.height + self.gap;
        }
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        for field in &self.fields {
            field.paint(canvas);
        }
    }

    fn event(&mut self, event: &Event) -> Option<Message> {
        let broadcast = event.press_position().is_some()
            || event.release_position().is_some()
            || matches!(event, Event::FocusOut);

        let mut result = None;
        for field in &mut self.fields {
            if !broadcast && !field.is_focused() {
                continue;
            }
            if let Some(message) = field.event(event) {
                if result.is_none() {
                    result = Some(Self::wrap(field, message));
                }
            }
        }
        result
    }

    fn lifecycle(&mut self, phase: LifecyclePhase) {
        debug!(screen = %self.name, ?phase, "screen lifecycle");
        for field in &mut self.fields {
            field.lifecycle(phase);
        }
    }

    fn test_id(&self) -> Option<&str> {
        Some(&self.name)
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edit::ContentCleared;
    use easyedit_core::{Key, MouseButton, Point, RecordingCanvas};

    const LAYOUT: &str = r#"
name: sample
title: Sample
fields:
  - id: etMax
    max-length: 5
  - id: etClear
    show-clear-button: true
    text: remove me
  - id: etPwd
    input-type: password
    show-password-toggle: true
"#;

    fn laid_out() -> Screen {
        let mut screen = Screen::from_yaml(LAYOUT).unwrap();
        screen.layout(Rect::new(0.0, 0.0, 400.0, 300.0));
        screen
    }

    fn click(screen: &mut Screen, x: f32, y: f32) -> Option<Message> {
        screen.event(&Event::MouseDown {
            position: Point::new(x, y),
            button: MouseButton::Left,
        });
        screen.event(&Event::MouseUp {
            position: Point::new(x, y),
            button: MouseButton::Left,
        })
    }

    #[test]
    fn test_screen_from_yaml() {
        let screen = Screen::from_yaml(LAYOUT).unwrap();
        assert_eq!(screen.name(), "sample");
        assert_eq!(screen.get_title(), Some("Sample"));
        assert_eq!(screen.len(), 3);
        assert_eq!(screen.get("etMax").unwrap().get_max_length(), Some(5));
        assert!(screen.get("missing").is_none());
    }

    #[test]
    fn test_screen_from_yaml_error() {
        assert!(Screen::from_yaml("name: [").is_err());
    }

    #[test]
    fn test_screen_layout_stacks_fields() {
        let screen = laid_out();
        let bounds: Vec<Rect> = screen.fields().iter().map(Widget::bounds).collect();
        assert_eq!(bounds[0], Rect::new(0.0, 0.0, 400.0, 40.0));
        assert_eq!(bounds[1], Rect::new(0.0, 48.0, 400.0, 40.0));
        assert_eq!(bounds[2], Rect::new(0.0, 96.0, 400.0, 40.0));
    }

    #[test]
    fn test_screen_measure() {
        let screen = Screen::from_yaml(LAYOUT).unwrap();
        let size = screen.measure(Constraints::loose(Size::new(400.0, 600.0)));
        assert_eq!(size.height, 3.0 * 40.0 + 2.0 * 8.0);
    }

    #[test]
    fn test_screen_typing_reaches_focused_field_only() {
        let mut screen = laid_out();
        click(&mut screen, 10.0, 10.0);
        assert_eq!(screen.focused().and_then(Widget::test_id), Some("etMax"));

        for c in "abcdefg".chars() {
            screen.event(&Event::TextInput {
                text: c.to_string(),
            });
        }

        assert_eq!(screen.get("etMax").unwrap().value(), "abcde");
        assert_eq!(screen.get("etClear").unwrap().value(), "remove me");
    }

    #[test]
    fn test_screen_clear_tap_wraps_message() {
        let mut screen = laid_out();
        let message = click(&mut screen, 390.0, 60.0).unwrap();
        let wrapped = message.downcast_ref::<FieldMessage>().unwrap();
        assert_eq!(wrapped.field.as_deref(), Some("etClear"));
        assert!(wrapped.downcast_ref::<ContentCleared>().is_some());
        assert!(screen.get("etClear").unwrap().is_empty());
    }

    #[test]
    fn test_screen_enter_on_unfocused_is_ignored() {
        let mut screen = laid_out();
        assert!(screen.event(&Event::KeyDown { key: Key::Enter }).is_none());
    }

    #[test]
    fn test_screen_detach_releases_field_listeners() {
        let mut screen = laid_out();
        screen.lifecycle(LifecyclePhase::Attached);
        screen.get_mut("etMax").unwrap().on_text_changed(|_| {});
        assert_eq!(screen.get("etMax").unwrap().listeners().registered(), 1);
        screen.lifecycle(LifecyclePhase::Detached);
        assert_eq!(screen.get("etMax").unwrap().listeners().registered(), 0);
    }

    #[test]
    fn test_screen_paint() {
        let screen = laid_out();
        let mut canvas = RecordingCanvas::new();
        screen.paint(&mut canvas);
        assert_eq!(canvas.texts(), vec!["remove me"]);
        assert_eq!(canvas.icons(), vec!["ic_clear", "ic_content_cipher"]);
    }

    #[test]
    fn test_screen_shared_edge_reaches_one_field() {
        let mut screen = Screen::new("stacked")
            .gap(0.0)
            .field(EasyEdit::new().with_test_id("top").clear_button(true).text("top"))
            .field(EasyEdit::new().with_test_id("bottom").clear_button(true).text("bottom"));
        screen.layout(Rect::new(0.0, 0.0, 400.0, 80.0));
        assert_eq!(screen.fields()[0].bounds().bottom(), screen.fields()[1].bounds().y);

        let edge = screen.fields()[1].bounds().y;
        let message = click(&mut screen, 390.0, edge).unwrap();
        let wrapped = message.downcast_ref::<FieldMessage>().unwrap();
        assert_eq!(wrapped.field.as_deref(), Some("bottom"));
        assert_eq!(screen.get("top").unwrap().value(), "top");
        assert!(screen.get("bottom").unwrap().is_empty());
        assert_eq!(screen.focused().and_then(Widget::test_id), Some("bottom"));
    }
}
