//! The editable text primitive wrapped by [`EasyEdit`](crate::EasyEdit).
//!
//! A [`TextField`] stores content, cursor, trailing icon and transformation.
//! It never notifies anyone; change notification is the wrapper's job.

use easyedit_core::{InputType, Transformation};

/// Editable text storage owned by a wrapping widget.
///
/// Cursor positions are character indices.
pub trait TextField: Send + Sync {
    /// Current content.
    fn text(&self) -> &str;

    /// Replace the content without notifying anyone.
    fn replace(&mut self, text: String);

    /// Cursor position.
    fn cursor(&self) -> usize;

    /// Move the cursor, clamped to the content length.
    fn set_cursor(&mut self, position: usize);

    /// Declared input type.
    fn input_type(&self) -> InputType;

    /// Change the input type.
    fn set_input_type(&mut self, input_type: InputType);

    /// Current rendering transformation.
    fn transformation(&self) -> Transformation;

    /// Change the rendering transformation.
    fn set_transformation(&mut self, transformation: Transformation);

    /// Icon drawn at the trailing edge, if any.
    fn trailing_icon(&self) -> Option<&str>;

    /// Set or remove the trailing icon.
    fn set_trailing_icon(&mut self, icon: Option<String>);

    /// Content length in characters.
    fn char_count(&self) -> usize {
        self.text().chars().count()
    }

    /// Content as displayed, after the transformation.
    fn display_text(&self) -> String {
        self.transformation().apply(self.text())
    }
}

/// In-memory [`TextField`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BasicField {
    text: String,
    cursor: usize,
    input_type: InputType,
    transformation: Transformation,
    trailing_icon: Option<String>,
    icon_changes: usize,
}

impl BasicField {
    /// Create an empty field of the given input type.
    #[must_use]
    pub fn new(input_type: InputType) -> Self {
        Self {
            input_type,
            transformation: input_type.initial_transformation(),
            ..Self::default()
        }
    }

    /// Number of times the trailing icon has been set.
    ///
    /// Each set is a relayout on a real toolkit.
    #[must_use]
    pub const fn icon_changes(&self) -> usize {
        self.icon_changes
    }
}

impl TextField for BasicField {
    fn text(&self) -> &str {
        &self.text
    }

    fn replace(&mut self, text: String) {
        self.text = text;
        self.cursor = self.cursor.min(self.char_count());
    }

    fn cursor(&self) -> usize {
        self.cursor
    }

    fn set_cursor(&mut self, position: usize) {
        self.cursor = position.min(self.char_count());
    }

    fn input_type(&self) -> InputType {
        self.input_type
    }

    fn set_input_type(&mut self, input_type: InputType) {
        self.input_type = input_type;
    }

    fn transformation(&self) -> Transformation {
        self.transformation
    }

    fn set_transformation(&mut self, transformation: Transformation) {
        self.transformation = transformation;
    }

    fn trailing_icon(&self) -> Option<&str> {
        self.trailing_icon.as_deref()
    }

    fn set_trailing_icon(&mut self, icon: Option<String>) {
        self.trailing_icon = icon;
        self.icon_changes += 1;
    }
}

/// Byte offset of the character at `char_index`, or the end of `s`.
pub(crate) fn byte_index(s: &str, char_index: usize) -> usize {
    s.char_indices()
        .nth(char_index)
        .map_or(s.len(), |(offset, _)| offset)
}

/// The first `count` characters of `s`.
pub(crate) fn prefix_chars(s: &str, count: usize) -> &str {
    &s[..byte_index(s, count)]
}
