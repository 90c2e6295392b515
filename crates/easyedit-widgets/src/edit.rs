//! `EasyEdit` widget: a text field with a clear button, a password
//! visibility toggle and length limits.

use crate::config::EditConfig;
use crate::field::{byte_index, BasicField, TextField};
use crate::hotzone::{self, HotzoneAction};
use crate::listeners::Listeners;
use crate::watcher::{truncate_to, TextEdit, TextWatcher};
use easyedit_core::{
    widget::{AccessibleRole, LayoutResult, TextStyle},
    Canvas, Color, Constraints, Event, InputType, Key, LifecyclePhase, Message, Point, Rect, Size,
    Transformation, TypeId, Widget,
};
use easyedit_yaml::FieldAttributes;
use tracing::{debug, info, trace};

/// Message emitted when the content changes through user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextChanged {
    /// The new content
    pub value: String,
}

/// Message emitted when Enter is pressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSubmitted {
    /// The submitted content
    pub value: String,
}

/// Message emitted when input exceeded the maximum length and alerts are on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaxLengthAlert {
    /// The exceeded limit
    pub limit: usize,
    /// Alert text to show the user
    pub text: String,
}

/// Message emitted when the clear button emptied the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentCleared;

/// Message emitted when the password toggle flipped visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityToggled {
    /// Whether the content is now readable
    pub visible: bool,
}

/// Outcome of one committed change.
#[derive(Debug, Clone, Copy, Default)]
struct ChangeReport {
    /// Limit that was newly exceeded by this change
    exceeded: Option<usize>,
}

/// Text input widget with a trailing clear button or password toggle.
///
/// Wraps a [`TextField`] and adds change notification on top of it. The
/// text watcher is installed lazily, the first time a feature needs it.
pub struct EasyEdit<F: TextField = BasicField> {
    /// Wrapped text primitive
    field: F,
    /// Feature configuration
    config: EditConfig,
    /// Installed watcher, if any
    watcher: Option<TextWatcher>,
    /// Registered listeners
    listeners: Listeners,
    /// Placeholder text
    placeholder: String,
    /// Whether the input is disabled
    disabled: bool,
    /// Text style
    text_style: TextStyle,
    /// Placeholder text color
    placeholder_color: Color,
    /// Background color
    background_color: Color,
    /// Border color
    border_color: Color,
    /// Focused border color
    focus_border_color: Color,
    /// Padding
    padding: f32,
    /// Minimum width
    min_width: f32,
    /// Trailing icon edge length
    icon_size: f32,
    /// Test ID
    test_id_value: Option<String>,
    /// Accessible name
    accessible_name_value: Option<String>,
    /// Cached bounds
    bounds: Rect,
    /// Whether focused
    focused: bool,
    /// Whether attached to a screen
    attached: bool,
}

impl Default for EasyEdit {
    fn default() -> Self {
        Self::new()
    }
}

impl EasyEdit {
    /// Create an empty text field.
    #[must_use]
    pub fn new() -> Self {
        Self::with_field(BasicField::new(InputType::Text))
    }

    /// Create an empty field of the given input type.
    #[must_use]
    pub fn with_input_type(input_type: InputType) -> Self {
        Self::with_field(BasicField::new(input_type))
    }

    /// Build a field from declarative layout attributes.
    ///
    /// Initial text is placed before any feature is configured, so it is
    /// neither truncated nor reported to listeners.
    #[must_use]
    pub fn from_attributes(attrs: &FieldAttributes) -> Self {
        let mut edit = Self::with_input_type(attrs.input_type);
        if let Some(text) = &attrs.text {
            edit.set_text(text.clone());
        }
        if let Some(placeholder) = &attrs.placeholder {
            edit.placeholder.clone_from(placeholder);
        }
        edit.test_id_value.clone_from(&attrs.id);
        edit.apply_config(EditConfig::from(attrs));
        edit
    }
}

impl<F: TextField> EasyEdit<F> {
    /// Wrap an existing text field.
    #[must_use]
    pub fn with_field(field: F) -> Self {
        let mut edit = Self {
            field,
            config: EditConfig::default(),
            watcher: None,
            listeners: Listeners::default(),
            placeholder: String::new(),
            disabled: false,
            text_style: TextStyle::default(),
            placeholder_color: Color::new(0.6, 0.6, 0.6, 1.0),
            background_color: Color::WHITE,
            border_color: Color::new(0.8, 0.8, 0.8, 1.0),
            focus_border_color: Color::new(0.2, 0.6, 1.0, 1.0),
            padding: 8.0,
            min_width: 100.0,
            icon_size: 24.0,
            test_id_value: None,
            accessible_name_value: None,
            bounds: Rect::default(),
            focused: false,
            attached: false,
        };
        edit.refresh_trailing_icon();
        edit
    }

    // =========================================================================
    // Builders
    // =========================================================================

    /// Set the initial content.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.set_text(text);
        self
    }

    /// Set placeholder text.
    #[must_use]
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = text.into();
        self
    }

    /// Set disabled state.
    #[must_use]
    pub const fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the maximum length. Zero means unlimited.
    #[must_use]
    pub fn max_length(mut self, max: usize) -> Self {
        self.set_max_length(Some(max));
        self
    }

    /// Set the minimum length. Zero means unlimited.
    #[must_use]
    pub fn min_length(mut self, min: usize) -> Self {
        self.set_min_length(min);
        self
    }

    /// Enable or disable the clear button.
    #[must_use]
    pub fn clear_button(mut self, show: bool) -> Self {
        self.set_show_clear_button(show);
        self
    }

    /// Enable or disable the password visibility toggle.
    #[must_use]
    pub fn password_toggle(mut self, show: bool) -> Self {
        self.set_show_password_toggle(show);
        self
    }

    /// Set the clear button icon.
    #[must_use]
    pub fn clear_icon(mut self, icon: impl Into<String>) -> Self {
        self.set_clear_icon(icon);
        self
    }

    /// Set the icon shown while content is revealed.
    #[must_use]
    pub fn show_icon(mut self, icon: impl Into<String>) -> Self {
        self.set_show_icon(icon);
        self
    }

    /// Set the icon shown while content is masked.
    #[must_use]
    pub fn hide_icon(mut self, icon: impl Into<String>) -> Self {
        self.set_hide_icon(icon);
        self
    }

    /// Set the plain alert text.
    #[must_use]
    pub fn max_alert_text(mut self, text: impl Into<String>) -> Self {
        self.config.max_alert_text = text.into();
        self
    }

    /// Set the counted alert template (`%d` or `{}` placeholder).
    #[must_use]
    pub fn max_alert_with_count(mut self, template: impl Into<String>) -> Self {
        self.config.max_alert_with_count = template.into();
        self
    }

    /// Choose whether content past the limit is truncated.
    #[must_use]
    pub const fn max_length_enforced(mut self, enforced: bool) -> Self {
        self.config.max_length_enforced = enforced;
        self
    }

    /// Choose whether exceeding the limit emits a [`MaxLengthAlert`].
    #[must_use]
    pub const fn show_max_alert(mut self, show: bool) -> Self {
        self.config.show_max_alert = show;
        self
    }

    /// Set text style.
    #[must_use]
    pub fn text_style(mut self, style: TextStyle) -> Self {
        self.text_style = style;
        self
    }

    /// Set placeholder color.
    #[must_use]
    pub const fn placeholder_color(mut self, color: Color) -> Self {
        self.placeholder_color = color;
        self
    }

    /// Set background color.
    #[must_use]
    pub const fn background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Set border color.
    #[must_use]
    pub const fn border_color(mut self, color: Color) -> Self {
        self.border_color = color;
        self
    }

    /// Set focus border color.
    #[must_use]
    pub const fn focus_border_color(mut self, color: Color) -> Self {
        self.focus_border_color = color;
        self
    }

    /// Set padding.
    #[must_use]
    pub fn padding(mut self, padding: f32) -> Self {
        self.padding = padding.max(0.0);
        self
    }

    /// Set minimum width.
    #[must_use]
    pub fn min_width(mut self, width: f32) -> Self {
        self.min_width = width.max(0.0);
        self
    }

    /// Set the trailing icon size.
    #[must_use]
    pub fn icon_size(mut self, size: f32) -> Self {
        self.icon_size = size.max(0.0);
        self
    }

    /// Set test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Set accessible name.
    #[must_use]
    pub fn with_accessible_name(mut self, name: impl Into<String>) -> Self {
        self.accessible_name_value = Some(name.into());
        self
    }

    // =========================================================================
    // Setters
    // =========================================================================

    /// Apply a whole configuration.
    ///
    /// Icons and alert texts are copied as-is; the feature flags and limits
    /// go through their setters.
    pub fn apply_config(&mut self, config: EditConfig) {
        let EditConfig {
            max_length,
            min_length,
            show_clear_button,
            show_password_toggle,
            clear_icon,
            show_icon,
            hide_icon,
            max_alert_text,
            max_alert_with_count,
            max_length_enforced,
            show_max_alert,
        } = config;
        self.config.clear_icon = clear_icon;
        self.config.show_icon = show_icon;
        self.config.hide_icon = hide_icon;
        self.config.max_alert_text = max_alert_text;
        self.config.max_alert_with_count = max_alert_with_count;
        self.config.max_length_enforced = max_length_enforced;
        self.config.show_max_alert = show_max_alert;
        self.set_show_clear_button(show_clear_button);
        self.set_show_password_toggle(show_password_toggle);
        self.set_max_length(max_length);
        self.set_min_length(min_length);
        self.refresh_trailing_icon();
    }

    /// Set the maximum length. `None` or zero means unlimited.
    ///
    /// Existing content is not truncated until the next change.
    pub fn set_max_length(&mut self, max: Option<usize>) {
        let max = max.filter(|&n| n > 0);
        if self.config.max_length == max {
            return;
        }
        self.config.max_length = max;
        if let Some(watcher) = self.watcher.as_mut() {
            watcher.release_limit();
        }
        if max.is_some() {
            self.ensure_watcher();
        }
    }

    /// Set the minimum length. Zero means unlimited.
    pub fn set_min_length(&mut self, min: usize) {
        if self.config.min_length == min {
            return;
        }
        self.config.min_length = min;
        if min > 0 {
            self.ensure_watcher();
        }
    }

    /// Enable or disable the clear button.
    pub fn set_show_clear_button(&mut self, show: bool) {
        if self.config.show_clear_button == show {
            return;
        }
        self.config.show_clear_button = show;
        if show {
            self.ensure_watcher();
        }
        self.refresh_trailing_icon();
    }

    /// Enable or disable the password visibility toggle.
    ///
    /// The toggle only takes effect on password input types and while the
    /// clear button is off.
    pub fn set_show_password_toggle(&mut self, show: bool) {
        if self.config.show_password_toggle == show {
            return;
        }
        self.config.show_password_toggle = show;
        self.refresh_trailing_icon();
    }

    /// Set the clear button icon.
    pub fn set_clear_icon(&mut self, icon: impl Into<String>) {
        let icon = icon.into();
        if self.config.clear_icon == icon {
            return;
        }
        self.config.clear_icon = icon;
        self.ensure_watcher();
        self.refresh_trailing_icon();
    }

    /// Set the icon shown while content is revealed.
    pub fn set_show_icon(&mut self, icon: impl Into<String>) {
        let icon = icon.into();
        if self.config.show_icon == icon {
            return;
        }
        self.config.show_icon = icon;
        self.refresh_trailing_icon();
    }

    /// Set the icon shown while content is masked.
    pub fn set_hide_icon(&mut self, icon: impl Into<String>) {
        let icon = icon.into();
        if self.config.hide_icon == icon {
            return;
        }
        self.config.hide_icon = icon;
        self.refresh_trailing_icon();
    }

    /// Set the plain alert text.
    pub fn set_max_alert_text(&mut self, text: impl Into<String>) {
        self.config.max_alert_text = text.into();
    }

    /// Set the counted alert template.
    pub fn set_max_alert_with_count(&mut self, template: impl Into<String>) {
        self.config.max_alert_with_count = template.into();
    }

    /// Choose whether content past the limit is truncated.
    pub fn set_max_length_enforced(&mut self, enforced: bool) {
        self.config.max_length_enforced = enforced;
    }

    /// Choose whether exceeding the limit emits a [`MaxLengthAlert`].
    pub fn set_show_max_alert(&mut self, show: bool) {
        self.config.show_max_alert = show;
    }

    /// Change the input type. Visibility resets to the type's default.
    pub fn set_input_type(&mut self, input_type: InputType) {
        if self.field.input_type() == input_type {
            return;
        }
        self.field.set_input_type(input_type);
        self.field
            .set_transformation(input_type.initial_transformation());
        self.refresh_trailing_icon();
    }

    /// Set disabled state.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled {
            self.focused = false;
        }
    }

    /// Set placeholder text.
    pub fn set_placeholder(&mut self, text: impl Into<String>) {
        self.placeholder = text.into();
    }

    /// Replace the whole content and move the cursor to the end.
    ///
    /// Listeners run as for typed input. Setting the current content again
    /// does nothing.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text == self.field.text() {
            return;
        }
        let old_len = self.field.char_count();
        let new_len = text.chars().count();
        self.rearm_limit();
        self.commit(text, new_len, TextEdit::replace_all(old_len, new_len));
    }

    /// Remove all content. Returns `false` if there was nothing to remove.
    pub fn clear(&mut self) -> bool {
        if self.field.text().is_empty() {
            return false;
        }
        self.set_text(String::new());
        true
    }

    /// Flip password visibility.
    ///
    /// Returns `false` when the toggle is not active on this field.
    pub fn toggle_visibility(&mut self) -> bool {
        if !self.is_toggle_active() {
            return false;
        }
        let next = self.field.transformation().toggled();
        self.field.set_transformation(next);
        self.refresh_trailing_icon();
        let end = self.field.char_count();
        self.field.set_cursor(end);
        debug!(visible = self.is_content_visible(), "toggled content visibility");
        true
    }

    // =========================================================================
    // Listeners
    // =========================================================================

    /// Register the listener called before each change is applied.
    pub fn on_before_change(
        &mut self,
        listener: impl FnMut(&str, &TextEdit) + Send + Sync + 'static,
    ) -> &mut Self {
        self.listeners.before_change = Some(Box::new(listener));
        self.ensure_watcher();
        self
    }

    /// Register the listener called with the new content on every change.
    pub fn on_text_changed(&mut self, listener: impl FnMut(&str) + Send + Sync + 'static) -> &mut Self {
        self.listeners.text_changed = Some(Box::new(listener));
        self.ensure_watcher();
        self
    }

    /// Register the listener called with the limit and alert text when the
    /// maximum length is exceeded.
    pub fn on_max_exceeded(
        &mut self,
        listener: impl FnMut(usize, &str) + Send + Sync + 'static,
    ) -> &mut Self {
        self.listeners.max_exceeded = Some(Box::new(listener));
        self.ensure_watcher();
        self
    }

    /// Register the listener called when the content becomes empty or
    /// non-empty. The argument is `true` for empty.
    pub fn on_empty_changed(&mut self, listener: impl FnMut(bool) + Send + Sync + 'static) -> &mut Self {
        self.listeners.empty_changed = Some(Box::new(listener));
        self.ensure_watcher();
        self
    }

    /// Register the listener called after all other processing with the
    /// final content and its character count.
    pub fn on_content_changed(
        &mut self,
        listener: impl FnMut(&str, usize) + Send + Sync + 'static,
    ) -> &mut Self {
        self.listeners.content_changed = Some(Box::new(listener));
        self.ensure_watcher();
        self
    }

    // =========================================================================
    // Getters
    // =========================================================================

    /// Current content.
    #[must_use]
    pub fn value(&self) -> &str {
        self.field.text()
    }

    /// Content as displayed.
    #[must_use]
    pub fn display_text(&self) -> String {
        self.field.display_text()
    }

    /// Content length in characters.
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.field.char_count()
    }

    /// Check if the content is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.field.text().is_empty()
    }

    /// Cursor position in characters.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.field.cursor()
    }

    /// Feature configuration.
    #[must_use]
    pub const fn config(&self) -> &EditConfig {
        &self.config
    }

    /// Maximum length, if limited.
    #[must_use]
    pub const fn get_max_length(&self) -> Option<usize> {
        self.config.max_length
    }

    /// Minimum length (0 = unlimited).
    #[must_use]
    pub const fn get_min_length(&self) -> usize {
        self.config.min_length
    }

    /// Whether the clear button is enabled.
    #[must_use]
    pub const fn shows_clear_button(&self) -> bool {
        self.config.show_clear_button
    }

    /// Whether the password toggle is enabled.
    #[must_use]
    pub const fn shows_password_toggle(&self) -> bool {
        self.config.show_password_toggle
    }

    /// Check if the content is shorter than the minimum length.
    #[must_use]
    pub fn is_below_min_length(&self) -> bool {
        self.config.min_length > 0 && self.field.char_count() < self.config.min_length
    }

    /// Declared input type.
    #[must_use]
    pub fn input_type(&self) -> InputType {
        self.field.input_type()
    }

    /// Check if the content is shown in plain characters.
    #[must_use]
    pub fn is_content_visible(&self) -> bool {
        self.field.transformation() == Transformation::Revealed
    }

    /// Check if the password toggle is in effect.
    #[must_use]
    pub fn is_toggle_active(&self) -> bool {
        self.config.show_password_toggle
            && !self.config.show_clear_button
            && self.field.input_type().is_password()
    }

    /// Icon currently drawn at the trailing edge.
    #[must_use]
    pub fn trailing_icon(&self) -> Option<&str> {
        self.field.trailing_icon()
    }

    /// Check if the text watcher is installed.
    #[must_use]
    pub const fn has_watcher(&self) -> bool {
        self.watcher.is_some()
    }

    /// Registered listeners.
    #[must_use]
    pub const fn listeners(&self) -> &Listeners {
        &self.listeners
    }

    /// The wrapped text field.
    #[must_use]
    pub const fn field(&self) -> &F {
        &self.field
    }

    /// Get placeholder text.
    #[must_use]
    pub fn get_placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Check if disabled.
    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Check if focused.
    #[must_use]
    pub const fn is_focused(&self) -> bool {
        self.focused
    }

    /// Check if attached to a screen.
    #[must_use]
    pub const fn is_attached(&self) -> bool {
        self.attached
    }

    /// Region that reacts to releases at the trailing edge.
    #[must_use]
    pub fn hotzone(&self) -> Rect {
        hotzone::hotzone(self.bounds)
    }

    // =========================================================================
    // Change pipeline
    // =========================================================================

    fn ensure_watcher(&mut self) {
        if self.watcher.is_some() {
            return;
        }
        debug!(chars = self.field.char_count(), "installing text watcher");
        self.watcher = Some(TextWatcher::new(self.field.text()));
    }

    fn desired_icon(&self) -> Option<&str> {
        if self.config.show_clear_button {
            (self.field.char_count() > 0).then_some(self.config.clear_icon.as_str())
        } else if self.is_toggle_active() {
            Some(if self.is_content_visible() {
                self.config.show_icon.as_str()
            } else {
                self.config.hide_icon.as_str()
            })
        } else {
            None
        }
    }

    /// Set the trailing icon only when it differs from the current one.
    fn refresh_trailing_icon(&mut self) {
        let desired = self.desired_icon().map(str::to_owned);
        if desired.as_deref() != self.field.trailing_icon() {
            trace!(icon = ?desired, "trailing icon");
            self.field.set_trailing_icon(desired);
        }
    }

    fn commit(&mut self, text: String, cursor: usize, edit: TextEdit) -> ChangeReport {
        let nested = self
            .watcher
            .as_ref()
            .is_some_and(TextWatcher::is_dispatching);
        if !nested {
            if let Some(listener) = self.listeners.before_change.as_mut() {
                listener(self.field.text(), &edit);
            }
        }
        self.field.replace(text);
        self.field.set_cursor(cursor);
        self.dispatch(edit)
    }

    fn dispatch(&mut self, edit: TextEdit) -> ChangeReport {
        let mut report = ChangeReport::default();
        let Some(watcher) = self.watcher.as_mut() else {
            return report;
        };
        if !watcher.enter() {
            trace!("nested change suppressed");
            return report;
        }
        trace!(
            start = edit.start,
            removed = edit.removed,
            inserted = edit.inserted,
            "content changed"
        );

        if let Some(listener) = self.listeners.text_changed.as_mut() {
            listener(self.field.text());
        }

        let transition = self
            .watcher
            .as_mut()
            .and_then(|watcher| watcher.observe(self.field.text()));
        if let Some(state) = transition {
            if let Some(listener) = self.listeners.empty_changed.as_mut() {
                listener(state.is_empty());
            }
        }

        if let Some(limit) = self.config.max_length {
            self.enforce_limit(limit, &mut report);
        }

        if let Some(listener) = self.listeners.content_changed.as_mut() {
            let content = self.field.text();
            listener(content, content.chars().count());
        }

        if self.config.show_clear_button {
            self.refresh_trailing_icon();
        }
        if let Some(watcher) = self.watcher.as_mut() {
            watcher.leave();
        }
        report
    }

    /// Let the next over-long change notify again. Single keystrokes into a
    /// full field keep the latch; pastes and replacements re-arm it.
    fn rearm_limit(&mut self) {
        if let Some(watcher) = self.watcher.as_mut() {
            watcher.release_limit();
        }
    }

    fn enforce_limit(&mut self, limit: usize, report: &mut ChangeReport) {
        let Some(truncated) = truncate_to(self.field.text(), limit).map(str::to_owned) else {
            if self.field.char_count() < limit {
                if let Some(watcher) = self.watcher.as_mut() {
                    watcher.release_limit();
                }
            }
            return;
        };
        if self.config.max_length_enforced {
            let old_len = self.field.char_count();
            debug!(limit, chars = old_len, "truncating to max length");
            self.commit(truncated, limit, TextEdit::replace_all(old_len, limit));
        }
        let first = self
            .watcher
            .as_mut()
            .is_some_and(TextWatcher::reach_limit);
        if !first {
            return;
        }
        let alert = self.config.max_alert(limit);
        if let Some(listener) = self.listeners.max_exceeded.as_mut() {
            listener(limit, &alert);
        }
        report.exceeded = Some(limit);
    }

    // =========================================================================
    // Editing
    // =========================================================================

    fn insert_text(&mut self, text: &str) -> ChangeReport {
        let cursor = self.field.cursor();
        let mut value = self.field.text().to_string();
        value.insert_str(byte_index(&value, cursor), text);
        let inserted = text.chars().count();
        if inserted > 1 {
            self.rearm_limit();
        }
        self.commit(value, cursor + inserted, TextEdit::insert(cursor, inserted))
    }

    fn backspace(&mut self) -> Option<ChangeReport> {
        let cursor = self.field.cursor();
        if cursor == 0 {
            return None;
        }
        let mut value = self.field.text().to_string();
        value.remove(byte_index(&value, cursor - 1));
        Some(self.commit(value, cursor - 1, TextEdit::remove(cursor - 1, 1)))
    }

    fn delete_forward(&mut self) -> Option<ChangeReport> {
        let cursor = self.field.cursor();
        if cursor >= self.field.char_count() {
            return None;
        }
        let mut value = self.field.text().to_string();
        value.remove(byte_index(&value, cursor));
        Some(self.commit(value, cursor, TextEdit::remove(cursor, 1)))
    }

    fn change_message(&self, report: ChangeReport) -> Message {
        if let Some(limit) = report.exceeded {
            if self.config.show_max_alert {
                let text = self.config.max_alert(limit);
                info!(limit, alert = %text, "max length alert");
                return Box::new(MaxLengthAlert { limit, text });
            }
        }
        Box::new(TextChanged {
            value: self.field.text().to_string(),
        })
    }

    fn handle_release(&mut self, position: &Point) -> Option<Message> {
        if !hotzone::hit(self.bounds, position) {
            return None;
        }
        match hotzone::resolve(self.config.show_clear_button, self.is_toggle_active())? {
            HotzoneAction::Clear => {
                debug!(chars = self.field.char_count(), "clear button released");
                self.clear().then(|| Box::new(ContentCleared) as Message)
            }
            HotzoneAction::ToggleVisibility => {
                self.toggle_visibility();
                Some(Box::new(VisibilityToggled {
                    visible: self.is_content_visible(),
                }))
            }
        }
    }

    fn icon_bounds(&self) -> Rect {
        let size = self.icon_size.min(self.bounds.height);
        Rect::new(
            self.bounds.right() - self.padding - size,
            self.bounds.y + (self.bounds.height - size) / 2.0,
            size,
            size,
        )
    }
}

impl<F: TextField + 'static> Widget for EasyEdit<F> {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let content = self.text_style.size.max(self.icon_size);
        let height = 2.0f32.mul_add(self.padding, content);
        let width = self.min_width.max(constraints.min_width);
        constraints.constrain(Size::new(width, height))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        canvas.fill_rect(self.bounds, self.background_color);

        let border_color = if self.focused {
            self.focus_border_color
        } else {
            self.border_color
        };
        canvas.stroke_rect(self.bounds, border_color, 1.0);

        let position = Point::new(self.bounds.x + self.padding, self.bounds.y + self.padding);
        if self.field.text().is_empty() {
            if !self.placeholder.is_empty() {
                let mut placeholder_style = self.text_style.clone();
                placeholder_style.color = self.placeholder_color;
                canvas.draw_text(&self.placeholder, position, &placeholder_style);
            }
        } else {
            canvas.draw_text(&self.field.display_text(), position, &self.text_style);
        }

        if let Some(icon) = self.field.trailing_icon() {
            canvas.draw_icon(icon, self.icon_bounds());
        }
    }

    fn event(&mut self, event: &Event) -> Option<Message> {
        if self.disabled {
            return None;
        }

        if let Some(position) = event.press_position() {
            let was_focused = self.focused;
            self.focused = self.bounds.contains_point(&position);
            if self.focused && !was_focused {
                let end = self.field.char_count();
                self.field.set_cursor(end);
            }
            return None;
        }

        if let Some(position) = event.release_position() {
            return self.handle_release(&position);
        }

        match event {
            Event::FocusIn => {
                self.focused = true;
            }
            Event::FocusOut => {
                self.focused = false;
            }
            Event::TextInput { text } if self.focused && !text.is_empty() => {
                let report = self.insert_text(text);
                return Some(self.change_message(report));
            }
            Event::KeyDown { key } if self.focused => match key {
                Key::Backspace => {
                    return self.backspace().map(|report| self.change_message(report));
                }
                Key::Delete => {
                    return self.delete_forward().map(|report| self.change_message(report));
                }
                Key::Left => {
                    let cursor = self.field.cursor();
                    self.field.set_cursor(cursor.saturating_sub(1));
                }
                Key::Right => {
                    let cursor = self.field.cursor();
                    self.field.set_cursor(cursor + 1);
                }
                Key::Home => self.field.set_cursor(0),
                Key::End => {
                    let end = self.field.char_count();
                    self.field.set_cursor(end);
                }
                Key::Enter => {
                    return Some(Box::new(TextSubmitted {
                        value: self.field.text().to_string(),
                    }));
                }
                Key::Tab | Key::Escape => {}
            },
            _ => {}
        }

        None
    }

    fn lifecycle(&mut self, phase: LifecyclePhase) {
        self.attached = phase.is_attached();
        if !self.attached {
            debug!(
                released = self.listeners.registered(),
                "detached, releasing listeners"
            );
            self.listeners.clear();
            self.focused = false;
        }
    }

    fn is_interactive(&self) -> bool {
        !self.disabled
    }

    fn is_focusable(&self) -> bool {
        !self.disabled
    }

    fn accessible_name(&self) -> Option<&str> {
        self.accessible_name_value
            .as_deref()
            .or_else(|| (!self.placeholder.is_empty()).then_some(self.placeholder.as_str()))
    }

    fn accessible_role(&self) -> AccessibleRole {
        if self.field.input_type().is_password() {
            AccessibleRole::PasswordInput
        } else {
            AccessibleRole::TextInput
        }
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}
