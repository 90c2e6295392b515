//! Configuration of an [`EasyEdit`](crate::EasyEdit) field.

use easyedit_yaml::FieldAttributes;
use serde::{Deserialize, Serialize};

/// Default clear button icon.
pub const DEFAULT_CLEAR_ICON: &str = "ic_clear";
/// Default icon while password content is revealed.
pub const DEFAULT_SHOW_ICON: &str = "ic_content_plain";
/// Default icon while password content is masked.
pub const DEFAULT_HIDE_ICON: &str = "ic_content_cipher";

/// Feature configuration of a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditConfig {
    /// Maximum characters (`None` = unlimited)
    pub max_length: Option<usize>,
    /// Minimum characters (0 = unlimited)
    pub min_length: usize,
    /// Show the clear-all button
    pub show_clear_button: bool,
    /// Show the password visibility toggle
    pub show_password_toggle: bool,
    /// Clear button icon
    pub clear_icon: String,
    /// Icon while content is revealed
    pub show_icon: String,
    /// Icon while content is masked
    pub hide_icon: String,
    /// Alert text when the limit is exceeded
    pub max_alert_text: String,
    /// Alert template with a `%d` or `{}` placeholder
    pub max_alert_with_count: String,
    /// Truncate content past the limit
    pub max_length_enforced: bool,
    /// Raise an alert message when the limit is exceeded
    pub show_max_alert: bool,
}

impl Default for EditConfig {
    fn default() -> Self {
        Self {
            max_length: None,
            min_length: 0,
            show_clear_button: false,
            show_password_toggle: false,
            clear_icon: DEFAULT_CLEAR_ICON.to_string(),
            show_icon: DEFAULT_SHOW_ICON.to_string(),
            hide_icon: DEFAULT_HIDE_ICON.to_string(),
            max_alert_text: String::new(),
            max_alert_with_count: String::new(),
            max_length_enforced: true,
            show_max_alert: false,
        }
    }
}

impl EditConfig {
    /// Alert text for an exceeded `limit`.
    ///
    /// The counted template wins over the plain text; with neither set a
    /// default counted message is used.
    #[must_use]
    pub fn max_alert(&self, limit: usize) -> String {
        if !self.max_alert_with_count.is_empty() {
            fill_count(&self.max_alert_with_count, limit)
        } else if !self.max_alert_text.is_empty() {
            self.max_alert_text.clone()
        } else {
            format!("At most {limit} characters allowed")
        }
    }
}

impl From<&FieldAttributes> for EditConfig {
    fn from(attrs: &FieldAttributes) -> Self {
        let defaults = Self::default();
        Self {
            max_length: attrs.max_length_limit(),
            min_length: attrs.min_length_limit(),
            show_clear_button: attrs.show_clear_button,
            show_password_toggle: attrs.show_password_toggle,
            clear_icon: attrs.clear_icon.clone().unwrap_or(defaults.clear_icon),
            show_icon: attrs.show_icon.clone().unwrap_or(defaults.show_icon),
            hide_icon: attrs.hide_icon.clone().unwrap_or(defaults.hide_icon),
            max_alert_text: attrs.max_alert_text.clone(),
            max_alert_with_count: attrs.max_alert_with_count.clone(),
            max_length_enforced: attrs.max_length_enforced,
            show_max_alert: attrs.show_max_alert,
        }
    }
}

fn fill_count(template: &str, limit: usize) -> String {
    let count = limit.to_string();
    if template.contains("%d") {
        template.replacen("%d", &count, 1)
    } else {
        template.replacen("{}", &count, 1)
    }
}
