//! Attribute sets and layouts.

use crate::error::ParseError;
use easyedit_core::InputType;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Declared value meaning "no limit" for `max-length`.
pub const UNLIMITED: i64 = -1;

const fn default_max_length() -> i64 {
    UNLIMITED
}

const fn default_true() -> bool {
    true
}

/// Construction-time attributes of one field.
///
/// Numeric limits are kept as declared; [`FieldAttributes::max_length_limit`]
/// and [`FieldAttributes::min_length_limit`] normalise them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FieldAttributes {
    /// Field ID (test id on the widget)
    #[serde(default)]
    pub id: Option<String>,
    /// Input type
    #[serde(default)]
    pub input_type: InputType,
    /// Initial content
    #[serde(default)]
    pub text: Option<String>,
    /// Placeholder text
    #[serde(default)]
    pub placeholder: Option<String>,
    /// Maximum characters, `-1` or any value `<= 0` for unlimited
    #[serde(default = "default_max_length")]
    pub max_length: i64,
    /// Minimum characters, `0` for unlimited
    #[serde(default)]
    pub min_length: i64,
    /// Show the clear-all button
    #[serde(default)]
    pub show_clear_button: bool,
    /// Show the password visibility toggle
    #[serde(default)]
    pub show_password_toggle: bool,
    /// Clear button icon resource
    #[serde(default)]
    pub clear_icon: Option<String>,
    /// Icon shown while content is revealed
    #[serde(default)]
    pub show_icon: Option<String>,
    /// Icon shown while content is masked
    #[serde(default)]
    pub hide_icon: Option<String>,
    /// Alert text when the limit is exceeded
    #[serde(default)]
    pub max_alert_text: String,
    /// Alert template with a `%d` or `{}` placeholder for the limit
    #[serde(default)]
    pub max_alert_with_count: String,
    /// Truncate content past the limit
    #[serde(default = "default_true")]
    pub max_length_enforced: bool,
    /// Raise an alert for the host to display when the limit is exceeded
    #[serde(default)]
    pub show_max_alert: bool,
}

impl Default for FieldAttributes {
    fn default() -> Self {
        Self {
            id: None,
            input_type: InputType::default(),
            text: None,
            placeholder: None,
            max_length: UNLIMITED,
            min_length: 0,
            show_clear_button: false,
            show_password_toggle: false,
            clear_icon: None,
            show_icon: None,
            hide_icon: None,
            max_alert_text: String::new(),
            max_alert_with_count: String::new(),
            max_length_enforced: true,
            show_max_alert: false,
        }
    }
}

impl FieldAttributes {
    /// Parse a single attribute set.
    pub fn from_yaml(yaml: &str) -> Result<Self, ParseError> {
        let attrs: Self = serde_yaml_ng::from_str(yaml)?;
        attrs.validate()?;
        Ok(attrs)
    }

    /// Maximum length, `None` when unlimited.
    #[must_use]
    pub fn max_length_limit(&self) -> Option<usize> {
        usize::try_from(self.max_length).ok().filter(|&n| n > 0)
    }

    /// Minimum length, `0` when unlimited or above a positive maximum.
    #[must_use]
    pub fn min_length_limit(&self) -> usize {
        let min = usize::try_from(self.min_length).unwrap_or(0);
        match self.max_length_limit() {
            Some(max) if min > max => 0,
            _ => min,
        }
    }

    fn validate(&self) -> Result<(), ParseError> {
        if self.id.as_deref().is_some_and(str::is_empty) {
            return Err(ParseError::InvalidValue {
                field: "id".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

/// A screen declaring its fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Layout {
    /// Screen name
    pub name: String,
    /// Screen title
    #[serde(default)]
    pub title: Option<String>,
    /// Fields in display order
    #[serde(default)]
    pub fields: Vec<FieldAttributes>,
}

impl Layout {
    /// Parse and validate a layout.
    pub fn from_yaml(yaml: &str) -> Result<Self, ParseError> {
        let layout: Self = serde_yaml_ng::from_str(yaml)?;
        layout.validate()?;
        Ok(layout)
    }

    /// Look up a field by id.
    #[must_use]
    pub fn field(&self, id: &str) -> Option<&FieldAttributes> {
        self.fields.iter().find(|f| f.id.as_deref() == Some(id))
    }

    fn validate(&self) -> Result<(), ParseError> {
        if self.fields.is_empty() {
            return Err(ParseError::Validation(format!(
                "layout '{}' has no fields",
                self.name
            )));
        }
        let mut seen = HashSet::new();
        for field in &self.fields {
            field.validate()?;
            if let Some(id) = &field.id {
                if !seen.insert(id.as_str()) {
                    return Err(ParseError::DuplicateId(id.clone()));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const SAMPLE: &str = r"
name: sample
title: EasyEdit sample
fields:
  - id: etMax
    max-length: 5
    max-alert-with-count: 'No more than %d characters'
    show-max-alert: true
  - id: etClear
    show-clear-button: true
    placeholder: Type then clear
  - id: etPwd
    input-type: password
    show-password-toggle: true
    show-icon: ic_open
    hide-icon: ic_close
";

    #[test]
    fn test_layout_parse() {
        let layout = Layout::from_yaml(SAMPLE).unwrap();
        assert_eq!(layout.name, "sample");
        assert_eq!(layout.title.as_deref(), Some("EasyEdit sample"));
        assert_eq!(layout.fields.len(), 3);

        let max = layout.field("etMax").unwrap();
        assert_eq!(max.max_length_limit(), Some(5));
        assert!(max.show_max_alert);
        assert!(max.max_length_enforced);

        let pwd = layout.field("etPwd").unwrap();
        assert_eq!(pwd.input_type, InputType::Password);
        assert_eq!(pwd.hide_icon.as_deref(), Some("ic_close"));
        assert!(layout.field("missing").is_none());
    }

    #[test]
    fn test_attribute_defaults() {
        let attrs = FieldAttributes::from_yaml("id: plain").unwrap();
        assert_eq!(attrs.max_length, UNLIMITED);
        assert_eq!(attrs.max_length_limit(), None);
        assert_eq!(attrs.min_length_limit(), 0);
        assert!(!attrs.show_clear_button);
        assert!(!attrs.show_password_toggle);
        assert!(attrs.max_length_enforced);
        assert_eq!(attrs.input_type, InputType::Text);
        assert_eq!(attrs, FieldAttributes {
            id: Some("plain".to_string()),
            ..FieldAttributes::default()
        });
    }

    #[test]
    fn test_negative_limits_are_unlimited() {
        let attrs = FieldAttributes::from_yaml("max-length: -20\nmin-length: -3").unwrap();
        assert_eq!(attrs.max_length_limit(), None);
        assert_eq!(attrs.min_length_limit(), 0);
    }

    #[test]
    fn test_zero_max_length_is_unlimited() {
        let attrs = FieldAttributes::from_yaml("max-length: 0").unwrap();
        assert_eq!(attrs.max_length_limit(), None);
    }

    #[test]
    fn test_min_above_max_is_unlimited() {
        let attrs = FieldAttributes::from_yaml("max-length: 3\nmin-length: 4").unwrap();
        assert_eq!(attrs.max_length_limit(), Some(3));
        assert_eq!(attrs.min_length_limit(), 0);

        let attrs = FieldAttributes::from_yaml("max-length: 3\nmin-length: 3").unwrap();
        assert_eq!(attrs.min_length_limit(), 3);

        let attrs = FieldAttributes::from_yaml("max-length: -1\nmin-length: 40").unwrap();
        assert_eq!(attrs.min_length_limit(), 40);
    }

    #[test]
    fn test_unknown_attribute_rejected() {
        let err = FieldAttributes::from_yaml("max-lenght: 3").unwrap_err();
        assert!(matches!(err, ParseError::Yaml(_)));
    }

    #[test]
    fn test_unknown_input_type_rejected() {
        let err = FieldAttributes::from_yaml("input-type: hologram").unwrap_err();
        assert!(matches!(err, ParseError::Yaml(_)));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let yaml = "name: dup\nfields:\n  - id: a\n  - id: a\n";
        let err = Layout::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, ParseError::DuplicateId(ref id) if id == "a"));
    }

    #[test]
    fn test_empty_layout_rejected() {
        let err = Layout::from_yaml("name: nothing").unwrap_err();
        assert!(matches!(err, ParseError::Validation(_)));
    }

    #[test]
    fn test_empty_id_rejected() {
        let err = FieldAttributes::from_yaml("id: ''").unwrap_err();
        assert!(matches!(err, ParseError::InvalidValue { .. }));
    }

    proptest! {
        #[test]
        fn prop_max_length_limit_positive_only(n in any::<i64>()) {
            let attrs = FieldAttributes { max_length: n, ..FieldAttributes::default() };
            match attrs.max_length_limit() {
                Some(limit) => prop_assert_eq!(limit as i64, n),
                None => prop_assert!(n <= 0),
            }
        }
    }
}
