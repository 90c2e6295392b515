//! Input types and content transformations of a text field.

use serde::{Deserialize, Serialize};

/// Kind of content a text field accepts.
///
/// The password variants decide whether content starts out masked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputType {
    /// Plain text
    #[default]
    Text,
    /// Numeric text
    Number,
    /// Masked text password
    Password,
    /// Password shown in plain text
    VisiblePassword,
    /// Masked numeric password (PIN)
    NumberPassword,
    /// Masked web-form password
    WebPassword,
}

impl InputType {
    /// Check if this is one of the password variants.
    #[must_use]
    pub const fn is_password(self) -> bool {
        matches!(
            self,
            Self::Password | Self::VisiblePassword | Self::NumberPassword | Self::WebPassword
        )
    }

    /// Transformation applied when a field of this type is created.
    #[must_use]
    pub const fn initial_transformation(self) -> Transformation {
        match self {
            Self::Password | Self::NumberPassword | Self::WebPassword => Transformation::Masked,
            Self::Text | Self::Number | Self::VisiblePassword => Transformation::Revealed,
        }
    }
}

/// Rendering mode of field content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Transformation {
    /// Content drawn as-is
    #[default]
    Revealed,
    /// Each character drawn as a bullet
    Masked,
}

impl Transformation {
    /// Bullet drawn for each masked character.
    pub const MASK_CHAR: char = '•';

    /// The opposite transformation.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Revealed => Self::Masked,
            Self::Masked => Self::Revealed,
        }
    }

    /// Render `content` for display.
    #[must_use]
    pub fn apply(self, content: &str) -> String {
        match self {
            Self::Revealed => content.to_string(),
            Self::Masked => std::iter::repeat(Self::MASK_CHAR)
                .take(content.chars().count())
                .collect(),
        }
    }
}
