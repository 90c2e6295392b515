//! Demo screens.
//!
//! Each screen is built from a bundled layout file and wires logging
//! listeners onto some of its fields.

use easyedit_widgets::Screen;
use easyedit_yaml::ParseError;
use tracing::{debug, info};

/// Layout of the main demo screen.
pub const MAIN_LAYOUT: &str = include_str!("../layouts/main.yaml");

/// Layout of the sample screen.
pub const SAMPLE_LAYOUT: &str = include_str!("../layouts/sample.yaml");

/// Main screen: a limited field, a clearable field and a password field.
pub fn main_screen() -> Result<Screen, ParseError> {
    let mut screen = Screen::from_yaml(MAIN_LAYOUT)?;
    if let Some(field) = screen.get_mut("etMax") {
        field
            .on_text_changed(|text| debug!(field = "etMax", content = text, "text changed"))
            .on_max_exceeded(|limit, alert| info!(field = "etMax", limit, "{alert}"));
    }
    Ok(screen)
}

/// Sample screen showing every listener and the custom icons.
pub fn sample_screen() -> Result<Screen, ParseError> {
    let mut screen = Screen::from_yaml(SAMPLE_LAYOUT)?;
    if let Some(field) = screen.get_mut("etMax") {
        field.on_max_exceeded(|limit, _| info!(field = "etMax", limit, "max characters reached"));
    }
    if let Some(field) = screen.get_mut("etEmpty") {
        field.on_empty_changed(|empty| {
            if empty {
                info!(field = "etEmpty", "content cleared");
            } else {
                debug!(field = "etEmpty", "content not empty");
            }
        });
    }
    if let Some(field) = screen.get_mut("etWatcher") {
        field
            .on_before_change(|old, edit| {
                debug!(
                    field = "etWatcher",
                    old,
                    start = edit.start,
                    removed = edit.removed,
                    inserted = edit.inserted,
                    "before change"
                );
            })
            .on_content_changed(|content, count| {
                debug!(field = "etWatcher", content, count, "content changed");
            });
    }
    Ok(screen)
}
