//! The EasyEdit text-input widget.
//!
//! [`EasyEdit`] wraps a [`TextField`] primitive and adds:
//! - a clear-all button at the trailing edge,
//! - a password visibility toggle,
//! - maximum and minimum length limits with truncation,
//! - single-slot change listeners.
//!
//! [`Screen`] stacks fields declared in a YAML layout.

pub mod config;
pub mod edit;
pub mod field;
pub mod hotzone;
pub mod listeners;
pub mod screen;
pub mod watcher;

pub use config::{EditConfig, DEFAULT_CLEAR_ICON, DEFAULT_HIDE_ICON, DEFAULT_SHOW_ICON};
pub use edit::{
    ContentCleared, EasyEdit, MaxLengthAlert, TextChanged, TextSubmitted, VisibilityToggled,
};
pub use field::{BasicField, TextField};
pub use hotzone::{HotzoneAction, HOTZONE_WIDTH};
pub use listeners::Listeners;
pub use screen::{FieldMessage, Screen};
pub use watcher::{Emptiness, TextEdit, TextWatcher};
