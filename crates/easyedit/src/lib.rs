//! EasyEdit: a text input widget with a clear button, a password
//! visibility toggle and length limits.
//!
//! # Example
//!
//! ```
//! use easyedit::widgets::EasyEdit;
//! use easyedit::{Event, Rect, Widget};
//!
//! let mut edit = EasyEdit::new().max_length(5).clear_button(true);
//! edit.on_max_exceeded(|limit, alert| println!("{alert} ({limit})"));
//! edit.layout(Rect::new(0.0, 0.0, 300.0, 40.0));
//! edit.event(&Event::FocusIn);
//! for c in "hello world".chars() {
//!     edit.event(&Event::TextInput { text: c.to_string() });
//! }
//! assert_eq!(edit.value(), "hello");
//! assert_eq!(edit.trailing_icon(), Some("ic_clear"));
//! ```

pub use easyedit_core::*;
pub use easyedit_widgets as widgets;
pub use easyedit_yaml as yaml;

pub mod demo;
