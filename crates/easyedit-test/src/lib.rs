#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::manual_assert)]
//! Testing harness for EasyEdit widgets.
//!
//! The [`Harness`] owns a widget, lays it out in a viewport, feeds it
//! simulated input and keeps every message the widget emits.
//!
//! ```ignore
//! use easyedit_test::Harness;
//! use easyedit_widgets::EasyEdit;
//!
//! let mut harness = Harness::new(EasyEdit::new().max_length(5));
//! harness.type_text("hello world");
//! assert_eq!(harness.widget().value(), "hello");
//! ```

mod harness;

pub use harness::Harness;

use tracing_subscriber::EnvFilter;

/// Install a test log subscriber once per process.
///
/// Filtered by `RUST_LOG`, defaulting to `warn`. Output goes through the
/// test writer so it is captured per test.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
