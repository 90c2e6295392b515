//! YAML attribute sets for EasyEdit fields.
//!
//! A layout file names a screen and lists the fields on it; each field is an
//! attribute set read once when the widget is constructed.

mod attributes;
mod error;

pub use attributes::{FieldAttributes, Layout, UNLIMITED};
pub use error::ParseError;
