//! # Trellis Utils
//!
//! Small helpers shared by the element builders and by applications:
//!
//! - [`sequence`]: null-safe sequence helpers, 1-based pagination and batching
//! - [`html`]: escaping for text content and attribute values
//! - [`value`]: text forms of route and model values

pub mod html;
pub mod sequence;
pub mod value;

pub use html::{escape, escape_attr};
pub use sequence::{NullSafeExt, PageExt};
pub use value::value_text;
