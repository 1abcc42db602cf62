//! # Trellis HTML
//!
//! Fluent builders that produce HTML fragments for server-rendered views.
//!
//! ## Modules
//!
//! - [`element`]: the [`Element`] builder and its rendering
//! - [`elements`]: constructors for concrete tags and input types
//! - [`tag`]: tag names, input types, form methods
//! - [`model`]: binding elements to model properties
//! - [`bootstrap`]: Bootstrap 3/4 presets (feature `bootstrap`)
//!
//! ## Example
//!
//! ```
//! use trellis_html::{form, label, text_box, submit, FormMethod};
//!
//! let search = form()
//!     .action("/search")
//!     .method(FormMethod::Get)
//!     .child(label().for_id("q").text("Search"))
//!     .child(text_box().id("q").name("q"))
//!     .child(submit().value("Go"));
//!
//! assert!(search.render().starts_with(r#"<form action="/search" method="get">"#));
//! ```

#[cfg(feature = "bootstrap")]
pub mod bootstrap;
pub mod element;
pub mod elements;
pub mod model;
pub mod tag;

pub use element::{Element, Node};
pub use elements::*;
pub use model::{BoundProperty, DefaultModelBinder, ModelBinder, ModelProperty, label_for};
pub use tag::{ButtonType, FormMethod, HtmlTag, InputType};
