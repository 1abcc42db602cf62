//! # Trellis
//!
//! Fluent HTML element builders and typed action links for server-rendered,
//! MVC-style web applications.
//!
//! ## Crates
//!
//! - [`core`]: the shared [`Error`] type
//! - [`conf`]: layered [`Settings`] (defaults, TOML, `TRELLIS_*` environment)
//! - [`utils`]: null-safe sequence helpers, pagination, HTML escaping
//! - [`html`]: [`Element`] builders, Bootstrap presets, model binding
//! - [`urls`]: [`ActionResolver`], route values, URL generation
//!
//! ## Feature Flags
//!
//! - `bootstrap` (default): Bootstrap 3/4 presets in [`html::bootstrap`]
//!
//! ## Example
//!
//! ```
//! use trellis::prelude::*;
//!
//! pub struct WidgetsController;
//!
//! controller! {
//!     WidgetsController {
//!         Index(),
//!         Edit(id),
//!     }
//! }
//!
//! let links = ActionLinks::new();
//! let edit = links
//!     .link::<WidgetsController>(ActionCall::new::<WidgetsController>("Edit").arg(42), "Edit widget")
//!     .unwrap();
//!
//! assert_eq!(edit.render(), r#"<a href="/Widgets/Edit?id=42">Edit widget</a>"#);
//! ```

pub mod links;

pub use trellis_conf as conf;
pub use trellis_core as core;
pub use trellis_html as html;
pub use trellis_urls as urls;
pub use trellis_utils as utils;

pub use links::{ActionLinks, action_link};
pub use trellis_conf::Settings;
pub use trellis_core::{Error, Result};
pub use trellis_html::{Element, Node};
pub use trellis_urls::{ActionCall, ActionResolver, ActionRoute, RouteValues};

/// Common imports.
pub mod prelude {
	pub use crate::links::{ActionLinks, action_link};
	pub use trellis_conf::Settings;
	pub use trellis_core::{Error, Result};
	pub use trellis_html::model::{MetadataRegistry, PropertyMetadata, ValidationRule};
	pub use trellis_html::*;
	pub use trellis_urls::{
		ActionCall, ActionResolver, ActionRoute, Controller, ConventionalUrlGenerator, RouteValues,
		UrlGenerator, controller,
	};
	pub use trellis_utils::{NullSafeExt, PageExt};

	#[cfg(feature = "bootstrap")]
	pub use trellis_html::bootstrap::Bootstrap;
}
