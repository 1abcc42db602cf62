//! # Trellis URLs
//!
//! Typed action links for MVC-style controllers.
//!
//! Instead of spelling controller and action names as strings, callers
//! describe an [`ActionCall`] against a [`Controller`] type. The
//! [`ActionResolver`] checks the call, names positional arguments after the
//! action's declared parameters and produces an [`ActionRoute`], which a
//! [`UrlGenerator`] turns into a URL.
//!
//! ## Modules
//!
//! - [`controller`]: the [`Controller`] trait and the [`controller!`] macro
//! - [`call`]: [`ActionCall`] and its arguments
//! - [`cache`]: the concurrent per-controller metadata cache
//! - [`resolver`]: call resolution
//! - [`route_values`]: ordered route-value maps
//! - [`url`]: URL generation
//!
//! ## Example
//!
//! ```
//! use serde::Serialize;
//! use trellis_urls::{ActionCall, ActionResolver, ConventionalUrlGenerator, UrlGenerator, controller};
//!
//! pub struct ReportsController;
//!
//! controller! {
//!     ReportsController in "admin" {
//!         Index(),
//!         Export(filter),
//!     }
//! }
//!
//! #[derive(Serialize)]
//! struct Filter {
//!     year: u16,
//!     format: &'static str,
//! }
//!
//! let resolver = ActionResolver::new();
//! let route = resolver
//!     .resolve::<ReportsController>(
//!         ActionCall::new::<ReportsController>("Export").arg(Filter { year: 2024, format: "csv" }),
//!     )
//!     .unwrap();
//!
//! let url = ConventionalUrlGenerator::new().generate(&route).unwrap();
//! assert_eq!(url, "/admin/Reports/Export?year=2024&format=csv");
//! ```

pub mod cache;
pub mod call;
pub mod controller;
pub mod resolver;
pub mod route_values;
pub mod url;

pub use cache::{CacheStatistics, ControllerRouteCache, ControllerRouteInfo};
pub use call::{ActionCall, Argument, ControllerId};
pub use controller::Controller;
pub use resolver::{ActionResolver, ActionRoute};
pub use route_values::RouteValues;
pub use url::{ConventionalUrlGenerator, UrlGenerator};
