//! # Trellis Conf
//!
//! Settings that control how elements are rendered and how action calls are
//! turned into route values.
//!
//! Settings are layered. Later sources override earlier ones:
//!
//! 1. Built-in defaults ([`Settings::default`])
//! 2. A TOML document ([`Settings::from_toml_str`] / [`Settings::from_file`])
//! 3. Environment variables prefixed with `TRELLIS_` ([`Settings::with_env`])
//!
//! ## Example
//!
//! ```
//! use trellis_conf::Settings;
//!
//! let settings = Settings::from_toml_str(r#"
//! [routing]
//! area_key = "section"
//! "#).unwrap();
//!
//! assert_eq!(settings.routing.area_key, "section");
//! assert_eq!(settings.routing.controller_suffix, "Controller");
//! ```

pub mod settings;
pub mod sources;

pub use settings::{HtmlSettings, RoutingSettings, Settings};
pub use sources::{ConfigSource, EnvSource, SettingsError, TomlSource};
