//! Settings structures and layered loading.

use crate::sources::{ConfigSource, EnvSource, SettingsError, TomlSource, merge_into};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

/// Default suffix stripped from controller type names.
pub const DEFAULT_CONTROLLER_SUFFIX: &str = "Controller";

/// Default route key carrying the area name.
pub const DEFAULT_AREA_KEY: &str = "area";

/// Default template used by the conventional URL generator.
pub const DEFAULT_URL_TEMPLATE: &str = "/{area}/{controller}/{action}";

/// Top-level settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
	/// Element rendering and model binding.
	pub html: HtmlSettings,
	/// Action resolution and URL generation.
	pub routing: RoutingSettings,
}

/// Settings consumed by `trellis-html`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HtmlSettings {
	/// Replacement used when turning a bound property name into an `id`.
	pub id_replacement: String,
	/// Emit `data-val-*` attributes for validation rules.
	pub unobtrusive_validation: bool,
	/// Bootstrap major version the presets target (3 or 4).
	pub bootstrap_version: u8,
}

impl Default for HtmlSettings {
	fn default() -> Self {
		Self {
			id_replacement: "_".to_string(),
			unobtrusive_validation: true,
			bootstrap_version: 3,
		}
	}
}

/// Settings consumed by `trellis-urls`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutingSettings {
	/// Suffix stripped from controller type names to obtain the route name.
	pub controller_suffix: String,
	/// Route key under which the area name is stored.
	pub area_key: String,
	/// Template used by the conventional URL generator in `trellis-urls`.
	pub url_template: String,
}

impl Default for RoutingSettings {
	fn default() -> Self {
		Self {
			controller_suffix: DEFAULT_CONTROLLER_SUFFIX.to_string(),
			area_key: DEFAULT_AREA_KEY.to_string(),
			url_template: DEFAULT_URL_TEMPLATE.to_string(),
		}
	}
}

impl Settings {
	/// Loads settings from a TOML document layered over the defaults.
	///
	/// # Examples
	///
	/// ```
	/// use trellis_conf::Settings;
	///
	/// let settings = Settings::from_toml_str("[html]\nunobtrusive_validation = false").unwrap();
	/// assert!(!settings.html.unobtrusive_validation);
	/// assert_eq!(settings.html.id_replacement, "_");
	/// ```
	pub fn from_toml_str(content: &str) -> Result<Self, SettingsError> {
		Self::from_sources(&[&TomlSource::from_content(content)])
	}

	/// Loads settings from a TOML file layered over the defaults.
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
		Self::from_sources(&[&TomlSource::from_file(path.as_ref())])
	}

	/// Applies `TRELLIS_*` environment variables on top of `self`.
	pub fn with_env(self) -> Result<Self, SettingsError> {
		self.layered(&[&EnvSource::new()])
	}

	/// Merges every source in priority order over the defaults.
	pub fn from_sources(sources: &[&dyn ConfigSource]) -> Result<Self, SettingsError> {
		Self::default().layered(sources)
	}

	/// Merges the given sources, lowest priority first, over `self`.
	pub fn layered(self, sources: &[&dyn ConfigSource]) -> Result<Self, SettingsError> {
		let mut ordered: Vec<&&dyn ConfigSource> = sources.iter().collect();
		ordered.sort_by_key(|source| source.priority());

		let mut tree = match serde_json::to_value(&self)? {
			Value::Object(map) => map.into_iter().collect::<IndexMap<String, Value>>(),
			_ => IndexMap::new(),
		};

		for source in ordered {
			tracing::debug!(source = %source.description(), "loading settings source");
			let layer = source.load()?;
			merge_into(&mut tree, layer);
		}

		let settings: Settings = serde_json::from_value(Value::Object(tree.into_iter().collect()))?;
		settings.validate()?;
		Ok(settings)
	}

	/// Rejects settings that would produce unusable output.
	pub fn validate(&self) -> Result<(), SettingsError> {
		if self.routing.area_key.trim().is_empty() {
			return Err(SettingsError::Invalid(
				"routing.area_key must not be empty".to_string(),
			));
		}
		if !matches!(self.html.bootstrap_version, 3 | 4) {
			return Err(SettingsError::Invalid(format!(
				"html.bootstrap_version must be 3 or 4, got {}",
				self.html.bootstrap_version
			)));
		}
		Ok(())
	}
}
