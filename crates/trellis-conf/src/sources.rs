//! Configuration sources for layered settings
//!
//! Each source produces a tree of JSON values that is merged over the
//! defaults in priority order (environment variables > TOML > defaults).

use indexmap::IndexMap;
use serde_json::Value;
use std::path::PathBuf;

/// Prefix for environment variables read by [`EnvSource`].
pub const ENV_PREFIX: &str = "TRELLIS_";

/// Separator between nested keys in environment variable names.
pub const ENV_NESTING_SEPARATOR: &str = "__";

/// Trait for configuration sources
pub trait ConfigSource: Send + Sync {
	/// Load configuration from this source
	fn load(&self) -> Result<IndexMap<String, Value>, SettingsError>;

	/// Get the priority of this source (higher = more important)
	fn priority(&self) -> u8;

	/// Get a description of this source
	fn description(&self) -> String;
}

/// Error type for settings loading
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),

	#[error("Invalid settings: {0}")]
	Invalid(String),
}

impl From<SettingsError> for trellis_core::Error {
	fn from(err: SettingsError) -> Self {
		trellis_core::Error::Configuration(err.to_string())
	}
}

enum TomlInput {
	Content(String),
	File(PathBuf),
}

/// TOML document configuration source
pub struct TomlSource {
	input: TomlInput,
}

impl TomlSource {
	/// Source backed by an in-memory TOML document.
	pub fn from_content(content: impl Into<String>) -> Self {
		Self {
			input: TomlInput::Content(content.into()),
		}
	}

	/// Source backed by a TOML file read at load time.
	pub fn from_file(path: impl Into<PathBuf>) -> Self {
		Self {
			input: TomlInput::File(path.into()),
		}
	}

	fn read(&self) -> Result<String, SettingsError> {
		match &self.input {
			TomlInput::Content(content) => Ok(content.clone()),
			TomlInput::File(path) => Ok(std::fs::read_to_string(path)?),
		}
	}
}

impl ConfigSource for TomlSource {
	fn load(&self) -> Result<IndexMap<String, Value>, SettingsError> {
		let table: toml::Table = toml::from_str(&self.read()?)?;
		match serde_json::to_value(table)? {
			Value::Object(map) => Ok(map.into_iter().collect()),
			_ => Ok(IndexMap::new()),
		}
	}

	fn priority(&self) -> u8 {
		50
	}

	fn description(&self) -> String {
		match &self.input {
			TomlInput::Content(_) => "TOML document".to_string(),
			TomlInput::File(path) => format!("TOML file: {}", path.display()),
		}
	}
}

/// Environment variable configuration source
///
/// `TRELLIS_ROUTING__AREA_KEY=section` sets `routing.area_key`.
pub struct EnvSource {
	prefix: String,
	vars: Option<Vec<(String, String)>>,
}

impl EnvSource {
	/// Reads the process environment with the default `TRELLIS_` prefix.
	pub fn new() -> Self {
		Self {
			prefix: ENV_PREFIX.to_string(),
			vars: None,
		}
	}

	/// Reads the given pairs instead of the process environment.
	///
	/// # Examples
	///
	/// ```
	/// use trellis_conf::{EnvSource, Settings};
	///
	/// let env = EnvSource::from_vars([("TRELLIS_ROUTING__AREA_KEY", "section")]);
	/// let settings = Settings::from_sources(&[&env]).unwrap();
	/// assert_eq!(settings.routing.area_key, "section");
	/// ```
	pub fn from_vars<K, V>(vars: impl IntoIterator<Item = (K, V)>) -> Self
	where
		K: Into<String>,
		V: Into<String>,
	{
		Self {
			prefix: ENV_PREFIX.to_string(),
			vars: Some(
				vars.into_iter()
					.map(|(k, v)| (k.into(), v.into()))
					.collect(),
			),
		}
	}

	/// Replace the prefix filter.
	pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.prefix = prefix.into();
		self
	}
}

impl Default for EnvSource {
	fn default() -> Self {
		Self::new()
	}
}

impl ConfigSource for EnvSource {
	fn load(&self) -> Result<IndexMap<String, Value>, SettingsError> {
		let vars: Vec<(String, String)> = match &self.vars {
			Some(vars) => vars.clone(),
			None => std::env::vars().collect(),
		};

		let mut config = IndexMap::new();
		for (key, value) in vars {
			let Some(path) = key.strip_prefix(&self.prefix) else {
				continue;
			};
			let segments: Vec<String> = path
				.split(ENV_NESTING_SEPARATOR)
				.map(str::to_lowercase)
				.collect();
			if segments.iter().any(String::is_empty) {
				tracing::warn!(variable = %key, "ignoring malformed settings variable");
				continue;
			}
			insert_path(&mut config, &segments, parse_env_value(&value));
		}
		Ok(config)
	}

	fn priority(&self) -> u8 {
		100
	}

	fn description(&self) -> String {
		format!("Environment variables ({}*)", self.prefix)
	}
}

fn parse_env_value(raw: &str) -> Value {
	match raw {
		"true" => Value::Bool(true),
		"false" => Value::Bool(false),
		_ => raw
			.parse::<i64>()
			.map(Value::from)
			.unwrap_or_else(|_| Value::String(raw.to_string())),
	}
}

fn insert_path(tree: &mut IndexMap<String, Value>, segments: &[String], value: Value) {
	let Some((last, parents)) = segments.split_last() else {
		return;
	};
	if parents.is_empty() {
		tree.insert(last.clone(), value);
		return;
	}
	let mut node = tree
		.entry(parents[0].clone())
		.or_insert_with(|| Value::Object(Default::default()));
	for segment in &parents[1..] {
		if !node.is_object() {
			*node = Value::Object(Default::default());
		}
		node = match node {
			Value::Object(map) => map
				.entry(segment.clone())
				.or_insert_with(|| Value::Object(Default::default())),
			_ => return,
		};
	}
	if !node.is_object() {
		*node = Value::Object(Default::default());
	}
	if let Value::Object(map) = node {
		map.insert(last.clone(), value);
	}
}

/// Deep-merges `layer` into `tree`. Objects merge key by key; anything else
/// replaces. A scalar landing on a string keeps the string type so that
/// `TRELLIS_ROUTING__AREA_KEY=1` still deserializes.
pub(crate) fn merge_into(tree: &mut IndexMap<String, Value>, layer: IndexMap<String, Value>) {
	for (key, value) in layer {
		match tree.get_mut(&key) {
			Some(existing) => merge_value(existing, value),
			None => {
				tree.insert(key, value);
			}
		}
	}
}

fn merge_value(existing: &mut Value, incoming: Value) {
	match (existing, incoming) {
		(Value::Object(base), Value::Object(layer)) => {
			for (key, value) in layer {
				match base.get_mut(&key) {
					Some(slot) => merge_value(slot, value),
					None => {
						base.insert(key, value);
					}
				}
			}
		}
		(slot @ Value::String(_), Value::Number(n)) => *slot = Value::String(n.to_string()),
		(slot @ Value::String(_), Value::Bool(b)) => *slot = Value::String(b.to_string()),
		(slot, value) => *slot = value,
	}
}
