//! URL generation for resolved actions.

use crate::resolver::ActionRoute;
use std::borrow::Cow;
use std::collections::HashSet;
use trellis_conf::RoutingSettings;
use trellis_core::exception::{Error, Result};
use trellis_utils::value::value_text;

/// Turns an [`ActionRoute`] into a URL.
///
/// Host frameworks with their own route table implement this; the
/// [`ConventionalUrlGenerator`] covers the `/{area}/{controller}/{action}`
/// convention.
pub trait UrlGenerator: Send + Sync {
	/// Builds the URL for `route`.
	///
	/// # Errors
	///
	/// Implementations return an error when no URL matches the route.
	fn generate(&self, route: &ActionRoute) -> Result<String>;
}

/// Template-driven [`UrlGenerator`].
///
/// Placeholders are written `{name}`. `{controller}` and `{action}` come from
/// the route, `{area}` from the configured area key and any other placeholder
/// from the route value of that name. Segments that end up empty are
/// dropped. Route values no placeholder used are appended as a query string.
///
/// ```
/// use trellis_urls::{ActionRoute, ConventionalUrlGenerator, RouteValues, UrlGenerator};
///
/// let route = ActionRoute {
///     controller: "Widgets".to_string(),
///     action: "Edit".to_string(),
///     values: RouteValues::new()
///         .with("id", 42).unwrap()
///         .with("area", "").unwrap(),
/// };
///
/// let generator = ConventionalUrlGenerator::new();
/// assert_eq!(generator.generate(&route).unwrap(), "/Widgets/Edit?id=42");
///
/// let with_id = ConventionalUrlGenerator::with_template("/{area}/{controller}/{action}/{id}");
/// assert_eq!(with_id.generate(&route).unwrap(), "/Widgets/Edit/42");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConventionalUrlGenerator {
	template: String,
	area_key: String,
}

impl Default for ConventionalUrlGenerator {
	fn default() -> Self {
		Self::new()
	}
}

impl ConventionalUrlGenerator {
	/// Generator using the default template and area key.
	pub fn new() -> Self {
		Self::from_settings(&RoutingSettings::default())
	}

	/// Generator using `settings.url_template` and `settings.area_key`.
	pub fn from_settings(settings: &RoutingSettings) -> Self {
		Self {
			template: settings.url_template.clone(),
			area_key: settings.area_key.clone(),
		}
	}

	/// Generator with a custom template and the default area key.
	pub fn with_template(template: impl Into<String>) -> Self {
		Self {
			template: template.into(),
			..Self::new()
		}
	}

	pub fn template(&self) -> &str {
		&self.template
	}

	fn placeholder<'a>(&self, name: &str, route: &'a ActionRoute) -> (Option<Cow<'a, str>>, Option<String>) {
		match name {
			"controller" => (Some(Cow::Borrowed(route.controller.as_str())), None),
			"action" => (Some(Cow::Borrowed(route.action.as_str())), None),
			"area" => (route.values.get_text(&self.area_key), Some(self.area_key.clone())),
			other => (route.values.get_text(other), Some(other.to_string())),
		}
	}
}

impl UrlGenerator for ConventionalUrlGenerator {
	fn generate(&self, route: &ActionRoute) -> Result<String> {
		let mut used: HashSet<String> = HashSet::new();
		let mut path = String::with_capacity(self.template.len());
		let mut chars = self.template.chars();

		while let Some(ch) = chars.next() {
			if ch != '{' {
				path.push(ch);
				continue;
			}
			let mut name = String::new();
			let mut closed = false;
			for c in chars.by_ref() {
				if c == '}' {
					closed = true;
					break;
				}
				name.push(c);
			}
			if !closed {
				return Err(Error::invalid_argument(
					"template",
					format!("unclosed placeholder '{{{}' in '{}'", name, self.template),
				));
			}
			if name.is_empty() {
				return Err(Error::invalid_argument(
					"template",
					format!("empty placeholder in '{}'", self.template),
				));
			}
			let (value, key) = self.placeholder(&name, route);
			if let Some(key) = key {
				used.insert(key);
			}
			if let Some(value) = value {
				path.push_str(&urlencoding::encode(&value));
			}
		}

		let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
		let mut url = format!("/{}", segments.join("/"));

		let query: Vec<(&str, Cow<'_, str>)> = route
			.values
			.iter()
			.filter(|(key, _)| !used.contains(*key))
			.filter_map(|(key, value)| value_text(value).map(|text| (key, text)))
			.collect();
		if !query.is_empty() {
			let encoded = serde_urlencoded::to_string(&query)
				.map_err(|err| Error::Serialization(err.to_string()))?;
			url.push('?');
			url.push_str(&encoded);
		}

		tracing::trace!(controller = %route.controller, action = %route.action, url = %url, "generated url");
		Ok(url)
	}
}
