//! Model binding
//!
//! Binds an element to one property of a model: the element receives the
//! property's `name`, a sanitized `id`, its current `value` and, when
//! unobtrusive validation is enabled, `data-val-*` attributes describing the
//! validation rules the host registered for the property.
//!
//! The host framework supplies property metadata through
//! [`ModelMetadataProvider`]; [`MetadataRegistry`] is an in-memory provider.
//!
//! ## Example
//!
//! ```
//! use serde::Serialize;
//! use trellis_html::model::{DefaultModelBinder, MetadataRegistry, ModelBinder, PropertyMetadata, ValidationRule};
//! use trellis_html::{email, property};
//!
//! #[derive(Serialize)]
//! struct Signup {
//!     email: String,
//! }
//!
//! let registry = MetadataRegistry::new().with_property(
//!     "email",
//!     PropertyMetadata::new()
//!         .display_name("E-mail")
//!         .rule(ValidationRule::Required { message: None }),
//! );
//! let binder = DefaultModelBinder::new(registry);
//! let model = Signup { email: "ann@example.com".to_string() };
//!
//! let bound = binder.bind(&model, &property!(Signup, email));
//! let html = email().bind(&bound).render();
//!
//! assert_eq!(
//!     html,
//!     concat!(
//!         r#"<input data-val="true" data-val-required="The E-mail field is required." "#,
//!         r#"id="email" name="email" type="email" value="ann@example.com" />"#
//!     )
//! );
//! ```

use crate::element::{Element, Node};
use crate::tag::{HtmlTag, InputType};
use serde::Serialize;
use serde_json::Value;
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use trellis_conf::HtmlSettings;
use trellis_utils::value::value_text;

type Accessor<M> = Arc<dyn Fn(&M) -> Value + Send + Sync>;

/// A named accessor for one property of `M`.
///
/// The path is the dotted property name used for the `name` attribute, e.g.
/// `"Address.City"`. Build one with [`ModelProperty::new`] or the
/// [`property!`](crate::property) macro.
pub struct ModelProperty<M> {
	path: Cow<'static, str>,
	accessor: Accessor<M>,
}

impl<M> Clone for ModelProperty<M> {
	fn clone(&self) -> Self {
		Self {
			path: self.path.clone(),
			accessor: Arc::clone(&self.accessor),
		}
	}
}

impl<M> fmt::Debug for ModelProperty<M> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ModelProperty")
			.field("path", &self.path)
			.field("accessor", &"<closure>")
			.finish()
	}
}

impl<M> ModelProperty<M> {
	/// Creates a property from a path and an accessor returning any
	/// serializable value.
	pub fn new<V, F>(path: impl Into<Cow<'static, str>>, accessor: F) -> Self
	where
		V: Serialize,
		F: Fn(&M) -> V + Send + Sync + 'static,
	{
		Self::from_fn(path, move |model: &M| to_model_value(&accessor(model)))
	}

	/// Creates a property from an accessor that already yields a JSON value.
	pub fn from_fn<F>(path: impl Into<Cow<'static, str>>, accessor: F) -> Self
	where
		F: Fn(&M) -> Value + Send + Sync + 'static,
	{
		Self {
			path: path.into(),
			accessor: Arc::new(accessor),
		}
	}

	/// The dotted property path.
	pub fn path(&self) -> &str {
		&self.path
	}

	/// Reads the property from `model`.
	pub fn read(&self, model: &M) -> Value {
		(self.accessor)(model)
	}
}

/// Converts a property value for binding. Values that fail to serialize
/// bind as `null`.
pub fn to_model_value<V: Serialize + ?Sized>(value: &V) -> Value {
	serde_json::to_value(value).unwrap_or_else(|err| {
		tracing::warn!(error = %err, "model property could not be serialized");
		Value::Null
	})
}

/// Builds a [`ModelProperty`] from a field path.
///
/// `property!(Order, customer.email)` reads `order.customer.email` and binds
/// under the name `customer.email`.
#[macro_export]
macro_rules! property {
	($model:ty, $($field:ident).+) => {
		$crate::model::ModelProperty::<$model>::from_fn(
			[$(stringify!($field)),+].join("."),
			|model: &$model| $crate::model::to_model_value(&model $(.$field)+),
		)
	};
}

/// A validation rule rendered as unobtrusive validation attributes.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationRule {
	Required {
		message: Option<String>,
	},
	StringLength {
		min: Option<usize>,
		max: usize,
		message: Option<String>,
	},
	Range {
		min: f64,
		max: f64,
		message: Option<String>,
	},
	RegularExpression {
		pattern: String,
		message: Option<String>,
	},
	Email {
		message: Option<String>,
	},
	/// Value must equal another property of the same model.
	Compare {
		other: String,
		message: Option<String>,
	},
}

impl ValidationRule {
	/// Unobtrusive attributes for this rule, using `display_name` in default
	/// messages.
	pub fn attributes(&self, display_name: &str) -> Vec<(String, String)> {
		let message = |custom: &Option<String>, default: String| custom.clone().unwrap_or(default);
		match self {
			Self::Required { message: m } => vec![(
				"data-val-required".to_string(),
				message(m, format!("The {} field is required.", display_name)),
			)],
			Self::StringLength { min, max, message: m } => {
				let default = match min {
					Some(min) => format!(
						"The field {} must be a string with a minimum length of {} and a maximum length of {}.",
						display_name, min, max
					),
					None => format!(
						"The field {} must be a string with a maximum length of {}.",
						display_name, max
					),
				};
				let mut attrs = vec![
					("data-val-length".to_string(), message(m, default)),
					("data-val-length-max".to_string(), max.to_string()),
				];
				if let Some(min) = min {
					attrs.push(("data-val-length-min".to_string(), min.to_string()));
				}
				attrs
			}
			Self::Range { min, max, message: m } => vec![
				(
					"data-val-range".to_string(),
					message(
						m,
						format!("The field {} must be between {} and {}.", display_name, min, max),
					),
				),
				("data-val-range-max".to_string(), max.to_string()),
				("data-val-range-min".to_string(), min.to_string()),
			],
			Self::RegularExpression { pattern, message: m } => vec![
				(
					"data-val-regex".to_string(),
					message(
						m,
						format!(
							"The field {} must match the regular expression '{}'.",
							display_name, pattern
						),
					),
				),
				("data-val-regex-pattern".to_string(), pattern.clone()),
			],
			Self::Email { message: m } => vec![(
				"data-val-email".to_string(),
				message(
					m,
					format!("The {} field is not a valid e-mail address.", display_name),
				),
			)],
			Self::Compare { other, message: m } => vec![
				(
					"data-val-equalto".to_string(),
					message(m, format!("'{}' and '{}' do not match.", display_name, other)),
				),
				("data-val-equalto-other".to_string(), format!("*.{}", other)),
			],
		}
	}
}

/// Metadata the host framework knows about one property.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyMetadata {
	pub display_name: Option<String>,
	pub rules: Vec<ValidationRule>,
}

impl PropertyMetadata {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn display_name(mut self, name: impl Into<String>) -> Self {
		self.display_name = Some(name.into());
		self
	}

	pub fn rule(mut self, rule: ValidationRule) -> Self {
		self.rules.push(rule);
		self
	}
}

/// Source of property metadata, implemented by the host framework.
pub trait ModelMetadataProvider: Send + Sync {
	/// Metadata for the property at `path`; empty metadata when unknown.
	fn metadata(&self, path: &str) -> PropertyMetadata;
}

/// In-memory [`ModelMetadataProvider`] keyed by property path.
#[derive(Debug, Clone, Default)]
pub struct MetadataRegistry {
	properties: HashMap<String, PropertyMetadata>,
}

impl MetadataRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers metadata for a path, replacing any previous entry.
	pub fn with_property(mut self, path: impl Into<String>, metadata: PropertyMetadata) -> Self {
		self.register(path, metadata);
		self
	}

	pub fn register(&mut self, path: impl Into<String>, metadata: PropertyMetadata) {
		self.properties.insert(path.into(), metadata);
	}
}

impl ModelMetadataProvider for MetadataRegistry {
	fn metadata(&self, path: &str) -> PropertyMetadata {
		self.properties.get(path).cloned().unwrap_or_default()
	}
}

/// Everything an element needs to render a bound property.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundProperty {
	/// The `name` attribute.
	pub name: String,
	/// The `id` attribute.
	pub id: String,
	/// The current value as text; `None` for `null`.
	pub value: Option<String>,
	/// The current value as read from the model.
	pub raw_value: Value,
	/// Label text.
	pub display_name: String,
	/// Validation attributes, e.g. `data-val-required`.
	pub validation_attributes: Vec<(String, String)>,
}

impl BoundProperty {
	/// `true` when the bound value reads as a checked checkbox.
	pub fn is_truthy(&self) -> bool {
		match &self.raw_value {
			Value::Bool(b) => *b,
			Value::String(s) => s.eq_ignore_ascii_case("true"),
			_ => false,
		}
	}
}

/// Given a property accessor and a model instance, produces a
/// [`BoundProperty`].
pub trait ModelBinder {
	fn bind<M>(&self, model: &M, property: &ModelProperty<M>) -> BoundProperty;
}

/// [`ModelBinder`] backed by a [`ModelMetadataProvider`].
#[derive(Debug, Clone)]
pub struct DefaultModelBinder<P> {
	provider: P,
	settings: HtmlSettings,
	prefix: Option<String>,
}

impl<P: ModelMetadataProvider> DefaultModelBinder<P> {
	/// Binder with default [`HtmlSettings`].
	pub fn new(provider: P) -> Self {
		Self::with_settings(provider, HtmlSettings::default())
	}

	pub fn with_settings(provider: P, settings: HtmlSettings) -> Self {
		Self {
			provider,
			settings,
			prefix: None,
		}
	}

	/// Prepends `prefix.` to every bound name, as for nested editors.
	pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
		let prefix = prefix.into();
		self.prefix = (!prefix.is_empty()).then_some(prefix);
		self
	}

	/// Full name for a property path, including any prefix.
	pub fn full_name(&self, path: &str) -> String {
		match &self.prefix {
			Some(prefix) if path.is_empty() => prefix.clone(),
			Some(prefix) => format!("{}.{}", prefix, path),
			None => path.to_string(),
		}
	}
}

impl<P: ModelMetadataProvider> ModelBinder for DefaultModelBinder<P> {
	fn bind<M>(&self, model: &M, property: &ModelProperty<M>) -> BoundProperty {
		let name = self.full_name(property.path());
		let id = sanitize_id(&name, &self.settings.id_replacement);
		let raw_value = property.read(model);
		let metadata = self.provider.metadata(property.path());
		let display_name = metadata
			.display_name
			.clone()
			.unwrap_or_else(|| default_display_name(property.path()));

		let mut validation_attributes = Vec::new();
		if self.settings.unobtrusive_validation && !metadata.rules.is_empty() {
			validation_attributes.push(("data-val".to_string(), "true".to_string()));
			for rule in &metadata.rules {
				validation_attributes.extend(rule.attributes(&display_name));
			}
		}

		tracing::debug!(
			name = %name,
			rules = metadata.rules.len(),
			"bound model property"
		);

		BoundProperty {
			value: value_text(&raw_value).map(Cow::into_owned),
			name,
			id,
			raw_value,
			display_name,
			validation_attributes,
		}
	}
}

/// Turns a property name into an `id`: `.`, `[`, `]` and whitespace become
/// `replacement`.
///
/// # Examples
///
/// ```
/// use trellis_html::model::sanitize_id;
///
/// assert_eq!(sanitize_id("Address.City", "_"), "Address_City");
/// assert_eq!(sanitize_id("Lines[0].Sku", "_"), "Lines_0__Sku");
/// ```
pub fn sanitize_id(name: &str, replacement: &str) -> String {
	let mut id = String::with_capacity(name.len());
	for ch in name.chars() {
		if matches!(ch, '.' | '[' | ']') || ch.is_whitespace() {
			id.push_str(replacement);
		} else {
			id.push(ch);
		}
	}
	id
}

fn default_display_name(path: &str) -> String {
	path.rsplit('.').next().unwrap_or(path).to_string()
}

impl Element {
	/// Applies a bound property to this element.
	///
	/// - every element receives `name`, `id` and the validation attributes
	/// - checkboxes get `value="true"` and are checked when the value is truthy
	/// - radios keep their own value and are checked when it equals the bound one
	/// - password and file inputs never receive the value
	/// - textareas receive the value as text, selects mark the matching option
	/// - labels instead receive `for` and the display name
	pub fn bind(self, bound: &BoundProperty) -> Self {
		if self.tag() == HtmlTag::Label {
			return self.for_id(bound.id.clone()).text(bound.display_name.clone());
		}

		let mut element = self.name(bound.name.clone()).id(bound.id.clone());
		for (name, value) in &bound.validation_attributes {
			if let Err(err) = element.set_attribute(name, value.clone()) {
				tracing::warn!(attribute = %name, error = %err, "skipping validation attribute");
			}
		}

		match (element.tag(), element.input_type()) {
			(HtmlTag::Input, Some(InputType::Checkbox)) => {
				let checked = bound.is_truthy();
				element.value("true").checked(checked)
			}
			(HtmlTag::Input, Some(InputType::Radio)) => {
				let own = element.attribute("value");
				let checked = own.is_some() && own.as_deref() == bound.value.as_deref();
				element.checked(checked)
			}
			(HtmlTag::Input, Some(t)) if t.suppresses_value() || t.keeps_own_value() => element,
			(HtmlTag::Textarea, _) => match &bound.value {
				Some(value) => element.text(value.clone()),
				None => element,
			},
			(HtmlTag::Select, _) => match &bound.value {
				Some(value) => element.select_value(value),
				None => element,
			},
			(HtmlTag::Input, _) => match &bound.value {
				Some(value) => element.value(value.clone()),
				None => element,
			},
			_ => element,
		}
	}
}

/// `<label for="id">Display name</label>` for a bound property.
pub fn label_for(bound: &BoundProperty) -> Element {
	Element::new(HtmlTag::Label).bind(bound)
}

/// `<span>` placeholder for validation messages of a bound property.
pub fn validation_message_for(bound: &BoundProperty, message: Option<&str>) -> Element {
	let mut element = Element::new(HtmlTag::Span)
		.with_class("field-validation-valid")
		.put("data-valmsg-for", bound.name.clone())
		.put("data-valmsg-replace", "true");
	if let Some(message) = message {
		element.remove_class("field-validation-valid");
		element.push_class("field-validation-error");
		element = element.child(Node::Text(message.to_string()));
	}
	element
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::elements::{checkbox, password, radio, text_box};
	use rstest::{fixture, rstest};
	use serde_json::json;

	#[derive(Serialize)]
	struct Address {
		city: String,
	}

	#[derive(Serialize)]
	struct Person {
		name: String,
		age: Option<u32>,
		subscribed: bool,
		address: Address,
	}

	#[fixture]
	fn person() -> Person {
		Person {
			name: "Ann".to_string(),
			age: None,
			subscribed: true,
			address: Address {
				city: "Oslo".to_string(),
			},
		}
	}

	#[rstest]
	fn test_nested_property_name_and_id(person: Person) {
		let binder = DefaultModelBinder::new(MetadataRegistry::new());
		let bound = binder.bind(&person, &property!(Person, address.city));
		assert_eq!(bound.name, "address.city");
		assert_eq!(bound.id, "address_city");
		assert_eq!(bound.value.as_deref(), Some("Oslo"));
		assert_eq!(bound.display_name, "city");
		assert!(bound.validation_attributes.is_empty());
	}

	#[rstest]
	fn test_null_value_has_no_value(person: Person) {
		let binder = DefaultModelBinder::new(MetadataRegistry::new());
		let bound = binder.bind(&person, &property!(Person, age));
		assert_eq!(bound.value, None);
		assert_eq!(bound.raw_value, Value::Null);
		assert_eq!(
			text_box().bind(&bound).render(),
			r#"<input id="age" name="age" type="text" />"#
		);
	}

	#[rstest]
	fn test_prefix_applies_to_name_and_id(person: Person) {
		let binder = DefaultModelBinder::new(MetadataRegistry::new()).with_prefix("Owner");
		let bound = binder.bind(&person, &property!(Person, name));
		assert_eq!(bound.name, "Owner.name");
		assert_eq!(bound.id, "Owner_name");
	}

	#[rstest]
	fn test_checkbox_binding(person: Person) {
		let binder = DefaultModelBinder::new(MetadataRegistry::new());
		let bound = binder.bind(&person, &property!(Person, subscribed));
		assert_eq!(
			checkbox().bind(&bound).render(),
			r#"<input checked="checked" id="subscribed" name="subscribed" type="checkbox" value="true" />"#
		);
	}

	#[rstest]
	fn test_radio_checked_only_on_match(person: Person) {
		let binder = DefaultModelBinder::new(MetadataRegistry::new());
		let bound = binder.bind(&person, &property!(Person, name));
		assert!(radio().value("Ann").bind(&bound).has_attribute("checked"));
		assert!(!radio().value("Bob").bind(&bound).has_attribute("checked"));
	}

	#[rstest]
	fn test_password_never_echoes_value(person: Person) {
		let binder = DefaultModelBinder::new(MetadataRegistry::new());
		let bound = binder.bind(&person, &property!(Person, name));
		assert_eq!(password().bind(&bound).attribute("value"), None);
	}

	#[rstest]
	fn test_validation_disabled_by_settings(person: Person) {
		let registry = MetadataRegistry::new().with_property(
			"name",
			PropertyMetadata::new().rule(ValidationRule::Required { message: None }),
		);
		let settings = HtmlSettings {
			unobtrusive_validation: false,
			..HtmlSettings::default()
		};
		let binder = DefaultModelBinder::with_settings(registry, settings);
		let bound = binder.bind(&person, &property!(Person, name));
		assert!(bound.validation_attributes.is_empty());
	}

	#[rstest]
	fn test_string_length_attributes() {
		let rule = ValidationRule::StringLength {
			min: Some(2),
			max: 50,
			message: None,
		};
		let attrs = rule.attributes("Name");
		assert_eq!(attrs[1], ("data-val-length-max".to_string(), "50".to_string()));
		assert_eq!(attrs[2], ("data-val-length-min".to_string(), "2".to_string()));
		assert!(attrs[0].1.contains("minimum length of 2"));
	}

	#[rstest]
	fn test_custom_message_wins() {
		let rule = ValidationRule::Email {
			message: Some("Bad address".to_string()),
		};
		assert_eq!(
			rule.attributes("Email"),
			vec![("data-val-email".to_string(), "Bad address".to_string())]
		);
	}

	#[rstest]
	fn test_closure_property(person: Person) {
		let prop = ModelProperty::new("Initial", |p: &Person| p.name.chars().next());
		assert_eq!(prop.path(), "Initial");
		assert_eq!(prop.read(&person), json!("A"));
	}

	#[rstest]
	fn test_validation_message_for(person: Person) {
		let binder = DefaultModelBinder::new(MetadataRegistry::new());
		let bound = binder.bind(&person, &property!(Person, name));
		assert_eq!(
			validation_message_for(&bound, None).render(),
			r#"<span class="field-validation-valid" data-valmsg-for="name" data-valmsg-replace="true"></span>"#
		);
		assert_eq!(
			validation_message_for(&bound, Some("Required")).render(),
			r#"<span class="field-validation-error" data-valmsg-for="name" data-valmsg-replace="true">Required</span>"#
		);
	}
}
