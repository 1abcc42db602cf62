//! HTML Element Builder
//!
//! [`Element`] accumulates a tag, attributes, CSS classes and children, and
//! renders them to an HTML string on demand.
//!
//! ## Design Pattern
//!
//! - **Fluent API**: consuming methods return `Self` for chaining
//! - **Validated names**: attribute and class names are checked at the call
//!   site; rendering itself never fails
//! - **Composition**: specialized elements are plain constructor functions
//!   that preset the tag, input type and classes
//!
//! ## Example
//!
//! ```
//! use trellis_html::{div, email};
//!
//! let field = div()
//!     .class("field")
//!     .unwrap()
//!     .child(email().name("Email").placeholder("you@example.com"));
//!
//! assert_eq!(
//!     field.render(),
//!     r#"<div class="field"><input name="Email" placeholder="you@example.com" type="email" /></div>"#
//! );
//! ```

use crate::tag::{HtmlTag, InputType};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use trellis_core::exception::{Error, Result};
use trellis_utils::html::{escape, escape_attr, is_valid_attribute_name, is_valid_class_name};

/// Child content of an element.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
	/// A nested element.
	Element(Element),
	/// Text content, escaped on render.
	Text(String),
	/// Trusted markup, written verbatim.
	Raw(String),
}

impl From<Element> for Node {
	fn from(element: Element) -> Self {
		Node::Element(element)
	}
}

impl From<&str> for Node {
	fn from(text: &str) -> Self {
		Node::Text(text.to_string())
	}
}

impl From<String> for Node {
	fn from(text: String) -> Self {
		Node::Text(text)
	}
}

/// HTML element builder
///
/// Attributes are unique by name and the last write wins. They render sorted
/// by name, with `class` merged into that order. Classes are deduplicated and
/// keep their insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
	tag: HtmlTag,
	input_type: Option<InputType>,
	attributes: BTreeMap<String, String>,
	classes: Vec<String>,
	children: Vec<Node>,
}

impl Element {
	/// Create an element with no attributes.
	pub fn new(tag: HtmlTag) -> Self {
		Self {
			tag,
			input_type: None,
			attributes: BTreeMap::new(),
			classes: Vec::new(),
			children: Vec::new(),
		}
	}

	/// Create an `<input>` of the given type.
	pub fn input(input_type: InputType) -> Self {
		let mut element = Self::new(HtmlTag::Input);
		element.input_type = Some(input_type);
		element
			.attributes
			.insert("type".to_string(), input_type.as_str().to_string());
		element
	}

	/// Returns the tag.
	pub fn tag(&self) -> HtmlTag {
		self.tag
	}

	/// Returns the input type for `<input>` elements.
	pub fn input_type(&self) -> Option<InputType> {
		self.input_type
	}

	/// Returns an attribute value. `class` is assembled from the class list.
	pub fn attribute(&self, name: &str) -> Option<Cow<'_, str>> {
		if name == "class" {
			return (!self.classes.is_empty()).then(|| Cow::Owned(self.classes.join(" ")));
		}
		self.attributes.get(name).map(|value| Cow::Borrowed(value.as_str()))
	}

	/// Returns `true` if the attribute is set.
	pub fn has_attribute(&self, name: &str) -> bool {
		self.attributes.contains_key(name) || (name == "class" && !self.classes.is_empty())
	}

	/// Returns the CSS classes in insertion order.
	pub fn classes(&self) -> &[String] {
		&self.classes
	}

	/// Returns `true` if the class list contains `name`.
	pub fn has_class(&self, name: &str) -> bool {
		self.classes.iter().any(|c| c == name)
	}

	/// Returns the child nodes.
	pub fn children(&self) -> &[Node] {
		&self.children
	}

	/// Children as mutable references, for post-processing bound values.
	pub(crate) fn children_mut(&mut self) -> &mut Vec<Node> {
		&mut self.children
	}

	/// Sets an attribute, replacing any previous value.
	///
	/// Setting `class` replaces the class list. Setting `type` on an input
	/// updates its input type.
	///
	/// # Errors
	///
	/// Returns [`Error::InvalidArgument`] if `name` is not a valid attribute
	/// name, or if `class` is given an invalid class list.
	pub fn set_attribute(&mut self, name: &str, value: impl Into<String>) -> Result<&mut Self> {
		if !is_valid_attribute_name(name) {
			return Err(Error::invalid_argument(
				"name",
				format!("'{}' is not a valid attribute name", name.escape_debug()),
			));
		}
		let name = name.to_ascii_lowercase();
		let value = value.into();

		match name.as_str() {
			"class" => {
				let mut replacement = Self::new(self.tag);
				replacement.add_class(&value)?;
				self.classes = replacement.classes;
			}
			"type" if self.tag == HtmlTag::Input => {
				self.input_type = value.parse().ok();
				self.attributes.insert(name, value);
			}
			_ => {
				self.attributes.insert(name, value);
			}
		}
		Ok(self)
	}

	/// Removes an attribute. Removing `class` clears the class list.
	pub fn remove_attribute(&mut self, name: &str) -> &mut Self {
		let name = name.to_ascii_lowercase();
		if name == "class" {
			self.classes.clear();
		} else {
			self.attributes.remove(&name);
		}
		self
	}

	/// Adds one or more space-separated classes, skipping duplicates.
	///
	/// # Errors
	///
	/// Returns [`Error::InvalidArgument`] when `names` contains no class.
	pub fn add_class(&mut self, names: &str) -> Result<&mut Self> {
		let tokens: Vec<&str> = names.split_whitespace().collect();
		if tokens.is_empty() {
			return Err(Error::invalid_argument("class", "at least one class name is required"));
		}
		if let Some(bad) = tokens.iter().find(|t| !is_valid_class_name(t)) {
			return Err(Error::invalid_argument(
				"class",
				format!("'{}' is not a valid class name", bad.escape_debug()),
			));
		}
		for token in tokens {
			self.push_class(token);
		}
		Ok(self)
	}

	/// Removes a class if present.
	pub fn remove_class(&mut self, name: &str) -> &mut Self {
		self.classes.retain(|c| c != name);
		self
	}

	/// Appends a class known to be valid.
	pub(crate) fn push_class(&mut self, name: &str) {
		if !self.has_class(name) {
			self.classes.push(name.to_string());
		}
	}

	/// Sets an attribute whose name is known to be valid.
	pub(crate) fn put(mut self, name: &str, value: impl Into<String>) -> Self {
		self.attributes.insert(name.to_string(), value.into());
		self
	}

	/// Presets a class known to be valid.
	pub(crate) fn with_class(mut self, name: &str) -> Self {
		for token in name.split_whitespace() {
			self.push_class(token);
		}
		self
	}

	/// Adds or removes a boolean attribute such as `checked`.
	pub(crate) fn toggle(&mut self, name: &str, on: bool) {
		if on {
			self.attributes.insert(name.to_string(), name.to_string());
		} else {
			self.attributes.remove(name);
		}
	}

	fn flag(mut self, name: &str, on: bool) -> Self {
		self.toggle(name, on);
		self
	}

	/// Set a custom attribute
	///
	/// ## Example
	///
	/// ```
	/// use trellis_html::div;
	///
	/// let el = div().attr("role", "dialog").unwrap();
	/// assert_eq!(el.render(), r#"<div role="dialog"></div>"#);
	///
	/// assert!(div().attr("bad name", "x").is_err());
	/// ```
	pub fn attr(mut self, name: &str, value: impl Into<String>) -> Result<Self> {
		self.set_attribute(name, value)?;
		Ok(self)
	}

	/// Add one or more space-separated classes
	pub fn class(mut self, names: &str) -> Result<Self> {
		self.add_class(names)?;
		Ok(self)
	}

	/// Set a `data-*` attribute.
	pub fn data(self, key: &str, value: impl Into<String>) -> Result<Self> {
		self.attr(&format!("data-{}", key), value)
	}

	/// Set an `aria-*` attribute.
	pub fn aria(self, key: &str, value: impl Into<String>) -> Result<Self> {
		self.attr(&format!("aria-{}", key), value)
	}

	pub fn id(self, id: impl Into<String>) -> Self {
		self.put("id", id)
	}

	pub fn name(self, name: impl Into<String>) -> Self {
		self.put("name", name)
	}

	pub fn value(self, value: impl Into<String>) -> Self {
		self.put("value", value)
	}

	pub fn title(self, title: impl Into<String>) -> Self {
		self.put("title", title)
	}

	pub fn placeholder(self, placeholder: impl Into<String>) -> Self {
		self.put("placeholder", placeholder)
	}

	pub fn style(self, style: impl Into<String>) -> Self {
		self.put("style", style)
	}

	pub fn href(self, href: impl Into<String>) -> Self {
		self.put("href", href)
	}

	/// Set the `for` attribute of a label.
	pub fn for_id(self, id: impl Into<String>) -> Self {
		self.put("for", id)
	}

	pub fn pattern(self, pattern: impl Into<String>) -> Self {
		self.put("pattern", pattern)
	}

	pub fn min(self, min: impl fmt::Display) -> Self {
		self.put("min", min.to_string())
	}

	pub fn max(self, max: impl fmt::Display) -> Self {
		self.put("max", max.to_string())
	}

	pub fn step(self, step: impl fmt::Display) -> Self {
		self.put("step", step.to_string())
	}

	pub fn max_length(self, length: usize) -> Self {
		self.put("maxlength", length.to_string())
	}

	pub fn tab_index(self, index: i32) -> Self {
		self.put("tabindex", index.to_string())
	}

	/// Set `autocomplete` to `on` or `off`.
	pub fn autocomplete(self, enabled: bool) -> Self {
		self.put("autocomplete", if enabled { "on" } else { "off" })
	}

	pub fn disabled(self, disabled: bool) -> Self {
		self.flag("disabled", disabled)
	}

	pub fn readonly(self, readonly: bool) -> Self {
		self.flag("readonly", readonly)
	}

	pub fn required(self, required: bool) -> Self {
		self.flag("required", required)
	}

	pub fn checked(self, checked: bool) -> Self {
		self.flag("checked", checked)
	}

	pub fn selected(self, selected: bool) -> Self {
		self.flag("selected", selected)
	}

	pub fn multiple(self, multiple: bool) -> Self {
		self.flag("multiple", multiple)
	}

	pub fn autofocus(self, autofocus: bool) -> Self {
		self.flag("autofocus", autofocus)
	}

	/// Append a child node
	///
	/// Children of void elements are kept but never rendered.
	pub fn child(mut self, child: impl Into<Node>) -> Self {
		self.children.push(child.into());
		self
	}

	/// Append several child nodes
	pub fn children_from<N: Into<Node>>(mut self, children: impl IntoIterator<Item = N>) -> Self {
		self.children.extend(children.into_iter().map(Into::into));
		self
	}

	/// Set text content
	///
	/// This replaces all children of the element.
	pub fn text(mut self, text: impl Into<String>) -> Self {
		self.children.clear();
		self.children.push(Node::Text(text.into()));
		self
	}

	/// Append escaped text after the existing children.
	pub fn append_text(self, text: impl Into<String>) -> Self {
		self.child(Node::Text(text.into()))
	}

	/// Append trusted markup that is written without escaping.
	pub fn raw_html(self, html: impl Into<String>) -> Self {
		self.child(Node::Raw(html.into()))
	}

	/// Renders the element to an HTML string.
	///
	/// Rendering does not modify the element, so repeated calls return the
	/// same output.
	pub fn render(&self) -> String {
		let mut output = String::new();
		self.render_into(&mut output);
		output
	}

	fn render_into(&self, output: &mut String) {
		let tag = self.tag.as_str();
		output.push('<');
		output.push_str(tag);

		let class_value = (!self.classes.is_empty()).then(|| self.classes.join(" "));
		let mut attributes: Vec<(&str, &str)> = self
			.attributes
			.iter()
			.map(|(name, value)| (name.as_str(), value.as_str()))
			.collect();
		if let Some(classes) = class_value.as_deref() {
			let position = attributes.partition_point(|(name, _)| *name < "class");
			attributes.insert(position, ("class", classes));
		}

		for (name, value) in attributes {
			output.push(' ');
			output.push_str(name);
			output.push_str("=\"");
			output.push_str(&escape_attr(value));
			output.push('"');
		}

		if self.tag.is_void() {
			output.push_str(" />");
			return;
		}

		output.push('>');
		for child in &self.children {
			match child {
				Node::Element(element) => element.render_into(output),
				Node::Text(text) => output.push_str(&escape(text)),
				Node::Raw(html) => output.push_str(html),
			}
		}
		output.push_str("</");
		output.push_str(tag);
		output.push('>');
	}
}

impl fmt::Display for Element {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.render())
	}
}
