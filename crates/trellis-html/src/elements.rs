//! Constructors for specific tags and input types.
//!
//! Each function returns a plain [`Element`] with the tag, input type and any
//! fixed attributes already set.
//!
//! ```
//! use trellis_html::{checkbox, form, submit, FormMethod};
//!
//! assert_eq!(checkbox().render(), r#"<input type="checkbox" />"#);
//!
//! let login = form()
//!     .action("/account/login")
//!     .method(FormMethod::Post)
//!     .child(submit().value("Sign in"));
//! assert_eq!(
//!     login.render(),
//!     r#"<form action="/account/login" method="post"><input type="submit" value="Sign in" /></form>"#
//! );
//! ```

use crate::element::{Element, Node};
use crate::tag::{ButtonType, FormMethod, HtmlTag, InputType};

macro_rules! container_constructors {
	($($(#[$meta:meta])* $fn_name:ident => $tag:ident),* $(,)?) => {
		$(
			$(#[$meta])*
			pub fn $fn_name() -> Element {
				Element::new(HtmlTag::$tag)
			}
		)*
	};
}

macro_rules! input_constructors {
	($($fn_name:ident => $input_type:ident),* $(,)?) => {
		$(
			#[doc = concat!("`<input>` of type [`InputType::", stringify!($input_type), "`].")]
			pub fn $fn_name() -> Element {
				Element::input(InputType::$input_type)
			}
		)*
	};
}

container_constructors! {
	/// `<a>`; see [`link`] for an anchor with `href` and text.
	anchor => A,
	button => Button,
	div => Div,
	fieldset => Fieldset,
	form => Form,
	label => Label,
	legend => Legend,
	li => Li,
	nav => Nav,
	ol => Ol,
	p => P,
	section => Section,
	select => Select,
	small => Small,
	span => Span,
	strong => Strong,
	table => Table,
	tbody => Tbody,
	td => Td,
	textarea => Textarea,
	th => Th,
	thead => Thead,
	tr => Tr,
	ul => Ul,
	br => Br,
	hr => Hr,
	img => Img,
	h1 => H1,
	h2 => H2,
	h3 => H3,
	h4 => H4,
	h5 => H5,
	h6 => H6,
}

input_constructors! {
	checkbox => Checkbox,
	color => Color,
	date => Date,
	email => Email,
	file => File,
	hidden => Hidden,
	month => Month,
	number => Number,
	password => Password,
	radio => Radio,
	range => Range,
	reset => Reset,
	search => Search,
	submit => Submit,
	tel => Tel,
	text_box => Text,
	time => Time,
	url => Url,
	week => Week,
}

/// `<input type="datetime-local" />`
pub fn datetime_local() -> Element {
	Element::input(InputType::DateTimeLocal)
}

/// `<input type="button" />`
pub fn input_button() -> Element {
	Element::input(InputType::Button)
}

/// `<h1>` to `<h6>`.
pub fn heading(level: u8) -> Element {
	Element::new(HtmlTag::heading(level))
}

/// `<a href="…">text</a>`
pub fn link(href: impl Into<String>, text: impl Into<String>) -> Element {
	anchor().href(href).text(text)
}

/// `<option value="…">text</option>`
pub fn option(value: impl Into<String>, text: impl Into<String>) -> Element {
	Element::new(HtmlTag::Option).value(value).text(text)
}

/// `<select>` populated with `(value, text)` options.
pub fn select_list<V, T>(options: impl IntoIterator<Item = (V, T)>) -> Element
where
	V: Into<String>,
	T: Into<String>,
{
	select().children_from(options.into_iter().map(|(v, t)| option(v, t)))
}

impl Element {
	/// Set the `action` attribute of a form.
	pub fn action(self, url: impl Into<String>) -> Self {
		self.put("action", url)
	}

	/// Set the `method` attribute of a form.
	pub fn method(self, method: FormMethod) -> Self {
		self.put("method", method.as_str())
	}

	/// Set `enctype="multipart/form-data"` for file uploads.
	pub fn multipart(self) -> Self {
		self.put("enctype", "multipart/form-data")
	}

	/// Set the `type` attribute of a `<button>`.
	pub fn button_type(self, button_type: ButtonType) -> Self {
		self.put("type", button_type.as_str())
	}

	/// Set `rows` on a textarea.
	pub fn rows(self, rows: usize) -> Self {
		self.put("rows", rows.to_string())
	}

	/// Set `cols` on a textarea.
	pub fn cols(self, cols: usize) -> Self {
		self.put("cols", cols.to_string())
	}

	/// Set `src` and `alt` on an image.
	pub fn image_source(self, src: impl Into<String>, alt: impl Into<String>) -> Self {
		self.put("src", src).put("alt", alt)
	}

	/// Marks `<option>` children whose value equals `value` as selected and
	/// clears the rest.
	pub fn select_value(mut self, value: &str) -> Self {
		for node in self.children_mut().iter_mut() {
			if let Node::Element(option) = node
				&& option.tag() == HtmlTag::Option
			{
				let is_match = option.attribute("value").as_deref() == Some(value);
				option.toggle("selected", is_match);
			}
		}
		self
	}
}
