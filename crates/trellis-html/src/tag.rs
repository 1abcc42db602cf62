//! Tag names, input types and other enumerated attribute values.

use std::fmt;
use std::str::FromStr;
use trellis_core::exception::Error;

/// HTML tags the builders can produce.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HtmlTag {
	A,
	Br,
	Button,
	Div,
	Fieldset,
	Form,
	H1,
	H2,
	H3,
	H4,
	H5,
	H6,
	Hr,
	Img,
	Input,
	Label,
	Legend,
	Li,
	Nav,
	Ol,
	Option,
	P,
	Section,
	Select,
	Small,
	Span,
	Strong,
	Table,
	Tbody,
	Td,
	Textarea,
	Th,
	Thead,
	Tr,
	Ul,
}

impl HtmlTag {
	/// The tag name as written in markup.
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::A => "a",
			Self::Br => "br",
			Self::Button => "button",
			Self::Div => "div",
			Self::Fieldset => "fieldset",
			Self::Form => "form",
			Self::H1 => "h1",
			Self::H2 => "h2",
			Self::H3 => "h3",
			Self::H4 => "h4",
			Self::H5 => "h5",
			Self::H6 => "h6",
			Self::Hr => "hr",
			Self::Img => "img",
			Self::Input => "input",
			Self::Label => "label",
			Self::Legend => "legend",
			Self::Li => "li",
			Self::Nav => "nav",
			Self::Ol => "ol",
			Self::Option => "option",
			Self::P => "p",
			Self::Section => "section",
			Self::Select => "select",
			Self::Small => "small",
			Self::Span => "span",
			Self::Strong => "strong",
			Self::Table => "table",
			Self::Tbody => "tbody",
			Self::Td => "td",
			Self::Textarea => "textarea",
			Self::Th => "th",
			Self::Thead => "thead",
			Self::Tr => "tr",
			Self::Ul => "ul",
		}
	}

	/// Void elements have no closing tag and never render children.
	pub fn is_void(&self) -> bool {
		matches!(self, Self::Br | Self::Hr | Self::Img | Self::Input)
	}

	/// Heading tag for level 1-6; levels outside the range clamp.
	pub fn heading(level: u8) -> Self {
		match level {
			0 | 1 => Self::H1,
			2 => Self::H2,
			3 => Self::H3,
			4 => Self::H4,
			5 => Self::H5,
			_ => Self::H6,
		}
	}
}

impl fmt::Display for HtmlTag {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Values of the `type` attribute of `<input>`.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputType {
	Button,
	Checkbox,
	Color,
	Date,
	DateTimeLocal,
	Email,
	File,
	Hidden,
	Month,
	Number,
	Password,
	Radio,
	Range,
	Reset,
	Search,
	Submit,
	Tel,
	Text,
	Time,
	Url,
	Week,
}

impl InputType {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Button => "button",
			Self::Checkbox => "checkbox",
			Self::Color => "color",
			Self::Date => "date",
			Self::DateTimeLocal => "datetime-local",
			Self::Email => "email",
			Self::File => "file",
			Self::Hidden => "hidden",
			Self::Month => "month",
			Self::Number => "number",
			Self::Password => "password",
			Self::Radio => "radio",
			Self::Range => "range",
			Self::Reset => "reset",
			Self::Search => "search",
			Self::Submit => "submit",
			Self::Tel => "tel",
			Self::Text => "text",
			Self::Time => "time",
			Self::Url => "url",
			Self::Week => "week",
		}
	}

	/// Inputs whose `value` is fixed by markup rather than by a bound model.
	pub fn keeps_own_value(&self) -> bool {
		matches!(
			self,
			Self::Radio | Self::Submit | Self::Reset | Self::Button | Self::Checkbox
		)
	}

	/// Inputs that never echo a bound value back to the client.
	pub fn suppresses_value(&self) -> bool {
		matches!(self, Self::Password | Self::File)
	}
}

impl fmt::Display for InputType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for InputType {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let input_type = match s.to_ascii_lowercase().as_str() {
			"button" => Self::Button,
			"checkbox" => Self::Checkbox,
			"color" => Self::Color,
			"date" => Self::Date,
			"datetime-local" => Self::DateTimeLocal,
			"email" => Self::Email,
			"file" => Self::File,
			"hidden" => Self::Hidden,
			"month" => Self::Month,
			"number" => Self::Number,
			"password" => Self::Password,
			"radio" => Self::Radio,
			"range" => Self::Range,
			"reset" => Self::Reset,
			"search" => Self::Search,
			"submit" => Self::Submit,
			"tel" => Self::Tel,
			"text" => Self::Text,
			"time" => Self::Time,
			"url" => Self::Url,
			"week" => Self::Week,
			other => {
				return Err(Error::invalid_argument(
					"type",
					format!("unknown input type '{}'", other),
				));
			}
		};
		Ok(input_type)
	}
}

/// Form submission method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FormMethod {
	Get,
	#[default]
	Post,
}

impl FormMethod {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Get => "get",
			Self::Post => "post",
		}
	}
}

/// The `type` attribute of `<button>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ButtonType {
	#[default]
	Submit,
	Reset,
	Button,
}

impl ButtonType {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Submit => "submit",
			Self::Reset => "reset",
			Self::Button => "button",
		}
	}
}
