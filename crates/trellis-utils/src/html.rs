//! HTML escaping for element rendering

use std::borrow::Cow;

/// Escape HTML special characters in text content
///
/// Returns a borrowed reference if no escaping is needed.
///
/// # Examples
///
/// ```
/// use trellis_utils::html::escape;
///
/// assert_eq!(escape("Hello, World!"), "Hello, World!");
/// assert_eq!(escape("<b>bold</b>"), "&lt;b&gt;bold&lt;/b&gt;");
/// assert_eq!(escape("5 < 10 & 10 > 5"), "5 &lt; 10 &amp; 10 &gt; 5");
/// ```
pub fn escape(text: &str) -> Cow<'_, str> {
	if !text.contains(['&', '<', '>', '"', '\'']) {
		return Cow::Borrowed(text);
	}
	let mut result = String::with_capacity(text.len() + 10);
	for ch in text.chars() {
		match ch {
			'&' => result.push_str("&amp;"),
			'<' => result.push_str("&lt;"),
			'>' => result.push_str("&gt;"),
			'"' => result.push_str("&quot;"),
			'\'' => result.push_str("&#x27;"),
			_ => result.push(ch),
		}
	}
	Cow::Owned(result)
}

/// Escape attribute value for use in a double-quoted HTML attribute
///
/// Line breaks and tabs are encoded so the value survives round trips
/// through the browser unchanged.
///
/// # Examples
///
/// ```
/// use trellis_utils::html::escape_attr;
///
/// assert_eq!(escape_attr("value"), "value");
/// assert_eq!(escape_attr("value with \"quotes\""), "value with &quot;quotes&quot;");
/// assert_eq!(escape_attr("line\nbreak"), "line&#10;break");
/// ```
pub fn escape_attr(text: &str) -> Cow<'_, str> {
	if !text.contains(['&', '<', '>', '"', '\'', '\n', '\r', '\t']) {
		return Cow::Borrowed(text);
	}
	let mut result = String::with_capacity(text.len() + 10);
	for ch in text.chars() {
		match ch {
			'&' => result.push_str("&amp;"),
			'<' => result.push_str("&lt;"),
			'>' => result.push_str("&gt;"),
			'"' => result.push_str("&quot;"),
			'\'' => result.push_str("&#x27;"),
			'\n' => result.push_str("&#10;"),
			'\r' => result.push_str("&#13;"),
			'\t' => result.push_str("&#9;"),
			_ => result.push(ch),
		}
	}
	Cow::Owned(result)
}

/// Returns `true` if `name` is usable as an HTML attribute name.
///
/// Follows the HTML syntax rules: non-empty, and free of whitespace, control
/// characters, quotes, `>`, `/` and `=`.
///
/// # Examples
///
/// ```
/// use trellis_utils::html::is_valid_attribute_name;
///
/// assert!(is_valid_attribute_name("data-toggle"));
/// assert!(is_valid_attribute_name("aria-label"));
/// assert!(!is_valid_attribute_name(""));
/// assert!(!is_valid_attribute_name("on click"));
/// assert!(!is_valid_attribute_name("x\"y"));
/// ```
pub fn is_valid_attribute_name(name: &str) -> bool {
	!name.is_empty()
		&& !name.chars().any(|c| {
			c.is_whitespace()
				|| c.is_control()
				|| matches!(c, '"' | '\'' | '>' | '<' | '/' | '=' | '\u{FFFD}')
		})
}

/// Returns `true` if `name` is usable as a single CSS class token.
pub fn is_valid_class_name(name: &str) -> bool {
	!name.is_empty() && !name.chars().any(|c| c.is_whitespace() || c.is_control() || c == '"')
}
