//! Bootstrap presets
//!
//! [`Bootstrap`] builds elements with the CSS classes a Bootstrap layout
//! expects. Version 3 and 4 differ in a handful of class names (panels became
//! cards, `help-block` became `form-text`, and so on); the kit picks the right
//! one from [`HtmlSettings::bootstrap_version`].
//!
//! ```
//! use trellis_html::bootstrap::{Bootstrap, ButtonStyle};
//!
//! let bs = Bootstrap::v3();
//! assert_eq!(bs.modal_body().render(), r#"<div class="modal-body"></div>"#);
//! assert_eq!(
//!     bs.button(ButtonStyle::Primary).text("Save").render(),
//!     r#"<button class="btn btn-primary" type="button">Save</button>"#
//! );
//! ```

use crate::element::Element;
use crate::elements::{button, div, h4, label, small, span, table, text_box};
use crate::tag::{ButtonType, HtmlTag, InputType};
use trellis_conf::HtmlSettings;

/// Targeted Bootstrap major version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BootstrapVersion {
	#[default]
	V3,
	V4,
}

impl BootstrapVersion {
	/// Maps a configured major version; anything other than 4 targets 3.
	pub fn from_major(major: u8) -> Self {
		match major {
			4 => Self::V4,
			_ => Self::V3,
		}
	}
}

/// Contextual button styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ButtonStyle {
	#[default]
	Default,
	Primary,
	Secondary,
	Success,
	Info,
	Warning,
	Danger,
	Link,
}

impl ButtonStyle {
	fn class(&self, version: BootstrapVersion) -> &'static str {
		match (self, version) {
			(Self::Default, BootstrapVersion::V3) => "btn-default",
			(Self::Default | Self::Secondary, BootstrapVersion::V4) => "btn-secondary",
			(Self::Secondary, BootstrapVersion::V3) => "btn-default",
			(Self::Primary, _) => "btn-primary",
			(Self::Success, _) => "btn-success",
			(Self::Info, _) => "btn-info",
			(Self::Warning, _) => "btn-warning",
			(Self::Danger, _) => "btn-danger",
			(Self::Link, _) => "btn-link",
		}
	}
}

/// Button sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonSize {
	Large,
	Small,
	ExtraSmall,
}

/// Contextual alert kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlertKind {
	Success,
	Info,
	Warning,
	Danger,
}

impl AlertKind {
	fn suffix(&self) -> &'static str {
		match self {
			Self::Success => "success",
			Self::Info => "info",
			Self::Warning => "warning",
			Self::Danger => "danger",
		}
	}
}

/// Grid breakpoints used by `col-{size}-{n}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnSize {
	ExtraSmall,
	Small,
	Medium,
	Large,
}

impl ColumnSize {
	fn as_str(&self) -> &'static str {
		match self {
			Self::ExtraSmall => "xs",
			Self::Small => "sm",
			Self::Medium => "md",
			Self::Large => "lg",
		}
	}
}

/// Table modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableStyle {
	Striped,
	Bordered,
	Hover,
	Condensed,
}

/// Preset factory for one Bootstrap version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bootstrap {
	version: BootstrapVersion,
}

impl Bootstrap {
	pub fn new(version: BootstrapVersion) -> Self {
		Self { version }
	}

	pub fn v3() -> Self {
		Self::new(BootstrapVersion::V3)
	}

	pub fn v4() -> Self {
		Self::new(BootstrapVersion::V4)
	}

	/// Kit for the version configured in `settings`.
	pub fn from_settings(settings: &HtmlSettings) -> Self {
		Self::new(BootstrapVersion::from_major(settings.bootstrap_version))
	}

	pub fn version(&self) -> BootstrapVersion {
		self.version
	}

	fn pick(&self, v3: &'static str, v4: &'static str) -> &'static str {
		match self.version {
			BootstrapVersion::V3 => v3,
			BootstrapVersion::V4 => v4,
		}
	}

	// Modal

	/// `<div class="modal fade" role="dialog" tabindex="-1">`
	pub fn modal(&self) -> Element {
		div()
			.with_class("modal fade")
			.put("role", "dialog")
			.tab_index(-1)
	}

	pub fn modal_dialog(&self) -> Element {
		div().with_class("modal-dialog").put("role", "document")
	}

	pub fn modal_content(&self) -> Element {
		div().with_class("modal-content")
	}

	pub fn modal_header(&self) -> Element {
		div().with_class("modal-header")
	}

	pub fn modal_title(&self) -> Element {
		h4().with_class("modal-title")
	}

	pub fn modal_body(&self) -> Element {
		div().with_class("modal-body")
	}

	pub fn modal_footer(&self) -> Element {
		div().with_class("modal-footer")
	}

	/// Close button for a modal header.
	pub fn modal_close(&self) -> Element {
		button()
			.button_type(ButtonType::Button)
			.with_class("close")
			.put("data-dismiss", "modal")
			.put("aria-label", "Close")
			.raw_html("<span aria-hidden=\"true\">&times;</span>")
	}

	// Forms

	pub fn form_group(&self) -> Element {
		div().with_class("form-group")
	}

	/// Any input with `form-control`. Checkboxes and radios use
	/// `form-check-input` on version 4 and no class on version 3.
	pub fn input(&self, input_type: InputType) -> Element {
		let element = Element::input(input_type);
		match input_type {
			InputType::Checkbox | InputType::Radio => match self.version {
				BootstrapVersion::V3 => element,
				BootstrapVersion::V4 => element.with_class("form-check-input"),
			},
			InputType::File => element.with_class(self.pick("form-control", "form-control-file")),
			_ => element.with_class("form-control"),
		}
	}

	pub fn text_box(&self) -> Element {
		text_box().with_class("form-control")
	}

	pub fn textarea(&self) -> Element {
		Element::new(HtmlTag::Textarea).with_class("form-control")
	}

	pub fn select(&self) -> Element {
		Element::new(HtmlTag::Select).with_class("form-control")
	}

	pub fn control_label(&self) -> Element {
		label().with_class(self.pick("control-label", "col-form-label"))
	}

	/// Help text under a control: `help-block` on 3, `form-text` on 4.
	pub fn help_block(&self) -> Element {
		match self.version {
			BootstrapVersion::V3 => span().with_class("help-block"),
			BootstrapVersion::V4 => small().with_class("form-text text-muted"),
		}
	}

	// Buttons

	/// `<button type="button" class="btn btn-…">`
	pub fn button(&self, style: ButtonStyle) -> Element {
		button()
			.button_type(ButtonType::Button)
			.with_class("btn")
			.with_class(style.class(self.version))
	}

	/// Submit button.
	pub fn submit_button(&self, style: ButtonStyle) -> Element {
		self.button(style).button_type(ButtonType::Submit)
	}

	/// Adds a size class to a button.
	pub fn sized(&self, element: Element, size: ButtonSize) -> Element {
		let class = match size {
			ButtonSize::Large => "btn-lg",
			ButtonSize::Small => "btn-sm",
			ButtonSize::ExtraSmall => self.pick("btn-xs", "btn-sm"),
		};
		element.with_class(class)
	}

	// Feedback

	pub fn alert(&self, kind: AlertKind) -> Element {
		div()
			.with_class("alert")
			.with_class(&format!("alert-{}", kind.suffix()))
			.put("role", "alert")
	}

	/// Counter badge.
	pub fn badge(&self) -> Element {
		span().with_class(self.pick("badge", "badge badge-secondary"))
	}

	/// Inline label; version 4 renders it as a badge.
	pub fn label(&self, kind: AlertKind) -> Element {
		let prefix = self.pick("label", "badge");
		span()
			.with_class(prefix)
			.with_class(&format!("{}-{}", prefix, kind.suffix()))
	}

	// Grid

	pub fn container(&self) -> Element {
		div().with_class("container")
	}

	pub fn row(&self) -> Element {
		div().with_class("row")
	}

	/// `col-{size}-{width}`; the width clamps to 1-12.
	pub fn column(&self, size: ColumnSize, width: u8) -> Element {
		let width = width.clamp(1, 12);
		let class = match (self.version, size) {
			(BootstrapVersion::V4, ColumnSize::ExtraSmall) => format!("col-{}", width),
			_ => format!("col-{}-{}", size.as_str(), width),
		};
		div().with_class(&class)
	}

	// Panels and cards

	pub fn panel(&self) -> Element {
		match self.version {
			BootstrapVersion::V3 => div().with_class("panel panel-default"),
			BootstrapVersion::V4 => div().with_class("card"),
		}
	}

	pub fn panel_heading(&self) -> Element {
		div().with_class(self.pick("panel-heading", "card-header"))
	}

	pub fn panel_body(&self) -> Element {
		div().with_class(self.pick("panel-body", "card-body"))
	}

	pub fn panel_footer(&self) -> Element {
		div().with_class(self.pick("panel-footer", "card-footer"))
	}

	// Tables

	/// `<table class="table …">` with the given modifiers.
	pub fn table(&self, styles: &[TableStyle]) -> Element {
		styles
			.iter()
			.fold(table().with_class("table"), |element, style| {
				element.with_class(match style {
					TableStyle::Striped => "table-striped",
					TableStyle::Bordered => "table-bordered",
					TableStyle::Hover => "table-hover",
					TableStyle::Condensed => self.pick("table-condensed", "table-sm"),
				})
			})
	}
}

impl Element {
	/// Wraps this control in a `form-group` with a preceding label.
	pub fn in_form_group(self, kit: &Bootstrap, label_text: impl Into<String>) -> Element {
		let mut label = kit.control_label().text(label_text);
		if let Some(id) = self.attribute("id") {
			label = label.for_id(id);
		}
		kit.form_group().child(label).child(self)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(Bootstrap::v3(), "btn-default")]
	#[case(Bootstrap::v4(), "btn-secondary")]
	fn test_default_button_per_version(#[case] kit: Bootstrap, #[case] class: &str) {
		let btn = kit.button(ButtonStyle::Default);
		assert_eq!(btn.classes(), &["btn".to_string(), class.to_string()]);
	}

	#[rstest]
	fn test_modal_body() {
		assert_eq!(Bootstrap::v4().modal_body().render(), r#"<div class="modal-body"></div>"#);
	}

	#[rstest]
	#[case(InputType::Email, Some("form-control"))]
	#[case(InputType::Checkbox, None)]
	fn test_v3_input_classes(#[case] input_type: InputType, #[case] class: Option<&str>) {
		let el = Bootstrap::v3().input(input_type);
		assert_eq!(el.attribute("type").as_deref(), Some(input_type.as_str()));
		assert_eq!(el.classes().first().map(String::as_str), class);
	}

	#[rstest]
	#[case(Bootstrap::v3(), ColumnSize::ExtraSmall, 6, "col-xs-6")]
	#[case(Bootstrap::v4(), ColumnSize::ExtraSmall, 6, "col-6")]
	#[case(Bootstrap::v3(), ColumnSize::Medium, 20, "col-md-12")]
	#[case(Bootstrap::v4(), ColumnSize::Large, 0, "col-lg-1")]
	fn test_column_classes(
		#[case] kit: Bootstrap,
		#[case] size: ColumnSize,
		#[case] width: u8,
		#[case] class: &str,
	) {
		assert!(kit.column(size, width).has_class(class));
	}

	#[rstest]
	fn test_table_modifiers() {
		let el = Bootstrap::v4().table(&[TableStyle::Striped, TableStyle::Condensed]);
		assert_eq!(el.render(), r#"<table class="table table-striped table-sm"></table>"#);
	}

	#[rstest]
	fn test_from_settings() {
		let settings = HtmlSettings {
			bootstrap_version: 4,
			..HtmlSettings::default()
		};
		assert_eq!(Bootstrap::from_settings(&settings).version(), BootstrapVersion::V4);
		assert_eq!(Bootstrap::from_settings(&HtmlSettings::default()).version(), BootstrapVersion::V3);
	}

	#[rstest]
	fn test_in_form_group() {
		let kit = Bootstrap::v3();
		let group = kit.text_box().id("Name").in_form_group(&kit, "Name");
		assert_eq!(
			group.render(),
			concat!(
				r#"<div class="form-group">"#,
				r#"<label class="control-label" for="Name">Name</label>"#,
				r#"<input class="form-control" id="Name" type="text" />"#,
				"</div>"
			)
		);
	}
}
