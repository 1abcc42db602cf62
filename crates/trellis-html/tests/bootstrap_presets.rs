//! Bootstrap preset integration tests

#![cfg(feature = "bootstrap")]

use rstest::rstest;
use trellis_html::InputType;
use trellis_html::bootstrap::{AlertKind, Bootstrap, ButtonSize, ButtonStyle};

/// Test: Full modal dialog composed from presets
#[rstest]
fn test_modal_composition() {
	let bs = Bootstrap::v3();
	let modal = bs.modal().id("confirm").child(
		bs.modal_dialog().child(
			bs.modal_content()
				.child(bs.modal_header().child(bs.modal_title().text("Delete?")))
				.child(bs.modal_body().text("This cannot be undone."))
				.child(
					bs.modal_footer()
						.child(bs.button(ButtonStyle::Default).text("Cancel"))
						.child(bs.button(ButtonStyle::Danger).text("Delete")),
				),
		),
	);

	assert_eq!(
		modal.render(),
		concat!(
			r#"<div class="modal fade" id="confirm" role="dialog" tabindex="-1">"#,
			r#"<div class="modal-dialog" role="document">"#,
			r#"<div class="modal-content">"#,
			r#"<div class="modal-header"><h4 class="modal-title">Delete?</h4></div>"#,
			r#"<div class="modal-body">This cannot be undone.</div>"#,
			r#"<div class="modal-footer">"#,
			r#"<button class="btn btn-default" type="button">Cancel</button>"#,
			r#"<button class="btn btn-danger" type="button">Delete</button>"#,
			"</div></div></div></div>"
		)
	);
}

/// Test: Version-specific class names
#[rstest]
#[case(Bootstrap::v3(), "panel panel-default", "help-block", "control-label")]
#[case(Bootstrap::v4(), "card", "form-text text-muted", "col-form-label")]
fn test_version_classes(
	#[case] bs: Bootstrap,
	#[case] panel: &str,
	#[case] help: &str,
	#[case] label: &str,
) {
	assert_eq!(bs.panel().classes().join(" "), panel);
	assert_eq!(bs.help_block().classes().join(" "), help);
	assert_eq!(bs.control_label().classes().join(" "), label);
}

/// Test: Alerts and labels carry the contextual kind
#[rstest]
fn test_alert_and_label() {
	let bs = Bootstrap::v3();
	assert_eq!(
		bs.alert(AlertKind::Warning).text("Careful").render(),
		r#"<div class="alert alert-warning" role="alert">Careful</div>"#
	);
	assert_eq!(
		bs.label(AlertKind::Success).text("New").render(),
		r#"<span class="label label-success">New</span>"#
	);
	assert_eq!(
		Bootstrap::v4().label(AlertKind::Success).classes().join(" "),
		"badge badge-success"
	);
}

/// Test: Sized submit button
#[rstest]
fn test_sized_submit() {
	let bs = Bootstrap::v4();
	let btn = bs.sized(bs.submit_button(ButtonStyle::Primary), ButtonSize::ExtraSmall);
	assert_eq!(
		btn.render(),
		r#"<button class="btn btn-primary btn-sm" type="submit"></button>"#
	);
}

/// Test: File inputs use the version-specific control class
#[rstest]
#[case(Bootstrap::v3(), "form-control")]
#[case(Bootstrap::v4(), "form-control-file")]
fn test_file_input_class(#[case] bs: Bootstrap, #[case] class: &str) {
	assert!(bs.input(InputType::File).has_class(class));
}
