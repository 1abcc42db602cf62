//! Model binding integration tests

use rstest::{fixture, rstest};
use serde::Serialize;
use trellis_conf::HtmlSettings;
use trellis_html::model::{MetadataRegistry, PropertyMetadata, ValidationRule};
use trellis_html::{
	DefaultModelBinder, ModelBinder, ModelProperty, checkbox, label_for, property, select_list,
	text_box, textarea,
};

#[derive(Serialize)]
struct Line {
	sku: String,
	quantity: u32,
}

#[derive(Serialize)]
struct Order {
	reference: String,
	notes: Option<String>,
	express: bool,
	country: String,
	lines: Vec<Line>,
}

#[fixture]
fn order() -> Order {
	Order {
		reference: "A-17".to_string(),
		notes: Some("Leave at <door>".to_string()),
		express: false,
		country: "NO".to_string(),
		lines: vec![Line {
			sku: "X1".to_string(),
			quantity: 3,
		}],
	}
}

#[fixture]
fn registry() -> MetadataRegistry {
	MetadataRegistry::new()
		.with_property(
			"reference",
			PropertyMetadata::new()
				.display_name("Reference")
				.rule(ValidationRule::Required { message: None })
				.rule(ValidationRule::StringLength {
					min: None,
					max: 10,
					message: None,
				}),
		)
		.with_property(
			"express",
			PropertyMetadata::new().display_name("Express delivery"),
		)
}

/// Test: Text box receives name, id, value and validation attributes
#[rstest]
fn test_text_box_with_validation(order: Order, registry: MetadataRegistry) {
	let binder = DefaultModelBinder::new(registry);
	let bound = binder.bind(&order, &property!(Order, reference));

	assert_eq!(
		text_box().bind(&bound).render(),
		concat!(
			r#"<input data-val="true" "#,
			r#"data-val-length="The field Reference must be a string with a maximum length of 10." "#,
			r#"data-val-length-max="10" "#,
			r#"data-val-required="The Reference field is required." "#,
			r#"id="reference" name="reference" type="text" value="A-17" />"#
		)
	);
}

/// Test: Label uses the display name from metadata
#[rstest]
fn test_label_for(order: Order, registry: MetadataRegistry) {
	let binder = DefaultModelBinder::new(registry);
	let bound = binder.bind(&order, &property!(Order, express));
	assert_eq!(
		label_for(&bound).render(),
		r#"<label for="express">Express delivery</label>"#
	);
}

/// Test: Unchecked checkbox still posts "true" when ticked
#[rstest]
fn test_unchecked_checkbox(order: Order, registry: MetadataRegistry) {
	let binder = DefaultModelBinder::new(registry);
	let bound = binder.bind(&order, &property!(Order, express));
	assert_eq!(
		checkbox().bind(&bound).render(),
		r#"<input id="express" name="express" type="checkbox" value="true" />"#
	);
}

/// Test: Textarea receives the value as escaped text
#[rstest]
fn test_textarea_binding(order: Order) {
	let binder = DefaultModelBinder::new(MetadataRegistry::new());
	let bound = binder.bind(&order, &property!(Order, notes));
	assert_eq!(
		textarea().bind(&bound).render(),
		r#"<textarea id="notes" name="notes">Leave at &lt;door&gt;</textarea>"#
	);
}

/// Test: Select marks the bound option
#[rstest]
fn test_select_binding(order: Order) {
	let binder = DefaultModelBinder::new(MetadataRegistry::new());
	let bound = binder.bind(&order, &property!(Order, country));
	let html = select_list([("SE", "Sweden"), ("NO", "Norway")])
		.bind(&bound)
		.render();
	assert!(html.contains(r#"<option selected="selected" value="NO">Norway</option>"#));
	assert!(html.contains(r#"<option value="SE">Sweden</option>"#));
}

/// Test: Indexed paths sanitize into ids with the configured replacement
#[rstest]
fn test_indexed_path(order: Order) {
	let settings = HtmlSettings {
		id_replacement: "-".to_string(),
		..HtmlSettings::default()
	};
	let binder = DefaultModelBinder::with_settings(MetadataRegistry::new(), settings);
	let quantity = ModelProperty::new("lines[0].quantity", |o: &Order| o.lines[0].quantity);
	let bound = binder.bind(&order, &quantity);

	assert_eq!(bound.name, "lines[0].quantity");
	assert_eq!(bound.id, "lines-0--quantity");
	assert_eq!(bound.value.as_deref(), Some("3"));
	assert_eq!(bound.display_name, "quantity");
}
