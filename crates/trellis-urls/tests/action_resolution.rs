//! Action resolution integration tests
//!
//! Exercises the resolver end to end: naming, argument flattening, precedence
//! of caller-supplied values, error cases and concurrent cache use.

use rstest::{fixture, rstest};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use trellis_urls::{
	ActionCall, ActionResolver, ControllerRouteCache, ConventionalUrlGenerator, RouteValues,
	UrlGenerator, controller,
};

pub struct WidgetsController;

controller! {
	WidgetsController {
		Index(),
		Edit(id),
		Save(model),
		Move(id, target),
	}
}

pub struct DashboardController;

controller! {
	DashboardController in "admin" {
		Index(),
	}
}

#[derive(Serialize)]
struct WidgetModel {
	#[serde(rename = "Id")]
	id: u32,
	#[serde(rename = "Name")]
	name: &'static str,
}

#[fixture]
fn resolver() -> ActionResolver {
	ActionResolver::new()
}

/// Test: Controller without an area resolves with an empty area
#[rstest]
fn test_controller_without_area(resolver: ActionResolver) {
	let route = resolver
		.resolve::<WidgetsController>(ActionCall::new::<WidgetsController>("Index"))
		.unwrap();

	assert_eq!(route.controller, "Widgets");
	assert_eq!(route.action, "Index");
	assert_eq!(route.values.len(), 1);
	assert_eq!(route.values.get("area"), Some(&json!("")));
}

/// Test: Positional argument takes the declared parameter name
#[rstest]
fn test_edit_with_id(resolver: ActionResolver) {
	let route = resolver
		.resolve::<WidgetsController>(ActionCall::new::<WidgetsController>("Edit").arg(42))
		.unwrap();

	let expected: RouteValues = [("id", json!(42)), ("area", json!(""))].into_iter().collect();
	assert_eq!(route.action, "Edit");
	assert_eq!(route.values, expected);
}

/// Test: Object argument flattens into one entry per field
#[rstest]
fn test_object_argument_flattens(resolver: ActionResolver) {
	let call = ActionCall::new::<WidgetsController>("Save").arg(WidgetModel { id: 1, name: "x" });
	let route = resolver.resolve::<WidgetsController>(call).unwrap();

	assert_eq!(route.values.get("Id"), Some(&json!(1)));
	assert_eq!(route.values.get("Name"), Some(&json!("x")));
	assert!(!route.values.contains_key("model"));
	assert_eq!(route.values.len(), 3);
}

/// Test: Null argument is omitted
#[rstest]
fn test_null_argument_omitted(resolver: ActionResolver) {
	let route = resolver
		.resolve::<WidgetsController>(
			ActionCall::new::<WidgetsController>("Edit").arg(Option::<u32>::None),
		)
		.unwrap();
	assert!(!route.values.contains_key("id"));
}

/// Test: Caller-supplied value wins and the deferred argument never runs
#[rstest]
fn test_initial_value_wins_without_evaluation(resolver: ActionResolver) {
	let evaluations = Arc::new(AtomicUsize::new(0));
	let counter = Arc::clone(&evaluations);
	let call = ActionCall::new::<WidgetsController>("Edit").arg_with(move || {
		counter.fetch_add(1, Ordering::SeqCst);
		99
	});

	#[derive(Serialize)]
	struct Initial {
		id: u32,
	}

	let route = resolver
		.resolve_with_object::<WidgetsController, _>(call, &Initial { id: 7 })
		.unwrap();

	assert_eq!(route.values.get("id"), Some(&json!(7)));
	assert_eq!(evaluations.load(Ordering::SeqCst), 0);
}

/// Test: Flattened fields never overwrite earlier values
#[rstest]
fn test_flattened_collision_keeps_first(resolver: ActionResolver) {
	let call = ActionCall::new::<WidgetsController>("Move")
		.arg(json!({ "target": "first" }))
		.arg(json!({ "target": "second", "position": 2 }));
	let route = resolver.resolve::<WidgetsController>(call).unwrap();

	assert_eq!(route.values.get("target"), Some(&json!("first")));
	assert_eq!(route.values.get("position"), Some(&json!(2)));
}

/// Test: Area declared by the controller
#[rstest]
fn test_area_from_controller(resolver: ActionResolver) {
	let route = resolver
		.resolve::<DashboardController>(ActionCall::new::<DashboardController>("Index"))
		.unwrap();
	assert_eq!(route.controller, "Dashboard");
	assert_eq!(route.values.get("area"), Some(&json!("admin")));
}

/// Test: Each malformed call is rejected with an invalid-argument error
#[rstest]
#[case::wrong_controller(ActionCall::new::<DashboardController>("Index"), "You must call a method of WidgetsController")]
#[case::empty_action(ActionCall::new::<WidgetsController>(""), "You must call a method of WidgetsController")]
#[case::undeclared_action(ActionCall::new::<WidgetsController>("Delete"), "no action named 'Delete'")]
#[case::too_many_arguments(ActionCall::new::<WidgetsController>("Edit").arg(1).arg(2), "declares 1 parameter(s) but 2 were given")]
fn test_invalid_calls(resolver: ActionResolver, #[case] call: ActionCall, #[case] message: &str) {
	let err = resolver.resolve::<WidgetsController>(call).unwrap_err();
	assert!(err.is_invalid_argument());
	assert!(err.to_string().contains(message), "unexpected message: {}", err);
}

/// Test: Resolved route feeds the conventional URL generator
#[rstest]
fn test_route_to_url(resolver: ActionResolver) {
	let route = resolver
		.resolve::<WidgetsController>(ActionCall::new::<WidgetsController>("Move").arg(5).arg("bin"))
		.unwrap();
	let url = ConventionalUrlGenerator::with_template("/{area}/{controller}/{action}/{id}")
		.generate(&route)
		.unwrap();
	assert_eq!(url, "/Widgets/Move/5?target=bin");
}

/// Test: Concurrent resolution yields identical routes and computes each
/// cache entry once
#[rstest]
fn test_concurrent_resolution_computes_once() {
	let cache = Arc::new(ControllerRouteCache::new());
	let resolver = ActionResolver::with_cache(Arc::clone(&cache), Default::default());

	let routes: Vec<_> = thread::scope(|scope| {
		let handles: Vec<_> = (0..16)
			.map(|_| {
				let resolver = resolver.clone();
				scope.spawn(move || {
					(0..50)
						.map(|_| {
							resolver
								.resolve::<WidgetsController>(
									ActionCall::new::<WidgetsController>("Edit").arg(42),
								)
								.unwrap()
						})
						.collect::<Vec<_>>()
				})
			})
			.collect();
		handles
			.into_iter()
			.flat_map(|handle| handle.join().unwrap())
			.collect()
	});

	assert_eq!(routes.len(), 16 * 50);
	assert!(routes.windows(2).all(|pair| pair[0] == pair[1]));

	// One controller entry plus one action entry
	let stats = cache.statistics();
	assert_eq!(stats.computations, 2);
	assert_eq!(stats.controllers, 1);
	assert_eq!(stats.hits + stats.misses, 2 * 16 * 50);
}
