//! Action resolution
//!
//! Turns an [`ActionCall`] into an [`ActionRoute`]: the controller route
//! name, the action name and the route values derived from the arguments.
//!
//! ## Route value rules
//!
//! - Caller-supplied initial values always win; an argument whose key is
//!   already present is skipped without being evaluated.
//! - The controller's area is added before any argument, unless the caller
//!   supplied it, so an argument or field named like the area key is skipped.
//! - `null` arguments are omitted.
//! - Object arguments contribute each top-level field as its own entry; a
//!   field never overwrites an existing entry.
//! - Anything else is stored under the parameter name.

use crate::cache::{ControllerRouteCache, ControllerRouteInfo};
use crate::call::{ActionCall, Argument};
use crate::controller::Controller;
use crate::route_values::RouteValues;
use serde::Serialize;
use serde_json::Value;
use std::any::TypeId;
use std::sync::Arc;
use trellis_conf::RoutingSettings;
use trellis_core::exception::{Error, Result};

/// A resolved action.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionRoute {
	/// Controller route name, e.g. `"Widgets"`.
	pub controller: String,
	/// Action name, e.g. `"Edit"`.
	pub action: String,
	/// Route values, including the area entry.
	pub values: RouteValues,
}

/// Resolves action calls against a shared [`ControllerRouteCache`].
///
/// ```
/// use serde_json::json;
/// use trellis_urls::{ActionCall, ActionResolver, controller};
///
/// struct WidgetsController;
/// controller! { WidgetsController { Edit(id) } }
///
/// let resolver = ActionResolver::new();
/// let route = resolver
///     .resolve::<WidgetsController>(ActionCall::new::<WidgetsController>("Edit").arg(42))
///     .unwrap();
///
/// assert_eq!(route.controller, "Widgets");
/// assert_eq!(route.action, "Edit");
/// assert_eq!(route.values.get("id"), Some(&json!(42)));
/// assert_eq!(route.values.get("area"), Some(&json!("")));
/// ```
#[derive(Debug, Clone)]
pub struct ActionResolver {
	cache: Arc<ControllerRouteCache>,
	settings: RoutingSettings,
}

impl Default for ActionResolver {
	fn default() -> Self {
		Self::new()
	}
}

impl ActionResolver {
	/// Resolver with default routing settings and its own cache.
	pub fn new() -> Self {
		Self::with_settings(RoutingSettings::default())
	}

	/// Resolver with its own cache configured from `settings`.
	pub fn with_settings(settings: RoutingSettings) -> Self {
		let cache = Arc::new(ControllerRouteCache::with_suffix(
			settings.controller_suffix.clone(),
		));
		Self { cache, settings }
	}

	/// Resolver sharing an existing cache. The cache's suffix takes
	/// precedence over `settings.controller_suffix`.
	pub fn with_cache(cache: Arc<ControllerRouteCache>, settings: RoutingSettings) -> Self {
		if cache.suffix() != settings.controller_suffix {
			tracing::warn!(
				cache_suffix = cache.suffix(),
				settings_suffix = %settings.controller_suffix,
				"shared route cache uses a different controller suffix"
			);
		}
		Self { cache, settings }
	}

	pub fn cache(&self) -> &Arc<ControllerRouteCache> {
		&self.cache
	}

	pub fn settings(&self) -> &RoutingSettings {
		&self.settings
	}

	/// Resolves `call` with no initial route values.
	///
	/// # Errors
	///
	/// See [`ActionResolver::resolve_with`].
	pub fn resolve<C: Controller>(&self, call: ActionCall) -> Result<ActionRoute> {
		self.resolve_with::<C>(call, RouteValues::new())
	}

	/// Resolves `call`, starting from the fields of a serializable object.
	///
	/// # Errors
	///
	/// See [`RouteValues::from_object`] and [`ActionResolver::resolve_with`].
	pub fn resolve_with_object<C, T>(&self, call: ActionCall, initial: &T) -> Result<ActionRoute>
	where
		C: Controller,
		T: Serialize + ?Sized,
	{
		self.resolve_with::<C>(call, RouteValues::from_object(initial)?)
	}

	/// Resolves `call`, starting from `initial`.
	///
	/// # Errors
	///
	/// Returns [`Error::InvalidArgument`] when the call targets a controller
	/// other than `C`, names no action, names an action `C` does not declare,
	/// passes more positional arguments than the action declares, or names a
	/// parameter the action does not declare. Deferred arguments that fail to
	/// serialize return [`Error::Serialization`].
	pub fn resolve_with<C: Controller>(
		&self,
		call: ActionCall,
		initial: RouteValues,
	) -> Result<ActionRoute> {
		let (controller, action, positional, named) = call.into_parts();

		if controller.type_id() != TypeId::of::<C>() {
			return Err(Error::invalid_argument(
				"call",
				format!(
					"You must call a method of {}, but the call targets {}",
					C::TYPE_NAME,
					controller.type_name()
				),
			));
		}
		if action.is_empty() {
			return Err(Error::invalid_argument(
				"call",
				format!("You must call a method of {}", C::TYPE_NAME),
			));
		}

		let info = self.cache.controller::<C>();
		let parameters = self
			.cache
			.action_parameters::<C>(&info, &action)
			.ok_or_else(|| {
				Error::invalid_argument(
					"call",
					format!("{} has no action named '{}'", C::TYPE_NAME, action),
				)
			})?;

		if positional.len() > parameters.len() {
			return Err(Error::invalid_argument(
				"call",
				format!(
					"{}.{} declares {} parameter(s) but {} were given",
					C::TYPE_NAME,
					action,
					parameters.len(),
					positional.len()
				),
			));
		}

		let mut named_by_position = Vec::with_capacity(named.len());
		for (name, argument) in named {
			let position = parameters.iter().position(|p| *p == name).ok_or_else(|| {
				Error::invalid_argument(
					"call",
					format!("{}.{} has no parameter named '{}'", C::TYPE_NAME, action, name),
				)
			})?;
			named_by_position.push((position, name, argument));
		}
		named_by_position.sort_by_key(|(position, _, _)| *position);

		let mut values = initial;
		values.insert_if_absent(
			self.settings.area_key.clone(),
			Value::String(info.area().to_string()),
		);
		for (name, argument) in parameters.iter().zip(positional) {
			apply_argument(&mut values, name, argument)?;
		}
		for (_, name, argument) in named_by_position {
			apply_argument(&mut values, &name, argument)?;
		}

		tracing::debug!(
			controller = info.controller_name(),
			action = %action,
			values = values.len(),
			"resolved action call"
		);

		Ok(route(&info, action, values))
	}
}

fn route(info: &ControllerRouteInfo, action: String, values: RouteValues) -> ActionRoute {
	ActionRoute {
		controller: info.controller_name().to_string(),
		action,
		values,
	}
}

fn apply_argument(values: &mut RouteValues, name: &str, argument: Argument) -> Result<()> {
	if values.contains_key(name) {
		tracing::trace!(parameter = name, "route value already present, argument skipped");
		return Ok(());
	}

	match argument.evaluate()? {
		Value::Null => {}
		Value::Object(fields) => {
			for (key, value) in fields {
				if value.is_null() {
					continue;
				}
				if !values.insert_if_absent(key.as_str(), value) {
					tracing::trace!(parameter = name, field = %key, "flattened field collides, kept first");
				}
			}
		}
		value => {
			values.insert(name, value);
		}
	}
	Ok(())
}
