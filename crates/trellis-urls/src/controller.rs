//! Controller route metadata.

/// A controller whose actions can be resolved to routes.
///
/// Implementations declare the parameter names of every action so that
/// positional arguments can be named. The [`controller!`](crate::controller)
/// macro writes this impl from a compact action list.
pub trait Controller: 'static {
	/// The type name, e.g. `"WidgetsController"`.
	const TYPE_NAME: &'static str;

	/// The area the controller belongs to, if any.
	const AREA: Option<&'static str> = None;

	/// Declared parameter names of `action`, or `None` when the controller
	/// has no such action.
	fn action_parameters(action: &str) -> Option<&'static [&'static str]>;
}

/// Strips `suffix` from a controller type name.
///
/// The suffix is only removed when something remains.
///
/// ```
/// use trellis_urls::controller::controller_route_name;
///
/// assert_eq!(controller_route_name("WidgetsController", "Controller"), "Widgets");
/// assert_eq!(controller_route_name("Widgets", "Controller"), "Widgets");
/// assert_eq!(controller_route_name("Controller", "Controller"), "Controller");
/// ```
pub fn controller_route_name<'a>(type_name: &'a str, suffix: &str) -> &'a str {
	match type_name.strip_suffix(suffix) {
		Some(stem) if !stem.is_empty() && !suffix.is_empty() => stem,
		_ => type_name,
	}
}

/// Implements [`Controller`] for a type from its action list.
///
/// ```
/// use trellis_urls::{Controller, controller};
///
/// pub struct OrdersController;
///
/// controller! {
///     OrdersController in "admin" {
///         Index(),
///         Edit(id),
///         Move(id, target),
///     }
/// }
///
/// assert_eq!(OrdersController::AREA, Some("admin"));
/// assert_eq!(OrdersController::action_parameters("Move"), Some(&["id", "target"][..]));
/// assert_eq!(OrdersController::action_parameters("Delete"), None);
/// ```
#[macro_export]
macro_rules! controller {
	(@impl $ty:ident, $area:expr, { $($action:ident($($param:ident),*)),* }) => {
		impl $crate::Controller for $ty {
			const TYPE_NAME: &'static str = stringify!($ty);
			const AREA: Option<&'static str> = $area;

			fn action_parameters(action: &str) -> Option<&'static [&'static str]> {
				match action {
					$(stringify!($action) => Some(&[$(stringify!($param)),*]),)*
					_ => None,
				}
			}
		}
	};
	($ty:ident in $area:literal { $($action:ident($($param:ident),* $(,)?)),* $(,)? }) => {
		$crate::controller!(@impl $ty, Some($area), { $($action($($param),*)),* });
	};
	($ty:ident { $($action:ident($($param:ident),* $(,)?)),* $(,)? }) => {
		$crate::controller!(@impl $ty, None, { $($action($($param),*)),* });
	};
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	struct WidgetsController;

	crate::controller! {
		WidgetsController {
			Index(),
			Edit(id),
		}
	}

	#[rstest]
	#[case("WidgetsController", "Controller", "Widgets")]
	#[case("Widgets", "Controller", "Widgets")]
	#[case("HomeEndpoint", "Endpoint", "Home")]
	#[case("Home", "", "Home")]
	fn test_route_name(#[case] type_name: &str, #[case] suffix: &str, #[case] expected: &str) {
		assert_eq!(controller_route_name(type_name, suffix), expected);
	}

	#[rstest]
	fn test_macro_declares_actions() {
		assert_eq!(WidgetsController::TYPE_NAME, "WidgetsController");
		assert_eq!(WidgetsController::AREA, None);
		assert_eq!(WidgetsController::action_parameters("Index"), Some(&[][..]));
		assert_eq!(WidgetsController::action_parameters("Edit"), Some(&["id"][..]));
		assert_eq!(WidgetsController::action_parameters("edit"), None);
	}
}
