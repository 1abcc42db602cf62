//! Descriptions of action calls.

use crate::controller::Controller;
use serde::Serialize;
use serde_json::Value;
use std::any::TypeId;
use std::fmt;
use trellis_core::exception::Result;

type Thunk = Box<dyn FnOnce() -> Result<Value> + Send>;

/// An argument to an action call.
pub enum Argument {
	/// A value known up front.
	Constant(Value),
	/// A value computed only if its route key is still free.
	Deferred(Thunk),
}

impl Argument {
	/// A constant argument. Values that fail to serialize become `null` and
	/// are therefore omitted from the route.
	pub fn constant(value: impl Serialize) -> Self {
		match serde_json::to_value(value) {
			Ok(value) => Self::Constant(value),
			Err(err) => {
				tracing::warn!(error = %err, "action argument could not be serialized");
				Self::Constant(Value::Null)
			}
		}
	}

	/// A deferred argument. Serialization failures surface when the argument
	/// is evaluated.
	pub fn deferred<T, F>(f: F) -> Self
	where
		T: Serialize,
		F: FnOnce() -> T + Send + 'static,
	{
		Self::Deferred(Box::new(move || -> Result<Value> {
			Ok(serde_json::to_value(f())?)
		}))
	}

	pub fn is_deferred(&self) -> bool {
		matches!(self, Self::Deferred(_))
	}

	/// Evaluates the argument.
	pub fn evaluate(self) -> Result<Value> {
		match self {
			Self::Constant(value) => Ok(value),
			Self::Deferred(thunk) => thunk(),
		}
	}
}

impl fmt::Debug for Argument {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Constant(value) => f.debug_tuple("Constant").field(value).finish(),
			Self::Deferred(_) => f.write_str("Deferred(<closure>)"),
		}
	}
}

/// The controller type an [`ActionCall`] targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ControllerId {
	type_id: TypeId,
	type_name: &'static str,
}

impl ControllerId {
	pub fn of<C: Controller>() -> Self {
		Self {
			type_id: TypeId::of::<C>(),
			type_name: C::TYPE_NAME,
		}
	}

	pub fn type_id(&self) -> TypeId {
		self.type_id
	}

	pub fn type_name(&self) -> &'static str {
		self.type_name
	}
}

/// A call to one action of a controller.
///
/// Positional arguments are named after the action's declared parameters, in
/// order. Named arguments give the parameter explicitly and are applied in
/// declaration order after the positional ones.
///
/// ```
/// use trellis_urls::{ActionCall, controller};
///
/// struct ProductsController;
/// controller! { ProductsController { Details(id, tab) } }
///
/// let call = ActionCall::new::<ProductsController>("Details")
///     .arg(7)
///     .named("tab", "reviews");
/// assert_eq!(call.action(), "Details");
/// assert_eq!(call.positional().len(), 1);
/// assert_eq!(call.named_arguments().len(), 1);
/// ```
#[derive(Debug)]
pub struct ActionCall {
	controller: ControllerId,
	action: String,
	positional: Vec<Argument>,
	named: Vec<(String, Argument)>,
}

impl ActionCall {
	pub fn new<C: Controller>(action: impl Into<String>) -> Self {
		Self {
			controller: ControllerId::of::<C>(),
			action: action.into(),
			positional: Vec::new(),
			named: Vec::new(),
		}
	}

	/// Appends a positional constant.
	pub fn arg(self, value: impl Serialize) -> Self {
		self.argument(Argument::constant(value))
	}

	/// Appends a positional deferred value.
	pub fn arg_with<T, F>(self, f: F) -> Self
	where
		T: Serialize,
		F: FnOnce() -> T + Send + 'static,
	{
		self.argument(Argument::deferred(f))
	}

	/// Appends a positional argument.
	pub fn argument(mut self, argument: Argument) -> Self {
		self.positional.push(argument);
		self
	}

	/// Sets a named constant.
	pub fn named(self, parameter: impl Into<String>, value: impl Serialize) -> Self {
		self.named_argument(parameter, Argument::constant(value))
	}

	/// Sets a named deferred value.
	pub fn named_with<T, F>(self, parameter: impl Into<String>, f: F) -> Self
	where
		T: Serialize,
		F: FnOnce() -> T + Send + 'static,
	{
		self.named_argument(parameter, Argument::deferred(f))
	}

	/// Sets a named argument.
	pub fn named_argument(mut self, parameter: impl Into<String>, argument: Argument) -> Self {
		self.named.push((parameter.into(), argument));
		self
	}

	pub fn controller(&self) -> ControllerId {
		self.controller
	}

	pub fn action(&self) -> &str {
		&self.action
	}

	pub fn positional(&self) -> &[Argument] {
		&self.positional
	}

	pub fn named_arguments(&self) -> &[(String, Argument)] {
		&self.named
	}

	pub(crate) fn into_parts(self) -> (ControllerId, String, Vec<Argument>, Vec<(String, Argument)>) {
		(self.controller, self.action, self.positional, self.named)
	}
}
