//! Error types for Trellis.
//!
//! Every failure in this workspace is a programming error raised synchronously
//! at the call site: a bad argument to a builder, an absent sequence handed to
//! pagination, or an action call that does not belong to the controller being
//! resolved. Nothing is retried or recovered internally.

/// Errors raised by Trellis operations.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	/// An argument was rejected (malformed attribute name, absent pagination
	/// source, mismatched controller type, unknown action).
	#[error("Invalid argument: {0}")]
	InvalidArgument(String),

	/// A value could not be converted into a route or model value.
	#[error("Serialization error: {0}")]
	Serialization(String),

	/// Settings could not be loaded or were inconsistent.
	#[error("Configuration error: {0}")]
	Configuration(String),
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
	/// Builds an [`Error::InvalidArgument`] naming the offending parameter.
	///
	/// # Examples
	///
	/// ```
	/// use trellis_core::exception::Error;
	///
	/// let err = Error::invalid_argument("source", "sequence is absent");
	/// assert_eq!(err.to_string(), "Invalid argument: source: sequence is absent");
	/// ```
	pub fn invalid_argument(param: &str, message: impl std::fmt::Display) -> Self {
		Self::InvalidArgument(format!("{}: {}", param, message))
	}

	/// Returns `true` for [`Error::InvalidArgument`].
	pub fn is_invalid_argument(&self) -> bool {
		matches!(self, Self::InvalidArgument(_))
	}
}

impl From<serde_json::Error> for Error {
	fn from(err: serde_json::Error) -> Self {
		Self::Serialization(err.to_string())
	}
}
