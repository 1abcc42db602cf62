//! Anchors for resolved actions.

use std::sync::Arc;
use trellis_conf::Settings;
use trellis_core::Result;
use trellis_html::{Element, link};
use trellis_urls::{
	ActionCall, ActionResolver, ActionRoute, Controller, ConventionalUrlGenerator, RouteValues,
	UrlGenerator,
};

/// `<a href="…">text</a>` for a resolved route.
///
/// # Errors
///
/// Returns whatever `generator` returns when it cannot build a URL.
pub fn action_link(
	route: &ActionRoute,
	generator: &dyn UrlGenerator,
	text: impl Into<String>,
) -> Result<Element> {
	let href = generator.generate(route)?;
	Ok(link(href, text))
}

/// Resolver and URL generator bundled for building links from action calls.
#[derive(Clone)]
pub struct ActionLinks {
	resolver: ActionResolver,
	generator: Arc<dyn UrlGenerator>,
}

impl Default for ActionLinks {
	fn default() -> Self {
		Self::new()
	}
}

impl ActionLinks {
	/// Default routing conventions.
	pub fn new() -> Self {
		Self::from_settings(&Settings::default())
	}

	/// Resolver and conventional generator configured from `settings`.
	pub fn from_settings(settings: &Settings) -> Self {
		Self {
			resolver: ActionResolver::with_settings(settings.routing.clone()),
			generator: Arc::new(ConventionalUrlGenerator::from_settings(&settings.routing)),
		}
	}

	/// Uses a host-provided generator instead of the conventional one.
	pub fn with_generator(resolver: ActionResolver, generator: Arc<dyn UrlGenerator>) -> Self {
		Self {
			resolver,
			generator,
		}
	}

	pub fn resolver(&self) -> &ActionResolver {
		&self.resolver
	}

	/// Resolves `call` and generates its URL.
	///
	/// # Errors
	///
	/// Propagates resolution and generation errors.
	pub fn url_for<C: Controller>(&self, call: ActionCall) -> Result<String> {
		let route = self.resolver.resolve::<C>(call)?;
		let url = self.generator.generate(&route)?;
		tracing::debug!(controller = %route.controller, action = %route.action, url = %url, "action url");
		Ok(url)
	}

	/// Like [`ActionLinks::url_for`], starting from caller-supplied values.
	pub fn url_for_with<C: Controller>(&self, call: ActionCall, values: RouteValues) -> Result<String> {
		let route = self.resolver.resolve_with::<C>(call, values)?;
		let url = self.generator.generate(&route)?;
		tracing::debug!(controller = %route.controller, action = %route.action, url = %url, "action url");
		Ok(url)
	}

	/// Resolves `call` and wraps `text` in an anchor pointing at it.
	///
	/// # Errors
	///
	/// Propagates resolution and generation errors.
	pub fn link<C: Controller>(&self, call: ActionCall, text: impl Into<String>) -> Result<Element> {
		let route = self.resolver.resolve::<C>(call)?;
		tracing::debug!(controller = %route.controller, action = %route.action, "action link");
		action_link(&route, self.generator.as_ref(), text)
	}
}
