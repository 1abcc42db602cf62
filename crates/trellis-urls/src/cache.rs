//! Per-controller route metadata cache
//!
//! Resolving an action needs the controller's route name, its area and the
//! parameter names of the action. These never change for a type, so they are
//! computed on first use and kept for the lifetime of the cache.
//!
//! The cache is an ordinary value: share it between resolvers with an `Arc`.
//! Entries are inserted with `entry().or_insert_with`, so concurrent first
//! lookups of the same controller or action compute it once.

use crate::controller::{Controller, controller_route_name};
use dashmap::DashMap;
use std::any::TypeId;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use trellis_conf::settings::DEFAULT_CONTROLLER_SUFFIX;

/// Cached route metadata of one controller type.
#[derive(Debug)]
pub struct ControllerRouteInfo {
	controller_name: String,
	area: String,
	actions: DashMap<String, &'static [&'static str]>,
}

impl ControllerRouteInfo {
	/// The controller name used in routes, e.g. `"Widgets"`.
	pub fn controller_name(&self) -> &str {
		&self.controller_name
	}

	/// The area, or `""` when the controller declares none.
	pub fn area(&self) -> &str {
		&self.area
	}

	/// Number of actions cached so far.
	pub fn cached_actions(&self) -> usize {
		self.actions.len()
	}
}

/// Snapshot of cache counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStatistics {
	/// Lookups answered from the cache.
	pub hits: u64,
	/// Lookups that had to go to the controller declaration.
	pub misses: u64,
	/// Entries actually computed. Lower than `misses` when concurrent misses
	/// raced on the same key.
	pub computations: u64,
	/// Controllers cached.
	pub controllers: usize,
}

impl CacheStatistics {
	/// Fraction of lookups answered from the cache.
	pub fn hit_rate(&self) -> f64 {
		let total = self.hits + self.misses;
		if total == 0 {
			0.0
		} else {
			self.hits as f64 / total as f64
		}
	}
}

/// Concurrent cache of [`ControllerRouteInfo`], keyed by controller type.
#[derive(Debug)]
pub struct ControllerRouteCache {
	suffix: String,
	controllers: DashMap<TypeId, Arc<ControllerRouteInfo>>,
	hits: AtomicU64,
	misses: AtomicU64,
	computations: AtomicU64,
}

impl Default for ControllerRouteCache {
	fn default() -> Self {
		Self::new()
	}
}

impl ControllerRouteCache {
	/// Cache stripping the default `"Controller"` suffix.
	pub fn new() -> Self {
		Self::with_suffix(DEFAULT_CONTROLLER_SUFFIX)
	}

	/// Cache stripping `suffix` from controller type names.
	pub fn with_suffix(suffix: impl Into<String>) -> Self {
		Self {
			suffix: suffix.into(),
			controllers: DashMap::new(),
			hits: AtomicU64::new(0),
			misses: AtomicU64::new(0),
			computations: AtomicU64::new(0),
		}
	}

	/// The suffix stripped from controller type names.
	pub fn suffix(&self) -> &str {
		&self.suffix
	}

	/// Route metadata for `C`, computed on first use.
	pub fn controller<C: Controller>(&self) -> Arc<ControllerRouteInfo> {
		let key = TypeId::of::<C>();
		if let Some(info) = self.controllers.get(&key).map(|entry| Arc::clone(entry.value())) {
			self.hits.fetch_add(1, Ordering::Relaxed);
			tracing::trace!(controller = C::TYPE_NAME, "controller route cache hit");
			return info;
		}

		self.misses.fetch_add(1, Ordering::Relaxed);
		let entry = self.controllers.entry(key).or_insert_with(|| {
			self.computations.fetch_add(1, Ordering::Relaxed);
			let info = ControllerRouteInfo {
				controller_name: controller_route_name(C::TYPE_NAME, &self.suffix).to_string(),
				area: C::AREA.unwrap_or_default().to_string(),
				actions: DashMap::new(),
			};
			tracing::debug!(
				controller = C::TYPE_NAME,
				route_name = %info.controller_name,
				area = %info.area,
				"cached controller route metadata"
			);
			Arc::new(info)
		});
		Arc::clone(entry.value())
	}

	/// Parameter names of `action` on `C`, or `None` when `C` does not
	/// declare it. Unknown actions are not cached.
	pub fn action_parameters<C: Controller>(
		&self,
		info: &ControllerRouteInfo,
		action: &str,
	) -> Option<&'static [&'static str]> {
		if let Some(parameters) = info.actions.get(action).map(|entry| *entry.value()) {
			self.hits.fetch_add(1, Ordering::Relaxed);
			tracing::trace!(controller = C::TYPE_NAME, action, "action route cache hit");
			return Some(parameters);
		}

		self.misses.fetch_add(1, Ordering::Relaxed);
		let declared = C::action_parameters(action)?;
		let entry = info.actions.entry(action.to_string()).or_insert_with(|| {
			self.computations.fetch_add(1, Ordering::Relaxed);
			tracing::debug!(
				controller = C::TYPE_NAME,
				action,
				parameters = declared.len(),
				"cached action parameters"
			);
			declared
		});
		Some(*entry.value())
	}

	/// Current counters.
	pub fn statistics(&self) -> CacheStatistics {
		CacheStatistics {
			hits: self.hits.load(Ordering::Relaxed),
			misses: self.misses.load(Ordering::Relaxed),
			computations: self.computations.load(Ordering::Relaxed),
			controllers: self.controllers.len(),
		}
	}

	/// Number of cached controllers.
	pub fn len(&self) -> usize {
		self.controllers.len()
	}

	pub fn is_empty(&self) -> bool {
		self.controllers.is_empty()
	}
}
