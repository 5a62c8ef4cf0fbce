//! Thread-safe strategy registry with atomic publication.
//!
//! # Role
//!
//! Wraps a [`StrategyRegistry`] in an [`ArcSwap`] so lookups and calls never block while
//! registrations publish a whole new snapshot at once.
//!
//! # Invariants
//!
//! - Concurrent registrations must be linearizable (see `tests::no_lost_updates`).
//! - Every published snapshot satisfies the registry invariants; readers never observe a
//!   name detached from its old strategy but not yet bound to the new one.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::{Invoke, Strategy, StrategyError, StrategyRegistry};

#[cfg(test)]
mod tests;

/// Registry shared across threads.
pub struct SharedStrategies<F: ?Sized> {
	snap: ArcSwap<StrategyRegistry<F>>,
}

impl<F: ?Sized> SharedStrategies<F> {
	/// Creates an empty shared registry.
	pub fn new(label: &'static str) -> Self {
		Self::from_registry(StrategyRegistry::new(label))
	}

	/// Publishes an already populated registry.
	pub fn from_registry(registry: StrategyRegistry<F>) -> Self {
		Self {
			snap: ArcSwap::from_pointee(registry),
		}
	}

	/// Returns the current snapshot.
	pub fn snapshot(&self) -> Arc<StrategyRegistry<F>> {
		self.snap.load_full()
	}

	/// Registers `strategy` under `names` with linearizable semantics.
	///
	/// # Errors
	///
	/// See [`StrategyRegistry::register`]. Nothing is published on error.
	pub fn register<I, S>(
		&self,
		names: I,
		strategy: impl Into<Strategy<F>>,
	) -> Result<Strategy<F>, StrategyError>
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let names: Vec<String> = names.into_iter().map(Into::into).collect();
		let strategy = strategy.into();

		loop {
			let old = self.snap.load_full();

			let mut next = StrategyRegistry::clone(&old);
			let bound = next.register(names.iter().cloned(), strategy.clone())?;

			let prev = self.snap.compare_and_swap(&old, Arc::new(next));
			if Arc::ptr_eq(&prev, &old) {
				return Ok(bound);
			}
			tracing::trace!(registry = old.label(), "snapshot changed during registration, retrying");
		}
	}

	/// Replaces the default strategy.
	pub fn set_default(&self, strategy: impl Into<Strategy<F>>) {
		let strategy = strategy.into();
		self.snap.rcu(|cur| {
			let mut next = StrategyRegistry::clone(cur);
			next.set_default(strategy.clone());
			next
		});
	}

	/// Looks up the strategy bound to `name` in the current snapshot.
	///
	/// # Errors
	///
	/// Returns [`StrategyError::NotFound`] for unknown names.
	pub fn get(&self, name: &str) -> Result<Strategy<F>, StrategyError> {
		self.snap.load().get(name).cloned()
	}

	/// The current default strategy.
	///
	/// # Errors
	///
	/// Returns [`StrategyError::Unset`] if there is no default.
	pub fn default_strategy(&self) -> Result<Strategy<F>, StrategyError> {
		self.snap.load().default_strategy().cloned()
	}

	/// Invokes the current default with `args`.
	///
	/// The snapshot guard is released before the call, so a strategy may register into
	/// the registry that invoked it.
	///
	/// # Errors
	///
	/// Returns [`StrategyError::Unset`] if there is no default.
	pub fn call<Args>(&self, args: Args) -> Result<F::Output, StrategyError>
	where
		F: Invoke<Args>,
	{
		let strategy = self.default_strategy()?;
		Ok(strategy.invoke(args))
	}

	/// Returns true if `name` is bound.
	pub fn contains(&self, name: &str) -> bool {
		self.snap.load().contains(name)
	}

	/// Number of distinct strategies.
	pub fn len(&self) -> usize {
		self.snap.load().len()
	}

	/// Returns true if nothing is registered.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Alias groups, one per strategy.
	pub fn keys(&self) -> BTreeSet<Vec<String>> {
		self.snap.load().keys()
	}
}

impl<F: ?Sized> Default for SharedStrategies<F> {
	fn default() -> Self {
		Self::from_registry(StrategyRegistry::new("strategies"))
	}
}

impl<F: ?Sized> From<StrategyRegistry<F>> for SharedStrategies<F> {
	fn from(registry: StrategyRegistry<F>) -> Self {
		Self::from_registry(registry)
	}
}

impl<F: ?Sized> fmt::Debug for SharedStrategies<F> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("SharedStrategies")
			.field(&*self.snap.load())
			.finish()
	}
}
