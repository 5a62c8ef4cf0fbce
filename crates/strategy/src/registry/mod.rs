//! Single-owner strategy registry.
//!
//! # Role
//!
//! Owns the name table, the per-strategy alias groups and the default entry, and keeps
//! the three consistent across every registration.

use std::collections::BTreeSet;
use std::fmt;
use std::ops::Index;

use indexmap::IndexMap;
use rustc_hash::{FxBuildHasher, FxHashMap, FxHashSet};

use crate::{Invoke, Strategy, StrategyError};


/// One strategy together with the names currently bound to it.
pub struct Group<F: ?Sized> {
	strategy: Strategy<F>,
	names: Vec<String>,
}

impl<F: ?Sized> Group<F> {
	/// The grouped implementation.
	pub fn strategy(&self) -> &Strategy<F> {
		&self.strategy
	}

	/// Surviving names in registration order.
	pub fn names(&self) -> &[String] {
		&self.names
	}

	/// First surviving name.
	pub fn name(&self) -> &str {
		// Groups are pruned as soon as they lose their last name.
		&self.names[0]
	}
}

impl<F: ?Sized> Clone for Group<F> {
	fn clone(&self) -> Self {
		Self {
			strategy: self.strategy.clone(),
			names: self.names.clone(),
		}
	}
}

impl<F: ?Sized> fmt::Debug for Group<F> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Group")
			.field("strategy", &self.strategy)
			.field("names", &self.names)
			.finish()
	}
}

/// Name → implementation dispatch table with alias groups and a default.
pub struct StrategyRegistry<F: ?Sized> {
	label: &'static str,
	/// Alias groups keyed by strategy identity, in first-registration order.
	groups: IndexMap<usize, Group<F>, FxBuildHasher>,
	/// Name → strategy identity.
	by_name: FxHashMap<String, usize>,
	default: Option<Strategy<F>>,
}

impl<F: ?Sized> StrategyRegistry<F> {
	/// Creates an empty registry identified by `label` in errors and logs.
	pub fn new(label: &'static str) -> Self {
		Self {
			label,
			groups: IndexMap::default(),
			by_name: FxHashMap::default(),
			default: None,
		}
	}

	/// Label given at construction.
	pub fn label(&self) -> &'static str {
		self.label
	}

	/// Number of distinct strategies (not names).
	pub fn len(&self) -> usize {
		self.groups.len()
	}

	/// Returns true if nothing is registered.
	pub fn is_empty(&self) -> bool {
		self.groups.is_empty()
	}

	/// Starts a two-step registration under `names`.
	///
	/// ```
	/// use lazy_strategy::StrategyRegistry;
	///
	/// let mut window = StrategyRegistry::<dyn Fn(usize) -> Vec<f64> + Send + Sync>::new("window");
	/// window
	/// 	.strategy(["rect", "rectangular"])
	/// 	.register(|size: usize| vec![1.0; size])?
	/// 	.strategy(["zeros"])
	/// 	.register(|size: usize| vec![0.0; size])?;
	///
	/// assert_eq!(window.len(), 2);
	/// assert_eq!(window.call((3,))?, vec![1.0; 3]);
	/// # Ok::<(), lazy_strategy::StrategyError>(())
	/// ```
	pub fn strategy<I, S>(&mut self, names: I) -> Registration<'_, F>
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Registration {
			names: names.into_iter().map(Into::into).collect(),
			registry: self,
		}
	}

	/// Binds every name in `names` to `strategy`.
	///
	/// Duplicate names collapse to their first occurrence. Names currently bound to a
	/// different strategy are transferred; a strategy left without names is dropped.
	/// The first strategy ever registered becomes the default.
	///
	/// # Errors
	///
	/// Returns [`StrategyError::InvalidRegistration`] if `names` is empty. The registry is
	/// not modified in that case.
	pub fn register<I, S>(
		&mut self,
		names: I,
		strategy: impl Into<Strategy<F>>,
	) -> Result<Strategy<F>, StrategyError>
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let strategy = strategy.into();
		let names = dedup_names(names);
		if names.is_empty() {
			return Err(StrategyError::InvalidRegistration {
				registry: self.label,
			});
		}

		let key = strategy.key();
		tracing::trace!(registry = self.label, ?names, ?strategy, "registering strategy");

		for name in &names {
			if let Some(&owner) = self.by_name.get(name)
				&& owner != key
			{
				self.detach(owner, name);
			}
		}

		let group = self.groups.entry(key).or_insert_with(|| Group {
			strategy: strategy.clone(),
			names: Vec::with_capacity(names.len()),
		});
		for name in names {
			if !group.names.contains(&name) {
				group.names.push(name.clone());
			}
			self.by_name.insert(name, key);
		}

		if self.default.is_none() {
			tracing::debug!(registry = self.label, name = group.name(), "default strategy set");
			self.default = Some(strategy.clone());
		}

		Ok(strategy)
	}

	/// Removes `name` from the group owned by `owner`, pruning the group if emptied.
	fn detach(&mut self, owner: usize, name: &str) {
		let Some(group) = self.groups.get_mut(&owner) else {
			return;
		};
		group.names.retain(|n| n != name);
		tracing::debug!(registry = self.label, name, "strategy name transferred");

		if group.names.is_empty() {
			self.groups.shift_remove(&owner);
			tracing::debug!(registry = self.label, name, "strategy pruned after losing its last name");
		}
	}

	/// Looks up the strategy bound to `name`.
	///
	/// # Errors
	///
	/// Returns [`StrategyError::NotFound`] for unknown names.
	pub fn get(&self, name: &str) -> Result<&Strategy<F>, StrategyError> {
		self.by_name
			.get(name)
			.and_then(|key| self.groups.get(key))
			.map(Group::strategy)
			.ok_or_else(|| StrategyError::NotFound {
				registry: self.label,
				name: name.to_string(),
			})
	}

	/// Returns true if `name` is bound.
	pub fn contains(&self, name: &str) -> bool {
		self.by_name.contains_key(name)
	}

	/// The strategy invoked by [`Self::call`].
	///
	/// # Errors
	///
	/// Returns [`StrategyError::Unset`] if nothing was ever registered and no default was
	/// assigned.
	pub fn default_strategy(&self) -> Result<&Strategy<F>, StrategyError> {
		self.default.as_ref().ok_or(StrategyError::Unset {
			registry: self.label,
		})
	}

	/// Replaces the default. The strategy does not need to own a name.
	pub fn set_default(&mut self, strategy: impl Into<Strategy<F>>) {
		let strategy = strategy.into();
		tracing::debug!(registry = self.label, ?strategy, "default strategy reassigned");
		self.default = Some(strategy);
	}

	/// Invokes the default strategy with `args`.
	///
	/// # Errors
	///
	/// Returns [`StrategyError::Unset`] if there is no default.
	pub fn call<Args>(&self, args: Args) -> Result<F::Output, StrategyError>
	where
		F: Invoke<Args>,
	{
		Ok(self.default_strategy()?.invoke(args))
	}

	/// Alias groups, one per strategy.
	pub fn keys(&self) -> BTreeSet<Vec<String>> {
		self.groups.values().map(|g| g.names.clone()).collect()
	}

	/// Strategies with their names, in first-registration order.
	pub fn iter(&self) -> impl Iterator<Item = &Group<F>> + '_ {
		self.groups.values()
	}

	/// Every bound name, grouped by strategy.
	pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
		self.groups
			.values()
			.flat_map(|g| g.names.iter().map(String::as_str))
	}
}

fn dedup_names<I, S>(names: I) -> Vec<String>
where
	I: IntoIterator<Item = S>,
	S: Into<String>,
{
	let mut seen = FxHashSet::default();
	names
		.into_iter()
		.map(Into::into)
		.filter(|name| seen.insert(name.clone()))
		.collect()
}

impl<F: ?Sized> Default for StrategyRegistry<F> {
	fn default() -> Self {
		Self::new("strategies")
	}
}

impl<F: ?Sized> Clone for StrategyRegistry<F> {
	fn clone(&self) -> Self {
		Self {
			label: self.label,
			groups: self.groups.clone(),
			by_name: self.by_name.clone(),
			default: self.default.clone(),
		}
	}
}

impl<F: ?Sized> fmt::Debug for StrategyRegistry<F> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("StrategyRegistry")
			.field("label", &self.label)
			.field("groups", &self.groups.values().collect::<Vec<_>>())
			.field("default", &self.default)
			.finish()
	}
}

impl<F: ?Sized> Index<&str> for StrategyRegistry<F> {
	type Output = Strategy<F>;

	/// # Panics
	///
	/// Panics if `name` is not bound, like map indexing.
	fn index(&self, name: &str) -> &Strategy<F> {
		match self.get(name) {
			Ok(strategy) => strategy,
			Err(e) => panic!("{e}"),
		}
	}
}

impl<'a, F: ?Sized> IntoIterator for &'a StrategyRegistry<F> {
	type Item = &'a Group<F>;
	type IntoIter = indexmap::map::Values<'a, usize, Group<F>>;

	fn into_iter(self) -> Self::IntoIter {
		self.groups.values()
	}
}

/// Pending registration returned by [`StrategyRegistry::strategy`].
///
/// Applying it to an implementation completes the registration and hands the registry
/// back, so the same registry can keep registering.
#[must_use = "a registration does nothing until `register` is called"]
pub struct Registration<'r, F: ?Sized> {
	registry: &'r mut StrategyRegistry<F>,
	names: Vec<String>,
}

impl<'r, F: ?Sized> Registration<'r, F> {
	/// Names this registration will bind.
	pub fn names(&self) -> &[String] {
		&self.names
	}

	/// Registers `strategy` under the pending names.
	///
	/// # Errors
	///
	/// See [`StrategyRegistry::register`].
	pub fn register(
		self,
		strategy: impl Into<Strategy<F>>,
	) -> Result<&'r mut StrategyRegistry<F>, StrategyError> {
		self.registry.register(self.names, strategy)?;
		Ok(self.registry)
	}
}
