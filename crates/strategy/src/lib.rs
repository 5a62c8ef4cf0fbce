//! Named multi-alias strategy registry.
//!
//! # Purpose
//!
//! A [`StrategyRegistry`] offers several interchangeable implementations of one
//! algorithm under a single callable name. Each implementation is registered under
//! one or more aliases; calling the registry itself dispatches to its default.
//!
//! # Mental Model
//!
//! 1. **Registration:** [`StrategyRegistry::register`] (or the two-step
//!    [`StrategyRegistry::strategy`] form) binds every given name to one [`Strategy`].
//! 2. **Collision transfer:** A name already bound elsewhere moves to the new strategy.
//!    A strategy left without names is pruned.
//! 3. **Dispatch:** [`StrategyRegistry::get`] selects by name; [`StrategyRegistry::call`]
//!    invokes the default.
//!
//! # Invariants
//!
//! - Every name maps to exactly one strategy.
//!   - Enforced in: [`StrategyRegistry::register`].
//!   - Tested by: `registry::tests::prop_names_map_to_one_strategy`
//! - Every stored strategy owns at least one name.
//!   - Enforced in: `StrategyRegistry::detach`.
//!   - Tested by: `registry::tests::prop_no_empty_groups`
//! - The first strategy ever registered stays the default until reassigned.
//!   - Enforced in: [`StrategyRegistry::register`].
//!   - Tested by: `registry::tests::prop_default_is_first_registered`
//! - A failed registration leaves the registry untouched.
//!   - Enforced in: [`StrategyRegistry::register`] (validation precedes mutation).
//!   - Tested by: `registry::tests::empty_names_rejected`
//!
//! # Concurrency
//!
//! [`StrategyRegistry`] is a plain value mutated through `&mut self`. With the `sync`
//! feature, [`SharedStrategies`] wraps it in an atomically published snapshot: reads are
//! wait-free and registrations are linearizable.

mod error;
mod invoke;
mod registry;
#[cfg(feature = "sync")]
mod shared;
mod strategy;

pub use error::StrategyError;
pub use invoke::Invoke;
pub use registry::{Group, Registration, StrategyRegistry};
#[cfg(feature = "sync")]
pub use shared::SharedStrategies;
pub use strategy::Strategy;
