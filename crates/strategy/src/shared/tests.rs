use std::sync::Arc;
use std::thread;

use super::SharedStrategies;
use crate::{StrategyError, StrategyRegistry};

type Unary = dyn Fn(i64) -> i64 + Send + Sync;

/// Registrations on the shared registry are visible to lookups and calls.
#[test]
fn register_and_call() {
	let shared = SharedStrategies::<Unary>::new("shared");
	assert_eq!(
		shared.call((1,)),
		Err(StrategyError::Unset { registry: "shared" })
	);

	shared.register(["inc", "succ"], |x: i64| x + 1).unwrap();
	shared.register(["dec"], |x: i64| x - 1).unwrap();

	assert_eq!(shared.len(), 2);
	assert_eq!(shared.call((1,)), Ok(2));
	assert_eq!(shared.get("dec").unwrap()(1), 0);
	assert!(shared.contains("succ"));
}

/// Verifies that a rejected registration leaves the published snapshot in place.
#[test]
fn failed_registration_publishes_nothing() {
	let shared = SharedStrategies::<Unary>::new("shared");
	shared.register(["id"], |x: i64| x).unwrap();
	let before = shared.snapshot();

	let err = shared.register(Vec::<&str>::new(), |x: i64| x).unwrap_err();
	assert_eq!(err, StrategyError::InvalidRegistration { registry: "shared" });
	assert!(Arc::ptr_eq(&before, &shared.snapshot()));
}

/// A loaded snapshot keeps its bindings after later registrations.
#[test]
fn snapshot_survives_later_registrations() {
	let shared = SharedStrategies::<Unary>::new("shared");
	shared.register(["f"], |x: i64| x * 2).unwrap();
	let old = shared.snapshot();

	shared.register(["f"], |x: i64| x * 3).unwrap();

	assert_eq!(old["f"](5), 10);
	assert_eq!(shared.get("f").unwrap()(5), 15);
	assert_eq!(old.len(), 1);
	assert_eq!(shared.len(), 1);
}

/// Reassigning the default publishes a new snapshot.
#[test]
fn set_default_publishes_new_snapshot() {
	let mut registry = StrategyRegistry::<Unary>::new("shared");
	registry.register(["a"], |x: i64| x + 10).unwrap();
	registry.register(["b"], |x: i64| x + 20).unwrap();
	let shared = SharedStrategies::from(registry);

	assert_eq!(shared.call((0,)), Ok(10));
	shared.set_default(shared.get("b").unwrap());
	assert_eq!(shared.call((0,)), Ok(20));
	assert_eq!(shared.default_strategy().unwrap(), shared.get("b").unwrap());
}

/// Verifies that concurrent writers never overwrite each other's registrations.
#[test]
fn no_lost_updates() {
	const THREADS: i64 = 8;
	const PER_THREAD: i64 = 25;

	let shared = Arc::new(SharedStrategies::<Unary>::new("concurrent"));
	let handles: Vec<_> = (0..THREADS)
		.map(|t| {
			let shared = Arc::clone(&shared);
			thread::spawn(move || {
				for i in 0..PER_THREAD {
					let name = format!("t{t}-{i}");
					shared
						.register([name, "shared".to_string()], move |x: i64| x + t)
						.unwrap();
				}
			})
		})
		.collect();
	for h in handles {
		h.join().unwrap();
	}

	let snap = shared.snapshot();
	for t in 0..THREADS {
		for i in 0..PER_THREAD {
			assert!(snap.contains(&format!("t{t}-{i}")), "t{t}-{i} lost");
		}
	}

	// Each registration is its own strategy; "shared" moved between them without
	// emptying any group, so nothing was pruned.
	assert_eq!(snap.len(), (THREADS * PER_THREAD) as usize);
	let bound: usize = snap.keys().iter().map(Vec::len).sum();
	assert_eq!(bound, (THREADS * PER_THREAD) as usize + 1);
}
