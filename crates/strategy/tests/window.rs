//! A window-function family registered the way a signal library consumes the registry.

use std::f64::consts::PI;

use lazy_strategy::{StrategyError, StrategyRegistry};
use pretty_assertions::{assert_eq, assert_ne};

type Window = dyn Fn(usize) -> Vec<f64> + Send + Sync;

fn cosine_sum(size: usize, a0: f64) -> Vec<f64> {
	if size == 1 {
		return vec![1.0];
	}
	let last = (size - 1) as f64;
	(0..size)
		.map(|n| a0 - (1.0 - a0) * (2.0 * PI * n as f64 / last).cos())
		.collect()
}

fn windows() -> Result<StrategyRegistry<Window>, StrategyError> {
	let mut window = StrategyRegistry::<Window>::new("window");
	window
		.strategy(["hann", "hanning"])
		.register(|size: usize| cosine_sum(size, 0.5))?
		.strategy(["hamming"])
		.register(|size: usize| cosine_sum(size, 0.54))?
		.strategy(["rect", "rectangular", "dirichlet"])
		.register(|size: usize| vec![1.0; size])?
		.strategy(["triangular", "bartlett"])
		.register(|size: usize| {
			let half = (size as f64 - 1.0) / 2.0;
			(0..size)
				.map(|n| 1.0 - ((n as f64 - half) / half).abs())
				.collect()
		})?;
	Ok(window)
}

fn close(a: &[f64], b: &[f64]) -> bool {
	a.len() == b.len() && a.iter().zip(b).all(|(x, y)| (x - y).abs() < 1e-12)
}

/// The first registered window is the default.
#[test]
fn default_window_is_first_registered() {
	let window = windows().unwrap();
	assert_eq!(window.len(), 4);
	assert_eq!(window.default_strategy().unwrap(), &window["hann"]);
	assert!(close(&window.call((5,)).unwrap(), &[0.0, 0.5, 1.0, 0.5, 0.0]));
}

/// Aliases registered together share one implementation.
#[test]
fn aliases_share_one_implementation() {
	let window = windows().unwrap();
	assert_eq!(window["hann"], window["hanning"]);
	assert_eq!(window["rect"], window["dirichlet"]);
	assert_ne!(window["hann"], window["hamming"]);
	assert!(close(&window["bartlett"](3), &[0.0, 1.0, 0.0]));
	assert!(close(&window["hamming"](3), &[0.08, 1.0, 0.08]));
}

/// Iterating the registry visits every window once, labelled by its first name.
#[test]
fn iterate_every_window_by_primary_name() {
	let window = windows().unwrap();
	let labels: Vec<&str> = window.iter().map(|g| g.name()).collect();
	assert_eq!(labels, ["hann", "hamming", "rect", "triangular"]);

	for group in &window {
		let samples = group.strategy()(16);
		assert_eq!(samples.len(), 16, "{}", group.name());
		assert!(samples.iter().all(|s| (-1e-12..=1.0 + 1e-12).contains(s)));
	}
}

/// Verifies that stealing an alias splits a group and that the default can be
/// reassigned.
#[test]
fn override_alias_and_default() {
	let mut window = windows().unwrap();
	window
		.register(["hanning"], |size: usize| vec![0.5; size])
		.unwrap();
	assert_eq!(window.len(), 5);
	assert_ne!(window["hann"], window["hanning"]);

	let rect = window["rect"].clone();
	window.set_default(rect);
	assert_eq!(window.call((2,)), Ok(vec![1.0, 1.0]));

	assert!(matches!(
		window.get("kaiser"),
		Err(StrategyError::NotFound { registry: "window", .. })
	));
}
