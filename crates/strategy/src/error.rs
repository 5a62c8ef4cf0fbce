/// Strategy registry errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StrategyError {
	/// No strategy is bound to the requested name.
	#[error("no strategy named {name:?} in registry `{registry}`")]
	NotFound { registry: &'static str, name: String },

	/// The registry was called before any strategy was registered.
	#[error("registry `{registry}` has no default strategy")]
	Unset { registry: &'static str },

	/// A registration supplied no names, leaving the strategy unreachable.
	#[error("registration into `{registry}` requires at least one name")]
	InvalidRegistration { registry: &'static str },
}
