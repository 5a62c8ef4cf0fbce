use crate::Operator;

/// Operator contract errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContractError {
	/// A base without a declared canonical operator set was instantiated or built from.
	#[error(
		"Can't instantiate abstract operator base `{type_name}` directly: no canonical operator set declared"
	)]
	AbstractConstruction { type_name: String },

	/// A canonical operator name did not parse.
	#[error("unknown operator {name:?}")]
	UnknownOperator { name: String },

	/// A concrete type does not provide an operator its base declared canonical.
	#[error("type `{type_name}` does not provide canonical `{operator}` required by operator base `{base}`")]
	MissingCanonical {
		type_name: &'static str,
		base: String,
		operator: Operator,
	},
}
