//! Canonical operator traits.
//!
//! A concrete algebraic type implements only the canonical half of its operator surface.
//! `#[derive(Operators)]` generates the plain, reflected and in-place forms from it, so
//! inverse operators stay inverse in every form by construction.

use crate::{Operator, OperatorSet};

/// Canonical implementation of every declared binary operator.
pub trait Canonical: Sized + Clone {
	/// Computes `self OP other`.
	fn binary(self, op: Operator, other: Self) -> Self;

	/// Computes `other OP self`, the reflected form.
	///
	/// The default swaps the operands and applies the canonical operator, which is
	/// correct for non-commutative operators too. Override it only when reflection needs
	/// a different evaluation than the swap.
	fn reflected(self, op: Operator, other: Self) -> Self {
		other.binary(op, self)
	}
}

/// Canonical implementation of every declared unary operator.
pub trait UnaryCanonical: Sized {
	/// Computes `OP self`.
	fn unary(self, op: Operator) -> Self;
}

/// Canonical operator set a type was built with.
///
/// Implemented by `#[derive(Operators)]`.
pub trait Operators {
	/// Operators the type supplies canonical implementations for.
	const OPERATORS: OperatorSet;
}
