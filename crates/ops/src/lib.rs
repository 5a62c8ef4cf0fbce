//! Operator contracts for algebraic types.
//!
//! # Purpose
//!
//! Algebraic types (filter expressions, lazy streams) need a full operator surface:
//! plain, reflected and in-place forms of every arithmetic operator, plus unary and
//! element-wise comparison operators. Authors supply only the canonical half through
//! [`Canonical`] and [`UnaryCanonical`]; `#[derive(Operators)]` generates the rest.
//!
//! # Key Types
//!
//! | Type | Role |
//! |------|------|
//! | [`Operator`] | Vocabulary of overloadable operators. |
//! | [`OperatorSet`] | Declared canonical operators. |
//! | [`ContractBuilder`] | Unconfigured abstract base; refuses to build. |
//! | [`OperatorBase`] | Base with a canonical set; builds concrete contracts. |
//! | [`Contract`] | Generated operator surface of one concrete type. |
//!
//! # Example
//!
//! ```
//! use lazy_ops::{Canonical, Operator, Operators};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Operators)]
//! #[operators(add, sub, reflect(i64))]
//! struct Num(i64);
//!
//! impl From<i64> for Num {
//! 	fn from(v: i64) -> Self {
//! 		Num(v)
//! 	}
//! }
//!
//! impl Canonical for Num {
//! 	fn binary(self, op: Operator, other: Self) -> Self {
//! 		match op {
//! 			Operator::Add => Num(self.0 + other.0),
//! 			Operator::Sub => Num(self.0 - other.0),
//! 			_ => unreachable!("only add and sub are declared"),
//! 		}
//! 	}
//! }
//!
//! let mut n = Num(5);
//! assert_eq!(n - 2i64, Num(3));
//! assert_eq!(2i64 - n, Num(-3));
//! n += Num(1);
//! assert_eq!(n, Num(6));
//! ```
//!
//! A base that never declares its canonical operators cannot be built:
//!
//! ```compile_fail
//! use lazy_ops::Operators;
//!
//! #[derive(Clone, Operators)]
//! struct Abstract(i64);
//! ```
//!
//! ```compile_fail
//! use lazy_ops::Operators;
//!
//! #[derive(Clone, Operators)]
//! #[operators()]
//! struct Abstract(i64);
//! ```
//!
//! A type that declares an operator without its canonical implementation does not
//! compile either:
//!
//! ```compile_fail
//! use lazy_ops::Operators;
//!
//! #[derive(Clone, Operators)]
//! #[operators(neg)]
//! struct NoUnary(i64);
//! ```
//!
//! Operator names outside the vocabulary are rejected:
//!
//! ```compile_fail
//! use lazy_ops::{Canonical, Operator, Operators};
//!
//! #[derive(Clone, Operators)]
//! #[operators(add, matmul)]
//! struct Matrix(i64);
//!
//! impl Canonical for Matrix {
//! 	fn binary(self, _op: Operator, other: Self) -> Self {
//! 		Matrix(self.0 + other.0)
//! 	}
//! }
//! ```
//!
//! So is splitting the declaration over several attributes:
//!
//! ```compile_fail
//! use lazy_ops::{Canonical, Operator, Operators};
//!
//! #[derive(Clone, Operators)]
//! #[operators(add)]
//! #[operators(sub)]
//! struct Split(i64);
//!
//! impl Canonical for Split {
//! 	fn binary(self, _op: Operator, other: Self) -> Self {
//! 		Split(self.0 + other.0)
//! 	}
//! }
//! ```
//!
//! A reflected operand type must convert into the algebraic type:
//!
//! ```compile_fail
//! use lazy_ops::{Canonical, Operator, Operators};
//!
//! #[derive(Clone, Operators)]
//! #[operators(add, reflect(f64))]
//! struct Count(i64);
//!
//! impl Canonical for Count {
//! 	fn binary(self, _op: Operator, other: Self) -> Self {
//! 		Count(self.0 + other.0)
//! 	}
//! }
//! ```

mod contract;
mod error;
mod operator;
mod overload;
mod set;

pub use contract::{
	Contract, ContractBuilder, GeneratedMethod, OperatorBase, build_abstract_operator_base,
	contract_of,
};
pub use error::ContractError;
#[cfg(feature = "derive")]
pub use lazy_macros::Operators;
pub use operator::{Form, Operator, OperatorKind};
pub use overload::{Canonical, Operators, UnaryCanonical};
pub use set::OperatorSet;
