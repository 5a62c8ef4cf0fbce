//! Procedural macros for operator contracts.
//!
//! Provides derive macros:
//! * `#[derive(Operators)]` - generates an algebraic type's operator surface

use proc_macro::TokenStream;

/// Operator surface derive implementation.
mod operators;

/// Generates the operator surface of an algebraic type from its canonical operators.
///
/// ```ignore
/// #[derive(Clone, Operators)]
/// #[operators(add, sub, mul, lt, neg, reflect(f64))]
/// pub struct Stream(Vec<f64>);
/// ```
///
/// The type implements `lazy_ops::Canonical` (and `lazy_ops::UnaryCanonical` when a unary
/// operator is declared). Generates, per declared operator:
/// * binary arithmetic/bitwise - `core::ops` impls for `T` and `&T` taking any
///   `Into<T>` operand, the `*Assign` in-place impl, and a reflected impl on every type
///   listed in `reflect(...)`
/// * `pow` - inherent `pow`, `rpow` and `pow_assign` methods
/// * comparisons - inherent `cmp_lt`, `cmp_le`, `cmp_eq`, `cmp_ne`, `cmp_gt`, `cmp_ge`
///   methods returning `T`
/// * `neg`/`not` - `Neg`/`Not` impls for `T` and `&T`
///
/// plus `lazy_ops::Operators` recording the declared set.
///
/// # Attributes
///
/// - `#[operators(op, ...)]` - Required: non-empty canonical operator list
/// - `reflect(Type, ...)` - Optional: left-hand operand types for reflected forms
///   (requires `T: From<Type>`)
#[proc_macro_derive(Operators, attributes(operators))]
pub fn derive_operators(input: TokenStream) -> TokenStream {
	operators::derive_operators(input)
}
