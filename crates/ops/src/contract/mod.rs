//! Runtime operator contracts.
//!
//! # Role
//!
//! Models the construction lifecycle of an algebraic base:
//!
//! | State | Type | Reached by |
//! |-------|------|------------|
//! | Unconfigured | [`ContractBuilder`] | [`ContractBuilder::new`] |
//! | Configured | [`OperatorBase`] | [`ContractBuilder::operators`] |
//! | Built | [`Contract`] | [`OperatorBase::build`] |
//!
//! Building from an unconfigured builder fails with
//! [`ContractError::AbstractConstruction`]. Building a contract either yields the whole
//! surface or nothing.

use std::borrow::Cow;

use crate::{ContractError, Form, Operator, OperatorSet, Operators};

#[cfg(test)]
mod tests;

/// A base that has not declared its canonical operators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractBuilder {
	type_name: Cow<'static, str>,
}

impl ContractBuilder {
	/// Starts an abstract base named `type_name`.
	pub fn new(type_name: impl Into<Cow<'static, str>>) -> Self {
		Self {
			type_name: type_name.into(),
		}
	}

	/// Name of the base under construction.
	pub fn type_name(&self) -> &str {
		&self.type_name
	}

	/// Attempts to use the builder itself as a concrete base.
	///
	/// # Errors
	///
	/// Always returns [`ContractError::AbstractConstruction`].
	pub fn instantiate(&self) -> Result<OperatorBase, ContractError> {
		Err(self.abstract_error())
	}

	/// Attempts to build a concrete type without declaring canonical operators first.
	///
	/// # Errors
	///
	/// Always returns [`ContractError::AbstractConstruction`].
	pub fn build<T: Operators>(&self) -> Result<Contract, ContractError> {
		tracing::debug!(
			base = %self.type_name,
			concrete = std::any::type_name::<T>(),
			"refusing to build from undeclared operator base"
		);
		Err(self.abstract_error())
	}

	/// Declares the canonical operator set.
	///
	/// # Errors
	///
	/// Returns [`ContractError::AbstractConstruction`] if `canonical` is empty.
	pub fn operators(self, canonical: OperatorSet) -> Result<OperatorBase, ContractError> {
		if canonical.is_empty() {
			return Err(self.abstract_error());
		}
		Ok(OperatorBase {
			type_name: self.type_name,
			canonical,
		})
	}

	/// Declares the canonical operator set by name.
	///
	/// # Errors
	///
	/// Returns [`ContractError::UnknownOperator`] for unparseable names and
	/// [`ContractError::AbstractConstruction`] if no names are given.
	pub fn operator_names<I, S>(self, names: I) -> Result<OperatorBase, ContractError>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let canonical = OperatorSet::from_names(names)?;
		self.operators(canonical)
	}

	fn abstract_error(&self) -> ContractError {
		ContractError::AbstractConstruction {
			type_name: self.type_name.to_string(),
		}
	}
}

/// Builds a configured abstract base from canonical operator names.
///
/// ```
/// use lazy_ops::{Operator, build_abstract_operator_base};
///
/// let base = build_abstract_operator_base("Stream", ["add", "sub", "lt"])?;
/// assert!(base.canonical().has(Operator::Sub));
/// # Ok::<(), lazy_ops::ContractError>(())
/// ```
///
/// # Errors
///
/// See [`ContractBuilder::operator_names`].
pub fn build_abstract_operator_base<I, S>(
	type_name: impl Into<Cow<'static, str>>,
	canonical: I,
) -> Result<OperatorBase, ContractError>
where
	I: IntoIterator<Item = S>,
	S: AsRef<str>,
{
	ContractBuilder::new(type_name).operator_names(canonical)
}

/// An abstract base with a declared canonical operator set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorBase {
	type_name: Cow<'static, str>,
	canonical: OperatorSet,
}

impl OperatorBase {
	/// Name of the base.
	pub fn type_name(&self) -> &str {
		&self.type_name
	}

	/// Declared canonical operators.
	pub fn canonical(&self) -> OperatorSet {
		self.canonical
	}

	/// Builds the operator surface of concrete type `T`.
	///
	/// # Errors
	///
	/// Returns [`ContractError::MissingCanonical`] naming the first declared operator `T`
	/// does not provide.
	pub fn build<T: Operators>(&self) -> Result<Contract, ContractError> {
		let type_name = std::any::type_name::<T>();
		let missing = self.canonical.difference(T::OPERATORS);
		if let Some(operator) = missing.operators().next() {
			return Err(ContractError::MissingCanonical {
				type_name,
				base: self.type_name.to_string(),
				operator,
			});
		}

		let contract = Contract::generate(type_name, self.canonical);
		tracing::debug!(
			base = %self.type_name,
			concrete = type_name,
			methods = contract.surface.len(),
			"operator contract built"
		);
		Ok(contract)
	}
}

/// One generated operator method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GeneratedMethod {
	pub operator: Operator,
	pub form: Form,
	/// Rust item implementing it, e.g. `Add::add` or `pow_assign`.
	pub item: &'static str,
}

/// Complete operator surface of a concrete algebraic type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contract {
	type_name: &'static str,
	canonical: OperatorSet,
	surface: Vec<GeneratedMethod>,
}

impl Contract {
	fn generate(type_name: &'static str, canonical: OperatorSet) -> Self {
		let surface = canonical
			.operators()
			.flat_map(|operator| {
				[Form::Plain, Form::Reflected, Form::InPlace]
					.into_iter()
					.filter_map(move |form| {
						operator.item(form).map(|item| GeneratedMethod {
							operator,
							form,
							item,
						})
					})
			})
			.collect();
		Self {
			type_name,
			canonical,
			surface,
		}
	}

	/// Concrete type the contract was built for.
	pub fn type_name(&self) -> &'static str {
		self.type_name
	}

	/// Canonical operators the surface derives from.
	pub fn canonical(&self) -> OperatorSet {
		self.canonical
	}

	/// Every generated method, grouped by operator.
	pub fn surface(&self) -> &[GeneratedMethod] {
		&self.surface
	}

	/// Returns true if the surface has `op` in `form`.
	pub fn supports(&self, op: Operator, form: Form) -> bool {
		self.surface
			.iter()
			.any(|m| m.operator == op && m.form == form)
	}
}

/// Builds the contract of `T` from its own declared operators.
///
/// # Errors
///
/// Returns [`ContractError::AbstractConstruction`] if `T` declares no operators.
pub fn contract_of<T: Operators>() -> Result<Contract, ContractError> {
	ContractBuilder::new(std::any::type_name::<T>())
		.operators(T::OPERATORS)?
		.build::<T>()
}
