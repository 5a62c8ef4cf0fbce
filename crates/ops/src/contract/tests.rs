use pretty_assertions::assert_eq;
use rstest::rstest;

use super::{ContractBuilder, build_abstract_operator_base, contract_of};
use crate::{ContractError, Form, Operator, OperatorKind, OperatorSet, Operators};

struct Declares;

impl Operators for Declares {
	const OPERATORS: OperatorSet = OperatorSet::ADD
		.union(OperatorSet::SUB)
		.union(OperatorSet::LT)
		.union(OperatorSet::NEG);
}

struct AddOnly;

impl Operators for AddOnly {
	const OPERATORS: OperatorSet = OperatorSet::ADD;
}

struct Nothing;

impl Operators for Nothing {
	const OPERATORS: OperatorSet = OperatorSet::empty();
}

/// An unconfigured builder refuses to act as a concrete base.
#[test]
fn builder_cannot_be_instantiated_directly() {
	let err = ContractBuilder::new("AbstractOperatorOverloader")
		.instantiate()
		.unwrap_err();
	assert!(matches!(err, ContractError::AbstractConstruction { .. }));
	assert!(err.to_string().starts_with("Can't instantiate"));
}

/// Verifies that building a concrete type from an undeclared base fails with
/// `AbstractConstruction`.
#[test]
fn undeclared_subclass_fails_at_first_concrete_build() {
	let base = ContractBuilder::new("MyAbstractClass");
	let err = base.build::<Declares>().unwrap_err();
	assert_eq!(
		err,
		ContractError::AbstractConstruction {
			type_name: "MyAbstractClass".to_string(),
		}
	);
	assert!(err.to_string().starts_with("Can't instantiate"));
}

/// An empty canonical set keeps the base abstract on every path.
#[test]
fn empty_canonical_set_stays_abstract() {
	let err = ContractBuilder::new("Empty")
		.operators(OperatorSet::empty())
		.unwrap_err();
	assert!(matches!(err, ContractError::AbstractConstruction { .. }));

	let err = build_abstract_operator_base("Empty", Vec::<&str>::new()).unwrap_err();
	assert!(matches!(err, ContractError::AbstractConstruction { .. }));

	assert!(matches!(
		contract_of::<Nothing>(),
		Err(ContractError::AbstractConstruction { .. })
	));
}

/// Unknown operator names are reported by name.
#[test]
fn unknown_operator_name() {
	let err = build_abstract_operator_base("Stream", ["add", "matmul"]).unwrap_err();
	assert_eq!(
		err,
		ContractError::UnknownOperator {
			name: "matmul".to_string(),
		}
	);
}

/// Verifies that a concrete type lacking a canonical operator fails to build and
/// the error names the first missing operator.
#[test]
fn missing_canonical_operator() {
	let base = build_abstract_operator_base("Stream", ["add", "mul"]).unwrap();
	let err = base.build::<AddOnly>().unwrap_err();
	match err {
		ContractError::MissingCanonical {
			type_name,
			base,
			operator,
		} => {
			assert!(type_name.ends_with("AddOnly"));
			assert_eq!(base, "Stream");
			assert_eq!(operator, Operator::Mul);
		}
		other => panic!("unexpected error: {other}"),
	}
}

/// A base with only `add` generates its plain, reflected and in-place forms.
#[test]
fn add_only_surface() {
	let base = build_abstract_operator_base("Stream", ["add"]).unwrap();
	let contract = base.build::<AddOnly>().unwrap();

	let items: Vec<(Form, &str)> = contract
		.surface()
		.iter()
		.map(|m| (m.form, m.item))
		.collect();
	assert_eq!(
		items,
		[
			(Form::Plain, "Add::add"),
			(Form::Reflected, "Add::add"),
			(Form::InPlace, "AddAssign::add_assign"),
		]
	);
}

/// The contract follows the base's set even when the type declares more.
#[test]
fn concrete_type_may_declare_more_than_base() {
	let base = build_abstract_operator_base("Stream", ["add"]).unwrap();
	let contract = base.build::<Declares>().unwrap();
	assert_eq!(contract.canonical(), OperatorSet::ADD);
	assert!(!contract.supports(Operator::Sub, Form::Plain));
}

/// Verifies that comparisons and unary operators only receive the plain form.
#[test]
fn contract_of_uses_declared_set() {
	let contract = contract_of::<Declares>().unwrap();
	assert!(contract.type_name().ends_with("Declares"));

	assert!(contract.supports(Operator::Sub, Form::Plain));
	assert!(contract.supports(Operator::Sub, Form::Reflected));
	assert!(contract.supports(Operator::Sub, Form::InPlace));

	assert!(contract.supports(Operator::Lt, Form::Plain));
	assert!(!contract.supports(Operator::Lt, Form::Reflected));
	assert!(!contract.supports(Operator::Lt, Form::InPlace));

	assert!(contract.supports(Operator::Neg, Form::Plain));
	assert!(!contract.supports(Operator::Neg, Form::InPlace));

	assert_eq!(contract.surface().len(), 3 + 3 + 1 + 1);
}

/// Operator names parse, display and flag consistently.
#[rstest]
#[case("add", Operator::Add, OperatorKind::Arithmetic)]
#[case("pow", Operator::Pow, OperatorKind::Arithmetic)]
#[case("xor", Operator::Xor, OperatorKind::Bitwise)]
#[case("shr", Operator::Shr, OperatorKind::Bitwise)]
#[case("ge", Operator::Ge, OperatorKind::Comparison)]
#[case("not", Operator::Not, OperatorKind::Unary)]
fn operator_names_round_trip(#[case] name: &str, #[case] op: Operator, #[case] kind: OperatorKind) {
	assert_eq!(name.parse::<Operator>().unwrap(), op);
	assert_eq!(op.name(), name);
	assert_eq!(op.to_string(), name);
	assert_eq!(op.kind(), kind);
	assert_eq!(OperatorSet::from_names([name]).unwrap(), op.flag());
}

/// Every operator owns exactly one flag and a plain-form item.
#[test]
fn every_operator_has_its_own_flag() {
	use strum::IntoEnumIterator;

	let all: OperatorSet = Operator::iter().collect();
	assert_eq!(all.bits().count_ones() as usize, Operator::iter().count());
	assert_eq!(
		all,
		OperatorSet::ARITHMETIC | OperatorSet::BITWISE | OperatorSet::COMPARISON | OperatorSet::UNARY
	);
	for op in Operator::iter() {
		assert_eq!(all.operators().filter(|o| *o == op).count(), 1);
		assert!(op.item(Form::Plain).is_some());
		assert_eq!(op.item(Form::InPlace).is_some(), op.supports(Form::InPlace));
	}
}

/// `pow` maps to inherent methods, and comparisons have no reflected form.
#[test]
fn pow_uses_inherent_methods() {
	assert_eq!(Operator::Pow.item(Form::Plain), Some("pow"));
	assert_eq!(Operator::Pow.item(Form::Reflected), Some("rpow"));
	assert_eq!(Operator::Pow.item(Form::InPlace), Some("pow_assign"));
	assert_eq!(Operator::Eq.item(Form::Reflected), None);
}
