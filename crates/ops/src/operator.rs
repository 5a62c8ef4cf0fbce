//! Operator vocabulary.

use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::OperatorSet;

/// An overloadable operator, named by its lowercase spelling (`"add"`, `"lt"`, ...).
#[derive(
	Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum Operator {
	Add,
	Sub,
	Mul,
	Div,
	Rem,
	Pow,
	And,
	Or,
	Xor,
	Shl,
	Shr,
	Lt,
	Le,
	Eq,
	Ne,
	Gt,
	Ge,
	Neg,
	Not,
}

/// Operator families, which decide the derived forms an operator receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorKind {
	/// Binary arithmetic: plain, reflected and in-place forms.
	Arithmetic,
	/// Binary bitwise and shift: plain, reflected and in-place forms.
	Bitwise,
	/// Element-wise comparison: plain form only.
	Comparison,
	/// Unary: plain form only.
	Unary,
}

/// Shape of a generated operator method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Form {
	/// `self OP other`.
	Plain,
	/// `other OP self`, dispatched from the other operand's type.
	Reflected,
	/// `self OP= other`, rebinding the receiver.
	InPlace,
}

impl Operator {
	/// Family of this operator.
	pub const fn kind(self) -> OperatorKind {
		match self {
			Self::Add | Self::Sub | Self::Mul | Self::Div | Self::Rem | Self::Pow => {
				OperatorKind::Arithmetic
			}
			Self::And | Self::Or | Self::Xor | Self::Shl | Self::Shr => OperatorKind::Bitwise,
			Self::Lt | Self::Le | Self::Eq | Self::Ne | Self::Gt | Self::Ge => {
				OperatorKind::Comparison
			}
			Self::Neg | Self::Not => OperatorKind::Unary,
		}
	}

	/// Lowercase name, as accepted by [`str::parse`].
	pub fn name(self) -> &'static str {
		self.into()
	}

	/// Returns true if this operator receives `form`.
	pub const fn supports(self, form: Form) -> bool {
		match form {
			Form::Plain => true,
			Form::Reflected | Form::InPlace => matches!(
				self.kind(),
				OperatorKind::Arithmetic | OperatorKind::Bitwise
			),
		}
	}

	/// Rust item generated for `form`, or `None` if the form does not apply.
	///
	/// Operators backed by `core::ops` name the trait method; `pow` and the comparisons
	/// have no operator trait and are generated as inherent methods.
	pub const fn item(self, form: Form) -> Option<&'static str> {
		if !self.supports(form) {
			return None;
		}
		let item = match (self, form) {
			(Self::Pow, Form::Plain) => "pow",
			(Self::Pow, Form::Reflected) => "rpow",
			(Self::Pow, Form::InPlace) => "pow_assign",
			(Self::Add, Form::InPlace) => "AddAssign::add_assign",
			(Self::Sub, Form::InPlace) => "SubAssign::sub_assign",
			(Self::Mul, Form::InPlace) => "MulAssign::mul_assign",
			(Self::Div, Form::InPlace) => "DivAssign::div_assign",
			(Self::Rem, Form::InPlace) => "RemAssign::rem_assign",
			(Self::And, Form::InPlace) => "BitAndAssign::bitand_assign",
			(Self::Or, Form::InPlace) => "BitOrAssign::bitor_assign",
			(Self::Xor, Form::InPlace) => "BitXorAssign::bitxor_assign",
			(Self::Shl, Form::InPlace) => "ShlAssign::shl_assign",
			(Self::Shr, Form::InPlace) => "ShrAssign::shr_assign",
			(Self::Add, _) => "Add::add",
			(Self::Sub, _) => "Sub::sub",
			(Self::Mul, _) => "Mul::mul",
			(Self::Div, _) => "Div::div",
			(Self::Rem, _) => "Rem::rem",
			(Self::And, _) => "BitAnd::bitand",
			(Self::Or, _) => "BitOr::bitor",
			(Self::Xor, _) => "BitXor::bitxor",
			(Self::Shl, _) => "Shl::shl",
			(Self::Shr, _) => "Shr::shr",
			(Self::Lt, _) => "cmp_lt",
			(Self::Le, _) => "cmp_le",
			(Self::Eq, _) => "cmp_eq",
			(Self::Ne, _) => "cmp_ne",
			(Self::Gt, _) => "cmp_gt",
			(Self::Ge, _) => "cmp_ge",
			(Self::Neg, _) => "Neg::neg",
			(Self::Not, _) => "Not::not",
		};
		Some(item)
	}

	/// Single-operator set.
	pub const fn flag(self) -> OperatorSet {
		match self {
			Self::Add => OperatorSet::ADD,
			Self::Sub => OperatorSet::SUB,
			Self::Mul => OperatorSet::MUL,
			Self::Div => OperatorSet::DIV,
			Self::Rem => OperatorSet::REM,
			Self::Pow => OperatorSet::POW,
			Self::And => OperatorSet::AND,
			Self::Or => OperatorSet::OR,
			Self::Xor => OperatorSet::XOR,
			Self::Shl => OperatorSet::SHL,
			Self::Shr => OperatorSet::SHR,
			Self::Lt => OperatorSet::LT,
			Self::Le => OperatorSet::LE,
			Self::Eq => OperatorSet::EQ,
			Self::Ne => OperatorSet::NE,
			Self::Gt => OperatorSet::GT,
			Self::Ge => OperatorSet::GE,
			Self::Neg => OperatorSet::NEG,
			Self::Not => OperatorSet::NOT,
		}
	}
}
