use strum::IntoEnumIterator;

use crate::{ContractError, Operator};

bitflags::bitflags! {
	/// A set of operators, used to declare an algebraic base's canonical operators.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
	pub struct OperatorSet: u32 {
		const ADD = 1 << 0;
		const SUB = 1 << 1;
		const MUL = 1 << 2;
		const DIV = 1 << 3;
		const REM = 1 << 4;
		const POW = 1 << 5;
		const AND = 1 << 6;
		const OR = 1 << 7;
		const XOR = 1 << 8;
		const SHL = 1 << 9;
		const SHR = 1 << 10;
		const LT = 1 << 11;
		const LE = 1 << 12;
		const EQ = 1 << 13;
		const NE = 1 << 14;
		const GT = 1 << 15;
		const GE = 1 << 16;
		const NEG = 1 << 17;
		const NOT = 1 << 18;

		const ARITHMETIC = Self::ADD.bits()
			| Self::SUB.bits()
			| Self::MUL.bits()
			| Self::DIV.bits()
			| Self::REM.bits()
			| Self::POW.bits();
		const BITWISE = Self::AND.bits()
			| Self::OR.bits()
			| Self::XOR.bits()
			| Self::SHL.bits()
			| Self::SHR.bits();
		const COMPARISON = Self::LT.bits()
			| Self::LE.bits()
			| Self::EQ.bits()
			| Self::NE.bits()
			| Self::GT.bits()
			| Self::GE.bits();
		const UNARY = Self::NEG.bits() | Self::NOT.bits();
	}
}

impl OperatorSet {
	/// Parses lowercase operator names.
	///
	/// # Errors
	///
	/// Returns [`ContractError::UnknownOperator`] for the first name that is not an
	/// [`Operator`].
	pub fn from_names<I, S>(names: I) -> Result<Self, ContractError>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		names.into_iter().try_fold(Self::empty(), |set, name| {
			let name = name.as_ref();
			let op: Operator = name.parse().map_err(|_| ContractError::UnknownOperator {
				name: name.to_string(),
			})?;
			Ok(set | op.flag())
		})
	}

	/// Returns true if `op` is a member.
	pub fn has(self, op: Operator) -> bool {
		self.contains(op.flag())
	}

	/// Member operators in declaration order of [`Operator`].
	pub fn operators(self) -> impl Iterator<Item = Operator> {
		Operator::iter().filter(move |op| self.has(*op))
	}
}

impl From<Operator> for OperatorSet {
	fn from(op: Operator) -> Self {
		op.flag()
	}
}

impl FromIterator<Operator> for OperatorSet {
	fn from_iter<I: IntoIterator<Item = Operator>>(iter: I) -> Self {
		iter.into_iter()
			.fold(Self::empty(), |set, op| set | op.flag())
	}
}
