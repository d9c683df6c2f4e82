// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Per-kind behavior behind a single contract.
//!
//! Every attribute kind supplies one stateless [`TypeDescriptor`]. Engine code
//! looks the descriptor up by [`Type`] and calls it, so comparison, parsing,
//! formatting and casting never branch on the kind directly.

use std::{
	cmp::Ordering,
	fmt::{Display, Formatter},
};

mod date;
mod registry;

pub use date::DateType;
pub use registry::{TypeRegistry, TypeRegistryBuilder};

use crate::{error::Error, fragment::Fragment, value::Type, value::Value};

/// Ranking of an implicit conversion. Lower is preferred.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CastCost(u32);

impl CastCost {
	/// Source and target are the same kind.
	pub const NONE: CastCost = CastCost(0);
	/// There is no implicit conversion; such a candidate must be discarded.
	pub const IMPOSSIBLE: CastCost = CastCost(u32::MAX);

	pub const fn new(cost: u32) -> Self {
		CastCost(cost)
	}

	pub fn value(&self) -> u32 {
		self.0
	}

	pub fn is_viable(&self) -> bool {
		*self != Self::IMPOSSIBLE
	}
}

impl Display for CastCost {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		if self.is_viable() {
			Display::fmt(&self.0, f)
		} else {
			f.write_str("impossible")
		}
	}
}

/// The contract every attribute kind implements.
///
/// Implementations hold no per-value state; a single `&'static` instance
/// serves all values of its kind, from any thread.
pub trait TypeDescriptor: Send + Sync {
	/// The kind this descriptor serves.
	fn kind(&self) -> Type;

	/// Total order over two values of this kind. Fails with `TypeMismatch`
	/// if either operand is of another kind.
	fn compare(&self, left: &Value, right: &Value) -> Result<Ordering, Error>;

	/// Build a value from its canonical text form.
	fn parse(&self, fragment: Fragment) -> Result<Value, Error>;

	/// Canonical text form of `value`; `parse(to_text(v)) == v`.
	fn to_text(&self, value: &Value) -> Result<String, Error>;

	/// Convert `value` into `target`. Kind pairs without a rule report
	/// `Unimplemented`.
	fn cast_to(&self, value: &Value, target: Type) -> Result<Value, Error>;

	/// Cost of implicitly converting this kind into `target`.
	fn cast_cost(&self, target: Type) -> CastCost;
}
