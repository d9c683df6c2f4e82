// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::cmp::Ordering;

use tracing::{instrument, trace};

use super::{CastCost, TypeDescriptor};
use crate::{
	error::{Error, TypeError},
	fragment::Fragment,
	value::{Type, Value, temporal::parse::parse_date},
};

/// Descriptor for [`Type::Date`].
#[derive(Debug, Default, Copy, Clone)]
pub struct DateType;

impl TypeDescriptor for DateType {
	fn kind(&self) -> Type {
		Type::Date
	}

	fn compare(&self, left: &Value, right: &Value) -> Result<Ordering, Error> {
		let left = left.as_date()?;
		let right = right.as_date()?;
		Ok(left.encoded().cmp(&right.encoded()))
	}

	#[instrument(name = "type::date::parse", level = "trace", skip(self, fragment), fields(text = fragment.text()))]
	fn parse(&self, fragment: Fragment) -> Result<Value, Error> {
		match parse_date(fragment) {
			Ok(date) => Ok(Value::Date(date)),
			Err(err) => {
				trace!(code = %err.diagnostic().code, "rejected date literal");
				Err(err)
			}
		}
	}

	fn to_text(&self, value: &Value) -> Result<String, Error> {
		Ok(value.as_date()?.to_string())
	}

	/// No conversions exist for dates yet, not even to [`Type::Date`].
	#[instrument(name = "type::date::cast_to", level = "trace", skip(self, value))]
	fn cast_to(&self, value: &Value, target: Type) -> Result<Value, Error> {
		let date = value.as_date()?;
		Err(TypeError::UnsupportedCast {
			from: Type::Date,
			to: target,
			fragment: Fragment::internal(date.to_string()),
		}
		.into())
	}

	fn cast_cost(&self, target: Type) -> CastCost {
		match target {
			Type::Date => CastCost::NONE,
			_ => CastCost::IMPOSSIBLE,
		}
	}
}
