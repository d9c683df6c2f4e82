// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	str::FromStr,
};

use serde::{Deserialize, Serialize};

mod get;

pub use get::GetType;

use crate::value::Value;

/// All attribute kinds a [`Value`] can hold.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Type {
	/// Value is not defined (think null in common programming languages)
	Undefined,
	/// A boolean: true or false.
	Boolean,
	/// A 4-byte signed integer
	Int4,
	/// An 8-byte signed integer
	Int8,
	/// A UTF-8 encoded text.
	Utf8,
	/// A calendar date (year, month, day) without time information
	Date,
}

impl Type {
	pub const ALL: [Type; 6] = [Type::Undefined, Type::Boolean, Type::Int4, Type::Int8, Type::Utf8, Type::Date];

	/// Stable one-byte tag, used by the catalog and the value encoding.
	pub fn to_u8(&self) -> u8 {
		match self {
			Type::Undefined => 0x00,
			Type::Boolean => 0x01,
			Type::Int4 => 0x02,
			Type::Int8 => 0x03,
			Type::Utf8 => 0x04,
			Type::Date => 0x05,
		}
	}

	pub fn from_u8(value: u8) -> Option<Self> {
		match value {
			0x00 => Some(Type::Undefined),
			0x01 => Some(Type::Boolean),
			0x02 => Some(Type::Int4),
			0x03 => Some(Type::Int8),
			0x04 => Some(Type::Utf8),
			0x05 => Some(Type::Date),
			_ => None,
		}
	}
}

impl Display for Type {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Type::Undefined => f.write_str("Undefined"),
			Type::Boolean => f.write_str("Boolean"),
			Type::Int4 => f.write_str("Int4"),
			Type::Int8 => f.write_str("Int8"),
			Type::Utf8 => f.write_str("Utf8"),
			Type::Date => f.write_str("Date"),
		}
	}
}

impl From<&Value> for Type {
	fn from(value: &Value) -> Self {
		value.get_type()
	}
}

impl FromStr for Type {
	type Err = ();

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_uppercase().as_str() {
			"UNDEFINED" => Ok(Type::Undefined),
			"BOOL" | "BOOLEAN" => Ok(Type::Boolean),
			"INT4" => Ok(Type::Int4),
			"INT8" => Ok(Type::Int8),
			"UTF8" | "TEXT" => Ok(Type::Utf8),
			"DATE" => Ok(Type::Date),
			_ => Err(()),
		}
	}
}
