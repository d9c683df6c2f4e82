// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	cmp::Ordering,
	fmt::{Display, Formatter},
};

use serde::{Deserialize, Serialize};

mod date;
mod encoded;
pub mod temporal;
pub mod r#type;

pub use date::Date;
pub use r#type::{GetType, Type};

use crate::error::{Error, TypeError};

/// A single attribute value together with its kind.
///
/// The kind is fixed by the variant; a value changes kind only by being
/// replaced as a whole. Out-of-line payloads (`Utf8`) are owned, so cloning
/// copies them and dropping releases them.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Value {
	/// Value is not defined (think null in common programming languages)
	Undefined,
	/// A boolean: true or false.
	Boolean(bool),
	/// A 4-byte signed integer
	Int4(i32),
	/// An 8-byte signed integer
	Int8(i64),
	/// A UTF-8 encoded text.
	Utf8(String),
	/// A date value (year, month, day)
	Date(Date),
}

impl Value {
	pub fn undefined() -> Self {
		Value::Undefined
	}

	pub fn bool(v: impl Into<bool>) -> Self {
		Value::Boolean(v.into())
	}

	pub fn int4(v: impl Into<i32>) -> Self {
		Value::Int4(v.into())
	}

	pub fn int8(v: impl Into<i64>) -> Self {
		Value::Int8(v.into())
	}

	pub fn utf8(v: impl Into<String>) -> Self {
		Value::Utf8(v.into())
	}

	pub fn date(v: impl Into<Date>) -> Self {
		Value::Date(v.into())
	}
}

impl Value {
	pub fn get_type(&self) -> Type {
		match self {
			Value::Undefined => Type::Undefined,
			Value::Boolean(_) => Type::Boolean,
			Value::Int4(_) => Type::Int4,
			Value::Int8(_) => Type::Int8,
			Value::Utf8(_) => Type::Utf8,
			Value::Date(_) => Type::Date,
		}
	}

	pub fn is_undefined(&self) -> bool {
		matches!(self, Value::Undefined)
	}

	fn mismatch<T: GetType>(&self) -> Error {
		TypeError::TypeMismatch {
			expected: T::get_type(),
			actual: self.get_type(),
		}
		.into()
	}
}

// Checked access to the payload
impl Value {
	pub fn as_bool(&self) -> Result<bool, Error> {
		match self {
			Value::Boolean(v) => Ok(*v),
			_ => Err(self.mismatch::<bool>()),
		}
	}

	pub fn as_int4(&self) -> Result<i32, Error> {
		match self {
			Value::Int4(v) => Ok(*v),
			_ => Err(self.mismatch::<i32>()),
		}
	}

	pub fn as_int8(&self) -> Result<i64, Error> {
		match self {
			Value::Int8(v) => Ok(*v),
			_ => Err(self.mismatch::<i64>()),
		}
	}

	pub fn as_utf8(&self) -> Result<&str, Error> {
		match self {
			Value::Utf8(v) => Ok(v),
			_ => Err(self.mismatch::<String>()),
		}
	}

	pub fn as_date(&self) -> Result<&Date, Error> {
		match self {
			Value::Date(v) => Ok(v),
			_ => Err(self.mismatch::<Date>()),
		}
	}
}

impl From<Date> for Value {
	fn from(value: Date) -> Self {
		Value::Date(value)
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Value::Boolean(value)
	}
}

impl From<i32> for Value {
	fn from(value: i32) -> Self {
		Value::Int4(value)
	}
}

impl From<i64> for Value {
	fn from(value: i64) -> Self {
		Value::Int8(value)
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Value::Utf8(value)
	}
}

/// Values only compare within one kind; any other pair, and `Undefined`, is
/// unordered.
impl PartialOrd for Value {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		match (self, other) {
			(Value::Boolean(l), Value::Boolean(r)) => l.partial_cmp(r),
			(Value::Int4(l), Value::Int4(r)) => l.partial_cmp(r),
			(Value::Int8(l), Value::Int8(r)) => l.partial_cmp(r),
			(Value::Utf8(l), Value::Utf8(r)) => l.partial_cmp(r),
			(Value::Date(l), Value::Date(r)) => l.partial_cmp(r),
			_ => None,
		}
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Value::Boolean(true) => f.write_str("true"),
			Value::Boolean(false) => f.write_str("false"),
			Value::Int4(value) => Display::fmt(value, f),
			Value::Int8(value) => Display::fmt(value, f),
			Value::Utf8(value) => Display::fmt(value, f),
			Value::Date(value) => Display::fmt(value, f),
			Value::Undefined => f.write_str("undefined"),
		}
	}
}
