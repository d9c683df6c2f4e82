// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{
	Deserialize, Deserializer, Serialize, Serializer,
	de::{self, Visitor},
};

use crate::{
	error::{Error, TemporalKind, TypeError},
	fragment::Fragment,
	value::temporal::parse::parse_date,
};

const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// A calendar date (year, month, day) without time information.
///
/// Internally stored as the decimal encoding `year * 10000 + month * 100 +
/// day`, so 2024-03-07 is held as `20240307`. Because month and day never
/// exceed two decimal digits, comparing the encoded integers orders dates
/// chronologically.
///
/// Every `Date` is valid: construction is the only place the calendar rules
/// are checked.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Date {
	value: i64,
}

// Calendar utilities
impl Date {
	pub const MIN_YEAR: i32 = 0;
	pub const MAX_YEAR: i32 = 9999;

	/// Gregorian rule: divisible by 4 and not by 100, or divisible by 400.
	#[inline]
	pub fn is_leap_year(year: i32) -> bool {
		(year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
	}

	/// Number of days in `month` of `year`, or 0 for a month outside 1..=12.
	#[inline]
	pub fn days_in_month(year: i32, month: u32) -> u32 {
		match month {
			2 if Self::is_leap_year(year) => 29,
			1..=12 => DAYS_IN_MONTH[month as usize - 1],
			_ => 0,
		}
	}

	fn is_valid(year: i32, month: u32, day: u32) -> bool {
		(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year)
			&& (1..=12).contains(&month)
			&& day >= 1 && day <= Self::days_in_month(year, month)
	}

	/// Callers must have validated the components.
	pub(crate) fn encode(year: i32, month: u32, day: u32) -> Self {
		debug_assert!(Self::is_valid(year, month, day), "encoding invalid date {year}-{month}-{day}");
		Self {
			value: year as i64 * 10000 + month as i64 * 100 + day as i64,
		}
	}

	#[inline]
	fn decode(value: i64) -> (i32, u32, u32) {
		let year = (value / 10000) as i32;
		let month = ((value / 100) % 100) as u32;
		let day = (value % 100) as u32;
		(year, month, day)
	}
}

impl Date {
	pub fn new(year: i32, month: u32, day: u32) -> Option<Self> {
		if Self::is_valid(year, month, day) {
			Some(Self::encode(year, month, day))
		} else {
			None
		}
	}

	pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, Error> {
		if let Some(date) = Self::new(year, month, day) {
			return Ok(date);
		}

		let kind = if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) {
			TemporalKind::InvalidYear
		} else if !(1..=12).contains(&month) {
			TemporalKind::InvalidMonth
		} else {
			TemporalKind::InvalidDay
		};

		let text = format!("{:04}-{:02}-{:02}", year, month, day);
		Err(TypeError::Temporal {
			kind,
			message: format!("invalid date '{}'", text),
			fragment: Fragment::internal(text),
		}
		.into())
	}

	/// Rebuild a date from its encoded integer, e.g. when loading a stored
	/// attribute. Returns `None` if the integer is not the encoding of a
	/// valid date.
	pub fn from_encoded(value: i64) -> Option<Self> {
		if !(0..=Self::MAX_YEAR as i64 * 10000 + 1231).contains(&value) {
			return None;
		}
		let (year, month, day) = Self::decode(value);
		Self::new(year, month, day).filter(|date| date.value == value)
	}

	/// The encoded `YYYYMMDD` integer.
	pub fn encoded(&self) -> i64 {
		self.value
	}

	pub fn year(&self) -> i32 {
		self.ymd().0
	}

	pub fn month(&self) -> u32 {
		self.ymd().1
	}

	pub fn day(&self) -> u32 {
		self.ymd().2
	}

	pub fn ymd(&self) -> (i32, u32, u32) {
		let (year, month, day) = Self::decode(self.value);
		debug_assert!(Self::is_valid(year, month, day), "corrupt date record {}", self.value);
		(year, month, day)
	}
}

impl Display for Date {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let (year, month, day) = self.ymd();
		write!(f, "{:04}-{:02}-{:02}", year, month, day)
	}
}

// Serialized as the canonical YYYY-MM-DD text
impl Serialize for Date {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_str(&self.to_string())
	}
}

struct DateVisitor;

impl<'de> Visitor<'de> for DateVisitor {
	type Value = Date;

	fn expecting(&self, formatter: &mut Formatter) -> std::fmt::Result {
		formatter.write_str("a date in the format YYYY-MM-DD")
	}

	fn visit_str<E>(self, value: &str) -> Result<Date, E>
	where
		E: de::Error,
	{
		parse_date(Fragment::internal(value)).map_err(E::custom)
	}
}

impl<'de> Deserialize<'de> for Date {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		deserializer.deserialize_str(DateVisitor)
	}
}
