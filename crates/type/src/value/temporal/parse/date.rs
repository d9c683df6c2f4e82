// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::{
	error::{Error, TemporalKind, TypeError},
	fragment::Fragment,
	value::Date,
};

const YEAR: (usize, usize) = (0, 4);
const MONTH: (usize, usize) = (5, 2);
const DAY: (usize, usize) = (8, 2);

/// Parse a date in the canonical format `YYYY-MM-DD`.
///
/// Only ASCII digits and the two separators are accepted; there is no
/// surrounding whitespace, sign, or shortened component.
pub fn parse_date(fragment: Fragment) -> Result<Date, Error> {
	let bytes = fragment.text().as_bytes();

	if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
		let message = format!("invalid date format '{}'", fragment.text());
		return Err(TypeError::Temporal {
			kind: TemporalKind::InvalidDateFormat,
			message,
			fragment,
		}
		.into());
	}

	let year = parse_component(&fragment, YEAR, "year")? as i32;
	let month = parse_component(&fragment, MONTH, "month")?;
	let day = parse_component(&fragment, DAY, "day")?;

	if !(1..=12).contains(&month) {
		let sub_frag = fragment.sub_fragment(MONTH.0, MONTH.1);
		return Err(TypeError::Temporal {
			kind: TemporalKind::InvalidMonth,
			message: format!("invalid month value '{}'", sub_frag.text()),
			fragment: sub_frag,
		}
		.into());
	}

	if day < 1 || day > Date::days_in_month(year, month) {
		let sub_frag = fragment.sub_fragment(DAY.0, DAY.1);
		return Err(TypeError::Temporal {
			kind: TemporalKind::InvalidDay,
			message: format!("invalid day value '{}'", sub_frag.text()),
			fragment: sub_frag,
		}
		.into());
	}

	Ok(Date::encode(year, month, day))
}

fn parse_component(fragment: &Fragment, (offset, len): (usize, usize), component: &str) -> Result<u32, Error> {
	let sub_frag = fragment.sub_fragment(offset, len);
	let digits = sub_frag.text();

	if digits.len() != len || !digits.bytes().all(|b| b.is_ascii_digit()) {
		return Err(TypeError::Temporal {
			kind: TemporalKind::InvalidDateComponentFormat {
				component: component.to_string(),
			},
			message: format!("invalid {} format '{}'", component, digits),
			fragment: sub_frag,
		}
		.into());
	}

	Ok(digits.bytes().fold(0u32, |acc, b| acc * 10 + (b - b'0') as u32))
}
