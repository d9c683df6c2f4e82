// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::{error::diagnostic::Diagnostic, fragment::Fragment};

pub fn invalid_date_format(fragment: Fragment) -> Diagnostic {
	let label = Some(format!("'{}' is not a valid date", fragment.text()));
	Diagnostic {
		code: "DATE_001".to_string(),
		statement: None,
		message: "invalid date format".to_string(),
		fragment,
		label,
		help: Some("use the format YYYY-MM-DD (e.g., 2024-03-15)".to_string()),
		notes: vec![
			"dates must be exactly 10 characters long".to_string(),
			"components are separated by '-'".to_string(),
		],
		cause: None,
	}
}

pub fn invalid_year(fragment: Fragment) -> Diagnostic {
	let label = Some(format!("invalid year value '{}'", fragment.text()));
	Diagnostic {
		code: "DATE_002".to_string(),
		statement: None,
		message: "invalid year value".to_string(),
		fragment,
		label,
		help: Some("the year must be four digits between 0000 and 9999".to_string()),
		notes: vec![],
		cause: None,
	}
}

pub fn invalid_month(fragment: Fragment) -> Diagnostic {
	let label = Some(format!("invalid month value '{}'", fragment.text()));
	Diagnostic {
		code: "DATE_003".to_string(),
		statement: None,
		message: "invalid month value".to_string(),
		fragment,
		label,
		help: Some("the month must be between 01 and 12".to_string()),
		notes: vec![],
		cause: None,
	}
}

pub fn invalid_day(fragment: Fragment) -> Diagnostic {
	let label = Some(format!("invalid day value '{}'", fragment.text()));
	Diagnostic {
		code: "DATE_004".to_string(),
		statement: None,
		message: "invalid day value".to_string(),
		fragment,
		label,
		help: Some("the day must exist in the given month".to_string()),
		notes: vec![
			"April, June, September and November have 30 days".to_string(),
			"February has 29 days in leap years and 28 otherwise".to_string(),
		],
		cause: None,
	}
}

pub fn invalid_date_component_format(fragment: Fragment, component: &str, message: String) -> Diagnostic {
	let help = match component {
		"year" => "the year must be exactly 4 digits",
		"month" => "the month must be exactly 2 digits",
		_ => "the day must be exactly 2 digits",
	};
	Diagnostic {
		code: "DATE_005".to_string(),
		statement: None,
		message: format!("invalid {} format", component),
		fragment,
		label: Some(message),
		help: Some(help.to_string()),
		notes: vec!["only ASCII digits are allowed in date components".to_string()],
		cause: None,
	}
}
