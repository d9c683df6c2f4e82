// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::{
	error::{TemporalKind, TypeError},
	fragment::Fragment,
};

pub mod cast;
pub mod temporal;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
	pub code: String,
	pub statement: Option<String>,
	pub message: String,
	pub fragment: Fragment,
	pub label: Option<String>,
	pub help: Option<String>,
	pub notes: Vec<String>,
	pub cause: Option<Box<Diagnostic>>,
}

impl Display for Diagnostic {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.code)
	}
}

pub trait IntoDiagnostic {
	fn into_diagnostic(self) -> Diagnostic;
}

impl IntoDiagnostic for TypeError {
	fn into_diagnostic(self) -> Diagnostic {
		match self {
			TypeError::Temporal {
				kind,
				message,
				fragment,
			} => match kind {
				TemporalKind::InvalidDateFormat => temporal::invalid_date_format(fragment),
				TemporalKind::InvalidYear => temporal::invalid_year(fragment),
				TemporalKind::InvalidMonth => temporal::invalid_month(fragment),
				TemporalKind::InvalidDay => temporal::invalid_day(fragment),
				TemporalKind::InvalidDateComponentFormat {
					component,
				} => temporal::invalid_date_component_format(fragment, &component, message),
			},

			TypeError::Encoding {
				target,
				message,
			} => Diagnostic {
				code: "ENCODING_001".to_string(),
				statement: None,
				message: format!("invalid {} encoding", target),
				fragment: Fragment::None,
				label: Some(message),
				help: Some("the bytes were not produced by the value encoder, or were corrupted".to_string()),
				notes: vec![],
				cause: None,
			},

			TypeError::TypeMismatch {
				expected,
				actual,
			} => cast::type_mismatch(expected, actual),

			TypeError::UnsupportedCast {
				from,
				to,
				fragment,
			} => cast::unsupported_cast(fragment, from, to),

			TypeError::NoDescriptor {
				kind,
			} => Diagnostic {
				code: "TYPE_002".to_string(),
				statement: None,
				message: format!("no type descriptor registered for {}", kind),
				fragment: Fragment::None,
				label: None,
				help: Some(format!("register a descriptor for {} with the type registry", kind)),
				notes: vec![],
				cause: None,
			},
		}
	}
}
