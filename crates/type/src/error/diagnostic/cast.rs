// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::{
	error::diagnostic::Diagnostic,
	fragment::{Fragment, IntoFragment},
	value::r#type::Type,
};

pub fn unsupported_cast(fragment: impl IntoFragment, from_type: Type, to_type: Type) -> Diagnostic {
	let fragment = fragment.into_fragment();
	let label = Some(format!("cannot cast {} of type {} to {}", fragment.text(), from_type, to_type));
	Diagnostic {
		code: "CAST_001".to_string(),
		statement: None,
		message: format!("unsupported cast from {} to {}", from_type, to_type),
		fragment,
		label,
		help: Some("ensure the source and target types are compatible for casting".to_string()),
		notes: vec![format!("{} has no conversion rule to {}", from_type, to_type)],
		cause: None,
	}
}

pub fn type_mismatch(expected: Type, actual: Type) -> Diagnostic {
	Diagnostic {
		code: "TYPE_001".to_string(),
		statement: None,
		message: format!("type mismatch: expected {}, got {}", expected, actual),
		fragment: Fragment::None,
		label: Some(format!("value of type {} used where {} is required", actual, expected)),
		help: None,
		notes: vec!["this indicates a caller passed a value to the descriptor of another kind".to_string()],
		cause: None,
	}
}
