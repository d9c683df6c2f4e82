// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

pub mod diagnostic;

pub use diagnostic::{Diagnostic, IntoDiagnostic};

use crate::{fragment::Fragment, value::r#type::Type};

/// The outcome classes a caller may branch on. Success is `Ok(_)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
	/// Input text or bytes do not satisfy the kind's grammar or invariants.
	MalformedInput,
	/// An operation received operands of the wrong kind.
	TypeMismatch,
	/// No rule exists for the requested operation.
	Unimplemented,
}

impl Display for ErrorKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			ErrorKind::MalformedInput => f.write_str("malformed input"),
			ErrorKind::TypeMismatch => f.write_str("type mismatch"),
			ErrorKind::Unimplemented => f.write_str("unimplemented"),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemporalKind {
	InvalidDateFormat,
	InvalidYear,
	InvalidMonth,
	InvalidDay,
	InvalidDateComponentFormat {
		component: String,
	},
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TypeError {
	#[error("{message}")]
	Temporal {
		kind: TemporalKind,
		message: String,
		fragment: Fragment,
	},

	#[error("invalid {target} encoding: {message}")]
	Encoding {
		target: Type,
		message: String,
	},

	#[error("expected {expected}, got {actual}")]
	TypeMismatch {
		expected: Type,
		actual: Type,
	},

	#[error("unsupported cast from {from} to {to}")]
	UnsupportedCast {
		from: Type,
		to: Type,
		fragment: Fragment,
	},

	#[error("no type descriptor registered for {kind}")]
	NoDescriptor {
		kind: Type,
	},
}

impl TypeError {
	pub fn kind(&self) -> ErrorKind {
		match self {
			TypeError::Temporal {
				..
			}
			| TypeError::Encoding {
				..
			} => ErrorKind::MalformedInput,
			TypeError::TypeMismatch {
				..
			} => ErrorKind::TypeMismatch,
			TypeError::UnsupportedCast {
				..
			}
			| TypeError::NoDescriptor {
				..
			} => ErrorKind::Unimplemented,
		}
	}
}

/// Error returned by every fallible operation of the type layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
	kind: ErrorKind,
	diagnostic: Box<Diagnostic>,
}

impl Error {
	pub fn new(kind: ErrorKind, diagnostic: Diagnostic) -> Self {
		Self {
			kind,
			diagnostic: Box::new(diagnostic),
		}
	}

	pub fn kind(&self) -> ErrorKind {
		self.kind
	}

	pub fn is_malformed_input(&self) -> bool {
		self.kind == ErrorKind::MalformedInput
	}

	pub fn is_type_mismatch(&self) -> bool {
		self.kind == ErrorKind::TypeMismatch
	}

	pub fn is_unimplemented(&self) -> bool {
		self.kind == ErrorKind::Unimplemented
	}

	pub fn diagnostic(&self) -> &Diagnostic {
		&self.diagnostic
	}

	pub fn into_diagnostic(self) -> Diagnostic {
		*self.diagnostic
	}
}

impl Display for Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "{}: {}", self.diagnostic.code, self.diagnostic.message)
	}
}

impl std::error::Error for Error {}

impl From<TypeError> for Error {
	fn from(err: TypeError) -> Self {
		let kind = err.kind();
		Error::new(kind, err.into_diagnostic())
	}
}
