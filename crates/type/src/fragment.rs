// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Line of a statement, 1-based.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StatementLine(pub u32);

/// Column of a statement, 0-based.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StatementColumn(pub u32);

/// A piece of source text attached to values and diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Fragment {
	/// No fragment information available
	None,

	/// Fragment from a statement with position information
	Statement {
		text: String,
		line: StatementLine,
		column: StatementColumn,
	},

	/// Fragment from internal/runtime code
	Internal {
		text: String,
	},
}

impl Fragment {
	pub fn statement(text: impl Into<String>, line: u32, column: u32) -> Self {
		Fragment::Statement {
			text: text.into(),
			line: StatementLine(line),
			column: StatementColumn(column),
		}
	}

	pub fn internal(text: impl Into<String>) -> Self {
		Fragment::Internal {
			text: text.into(),
		}
	}

	pub fn text(&self) -> &str {
		match self {
			Fragment::None => "",
			Fragment::Statement {
				text,
				..
			}
			| Fragment::Internal {
				text,
			} => text,
		}
	}

	pub fn line(&self) -> StatementLine {
		match self {
			Fragment::Statement {
				line,
				..
			} => *line,
			_ => StatementLine(1),
		}
	}

	pub fn column(&self) -> StatementColumn {
		match self {
			Fragment::Statement {
				column,
				..
			} => *column,
			_ => StatementColumn(0),
		}
	}

	/// Narrow the fragment to `length` bytes starting at `offset`, keeping
	/// the column in sync. Out-of-range requests are clamped.
	pub fn sub_fragment(&self, offset: usize, length: usize) -> Fragment {
		let text = self.text();
		let start = offset.min(text.len());
		let end = start.saturating_add(length).min(text.len());
		let sub = text.get(start..end).unwrap_or(text).to_string();

		match self {
			Fragment::None => Fragment::None,
			Fragment::Statement {
				line,
				column,
				..
			} => Fragment::Statement {
				text: sub,
				line: *line,
				column: StatementColumn(column.0 + start as u32),
			},
			Fragment::Internal {
				..
			} => Fragment::Internal {
				text: sub,
			},
		}
	}
}

impl Default for Fragment {
	fn default() -> Self {
		Fragment::None
	}
}

impl Display for Fragment {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.text())
	}
}

/// Conversion into an owned [`Fragment`].
pub trait IntoFragment {
	fn into_fragment(self) -> Fragment;
}

impl IntoFragment for Fragment {
	fn into_fragment(self) -> Fragment {
		self
	}
}

impl IntoFragment for &Fragment {
	fn into_fragment(self) -> Fragment {
		self.clone()
	}
}

impl IntoFragment for &str {
	fn into_fragment(self) -> Fragment {
		Fragment::internal(self)
	}
}

impl IntoFragment for String {
	fn into_fragment(self) -> Fragment {
		Fragment::internal(self)
	}
}

#[cfg(test)]
pub mod tests {
	use super::*;

	#[test]
	fn test_sub_fragment_tracks_column() {
		let fragment = Fragment::statement("2024-13-01", 3, 10);
		let month = fragment.sub_fragment(5, 2);
		assert_eq!(month.text(), "13");
		assert_eq!(month.line(), StatementLine(3));
		assert_eq!(month.column(), StatementColumn(15));
	}

	#[test]
	fn test_sub_fragment_clamps() {
		let fragment = Fragment::internal("abc");
		assert_eq!(fragment.sub_fragment(1, 100).text(), "bc");
		assert_eq!(fragment.sub_fragment(10, 2).text(), "");
	}

	#[test]
	fn test_none_fragment() {
		let fragment = Fragment::None;
		assert_eq!(fragment.text(), "");
		assert_eq!(fragment.sub_fragment(0, 4), Fragment::None);
	}
}
