// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Attribute kinds, the values that carry them, and the descriptors that give
//! each kind its comparison, text, and cast rules.

pub mod descriptor;
pub mod error;
pub mod fragment;
pub mod value;

pub use descriptor::{CastCost, DateType, TypeDescriptor, TypeRegistry, TypeRegistryBuilder};
pub use error::{Diagnostic, Error, ErrorKind, IntoDiagnostic, TypeError};
pub use fragment::{Fragment, IntoFragment};
pub use value::{Date, GetType, Type, Value};

pub type Result<T> = std::result::Result<T, Error>;
