// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{cmp::Ordering, collections::HashMap};

use tracing::{debug, instrument, trace};

use super::{CastCost, DateType, TypeDescriptor};
use crate::{
	error::{Error, TypeError},
	fragment::Fragment,
	value::{Type, Value},
};

static DATE: DateType = DateType;

/// Maps attribute kinds to their descriptor.
///
/// A built registry is immutable and can be shared between threads.
#[derive(Clone)]
pub struct TypeRegistry {
	descriptors: HashMap<Type, &'static dyn TypeDescriptor>,
}

/// Collects descriptors before the registry is frozen.
#[derive(Default, Clone)]
pub struct TypeRegistryBuilder {
	descriptors: HashMap<Type, &'static dyn TypeDescriptor>,
}

impl TypeRegistryBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	/// Register `descriptor` for its kind, replacing any earlier one.
	pub fn register(mut self, descriptor: &'static dyn TypeDescriptor) -> Self {
		let kind = descriptor.kind();
		if self.descriptors.insert(kind, descriptor).is_some() {
			debug!(%kind, "replaced type descriptor");
		}
		self
	}

	pub fn build(self) -> TypeRegistry {
		debug!(count = self.descriptors.len(), "type registry built");
		TypeRegistry {
			descriptors: self.descriptors,
		}
	}
}

impl TypeRegistry {
	pub fn builder() -> TypeRegistryBuilder {
		TypeRegistryBuilder::new()
	}

	/// Registry with the descriptors that ship with this crate.
	pub fn standard() -> Self {
		Self::standard_builder().build()
	}

	/// Start from the standard descriptors and let `configurator` add or
	/// replace entries.
	pub fn with_configurator<F>(configurator: F) -> Self
	where
		F: FnOnce(TypeRegistryBuilder) -> TypeRegistryBuilder,
	{
		configurator(Self::standard_builder()).build()
	}

	fn standard_builder() -> TypeRegistryBuilder {
		TypeRegistryBuilder::new().register(&DATE)
	}

	pub fn contains(&self, kind: Type) -> bool {
		self.descriptors.contains_key(&kind)
	}

	pub fn kinds(&self) -> impl Iterator<Item = Type> + '_ {
		self.descriptors.keys().copied()
	}

	pub fn get(&self, kind: Type) -> Result<&'static dyn TypeDescriptor, Error> {
		match self.descriptors.get(&kind) {
			Some(descriptor) => Ok(*descriptor),
			None => {
				trace!(%kind, "no type descriptor");
				Err(TypeError::NoDescriptor {
					kind,
				}
				.into())
			}
		}
	}

	pub fn compare(&self, left: &Value, right: &Value) -> Result<Ordering, Error> {
		let kind = left.get_type();
		if kind != right.get_type() {
			return Err(TypeError::TypeMismatch {
				expected: kind,
				actual: right.get_type(),
			}
			.into());
		}
		self.get(kind)?.compare(left, right)
	}

	pub fn parse(&self, kind: Type, fragment: Fragment) -> Result<Value, Error> {
		self.get(kind)?.parse(fragment)
	}

	pub fn to_text(&self, value: &Value) -> Result<String, Error> {
		self.get(value.get_type())?.to_text(value)
	}

	pub fn cast(&self, value: &Value, target: Type) -> Result<Value, Error> {
		self.get(value.get_type())?.cast_to(value, target)
	}

	/// Cost of converting `from` into `to`. A kind without descriptor can
	/// only "convert" to itself.
	pub fn cast_cost(&self, from: Type, to: Type) -> CastCost {
		match self.descriptors.get(&from) {
			Some(descriptor) => descriptor.cast_cost(to),
			None if from == to => CastCost::NONE,
			None => CastCost::IMPOSSIBLE,
		}
	}

	/// Pick the cheapest viable conversion of `from` among `candidates`.
	/// Candidates with an impossible cost are never chosen; on a tie the
	/// earlier candidate wins.
	#[instrument(name = "type::registry::cheapest_cast", level = "trace", skip(self, candidates))]
	pub fn cheapest_cast(
		&self,
		from: Type,
		candidates: impl IntoIterator<Item = Type>,
	) -> Option<(Type, CastCost)> {
		candidates
			.into_iter()
			.map(|to| (to, self.cast_cost(from, to)))
			.filter(|(_, cost)| cost.is_viable())
			.min_by_key(|(_, cost)| *cost)
	}
}

impl Default for TypeRegistry {
	fn default() -> Self {
		Self::standard()
	}
}

impl std::fmt::Debug for TypeRegistry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let mut kinds: Vec<Type> = self.kinds().collect();
		kinds.sort();
		f.debug_struct("TypeRegistry").field("kinds", &kinds).finish()
	}
}
