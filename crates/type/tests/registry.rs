// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

mod common;

use std::{cmp::Ordering, thread};

use common::init_tracing;
use strata_type::{
	CastCost, Date, ErrorKind, Fragment, Result, Type, TypeDescriptor, TypeError, TypeRegistry, Value,
};

/// A descriptor defined outside the crate, the way an extension would.
struct Int4Type;

impl TypeDescriptor for Int4Type {
	fn kind(&self) -> Type {
		Type::Int4
	}

	fn compare(&self, left: &Value, right: &Value) -> Result<Ordering> {
		Ok(left.as_int4()?.cmp(&right.as_int4()?))
	}

	fn parse(&self, fragment: Fragment) -> Result<Value> {
		fragment.text().parse::<i32>().map(Value::Int4).map_err(|err| {
			TypeError::Encoding {
				target: Type::Int4,
				message: err.to_string(),
			}
			.into()
		})
	}

	fn to_text(&self, value: &Value) -> Result<String> {
		Ok(value.as_int4()?.to_string())
	}

	fn cast_to(&self, value: &Value, target: Type) -> Result<Value> {
		let v = value.as_int4()?;
		match target {
			Type::Int4 => Ok(Value::Int4(v)),
			Type::Int8 => Ok(Value::Int8(v as i64)),
			_ => Err(TypeError::UnsupportedCast {
				from: Type::Int4,
				to: target,
				fragment: Fragment::None,
			}
			.into()),
		}
	}

	fn cast_cost(&self, target: Type) -> CastCost {
		match target {
			Type::Int4 => CastCost::NONE,
			Type::Int8 => CastCost::new(1),
			Type::Utf8 => CastCost::new(10),
			_ => CastCost::IMPOSSIBLE,
		}
	}
}

static INT4: Int4Type = Int4Type;

fn registry() -> TypeRegistry {
	TypeRegistry::with_configurator(|builder| builder.register(&INT4))
}

#[test]
fn test_configurator_adds_to_standard() {
	init_tracing();
	let registry = registry();
	assert!(registry.contains(Type::Date));
	assert!(registry.contains(Type::Int4));
	assert!(!registry.contains(Type::Utf8));
}

#[test]
fn test_dispatch_through_registry() {
	init_tracing();
	let registry = registry();

	let date = registry.parse(Type::Date, Fragment::internal("2024-03-07")).unwrap();
	assert_eq!(registry.to_text(&date).unwrap(), "2024-03-07");

	let int = registry.parse(Type::Int4, Fragment::internal("42")).unwrap();
	assert_eq!(registry.to_text(&int).unwrap(), "42");
	assert_eq!(registry.cast(&int, Type::Int8).unwrap(), Value::Int8(42));

	assert_eq!(registry.compare(&int, &Value::int4(41)).unwrap(), Ordering::Greater);
}

#[test]
fn test_unregistered_kind() {
	let registry = registry();
	let err = registry.to_text(&Value::utf8("x")).unwrap_err();
	assert_eq!(err.kind(), ErrorKind::Unimplemented);

	let err = registry.parse(Type::Boolean, Fragment::internal("true")).unwrap_err();
	assert_eq!(err.kind(), ErrorKind::Unimplemented);
}

#[test]
fn test_undefined_has_no_order() {
	let registry = registry();
	let err = registry.compare(&Value::Undefined, &Value::Undefined).unwrap_err();
	assert_eq!(err.kind(), ErrorKind::Unimplemented);
}

#[test]
fn test_cross_kind_compare() {
	let registry = registry();
	let date = Value::date(Date::new(2024, 1, 1).unwrap());
	let err = registry.compare(&Value::int4(1), &date).unwrap_err();
	assert_eq!(err.kind(), ErrorKind::TypeMismatch);
}

#[test]
fn test_cheapest_cast_prefers_lowest_cost() {
	let registry = registry();
	assert_eq!(
		registry.cheapest_cast(Type::Int4, [Type::Utf8, Type::Int8, Type::Date]),
		Some((Type::Int8, CastCost::new(1)))
	);
	assert_eq!(registry.cheapest_cast(Type::Int4, [Type::Date, Type::Boolean]), None);
	assert_eq!(registry.cheapest_cast(Type::Date, [Type::Int4, Type::Int8, Type::Utf8]), None);
	assert_eq!(registry.cheapest_cast(Type::Date, Vec::<Type>::new()), None);
}

#[test]
fn test_replacing_a_descriptor() {
	struct StrictDate;

	impl TypeDescriptor for StrictDate {
		fn kind(&self) -> Type {
			Type::Date
		}

		fn compare(&self, left: &Value, right: &Value) -> Result<Ordering> {
			Ok(left.as_date()?.cmp(right.as_date()?))
		}

		fn parse(&self, fragment: Fragment) -> Result<Value> {
			Err(TypeError::UnsupportedCast {
				from: Type::Utf8,
				to: Type::Date,
				fragment,
			}
			.into())
		}

		fn to_text(&self, value: &Value) -> Result<String> {
			Ok(value.as_date()?.to_string())
		}

		fn cast_to(&self, value: &Value, _target: Type) -> Result<Value> {
			Ok(value.clone())
		}

		fn cast_cost(&self, _target: Type) -> CastCost {
			CastCost::IMPOSSIBLE
		}
	}

	static STRICT: StrictDate = StrictDate;

	let registry = TypeRegistry::with_configurator(|builder| builder.register(&STRICT));
	let err = registry.parse(Type::Date, Fragment::internal("2024-01-01")).unwrap_err();
	assert_eq!(err.kind(), ErrorKind::Unimplemented);
}

#[test]
fn test_shared_across_threads() {
	init_tracing();
	let registry = registry();

	thread::scope(|scope| {
		for year in [1999, 2000, 2023, 2024] {
			let registry = &registry;
			scope.spawn(move || {
				let text = format!("{:04}-02-28", year);
				let value = registry.parse(Type::Date, Fragment::internal(text.as_str())).unwrap();
				assert_eq!(registry.to_text(&value).unwrap(), text);

				let next = registry.parse(Type::Date, Fragment::internal(format!("{:04}-03-01", year))).unwrap();
				assert_eq!(registry.compare(&value, &next).unwrap(), Ordering::Less);
			});
		}
	});
}

#[test]
fn test_values_move_between_threads() {
	let value = Value::date(Date::new(2024, 3, 7).unwrap());
	let handle = thread::spawn(move || value.encode());
	let bytes = handle.join().unwrap();
	assert_eq!(Value::decode(&bytes).unwrap().to_string(), "2024-03-07");
}
