// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Self-describing binary encoding for [`Value`].
//!
//! The first byte is the kind tag ([`Type::to_u8`]), followed by the payload:
//!
//! * `Undefined`: nothing.
//! * `Boolean`: `0x00` for `false`, `0x01` for `true`.
//! * `Int4`, `Int8`: big-endian binary, sign bit flipped.
//! * `Date`: the encoded `YYYYMMDD` integer as an `Int8`.
//! * `Utf8`: the raw UTF-8 bytes up to the end of the buffer.
//!
//! For two values of the same kind, comparing the encodings byte-wise gives
//! the same order as comparing the values.

use crate::{
	error::{Error, TypeError},
	value::{Date, Type, Value},
};

impl Value {
	pub fn encode(&self) -> Vec<u8> {
		let mut out = Vec::with_capacity(9);
		out.push(self.get_type().to_u8());
		match self {
			Value::Undefined => {}
			Value::Boolean(v) => out.push(*v as u8),
			Value::Int4(v) => out.extend_from_slice(&encode_i32(*v)),
			Value::Int8(v) => out.extend_from_slice(&encode_i64(*v)),
			Value::Utf8(v) => out.extend_from_slice(v.as_bytes()),
			Value::Date(v) => out.extend_from_slice(&encode_i64(v.encoded())),
		}
		out
	}

	pub fn decode(bytes: &[u8]) -> Result<Value, Error> {
		let Some((&tag, payload)) = bytes.split_first() else {
			return Err(invalid(Type::Undefined, "empty input"));
		};
		let Some(ty) = Type::from_u8(tag) else {
			return Err(invalid(Type::Undefined, format!("unknown type tag 0x{:02x}", tag)));
		};

		match ty {
			Type::Undefined => {
				expect_len(ty, payload, 0)?;
				Ok(Value::Undefined)
			}
			Type::Boolean => match payload {
				[0x00] => Ok(Value::Boolean(false)),
				[0x01] => Ok(Value::Boolean(true)),
				_ => Err(invalid(ty, "expected a single 0x00 or 0x01 byte")),
			},
			Type::Int4 => {
				let bytes: [u8; 4] = fixed(ty, payload)?;
				Ok(Value::Int4(decode_i32(bytes)))
			}
			Type::Int8 => {
				let bytes: [u8; 8] = fixed(ty, payload)?;
				Ok(Value::Int8(decode_i64(bytes)))
			}
			Type::Utf8 => String::from_utf8(payload.to_vec())
				.map(Value::Utf8)
				.map_err(|err| invalid(ty, err.to_string())),
			Type::Date => {
				let encoded = decode_i64(fixed(ty, payload)?);
				Date::from_encoded(encoded)
					.map(Value::Date)
					.ok_or_else(|| invalid(ty, format!("{} is not a valid date", encoded)))
			}
		}
	}
}

fn encode_i32(v: i32) -> [u8; 4] {
	let mut bytes = v.to_be_bytes();
	bytes[0] ^= 1 << 7; // flip sign bit
	bytes
}

fn decode_i32(mut bytes: [u8; 4]) -> i32 {
	bytes[0] ^= 1 << 7;
	i32::from_be_bytes(bytes)
}

fn encode_i64(v: i64) -> [u8; 8] {
	let mut bytes = v.to_be_bytes();
	bytes[0] ^= 1 << 7; // flip sign bit
	bytes
}

fn decode_i64(mut bytes: [u8; 8]) -> i64 {
	bytes[0] ^= 1 << 7;
	i64::from_be_bytes(bytes)
}

fn fixed<const N: usize>(ty: Type, payload: &[u8]) -> Result<[u8; N], Error> {
	payload.try_into().map_err(|_| length_mismatch(ty, payload, N))
}

fn expect_len(ty: Type, payload: &[u8], len: usize) -> Result<(), Error> {
	if payload.len() == len {
		Ok(())
	} else {
		Err(length_mismatch(ty, payload, len))
	}
}

fn length_mismatch(ty: Type, payload: &[u8], expected: usize) -> Error {
	invalid(ty, format!("expected {} payload bytes, got {}", expected, payload.len()))
}

fn invalid(target: Type, message: impl Into<String>) -> Error {
	TypeError::Encoding {
		target,
		message: message.into(),
	}
	.into()
}

#[cfg(test)]
pub mod tests {
	use super::*;
	use crate::error::ErrorKind;

	#[test]
	fn test_roundtrip() {
		let values = [
			Value::Undefined,
			Value::bool(true),
			Value::bool(false),
			Value::int4(i32::MIN),
			Value::int4(-1),
			Value::int4(i32::MAX),
			Value::int8(i64::MIN),
			Value::int8(0i64),
			Value::utf8(""),
			Value::utf8("strata ✓"),
			Value::date(Date::new(0, 1, 1).unwrap()),
			Value::date(Date::new(2024, 2, 29).unwrap()),
			Value::date(Date::new(9999, 12, 31).unwrap()),
		];
		for value in values {
			assert_eq!(Value::decode(&value.encode()).unwrap(), value);
		}
	}

	#[test]
	fn test_date_layout() {
		let encoded = Value::date(Date::new(2024, 3, 7).unwrap()).encode();
		assert_eq!(encoded[0], Type::Date.to_u8());
		assert_eq!(&encoded[1..], &encode_i64(20240307));
	}

	#[test]
	fn test_order_preserving() {
		let ints = [i64::MIN, -1000, -1, 0, 1, 1000, i64::MAX];
		for pair in ints.windows(2) {
			assert!(Value::int8(pair[0]).encode() < Value::int8(pair[1]).encode());
		}

		let dates = [(1999, 12, 31), (2000, 1, 1), (2000, 2, 29), (2024, 1, 1)];
		for pair in dates.windows(2) {
			let (a, b) = (pair[0], pair[1]);
			let a = Value::date(Date::new(a.0, a.1, a.2).unwrap()).encode();
			let b = Value::date(Date::new(b.0, b.1, b.2).unwrap()).encode();
			assert!(a < b);
		}
	}

	#[test]
	fn test_rejects_corrupt_date() {
		let mut bytes = vec![Type::Date.to_u8()];
		bytes.extend_from_slice(&encode_i64(20230229));
		let err = Value::decode(&bytes).unwrap_err();
		assert_eq!(err.kind(), ErrorKind::MalformedInput);
		assert_eq!(err.diagnostic().code, "ENCODING_001");

		let mut bytes = vec![Type::Date.to_u8()];
		bytes.extend_from_slice(&encode_i64(((1i64 << 32) + 2024) * 10000 + 307));
		assert!(Value::decode(&bytes).unwrap_err().is_malformed_input());

		let mut bytes = vec![Type::Date.to_u8()];
		bytes.extend_from_slice(&encode_i64(i64::MAX));
		assert!(Value::decode(&bytes).unwrap_err().is_malformed_input());
	}

	#[test]
	fn test_rejects_bad_framing() {
		assert!(Value::decode(&[]).unwrap_err().is_malformed_input());
		assert!(Value::decode(&[0x7F]).unwrap_err().is_malformed_input());
		assert!(Value::decode(&[Type::Date.to_u8(), 0x80]).unwrap_err().is_malformed_input());
		assert!(Value::decode(&[Type::Boolean.to_u8(), 0x02]).unwrap_err().is_malformed_input());
		assert!(Value::decode(&[Type::Undefined.to_u8(), 0x00]).unwrap_err().is_malformed_input());
		assert!(Value::decode(&[Type::Utf8.to_u8(), 0xFF, 0xFE]).unwrap_err().is_malformed_input());
	}
}
