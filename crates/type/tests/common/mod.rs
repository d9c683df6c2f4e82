// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::sync::Once;

use strata_type::{Date, Value};
use tracing_subscriber::EnvFilter;

static TRACING: Once = Once::new();

/// Send log output to the test harness. Filter with `RUST_LOG`.
pub fn init_tracing() {
	TRACING.call_once(|| {
		let _ = tracing_subscriber::fmt()
			.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
			.with_test_writer()
			.try_init();
	});
}

/// Every calendar day of the given years, in order.
#[allow(dead_code)]
pub fn every_day(years: impl IntoIterator<Item = i32>) -> Vec<Value> {
	let mut result = Vec::new();
	for year in years {
		for month in 1..=12 {
			for day in 1..=Date::days_in_month(year, month) {
				result.push(Value::date(Date::new(year, month, day).unwrap()));
			}
		}
	}
	result
}
