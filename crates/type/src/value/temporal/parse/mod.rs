// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

mod date;

pub use date::parse_date;
