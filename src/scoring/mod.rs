// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! A record's score is built from the best value each metric reaches on any of
//! its fields, then accepted records are sorted ascending, ties in pool order.

mod core;
pub mod ranking;

pub use self::core::*;
