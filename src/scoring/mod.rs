// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how candidates get their numbers.
//!
//! The score is a tier, not a sum. The first rule that matches a field decides
//! its score, and a candidate's score is the better of its name and
//! description. Ranking then orders by that score and keeps fetch order for
//! ties.

mod core;
pub mod ranking;

pub use self::core::*;
