// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards hand classifier.
//!
//! The classifier computes the hand [HandStats] once and then checks the
//! category rules in a fixed precedence order, the first rule that matches
//! gives the hand [HandCategory]. Hands that match no rule are No Pair.

mod category;
pub use category::{HandCategory, classify, judge};

mod stats;
pub use stats::HandStats;
