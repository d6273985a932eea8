// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker judge hand classifier.
//!
//! Classifies a five cards hand into one of ten categories, from No Pair to
//! Royal Straight Flush. Parse a [Hand] and use [HandCategory::eval] to get
//! its category:
//!
//! ```
//! # use pokerjudge_eval::*;
//! let hand = Hand::parse(&["H1", "H10", "H11", "H12", "H13"]).unwrap();
//! let category = HandCategory::eval(&hand);
//! assert_eq!(category, HandCategory::RoyalStraightFlush);
//! assert_eq!(category.to_string(), "Royal Straight Flush");
//! ```
//!
//! or [judge] to parse and classify in one step:
//!
//! ```
//! # use pokerjudge_eval::*;
//! assert_eq!(judge(&["D1", "H1", "D3", "H3", "S3"]), Ok(HandCategory::FullHouse));
//! assert_eq!(
//!     judge(&["H1", "H2", "H14", "H4", "H5"]).unwrap_err().to_string(),
//!     "Invalid card number"
//! );
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{HandCategory, HandStats, classify, judge};

// Reexport cards types.
pub use pokerjudge_cards::{Card, Hand, ParseError, Rank, Suit};
