// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker judge cards types.
//!
//! This crate defines the types to create cards:
//!
//! ```
//! # use pokerjudge_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::ACE, Suit::Hearts);
//! let kd: Card = "D13".parse().unwrap();
//! assert_eq!(kd.rank(), Rank::KING);
//! assert_eq!(ah.to_string(), "H1");
//! ```
//!
//! and a [Hand] type that validates five cards tokens:
//!
//! ```
//! # use pokerjudge_cards::{Hand, ParseError};
//! let hand = Hand::parse(&["H1", "C2", "S3", "D4", "C5"]).unwrap();
//! assert_eq!(hand.to_string(), "H1 C2 S3 D4 C5");
//!
//! let err = Hand::parse(&["H1", "H2", "A3", "H4", "H5"]).unwrap_err();
//! assert!(matches!(err, ParseError::InvalidSuit(_)));
//! assert_eq!(err.to_string(), "Invalid card suit");
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod cards;
pub use cards::{Card, Rank, Suit};

mod hand;
pub use hand::{Hand, ParseError};
