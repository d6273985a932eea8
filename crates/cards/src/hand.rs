// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A validated five cards hand.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

use crate::{Card, Rank, Suit};

/// Hand validation errors.
///
/// The error messages are part of the public contract, both rank errors use
/// the same message. The offending token or count is kept for callers that
/// need more context.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The hand doesn't have five tokens.
    #[error("Invalid number of cards")]
    InvalidHandSize(usize),
    /// The token doesn't start with one of `H`, `C`, `D`, `S`.
    #[error("Invalid card suit")]
    InvalidSuit(String),
    /// The token rank is empty or has non digit characters.
    #[error("Invalid card number")]
    InvalidRankFormat(String),
    /// The token rank digits are not in 1..=13.
    #[error("Invalid card number")]
    InvalidRankRange(String),
}

/// A Poker hand of five cards.
///
/// The cards are kept in the order they were given, classification doesn't
/// depend on this order. Duplicate cards are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hand {
    cards: [Card; Hand::SIZE],
}

impl Hand {
    /// The number of cards in a hand.
    pub const SIZE: usize = 5;

    /// Creates a hand from five cards.
    pub fn new(cards: [Card; Hand::SIZE]) -> Self {
        Self { cards }
    }

    /// Parses and validates five cards tokens.
    ///
    /// The number of tokens is checked first, then each token is parsed in
    /// order and parsing stops at the first invalid token.
    pub fn parse<S: AsRef<str>>(tokens: &[S]) -> Result<Self, ParseError> {
        if tokens.len() != Self::SIZE {
            return Err(ParseError::InvalidHandSize(tokens.len()));
        }

        let mut cards = [Card::new(Rank::ACE, Suit::Hearts); Self::SIZE];
        for (card, token) in cards.iter_mut().zip(tokens) {
            *card = token.as_ref().parse()?;
        }

        Ok(Self { cards })
    }

    /// The hand cards in input order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl FromStr for Hand {
    type Err = ParseError;

    /// Parses a whitespace separated list of tokens.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens = s.split_whitespace().collect::<Vec<_>>();
        Self::parse(&tokens)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, card) in self.cards.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }

            write!(f, "{card}")?;
        }

        Ok(())
    }
}
