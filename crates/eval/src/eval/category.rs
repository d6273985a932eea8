// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand categories and the classification rules.
use serde::{Deserialize, Serialize};
use std::fmt;

use pokerjudge_cards::{Hand, ParseError};

use super::HandStats;

/// A five cards hand category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandCategory {
    /// No pair.
    NoPair,
    /// One pair.
    OnePair,
    /// Two pair.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Straight.
    Straight,
    /// Flush.
    Flush,
    /// Full house.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Straight flush.
    StraightFlush,
    /// Royal straight flush.
    RoyalStraightFlush,
}

/// A classification rule predicate.
type Rule = fn(&HandStats) -> bool;

/// The classification rules in precedence order, the first match wins.
const RULES: [(HandCategory, Rule); 9] = [
    (HandCategory::RoyalStraightFlush, |s| {
        s.is_royal_straight() && s.is_flush()
    }),
    (HandCategory::StraightFlush, |s| s.is_straight() && s.is_flush()),
    (HandCategory::Straight, |s| {
        s.is_straight() || s.is_royal_straight()
    }),
    (HandCategory::FullHouse, |s| {
        s.has_count_of_rank(3) && s.has_count_of_rank(2)
    }),
    (HandCategory::Flush, |s| s.is_flush()),
    (HandCategory::FourOfAKind, |s| s.has_count_of_rank(4)),
    (HandCategory::ThreeOfAKind, |s| s.has_count_of_rank(3)),
    (HandCategory::TwoPair, |s| s.pair_count() == 2),
    (HandCategory::OnePair, |s| s.pair_count() == 1),
];

impl HandCategory {
    /// Classifies a hand.
    pub fn eval(hand: &Hand) -> Self {
        let stats = HandStats::new(hand);
        RULES
            .iter()
            .find(|(_, rule)| rule(&stats))
            .map(|(category, _)| *category)
            .unwrap_or(HandCategory::NoPair)
    }

    /// The category label.
    pub fn label(&self) -> &'static str {
        match self {
            HandCategory::NoPair => "No Pair",
            HandCategory::OnePair => "One Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::RoyalStraightFlush => "Royal Straight Flush",
        }
    }

    /// Returns all categories.
    pub fn categories() -> impl DoubleEndedIterator<Item = HandCategory> {
        use HandCategory::*;
        [
            NoPair,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
            RoyalStraightFlush,
        ]
        .into_iter()
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Classifies a hand, same as [HandCategory::eval].
pub fn classify(hand: &Hand) -> HandCategory {
    HandCategory::eval(hand)
}

/// Parses five cards tokens and classifies the hand.
pub fn judge<S: AsRef<str>>(tokens: &[S]) -> Result<HandCategory, ParseError> {
    Hand::parse(tokens).map(|hand| classify(&hand))
}
