// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::ParseError;

/// A Poker card.
///
/// A card is written as a suit letter followed by the rank digits, for example
/// `H1` is the ace of hearts and `C13` is the king of clubs.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Create a card given a rank and suit.
    pub fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        self.rank
    }
}

impl FromStr for Card {
    type Err = ParseError;

    /// Parses a card token, the suit is checked before the rank format and the
    /// rank format before the rank range.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let mut chars = token.chars();
        let suit = chars
            .next()
            .and_then(Suit::from_char)
            .ok_or_else(|| ParseError::InvalidSuit(token.to_string()))?;

        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::InvalidRankFormat(token.to_string()));
        }

        // Saturate so that long digit strings end up out of range.
        let value = digits.bytes().fold(0u32, |acc, b| {
            acc.saturating_mul(10).saturating_add(u32::from(b - b'0'))
        });

        let rank = u8::try_from(value)
            .ok()
            .and_then(Rank::new)
            .ok_or_else(|| ParseError::InvalidRankRange(token.to_string()))?;

        Ok(Card::new(rank, suit))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.suit, self.rank)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.suit, self.rank)
    }
}

/// Card rank, ace is 1 and jack, queen, king are 11, 12, 13.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rank(u8);

impl Rank {
    /// The lowest rank value.
    pub const MIN: u8 = 1;
    /// The highest rank value.
    pub const MAX: u8 = 13;

    /// Ace
    pub const ACE: Rank = Rank(1);
    /// Ten
    pub const TEN: Rank = Rank(10);
    /// Jack
    pub const JACK: Rank = Rank(11);
    /// Queen
    pub const QUEEN: Rank = Rank(12);
    /// King
    pub const KING: Rank = Rank(13);

    /// Creates a rank, returns `None` if the value is not in 1..=13.
    pub const fn new(value: u8) -> Option<Rank> {
        if value >= Self::MIN && value <= Self::MAX {
            Some(Rank(value))
        } else {
            None
        }
    }

    /// The rank numeric value.
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        (Self::MIN..=Self::MAX).map(Rank)
    }
}

impl TryFrom<u8> for Rank {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rank::new(value).ok_or_else(|| format!("rank {value} not in 1..=13"))
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> Self {
        rank.0
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Hearts suit.
    Hearts,
    /// Clubs suit.
    Clubs,
    /// Diamonds suit.
    Diamonds,
    /// Spades suit.
    Spades,
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Hearts, Suit::Clubs, Suit::Diamonds, Suit::Spades].into_iter()
    }

    /// Gets the suit for a suit letter, the match is case sensitive.
    pub fn from_char(c: char) -> Option<Suit> {
        match c {
            'H' => Some(Suit::Hearts),
            'C' => Some(Suit::Clubs),
            'D' => Some(Suit::Diamonds),
            'S' => Some(Suit::Spades),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Hearts => 'H',
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Spades => 'S',
        };

        write!(f, "{suit}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn card_from_str() {
        let c: Card = "H1".parse().unwrap();
        assert_eq!(c, Card::new(Rank::ACE, Suit::Hearts));

        let c: Card = "C13".parse().unwrap();
        assert_eq!(c, Card::new(Rank::KING, Suit::Clubs));

        let c: Card = "D11".parse().unwrap();
        assert_eq!(c.rank(), Rank::JACK);
        assert_eq!(c.suit(), Suit::Diamonds);

        let c: Card = "S12".parse().unwrap();
        assert_eq!(c.rank(), Rank::QUEEN);
        assert_eq!(c.suit(), Suit::Spades);
    }

    #[test]
    fn card_leading_zeros() {
        let c: Card = "H01".parse().unwrap();
        assert_eq!(c, Card::new(Rank::ACE, Suit::Hearts));

        let c: Card = "S000000000000000000000013".parse().unwrap();
        assert_eq!(c.rank(), Rank::KING);
    }

    #[test]
    fn card_invalid_suit() {
        for token in ["A3", "h1", "X13", "13", "", " H1", "♥1"] {
            let err = token.parse::<Card>().unwrap_err();
            assert!(matches!(err, ParseError::InvalidSuit(_)), "{token}");
            assert_eq!(err.to_string(), "Invalid card suit");
        }
    }

    #[test]
    fn card_invalid_rank_format() {
        for token in ["H", "HH3", "H1a", "H+1", "H-1", "H 1", "H1 ", "C1.0", "D١"] {
            let err = token.parse::<Card>().unwrap_err();
            assert!(matches!(err, ParseError::InvalidRankFormat(_)), "{token}");
            assert_eq!(err.to_string(), "Invalid card number");
        }
    }

    #[test]
    fn card_invalid_rank_range() {
        for token in ["H0", "H14", "C00", "D255", "S256", "H99999999999999999999999"] {
            let err = token.parse::<Card>().unwrap_err();
            assert!(matches!(err, ParseError::InvalidRankRange(_)), "{token}");
            assert_eq!(err.to_string(), "Invalid card number");
        }
    }

    #[test]
    fn suit_checked_before_rank() {
        let err = "X99".parse::<Card>().unwrap_err();
        assert_eq!(err, ParseError::InvalidSuit("X99".to_string()));

        let err = "Xx".parse::<Card>().unwrap_err();
        assert_eq!(err, ParseError::InvalidSuit("Xx".to_string()));
    }

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::KING, Suit::Diamonds);
        assert_eq!(c.to_string(), "D13");

        let c = Card::new(Rank::new(5).unwrap(), Suit::Spades);
        assert_eq!(c.to_string(), "S5");

        let c = Card::new(Rank::TEN, Suit::Clubs);
        assert_eq!(format!("{c:?}"), "Card(C10)");

        let c: Card = "H007".parse().unwrap();
        assert_eq!(c.to_string(), "H7");
    }

    #[test]
    fn all_cards() {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<HashSet<_>>();
        assert_eq!(cards.len(), 52);

        for card in cards {
            assert_eq!(card.to_string().parse::<Card>().unwrap(), card);
        }
    }

    #[test]
    fn rank_bounds() {
        assert_eq!(Rank::new(0), None);
        assert_eq!(Rank::new(14), None);
        assert_eq!(Rank::new(1), Some(Rank::ACE));
        assert_eq!(Rank::new(13), Some(Rank::KING));
        assert_eq!(Rank::ranks().count(), 13);
        assert!(Rank::try_from(0).is_err());
        assert_eq!(u8::from(Rank::QUEEN), 12);
    }
}
