// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand statistics used by the classifier rules.
use ahash::AHashMap;

use pokerjudge_cards::{Hand, Rank, Suit};

/// The ranks of the ace high straight.
const ROYAL_RANKS: [Rank; 5] = [Rank::ACE, Rank::TEN, Rank::JACK, Rank::QUEEN, Rank::KING];

/// Rank and suit counts for a hand.
///
/// The statistics are computed once per classification and don't outlive it.
#[derive(Debug, Clone)]
pub struct HandStats {
    rank_counts: AHashMap<Rank, usize>,
    suit_counts: AHashMap<Suit, usize>,
    sorted_ranks: [Rank; Hand::SIZE],
}

impl HandStats {
    /// Computes the statistics for a hand.
    pub fn new(hand: &Hand) -> Self {
        let mut rank_counts = AHashMap::with_capacity(Hand::SIZE);
        let mut suit_counts = AHashMap::with_capacity(Hand::SIZE);
        let mut sorted_ranks = [Rank::ACE; Hand::SIZE];

        for (card, rank) in hand.cards().iter().zip(sorted_ranks.iter_mut()) {
            *rank_counts.entry(card.rank()).or_default() += 1;
            *suit_counts.entry(card.suit()).or_default() += 1;
            *rank = card.rank();
        }

        sorted_ranks.sort_unstable();

        Self {
            rank_counts,
            suit_counts,
            sorted_ranks,
        }
    }

    /// The number of cards for each rank in the hand.
    pub fn rank_counts(&self) -> &AHashMap<Rank, usize> {
        &self.rank_counts
    }

    /// The number of cards for each suit in the hand.
    pub fn suit_counts(&self) -> &AHashMap<Suit, usize> {
        &self.suit_counts
    }

    /// The hand ranks in ascending order.
    pub fn sorted_ranks(&self) -> &[Rank] {
        &self.sorted_ranks
    }

    /// All cards have the same suit.
    pub fn is_flush(&self) -> bool {
        self.suit_counts.values().any(|&count| count == Hand::SIZE)
    }

    /// The ranks are five consecutive values, the ace only counts as 1.
    pub fn is_straight(&self) -> bool {
        self.sorted_ranks
            .windows(2)
            .all(|w| w[1].value() == w[0].value() + 1)
    }

    /// The distinct ranks are exactly ace, ten, jack, queen, king.
    pub fn is_royal_straight(&self) -> bool {
        self.rank_counts.len() == ROYAL_RANKS.len()
            && ROYAL_RANKS.iter().all(|r| self.rank_counts.contains_key(r))
    }

    /// Some rank appears exactly `n` times.
    pub fn has_count_of_rank(&self, n: usize) -> bool {
        self.rank_counts.values().any(|&count| count == n)
    }

    /// The number of ranks that appear exactly twice.
    pub fn pair_count(&self) -> usize {
        self.rank_counts.values().filter(|&&count| count == 2).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(tokens: [&str; 5]) -> HandStats {
        HandStats::new(&Hand::parse(&tokens).unwrap())
    }

    #[test]
    fn counts() {
        let s = stats(["C12", "H12", "S3", "D12", "C6"]);
        assert_eq!(s.rank_counts().len(), 3);
        assert_eq!(s.rank_counts()[&Rank::QUEEN], 3);
        assert_eq!(s.suit_counts()[&Suit::Clubs], 2);
        assert_eq!(s.suit_counts().get(&Suit::Diamonds), Some(&1));
        assert!(s.has_count_of_rank(3));
        assert!(s.has_count_of_rank(1));
        assert!(!s.has_count_of_rank(2));
        assert_eq!(s.pair_count(), 0);

        let values = s.sorted_ranks().iter().map(|r| r.value()).collect::<Vec<_>>();
        assert_eq!(values, [3, 6, 12, 12, 12]);
    }

    #[test]
    fn leading_zeros_count_as_same_rank() {
        let s = stats(["H1", "C01", "S001", "D3", "C6"]);
        assert_eq!(s.rank_counts()[&Rank::ACE], 3);
    }

    #[test]
    fn straight() {
        assert!(stats(["C5", "H7", "S6", "D9", "C8"]).is_straight());
        assert!(stats(["H1", "C2", "S3", "D4", "C5"]).is_straight());
        assert!(!stats(["C11", "H13", "S10", "D12", "C1"]).is_straight());
        assert!(!stats(["C11", "H12", "S13", "D1", "C2"]).is_straight());
        assert!(!stats(["C2", "H3", "S3", "D4", "C5"]).is_straight());
    }

    #[test]
    fn royal_straight() {
        assert!(stats(["C11", "H13", "S10", "D12", "C1"]).is_royal_straight());
        assert!(!stats(["C11", "H13", "S10", "D12", "C9"]).is_royal_straight());
        assert!(!stats(["C11", "H13", "S10", "D13", "C1"]).is_royal_straight());
    }

    #[test]
    fn flush() {
        assert!(stats(["D11", "D2", "D9", "D4", "D6"]).is_flush());
        assert!(!stats(["D11", "D2", "D9", "D4", "S6"]).is_flush());
    }

    #[test]
    fn pairs() {
        assert_eq!(stats(["C2", "H13", "S3", "D13", "D2"]).pair_count(), 2);
        assert_eq!(stats(["C5", "H7", "S11", "D11", "C8"]).pair_count(), 1);
        assert_eq!(stats(["H1", "C1", "S1", "D1", "C6"]).pair_count(), 0);
    }
}
