//! Hand representation and value computation.

use core::fmt;

use crate::card::{Card, Rank};

/// An ordered collection of cards belonging to one participant.
///
/// A hand is only ever mutated by appending a drawn card; its value is
/// recomputed on every call so it always reflects the current cards.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Appends a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand, in deal order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Counts the cards of the given rank, across all suits.
    #[must_use]
    pub fn count_rank(&self, rank: Rank) -> usize {
        self.cards.iter().filter(|card| card.rank == rank).count()
    }

    /// Computes the hand's blackjack value.
    ///
    /// Card values are summed with Aces at 11, then 10 is subtracted per
    /// Ace while the total exceeds 21. The loop stops as soon as the total
    /// is 21 or less, or no more Aces can be reduced, so it terminates in
    /// at most `count_rank(Ace)` iterations.
    #[must_use]
    pub fn value(&self) -> u8 {
        let mut total: u8 = 0;
        for card in &self.cards {
            total = total.saturating_add(card.value());
        }

        let mut aces = self.count_rank(Rank::Ace);
        while total > 21 && aces > 0 {
            total -= 10;
            aces -= 1;
        }

        total
    }
}

impl fmt::Display for Hand {
    /// Formats the hand as its cards joined by `:`, e.g.
    /// `Ace_Spades:10_Clubs`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(":")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
