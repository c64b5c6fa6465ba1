//! The shoe: deck construction, shuffling, and drawing.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DrawError;

/// A shoe of one or more interleaved 52-card decks.
///
/// Cards are drawn from a fixed end (the top), so the draw order is
/// deterministic relative to the most recent shuffle.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Undrawn cards; the top of the shoe is the end of the vector.
    cards: Vec<Card>,
    /// Number of 52-card sets a full shoe holds.
    num_sets: u8,
}

impl Deck {
    /// Builds a shoe of `num_sets` full decks and shuffles it.
    ///
    /// The result holds exactly `52 * num_sets` cards, each rank-suit pair
    /// appearing `num_sets` times.
    #[must_use]
    pub fn new(num_sets: u8, rng: &mut impl Rng) -> Self {
        let mut deck = Self {
            cards: build_cards(num_sets),
            num_sets,
        };
        deck.shuffle(rng);
        deck
    }

    /// Creates a shoe with a fixed card order, without shuffling.
    ///
    /// The last card of `cards` is the top of the shoe and is drawn first.
    /// Useful for deterministic replay and tests.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards, num_sets: 1 }
    }

    /// Discards the remaining cards and rebuilds a full shuffled shoe.
    pub fn rebuild(&mut self, rng: &mut impl Rng) {
        self.cards = build_cards(self.num_sets);
        self.shuffle(rng);
    }

    /// Uniformly shuffles the remaining cards in place.
    pub fn shuffle(&mut self, rng: &mut impl Rng) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the top card of the shoe.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::EmptyDeck`] if no cards remain.
    pub fn draw(&mut self) -> Result<Card, DrawError> {
        self.cards.pop().ok_or(DrawError::EmptyDeck)
    }

    /// Returns the number of undrawn cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the shoe is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the number of 52-card sets a full shoe holds.
    #[must_use]
    pub const fn num_sets(&self) -> u8 {
        self.num_sets
    }
}

/// Builds `num_sets` unshuffled 52-card sets.
fn build_cards(num_sets: u8) -> Vec<Card> {
    let mut cards = Vec::with_capacity(num_sets as usize * DECK_SIZE);

    for _ in 0..num_sets {
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
    }

    cards
}
