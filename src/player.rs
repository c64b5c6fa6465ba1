//! Seated participants and their turn logic.

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DrawError;
use crate::hand::Hand;

/// Seat id reserved for the dealer.
pub const DEALER_ID: u8 = 0;

/// A participant hits while their hand value is below this threshold.
///
/// The same stand-on-17 rule applies to players and the dealer alike.
pub const STAND_THRESHOLD: u8 = 17;

/// Per-round state of a seat.
///
/// A seat is `Done` once its owner has busted or the round has resolved
/// for them; the only way back to `Active` is a hand reset at the start of
/// the next round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatState {
    /// Still deciding (or standing, awaiting settlement).
    Active,
    /// Out of the round.
    Done,
}

/// Shared capability of anyone holding a hand at the table.
///
/// [`Player`] and [`Dealer`] are two independent variants implementing
/// this trait; the dealer composes an extra open card rather than
/// inheriting from the player.
pub trait Participant {
    /// Returns the participant's hand.
    fn hand(&self) -> &Hand;

    /// Returns the participant's hand mutably.
    fn hand_mut(&mut self) -> &mut Hand;

    /// Returns the seat state.
    fn state(&self) -> SeatState;

    /// Sets the seat state.
    fn set_state(&mut self, state: SeatState);

    /// Draws exactly one card from the shoe into the participant's hand.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::EmptyDeck`] if the shoe is depleted.
    fn deal_from(&mut self, deck: &mut Deck) -> Result<(), DrawError> {
        let card = deck.draw()?;
        self.hand_mut().add_card(card);
        Ok(())
    }

    /// Returns the current hand value.
    fn hand_value(&self) -> u8 {
        self.hand().value()
    }

    /// Decides whether to hit: true while the hand value is below 17.
    fn hit_or_stay(&self) -> bool {
        self.hand_value() < STAND_THRESHOLD
    }

    /// Returns whether the hand value exceeds 21.
    fn busted(&self) -> bool {
        self.hand_value() > 21
    }

    /// Replaces the hand with an empty one and reactivates the seat.
    fn reset_hand(&mut self) {
        *self.hand_mut() = Hand::new();
        self.set_state(SeatState::Active);
    }
}

/// A seated player.
#[derive(Debug, Clone)]
pub struct Player {
    id: u8,
    state: SeatState,
    hand: Hand,
}

impl Player {
    /// Creates a player with the given seat id (1-based; 0 is the dealer).
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self {
            id,
            state: SeatState::Active,
            hand: Hand::new(),
        }
    }

    /// Returns the player's seat id.
    #[must_use]
    pub const fn id(&self) -> u8 {
        self.id
    }
}

impl Participant for Player {
    fn hand(&self) -> &Hand {
        &self.hand
    }

    fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    fn state(&self) -> SeatState {
        self.state
    }

    fn set_state(&mut self, state: SeatState) {
        self.state = state;
    }
}

/// The dealer.
///
/// Holds the same turn logic as a player, plus the round's open card: the
/// first card dealt to the dealer, retained for reporting even after more
/// cards are drawn.
#[derive(Debug, Clone)]
pub struct Dealer {
    state: SeatState,
    hand: Hand,
    open_card: Option<Card>,
}

impl Dealer {
    /// Creates a dealer with an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: SeatState::Active,
            hand: Hand::new(),
            open_card: None,
        }
    }

    /// Returns the dealer's visible upfront card, if dealt yet.
    #[must_use]
    pub const fn open_card(&self) -> Option<Card> {
        self.open_card
    }
}

impl Default for Dealer {
    fn default() -> Self {
        Self::new()
    }
}

impl Participant for Dealer {
    fn hand(&self) -> &Hand {
        &self.hand
    }

    fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    fn state(&self) -> SeatState {
        self.state
    }

    fn set_state(&mut self, state: SeatState) {
        self.state = state;
    }

    /// Draws one card; the first card of the round becomes the open card.
    fn deal_from(&mut self, deck: &mut Deck) -> Result<(), DrawError> {
        let card = deck.draw()?;
        if self.open_card.is_none() {
            self.open_card = Some(card);
        }
        self.hand.add_card(card);
        Ok(())
    }

    /// Resets the hand and also clears the open card.
    fn reset_hand(&mut self) {
        self.hand = Hand::new();
        self.open_card = None;
        self.state = SeatState::Active;
    }
}
