//! Table orchestration: the per-round state machine.

use core::cmp::Ordering;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::DECK_SIZE;
use crate::deck::Deck;
use crate::error::{DrawError, RoundError};
use crate::player::{Dealer, Participant, Player, SeatState};
use crate::record::{RoundRecord, Winner};

/// Maximum number of players seated at a table.
pub const MAX_PLAYERS: usize = 6;

/// Initial cards dealt to each participant.
const INITIAL_CARDS: usize = 2;

/// The shoe is rebuilt before a deal once fewer cards than this remain.
const RESHUFFLE_THRESHOLD: usize = DECK_SIZE;

/// A blackjack table: one shoe, one dealer, up to six players.
///
/// Tables are fully independent of each other; each owns its shoe, seats,
/// and a seeded RNG, so separate tables may be driven from separate
/// threads without shared state.
///
/// A round runs through five stages: dealing, dealer blackjack check,
/// player turns, dealer turn, settlement. [`Table::play_round`] executes
/// all of them and returns one [`RoundRecord`] per seated player.
pub struct Table {
    table_number: u32,
    /// The shoe. Public so a scripted card order can be installed for
    /// deterministic replay.
    pub deck: Deck,
    dealer: Dealer,
    players: Vec<Player>,
    rng: ChaCha8Rng,
}

impl Table {
    /// Creates a table with a freshly shuffled shoe of `num_sets` decks.
    ///
    /// `table_number` only labels output rows. The seed makes every
    /// shuffle at this table reproducible.
    #[must_use]
    pub fn new(num_sets: u8, table_number: u32, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::new(num_sets, &mut rng);

        Self {
            table_number,
            deck,
            dealer: Dealer::new(),
            players: Vec::new(),
            rng,
        }
    }

    /// Returns the table's label.
    #[must_use]
    pub const fn table_number(&self) -> u32 {
        self.table_number
    }

    /// Plays one full round with `num_players` freshly seated players and
    /// returns one outcome record per player.
    ///
    /// Busted players are recorded as they bust, against the dealer's
    /// hand as it stands at that moment; standing players are settled
    /// only after the dealer's turn, against the dealer's final hand.
    ///
    /// # Errors
    ///
    /// Returns an error if `num_players` is outside `1..=6`, or if the
    /// shoe runs dry mid-round (impossible with at least one deck per
    /// shoe, given the pre-deal rebuild).
    pub fn play_round(&mut self, num_players: usize) -> Result<Vec<RoundRecord>, RoundError> {
        if num_players == 0 {
            return Err(RoundError::NoPlayers);
        }
        if num_players > MAX_PLAYERS {
            return Err(RoundError::TooManyPlayers);
        }

        self.initiate_round(num_players)?;

        let mut records = Vec::with_capacity(num_players);

        // Dealer blackjack ends the round before anyone draws.
        if self.dealer.hand_value() == 21 {
            for i in 0..self.players.len() {
                let winner = if self.players[i].hand_value() == 21 {
                    Winner::Draw
                } else {
                    Winner::Dealer
                };
                records.push(self.record(&self.players[i], winner));
            }
            return Ok(records);
        }

        // Player turns: each player draws to completion before the next.
        for i in 0..self.players.len() {
            while self.players[i].state() == SeatState::Active {
                if !self.players[i].hit_or_stay() {
                    // Standing: stays Active until settlement.
                    break;
                }
                self.players[i].deal_from(&mut self.deck)?;
                if self.players[i].busted() {
                    let row = self.record(&self.players[i], Winner::Dealer);
                    records.push(row);
                    self.players[i].set_state(SeatState::Done);
                }
            }
        }

        // Dealer turn.
        while self.dealer.state() == SeatState::Active {
            if !self.dealer.hit_or_stay() {
                break;
            }
            self.dealer.deal_from(&mut self.deck)?;
            if self.dealer.busted() {
                self.dealer.set_state(SeatState::Done);
            }
        }

        // Settlement for everyone still standing.
        for i in 0..self.players.len() {
            if self.players[i].state() != SeatState::Active {
                continue;
            }
            let winner = if self.dealer.state() == SeatState::Done {
                Winner::Player
            } else {
                match self.players[i].hand_value().cmp(&self.dealer.hand_value()) {
                    Ordering::Greater => Winner::Player,
                    Ordering::Less => Winner::Dealer,
                    Ordering::Equal => Winner::Draw,
                }
            };
            records.push(self.record(&self.players[i], winner));
        }

        Ok(records)
    }

    /// Seats fresh players, resets the dealer, applies the reshuffle
    /// policy, and deals two interleaved passes (all players, then the
    /// dealer, twice). The dealer's first card becomes the open card.
    fn initiate_round(&mut self, num_players: usize) -> Result<(), DrawError> {
        self.players.clear();
        for id in 1..=num_players {
            self.players.push(Player::new(id as u8));
        }
        self.dealer.reset_hand();

        if self.deck.len() < RESHUFFLE_THRESHOLD {
            self.deck.rebuild(&mut self.rng);
        }

        for _ in 0..INITIAL_CARDS {
            for i in 0..self.players.len() {
                self.players[i].deal_from(&mut self.deck)?;
            }
            self.dealer.deal_from(&mut self.deck)?;
        }

        Ok(())
    }

    /// Builds the output row for one player with the given label.
    fn record(&self, player: &Player, winner: Winner) -> RoundRecord {
        RoundRecord {
            table_number: self.table_number,
            num_players: self.players.len(),
            player_hand: player.hand().to_string(),
            player_hand_value: player.hand_value(),
            dealer_open_card: self
                .dealer
                .open_card()
                .map(|card| card.to_string())
                .unwrap_or_default(),
            dealer_hand: self.dealer.hand().to_string(),
            dealer_hand_value: self.dealer.hand_value(),
            winner,
        }
    }
}
