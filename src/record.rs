//! Per-hand outcome records emitted by a round.

use core::fmt;

/// Outcome label for one player hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Winner {
    /// The player beat the dealer.
    Player,
    /// The dealer beat the player (including player busts).
    Dealer,
    /// The hand tied.
    Draw,
}

impl Winner {
    /// Returns the label used in the output dataset.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Player => "player",
            Self::Dealer => "dealer",
            Self::Draw => "draw",
        }
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One labeled data row: the outcome of a single player hand.
///
/// Field order matches the CSV column order:
/// `TableNum, NumPlayers, PlayerHand, PlayerHandValue, DealerOpenCard,
/// DealerHand, DealerHandValue, Winner`.
///
/// For players that bust, the dealer fields capture the dealer's hand as
/// it stood when the bust happened (before the dealer's own turn); rows
/// settled after the dealer's turn capture the final dealer hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundRecord {
    /// Identity of the table the round was played at.
    pub table_number: u32,
    /// Number of players seated for the round.
    pub num_players: usize,
    /// The player's hand, cards joined by `:`.
    pub player_hand: String,
    /// The player's hand value.
    pub player_hand_value: u8,
    /// The dealer's visible upfront card.
    pub dealer_open_card: String,
    /// The dealer's hand, cards joined by `:`.
    pub dealer_hand: String,
    /// The dealer's hand value.
    pub dealer_hand_value: u8,
    /// The outcome label.
    pub winner: Winner,
}
