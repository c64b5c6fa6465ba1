//! Error types for shoe, round, and configuration failures.

use thiserror::Error;

/// Errors that can occur when drawing from the shoe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// Draw requested on a depleted shoe.
    #[error("draw requested on an empty shoe")]
    EmptyDeck,
}

/// Errors that can occur while playing a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// No players were seated at the table.
    #[error("no players seated at the table")]
    NoPlayers,
    /// More players requested than the table seats.
    #[error("a table seats at most 6 players")]
    TooManyPlayers,
    /// The shoe ran out of cards mid-round.
    #[error(transparent)]
    EmptyShoe(#[from] DrawError),
}

/// Errors raised by malformed generator configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OptionsError {
    /// The shoe must hold at least one deck.
    #[error("number of decks per shoe must be at least 1")]
    ZeroDecks,
    /// At least one table is required.
    #[error("number of tables must be at least 1")]
    ZeroTables,
    /// The row target must be positive.
    #[error("minimum row count must be at least 1")]
    ZeroRows,
}
