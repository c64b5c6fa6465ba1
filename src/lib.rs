//! A blackjack round simulator that generates labeled outcome datasets.
//!
//! The crate simulates independent rounds across many [`Table`]s and
//! emits one [`RoundRecord`] per player hand, suitable for CSV export via
//! [`output::write_csv`]. A [`Generator`] drives tables until a configured
//! row target is met.
//!
//! # Example
//!
//! ```no_run
//! use bjgen::{Generator, GeneratorOptions};
//!
//! let options = GeneratorOptions::default().with_min_rows(10_000);
//! let mut generator = Generator::new(options, 42).expect("valid options");
//! let records = generator.run().expect("generation succeeds");
//! assert!(records.len() >= 10_000);
//! ```

pub mod card;
pub mod deck;
pub mod error;
pub mod generator;
pub mod hand;
pub mod output;
pub mod player;
pub mod record;
pub mod table;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{DrawError, OptionsError, RoundError};
pub use generator::{Generator, GeneratorOptions};
pub use hand::Hand;
pub use player::{DEALER_ID, Dealer, Participant, Player, STAND_THRESHOLD, SeatState};
pub use record::{RoundRecord, Winner};
pub use table::{MAX_PLAYERS, Table};
