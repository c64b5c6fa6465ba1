//! The round driver: plays tables until a row target is met.

use rand::{Rng, SeedableRng};
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::error::{OptionsError, RoundError};
use crate::record::RoundRecord;
use crate::table::{MAX_PLAYERS, Table};

/// Configuration for a dataset generation run.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjgen::GeneratorOptions;
///
/// let options = GeneratorOptions::default()
///     .with_decks(8)
///     .with_tables(50)
///     .with_min_rows(100_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Number of 52-card decks per shoe.
    pub decks: u8,
    /// Number of tables swept per pass.
    pub tables: u32,
    /// Minimum total number of rows to generate.
    pub min_rows: usize,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            decks: 6,
            tables: 10,
            min_rows: 1000,
        }
    }
}

impl GeneratorOptions {
    /// Sets the number of decks per shoe.
    ///
    /// # Example
    ///
    /// ```
    /// use bjgen::GeneratorOptions;
    ///
    /// let options = GeneratorOptions::default().with_decks(4);
    /// assert_eq!(options.decks, 4);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the number of tables.
    ///
    /// # Example
    ///
    /// ```
    /// use bjgen::GeneratorOptions;
    ///
    /// let options = GeneratorOptions::default().with_tables(25);
    /// assert_eq!(options.tables, 25);
    /// ```
    #[must_use]
    pub const fn with_tables(mut self, tables: u32) -> Self {
        self.tables = tables;
        self
    }

    /// Sets the minimum total row count.
    ///
    /// # Example
    ///
    /// ```
    /// use bjgen::GeneratorOptions;
    ///
    /// let options = GeneratorOptions::default().with_min_rows(5000);
    /// assert_eq!(options.min_rows, 5000);
    /// ```
    #[must_use]
    pub const fn with_min_rows(mut self, min_rows: usize) -> Self {
        self.min_rows = min_rows;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any of decks, tables, or the row target is
    /// zero.
    pub const fn validate(&self) -> Result<(), OptionsError> {
        if self.decks == 0 {
            return Err(OptionsError::ZeroDecks);
        }
        if self.tables == 0 {
            return Err(OptionsError::ZeroTables);
        }
        if self.min_rows == 0 {
            return Err(OptionsError::ZeroRows);
        }
        Ok(())
    }
}

/// Drives round simulation across tables until the row target is reached.
///
/// One seed makes a whole run reproducible: per-table seeds and per-round
/// player counts are all derived from the driver RNG.
#[derive(Debug)]
pub struct Generator {
    options: GeneratorOptions,
    rng: ChaCha8Rng,
}

impl Generator {
    /// Creates a generator after validating the options.
    ///
    /// # Errors
    ///
    /// Returns an error if the options are malformed.
    pub fn new(options: GeneratorOptions, seed: u64) -> Result<Self, OptionsError> {
        options.validate()?;
        Ok(Self {
            options,
            rng: ChaCha8Rng::seed_from_u64(seed),
        })
    }

    /// Returns the generator's configuration.
    #[must_use]
    pub const fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Generates at least `min_rows` outcome rows and returns them in
    /// randomized order.
    ///
    /// Table numbers `1..=tables` are swept repeatedly; each visit seats a
    /// fresh table with a uniformly random player count in `[1, 6]` and
    /// plays a single round.
    ///
    /// # Errors
    ///
    /// Returns an error if a round fails; the run aborts rather than
    /// emitting partial data.
    pub fn run(&mut self) -> Result<Vec<RoundRecord>, RoundError> {
        let mut records: Vec<RoundRecord> = Vec::with_capacity(self.options.min_rows);

        while records.len() < self.options.min_rows {
            for table_number in 1..=self.options.tables {
                let seed = self.rng.random::<u64>();
                let mut table = Table::new(self.options.decks, table_number, seed);
                let num_players = self.rng.random_range(1..=MAX_PLAYERS);
                records.extend(table.play_round(num_players)?);
                if records.len() >= self.options.min_rows {
                    break;
                }
            }
            log::debug!("accumulated {} rows", records.len());
        }

        // Randomize row order so consecutive rows do not share a round.
        records.shuffle(&mut self.rng);

        Ok(records)
    }
}
