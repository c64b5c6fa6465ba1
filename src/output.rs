//! CSV serialization of outcome records.

use std::io::{self, Write};

use crate::record::RoundRecord;

/// Column header matching the record field order.
pub const CSV_HEADER: &str =
    "TableNum,NumPlayers,PlayerHand,PlayerHandValue,DealerOpenCard,DealerHand,DealerHandValue,Winner";

/// Writes the header and one comma-delimited line per record.
///
/// Card and hand strings never contain commas, so no quoting is needed.
///
/// # Errors
///
/// Returns any I/O error from the underlying writer.
pub fn write_csv<W: Write>(mut writer: W, records: &[RoundRecord]) -> io::Result<()> {
    writeln!(writer, "{CSV_HEADER}")?;
    for record in records {
        writeln!(
            writer,
            "{},{},{},{},{},{},{},{}",
            record.table_number,
            record.num_players,
            record.player_hand,
            record.player_hand_value,
            record.dealer_open_card,
            record.dealer_hand,
            record.dealer_hand_value,
            record.winner,
        )?;
    }
    writer.flush()
}
