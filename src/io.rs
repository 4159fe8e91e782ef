use crate::error::{RemapError, Result};
use crate::models::{InventoryRow, OutputRow};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Columns the collection export must provide
pub const REQUIRED_COLUMNS: [&str; 8] = [
    "Quantity",
    "Card Name",
    "Set Code",
    "Condition",
    "Language",
    "Printing",
    "Card Number",
    "Date Bought",
];

pub const OUTPUT_HEADERS: [&str; 8] = [
    "amount",
    "card_name",
    "set_name",
    "condition",
    "language",
    "is_foil",
    "collector_number",
    "added",
];

/// Read the collection export.
///
/// The first line of the file is a preamble (e.g. `"sep=,"`) and is skipped;
/// the header follows on the second line.
pub fn read_inventory<P: AsRef<Path>>(path: P) -> Result<Vec<InventoryRow>> {
    let path = path.as_ref();
    log::info!("Reading collection from: {}", path.display());

    let mut reader = BufReader::new(File::open(path)?);
    let mut preamble = String::new();
    reader.read_line(&mut preamble)?;
    log::debug!("Skipped preamble line: {:?}", preamble.trim_end());

    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .quote(b'"')
        .double_quote(false)
        .escape(Some(b'\\'))
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(RemapError::MissingColumn {
                column: column.to_string(),
            });
        }
    }

    let mut rows = Vec::new();
    for result in rdr.deserialize() {
        let row: InventoryRow = result.map_err(|e| RemapError::InvalidRow {
            // +1 for the skipped preamble line
            line: e.position().map(|p| p.line() + 1).unwrap_or(0),
            message: e.to_string(),
        })?;
        rows.push(row);
    }

    log::info!("Read {} collection rows", rows.len());
    Ok(rows)
}

/// Write the import CSV. The header is written even when there are no rows.
pub fn write_output<P: AsRef<Path>>(path: P, rows: &[OutputRow]) -> Result<()> {
    let path = path.as_ref();
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;

    wtr.write_record(OUTPUT_HEADERS)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;

    log::info!("Wrote {} rows to: {}", rows.len(), path.display());
    Ok(())
}
