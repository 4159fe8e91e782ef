//! Record normalization: defaults for missing export fields and token names.

use crate::models::{InventoryRecord, InventoryRow, Printing};

pub const DEFAULT_SET_CODE: &str = "Unknown";
pub const DEFAULT_COLLECTOR_NUMBER: &str = "Unknown";
pub const DEFAULT_CONDITION: &str = "NearMint";
pub const DEFAULT_PRINTING: &str = "Normal";
pub const DEFAULT_LANGUAGE: &str = "English";
pub const DEFAULT_DATE_BOUGHT: &str = "Unknown";

/// Suffix the export appends to token card names
pub const TOKEN_SUFFIX: &str = " Token";

fn or_default(value: Option<String>, default: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => default.to_string(),
    }
}

/// Fill every missing or empty optional field with its default.
///
/// Must run before aggregation so that rows differing only in an unset
/// field land in the same group.
pub fn normalize_row(row: InventoryRow) -> InventoryRecord {
    InventoryRecord {
        quantity: row.quantity,
        card_name: row.card_name,
        set_code: or_default(row.set_code, DEFAULT_SET_CODE),
        collector_number: or_default(row.card_number, DEFAULT_COLLECTOR_NUMBER),
        condition: or_default(row.condition, DEFAULT_CONDITION),
        printing: Printing::parse(&or_default(row.printing, DEFAULT_PRINTING)),
        language: or_default(row.language, DEFAULT_LANGUAGE),
        date_bought: or_default(row.date_bought, DEFAULT_DATE_BOUGHT),
    }
}

pub fn normalize_records(rows: Vec<InventoryRow>) -> Vec<InventoryRecord> {
    rows.into_iter().map(normalize_row).collect()
}

/// Remove every " Token" occurrence from a card name
pub fn strip_token_suffix(name: &str) -> String {
    name.replace(TOKEN_SUFFIX, "")
}

/// Unify token and non-token naming so deck entries match either.
/// Runs after aggregation and does not regroup records.
pub fn strip_token_names(mut records: Vec<InventoryRecord>) -> Vec<InventoryRecord> {
    for record in records.iter_mut() {
        if record.card_name.contains(TOKEN_SUFFIX) {
            let stripped = strip_token_suffix(&record.card_name);
            log::debug!("Token name '{}' -> '{}'", record.card_name, stripped);
            record.card_name = stripped;
        }
    }
    records
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod tests;
