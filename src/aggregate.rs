use crate::models::{IdentityKey, InventoryRecord};
use std::collections::HashMap;

/// Merge records sharing an identity key, summing their quantities.
///
/// The first record seen for a key keeps its non-key fields (e.g. the
/// acquisition date); output order follows first occurrence in the input.
pub fn aggregate_records(records: Vec<InventoryRecord>) -> Vec<InventoryRecord> {
    let input_len = records.len();
    let mut index: HashMap<IdentityKey, usize> = HashMap::with_capacity(input_len);
    let mut merged: Vec<InventoryRecord> = Vec::with_capacity(input_len);

    for record in records {
        let key = record.identity_key();
        match index.get(&key) {
            Some(&position) => merged[position].quantity += record.quantity,
            None => {
                index.insert(key, merged.len());
                merged.push(record);
            }
        }
    }

    log::info!(
        "Aggregated {} rows into {} distinct records",
        input_len,
        merged.len()
    );

    merged
}

/// Total number of cards across all records
pub fn total_quantity(records: &[InventoryRecord]) -> u64 {
    records.iter().map(|r| r.quantity).sum()
}
