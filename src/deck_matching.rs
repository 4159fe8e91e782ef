//! Subtracts the cards used by a deck from the collection.
//!
//! Each deck entry selects candidates by name and foil flag, narrowed by
//! collector number when the deck supplies one, and greedily consumes
//! their stock in collection order. Entries are processed in document
//! order (main sections first, then the sideboard), so the first entry to
//! reach a shared candidate claims its stock first.

use crate::models::{DeckEntry, DeckList, InventoryRecord, Printing};

/// Generic lands never taken out of the collection
pub const BASIC_LANDS: [&str; 6] = ["Plains", "Island", "Swamp", "Mountain", "Forest", "Wastes"];

/// Separator between the faces of a two-faced card name
pub const FACE_SEPARATOR: &str = " // ";

pub fn is_basic_land(name: &str) -> bool {
    BASIC_LANDS.contains(&name.trim())
}

/// Returns the front face of a two-faced name, or the name itself
pub fn first_face(name: &str) -> &str {
    name.split(FACE_SEPARATOR).next().unwrap_or(name).trim()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckPart {
    Main,
    Sideboard,
}

/// What happened to a single deck entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryOutcome {
    pub name: String,
    pub part: DeckPart,
    pub requested: u64,
    pub consumed: u64,
    pub basic_land: bool,
}

impl EntryOutcome {
    pub fn is_satisfied(&self) -> bool {
        self.basic_land || self.consumed == self.requested
    }
}

/// Per-entry results of one matching pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchReport {
    pub entries: Vec<EntryOutcome>,
    /// Records dropped because their stock reached zero
    pub pruned: usize,
}

impl MatchReport {
    pub fn total_consumed(&self) -> u64 {
        self.entries.iter().map(|e| e.consumed).sum()
    }

    /// Entries whose demand exceeded the matching stock
    pub fn unsatisfied(&self) -> impl Iterator<Item = &EntryOutcome> {
        self.entries.iter().filter(|e| !e.is_satisfied())
    }

    pub fn basic_lands_skipped(&self) -> usize {
        self.entries.iter().filter(|e| e.basic_land).count()
    }
}

fn is_candidate(record: &InventoryRecord, name: &str, printing: &Printing, entry: &DeckEntry) -> bool {
    if record.card_name != name || record.printing != *printing {
        return false;
    }
    match &entry.collector_number {
        Some(number) => record.collector_number == *number,
        None => true,
    }
}

/// Consume one entry's demand from the records. Returns the amount taken.
fn consume_entry(records: &mut [InventoryRecord], entry: &DeckEntry) -> u64 {
    let name = first_face(&entry.name);
    let printing = Printing::from_foil_flag(entry.is_foil);
    let mut remaining = u64::from(entry.amount);

    for record in records
        .iter_mut()
        .filter(|r| is_candidate(r, name, &printing, entry))
    {
        if remaining == 0 {
            break;
        }
        if record.quantity == 0 {
            continue;
        }
        let taken = record.quantity.min(remaining);
        record.quantity -= taken;
        remaining -= taken;
        log::debug!(
            "'{}' ({} {}): took {}, {} left in stock",
            name,
            record.set_code,
            record.collector_number,
            taken,
            record.quantity
        );
    }

    u64::from(entry.amount) - remaining
}

fn process_entry(records: &mut [InventoryRecord], entry: &DeckEntry, part: DeckPart) -> EntryOutcome {
    let requested = u64::from(entry.amount);

    if is_basic_land(&entry.name) {
        log::info!("Skipping basic land: {} x {}", entry.amount, entry.name);
        return EntryOutcome {
            name: entry.name.clone(),
            part,
            requested,
            consumed: 0,
            basic_land: true,
        };
    }

    let consumed = consume_entry(records, entry);
    if consumed < requested {
        log::info!(
            "Only {} of {} x {} found in collection",
            consumed,
            requested,
            entry.name
        );
    }

    EntryOutcome {
        name: entry.name.clone(),
        part,
        requested,
        consumed,
        basic_land: false,
    }
}

/// Remove the deck's cards from the collection.
///
/// Records whose quantity reaches zero are dropped once, after every entry
/// has been applied. Unsatisfiable demand is reported, never an error.
pub fn apply_deck(
    mut records: Vec<InventoryRecord>,
    deck: &DeckList,
    include_sideboard: bool,
) -> (Vec<InventoryRecord>, MatchReport) {
    let mut report = MatchReport::default();

    for section in &deck.sections {
        for entry in &section.cards {
            report
                .entries
                .push(process_entry(&mut records, entry, DeckPart::Main));
        }
    }

    if include_sideboard {
        for entry in &deck.sideboard {
            report
                .entries
                .push(process_entry(&mut records, entry, DeckPart::Sideboard));
        }
    } else if !deck.sideboard.is_empty() {
        log::info!("Ignoring {} sideboard entries", deck.sideboard.len());
    }

    let before = records.len();
    records.retain(|r| r.quantity > 0);
    report.pruned = before - records.len();

    log::info!(
        "Deck applied: {} entries, {} cards removed, {} records used up",
        report.entries.len(),
        report.total_consumed(),
        report.pruned
    );

    (records, report)
}

#[cfg(test)]
#[path = "deck_matching_tests.rs"]
mod tests;
