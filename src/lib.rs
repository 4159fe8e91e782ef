//! Collection Remap - MTG collection export minus a deck
//!
//! Reads a collection CSV export, subtracts the cards used by a deckstats
//! deck and writes the remainder as an import CSV.

pub mod aggregate;
pub mod deck_matching;
pub mod deckstats;
pub mod error;
pub mod io;
pub mod mapping;
pub mod models;
pub mod normalize;
pub mod pipeline;

// Re-export commonly used items
pub use deck_matching::{apply_deck, MatchReport};
pub use deckstats::{fetch_deck, load_deck, DeckUrl};
pub use error::{RemapError, Result};
pub use mapping::{OutputMapper, UnmappedPolicy};
pub use models::{DeckEntry, DeckList, InventoryRecord, InventoryRow, OutputRow, Printing};
pub use pipeline::{reconcile, run, DeckOutcome, DeckSource, RunConfig, RunSummary};
