//! One sequential remap run: read, reconcile against a deck, map, write.

use crate::aggregate::aggregate_records;
use crate::deck_matching::{apply_deck, MatchReport};
use crate::deckstats::{fetch_deck_from, load_deck, DeckUrl, DECKSTATS_API_URL};
use crate::error::Result;
use crate::io::{read_inventory, write_output};
use crate::mapping::{MappingWarning, OutputMapper, UnmappedPolicy};
use crate::models::{DeckList, InventoryRecord, InventoryRow};
use crate::normalize::{normalize_records, strip_token_names};
use std::path::PathBuf;

pub const DEFAULT_INPUT_PATH: &str = "./input.csv";
pub const DEFAULT_OUTPUT_PATH: &str = "./output.csv";

/// Where the deck to subtract comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeckSource {
    /// Deck page on deckstats, fetched through the API
    Url(DeckUrl),
    /// Saved deck JSON document
    File(PathBuf),
}

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub deck: Option<DeckSource>,
    pub include_sideboard: bool,
    pub unmapped_policy: UnmappedPolicy,
    pub api_url: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            deck: None,
            include_sideboard: true,
            unmapped_policy: UnmappedPolicy::default(),
            api_url: DECKSTATS_API_URL.to_string(),
        }
    }
}

/// Whether and how the deck was applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeckOutcome {
    /// No deck configured
    Disabled,
    Applied(MatchReport),
    /// The deck could not be obtained; the collection passed through unfiltered
    Skipped { reason: String },
}

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub rows_read: usize,
    pub records_aggregated: usize,
    pub rows_written: usize,
    pub deck: DeckOutcome,
    pub warnings: Vec<MappingWarning>,
}

/// Result of the in-memory reconciliation
#[derive(Debug, Clone)]
pub struct Reconciled {
    pub records: Vec<InventoryRecord>,
    pub records_aggregated: usize,
    pub report: Option<MatchReport>,
}

/// Normalize, aggregate and strip token names, then subtract the deck if given
pub fn reconcile(rows: Vec<InventoryRow>, deck: Option<&DeckList>, include_sideboard: bool) -> Reconciled {
    let records = normalize_records(rows);
    let records = aggregate_records(records);
    let records_aggregated = records.len();
    let records = strip_token_names(records);

    match deck {
        Some(deck) => {
            let (records, report) = apply_deck(records, deck, include_sideboard);
            Reconciled {
                records,
                records_aggregated,
                report: Some(report),
            }
        }
        None => Reconciled {
            records,
            records_aggregated,
            report: None,
        },
    }
}

/// Obtain the deck document. Failures are returned, not logged.
pub fn resolve_deck(source: &DeckSource, api_url: &str) -> Result<DeckList> {
    match source {
        DeckSource::Url(deck_url) => fetch_deck_from(api_url, deck_url),
        DeckSource::File(path) => load_deck(path),
    }
}

pub fn run(config: &RunConfig) -> Result<RunSummary> {
    let rows = read_inventory(&config.input_path)?;
    let rows_read = rows.len();

    let deck = match &config.deck {
        None => Err(DeckOutcome::Disabled),
        Some(source) => resolve_deck(source, &config.api_url).map_err(|e| {
            log::warn!("Could not get deck, skipping deck matching: {}", e);
            DeckOutcome::Skipped {
                reason: e.to_string(),
            }
        }),
    };

    let reconciled = reconcile(rows, deck.as_ref().ok(), config.include_sideboard);
    let outcome = match reconciled.report {
        Some(report) => DeckOutcome::Applied(report),
        None => deck.err().unwrap_or(DeckOutcome::Disabled),
    };

    let mapped = OutputMapper::new(config.unmapped_policy).map_records(reconciled.records)?;
    write_output(&config.output_path, &mapped.rows)?;

    Ok(RunSummary {
        rows_read,
        records_aggregated: reconciled.records_aggregated,
        rows_written: mapped.rows.len(),
        deck: outcome,
        warnings: mapped.warnings,
    })
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
