//! Collection Remap - MTG collection export minus a deck
//!
//! Converts a collection CSV export into an import CSV, optionally
//! leaving out the cards used by a deckstats deck.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use collection_remap::pipeline::{DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH};
use collection_remap::{run, DeckOutcome, DeckSource, DeckUrl, RunConfig, UnmappedPolicy};
use std::path::PathBuf;

/// Remap a collection CSV export, subtracting the cards of a deck
#[derive(Parser, Debug)]
#[command(name = "collection_remap")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the input CSV file
    #[arg(long, default_value = DEFAULT_INPUT_PATH)]
    path: PathBuf,

    /// deckstats deck URL whose cards are removed from the output
    #[arg(long, conflicts_with = "deck_file")]
    deck_url: Option<String>,

    /// Saved deck JSON document, as an alternative to --deck-url
    #[arg(long)]
    deck_file: Option<PathBuf>,

    /// Include the sideboard when subtracting the deck
    #[arg(long, action = ArgAction::Set, default_value_t = true)]
    sideboard: bool,

    /// Fail on conditions or printings without an output mapping
    #[arg(long, default_value_t = false)]
    strict: bool,
}

impl Args {
    fn into_config(self) -> Result<RunConfig> {
        let deck = match (self.deck_url, self.deck_file) {
            (Some(url), _) => Some(DeckSource::Url(
                DeckUrl::parse(&url).context("Invalid --deck-url")?,
            )),
            (None, Some(path)) => Some(DeckSource::File(path)),
            (None, None) => None,
        };

        Ok(RunConfig {
            input_path: self.path,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            deck,
            include_sideboard: self.sideboard,
            unmapped_policy: if self.strict {
                UnmappedPolicy::Strict
            } else {
                UnmappedPolicy::Lenient
            },
            ..RunConfig::default()
        })
    }
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Args::parse().into_config()?;
    let summary = run(&config).with_context(|| {
        format!("Failed to remap {}", config.input_path.display())
    })?;

    match &summary.deck {
        DeckOutcome::Disabled => log::info!("No deck given, all cards exported"),
        DeckOutcome::Applied(report) => {
            let unsatisfied = report.unsatisfied().count();
            log::info!(
                "Removed {} cards for the deck ({} basic land entries skipped)",
                report.total_consumed(),
                report.basic_lands_skipped()
            );
            if unsatisfied > 0 {
                log::info!("{} deck entries were not fully in the collection", unsatisfied);
            }
        }
        DeckOutcome::Skipped { reason } => {
            log::warn!("Deck matching skipped ({}), output is unfiltered", reason)
        }
    }
    if !summary.warnings.is_empty() {
        log::warn!(
            "{} values had no output mapping and were left empty",
            summary.warnings.len()
        );
    }

    log::info!(
        "Done: {} rows read, {} distinct records, {} rows written to {}",
        summary.rows_read,
        summary.records_aggregated,
        summary.rows_written,
        config.output_path.display()
    );
    Ok(())
}
