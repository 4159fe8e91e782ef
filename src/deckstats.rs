//! deckstats.net client for fetching deck lists
//!
//! Uses the blocking reqwest client; the run is sequential and the deck
//! fetch is its only network call.

use crate::error::{RemapError, Result};
use crate::models::DeckList;
use std::path::Path;
use url::Url;

/// Deck export endpoint of the deckstats API
pub const DECKSTATS_API_URL: &str = "https://deckstats.net/api.php";

const USER_AGENT: &str = "D2D-Automations-CollectionRemap/1.0";

/// Owner and deck ids taken from a deck page URL such as
/// `https://deckstats.net/decks/12345/678901-my-deck/en`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckUrl {
    pub user_id: String,
    pub deck_id: String,
}

impl DeckUrl {
    pub fn parse(input: &str) -> Result<Self> {
        let invalid = |reason: &str| RemapError::InvalidDeckUrl {
            url: input.to_string(),
            reason: reason.to_string(),
        };

        let url = Url::parse(input.trim()).map_err(|e| invalid(&e.to_string()))?;
        let segments: Vec<&str> = url
            .path_segments()
            .map(|s| s.filter(|seg| !seg.is_empty()).collect())
            .unwrap_or_default();

        // The deck segment is the first "{digits}-{slug}" one, preceded by the owner id
        let position = segments
            .iter()
            .position(|seg| deck_id_of(seg).is_some())
            .ok_or_else(|| invalid("no '{deck_id}-{slug}' path segment"))?;
        if position == 0 {
            return Err(invalid("missing user id before the deck segment"));
        }

        let user_id = segments[position - 1];
        if !user_id.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid("user id is not numeric"));
        }
        let deck_id = deck_id_of(segments[position]).unwrap_or_default();

        Ok(Self {
            user_id: user_id.to_string(),
            deck_id: deck_id.to_string(),
        })
    }
}

/// Numeric token before the first '-' of a path segment
fn deck_id_of(segment: &str) -> Option<&str> {
    let (id, _slug) = segment.split_once('-')?;
    if !id.is_empty() && id.chars().all(|c| c.is_ascii_digit()) {
        Some(id)
    } else {
        None
    }
}

/// Fetch a deck list from deckstats
pub fn fetch_deck(deck: &DeckUrl) -> Result<DeckList> {
    fetch_deck_from(DECKSTATS_API_URL, deck)
}

/// Fetches a deck list from the given endpoint (for testing with mock servers).
pub fn fetch_deck_from(api_url: &str, deck: &DeckUrl) -> Result<DeckList> {
    log::info!(
        "Fetching deck {} of user {} from: {}",
        deck.deck_id,
        deck.user_id,
        api_url
    );

    let response = reqwest::blocking::Client::new()
        .get(api_url)
        .query(&[
            ("action", "get_deck"),
            ("id_type", "saved"),
            ("owner_id", deck.user_id.as_str()),
            ("id", deck.deck_id.as_str()),
            ("response_type", "json"),
        ])
        .header("User-Agent", USER_AGENT)
        .send()?;

    if !response.status().is_success() {
        return Err(RemapError::HttpStatus(response.status()));
    }

    let body = response.text()?;
    let list: DeckList = serde_json::from_str(&body)?;

    log::info!(
        "Fetched deck with {} main entries in {} sections and {} sideboard entries",
        list.main_entry_count(),
        list.sections.len(),
        list.sideboard.len()
    );

    Ok(list)
}

/// Load a previously saved deck JSON document
pub fn load_deck<P: AsRef<Path>>(path: P) -> Result<DeckList> {
    log::info!("Loading deck from: {}", path.as_ref().display());

    let content = std::fs::read_to_string(path)?;
    let list: DeckList = serde_json::from_str(&content)?;

    log::info!(
        "Loaded deck with {} main entries and {} sideboard entries",
        list.main_entry_count(),
        list.sideboard.len()
    );

    Ok(list)
}

#[cfg(test)]
#[path = "deckstats_tests.rs"]
mod tests;
