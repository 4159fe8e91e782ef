use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Printing (finish) of an inventory card
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Printing {
    Normal,
    Foil,
    /// Any other finish string from the export, kept verbatim
    Other(String),
}

impl Printing {
    /// Parse an export value. Matching is exact: "Normal" and "Foil" are
    /// recognized, everything else is carried through as `Other`.
    pub fn parse(s: &str) -> Self {
        match s {
            "Normal" => Printing::Normal,
            "Foil" => Printing::Foil,
            other => Printing::Other(other.to_string()),
        }
    }

    /// Printing requested by a deck entry's foil flag
    pub fn from_foil_flag(is_foil: bool) -> Self {
        if is_foil {
            Printing::Foil
        } else {
            Printing::Normal
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Printing::Normal => "Normal",
            Printing::Foil => "Foil",
            Printing::Other(s) => s,
        }
    }
}

impl fmt::Display for Printing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One data row of the collection export, before defaults are applied
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct InventoryRow {
    #[serde(rename = "Quantity")]
    pub quantity: u64,
    #[serde(rename = "Card Name")]
    pub card_name: String,
    #[serde(rename = "Set Code")]
    pub set_code: Option<String>,
    #[serde(rename = "Card Number")]
    pub card_number: Option<String>,
    #[serde(rename = "Condition")]
    pub condition: Option<String>,
    #[serde(rename = "Printing")]
    pub printing: Option<String>,
    #[serde(rename = "Language")]
    pub language: Option<String>,
    #[serde(rename = "Date Bought")]
    pub date_bought: Option<String>,
}

/// A normalized collection record. Every optional export field holds
/// either its original value or the normalizer default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryRecord {
    pub quantity: u64,
    pub card_name: String,
    pub set_code: String,
    pub collector_number: String,
    pub condition: String,
    pub printing: Printing,
    pub language: String,
    pub date_bought: String,
}

impl InventoryRecord {
    /// Returns the aggregation key of this record
    pub fn identity_key(&self) -> IdentityKey {
        IdentityKey {
            card_name: self.card_name.clone(),
            set_code: self.set_code.clone(),
            collector_number: self.collector_number.clone(),
            condition: self.condition.clone(),
            printing: self.printing.clone(),
            language: self.language.clone(),
        }
    }
}

/// Fields that decide whether two records describe the same card stock
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IdentityKey {
    pub card_name: String,
    pub set_code: String,
    pub collector_number: String,
    pub condition: String,
    pub printing: Printing,
    pub language: String,
}

/// A single card line of a deck document
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DeckEntry {
    pub name: String,
    pub amount: u32,
    #[serde(rename = "isFoil", default)]
    pub is_foil: bool,
    #[serde(default, deserialize_with = "deserialize_collector_number")]
    pub collector_number: Option<String>,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct DeckSection {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub cards: Vec<DeckEntry>,
}

/// Deck document as returned by the deckstats API
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct DeckList {
    #[serde(default)]
    pub sections: Vec<DeckSection>,
    #[serde(default)]
    pub sideboard: Vec<DeckEntry>,
}

impl DeckList {
    /// Number of card lines across all main-deck sections
    pub fn main_entry_count(&self) -> usize {
        self.sections.iter().map(|s| s.cards.len()).sum()
    }
}

/// Collector numbers show up both as JSON strings and numbers
fn deserialize_collector_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Number(serde_json::Number),
    }

    let value = Option::<StringOrNumber>::deserialize(deserializer)?;
    Ok(match value {
        Some(StringOrNumber::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Some(StringOrNumber::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// One row of the import CSV
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct OutputRow {
    pub amount: u64,
    pub card_name: String,
    pub set_name: String,
    pub condition: String,
    pub language: String,
    pub is_foil: String,
    pub collector_number: String,
    pub added: String,
}
