//! Projection of collection records into the import CSV schema.

use crate::error::{RemapError, Result};
use crate::models::{InventoryRecord, OutputRow};
use std::collections::HashMap;

/// Export condition names to import condition codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionTable {
    codes: HashMap<String, String>,
}

impl ConditionTable {
    pub fn new<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            codes: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn get(&self, condition: &str) -> Option<&str> {
        self.codes.get(condition).map(String::as_str)
    }
}

impl Default for ConditionTable {
    fn default() -> Self {
        Self::new([
            ("Mint", "M"),
            ("NearMint", "NM"),
            ("LightlyPlayed", "LP"),
            ("Played", "MP"),
            ("HeavilyPlayed", "HP"),
            ("Damaged", "DM"),
        ])
    }
}

/// Export printing names to the import foil marker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoilMarkers {
    markers: HashMap<String, String>,
}

impl FoilMarkers {
    pub fn new<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            markers: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn get(&self, printing: &str) -> Option<&str> {
        self.markers.get(printing).map(String::as_str)
    }
}

impl Default for FoilMarkers {
    fn default() -> Self {
        Self::new([("Normal", ""), ("Foil", "1")])
    }
}

/// How to treat a condition or printing without a mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnmappedPolicy {
    /// Write an empty field and report a warning
    #[default]
    Lenient,
    /// Fail the run
    Strict,
}

/// A value that was written as an empty field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingWarning {
    /// 1-based position of the record in the output
    pub row: usize,
    pub field: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, Default)]
pub struct MappedOutput {
    pub rows: Vec<OutputRow>,
    pub warnings: Vec<MappingWarning>,
}

#[derive(Debug, Clone, Default)]
pub struct OutputMapper {
    pub conditions: ConditionTable,
    pub foil_markers: FoilMarkers,
    pub policy: UnmappedPolicy,
}

impl OutputMapper {
    pub fn new(policy: UnmappedPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    fn lookup(
        &self,
        mapped: Option<&str>,
        row: usize,
        field: &'static str,
        value: &str,
        warnings: &mut Vec<MappingWarning>,
    ) -> Result<String> {
        if let Some(mapped) = mapped {
            return Ok(mapped.to_string());
        }
        match self.policy {
            UnmappedPolicy::Strict => Err(RemapError::UnmappedValue {
                row,
                field,
                value: value.to_string(),
            }),
            UnmappedPolicy::Lenient => {
                log::warn!("Row {row}: no mapping for {field} '{value}', writing empty value");
                warnings.push(MappingWarning {
                    row,
                    field,
                    value: value.to_string(),
                });
                Ok(String::new())
            }
        }
    }

    /// Map every record to an output row, in order
    pub fn map_records(&self, records: Vec<InventoryRecord>) -> Result<MappedOutput> {
        let mut output = MappedOutput {
            rows: Vec::with_capacity(records.len()),
            warnings: Vec::new(),
        };

        for (index, record) in records.into_iter().enumerate() {
            let row = index + 1;
            let condition = self.lookup(
                self.conditions.get(&record.condition),
                row,
                "condition",
                &record.condition,
                &mut output.warnings,
            )?;
            let is_foil = self.lookup(
                self.foil_markers.get(record.printing.as_str()),
                row,
                "printing",
                record.printing.as_str(),
                &mut output.warnings,
            )?;

            output.rows.push(OutputRow {
                amount: record.quantity,
                card_name: record.card_name,
                set_name: record.set_code,
                condition,
                language: record.language,
                is_foil,
                collector_number: record.collector_number,
                added: record.date_bought,
            });
        }

        Ok(output)
    }
}
