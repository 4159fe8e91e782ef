//! Tests for record and token normalization

use super::*;

fn row(name: &str) -> InventoryRow {
    InventoryRow {
        quantity: 1,
        card_name: name.to_string(),
        set_code: None,
        card_number: None,
        condition: None,
        printing: None,
        language: None,
        date_bought: None,
    }
}

#[test]
fn test_normalize_fills_all_defaults() {
    let record = normalize_row(row("Lightning Bolt"));

    assert_eq!(record.card_name, "Lightning Bolt");
    assert_eq!(record.quantity, 1);
    assert_eq!(record.set_code, "Unknown");
    assert_eq!(record.collector_number, "Unknown");
    assert_eq!(record.condition, "NearMint");
    assert_eq!(record.printing, Printing::Normal);
    assert_eq!(record.language, "English");
    assert_eq!(record.date_bought, "Unknown");
}

#[test]
fn test_normalize_treats_blank_as_missing() {
    let mut input = row("Lightning Bolt");
    input.set_code = Some("   ".to_string());
    input.language = Some(String::new());

    let record = normalize_row(input);
    assert_eq!(record.set_code, "Unknown");
    assert_eq!(record.language, "English");
}

#[test]
fn test_normalize_keeps_present_values() {
    let mut input = row("Lightning Bolt");
    input.set_code = Some("M10".to_string());
    input.card_number = Some("146".to_string());
    input.condition = Some("LightlyPlayed".to_string());
    input.printing = Some("Foil".to_string());
    input.language = Some("German".to_string());
    input.date_bought = Some("2024-03-01".to_string());

    let record = normalize_row(input);
    assert_eq!(record.set_code, "M10");
    assert_eq!(record.collector_number, "146");
    assert_eq!(record.condition, "LightlyPlayed");
    assert_eq!(record.printing, Printing::Foil);
    assert_eq!(record.language, "German");
    assert_eq!(record.date_bought, "2024-03-01");
}

#[test]
fn test_normalize_keeps_unknown_printing_verbatim() {
    let mut input = row("Sol Ring");
    input.printing = Some("Etched".to_string());

    let record = normalize_row(input);
    assert_eq!(record.printing, Printing::Other("Etched".to_string()));
}

#[test]
fn test_normalize_records_preserves_order() {
    let records = normalize_records(vec![row("A"), row("B"), row("C")]);
    let names: Vec<&str> = records.iter().map(|r| r.card_name.as_str()).collect();
    assert_eq!(names, vec!["A", "B", "C"]);
}

#[test]
fn test_strip_token_suffix() {
    assert_eq!(strip_token_suffix("Squirrel Token"), "Squirrel");
    assert_eq!(strip_token_suffix("Squirrel"), "Squirrel");
    // Case sensitive
    assert_eq!(strip_token_suffix("Squirrel token"), "Squirrel token");
}

#[test]
fn test_strip_token_names_rewrites_records() {
    let records = normalize_records(vec![row("Squirrel Token"), row("Llanowar Elves")]);
    let stripped = strip_token_names(records);

    assert_eq!(stripped[0].card_name, "Squirrel");
    assert_eq!(stripped[1].card_name, "Llanowar Elves");
}
