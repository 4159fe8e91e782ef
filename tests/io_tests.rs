use collection_remap::io::{read_inventory, write_output};
use collection_remap::{OutputRow, RemapError};
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

// Test fixtures - sample data for testing

fn create_sample_csv_content() -> String {
    r#""sep=,"
Folder Name,Quantity,Trade Quantity,Card Name,Set Code,Set Name,Card Number,Condition,Printing,Language,Price Bought,Date Bought
Binder,4,0,Lightning Bolt,M10,Magic 2010,146,NearMint,Normal,English,0.50,2024-01-01
Binder,1,0,"Jace, the Mind Sculptor",WWK,Worldwake,31,LightlyPlayed,Foil,English,80.00,2024-02-15
Binder,2,0,"Ach! Hans, \"Run\"",UNH,Unhinged,116,Played,Normal,German,,
Binder,3,0,Squirrel Token,,,,,,,,"#
        .to_string()
}

fn write_temp(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file
}

// Tests for read_inventory

#[test]
fn test_read_inventory_valid_file() {
    let temp_file = write_temp(&create_sample_csv_content());

    let rows = read_inventory(temp_file.path()).unwrap();
    assert_eq!(rows.len(), 4);

    assert_eq!(rows[0].quantity, 4);
    assert_eq!(rows[0].card_name, "Lightning Bolt");
    assert_eq!(rows[0].set_code.as_deref(), Some("M10"));
    assert_eq!(rows[0].card_number.as_deref(), Some("146"));
    assert_eq!(rows[0].condition.as_deref(), Some("NearMint"));
    assert_eq!(rows[0].printing.as_deref(), Some("Normal"));
    assert_eq!(rows[0].language.as_deref(), Some("English"));
    assert_eq!(rows[0].date_bought.as_deref(), Some("2024-01-01"));
}

#[test]
fn test_read_inventory_quoted_fields() {
    let temp_file = write_temp(&create_sample_csv_content());

    let rows = read_inventory(temp_file.path()).unwrap();
    assert_eq!(rows[1].card_name, "Jace, the Mind Sculptor");
    assert_eq!(rows[1].printing.as_deref(), Some("Foil"));
    assert_eq!(rows[2].card_name, "Ach! Hans, \"Run\"");
}

#[test]
fn test_read_inventory_empty_fields_are_none() {
    let temp_file = write_temp(&create_sample_csv_content());

    let rows = read_inventory(temp_file.path()).unwrap();
    let token = &rows[3];
    assert_eq!(token.card_name, "Squirrel Token");
    assert_eq!(token.set_code, None);
    assert_eq!(token.card_number, None);
    assert_eq!(token.condition, None);
    assert_eq!(token.printing, None);
    assert_eq!(token.language, None);
    assert_eq!(token.date_bought, None);
}

#[test]
fn test_read_inventory_only_headers() {
    let temp_file = write_temp(
        "\"sep=,\"\nQuantity,Card Name,Set Code,Condition,Language,Printing,Card Number,Date Bought\n",
    );

    let rows = read_inventory(temp_file.path()).unwrap();
    assert!(rows.is_empty());
}

#[test]
fn test_read_inventory_missing_column() {
    let temp_file = write_temp(
        "\"sep=,\"\nQuantity,Card Name,Set Code,Condition,Language,Printing,Card Number\n1,Opt,XLN,NearMint,English,Normal,65\n",
    );

    match read_inventory(temp_file.path()) {
        Err(RemapError::MissingColumn { column }) => assert_eq!(column, "Date Bought"),
        other => panic!("Expected RemapError::MissingColumn, got: {other:?}"),
    }
}

#[test]
fn test_read_inventory_header_on_first_line_is_skipped() {
    // Without the preamble the header itself is skipped and columns are missing
    let temp_file = write_temp(
        "Quantity,Card Name,Set Code,Condition,Language,Printing,Card Number,Date Bought\n1,Opt,XLN,NearMint,English,Normal,65,\n",
    );

    assert!(matches!(
        read_inventory(temp_file.path()),
        Err(RemapError::MissingColumn { .. })
    ));
}

#[test]
fn test_read_inventory_invalid_quantity() {
    let temp_file = write_temp(
        "\"sep=,\"\nQuantity,Card Name,Set Code,Condition,Language,Printing,Card Number,Date Bought\n1,Opt,XLN,NearMint,English,Normal,65,\nlots,Shock,M19,NearMint,English,Normal,156,\n",
    );

    match read_inventory(temp_file.path()) {
        Err(RemapError::InvalidRow { line, .. }) => assert_eq!(line, 4),
        other => panic!("Expected RemapError::InvalidRow, got: {other:?}"),
    }
}

#[test]
fn test_read_inventory_nonexistent_file() {
    assert!(matches!(
        read_inventory("/this/file/does/not/exist.csv"),
        Err(RemapError::Io(_))
    ));
}

#[test]
fn test_read_inventory_empty_file() {
    let temp_file = NamedTempFile::new().unwrap();
    assert!(matches!(
        read_inventory(temp_file.path()),
        Err(RemapError::MissingColumn { .. })
    ));
}

// Tests for write_output

fn sample_output_row() -> OutputRow {
    OutputRow {
        amount: 2,
        card_name: "Jace, the Mind Sculptor".to_string(),
        set_name: "WWK".to_string(),
        condition: "LP".to_string(),
        language: "English".to_string(),
        is_foil: "1".to_string(),
        collector_number: "31".to_string(),
        added: "2024-02-15".to_string(),
    }
}

#[test]
fn test_write_output_rows() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("output.csv");

    write_output(&path, &[sample_output_row()]).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines[0],
        "amount,card_name,set_name,condition,language,is_foil,collector_number,added"
    );
    assert_eq!(
        lines[1],
        "2,\"Jace, the Mind Sculptor\",WWK,LP,English,1,31,2024-02-15"
    );
    assert_eq!(lines.len(), 2);
}

#[test]
fn test_write_output_empty_still_has_header() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("output.csv");

    write_output(&path, &[]).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(
        content.trim_end(),
        "amount,card_name,set_name,condition,language,is_foil,collector_number,added"
    );
}
