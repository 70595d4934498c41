//! Integration tests for the zeugnis CLI
//!
//! These run the command functions against the bundled catalogs with a
//! temporary storage and output directory.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tempfile::TempDir;
use zeugnis_cli::{
    generate_command, preview_command, snapshot_clear_command, snapshot_save_command,
    snapshot_show_command, variants_command, GenerateOutput, LetterRequest, OutputFormat,
    Settings,
};
use zeugnis_core::{Field, FormSnapshot, PerformanceCategory, Rating};

fn settings(dir: &Path) -> Settings {
    let mut settings = Settings::default();
    settings.catalog.dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../i18n");
    settings.output.dir = dir.join("out");
    settings.storage.dir = dir.join("state");
    settings
}

fn anna_keller() -> FormSnapshot {
    let mut snapshot = FormSnapshot::new();
    for (field, value) in [
        (Field::Title, "ms"),
        (Field::FirstName, "Anna"),
        (Field::LastName, "Keller"),
        (Field::Position, "Senior Analyst"),
        (Field::StartDate, "2021-03-01"),
        (Field::EndDate, "2023-06-30"),
        (Field::CompanyName, "Nordic Tech AG"),
        (Field::CompanyCity, "Hamburg"),
        (Field::WriterName, "Jonas Richter"),
        (Field::WriterPosition, "HR Director"),
    ] {
        snapshot.set_field(field, value);
    }
    snapshot
}

fn write_snapshot(dir: &Path, snapshot: &FormSnapshot) -> PathBuf {
    let path = dir.join("anna.json");
    fs::write(&path, serde_json::to_string_pretty(snapshot).unwrap()).unwrap();
    path
}

fn request(snapshot: Option<PathBuf>, language: &str) -> LetterRequest {
    LetterRequest {
        snapshot,
        language: Some(language.to_string()),
        date: NaiveDate::from_ymd_opt(2026, 10, 16),
    }
}

#[test]
fn test_generate_docx_from_snapshot_file() {
    let dir = TempDir::new().unwrap();
    let settings = settings(dir.path());
    let snapshot = write_snapshot(dir.path(), &anna_keller());

    let output = generate_command(
        &settings,
        &request(Some(snapshot), "de"),
        OutputFormat::Docx,
        None,
    )
    .unwrap();

    let expected = dir
        .path()
        .join("out/Reference_Letter_Anna_Keller_2026-10-16.docx");
    assert_eq!(output, GenerateOutput::File(expected.clone()));

    let paragraphs = zeugnis_ooxml::paragraph_texts(&fs::read(&expected).unwrap()).unwrap();
    assert!(paragraphs.iter().any(|p| p == "Arbeitszeugnis"));
    assert!(paragraphs.iter().any(|p| p == "Hamburg, 16. Oktober 2026"));
}

#[test]
fn test_generate_text_prints() {
    let dir = TempDir::new().unwrap();
    let settings = settings(dir.path());
    let snapshot = write_snapshot(dir.path(), &anna_keller());

    let output = generate_command(
        &settings,
        &request(Some(snapshot), "en"),
        OutputFormat::Text,
        None,
    )
    .unwrap();
    let GenerateOutput::Printed(text) = output else {
        panic!("expected printed text");
    };
    assert!(text.starts_with("Nordic Tech AG\n"));
    assert!(text.contains("Hamburg, October 16, 2026"));
    assert!(!dir.path().join("out").exists());
}

#[test]
fn test_edited_section_text_from_snapshot_file() {
    let dir = TempDir::new().unwrap();
    let settings = settings(dir.path());
    let mut value = serde_json::to_value(anna_keller()).unwrap();
    value["sectionTexts"] = serde_json::json!({"social": "Anna was a valued colleague to all of us."});
    let path = dir.path().join("edited.json");
    fs::write(&path, value.to_string()).unwrap();

    let text = preview_command(&settings, &request(Some(path), "en"), false).unwrap();
    assert!(text.contains("Anna was a valued colleague to all of us."));
}

#[test]
fn test_missing_required_field_refused() {
    let dir = TempDir::new().unwrap();
    let settings = settings(dir.path());
    let incomplete = anna_keller().with_field(Field::WriterPosition, "");
    let snapshot = write_snapshot(dir.path(), &incomplete);

    let err = generate_command(
        &settings,
        &request(Some(snapshot), "de"),
        OutputFormat::Docx,
        None,
    )
    .unwrap_err();
    assert_eq!(err.to_string(), "Bitte füllen Sie alle Pflichtfelder aus.");
    assert!(!dir.path().join("out").exists());
}

#[test]
fn test_snapshot_lifecycle() {
    let dir = TempDir::new().unwrap();
    let settings = settings(dir.path());

    assert_eq!(snapshot_show_command(&settings).unwrap(), None);
    assert!(preview_command(&settings, &request(None, "en"), false).is_err());

    let file = write_snapshot(dir.path(), &anna_keller());
    snapshot_save_command(&settings, &file).unwrap();
    assert!(dir.path().join("state/referenceLetterData.json").exists());

    let shown = snapshot_show_command(&settings).unwrap().unwrap();
    let restored: FormSnapshot = serde_json::from_str(&shown).unwrap();
    assert_eq!(restored, anna_keller());

    let html = preview_command(&settings, &request(None, "en"), true).unwrap();
    assert!(html.contains("<strong>Jonas Richter</strong>"));

    snapshot_clear_command(&settings).unwrap();
    assert_eq!(snapshot_show_command(&settings).unwrap(), None);
}

#[test]
fn test_invalid_snapshot_file() {
    let dir = TempDir::new().unwrap();
    let settings = settings(dir.path());
    let path = dir.path().join("broken.json");
    fs::write(&path, "{\"firstName\": ").unwrap();

    assert!(snapshot_save_command(&settings, &path).is_err());
    assert!(preview_command(&settings, &request(Some(path), "en"), false).is_err());
}

#[test]
fn test_variants_listing() {
    let dir = TempDir::new().unwrap();
    let settings = settings(dir.path());

    let options = variants_command(
        &settings,
        Some("de"),
        PerformanceCategory::Knowledge,
        Rating::VeryGood,
    )
    .unwrap();
    let labels: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();
    assert_eq!(labels, vec!["Variante 1", "Variante 2", "Variante 3"]);

    let none = variants_command(&settings, Some("en"), PerformanceCategory::Farewell, Rating::Poor)
        .unwrap();
    assert!(none.is_empty());
}

#[test]
fn test_unknown_language() {
    let dir = TempDir::new().unwrap();
    let settings = settings(dir.path());
    let err = variants_command(&settings, Some("fr"), PerformanceCategory::Social, Rating::Good)
        .unwrap_err();
    assert!(err.to_string().contains("Failed to load catalog 'fr'"));
}
