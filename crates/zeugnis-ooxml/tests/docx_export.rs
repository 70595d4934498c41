//! DOCX export of letters composed from the bundled catalogs

use chrono::NaiveDate;
use zeugnis_core::{generate, render_text, Catalog, Field, FormSnapshot};
use zeugnis_ooxml::{read_paragraphs, render_docx, OoxmlArchive};

const EN: &str = include_str!("../../../i18n/en.json");
const DE: &str = include_str!("../../../i18n/de.json");

fn anna_keller() -> FormSnapshot {
    let mut snapshot = FormSnapshot::new();
    for (field, value) in [
        (Field::FirstName, "Anna"),
        (Field::LastName, "Keller"),
        (Field::Position, "Senior Analyst"),
        (Field::StartDate, "2021-03-01"),
        (Field::EndDate, "2023-06-30"),
        (Field::CompanyName, "Nordic Tech AG"),
        (Field::CompanyCity, "Hamburg"),
        (Field::CompanyEmail, "hr@nordic.example"),
        (Field::ReferenceNumber, "NT-2023-17"),
        (Field::WriterName, "Jonas Richter"),
        (Field::WriterPosition, "HR Director"),
        (Field::WriterPhone, "+49 40 1234"),
    ] {
        snapshot.set_field(field, value);
    }
    snapshot.duties_list = "- Monthly reporting\n• Budget planning".to_string();
    snapshot
}

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
}

#[test]
fn test_docx_matches_plain_text() {
    for (lang, json) in [("en", EN), ("de", DE)] {
        let catalog = Catalog::from_json_str(lang, json).unwrap();
        let doc = generate(&anna_keller(), &catalog, date()).unwrap();

        let docx: Vec<String> = read_paragraphs(&render_docx(&doc).unwrap())
            .unwrap()
            .into_iter()
            .map(|p| p.text)
            .filter(|t| !t.is_empty())
            .collect();
        let text = render_text(&doc);
        let lines: Vec<&str> = text.lines().filter(|l| !l.is_empty()).collect();

        assert_eq!(docx, lines, "{lang}");
    }
}

#[test]
fn test_docx_layout() {
    let catalog = Catalog::from_json_str("en", EN).unwrap();
    let doc = generate(&anna_keller(), &catalog, date()).unwrap();
    let paragraphs = read_paragraphs(&render_docx(&doc).unwrap()).unwrap();

    let find = |text: &str| {
        paragraphs
            .iter()
            .find(|p| p.text == text)
            .unwrap_or_else(|| panic!("missing paragraph {text:?}"))
    };

    let company = &paragraphs[0];
    assert_eq!(company.text, "Nordic Tech AG");
    assert!(company.bold);
    assert_eq!(company.size, Some(22));

    let reference = find("Ref: NT-2023-17");
    assert_eq!(reference.justification.as_deref(), Some("right"));
    assert_eq!(reference.size, Some(20));

    let title = find("Employment Reference Letter");
    assert_eq!(title.justification.as_deref(), Some("center"));
    assert_eq!(title.size, Some(28));
    assert!(title.bold);

    let bullet = find("• Budget planning");
    assert_eq!(bullet.size, Some(22));
    assert_eq!(bullet.justification.as_deref(), Some("both"));

    let bullet_at = paragraphs
        .iter()
        .position(|p| p.text == "• Budget planning")
        .unwrap();
    assert_eq!(paragraphs[bullet_at + 1].text, "");

    assert!(find("Jonas Richter").bold);
    assert_eq!(find("+49 40 1234").size, Some(20));
}

#[test]
fn test_docx_metadata() {
    let catalog = Catalog::from_json_str("de", DE).unwrap();
    let doc = generate(&anna_keller(), &catalog, date()).unwrap();
    let archive = OoxmlArchive::from_bytes(&render_docx(&doc).unwrap()).unwrap();

    let core = archive.get_string("docProps/core.xml").unwrap();
    assert!(core.contains("<dc:title>Arbeitszeugnis</dc:title>"));
    assert!(core.contains("<dc:creator>Jonas Richter</dc:creator>"));
    assert!(core.contains("<dc:language>de</dc:language>"));

    let document = archive.get_string("word/document.xml").unwrap();
    assert!(document.contains("w:left=\"1440\""));
}
