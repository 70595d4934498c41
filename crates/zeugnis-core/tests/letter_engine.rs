//! End-to-end tests of the letter engine against the bundled catalogs

use chrono::NaiveDate;
use zeugnis_ast::{Block, SectionKind};
use zeugnis_core::fields::fields_for;
use zeugnis_core::substitute::placeholders;
use zeugnis_core::{
    enumerate_variants, generate, render_text, AppState, Catalog, ExportFormat, Field,
    FormSnapshot, GenerationError, LoadOutcome, PerformanceCategory, Rating, Resolver,
    StaticCatalogSource,
};

const EN: &str = include_str!("../../../i18n/en.json");
const DE: &str = include_str!("../../../i18n/de.json");

fn catalogs() -> Vec<Catalog> {
    vec![
        Catalog::from_json_str("en", EN).unwrap(),
        Catalog::from_json_str("de", DE).unwrap(),
    ]
}

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
}

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
        (Field::WriterName, "Jonas Richter"),
        (Field::WriterPosition, "HR Director"),
    ] {
        snapshot.set_field(field, value);
    }
    snapshot
}

#[test]
fn test_anna_keller_generates() {
    for catalog in catalogs() {
        let doc = generate(&anna_keller(), &catalog, date()).unwrap();
        assert!(!doc.is_empty());
        assert!(doc.sections().contains(&SectionKind::Introduction));
        let text = render_text(&doc);
        assert!(text.contains("Anna"));
        assert!(text.contains("Jonas Richter"));
    }
}

#[test]
fn test_missing_writer_position_refused() {
    let snapshot = anna_keller().with_field(Field::WriterPosition, "");
    for catalog in catalogs() {
        let err = generate(&snapshot, &catalog, date()).unwrap_err();
        assert!(matches!(err, GenerationError::MissingRequiredFields { .. }));
    }

    let de = Catalog::from_json_str("de", DE).unwrap();
    let err = generate(&snapshot, &de, date()).unwrap_err();
    assert_eq!(err.to_string(), "Bitte füllen Sie alle Pflichtfelder aus.");
}

#[test]
fn test_no_supplied_placeholder_survives_any_template() {
    let mut snapshot = anna_keller();
    snapshot.set_field(Field::Title, "ms");
    snapshot.set_field(Field::Department, "Finance");

    for catalog in catalogs() {
        let resolver = Resolver::new(&catalog);
        for category in PerformanceCategory::ALL {
            for rating in Rating::ALL {
                let count = enumerate_variants(&catalog, category, rating) as u32;
                for variant in 1..=count {
                    let mut s = snapshot.clone();
                    s.set_rating(category, rating);
                    s.set_variant(category, variant);

                    let resolved = resolver.resolve(category.section(), &s);
                    assert!(!resolved.is_empty(), "{category}/{rating}/{variant}");
                    let supplied: Vec<&str> =
                        fields_for(category.section()).iter().map(|f| f.name()).collect();
                    for name in placeholders(&resolved.text) {
                        assert!(!supplied.contains(&name), "{{{name}}} left in {category}");
                    }
                }
            }
        }
    }
}

#[test]
fn test_catalog_templates_only_use_supplied_fields() {
    for catalog in catalogs() {
        let resolver_sections = [
            ("introductionVariants", SectionKind::Introduction),
            ("companyExamples", SectionKind::CompanyDescription),
            ("dutiesVariants", SectionKind::DutiesIntro),
            ("leavingReasons", SectionKind::Leaving),
            ("additionalPhrases", SectionKind::Additional),
        ];
        for (key, section) in resolver_sections {
            let supplied: Vec<&str> = fields_for(section).iter().map(|f| f.name()).collect();
            let map = catalog.map(&["form", key]).unwrap();
            for node in map.values() {
                let template = node.as_template().unwrap();
                for name in placeholders(template) {
                    assert!(
                        supplied.contains(&name),
                        "{}: {key} uses {{{name}}}",
                        catalog.language()
                    );
                }
            }
        }
    }
}

#[test]
fn test_variant_count_matches_catalog_keys() {
    for catalog in catalogs() {
        for category in PerformanceCategory::ALL {
            for rating in Rating::ALL {
                let expected = catalog
                    .map(&["form", category.catalog_key().as_str(), rating.key()])
                    .map_or(0, |m| m.len());
                assert_eq!(enumerate_variants(&catalog, category, rating), expected);
            }
        }
        assert_eq!(
            enumerate_variants(&catalog, PerformanceCategory::Knowledge, Rating::VeryGood),
            3
        );
    }
}

#[test]
fn test_catalog_gap_gives_empty_section() {
    let catalog = Catalog::from_json_str("en", EN).unwrap();
    let mut snapshot = anna_keller();
    snapshot.set_rating(PerformanceCategory::Farewell, Rating::Poor);

    assert_eq!(
        enumerate_variants(&catalog, PerformanceCategory::Farewell, Rating::Poor),
        0
    );
    let doc = generate(&snapshot, &catalog, date()).unwrap();
    assert!(!doc.sections().contains(&SectionKind::Farewell));
    assert!(doc.sections().contains(&SectionKind::Social));
}

#[test]
fn test_duty_list_example() {
    let catalog = Catalog::from_json_str("en", EN).unwrap();
    let mut snapshot = anna_keller();
    snapshot.duties_list = "- Managed client onboarding\n\n• Led a team of 4\n".to_string();

    let doc = generate(&snapshot, &catalog, date()).unwrap();
    let bullets = doc
        .blocks
        .iter()
        .find_map(|b| match b {
            Block::BulletList(list) => Some(list.items.clone()),
            _ => None,
        })
        .unwrap();
    assert_eq!(bullets, vec!["Managed client onboarding", "Led a team of 4"]);
}

#[test]
fn test_omission_never_reorders() {
    let catalog = Catalog::from_json_str("en", EN).unwrap();
    let mut full = anna_keller();
    full.duties_list = "- Reporting".to_string();
    full.selections.leaving_reason = Some("ownRequest".to_string());
    full.selections.additional.application = true;

    let full_sections = generate(&full, &catalog, date()).unwrap().sections();
    assert_eq!(full_sections, SectionKind::BODY_ORDER.to_vec());

    let mut sparse = full.clone();
    sparse.selections.leaving_reason = None;
    sparse.selections.additional.application = false;
    sparse.duties_list.clear();
    sparse.set_rating(PerformanceCategory::Farewell, Rating::Poor);

    let sparse_sections = generate(&sparse, &catalog, date()).unwrap().sections();
    let expected: Vec<SectionKind> = full_sections
        .iter()
        .copied()
        .filter(|s| {
            !matches!(
                s,
                SectionKind::Leaving
                    | SectionKind::Additional
                    | SectionKind::DutiesList
                    | SectionKind::Farewell
            )
        })
        .collect();
    assert_eq!(sparse_sections, expected);
}

#[test]
fn test_language_switch_duties_rule() {
    let source = StaticCatalogSource::new().with("en", EN).with("de", DE);
    let en = Catalog::from_json_str("en", EN).unwrap();
    let de = Catalog::from_json_str("de", DE).unwrap();

    let mut state = AppState::new("en");
    assert!(matches!(
        state.load_language(&source, "en"),
        LoadOutcome::Applied { .. }
    ));
    assert_eq!(state.snapshot().duties_list, en.duties_default());

    state.load_language(&source, "de");
    assert_eq!(state.snapshot().duties_list, de.duties_default());

    let duties = format!("{}\n• Eigene Aufgabe", state.snapshot().duties_list);
    state.set_duties_list(duties);
    let custom = state.snapshot().duties_list.clone();
    state.load_language(&source, "en");
    assert_eq!(state.snapshot().duties_list, custom);
}

#[test]
fn test_language_switch_keeps_ratings() {
    let source = StaticCatalogSource::new().with("en", EN).with("de", DE);
    let de = Catalog::from_json_str("de", DE).unwrap();

    let mut state = AppState::new("en").with_snapshot(anna_keller());
    state.load_language(&source, "en");
    state.set_rating(PerformanceCategory::Knowledge, Rating::Good);
    state.set_variant(PerformanceCategory::Knowledge, 2);
    state.load_language(&source, "de");

    let perf = state.snapshot().performance(PerformanceCategory::Knowledge);
    assert_eq!(perf.rating, Rating::Good);
    assert_eq!(perf.variant, 1);

    let mut expected = anna_keller();
    expected.set_rating(PerformanceCategory::Knowledge, Rating::Good);
    let gut = Resolver::new(&de).resolve(SectionKind::Knowledge, &expected);
    assert!(!gut.text.is_empty());
    assert_eq!(state.section_text(SectionKind::Knowledge), gut.text);
}

#[test]
fn test_failed_switch_keeps_language() {
    let source = StaticCatalogSource::new().with("en", EN).with("broken", "{");
    let mut state = AppState::new("en");
    state.load_language(&source, "en");

    assert!(matches!(
        state.load_language(&source, "fr"),
        LoadOutcome::Failed { .. }
    ));
    assert!(matches!(
        state.load_language(&source, "broken"),
        LoadOutcome::Failed { .. }
    ));
    assert_eq!(state.language(), "en");
}

#[test]
fn test_export_requires_generation() {
    let source = StaticCatalogSource::new().with("de", DE);
    let mut state = AppState::new("de").with_snapshot(anna_keller());
    state.load_language(&source, "de");

    for format in [ExportFormat::Pdf, ExportFormat::Docx] {
        let err = state.export_document(format).unwrap_err();
        assert_eq!(err.message(), "Bitte erstellen Sie zuerst das Zeugnis");
    }

    state.generate(date()).unwrap();
    let request = state.export_document(ExportFormat::Docx).unwrap();
    assert_eq!(
        request.filename(),
        "Reference_Letter_Anna_Keller_2026-10-16.docx"
    );
    assert_eq!(request.document.metadata.title.as_deref(), Some("Arbeitszeugnis"));
}

#[test]
fn test_german_letter_text() {
    let catalog = Catalog::from_json_str("de", DE).unwrap();
    let snapshot = anna_keller().with_field(Field::Title, "ms");
    let text = render_text(&generate(&snapshot, &catalog, date()).unwrap());

    assert!(text.contains("Hamburg, 16. Oktober 2026"));
    assert!(text.contains("Arbeitszeugnis"));
    assert!(text.contains("Frau Anna Keller"));
    assert!(text.contains("_______________________\nJonas Richter\nHR Director"));
}
