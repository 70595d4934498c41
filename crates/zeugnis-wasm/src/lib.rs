//! zeugnis-wasm - WebAssembly bindings for zeugnis
//!
//! A browser form hands over the catalog JSON it already fetched, the form
//! snapshot as a plain object and the letter date as `YYYY-MM-DD`. The
//! letter is composed by the same engine the CLI uses.

use serde::Serialize;
use wasm_bindgen::prelude::*;
use zeugnis_ast::Document;
use zeugnis_core::dates::parse_iso_date;
use zeugnis_core::{
    export_filename_for, generate, missing_required, render_html, render_text, variant_options,
    Catalog, ExportFormat, FormSnapshot, PerformanceCategory, Rating, VariantOption,
};

/// Returns the current version of zeugnis
#[wasm_bindgen]
pub fn version() -> String {
    zeugnis_core::VERSION.to_string()
}

/// HTML preview of the letter
#[wasm_bindgen(js_name = previewHtml)]
pub fn preview_html(
    catalog_json: &str,
    language: &str,
    snapshot: JsValue,
    date: &str,
) -> Result<String, JsValue> {
    let snapshot: FormSnapshot = serde_wasm_bindgen::from_value(snapshot)?;
    compose(catalog_json, language, &snapshot, date)
        .map(|doc| render_html(&doc))
        .map_err(|e| JsValue::from_str(&e))
}

/// Plain-text rendering of the letter
#[wasm_bindgen(js_name = letterText)]
pub fn letter_text(
    catalog_json: &str,
    language: &str,
    snapshot: JsValue,
    date: &str,
) -> Result<String, JsValue> {
    let snapshot: FormSnapshot = serde_wasm_bindgen::from_value(snapshot)?;
    compose(catalog_json, language, &snapshot, date)
        .map(|doc| render_text(&doc))
        .map_err(|e| JsValue::from_str(&e))
}

/// Download name for the letter, `format` being `pdf` or `docx`
#[wasm_bindgen(js_name = exportFilename)]
pub fn export_filename(
    catalog_json: &str,
    language: &str,
    snapshot: JsValue,
    date: &str,
    format: &str,
) -> Result<String, JsValue> {
    let snapshot: FormSnapshot = serde_wasm_bindgen::from_value(snapshot)?;
    filename(catalog_json, language, &snapshot, date, format).map_err(|e| JsValue::from_str(&e))
}

/// Options for a variant picker, as `[{ index, label }]`
#[wasm_bindgen(js_name = variantOptions)]
pub fn variant_options_js(
    catalog_json: &str,
    language: &str,
    category: &str,
    rating: &str,
) -> Result<JsValue, JsValue> {
    let opts =
        options(catalog_json, language, category, rating).map_err(|e| JsValue::from_str(&e))?;
    Ok(serde_wasm_bindgen::to_value(&opts)?)
}

/// Names of required fields that are still empty
#[wasm_bindgen(js_name = missingFields)]
pub fn missing_fields(snapshot: JsValue) -> Result<JsValue, JsValue> {
    let snapshot: FormSnapshot = serde_wasm_bindgen::from_value(snapshot)?;
    Ok(serde_wasm_bindgen::to_value(&missing_names(&snapshot))?)
}

fn parse_catalog(catalog_json: &str, language: &str) -> Result<Catalog, String> {
    Catalog::from_json_str(language, catalog_json).map_err(|e| e.to_string())
}

fn compose(
    catalog_json: &str,
    language: &str,
    snapshot: &FormSnapshot,
    date: &str,
) -> Result<Document, String> {
    let catalog = parse_catalog(catalog_json, language)?;
    let date = parse_iso_date(date).ok_or_else(|| format!("Invalid date {date:?}"))?;
    generate(snapshot, &catalog, date).map_err(|e| e.message().to_string())
}

fn filename(
    catalog_json: &str,
    language: &str,
    snapshot: &FormSnapshot,
    date: &str,
    format: &str,
) -> Result<String, String> {
    let format = match format {
        "pdf" => ExportFormat::Pdf,
        "docx" => ExportFormat::Docx,
        other => return Err(format!("Unknown export format {other:?}")),
    };
    let doc = compose(catalog_json, language, snapshot, date)?;
    Ok(export_filename_for(&doc, format))
}

fn options(
    catalog_json: &str,
    language: &str,
    category: &str,
    rating: &str,
) -> Result<Vec<VariantOption>, String> {
    let catalog = parse_catalog(catalog_json, language)?;
    let category: PerformanceCategory = category.parse().map_err(|e| format!("{e}"))?;
    let rating: Rating = rating.parse().map_err(|e| format!("{e}"))?;
    Ok(variant_options(&catalog, category, rating))
}

#[derive(Serialize)]
struct MissingFields(Vec<&'static str>);

fn missing_names(snapshot: &FormSnapshot) -> MissingFields {
    MissingFields(missing_required(snapshot).iter().map(|f| f.name()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use zeugnis_core::Field;

    const EN: &str = include_str!("../../../i18n/en.json");
    const DE: &str = include_str!("../../../i18n/de.json");

    fn snapshot() -> FormSnapshot {
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
    fn test_version() {
        assert_eq!(version(), "1.0.0");
    }

    #[test]
    fn test_compose_text() {
        let doc = compose(DE, "de", &snapshot(), "2026-10-16").unwrap();
        let text = render_text(&doc);
        assert!(text.contains("Arbeitszeugnis"));
        assert!(text.contains("Hamburg, 16. Oktober 2026"));
    }

    #[test]
    fn test_compose_refuses_missing_fields() {
        let incomplete = snapshot().with_field(Field::CompanyCity, "");
        let err = compose(EN, "en", &incomplete, "2026-10-16").unwrap_err();
        assert_eq!(err, "Please fill in all required fields.");
    }

    #[test]
    fn test_compose_rejects_bad_input() {
        assert!(compose("{not json", "en", &snapshot(), "2026-10-16").is_err());
        assert_eq!(
            compose(EN, "en", &snapshot(), "16.10.2026").unwrap_err(),
            "Invalid date \"16.10.2026\""
        );
    }

    #[test]
    fn test_filename() {
        assert_eq!(
            filename(EN, "en", &snapshot(), "2026-10-16", "pdf").unwrap(),
            "Reference_Letter_Anna_Keller_2026-10-16.pdf"
        );
        assert!(filename(EN, "en", &snapshot(), "2026-10-16", "odt").is_err());
    }

    #[test]
    fn test_options() {
        let opts = options(DE, "de", "knowledge", "sehr-gut").unwrap();
        assert_eq!(opts.len(), 3);
        assert_eq!(opts[2].label, "Variante 3");
        assert!(options(EN, "en", "charisma", "gut").is_err());
        assert!(options(EN, "en", "farewell", "mangelhaft").unwrap().is_empty());
    }

    #[test]
    fn test_missing_names() {
        let incomplete = snapshot()
            .with_field(Field::FirstName, "")
            .with_field(Field::WriterPosition, "");
        assert_eq!(missing_names(&incomplete).0, vec!["firstName", "writerPosition"]);
        assert!(missing_names(&snapshot()).0.is_empty());
    }
}
