//! Required-field gate and one-shot generation

use chrono::NaiveDate;
use tracing::{info, warn};
use zeugnis_ast::Document;

use crate::catalog::Catalog;
use crate::composer::{compose, StructuralFields};
use crate::error::GenerationError;
use crate::messages::required_fields_message;
use crate::resolver::Resolver;
use crate::snapshot::{Field, FormSnapshot};

/// Required fields that are empty
///
/// A value of only spaces counts as filled in.
pub fn missing_required(snapshot: &FormSnapshot) -> Vec<Field> {
    Field::REQUIRED
        .into_iter()
        .filter(|f| snapshot.field(*f).is_empty())
        .collect()
}

/// Refuse generation unless every required field is filled in
///
/// The error message is generic; the missing field names are only logged.
pub fn check_required(snapshot: &FormSnapshot, language: &str) -> Result<(), GenerationError> {
    let missing = missing_required(snapshot);
    if missing.is_empty() {
        return Ok(());
    }
    let names: Vec<&'static str> = missing.iter().map(|f| f.name()).collect();
    warn!(missing = ?names, "Generation refused: required fields empty");
    Err(GenerationError::MissingRequiredFields {
        message: required_fields_message(language).to_string(),
        missing: names,
    })
}

/// Check the gate, resolve every section and compose the letter
///
/// Sections edited on the form keep their edited text.
pub fn generate(
    snapshot: &FormSnapshot,
    catalog: &Catalog,
    date: NaiveDate,
) -> Result<Document, GenerationError> {
    check_required(snapshot, catalog.language())?;

    let resolved = Resolver::new(catalog).resolve_all_edited(snapshot);
    let structural = StructuralFields::from_snapshot(snapshot, catalog, date);
    let doc = compose(&resolved, &structural);

    info!(
        language = catalog.language(),
        sections = doc.sections().len(),
        blocks = doc.len(),
        "Letter composed"
    );
    Ok(doc)
}
