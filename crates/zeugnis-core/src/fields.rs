//! Per-section field subsets
//!
//! Each template-resolved section substitutes a fixed set of fields. The
//! `{title}` value is the catalog's display string for the chosen title
//! key, not the key itself.

use zeugnis_ast::SectionKind;

use crate::catalog::{Catalog, FORM};
use crate::snapshot::{Field, FormSnapshot};
use crate::substitute::FieldValues;

const INTRODUCTION: &[Field] = &[
    Field::Title,
    Field::FirstName,
    Field::LastName,
    Field::DateOfBirth,
    Field::PlaceOfBirth,
    Field::Position,
    Field::Department,
    Field::StartDate,
    Field::EndDate,
];

const COMPANY: &[Field] = &[Field::CompanyName, Field::CompanyCity];

const DUTIES_INTRO: &[Field] = &[
    Field::Title,
    Field::FirstName,
    Field::Position,
    Field::Department,
];

const PERFORMANCE: &[Field] = &[
    Field::Title,
    Field::FirstName,
    Field::LastName,
    Field::Position,
    Field::Department,
];

const LEAVING: &[Field] = &[Field::Title, Field::FirstName, Field::LastName, Field::EndDate];

const ADDITIONAL: &[Field] = &[Field::Title, Field::FirstName, Field::LastName];

/// Fields substituted into `section`'s template
pub fn fields_for(section: SectionKind) -> &'static [Field] {
    match section {
        SectionKind::Introduction => INTRODUCTION,
        SectionKind::CompanyDescription => COMPANY,
        SectionKind::DutiesIntro => DUTIES_INTRO,
        SectionKind::DutiesList => &[],
        SectionKind::Knowledge
        | SectionKind::Willingness
        | SectionKind::Workstyle
        | SectionKind::Quality
        | SectionKind::Resilience
        | SectionKind::Leadership
        | SectionKind::Overall
        | SectionKind::Social
        | SectionKind::Farewell => PERFORMANCE,
        SectionKind::Leaving => LEAVING,
        SectionKind::Additional => ADDITIONAL,
    }
}

/// Display string for the snapshot's title key
///
/// Empty when no title is chosen or the catalog has no title options;
/// an unknown key is shown as-is.
pub fn translated_title<'a>(snapshot: &'a FormSnapshot, catalog: &'a Catalog) -> &'a str {
    let key = snapshot.employee.title.as_str();
    if key.is_empty() || catalog.map(&[FORM, "titleOptions"]).is_none() {
        return "";
    }
    catalog.title_option(key).unwrap_or(key)
}

/// Field values for one section's substitution pass
pub fn field_values(section: SectionKind, snapshot: &FormSnapshot, catalog: &Catalog) -> FieldValues {
    fields_for(section)
        .iter()
        .map(|&field| {
            let value = match field {
                Field::Title => translated_title(snapshot, catalog),
                other => snapshot.field(other),
            };
            (field.name(), value.to_string())
        })
        .collect()
}
