//! Selection resolver
//!
//! Turns the snapshot's selections into catalog paths, looks the templates
//! up and substitutes the section's field subset. A missing template yields
//! an empty section, which the composer later omits.
//!
//! Every section is a pure function of `(snapshot, catalog)`. The
//! [`sections_affected_by`] table lets a caller re-resolve only what an
//! input change can affect; resolving everything gives the same result.

use tracing::debug;
use zeugnis_ast::SectionKind;

use crate::catalog::{Catalog, FORM};
use crate::fields::{field_values, fields_for};
use crate::rating::PerformanceCategory;
use crate::snapshot::{Field, FormSnapshot};
use crate::substitute::substitute;

/// Additional-phrase keys in the order they are joined
pub const ADDITIONAL_PHRASES: [&str; 2] = ["application", "offer"];

/// A section's resolved text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSection {
    pub section: SectionKind,
    pub text: String,
}

impl ResolvedSection {
    /// Whether the section renders as nothing
    ///
    /// Only an empty string counts; whitespace is still emitted.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Resolves sections against one catalog
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    catalog: &'a Catalog,
}

impl<'a> Resolver<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Catalog path of the template selected for `section`
    ///
    /// `None` for sections without a single template: the duties list,
    /// the additional phrases, and the leaving section with no reason set.
    pub fn template_path(section: SectionKind, snapshot: &FormSnapshot) -> Option<Vec<String>> {
        let sel = &snapshot.selections;
        let path = match section {
            SectionKind::Introduction => vec![
                FORM.to_string(),
                "introductionVariants".to_string(),
                sel.intro_variant.to_string(),
            ],
            SectionKind::CompanyDescription => vec![
                FORM.to_string(),
                "companyExamples".to_string(),
                sel.company_variant.to_string(),
            ],
            SectionKind::DutiesIntro => vec![
                FORM.to_string(),
                "dutiesVariants".to_string(),
                sel.duties_variant.to_string(),
            ],
            SectionKind::Leaving => vec![
                FORM.to_string(),
                "leavingReasons".to_string(),
                sel.leaving_reason.clone().filter(|r| !r.is_empty())?,
            ],
            SectionKind::DutiesList | SectionKind::Additional => return None,
            rated => {
                let category = PerformanceCategory::from_section(rated)?;
                let choice = snapshot.performance(category);
                vec![
                    FORM.to_string(),
                    category.catalog_key(),
                    choice.rating.key().to_string(),
                    choice.variant.to_string(),
                ]
            }
        };
        Some(path)
    }

    /// Unsubstituted template text for `section`, if the catalog has it
    fn template(&self, section: SectionKind, snapshot: &FormSnapshot) -> Option<String> {
        if section == SectionKind::Additional {
            return self.additional_template(snapshot);
        }
        let path = Self::template_path(section, snapshot)?;
        let found = self.catalog.template(&path);
        if found.is_none() {
            debug!(
                section = section.as_str(),
                path = %path.join("."),
                language = self.catalog.language(),
                "Template not found"
            );
        }
        found.map(str::to_string)
    }

    fn additional_template(&self, snapshot: &FormSnapshot) -> Option<String> {
        let toggles = snapshot.selections.additional;
        let enabled = [toggles.application, toggles.offer];
        let phrases: Vec<&str> = ADDITIONAL_PHRASES
            .into_iter()
            .zip(enabled)
            .filter(|(_, on)| *on)
            .filter_map(|(key, _)| {
                let phrase = self.catalog.template(&[FORM, "additionalPhrases", key]);
                if phrase.is_none() {
                    debug!(phrase = key, "Additional phrase not found");
                }
                phrase
            })
            .collect();
        if phrases.is_empty() {
            None
        } else {
            Some(phrases.join(" "))
        }
    }

    /// Resolve one section
    pub fn resolve(&self, section: SectionKind, snapshot: &FormSnapshot) -> ResolvedSection {
        let text = self
            .template(section, snapshot)
            .map(|template| {
                substitute(&template, &field_values(section, snapshot, self.catalog))
            })
            .unwrap_or_default();
        ResolvedSection { section, text }
    }

    /// Resolve every template-backed section in body order
    pub fn resolve_all(&self, snapshot: &FormSnapshot) -> Vec<ResolvedSection> {
        SectionKind::BODY_ORDER
            .into_iter()
            .filter(|s| s.is_template_resolved())
            .map(|s| self.resolve(s, snapshot))
            .collect()
    }

    /// Resolve one section, preferring text edited on the form
    pub fn resolve_edited(&self, section: SectionKind, snapshot: &FormSnapshot) -> ResolvedSection {
        match snapshot.section_text(section) {
            Some(text) => ResolvedSection {
                section,
                text: text.to_string(),
            },
            None => self.resolve(section, snapshot),
        }
    }

    /// [`resolve_all`](Self::resolve_all) with edited texts taking precedence
    pub fn resolve_all_edited(&self, snapshot: &FormSnapshot) -> Vec<ResolvedSection> {
        SectionKind::BODY_ORDER
            .into_iter()
            .filter(|s| s.is_template_resolved())
            .map(|s| self.resolve_edited(s, snapshot))
            .collect()
    }
}

/// A change on the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// A new catalog became active
    Language,
    /// A free-text field was edited
    Field(Field),
    IntroVariant,
    CompanyVariant,
    DutiesVariant,
    Rating(PerformanceCategory),
    Variant(PerformanceCategory),
    LeavingReason,
    /// An additional-phrase toggle
    Additional,
    /// The free-text duties were edited
    DutiesList,
}

/// Sections whose resolved text may change when `input` changes
pub fn sections_affected_by(input: Input) -> Vec<SectionKind> {
    match input {
        Input::Language => SectionKind::BODY_ORDER.to_vec(),
        Input::Field(field) => SectionKind::BODY_ORDER
            .into_iter()
            .filter(|s| fields_for(*s).contains(&field))
            .collect(),
        Input::IntroVariant => vec![SectionKind::Introduction],
        Input::CompanyVariant => vec![SectionKind::CompanyDescription],
        Input::DutiesVariant => vec![SectionKind::DutiesIntro],
        Input::Rating(category) | Input::Variant(category) => vec![category.section()],
        Input::LeavingReason => vec![SectionKind::Leaving],
        Input::Additional => vec![SectionKind::Additional],
        Input::DutiesList => vec![SectionKind::DutiesList],
    }
}
