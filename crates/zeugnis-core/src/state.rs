//! Application state
//!
//! [`AppState`] owns the active catalog, the form snapshot, the resolved
//! section texts and the preview. Language switches are explicit two-step
//! transitions: [`AppState::begin_language_switch`] issues a numbered
//! ticket, and [`AppState::complete_load`] applies the loaded catalog only
//! if that ticket is still the newest one. Until then the previous catalog
//! and its resolved texts stay in place; a failed load changes nothing.
//!
//! Form changes go through typed setters, each of which re-resolves exactly
//! the sections its input feeds. A section's text can be edited by hand;
//! the edit stands until one of the section's inputs changes, at which
//! point the catalog text replaces it.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, info, warn};
use zeugnis_ast::{Document, SectionKind};

use crate::catalog::Catalog;
use crate::composer::{compose, StructuralFields};
use crate::error::{GenerationError, Result};
use crate::export::{export_filename_for, ExportFormat};
use crate::gate::check_required;
use crate::rating::{PerformanceCategory, Rating};
use crate::resolver::{sections_affected_by, Input, ResolvedSection, Resolver};
use crate::snapshot::{AdditionalToggles, Field, FormSnapshot};
use crate::source::CatalogSource;
use crate::variants::{variant_options, VariantOption};

/// A pending catalog load
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    seq: u64,
    language: String,
}

impl LoadTicket {
    /// Sequence number, increasing with every switch
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// Requested language
    pub fn language(&self) -> &str {
        &self.language
    }
}

/// What happened to a completed load
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The catalog is now active
    Applied {
        /// Whether the duties text was replaced or seeded
        duties_updated: bool,
    },
    /// A newer switch was started; the result was discarded
    Stale,
    /// Loading failed; the previous catalog remains active
    Failed { message: String },
}

/// What the preview pane shows
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PreviewState {
    /// Nothing generated yet
    #[default]
    Placeholder,
    /// The last generated letter
    Composed(Document),
}

/// A document ready to hand to an export adapter
#[derive(Debug, Clone, Copy)]
pub struct ExportRequest<'a> {
    pub document: &'a Document,
    pub format: ExportFormat,
}

impl ExportRequest<'_> {
    /// Download file name
    pub fn filename(&self) -> String {
        export_filename_for(self.document, self.format)
    }
}

/// The whole interactive state of one letter session
#[derive(Debug, Clone)]
pub struct AppState {
    language: String,
    catalog: Arc<Catalog>,
    latest_seq: u64,
    loaded_once: bool,
    snapshot: FormSnapshot,
    sections: BTreeMap<SectionKind, ResolvedSection>,
    preview: PreviewState,
}

impl AppState {
    /// A fresh session with no catalog loaded yet
    pub fn new(language: impl Into<String>) -> Self {
        let language = language.into();
        let mut state = Self {
            catalog: Arc::new(Catalog::empty(language.clone())),
            language,
            latest_seq: 0,
            loaded_once: false,
            snapshot: FormSnapshot::new(),
            sections: BTreeMap::new(),
            preview: PreviewState::Placeholder,
        };
        state.refresh(&SectionKind::BODY_ORDER);
        state
    }

    /// Start with a previously saved snapshot
    pub fn with_snapshot(mut self, snapshot: FormSnapshot) -> Self {
        self.snapshot = snapshot;
        self.refresh(&SectionKind::BODY_ORDER);
        self
    }

    /// Language of the active catalog
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Active catalog
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn snapshot(&self) -> &FormSnapshot {
        &self.snapshot
    }

    pub fn preview(&self) -> &PreviewState {
        &self.preview
    }

    /// Resolved text of one section
    pub fn section_text(&self, section: SectionKind) -> &str {
        self.sections.get(&section).map_or("", |r| r.text.as_str())
    }

    /// All resolved sections in body order
    pub fn resolved_sections(&self) -> Vec<ResolvedSection> {
        SectionKind::BODY_ORDER
            .iter()
            .filter_map(|s| self.sections.get(s).cloned())
            .collect()
    }

    /// Issue a ticket for loading `language`
    ///
    /// Any ticket issued earlier becomes stale.
    pub fn begin_language_switch(&mut self, language: impl Into<String>) -> LoadTicket {
        self.latest_seq += 1;
        let ticket = LoadTicket {
            seq: self.latest_seq,
            language: language.into(),
        };
        debug!(seq = ticket.seq, language = %ticket.language, "Catalog load started");
        ticket
    }

    /// Apply the result of a load started with `ticket`
    pub fn complete_load(&mut self, ticket: LoadTicket, result: Result<Catalog>) -> LoadOutcome {
        if ticket.seq != self.latest_seq {
            debug!(
                seq = ticket.seq,
                latest = self.latest_seq,
                language = %ticket.language,
                "Discarding stale catalog load"
            );
            return LoadOutcome::Stale;
        }

        let catalog = match result {
            Ok(catalog) => catalog,
            Err(e) => {
                warn!(
                    language = %ticket.language,
                    error = %e,
                    "Catalog load failed, keeping '{}'",
                    self.language
                );
                return LoadOutcome::Failed {
                    message: e.to_string(),
                };
            }
        };

        let duties_updated = self.update_duties_default(&catalog);
        self.language = ticket.language;
        self.catalog = Arc::new(catalog);
        self.loaded_once = true;
        self.apply(Input::Language, FormSnapshot::reset_variants);

        info!(language = %self.language, seq = ticket.seq, "Catalog applied");
        LoadOutcome::Applied { duties_updated }
    }

    /// Load `language` from `source` and apply it
    pub fn load_language(&mut self, source: &dyn CatalogSource, language: &str) -> LoadOutcome {
        let ticket = self.begin_language_switch(language);
        let result = source.load(language);
        self.complete_load(ticket, result)
    }

    fn update_duties_default(&mut self, next: &Catalog) -> bool {
        let duties = &self.snapshot.duties_list;
        let replace = if self.loaded_once {
            duties == self.catalog.duties_default()
        } else {
            duties.is_empty()
        };
        if replace && duties != next.duties_default() {
            self.snapshot.duties_list = next.duties_default().to_string();
            return true;
        }
        false
    }

    /// Change the snapshot, drop edits of the affected sections and
    /// re-resolve them
    fn apply<F>(&mut self, input: Input, change: F) -> Vec<SectionKind>
    where
        F: FnOnce(&mut FormSnapshot),
    {
        change(&mut self.snapshot);
        let affected = sections_affected_by(input);
        for &section in &affected {
            if self.snapshot.clear_section_text(section) {
                debug!(section = section.as_str(), "Edited text replaced");
            }
        }
        self.refresh(&affected);
        affected
    }

    /// Set a free-text field
    ///
    /// Returns the sections that were re-resolved.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> Vec<SectionKind> {
        let value = value.into();
        self.apply(Input::Field(field), |s| s.set_field(field, value))
    }

    pub fn set_intro_variant(&mut self, variant: u32) {
        self.apply(Input::IntroVariant, |s| s.selections.intro_variant = variant);
    }

    pub fn set_company_variant(&mut self, variant: u32) {
        self.apply(Input::CompanyVariant, |s| s.selections.company_variant = variant);
    }

    pub fn set_duties_variant(&mut self, variant: u32) {
        self.apply(Input::DutiesVariant, |s| s.selections.duties_variant = variant);
    }

    /// Select a rating; the variant returns to 1
    ///
    /// Returns the variant choices available under the new rating.
    pub fn set_rating(&mut self, category: PerformanceCategory, rating: Rating) -> Vec<VariantOption> {
        self.apply(Input::Rating(category), |s| s.set_rating(category, rating));
        variant_options(&self.catalog, category, rating)
    }

    /// Select a variant under the category's current rating
    pub fn set_variant(&mut self, category: PerformanceCategory, variant: u32) {
        self.apply(Input::Variant(category), |s| s.set_variant(category, variant));
    }

    /// Choose a key of `form.leavingReasons`, or none
    pub fn set_leaving_reason(&mut self, reason: Option<String>) {
        self.apply(Input::LeavingReason, |s| s.selections.leaving_reason = reason);
    }

    /// Switch the additional phrases on or off
    pub fn set_additional(&mut self, toggles: AdditionalToggles) {
        self.apply(Input::Additional, |s| s.selections.additional = toggles);
    }

    /// Replace the free-text duties
    pub fn set_duties_list(&mut self, duties: impl Into<String>) {
        let duties = duties.into();
        self.apply(Input::DutiesList, |s| s.duties_list = duties);
    }

    /// Replace a section's resolved text with an edited one
    pub fn edit_section(&mut self, section: SectionKind, text: impl Into<String>) {
        self.snapshot.set_section_text(section, text);
        self.refresh(&[section]);
    }

    fn refresh(&mut self, sections: &[SectionKind]) {
        let resolver = Resolver::new(&self.catalog);
        for &section in sections {
            if section.is_template_resolved() {
                let resolved = resolver.resolve_edited(section, &self.snapshot);
                self.sections.insert(section, resolved);
            }
        }
    }

    /// Generate the letter into the preview
    ///
    /// On refusal the previous preview is kept.
    pub fn generate(&mut self, date: NaiveDate) -> std::result::Result<&Document, GenerationError> {
        check_required(&self.snapshot, &self.language)?;

        let structural = StructuralFields::from_snapshot(&self.snapshot, &self.catalog, date);
        let doc = compose(&self.resolved_sections(), &structural);
        info!(
            language = %self.language,
            sections = doc.sections().len(),
            "Letter generated"
        );
        self.preview = PreviewState::Composed(doc);
        match &self.preview {
            PreviewState::Composed(doc) => Ok(doc),
            PreviewState::Placeholder => Err(self.no_document()),
        }
    }

    /// The composed letter, ready for export
    pub fn export_document(
        &self,
        format: ExportFormat,
    ) -> std::result::Result<ExportRequest<'_>, GenerationError> {
        match &self.preview {
            PreviewState::Composed(document) => Ok(ExportRequest { document, format }),
            PreviewState::Placeholder => {
                warn!(format = %format, "Export refused: no letter generated");
                Err(self.no_document())
            }
        }
    }

    fn no_document(&self) -> GenerationError {
        GenerationError::NoDocument {
            message: self.catalog.placeholder_message().to_string(),
        }
    }
}
