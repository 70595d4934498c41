//! zeugnis-core - Employment reference letter engine
//!
//! Resolves catalog templates against a form snapshot and composes the
//! letter as a format-neutral [`zeugnis_ast::Document`].
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use zeugnis_core::{generate, render_text, Catalog, Field, FormSnapshot};
//!
//! let catalog = Catalog::from_json_str(
//!     "en",
//!     r#"{"form": {"introductionVariants": {"1": "{firstName} {lastName} joined us as {position}."}}}"#,
//! )
//! .unwrap();
//!
//! let mut snapshot = FormSnapshot::new();
//! for (field, value) in [
//!     (Field::FirstName, "Anna"),
//!     (Field::LastName, "Keller"),
//!     (Field::Position, "Senior Analyst"),
//!     (Field::StartDate, "2021-03-01"),
//!     (Field::EndDate, "2023-06-30"),
//!     (Field::CompanyName, "Nordic Tech AG"),
//!     (Field::CompanyCity, "Hamburg"),
//!     (Field::WriterName, "Jonas Richter"),
//!     (Field::WriterPosition, "HR Director"),
//! ] {
//!     snapshot.set_field(field, value);
//! }
//!
//! let date = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
//! let doc = generate(&snapshot, &catalog, date).unwrap();
//! assert!(render_text(&doc).contains("Anna Keller joined us as Senior Analyst."));
//! ```

pub mod catalog;
pub mod composer;
pub mod dates;
pub mod duties;
pub mod error;
pub mod export;
pub mod fields;
pub mod gate;
pub mod messages;
pub mod persist;
pub mod rating;
pub mod render;
pub mod resolver;
pub mod snapshot;
pub mod source;
pub mod state;
pub mod substitute;
pub mod variants;

// Re-export main types and functions
pub use catalog::{Catalog, CatalogNode};
pub use composer::{compose, StructuralFields};
pub use duties::derive_duty_bullets;
pub use error::{CoreError, GenerationError, Result};
pub use export::{export_filename, export_filename_for, ExportFormat};
pub use gate::{check_required, generate, missing_required};
pub use persist::{FileStore, KeyValueStore, MemoryStore, SnapshotStore, SNAPSHOT_SLOT};
pub use rating::{PerformanceCategory, Rating};
pub use render::{render_html, render_text, HtmlPreviewRenderer, PlainTextRenderer};
pub use resolver::{sections_affected_by, Input, ResolvedSection, Resolver};
pub use snapshot::{AdditionalToggles, Field, FormSnapshot, PerformanceSelection};
pub use source::{CatalogSource, DirCatalogSource, StaticCatalogSource};
pub use state::{AppState, ExportRequest, LoadOutcome, LoadTicket, PreviewState};
pub use substitute::{substitute, FieldValues};
pub use variants::{enumerate_variants, variant_options, VariantOption};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
