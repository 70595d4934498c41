//! zeugnis-pdf - PDF export via Typst
//!
//! # Architecture
//!
//! The PDF pipeline has three stages:
//!
//! 1. **Layout** - Wraps the plain-text letter to the page width using
//!    Helvetica metrics and breaks it into pages
//! 2. **Transpiler** - Places every laid-out line in Typst markup
//! 3. **Compiler** - Compiles Typst markup to PDF bytes
//!
//! # Example
//!
//! ```no_run
//! use zeugnis_ast::Document;
//! use zeugnis_pdf::{render_pdf, PdfConfig};
//!
//! let doc = Document::with_title("Employment Reference Letter");
//! let pdf = render_pdf(&doc, &PdfConfig::default())?;
//! # Ok::<(), zeugnis_pdf::PdfError>(())
//! ```

mod compiler;
mod config;
mod error;
pub mod layout;
pub mod metrics;
mod transpiler;

pub use compiler::Compiler;
pub use config::{PdfConfig, MM_PER_PT};
pub use error::{PdfError, Result};
pub use layout::{layout, Page, PlacedLine};
pub use transpiler::Transpiler;

use tracing::info;
use zeugnis_ast::Document;

/// Lay out a composed letter without compiling it
pub fn layout_document(doc: &Document, config: &PdfConfig) -> Vec<Page> {
    layout(&zeugnis_core::render_text(doc), config)
}

/// Typst markup for a composed letter
pub fn typst_markup(doc: &Document, config: &PdfConfig) -> String {
    Transpiler::transpile(&doc.metadata, &layout_document(doc, config), config)
}

/// Render a composed letter to PDF bytes
pub fn render_pdf(doc: &Document, config: &PdfConfig) -> Result<Vec<u8>> {
    let pages = layout_document(doc, config);
    let markup = Transpiler::transpile(&doc.metadata, &pages, config);
    let pdf = Compiler::compile_with_fonts(&markup, &config.font_paths)?;
    info!(pages = pages.len(), bytes = pdf.len(), "PDF rendered");
    Ok(pdf)
}
