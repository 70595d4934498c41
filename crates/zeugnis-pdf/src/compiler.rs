//! Typst to PDF compiler
//!
//! Compiles Typst markup to PDF bytes using typst-as-lib.

use tracing::debug;
use typst_as_lib::TypstEngine;

use crate::error::{PdfError, Result};

/// Compiler for converting Typst markup to PDF
pub struct Compiler;

impl Compiler {
    /// Compile Typst markup to PDF bytes
    pub fn compile(markup: &str) -> Result<Vec<u8>> {
        Self::compile_with_fonts::<&str>(markup, &[])
    }

    /// Compile with font files loaded into the engine
    pub fn compile_with_fonts<S: AsRef<str>>(markup: &str, font_paths: &[S]) -> Result<Vec<u8>> {
        let mut builder = TypstEngine::builder().main_file(markup.to_string());

        for font_path in font_paths {
            let font_path = font_path.as_ref();
            let font_bytes = std::fs::read(font_path).map_err(|e| {
                PdfError::Font(format!("Failed to read font {}: {}", font_path, e))
            })?;
            builder = builder.fonts([font_bytes]);
        }

        let engine = builder.build();

        // Warned<Result<Document, Error>>
        let compiled = engine.compile();
        debug!(warnings = compiled.warnings.len(), "Typst compilation finished");
        let document = compiled
            .output
            .map_err(|e| PdfError::Compilation(format!("{:?}", e)))?;

        let options = typst_pdf::PdfOptions::default();
        let pdf_bytes = typst_pdf::pdf(&document, &options)
            .map_err(|e| PdfError::Compilation(format!("PDF generation failed: {:?}", e)))?;

        Ok(pdf_bytes.into())
    }
}
