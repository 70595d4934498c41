//! # zeugnis-ooxml
//!
//! DOCX export for composed reference letters.
//!
//! This crate provides functionality to:
//! - Build a WordprocessingML package from a [`zeugnis_ast::Document`]
//! - Read paragraphs back out of a package for inspection
//!
//! ## Example
//!
//! ```
//! use zeugnis_ast::{Block, BlockRole, Document, Paragraph};
//! use zeugnis_ooxml::{paragraph_texts, render_docx};
//!
//! let mut doc = Document::with_title("Employment Reference Letter");
//! doc.push(Block::Paragraph(Paragraph::bold(BlockRole::Title, "Employment Reference Letter")));
//!
//! let bytes = render_docx(&doc)?;
//! assert_eq!(paragraph_texts(&bytes)?, vec!["Employment Reference Letter"]);
//! # Ok::<(), zeugnis_ooxml::OoxmlError>(())
//! ```

pub mod archive;
pub mod error;
pub mod reader;
pub mod writer;

pub use archive::OoxmlArchive;
pub use error::{OoxmlError, Result};
pub use reader::{paragraph_texts, parse_paragraphs, read_paragraphs, DocxParagraph};
pub use writer::{render_docx, DocxWriter, ParagraphFormat};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
