//! zeugnis-ast - Format-neutral letter model
//!
//! This crate provides the document types shared by the composer and every
//! renderer (plain text, HTML preview, DOCX, PDF). A composed letter is an
//! ordered list of [`Block`]s; renderers never reorder or drop blocks.

pub mod block;
pub mod document;
pub mod inline;
pub mod section;

pub use block::{Alignment, Block, BlockRole, BulletList, Paragraph};
pub use document::{Document, DocumentMeta};
pub use inline::{FormatType, Inline};
pub use section::SectionKind;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
