//! zeugnis CLI - Command-line interface library
//!
//! This library provides the CLI functionality for zeugnis, including:
//! - Generate: Compose a letter and export it as PDF or DOCX
//! - Preview: Print the letter as plain text or HTML
//! - Variants: List the phrase variants for a category and rating
//! - Snapshot: Save, show or clear the stored form
//!
//! # Binary Usage
//!
//! ```bash
//! # Save the form, then export it
//! zeugnis snapshot save anna.json
//! zeugnis generate --lang de --format docx --output letters/
//!
//! # Print the letter without exporting
//! zeugnis preview --snapshot anna.json
//!
//! # List knowledge variants at the top rating
//! zeugnis variants --category knowledge --rating sehr-gut
//! ```

pub mod app;
pub mod settings;

// Re-export main entry point and types
pub use app::{
    compose_letter, export_bytes, generate_command, load_catalog, load_snapshot, parse_date,
    preview_command, snapshot_clear_command, snapshot_save_command, snapshot_show_command,
    variants_command,
};
pub use app::{run_cli, GenerateOutput, LetterRequest, OutputFormat};
pub use settings::{Settings, SETTINGS_FILE};
