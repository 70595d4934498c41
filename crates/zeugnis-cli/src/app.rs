//! CLI Application logic
//!
//! Contains the command-line interface implementation.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;

use zeugnis_ast::Document;
use zeugnis_core::dates::parse_iso_date;
use zeugnis_core::{
    export_filename_for, generate, render_html, render_text, variant_options, Catalog,
    CatalogSource, DirCatalogSource, ExportFormat, FileStore, FormSnapshot, PerformanceCategory,
    Rating, SnapshotStore, VariantOption,
};
use zeugnis_ooxml::render_docx;
use zeugnis_pdf::{render_pdf, PdfConfig};

use crate::settings::{Settings, SETTINGS_FILE};

/// Output format for generated letters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// PDF file
    #[default]
    Pdf,
    /// Word document
    Docx,
    /// Plain text on stdout
    Text,
    /// HTML preview markup on stdout
    Html,
}

impl OutputFormat {
    /// The file export this format writes, if any
    pub fn export_format(self) -> Option<ExportFormat> {
        match self {
            OutputFormat::Pdf => Some(ExportFormat::Pdf),
            OutputFormat::Docx => Some(ExportFormat::Docx),
            OutputFormat::Text | OutputFormat::Html => None,
        }
    }
}

#[derive(Parser)]
#[command(name = "zeugnis")]
#[command(author, version, about = "Employment reference letters from phrase catalogs", long_about = None)]
struct Cli {
    /// Settings file
    #[arg(short, long, global = true, default_value = SETTINGS_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the letter and export it
    Generate {
        /// Form snapshot JSON (defaults to the saved snapshot)
        #[arg(short, long)]
        snapshot: Option<PathBuf>,

        /// Catalog language
        #[arg(short, long)]
        lang: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "pdf")]
        format: OutputFormat,

        /// Output directory
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Letter date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,
    },

    /// Print the letter to stdout
    Preview {
        /// Form snapshot JSON (defaults to the saved snapshot)
        #[arg(short, long)]
        snapshot: Option<PathBuf>,

        /// Catalog language
        #[arg(short, long)]
        lang: Option<String>,

        /// Letter date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,

        /// Print HTML preview markup instead of plain text
        #[arg(long)]
        html: bool,
    },

    /// List the variants a catalog offers for a category and rating
    Variants {
        /// Performance category (e.g. knowledge, social, farewell)
        #[arg(long)]
        category: PerformanceCategory,

        /// Rating key (sehr-gut, gut, befriedigend, ausreichend, mangelhaft)
        #[arg(long)]
        rating: Rating,

        /// Catalog language
        #[arg(short, long)]
        lang: Option<String>,
    },

    /// Manage the saved form snapshot
    Snapshot {
        #[command(subcommand)]
        action: SnapshotAction,
    },
}

#[derive(Subcommand)]
enum SnapshotAction {
    /// Save a snapshot JSON file as the current form
    Save {
        /// Snapshot JSON file
        input: PathBuf,
    },
    /// Print the saved snapshot
    Show,
    /// Delete the saved snapshot
    Clear,
}

/// Inputs shared by every command that composes a letter
#[derive(Debug, Clone, Default)]
pub struct LetterRequest {
    /// Snapshot file; `None` uses the saved snapshot
    pub snapshot: Option<PathBuf>,
    /// Catalog language; `None` uses the configured default
    pub language: Option<String>,
    /// Letter date; `None` is today
    pub date: Option<NaiveDate>,
}

/// What `generate` produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateOutput {
    /// A file was written
    File(PathBuf),
    /// Text to print
    Printed(String),
}

/// Run the CLI application
///
/// This is the main entry point for the command-line interface.
/// It parses arguments and dispatches to the appropriate command.
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load(&cli.config)?;

    match cli.command {
        Commands::Generate {
            snapshot,
            lang,
            format,
            output,
            date,
        } => {
            let request = LetterRequest {
                snapshot,
                language: lang,
                date: parse_date(date.as_deref())?,
            };
            match generate_command(&settings, &request, format, output.as_deref())? {
                GenerateOutput::File(path) => println!("Created: {}", path.display()),
                GenerateOutput::Printed(text) => println!("{text}"),
            }
        }
        Commands::Preview {
            snapshot,
            lang,
            date,
            html,
        } => {
            let request = LetterRequest {
                snapshot,
                language: lang,
                date: parse_date(date.as_deref())?,
            };
            println!("{}", preview_command(&settings, &request, html)?);
        }
        Commands::Variants {
            category,
            rating,
            lang,
        } => {
            let options = variants_command(&settings, lang.as_deref(), category, rating)?;
            if options.is_empty() {
                println!("No variants for {category} at {rating}");
            }
            for option in options {
                println!("{}\t{}", option.index, option.label);
            }
        }
        Commands::Snapshot { action } => match action {
            SnapshotAction::Save { input } => {
                snapshot_save_command(&settings, &input)?;
                println!("Saved snapshot from {}", input.display());
            }
            SnapshotAction::Show => match snapshot_show_command(&settings)? {
                Some(json) => println!("{json}"),
                None => println!("No saved snapshot"),
            },
            SnapshotAction::Clear => {
                snapshot_clear_command(&settings)?;
                println!("Snapshot cleared");
            }
        },
    }

    Ok(())
}

/// Parse a `YYYY-MM-DD` date; `None` is today
pub fn parse_date(value: Option<&str>) -> Result<Option<NaiveDate>> {
    match value {
        None => Ok(None),
        Some(text) => match parse_iso_date(text) {
            Some(date) => Ok(Some(date)),
            None => bail!("Invalid date {text:?}, expected YYYY-MM-DD"),
        },
    }
}

/// Load the catalog for `language`, or the configured default
pub fn load_catalog(settings: &Settings, language: Option<&str>) -> Result<Catalog> {
    let language = language.unwrap_or(settings.catalog.default_language.as_str());
    let source = DirCatalogSource::new(&settings.catalog.dir);
    source.load(language).with_context(|| {
        format!(
            "Failed to load catalog '{}' from {}",
            language,
            settings.catalog.dir.display()
        )
    })
}

fn snapshot_store(settings: &Settings) -> SnapshotStore<FileStore> {
    SnapshotStore::new(FileStore::new(&settings.storage.dir))
}

fn read_snapshot_file(path: &Path) -> Result<FormSnapshot> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read snapshot: {}", path.display()))?;
    serde_json::from_str(&json)
        .with_context(|| format!("Invalid snapshot JSON: {}", path.display()))
}

/// Load the snapshot named by `request`, or the saved one
pub fn load_snapshot(settings: &Settings, request: &LetterRequest) -> Result<FormSnapshot> {
    if let Some(path) = &request.snapshot {
        return read_snapshot_file(path);
    }
    match snapshot_store(settings).load()? {
        Some(snapshot) => Ok(snapshot),
        None => bail!("No saved snapshot; pass --snapshot or run `zeugnis snapshot save`"),
    }
}

/// Compose the letter described by `request`
///
/// Fails with the catalog-language message if a required field is empty.
pub fn compose_letter(settings: &Settings, request: &LetterRequest) -> Result<Document> {
    let catalog = load_catalog(settings, request.language.as_deref())?;
    let snapshot = load_snapshot(settings, request)?;
    let date = request.date.unwrap_or_else(|| Local::now().date_naive());
    Ok(generate(&snapshot, &catalog, date)?)
}

/// Bytes of `doc` in an export format
pub fn export_bytes(doc: &Document, format: ExportFormat, pdf: &PdfConfig) -> Result<Vec<u8>> {
    match format {
        ExportFormat::Pdf => render_pdf(doc, pdf).context("PDF export failed"),
        ExportFormat::Docx => render_docx(doc).context("DOCX export failed"),
    }
}

/// Execute the generate command
pub fn generate_command(
    settings: &Settings,
    request: &LetterRequest,
    format: OutputFormat,
    output_dir: Option<&Path>,
) -> Result<GenerateOutput> {
    let doc = compose_letter(settings, request)?;

    let Some(export) = format.export_format() else {
        let text = match format {
            OutputFormat::Html => render_html(&doc),
            _ => render_text(&doc),
        };
        return Ok(GenerateOutput::Printed(text));
    };

    let bytes = export_bytes(&doc, export, &settings.pdf)?;
    let dir = output_dir.unwrap_or(settings.output.dir.as_path());
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;

    let path = dir.join(export_filename_for(&doc, export));
    fs::write(&path, bytes)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!(path = %path.display(), format = %export, "Letter exported");
    Ok(GenerateOutput::File(path))
}

/// Execute the preview command
pub fn preview_command(settings: &Settings, request: &LetterRequest, html: bool) -> Result<String> {
    let doc = compose_letter(settings, request)?;
    Ok(if html {
        render_html(&doc)
    } else {
        render_text(&doc)
    })
}

/// Execute the variants command
pub fn variants_command(
    settings: &Settings,
    language: Option<&str>,
    category: PerformanceCategory,
    rating: Rating,
) -> Result<Vec<VariantOption>> {
    let catalog = load_catalog(settings, language)?;
    Ok(variant_options(&catalog, category, rating))
}

/// Save a snapshot file into the store
pub fn snapshot_save_command(settings: &Settings, input: &Path) -> Result<()> {
    let snapshot = read_snapshot_file(input)?;
    snapshot_store(settings)
        .save(&snapshot)
        .context("Failed to save snapshot")
}

/// The saved snapshot as pretty JSON, if any
pub fn snapshot_show_command(settings: &Settings) -> Result<Option<String>> {
    match snapshot_store(settings).load()? {
        Some(snapshot) => Ok(Some(serde_json::to_string_pretty(&snapshot)?)),
        None => Ok(None),
    }
}

/// Delete the saved snapshot
pub fn snapshot_clear_command(settings: &Settings) -> Result<()> {
    snapshot_store(settings)
        .clear()
        .context("Failed to clear snapshot")
}
