//! Configuration Settings
//!
//! Settings are loaded from `zeugnis.toml` in the working directory. A
//! missing file means defaults; every section and key is optional.
//!
//! ```toml
//! [catalog]
//! dir = "i18n"
//! default_language = "de"
//!
//! [output]
//! dir = "letters"
//!
//! [storage]
//! dir = ".zeugnis"
//!
//! [pdf]
//! font_size_pt = 9
//! margin_mm = 15
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;
use zeugnis_pdf::PdfConfig;

/// Default settings file name
pub const SETTINGS_FILE: &str = "zeugnis.toml";

/// Top-level settings structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    /// Where catalogs live and which one to use
    pub catalog: CatalogSettings,
    /// Where exported letters are written
    pub output: OutputSettings,
    /// Where the form snapshot is kept
    pub storage: StorageSettings,
    /// PDF page geometry
    pub pdf: PdfConfig,
}

impl Settings {
    /// Parse settings from a TOML string
    pub fn from_toml_str(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Read settings from `path`, or defaults if the file does not exist
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(content) => Self::from_toml_str(&content)
                .with_context(|| format!("Invalid settings file: {}", path.display())),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "No settings file, using defaults");
                Ok(Self::default())
            }
            Err(e) => {
                Err(e).with_context(|| format!("Failed to read settings: {}", path.display()))
            }
        }
    }
}

/// Catalog configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// Directory holding `<language>.json` catalogs
    pub dir: PathBuf,
    /// Language used when none is given on the command line
    pub default_language: String,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("i18n"),
            default_language: "en".to_string(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub dir: PathBuf,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
        }
    }
}

/// Snapshot storage configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    pub dir: PathBuf,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(".zeugnis"),
        }
    }
}
