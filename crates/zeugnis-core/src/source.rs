//! Catalog sources
//!
//! A source turns a language code into a parsed [`Catalog`]. The directory
//! source reads `<dir>/<lang>.json`; the static source serves catalogs held
//! in memory (bundled assets, tests).

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::catalog::Catalog;
use crate::error::{CoreError, Result};

/// Something that can provide the catalog for a language
pub trait CatalogSource {
    /// Load and parse the catalog for `language`
    fn load(&self, language: &str) -> Result<Catalog>;
}

/// Reject language codes that could not name a catalog file
pub fn validate_language(language: &str) -> Result<()> {
    let valid = !language.is_empty()
        && language
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(CoreError::InvalidLanguage(language.to_string()))
    }
}

/// Catalogs stored as `<dir>/<lang>.json`
#[derive(Debug, Clone)]
pub struct DirCatalogSource {
    dir: PathBuf,
}

impl DirCatalogSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the catalog files
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File path for `language`
    pub fn path_for(&self, language: &str) -> PathBuf {
        self.dir.join(format!("{language}.json"))
    }
}

impl CatalogSource for DirCatalogSource {
    fn load(&self, language: &str) -> Result<Catalog> {
        validate_language(language)?;
        let path = self.path_for(language);
        debug!(path = %path.display(), "Reading catalog");
        let json = match fs::read_to_string(&path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(CoreError::CatalogNotFound(language.to_string()))
            }
            Err(e) => return Err(e.into()),
        };
        Catalog::from_json_str(language, &json)
    }
}

/// Catalogs held in memory as JSON text
#[derive(Debug, Clone, Default)]
pub struct StaticCatalogSource {
    catalogs: HashMap<String, String>,
}

impl StaticCatalogSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the JSON text for `language`
    pub fn with(mut self, language: impl Into<String>, json: impl Into<String>) -> Self {
        self.catalogs.insert(language.into(), json.into());
        self
    }
}

impl CatalogSource for StaticCatalogSource {
    fn load(&self, language: &str) -> Result<Catalog> {
        let json = self
            .catalogs
            .get(language)
            .ok_or_else(|| CoreError::CatalogNotFound(language.to_string()))?;
        Catalog::from_json_str(language, json)
    }
}
