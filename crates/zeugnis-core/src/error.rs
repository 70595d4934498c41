//! Error types for the letter engine
//!
//! Missing catalog paths are not errors: lookups return `None` and the
//! affected section renders as nothing. The types here cover the failures
//! that callers must see.

use thiserror::Error;

/// Errors raised while loading catalogs or persisting snapshots
#[derive(Error, Debug)]
pub enum CoreError {
    /// Catalog content is not valid JSON
    #[error("Malformed catalog for '{language}': {source}")]
    CatalogJson {
        language: String,
        #[source]
        source: serde_json::Error,
    },

    /// Catalog root is not a JSON object
    #[error("Malformed catalog for '{0}': root must be an object")]
    CatalogShape(String),

    /// No catalog exists for the requested language
    #[error("Catalog not found for language '{0}'")]
    CatalogNotFound(String),

    /// Language code contains characters that cannot name a catalog
    #[error("Invalid language code: {0:?}")]
    InvalidLanguage(String),

    /// Snapshot could not be serialised
    #[error("Snapshot serialization error: {0}")]
    Snapshot(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Reasons a letter cannot be generated or exported
///
/// Each variant carries the message to show the user, already in the
/// active catalog's language.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// One or more required fields are empty
    #[error("{message}")]
    MissingRequiredFields {
        /// Generic, language-appropriate message naming no field
        message: String,
        /// Names of the empty fields, for logs
        missing: Vec<&'static str>,
    },

    /// Export was requested before any letter was composed
    #[error("{message}")]
    NoDocument {
        /// Language-appropriate message
        message: String,
    },
}

impl GenerationError {
    /// The user-facing message
    pub fn message(&self) -> &str {
        match self {
            GenerationError::MissingRequiredFields { message, .. } => message,
            GenerationError::NoDocument { message } => message,
        }
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_error_displays_message_only() {
        let err = GenerationError::MissingRequiredFields {
            message: "Please fill in all required fields.".to_string(),
            missing: vec!["writerPosition"],
        };
        assert_eq!(err.to_string(), "Please fill in all required fields.");
        assert_eq!(err.message(), "Please fill in all required fields.");
    }

    #[test]
    fn test_core_error_display() {
        let err = CoreError::CatalogNotFound("fr".to_string());
        assert_eq!(err.to_string(), "Catalog not found for language 'fr'");
    }
}
