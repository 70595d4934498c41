//! Rating levels and performance categories

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use zeugnis_ast::SectionKind;

/// One of five performance levels, best to worst
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub enum Rating {
    #[default]
    #[serde(rename = "sehr-gut")]
    VeryGood,
    #[serde(rename = "gut")]
    Good,
    #[serde(rename = "befriedigend")]
    Satisfactory,
    #[serde(rename = "ausreichend")]
    Adequate,
    #[serde(rename = "mangelhaft")]
    Poor,
}

impl Rating {
    /// All ratings, best to worst
    pub const ALL: [Rating; 5] = [
        Rating::VeryGood,
        Rating::Good,
        Rating::Satisfactory,
        Rating::Adequate,
        Rating::Poor,
    ];

    /// Catalog key for this rating
    pub fn key(self) -> &'static str {
        match self {
            Rating::VeryGood => "sehr-gut",
            Rating::Good => "gut",
            Rating::Satisfactory => "befriedigend",
            Rating::Adequate => "ausreichend",
            Rating::Poor => "mangelhaft",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Error for unrecognised rating or category names
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown {kind}: {value:?}")]
pub struct ParseKeyError {
    kind: &'static str,
    value: String,
}

impl ParseKeyError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

impl FromStr for Rating {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rating::ALL
            .into_iter()
            .find(|r| r.key() == s)
            .ok_or_else(|| ParseKeyError::new("rating", s))
    }
}

/// The nine rated sections of the letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PerformanceCategory {
    Knowledge,
    Willingness,
    Workstyle,
    Quality,
    Resilience,
    Leadership,
    Overall,
    Social,
    Farewell,
}

impl PerformanceCategory {
    /// All categories in emission order
    pub const ALL: [PerformanceCategory; 9] = [
        PerformanceCategory::Knowledge,
        PerformanceCategory::Willingness,
        PerformanceCategory::Workstyle,
        PerformanceCategory::Quality,
        PerformanceCategory::Resilience,
        PerformanceCategory::Leadership,
        PerformanceCategory::Overall,
        PerformanceCategory::Social,
        PerformanceCategory::Farewell,
    ];

    /// Short name (`knowledge`, `workstyle`, ...)
    pub fn key(self) -> &'static str {
        self.section().as_str()
    }

    /// Catalog sub-tree holding this category's templates
    pub fn catalog_key(self) -> String {
        format!("{}Variants", self.key())
    }

    /// Body section this category renders into
    pub fn section(self) -> SectionKind {
        match self {
            PerformanceCategory::Knowledge => SectionKind::Knowledge,
            PerformanceCategory::Willingness => SectionKind::Willingness,
            PerformanceCategory::Workstyle => SectionKind::Workstyle,
            PerformanceCategory::Quality => SectionKind::Quality,
            PerformanceCategory::Resilience => SectionKind::Resilience,
            PerformanceCategory::Leadership => SectionKind::Leadership,
            PerformanceCategory::Overall => SectionKind::Overall,
            PerformanceCategory::Social => SectionKind::Social,
            PerformanceCategory::Farewell => SectionKind::Farewell,
        }
    }

    /// Category for a body section, if that section is rated
    pub fn from_section(section: SectionKind) -> Option<Self> {
        PerformanceCategory::ALL
            .into_iter()
            .find(|c| c.section() == section)
    }
}

impl fmt::Display for PerformanceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for PerformanceCategory {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PerformanceCategory::ALL
            .into_iter()
            .find(|c| c.key() == s)
            .ok_or_else(|| ParseKeyError::new("performance category", s))
    }
}
