//! Export formats and file naming

use std::fmt;
use std::str::FromStr;

use zeugnis_ast::Document;

use crate::composer::{ATTR_DATE, ATTR_FIRST_NAME, ATTR_LAST_NAME};
use crate::rating::ParseKeyError;

/// A downloadable export format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Pdf,
    Docx,
}

impl ExportFormat {
    /// File extension without the dot
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Docx => "docx",
        }
    }

    /// MIME type of the produced bytes
    pub fn mime_type(self) -> &'static str {
        match self {
            ExportFormat::Pdf => "application/pdf",
            ExportFormat::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pdf" => Ok(ExportFormat::Pdf),
            "docx" => Ok(ExportFormat::Docx),
            _ => Err(ParseKeyError::new("export format", s)),
        }
    }
}

/// `Reference_Letter_<first>_<last>_<date>.<ext>`
///
/// Empty names fall back to `Employee` and `Reference`.
pub fn export_filename(first_name: &str, last_name: &str, iso_date: &str, format: ExportFormat) -> String {
    let first = non_empty_or(first_name, "Employee");
    let last = non_empty_or(last_name, "Reference");
    format!(
        "Reference_Letter_{first}_{last}_{iso_date}.{}",
        format.extension()
    )
}

/// File name for a composed document
pub fn export_filename_for(doc: &Document, format: ExportFormat) -> String {
    let meta = &doc.metadata;
    export_filename(
        meta.get_attribute(ATTR_FIRST_NAME).unwrap_or(""),
        meta.get_attribute(ATTR_LAST_NAME).unwrap_or(""),
        meta.get_attribute(ATTR_DATE).unwrap_or(""),
        format,
    )
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        fallback
    } else {
        trimmed
    }
}
