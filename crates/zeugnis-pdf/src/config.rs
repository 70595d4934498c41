//! Page geometry for PDF export

use serde::{Deserialize, Serialize};

/// Millimetres per typographic point
pub const MM_PER_PT: f32 = 25.4 / 72.0;

/// Page size, margins and type size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    pub font_size_pt: f32,
    pub margin_mm: f32,
    pub line_height_mm: f32,
    pub page_width_mm: f32,
    pub page_height_mm: f32,
    /// Font files handed to the Typst engine
    pub font_paths: Vec<String>,
}

impl Default for PdfConfig {
    /// A4 portrait, 15 mm margins, 9 pt type on a 5 mm line
    fn default() -> Self {
        Self {
            font_size_pt: 9.0,
            margin_mm: 15.0,
            line_height_mm: 5.0,
            page_width_mm: 210.0,
            page_height_mm: 297.0,
            font_paths: Vec::new(),
        }
    }
}

impl PdfConfig {
    /// Width available for a line of text
    pub fn text_width_mm(&self) -> f32 {
        self.page_width_mm - 2.0 * self.margin_mm
    }

    /// Lowest baseline a line may sit on
    pub fn bottom_mm(&self) -> f32 {
        self.page_height_mm - self.margin_mm
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_geometry() {
        let config = PdfConfig::default();
        assert_eq!(config.text_width_mm(), 180.0);
        assert_eq!(config.bottom_mm(), 282.0);
    }

    #[test]
    fn test_partial_toml() {
        let config: PdfConfig = toml::from_str("font_size_pt = 10\nmargin_mm = 20").unwrap();
        assert_eq!(config.font_size_pt, 10.0);
        assert_eq!(config.margin_mm, 20.0);
        assert_eq!(config.line_height_mm, 5.0);
        assert!(config.font_paths.is_empty());
    }
}
