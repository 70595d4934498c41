//! Laid-out pages to Typst markup
//!
//! Every line is placed at an absolute position on a margin-less page, so
//! the wrapping and page breaks computed in [`crate::layout`] are exactly
//! what ends up in the PDF.

use zeugnis_ast::DocumentMeta;

use crate::config::{PdfConfig, MM_PER_PT};
use crate::layout::Page;
use crate::metrics::CAP_HEIGHT;

/// Transpiler for converting laid-out pages to Typst markup
pub struct Transpiler;

impl Transpiler {
    /// Transpile pages to Typst markup
    pub fn transpile(meta: &DocumentMeta, pages: &[Page], config: &PdfConfig) -> String {
        let mut output = String::new();

        output.push_str(&Self::document_settings(meta));
        output.push_str(&format!(
            "#set page(width: {}mm, height: {}mm, margin: 0mm)\n",
            config.page_width_mm, config.page_height_mm
        ));
        output.push_str(&format!(
            "#set text(font: \"Helvetica\", size: {}pt)\n\n",
            config.font_size_pt
        ));

        // Typst places the top of the cap height; the layout works on baselines
        let cap_height_mm = f32::from(CAP_HEIGHT) / 1000.0 * config.font_size_pt * MM_PER_PT;

        for (index, page) in pages.iter().enumerate() {
            if index > 0 {
                output.push_str("#pagebreak()\n");
            }
            for line in page.lines.iter().filter(|l| !l.text.is_empty()) {
                output.push_str(&format!(
                    "#place(top + left, dx: {:.2}mm, dy: {:.2}mm)[#text(\"{}\")]\n",
                    config.margin_mm,
                    line.y_mm - cap_height_mm,
                    escape_string(&line.text)
                ));
            }
        }

        output
    }

    fn document_settings(meta: &DocumentMeta) -> String {
        let mut args = Vec::new();
        if let Some(title) = &meta.title {
            args.push(format!("title: \"{}\"", escape_string(title)));
        }
        if let Some(author) = &meta.author {
            args.push(format!("author: \"{}\"", escape_string(author)));
        }
        if args.is_empty() {
            return String::new();
        }
        format!("#set document({})\n", args.join(", "))
    }
}

/// Escape a value for a Typst string literal
fn escape_string(s: &str) -> String {
    s.replace('\\', r"\\")
        .replace('"', r#"\""#)
        .replace('\n', r"\n")
}
