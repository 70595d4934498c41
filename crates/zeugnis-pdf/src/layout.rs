//! Line wrapping and pagination
//!
//! The plain-text rendering is wrapped greedily at word boundaries to the
//! text width, then laid out top to bottom on fixed-height lines. A new page
//! starts when the next line would cross the bottom margin.

use crate::config::PdfConfig;
use crate::metrics::text_width_mm;

/// A line of text at a fixed vertical position
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub text: String,
    /// Baseline distance from the top edge of the page
    pub y_mm: f32,
}

/// One laid-out page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub lines: Vec<PlacedLine>,
}

/// Wrap every line of `text` to the configured text width
pub fn wrap_text(text: &str, config: &PdfConfig) -> Vec<String> {
    let max_width = config.text_width_mm();
    text.split('\n')
        .flat_map(|line| wrap_line(line, max_width, config.font_size_pt))
        .collect()
}

/// Greedy word wrap of a single line
///
/// An empty line stays one empty line. A word wider than the line is
/// broken between characters.
pub fn wrap_line(line: &str, max_width_mm: f32, font_size_pt: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in line.split_whitespace() {
        for piece in split_word(word, max_width_mm, font_size_pt) {
            if current.is_empty() {
                current = piece;
                continue;
            }
            let candidate = format!("{current} {piece}");
            if text_width_mm(&candidate, font_size_pt) <= max_width_mm {
                current = candidate;
            } else {
                lines.push(std::mem::replace(&mut current, piece));
            }
        }
    }

    lines.push(current);
    lines
}

fn split_word(word: &str, max_width_mm: f32, font_size_pt: f32) -> Vec<String> {
    if text_width_mm(word, font_size_pt) <= max_width_mm {
        return vec![word.to_string()];
    }

    let mut pieces = Vec::new();
    let mut piece = String::new();
    for c in word.chars() {
        piece.push(c);
        if piece.chars().count() > 1 && text_width_mm(&piece, font_size_pt) > max_width_mm {
            piece.pop();
            pieces.push(std::mem::take(&mut piece));
            piece.push(c);
        }
    }
    if !piece.is_empty() {
        pieces.push(piece);
    }
    pieces
}

/// Place lines on pages
pub fn paginate(lines: Vec<String>, config: &PdfConfig) -> Vec<Page> {
    let mut pages = vec![Page::default()];
    let mut y = config.margin_mm;

    for text in lines {
        if y + config.line_height_mm > config.bottom_mm() {
            pages.push(Page::default());
            y = config.margin_mm;
        }
        if let Some(page) = pages.last_mut() {
            page.lines.push(PlacedLine { text, y_mm: y });
        }
        y += config.line_height_mm;
    }

    pages
}

/// Wrap and paginate `text`
pub fn layout(text: &str, config: &PdfConfig) -> Vec<Page> {
    paginate(wrap_text(text, config), config)
}
