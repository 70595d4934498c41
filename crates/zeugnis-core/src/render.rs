//! Plain-text and HTML preview renderers
//!
//! Both walk the composed block list in order and never reorder or skip
//! blocks, so the preview, the PDF (which consumes the plain text) and the
//! DOCX export carry the same content.
//!
//! # Example
//!
//! ```
//! use zeugnis_ast::{Block, BlockRole, Document, Paragraph, SectionKind};
//! use zeugnis_core::render::{render_html, render_text};
//!
//! let mut doc = Document::new();
//! doc.push(Block::Paragraph(Paragraph::body(SectionKind::Introduction, "A & B")));
//!
//! assert_eq!(render_text(&doc), "A & B");
//! assert!(render_html(&doc).contains("A &amp; B"));
//! ```

use zeugnis_ast::{Alignment, Block, BlockRole, Document, Inline, Paragraph};

/// Bullet prefix used wherever a duty is printed as text
pub const BULLET_PREFIX: &str = "• ";

/// Visual group a block belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Group {
    Letterhead,
    Title,
    Body,
    Signature,
}

fn group_of(block: &Block) -> Group {
    match block {
        Block::Paragraph(p) if p.role.is_letterhead() => Group::Letterhead,
        Block::Paragraph(p) if p.role.is_signature() => Group::Signature,
        Block::Paragraph(p) if p.role == BlockRole::Title => Group::Title,
        _ => Group::Body,
    }
}

/// Renders a document as plain text
///
/// One line per paragraph, one `• `-prefixed line per duty. Letterhead and
/// signature lines stay together; every other block boundary gets a blank
/// line.
#[derive(Debug, Default)]
pub struct PlainTextRenderer {
    output: String,
}

impl PlainTextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the document
    pub fn render(&mut self, doc: &Document) -> String {
        self.output.clear();
        let mut previous: Option<Group> = None;

        for block in &doc.blocks {
            let group = group_of(block);
            if let Some(prev) = previous {
                let tight = prev == group && matches!(group, Group::Letterhead | Group::Signature);
                self.output.push('\n');
                if !tight {
                    self.output.push('\n');
                }
            }
            self.render_block(block);
            previous = Some(group);
        }

        self.output.clone()
    }

    fn render_block(&mut self, block: &Block) {
        match block {
            Block::Paragraph(p) => self.output.push_str(&p.plain_text()),
            Block::BulletList(list) => {
                let lines: Vec<String> = list
                    .items
                    .iter()
                    .map(|item| format!("{BULLET_PREFIX}{item}"))
                    .collect();
                self.output.push_str(&lines.join("\n"));
            }
        }
    }
}

/// Render a document as plain text
pub fn render_text(doc: &Document) -> String {
    PlainTextRenderer::new().render(doc)
}

/// Renders a document as HTML for the in-page preview
#[derive(Debug, Default)]
pub struct HtmlPreviewRenderer {
    output: String,
}

impl HtmlPreviewRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the document
    pub fn render(&mut self, doc: &Document) -> String {
        self.output.clear();
        let mut open: Option<Group> = None;

        for block in &doc.blocks {
            let group = group_of(block);
            if open != Some(group) {
                self.close_group(open);
                self.open_group(group);
                open = Some(group);
            }
            match block {
                Block::Paragraph(p) if p.role == BlockRole::Title => {
                    self.output.push_str("<h3 class=\"text-center\">");
                    self.render_inlines(&p.inlines);
                    self.output.push_str("</h3>\n");
                }
                Block::Paragraph(p) => self.render_paragraph(p),
                Block::BulletList(list) => {
                    self.output.push_str("<ul>\n");
                    for item in &list.items {
                        self.output.push_str("<li>");
                        self.output.push_str(&escape_html(item));
                        self.output.push_str("</li>\n");
                    }
                    self.output.push_str("</ul>\n");
                }
            }
        }
        self.close_group(open);

        self.output.trim_end().to_string()
    }

    fn open_group(&mut self, group: Group) {
        let class = match group {
            Group::Letterhead => "letter-letterhead",
            Group::Title => "letter-title",
            Group::Body => "letter-body",
            Group::Signature => "letter-footer",
        };
        self.output.push_str(&format!("<div class=\"{class}\">\n"));
    }

    fn close_group(&mut self, group: Option<Group>) {
        if group.is_some() {
            self.output.push_str("</div>\n");
        }
    }

    fn render_paragraph(&mut self, p: &Paragraph) {
        match align_class(p.align) {
            Some(class) => self.output.push_str(&format!("<p class=\"{class}\">")),
            None => self.output.push_str("<p>"),
        }
        self.render_inlines(&p.inlines);
        self.output.push_str("</p>\n");
    }

    fn render_inlines(&mut self, inlines: &[Inline]) {
        for inline in inlines {
            self.render_inline(inline);
        }
    }

    fn render_inline(&mut self, inline: &Inline) {
        match inline {
            Inline::Text(text) => self.output.push_str(&escape_html(text)),
            Inline::Format(_, inner) => {
                self.output.push_str("<strong>");
                self.render_inline(inner);
                self.output.push_str("</strong>");
            }
            Inline::Span(children) => self.render_inlines(children),
        }
    }
}

fn align_class(align: Alignment) -> Option<&'static str> {
    match align {
        Alignment::Left => None,
        Alignment::Center => Some("text-center"),
        Alignment::Right => Some("text-end"),
        Alignment::Justified => Some("text-justify"),
    }
}

/// Render a document as preview HTML
pub fn render_html(doc: &Document) -> String {
    HtmlPreviewRenderer::new().render(doc)
}

/// Escape text for HTML element content and attribute values
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
