//! DOCX writer
//!
//! Turns a composed [`Document`] into a WordprocessingML package. Each
//! paragraph's size and spacing follow from its [`BlockRole`]; each duty
//! bullet becomes its own paragraph.

use tracing::debug;
use zeugnis_ast::{Alignment, Block, BlockRole, BulletList, Document, Inline, Paragraph, SectionKind};

use crate::archive::{OoxmlArchive, DOCUMENT_XML};
use crate::error::Result;

/// Page margins on every side, in twips
pub const PAGE_MARGIN_TWIPS: u32 = 1440;

/// Prefix written in front of each duty bullet
pub const BULLET_PREFIX: &str = "• ";

/// A4 page size in twips
const PAGE_WIDTH_TWIPS: u32 = 11906;
const PAGE_HEIGHT_TWIPS: u32 = 16838;

const CONTENT_TYPES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
  <Default Extension="xml" ContentType="application/xml"/>
  <Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>
  <Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/>
  <Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/>
</Types>"#;

const ROOT_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>
  <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/>
</Relationships>"#;

const DOCUMENT_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>
</Relationships>"#;

const STYLES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:docDefaults>
    <w:rPrDefault><w:rPr><w:rFonts w:ascii="Helvetica" w:hAnsi="Helvetica" w:cs="Helvetica"/><w:sz w:val="22"/><w:szCs w:val="22"/></w:rPr></w:rPrDefault>
    <w:pPrDefault><w:pPr><w:spacing w:after="0" w:line="240" w:lineRule="auto"/></w:pPr></w:pPrDefault>
  </w:docDefaults>
  <w:style w:type="paragraph" w:default="1" w:styleId="Normal"><w:name w:val="Normal"/></w:style>
</w:styles>"#;

/// Run size and paragraph spacing for one paragraph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParagraphFormat {
    /// Run size in half-points
    pub size: u32,
    /// Space before, in twentieths of a point
    pub before: u32,
    /// Space after, in twentieths of a point
    pub after: u32,
}

impl ParagraphFormat {
    const fn new(size: u32, before: u32, after: u32) -> Self {
        Self {
            size,
            before,
            after,
        }
    }

    /// Format for a paragraph with the given role
    pub fn for_role(role: BlockRole) -> Self {
        match role {
            BlockRole::LetterheadCompany => Self::new(22, 0, 100),
            BlockRole::LetterheadDetail | BlockRole::LetterheadReference => Self::new(20, 0, 50),
            BlockRole::LetterheadDate => Self::new(20, 0, 200),
            BlockRole::Title => Self::new(28, 400, 400),
            BlockRole::Body(SectionKind::DutiesIntro) => Self::new(22, 0, 100),
            BlockRole::Body(_) => Self::new(22, 0, 200),
            BlockRole::SignatureDate => Self::new(22, 400, 100),
            BlockRole::SignatureCompany => Self::new(22, 0, 400),
            BlockRole::SignatureRule => Self::new(22, 0, 100),
            BlockRole::SignatureName | BlockRole::SignaturePosition => Self::new(22, 0, 50),
            BlockRole::SignatureContact => Self::new(20, 0, 50),
        }
    }

    /// Format for a duty bullet paragraph and the spacer after the list
    pub fn bullet() -> Self {
        Self::new(22, 0, 100)
    }
}

/// DOCX writer for composed letters
pub struct DocxWriter {
    /// Output buffer for document.xml
    output: String,
}

impl DocxWriter {
    /// Create a new writer
    pub fn new() -> Self {
        Self {
            output: String::new(),
        }
    }

    /// Build a complete DOCX package for `doc`
    pub fn generate(doc: &Document) -> Result<Vec<u8>> {
        let mut writer = Self::new();
        let document_xml = writer.generate_document_xml(doc);

        let mut archive = OoxmlArchive::new();
        archive.set_string("[Content_Types].xml", CONTENT_TYPES_XML);
        archive.set_string("_rels/.rels", ROOT_RELS_XML);
        archive.set_string("word/_rels/document.xml.rels", DOCUMENT_RELS_XML);
        archive.set_string("word/styles.xml", STYLES_XML);
        archive.set_string(DOCUMENT_XML, document_xml);
        archive.set_string("docProps/core.xml", core_properties_xml(doc));

        let bytes = archive.to_bytes()?;
        debug!(blocks = doc.len(), bytes = bytes.len(), "DOCX package written");
        Ok(bytes)
    }

    /// Generate the complete document.xml content
    fn generate_document_xml(&mut self, doc: &Document) -> String {
        self.output.clear();

        self.output
            .push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        self.output.push('\n');
        self.output.push_str(
            r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main" "#,
        );
        self.output.push_str(
            r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
        );
        self.output.push('\n');
        self.output.push_str("<w:body>\n");

        for block in &doc.blocks {
            self.generate_block(block);
        }

        self.generate_section_properties();
        self.output.push_str("</w:body>\n");
        self.output.push_str("</w:document>");

        std::mem::take(&mut self.output)
    }

    fn generate_block(&mut self, block: &Block) {
        match block {
            Block::Paragraph(para) => self.generate_paragraph(para),
            Block::BulletList(list) => self.generate_bullet_list(list),
        }
    }

    /// Generate XML for a paragraph
    fn generate_paragraph(&mut self, para: &Paragraph) {
        let format = ParagraphFormat::for_role(para.role);
        self.open_paragraph(format, para.align);
        for inline in &para.inlines {
            self.generate_inline(inline, format.size, false);
        }
        self.output.push_str("</w:p>\n");
    }

    /// One paragraph per duty, then an empty spacer paragraph
    fn generate_bullet_list(&mut self, list: &BulletList) {
        let format = ParagraphFormat::bullet();
        for item in &list.items {
            self.open_paragraph(format, Alignment::Justified);
            self.generate_run(&format!("{BULLET_PREFIX}{item}"), format.size, false);
            self.output.push_str("</w:p>\n");
        }
        self.open_paragraph(format, Alignment::Left);
        self.output.push_str("</w:p>\n");
    }

    fn open_paragraph(&mut self, format: ParagraphFormat, align: Alignment) {
        self.output.push_str("<w:p>\n<w:pPr>\n");
        self.output.push_str(&format!(
            "<w:spacing w:before=\"{}\" w:after=\"{}\"/>\n",
            format.before, format.after
        ));
        self.output
            .push_str(&format!("<w:jc w:val=\"{}\"/>\n", justification(align)));
        self.output.push_str("</w:pPr>\n");
    }

    /// Generate runs for inline content
    fn generate_inline(&mut self, inline: &Inline, size: u32, bold: bool) {
        match inline {
            Inline::Text(text) => self.generate_run(text, size, bold),
            Inline::Format(_, inner) => self.generate_inline(inner, size, true),
            Inline::Span(inlines) => {
                for inline in inlines {
                    self.generate_inline(inline, size, bold);
                }
            }
        }
    }

    fn generate_run(&mut self, text: &str, size: u32, bold: bool) {
        self.output.push_str("<w:r>\n<w:rPr>\n");
        if bold {
            self.output.push_str("<w:b/>\n");
        }
        self.output.push_str(&format!(
            "<w:sz w:val=\"{size}\"/>\n<w:szCs w:val=\"{size}\"/>\n"
        ));
        self.output.push_str("</w:rPr>\n");
        self.output.push_str(&format!(
            "<w:t xml:space=\"preserve\">{}</w:t>\n",
            escape_xml(text)
        ));
        self.output.push_str("</w:r>\n");
    }

    /// A4 page with equal margins
    fn generate_section_properties(&mut self) {
        self.output.push_str("<w:sectPr>\n");
        self.output.push_str(&format!(
            "<w:pgSz w:w=\"{PAGE_WIDTH_TWIPS}\" w:h=\"{PAGE_HEIGHT_TWIPS}\"/>\n"
        ));
        self.output.push_str(&format!(
            "<w:pgMar w:top=\"{m}\" w:right=\"{m}\" w:bottom=\"{m}\" w:left=\"{m}\" w:header=\"720\" w:footer=\"720\" w:gutter=\"0\"/>\n",
            m = PAGE_MARGIN_TWIPS
        ));
        self.output.push_str("</w:sectPr>\n");
    }
}

impl Default for DocxWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the DOCX bytes for a composed letter
pub fn render_docx(doc: &Document) -> Result<Vec<u8>> {
    DocxWriter::generate(doc)
}

/// `w:jc` value for an alignment
fn justification(align: Alignment) -> &'static str {
    match align {
        Alignment::Left => "left",
        Alignment::Center => "center",
        Alignment::Right => "right",
        Alignment::Justified => "both",
    }
}

/// docProps/core.xml with the letter title and author
fn core_properties_xml(doc: &Document) -> String {
    let mut core_xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#,
    );

    if let Some(title) = &doc.metadata.title {
        core_xml.push_str(&format!("<dc:title>{}</dc:title>", escape_xml(title)));
    }
    if let Some(author) = &doc.metadata.author {
        core_xml.push_str(&format!("<dc:creator>{}</dc:creator>", escape_xml(author)));
    }
    if let Some(language) = &doc.metadata.language {
        core_xml.push_str(&format!(
            "<dc:language>{}</dc:language>",
            escape_xml(language)
        ));
    }

    core_xml.push_str("</cp:coreProperties>");
    core_xml
}

/// Escape special XML characters
/// Escape markup characters and drop characters XML 1.0 does not allow
fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            '\t' | '\n' | '\r' => out.push(c),
            c if c < '\u{20}' || c == '\u{FFFE}' || c == '\u{FFFF}' => {}
            c => out.push(c),
        }
    }
    out
}
