//! Reading paragraphs back out of a DOCX package
//!
//! Only what a written letter contains is recognised: paragraph
//! justification, run size, bold and text.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::archive::OoxmlArchive;
use crate::error::{OoxmlError, Result};

/// A paragraph as stored in word/document.xml
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocxParagraph {
    /// Concatenated run text
    pub text: String,
    /// `w:jc` value, if set
    pub justification: Option<String>,
    /// Size of the first run, in half-points
    pub size: Option<u32>,
    /// Whether any run is bold
    pub bold: bool,
}

/// Parse the paragraphs of a document.xml part
pub fn parse_paragraphs(xml: &[u8]) -> Result<Vec<DocxParagraph>> {
    let mut reader = Reader::from_reader(xml);
    // Keep whitespace inside runs
    reader.config_mut().trim_text(false);

    let mut paragraphs = Vec::new();
    let mut buf = Vec::new();
    let mut current: Option<DocxParagraph> = None;
    let mut in_text = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => match e.local_name().as_ref() {
                b"p" => current = Some(DocxParagraph::default()),
                b"t" => in_text = true,
                _ => {}
            },
            Ok(Event::Empty(ref e)) if e.local_name().as_ref() == b"p" => {
                paragraphs.push(DocxParagraph::default());
            }
            Ok(Event::Empty(ref e)) => {
                if let Some(para) = current.as_mut() {
                    match e.local_name().as_ref() {
                        b"jc" => para.justification = get_val(e),
                        b"b" => para.bold = true,
                        b"sz" if para.size.is_none() => {
                            if let Some(val) = get_val(e) {
                                let size = val.parse().map_err(|_| {
                                    OoxmlError::InvalidStructure(format!(
                                        "run size is not a number: {val:?}"
                                    ))
                                })?;
                                para.size = Some(size);
                            }
                        }
                        _ => {}
                    }
                }
            }
            Ok(Event::Text(ref e)) => {
                if in_text {
                    if let Some(para) = current.as_mut() {
                        let text = e.unescape()?;
                        para.text.push_str(&text);
                    }
                }
            }
            Ok(Event::End(ref e)) => match e.local_name().as_ref() {
                b"t" => in_text = false,
                b"p" => {
                    if let Some(para) = current.take() {
                        paragraphs.push(para);
                    }
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(OoxmlError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(paragraphs)
}

/// Parse the paragraphs of a DOCX package held in memory
pub fn read_paragraphs(docx: &[u8]) -> Result<Vec<DocxParagraph>> {
    let archive = OoxmlArchive::from_bytes(docx)?;
    parse_paragraphs(archive.document_xml()?)
}

/// Paragraph texts of a DOCX package, in document order
pub fn paragraph_texts(docx: &[u8]) -> Result<Vec<String>> {
    Ok(read_paragraphs(docx)?
        .into_iter()
        .map(|para| para.text)
        .collect())
}

/// Get the `w:val` attribute
fn get_val(e: &BytesStart) -> Option<String> {
    e.attributes()
        .filter_map(|a| a.ok())
        .find(|a| a.key.local_name().as_ref() == b"val")
        .and_then(|a| String::from_utf8(a.value.to_vec()).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    const XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
<w:body>
<w:p><w:pPr><w:jc w:val="right"/></w:pPr><w:r><w:rPr><w:sz w:val="20"/></w:rPr><w:t xml:space="preserve">Hamburg, </w:t></w:r><w:r><w:t>16 Oct</w:t></w:r></w:p>
<w:p/>
<w:p><w:r><w:rPr><w:b/><w:sz w:val="22"/></w:rPr><w:t>A &amp; B</w:t></w:r></w:p>
</w:body>
</w:document>"#;

    #[test]
    fn test_parse_paragraphs() {
        let paragraphs = parse_paragraphs(XML.as_bytes()).unwrap();
        assert_eq!(paragraphs.len(), 3);

        assert_eq!(paragraphs[0].text, "Hamburg, 16 Oct");
        assert_eq!(paragraphs[0].justification.as_deref(), Some("right"));
        assert_eq!(paragraphs[0].size, Some(20));
        assert!(!paragraphs[0].bold);

        assert_eq!(paragraphs[1], DocxParagraph::default());

        assert_eq!(paragraphs[2].text, "A & B");
        assert!(paragraphs[2].bold);
    }

    #[test]
    fn test_bad_size_rejected() {
        let xml = r#"<w:p><w:r><w:rPr><w:sz w:val="big"/></w:rPr></w:r></w:p>"#;
        assert!(matches!(
            parse_paragraphs(xml.as_bytes()),
            Err(OoxmlError::InvalidStructure(_))
        ));
    }
}
