//! Block-level elements for letter structure
//!
//! A block is either a paragraph or a bullet list. Each block carries a
//! [`BlockRole`] so renderers can choose size, weight and spacing without
//! inspecting the text.

use serde::{Deserialize, Serialize};

use crate::inline::Inline;
use crate::section::SectionKind;

/// Block-level content element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Block {
    /// A paragraph of text
    Paragraph(Paragraph),
    /// An unordered list (duty bullets)
    BulletList(BulletList),
}

/// A paragraph block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Inline content within the paragraph
    pub inlines: Vec<Inline>,
    /// Structural role of the paragraph
    pub role: BlockRole,
    /// Horizontal alignment
    pub align: Alignment,
}

/// A bullet list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulletList {
    /// Item texts, already stripped of bullet glyphs
    pub items: Vec<String>,
    /// Section the list belongs to
    pub section: SectionKind,
}

/// Text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
    Justified,
}

/// Structural role of a paragraph within the letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockRole {
    /// Company name at the top of the letterhead
    LetterheadCompany,
    /// Street, city, phone, email lines under the company name
    LetterheadDetail,
    /// Reference number line (right column)
    LetterheadReference,
    /// Place and date line (right column)
    LetterheadDate,
    /// Letter title
    Title,
    /// A resolved body section
    Body(SectionKind),
    /// Place and date above the signature
    SignatureDate,
    /// Company name above the signature line
    SignatureCompany,
    /// The line to sign on
    SignatureRule,
    /// Writer name
    SignatureName,
    /// Writer position
    SignaturePosition,
    /// Writer email or phone
    SignatureContact,
}

impl BlockRole {
    /// Whether this role belongs to the letterhead
    pub fn is_letterhead(self) -> bool {
        matches!(
            self,
            BlockRole::LetterheadCompany
                | BlockRole::LetterheadDetail
                | BlockRole::LetterheadReference
                | BlockRole::LetterheadDate
        )
    }

    /// Whether this role belongs to the signature block
    pub fn is_signature(self) -> bool {
        matches!(
            self,
            BlockRole::SignatureDate
                | BlockRole::SignatureCompany
                | BlockRole::SignatureRule
                | BlockRole::SignatureName
                | BlockRole::SignaturePosition
                | BlockRole::SignatureContact
        )
    }
}

impl Paragraph {
    /// Left-aligned paragraph with a single plain run
    pub fn plain(role: BlockRole, text: impl Into<String>) -> Self {
        Self {
            inlines: vec![Inline::text(text)],
            role,
            align: Alignment::Left,
        }
    }

    /// Left-aligned paragraph with a single bold run
    pub fn bold(role: BlockRole, text: impl Into<String>) -> Self {
        Self {
            inlines: vec![Inline::bold(text)],
            role,
            align: Alignment::Left,
        }
    }

    /// Justified body paragraph for a resolved section
    pub fn body(section: SectionKind, text: impl Into<String>) -> Self {
        Self {
            inlines: vec![Inline::text(text)],
            role: BlockRole::Body(section),
            align: Alignment::Justified,
        }
    }

    /// Set the alignment
    pub fn aligned(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Concatenated paragraph text without markup
    pub fn plain_text(&self) -> String {
        self.inlines.iter().map(Inline::plain_text).collect()
    }

    /// Whether the whole paragraph is set in bold
    pub fn is_bold(&self) -> bool {
        !self.inlines.is_empty() && self.inlines.iter().all(Inline::is_bold)
    }
}

impl Block {
    /// Section this block renders, if it is part of the body
    pub fn section(&self) -> Option<SectionKind> {
        match self {
            Block::Paragraph(Paragraph {
                role: BlockRole::Body(section),
                ..
            }) => Some(*section),
            Block::Paragraph(_) => None,
            Block::BulletList(list) => Some(list.section),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_paragraph_is_justified() {
        let para = Paragraph::body(SectionKind::Knowledge, "Solid expertise.");
        assert_eq!(para.align, Alignment::Justified);
        assert_eq!(para.role, BlockRole::Body(SectionKind::Knowledge));
        assert_eq!(para.plain_text(), "Solid expertise.");
    }

    #[test]
    fn test_bold_paragraph() {
        let para = Paragraph::bold(BlockRole::SignatureName, "Jonas Richter");
        assert!(para.is_bold());
        assert!(!Paragraph::plain(BlockRole::SignaturePosition, "HR").is_bold());
    }

    #[test]
    fn test_block_section() {
        let list = Block::BulletList(BulletList {
            items: vec!["Managed onboarding".to_string()],
            section: SectionKind::DutiesList,
        });
        assert_eq!(list.section(), Some(SectionKind::DutiesList));

        let title = Block::Paragraph(Paragraph::bold(BlockRole::Title, "Reference"));
        assert_eq!(title.section(), None);
    }

    #[test]
    fn test_role_groups() {
        assert!(BlockRole::LetterheadDate.is_letterhead());
        assert!(!BlockRole::Title.is_letterhead());
        assert!(BlockRole::SignatureRule.is_signature());
        assert!(!BlockRole::Body(SectionKind::Farewell).is_signature());
    }
}
