//! Content section identifiers
//!
//! The letter body is made of a fixed sequence of sections. Every section
//! except [`SectionKind::DutiesList`] is resolved from a catalog template;
//! the duties list comes straight from free text.

use serde::{Deserialize, Serialize};

/// A content section of the letter body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionKind {
    Introduction,
    CompanyDescription,
    DutiesIntro,
    /// Free-text duty bullets, never template-resolved
    DutiesList,
    Knowledge,
    Willingness,
    Workstyle,
    Quality,
    Resilience,
    Leadership,
    Overall,
    Social,
    Leaving,
    Farewell,
    Additional,
}

impl SectionKind {
    /// Body sections in emission order
    pub const BODY_ORDER: [SectionKind; 15] = [
        SectionKind::Introduction,
        SectionKind::CompanyDescription,
        SectionKind::DutiesIntro,
        SectionKind::DutiesList,
        SectionKind::Knowledge,
        SectionKind::Willingness,
        SectionKind::Workstyle,
        SectionKind::Quality,
        SectionKind::Resilience,
        SectionKind::Leadership,
        SectionKind::Overall,
        SectionKind::Social,
        SectionKind::Leaving,
        SectionKind::Farewell,
        SectionKind::Additional,
    ];

    /// Stable identifier (matches the serde name)
    pub fn as_str(self) -> &'static str {
        match self {
            SectionKind::Introduction => "introduction",
            SectionKind::CompanyDescription => "companyDescription",
            SectionKind::DutiesIntro => "dutiesIntro",
            SectionKind::DutiesList => "dutiesList",
            SectionKind::Knowledge => "knowledge",
            SectionKind::Willingness => "willingness",
            SectionKind::Workstyle => "workstyle",
            SectionKind::Quality => "quality",
            SectionKind::Resilience => "resilience",
            SectionKind::Leadership => "leadership",
            SectionKind::Overall => "overall",
            SectionKind::Social => "social",
            SectionKind::Leaving => "leaving",
            SectionKind::Farewell => "farewell",
            SectionKind::Additional => "additional",
        }
    }

    /// Position in [`SectionKind::BODY_ORDER`]
    pub fn position(self) -> usize {
        Self::BODY_ORDER
            .iter()
            .position(|kind| *kind == self)
            .unwrap_or(Self::BODY_ORDER.len())
    }

    /// Whether the section text comes from a catalog template
    pub fn is_template_resolved(self) -> bool {
        self != SectionKind::DutiesList
    }
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
