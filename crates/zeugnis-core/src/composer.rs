//! Document composer
//!
//! Assembles resolved sections and the fixed structural fragments into one
//! [`Document`]. Emission order is fixed:
//!
//! letterhead → title → body sections in [`SectionKind::BODY_ORDER`] →
//! signature block
//!
//! Empty sections are omitted without leaving a trace. The order of the
//! `resolved` input does not matter.

use chrono::NaiveDate;
use zeugnis_ast::{Alignment, Block, BlockRole, BulletList, Document, Paragraph, SectionKind};

use crate::catalog::Catalog;
use crate::dates::{format_long_date, iso_date};
use crate::duties::derive_duty_bullets;
use crate::resolver::ResolvedSection;
use crate::snapshot::FormSnapshot;

/// The line the writer signs on
pub const SIGNATURE_RULE: &str = "_______________________";

/// Document attribute holding the employee's first name
pub const ATTR_FIRST_NAME: &str = "firstName";
/// Document attribute holding the employee's last name
pub const ATTR_LAST_NAME: &str = "lastName";
/// Document attribute holding the generation date (`YYYY-MM-DD`)
pub const ATTR_DATE: &str = "date";

/// Everything the letter shows that is not a resolved section
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StructuralFields {
    pub language: String,
    pub letter_title: String,
    /// Generation date, long form
    pub date_long: String,
    /// Generation date, `YYYY-MM-DD`
    pub date_iso: String,
    pub company_name: String,
    pub company_street: String,
    pub company_postal_code: String,
    pub company_city: String,
    pub company_phone: String,
    pub company_email: String,
    pub reference_number: String,
    pub first_name: String,
    pub last_name: String,
    pub writer_name: String,
    pub writer_position: String,
    pub writer_email: String,
    pub writer_phone: String,
    pub duty_bullets: Vec<String>,
}

impl StructuralFields {
    /// Collect structural fields from the snapshot and catalog
    pub fn from_snapshot(snapshot: &FormSnapshot, catalog: &Catalog, date: NaiveDate) -> Self {
        let company = &snapshot.company;
        let writer = &snapshot.writer;
        Self {
            language: catalog.language().to_string(),
            letter_title: catalog.letter_title().to_string(),
            date_long: format_long_date(catalog.language(), date),
            date_iso: iso_date(date),
            company_name: company.company_name.clone(),
            company_street: company.company_street.clone(),
            company_postal_code: company.company_postal_code.clone(),
            company_city: company.company_city.clone(),
            company_phone: company.company_phone.clone(),
            company_email: company.company_email.clone(),
            reference_number: company.reference_number.clone(),
            first_name: snapshot.employee.first_name.clone(),
            last_name: snapshot.employee.last_name.clone(),
            writer_name: writer.writer_name.clone(),
            writer_position: writer.writer_position.clone(),
            writer_email: writer.writer_email.clone(),
            writer_phone: writer.writer_phone.clone(),
            duty_bullets: derive_duty_bullets(&snapshot.duties_list),
        }
    }

    fn place_and_date(&self) -> String {
        format!("{}, {}", self.company_city, self.date_long)
    }

    fn postal_line(&self) -> String {
        if self.company_postal_code.is_empty() {
            self.company_city.clone()
        } else {
            format!("{} {}", self.company_postal_code, self.company_city)
        }
    }
}

/// Compose the full letter
pub fn compose(resolved: &[ResolvedSection], structural: &StructuralFields) -> Document {
    let mut doc = Document::with_title(structural.letter_title.clone());
    doc.metadata.language = Some(structural.language.clone());
    if !structural.writer_name.is_empty() {
        doc.metadata.author = Some(structural.writer_name.clone());
    }
    doc.metadata
        .set_attribute(ATTR_FIRST_NAME, structural.first_name.clone());
    doc.metadata
        .set_attribute(ATTR_LAST_NAME, structural.last_name.clone());
    doc.metadata.set_attribute(ATTR_DATE, structural.date_iso.clone());

    push_letterhead(&mut doc, structural);

    doc.push(Block::Paragraph(
        Paragraph::bold(BlockRole::Title, structural.letter_title.clone()).aligned(Alignment::Center),
    ));

    for section in SectionKind::BODY_ORDER {
        if section == SectionKind::DutiesList {
            if !structural.duty_bullets.is_empty() {
                doc.push(Block::BulletList(BulletList {
                    items: structural.duty_bullets.clone(),
                    section,
                }));
            }
            continue;
        }
        if let Some(found) = resolved.iter().find(|r| r.section == section && !r.is_empty()) {
            doc.push(Block::Paragraph(Paragraph::body(section, found.text.clone())));
        }
    }

    push_signature(&mut doc, structural);
    doc
}

fn push_letterhead(doc: &mut Document, s: &StructuralFields) {
    doc.push(Block::Paragraph(Paragraph::bold(
        BlockRole::LetterheadCompany,
        s.company_name.clone(),
    )));
    if !s.company_street.is_empty() {
        doc.push(detail(s.company_street.clone()));
    }
    doc.push(detail(s.postal_line()));
    if !s.company_phone.is_empty() {
        doc.push(detail(format!("Tel: {}", s.company_phone)));
    }
    if !s.company_email.is_empty() {
        doc.push(detail(format!("Email: {}", s.company_email)));
    }
    if !s.reference_number.is_empty() {
        doc.push(Block::Paragraph(
            Paragraph::plain(
                BlockRole::LetterheadReference,
                format!("Ref: {}", s.reference_number),
            )
            .aligned(Alignment::Right),
        ));
    }
    doc.push(Block::Paragraph(
        Paragraph::plain(BlockRole::LetterheadDate, s.place_and_date()).aligned(Alignment::Right),
    ));
}

fn detail(text: String) -> Block {
    Block::Paragraph(Paragraph::plain(BlockRole::LetterheadDetail, text))
}

fn push_signature(doc: &mut Document, s: &StructuralFields) {
    let plain = |role, text: String| Block::Paragraph(Paragraph::plain(role, text));

    doc.push(plain(BlockRole::SignatureDate, s.place_and_date()));
    doc.push(plain(BlockRole::SignatureCompany, s.company_name.clone()));
    doc.push(plain(BlockRole::SignatureRule, SIGNATURE_RULE.to_string()));
    doc.push(Block::Paragraph(Paragraph::bold(
        BlockRole::SignatureName,
        s.writer_name.clone(),
    )));
    doc.push(plain(BlockRole::SignaturePosition, s.writer_position.clone()));
    for contact in [&s.writer_email, &s.writer_phone] {
        if !contact.is_empty() {
            doc.push(plain(BlockRole::SignatureContact, contact.clone()));
        }
    }
}
