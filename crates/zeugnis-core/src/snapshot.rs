//! Form snapshot: every field value and selection at one point in time
//!
//! The snapshot serialises as one flat JSON object with camelCase keys, the
//! same shape that is written to the persisted slot. Unknown keys are
//! ignored and missing keys take their defaults, so older saves still load.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;
use zeugnis_ast::SectionKind;

use crate::rating::{ParseKeyError, PerformanceCategory, Rating};

/// A single free-text form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Title,
    FirstName,
    LastName,
    DateOfBirth,
    PlaceOfBirth,
    Position,
    Department,
    StartDate,
    EndDate,
    CompanyName,
    CompanyStreet,
    CompanyPostalCode,
    CompanyCity,
    CompanyPhone,
    CompanyEmail,
    ReferenceNumber,
    WriterName,
    WriterPosition,
    WriterEmail,
    WriterPhone,
}

impl Field {
    /// Every field, employee first, then company, then writer
    pub const ALL: [Field; 20] = [
        Field::Title,
        Field::FirstName,
        Field::LastName,
        Field::DateOfBirth,
        Field::PlaceOfBirth,
        Field::Position,
        Field::Department,
        Field::StartDate,
        Field::EndDate,
        Field::CompanyName,
        Field::CompanyStreet,
        Field::CompanyPostalCode,
        Field::CompanyCity,
        Field::CompanyPhone,
        Field::CompanyEmail,
        Field::ReferenceNumber,
        Field::WriterName,
        Field::WriterPosition,
        Field::WriterEmail,
        Field::WriterPhone,
    ];

    /// Fields that must be non-empty before a letter is generated
    pub const REQUIRED: [Field; 9] = [
        Field::FirstName,
        Field::LastName,
        Field::Position,
        Field::StartDate,
        Field::EndDate,
        Field::CompanyName,
        Field::CompanyCity,
        Field::WriterName,
        Field::WriterPosition,
    ];

    /// Placeholder and JSON name
    pub fn name(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::DateOfBirth => "dateOfBirth",
            Field::PlaceOfBirth => "placeOfBirth",
            Field::Position => "position",
            Field::Department => "department",
            Field::StartDate => "startDate",
            Field::EndDate => "endDate",
            Field::CompanyName => "companyName",
            Field::CompanyStreet => "companyStreet",
            Field::CompanyPostalCode => "companyPostalCode",
            Field::CompanyCity => "companyCity",
            Field::CompanyPhone => "companyPhone",
            Field::CompanyEmail => "companyEmail",
            Field::ReferenceNumber => "referenceNumber",
            Field::WriterName => "writerName",
            Field::WriterPosition => "writerPosition",
            Field::WriterEmail => "writerEmail",
            Field::WriterPhone => "writerPhone",
        }
    }

    /// Whether generation requires this field
    pub fn is_required(self) -> bool {
        Field::REQUIRED.contains(&self)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|f| f.name() == s)
            .ok_or_else(|| ParseKeyError::new("field", s))
    }
}

/// Employee identity and employment dates
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeeFields {
    /// Key into `form.titleOptions` (`mr`, `ms`, `dr`), or empty
    pub title: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub place_of_birth: String,
    pub position: String,
    pub department: String,
    pub start_date: String,
    pub end_date: String,
}

/// Company identity for the letterhead
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompanyFields {
    pub company_name: String,
    pub company_street: String,
    pub company_postal_code: String,
    pub company_city: String,
    pub company_phone: String,
    pub company_email: String,
    pub reference_number: String,
}

/// The person signing the letter
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WriterFields {
    pub writer_name: String,
    pub writer_position: String,
    pub writer_email: String,
    pub writer_phone: String,
}

/// Rating and variant chosen for one performance category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformanceSelection {
    pub rating: Rating,
    /// 1-based variant scoped to `rating`
    pub variant: u32,
}

impl Default for PerformanceSelection {
    fn default() -> Self {
        Self {
            rating: Rating::VeryGood,
            variant: 1,
        }
    }
}

/// Additional-phrase toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AdditionalToggles {
    pub application: bool,
    pub offer: bool,
}

/// All categorical choices on the form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Selections {
    pub intro_variant: u32,
    pub company_variant: u32,
    pub duties_variant: u32,
    /// Categories absent from the map use the default selection
    pub performance: BTreeMap<PerformanceCategory, PerformanceSelection>,
    /// Key into `form.leavingReasons`
    pub leaving_reason: Option<String>,
    pub additional: AdditionalToggles,
}

impl Default for Selections {
    fn default() -> Self {
        Self {
            intro_variant: 1,
            company_variant: 1,
            duties_variant: 1,
            performance: BTreeMap::new(),
            leaving_reason: None,
            additional: AdditionalToggles::default(),
        }
    }
}

/// Every field value and selection on the form
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormSnapshot {
    #[serde(flatten)]
    pub employee: EmployeeFields,
    #[serde(flatten)]
    pub company: CompanyFields,
    #[serde(flatten)]
    pub writer: WriterFields,
    #[serde(flatten)]
    pub selections: Selections,
    /// Free-text duties, one per line
    pub duties_list: String,
    /// Section texts edited by hand, used instead of the catalog text
    pub section_texts: BTreeMap<SectionKind, String>,
}

impl FormSnapshot {
    /// Create an empty snapshot with default selections
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a field
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.employee.title,
            Field::FirstName => &self.employee.first_name,
            Field::LastName => &self.employee.last_name,
            Field::DateOfBirth => &self.employee.date_of_birth,
            Field::PlaceOfBirth => &self.employee.place_of_birth,
            Field::Position => &self.employee.position,
            Field::Department => &self.employee.department,
            Field::StartDate => &self.employee.start_date,
            Field::EndDate => &self.employee.end_date,
            Field::CompanyName => &self.company.company_name,
            Field::CompanyStreet => &self.company.company_street,
            Field::CompanyPostalCode => &self.company.company_postal_code,
            Field::CompanyCity => &self.company.company_city,
            Field::CompanyPhone => &self.company.company_phone,
            Field::CompanyEmail => &self.company.company_email,
            Field::ReferenceNumber => &self.company.reference_number,
            Field::WriterName => &self.writer.writer_name,
            Field::WriterPosition => &self.writer.writer_position,
            Field::WriterEmail => &self.writer.writer_email,
            Field::WriterPhone => &self.writer.writer_phone,
        }
    }

    fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Title => &mut self.employee.title,
            Field::FirstName => &mut self.employee.first_name,
            Field::LastName => &mut self.employee.last_name,
            Field::DateOfBirth => &mut self.employee.date_of_birth,
            Field::PlaceOfBirth => &mut self.employee.place_of_birth,
            Field::Position => &mut self.employee.position,
            Field::Department => &mut self.employee.department,
            Field::StartDate => &mut self.employee.start_date,
            Field::EndDate => &mut self.employee.end_date,
            Field::CompanyName => &mut self.company.company_name,
            Field::CompanyStreet => &mut self.company.company_street,
            Field::CompanyPostalCode => &mut self.company.company_postal_code,
            Field::CompanyCity => &mut self.company.company_city,
            Field::CompanyPhone => &mut self.company.company_phone,
            Field::CompanyEmail => &mut self.company.company_email,
            Field::ReferenceNumber => &mut self.company.reference_number,
            Field::WriterName => &mut self.writer.writer_name,
            Field::WriterPosition => &mut self.writer.writer_position,
            Field::WriterEmail => &mut self.writer.writer_email,
            Field::WriterPhone => &mut self.writer.writer_phone,
        }
    }

    /// Replace a field value
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        *self.field_mut(field) = value.into();
    }

    /// Builder form of [`set_field`](Self::set_field)
    pub fn with_field(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set_field(field, value);
        self
    }

    /// Selection for a performance category
    pub fn performance(&self, category: PerformanceCategory) -> PerformanceSelection {
        self.selections
            .performance
            .get(&category)
            .copied()
            .unwrap_or_default()
    }

    /// Change a category's rating; the variant always returns to 1
    pub fn set_rating(&mut self, category: PerformanceCategory, rating: Rating) {
        let entry = self.selections.performance.entry(category).or_default();
        if entry.variant != 1 {
            debug!(
                category = category.key(),
                rating = rating.key(),
                previous_variant = entry.variant,
                "Rating changed, variant reset to 1"
            );
        }
        entry.rating = rating;
        entry.variant = 1;
    }

    /// Choose a variant under the category's current rating
    pub fn set_variant(&mut self, category: PerformanceCategory, variant: u32) {
        self.selections
            .performance
            .entry(category)
            .or_default()
            .variant = variant;
    }

    /// Return every performance category to variant 1, keeping its rating
    pub fn reset_variants(&mut self) {
        for category in PerformanceCategory::ALL {
            self.selections.performance.entry(category).or_default().variant = 1;
        }
    }

    /// Hand-edited text of a section, if any
    pub fn section_text(&self, section: SectionKind) -> Option<&str> {
        self.section_texts.get(&section).map(String::as_str)
    }

    /// Replace a section's text with an edited one
    ///
    /// Only template-resolved sections can be edited; the duties list is
    /// free text already.
    pub fn set_section_text(&mut self, section: SectionKind, text: impl Into<String>) {
        if !section.is_template_resolved() {
            debug!(section = section.as_str(), "Ignoring edit of a free-text section");
            return;
        }
        self.section_texts.insert(section, text.into());
    }

    /// Drop the edited text of a section; returns whether there was one
    pub fn clear_section_text(&mut self, section: SectionKind) -> bool {
        self.section_texts.remove(&section).is_some()
    }
}
