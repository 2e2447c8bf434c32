// crates/isocodes-core/src/model/subdivision.rs
use crate::common::IsoCode;
use crate::traits::{FieldName, Record};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw subdivision entry as it appears in the ISO 3166-2 document.
///
/// `parent` is the parent's code *without* the country prefix
/// (`"ARA"` for `FR-ARA`).
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SubdivisionRaw {
    pub code: String,
    pub name: String,
    #[serde(rename = "type")]
    pub subdivision_type: String,
    #[serde(default)]
    pub parent: Option<String>,
}

/// An ISO 3166-2 subdivision.
///
/// `country_code` and `parent_code` are derived at load time from `code`
/// and the raw `parent` field. `code` is unique; `name`, `type` and
/// `country_code` are not.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Subdivision {
    pub name: String,
    pub code: String,
    #[serde(rename = "type")]
    pub subdivision_type: String,
    pub country_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_code: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubdivisionField {
    Name,
    Code,
    Type,
    CountryCode,
    ParentCode,
}

impl FieldName for SubdivisionField {
    const ALL: &'static [Self] = &[
        SubdivisionField::Name,
        SubdivisionField::Code,
        SubdivisionField::Type,
        SubdivisionField::CountryCode,
        SubdivisionField::ParentCode,
    ];

    fn as_str(self) -> &'static str {
        match self {
            SubdivisionField::Name => "name",
            SubdivisionField::Code => "code",
            SubdivisionField::Type => "type",
            SubdivisionField::CountryCode => "country_code",
            SubdivisionField::ParentCode => "parent_code",
        }
    }
}

impl fmt::Display for SubdivisionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Prefix of `code` before the first `-` (the whole code if there is none).
pub fn country_code_of(code: &str) -> &str {
    code.split_once('-').map_or(code, |(country, _)| country)
}

/// `{country}-{parent}` for a raw parent reference.
pub fn parent_code_of(code: &str, parent: Option<&str>) -> Option<String> {
    parent.map(|p| format!("{}-{}", country_code_of(code), p))
}

impl Record for Subdivision {
    type Field = SubdivisionField;
    type Raw = SubdivisionRaw;

    const KIND: &'static str = "Subdivision";
    const CATALOG: IsoCode = IsoCode::I3166_2;

    fn from_raw(raw: SubdivisionRaw) -> Self {
        let country_code = country_code_of(&raw.code).to_string();
        let parent_code = parent_code_of(&raw.code, raw.parent.as_deref());
        Subdivision {
            name: raw.name,
            code: raw.code,
            subdivision_type: raw.subdivision_type,
            country_code,
            parent_code,
        }
    }

    fn field(&self, field: SubdivisionField) -> Option<&str> {
        match field {
            SubdivisionField::Name => Some(&self.name),
            SubdivisionField::Code => Some(&self.code),
            SubdivisionField::Type => Some(&self.subdivision_type),
            SubdivisionField::CountryCode => Some(&self.country_code),
            SubdivisionField::ParentCode => self.parent_code.as_deref(),
        }
    }

    fn searchable_fields() -> &'static [SubdivisionField] {
        &[SubdivisionField::Name]
    }

    fn multi_result_fields() -> &'static [SubdivisionField] {
        &[
            SubdivisionField::Name,
            SubdivisionField::Type,
            SubdivisionField::CountryCode,
        ]
    }

    fn lookup_fields() -> &'static [SubdivisionField] {
        &[SubdivisionField::Code]
    }
}

impl Subdivision {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn subdivision_type(&self) -> &str {
        &self.subdivision_type
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    pub fn parent_code(&self) -> Option<&str> {
        self.parent_code.as_deref()
    }
}

impl fmt::Display for Subdivision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} [{}]", self.code, self.name, self.subdivision_type)
    }
}
