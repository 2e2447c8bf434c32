// crates/isocodes-core/src/model/country.rs
use crate::common::IsoCode;
use crate::traits::{FieldName, Record};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An ISO 3166-1 country.
///
/// `alpha_2`, `alpha_3` and `numeric` are unique across the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Country {
    pub name: String,
    pub alpha_2: String,
    pub alpha_3: String,
    pub flag: String,
    pub numeric: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub official_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub common_name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CountryField {
    Name,
    Alpha2,
    Alpha3,
    Flag,
    Numeric,
    OfficialName,
    CommonName,
}

impl FieldName for CountryField {
    const ALL: &'static [Self] = &[
        CountryField::Name,
        CountryField::Alpha2,
        CountryField::Alpha3,
        CountryField::Flag,
        CountryField::Numeric,
        CountryField::OfficialName,
        CountryField::CommonName,
    ];

    fn as_str(self) -> &'static str {
        match self {
            CountryField::Name => "name",
            CountryField::Alpha2 => "alpha_2",
            CountryField::Alpha3 => "alpha_3",
            CountryField::Flag => "flag",
            CountryField::Numeric => "numeric",
            CountryField::OfficialName => "official_name",
            CountryField::CommonName => "common_name",
        }
    }
}

impl fmt::Display for CountryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Record for Country {
    type Field = CountryField;
    type Raw = Country;

    const KIND: &'static str = "Country";
    const CATALOG: IsoCode = IsoCode::I3166_1;

    fn from_raw(raw: Self::Raw) -> Self {
        raw
    }

    fn field(&self, field: CountryField) -> Option<&str> {
        match field {
            CountryField::Name => Some(&self.name),
            CountryField::Alpha2 => Some(&self.alpha_2),
            CountryField::Alpha3 => Some(&self.alpha_3),
            CountryField::Flag => Some(&self.flag),
            CountryField::Numeric => Some(&self.numeric),
            CountryField::OfficialName => self.official_name.as_deref(),
            CountryField::CommonName => self.common_name.as_deref(),
        }
    }

    fn searchable_fields() -> &'static [CountryField] {
        &[
            CountryField::Name,
            CountryField::OfficialName,
            CountryField::CommonName,
        ]
    }

    fn lookup_fields() -> &'static [CountryField] {
        &[
            CountryField::Name,
            CountryField::OfficialName,
            CountryField::Alpha3,
            CountryField::Alpha2,
        ]
    }
}

impl Country {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn alpha_2(&self) -> &str {
        &self.alpha_2
    }

    pub fn alpha_3(&self) -> &str {
        &self.alpha_3
    }

    pub fn official_name(&self) -> Option<&str> {
        self.official_name.as_deref()
    }

    pub fn common_name(&self) -> Option<&str> {
        self.common_name.as_deref()
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({}/{}/{})",
            self.flag, self.name, self.alpha_2, self.alpha_3, self.numeric
        )
    }
}
