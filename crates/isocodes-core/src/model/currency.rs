// crates/isocodes-core/src/model/currency.rs
use crate::common::IsoCode;
use crate::traits::{FieldName, Record};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An ISO 4217 currency.
///
/// `alpha_3` is unique; `name` is not (historical and regional variants
/// share names, e.g. the two "Leone" entries).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Currency {
    pub alpha_3: String,
    pub name: String,
    pub numeric: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurrencyField {
    Alpha3,
    Name,
    Numeric,
}

impl FieldName for CurrencyField {
    const ALL: &'static [Self] = &[
        CurrencyField::Alpha3,
        CurrencyField::Name,
        CurrencyField::Numeric,
    ];

    fn as_str(self) -> &'static str {
        match self {
            CurrencyField::Alpha3 => "alpha_3",
            CurrencyField::Name => "name",
            CurrencyField::Numeric => "numeric",
        }
    }
}

impl fmt::Display for CurrencyField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Record for Currency {
    type Field = CurrencyField;
    type Raw = Currency;

    const KIND: &'static str = "Currency";
    const CATALOG: IsoCode = IsoCode::I4217;

    fn from_raw(raw: Self::Raw) -> Self {
        raw
    }

    fn field(&self, field: CurrencyField) -> Option<&str> {
        match field {
            CurrencyField::Alpha3 => Some(&self.alpha_3),
            CurrencyField::Name => Some(&self.name),
            CurrencyField::Numeric => Some(&self.numeric),
        }
    }

    fn searchable_fields() -> &'static [CurrencyField] {
        &[CurrencyField::Name]
    }

    fn multi_result_fields() -> &'static [CurrencyField] {
        &[CurrencyField::Name]
    }

    fn lookup_fields() -> &'static [CurrencyField] {
        &[CurrencyField::Alpha3]
    }
}

impl Currency {
    pub fn alpha_3(&self) -> &str {
        &self.alpha_3
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.alpha_3, self.name.trim(), self.numeric)
    }
}
