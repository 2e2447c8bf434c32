// crates/isocodes-core/src/common.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The ISO code families shipped as catalogs.
///
/// The string form (`"3166-1"`, ...) is both the top-level key of the
/// catalog document and the stem of its file name (`iso3166-1.json`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IsoCode {
    #[serde(rename = "3166-1")]
    I3166_1,
    #[serde(rename = "3166-2")]
    I3166_2,
    #[serde(rename = "4217")]
    I4217,
}

impl IsoCode {
    pub const ALL: [IsoCode; 3] = [IsoCode::I3166_1, IsoCode::I3166_2, IsoCode::I4217];

    pub fn as_str(self) -> &'static str {
        match self {
            IsoCode::I3166_1 => "3166-1",
            IsoCode::I3166_2 => "3166-2",
            IsoCode::I4217 => "4217",
        }
    }

    /// File name of the bundled document, e.g. `iso4217.json`.
    pub fn file_name(self) -> String {
        format!("iso{}.json", self.as_str())
    }
}

impl fmt::Display for IsoCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IsoCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IsoCode::ALL
            .into_iter()
            .find(|code| code.as_str() == s.trim())
            .ok_or_else(|| format!("unknown ISO code family: {s}"))
    }
}

/// Simple aggregate statistics for the loaded catalogs.
///
/// Returned by [`crate::Catalogs::stats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbStats {
    pub countries: usize,
    pub subdivisions: usize,
    pub currencies: usize,
}
