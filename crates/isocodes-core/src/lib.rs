// crates/isocodes-core/src/lib.rs

//! In-memory ISO 3166-1 (countries), ISO 3166-2 (subdivisions) and
//! ISO 4217 (currencies) catalogs.
//!
//! ```rust,no_run
//! use isocodes_core::prelude::*;
//!
//! let catalogs = Catalogs::load()?;
//! let gb = catalogs.countries().lookup("GBR")?.expect("United Kingdom");
//! assert_eq!(gb.alpha_2, "GB");
//!
//! for hit in catalogs.currencies().search("Real")? {
//!     println!("{:5.1} {}", hit.score, hit.record);
//! }
//! # Ok::<(), isocodes_core::IsoError>(())
//! ```

pub mod catalogs;
pub mod common;
pub mod database;
pub mod error;
pub mod fuzzy;
pub mod index;
pub mod loader; // Bootstrap from bundled documents
pub mod model;
pub mod subdivisions;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::catalogs::Catalogs;
pub use crate::common::{DbStats, IsoCode};
pub use crate::database::{Database, Match, DEFAULT_CUTOFF};
pub use crate::error::{ErrorKind, IsoError, Result};
pub use crate::fuzzy::Scored;
pub use crate::loader::{data_dir, default_data_dir, DATA_DIR_ENV};
pub use crate::model::{
    Country, CountryField, Currency, CurrencyField, Subdivision, SubdivisionField,
};
pub use crate::subdivisions::{Ancestors, Subdivisions};
pub use crate::text::{fold_case, fold_key, normalize};
pub use crate::traits::{FieldName, Record};

/// Everything needed for day-to-day queries.
pub mod prelude {
    pub use crate::{
        Catalogs, Country, CountryField, Currency, CurrencyField, Database, ErrorKind,
        FieldName, IsoError, Match, Record, Scored, Subdivision, SubdivisionField,
        Subdivisions, DEFAULT_CUTOFF,
    };
}
