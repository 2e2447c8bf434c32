// crates/isocodes-core/src/model/mod.rs
pub mod country;
pub mod currency;
pub mod subdivision;

pub use country::{Country, CountryField};
pub use currency::{Currency, CurrencyField};
pub use subdivision::{Subdivision, SubdivisionField, SubdivisionRaw};
