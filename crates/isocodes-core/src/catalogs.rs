// crates/isocodes-core/src/catalogs.rs
use crate::common::DbStats;
use crate::database::Database;
use crate::error::Result;
use crate::model::{Country, Currency, Subdivision};
use crate::subdivisions::Subdivisions;
use std::sync::Arc;

/// The three bundled catalogs, wired together.
///
/// Built by [`Catalogs::load`] (process-wide, loaded once) or
/// [`Catalogs::load_from_dir`] (independent instance).
#[derive(Debug, Clone)]
pub struct Catalogs {
    countries: Arc<Database<Country>>,
    subdivisions: Subdivisions,
    currencies: Database<Currency>,
}

impl Catalogs {
    /// Assembles already-loaded stores. Fails if the subdivision parent
    /// chains are cyclic.
    pub fn new(
        countries: Database<Country>,
        subdivisions: Database<Subdivision>,
        currencies: Database<Currency>,
    ) -> Result<Self> {
        let countries = Arc::new(countries);
        let subdivisions = Subdivisions::new(subdivisions, Arc::clone(&countries))?;
        Ok(Self {
            countries,
            subdivisions,
            currencies,
        })
    }

    pub fn countries(&self) -> &Database<Country> {
        &self.countries
    }

    pub fn subdivisions(&self) -> &Subdivisions {
        &self.subdivisions
    }

    pub fn currencies(&self) -> &Database<Currency> {
        &self.currencies
    }

    pub fn stats(&self) -> DbStats {
        DbStats {
            countries: self.countries.len(),
            subdivisions: self.subdivisions.len(),
            currencies: self.currencies.len(),
        }
    }
}
