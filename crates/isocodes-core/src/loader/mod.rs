// crates/isocodes-core/src/loader/mod.rs

//! # Catalog Bootstrap
//!
//! Handles the physical layer (file lookup, decompression) and turns each
//! catalog document into a typed [`Database`].
//!
//! A document is a JSON object keyed by its own ISO code, whose value is the
//! ordered list of flat records:
//!
//! ```json
//! { "4217": [ { "alpha_3": "EUR", "name": "Euro", "numeric": "978" } ] }
//! ```
//!
//! The record schema is closed: an unknown or missing field anywhere fails
//! the whole catalog.

use crate::catalogs::Catalogs;
use crate::common::IsoCode;
use crate::database::Database;
use crate::error::{IsoError, Result};
use crate::model::{Country, Currency, Subdivision};
use crate::traits::Record;
use once_cell::sync::OnceCell;
use serde_json::Value;
use std::collections::HashMap;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub mod common_io;

/// Environment variable overriding the default data directory.
pub const DATA_DIR_ENV: &str = "ISOCODES_DATA_DIR";

static CATALOGS: OnceCell<Catalogs> = OnceCell::new();

/// `data/` next to this crate's manifest.
pub fn default_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// [`DATA_DIR_ENV`] if set and non-empty, otherwise [`default_data_dir`].
pub fn data_dir() -> PathBuf {
    match std::env::var_os(DATA_DIR_ENV) {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => default_data_dir(),
    }
}

impl Catalogs {
    /// The process-wide catalogs, loaded from [`data_dir`] on first use.
    ///
    /// A failed load is not cached; the next call tries again.
    pub fn load() -> Result<&'static Catalogs> {
        CATALOGS.get_or_try_init(|| Catalogs::load_from_dir(data_dir()))
    }

    /// Loads all three catalogs from `dir`, independent of the global
    /// instance.
    pub fn load_from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let countries = Database::<Country>::load_from_dir(dir)?;
        let subdivisions = Database::<Subdivision>::load_from_dir(dir)?;
        let currencies = Database::<Currency>::load_from_dir(dir)?;

        let catalogs = Catalogs::new(countries, subdivisions, currencies)?;
        let stats = catalogs.stats();
        info!(
            dir = %dir.display(),
            countries = stats.countries,
            subdivisions = stats.subdivisions,
            currencies = stats.currencies,
            "catalogs loaded"
        );
        Ok(catalogs)
    }
}

impl<R: Record> Database<R> {
    /// Loads the catalog of `R` from its standard file name inside `dir`.
    pub fn load_from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let path = common_io::dataset_path(dir.as_ref(), R::CATALOG)?;
        Self::load_from_path(path)
    }

    /// Loads the catalog of `R` from an explicit file (`.gz` allowed with
    /// the `compact` feature).
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let reader = common_io::open_stream(path)?;
        let db = Self::from_reader(reader)?;
        debug!(
            catalog = %R::CATALOG,
            path = %path.display(),
            records = db.len(),
            "catalog loaded"
        );
        Ok(db)
    }

    /// Parses a catalog document from any reader.
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        let doc: HashMap<String, Value> = serde_json::from_reader(reader)
            .map_err(|e| IsoError::from_document(R::CATALOG.as_str(), e))?;
        parse_document(doc)
    }

    /// Parses a catalog document held in memory.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::from_reader(json.as_bytes())
    }
}

fn parse_document<R: Record>(mut doc: HashMap<String, Value>) -> Result<Database<R>> {
    let code: IsoCode = R::CATALOG;
    let entries = doc.remove(code.as_str()).ok_or_else(|| IsoError::Schema {
        catalog: code.to_string(),
        message: format!("missing top-level key \"{code}\""),
    })?;

    let raw: Vec<R::Raw> =
        serde_json::from_value(entries).map_err(|e| IsoError::from_document(code.as_str(), e))?;

    Ok(raw.into_iter().map(R::from_raw).collect())
}
