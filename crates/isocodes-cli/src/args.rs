use clap::{Parser, Subcommand, ValueEnum};
use isocodes_core::DEFAULT_CUTOFF;
use std::path::PathBuf;

/// CLI arguments for isocodes-cli
#[derive(Debug, Parser)]
#[command(
    name = "isocodes",
    version,
    about = "CLI for querying the ISO 3166-1, ISO 3166-2 and ISO 4217 catalogs"
)]
pub struct CliArgs {
    /// Directory holding iso3166-1.json, iso3166-2.json and iso4217.json
    /// (default: $ISOCODES_DATA_DIR, then the bundled data)
    #[arg(short = 'd', long = "data-dir", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Print records as JSON instead of one line per record
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Catalog {
    /// ISO 3166-1
    Countries,
    /// ISO 3166-2
    Subdivisions,
    /// ISO 4217
    Currencies,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the number of records per catalog
    Stats,

    /// List every record of a catalog
    List {
        #[arg(value_enum)]
        catalog: Catalog,
    },

    /// Exact, case-insensitive match on one field
    Get {
        #[arg(value_enum)]
        catalog: Catalog,
        /// Field name (e.g. alpha_2, name, code)
        field: String,
        value: String,
    },

    /// Try the identifying fields of a catalog in order
    Lookup {
        #[arg(value_enum)]
        catalog: Catalog,
        value: String,
    },

    /// Fuzzy search over the searchable fields of a catalog
    Search {
        #[arg(value_enum)]
        catalog: Catalog,
        query: String,
        /// Minimum score (0-100)
        #[arg(short, long, default_value_t = DEFAULT_CUTOFF)]
        cutoff: f64,
    },

    /// Show a subdivision with its country, parent chain and children
    Subdivision {
        /// ISO 3166-2 code (e.g. FR-63)
        code: String,
    },
}
