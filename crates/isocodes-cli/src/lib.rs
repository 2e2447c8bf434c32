//! isocodes-cli
//! ============
//!
//! Command-line interface for the `isocodes-core` ISO code catalogs.
//!
//! This crate primarily provides a binary (`isocodes`). The library target
//! only carries this overview so docs.rs renders a page for it.
//!
//! Basic usage:
//!
//! ```text
//! isocodes --help
//! isocodes stats
//! isocodes get countries alpha_2 GB
//! isocodes lookup currencies eur
//! isocodes search countries United --cutoff 60
//! isocodes subdivision FR-63
//! ```
//!
//! For programmatic access use the [`isocodes-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
