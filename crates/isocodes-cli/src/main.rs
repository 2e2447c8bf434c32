//! isocodes: command-line access to the ISO code catalogs
//!
//! Usage examples
//! --------------
//!
//! - Show record counts
//!   $ isocodes stats
//!
//! - Exact match on one field (multi-result fields print every hit)
//!   $ isocodes get countries alpha_3 gbr
//!   $ isocodes get currencies name Leone
//!
//! - Try the identifying fields in order
//!   $ isocodes lookup countries "united kingdom"
//!
//! - Fuzzy search
//!   $ isocodes search currencies Real --cutoff 55
//!
//! - Subdivision with country, parents and children
//!   $ isocodes --json subdivision FR-ARA
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `warn`).
mod args;

use crate::args::{Catalog, CliArgs, Commands};
use clap::Parser;
use isocodes_core::{Catalogs, Database, Record, SubdivisionField};
use serde::Serialize;
use serde_json::json;
use std::fmt::Display;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Dispatches a generic operation to the database behind `catalog`.
macro_rules! with_db {
    ($catalogs:expr, $catalog:expr, |$db:ident| $body:expr) => {
        match $catalog {
            Catalog::Countries => {
                let $db = $catalogs.countries();
                $body
            }
            Catalog::Subdivisions => {
                let $db = $catalogs.subdivisions().database();
                $body
            }
            Catalog::Currencies => {
                let $db = $catalogs.currencies();
                $body
            }
        }
    };
}

fn print_records<'a, R, I>(records: I, json: bool) -> anyhow::Result<()>
where
    R: Record + Display + Serialize + 'a,
    I: IntoIterator<Item = &'a R>,
{
    if json {
        let all: Vec<&R> = records.into_iter().collect();
        println!("{}", serde_json::to_string_pretty(&all)?);
    } else {
        for r in records {
            println!("{r}");
        }
    }
    Ok(())
}

fn list<R: Record + Display + Serialize>(db: &Database<R>, json: bool) -> anyhow::Result<()> {
    print_records(db, json)
}

fn get<R: Record + Display + Serialize>(
    db: &Database<R>,
    field: &str,
    value: &str,
    json: bool,
) -> anyhow::Result<()> {
    match db.get([(field, value)])? {
        Some(hit) => print_records(hit.iter(), json),
        None => {
            eprintln!("No {} with {field} = {value:?}", R::KIND);
            Ok(())
        }
    }
}

fn lookup<R: Record + Display + Serialize>(
    db: &Database<R>,
    value: &str,
    json: bool,
) -> anyhow::Result<()> {
    match db.lookup(value)? {
        Some(r) => print_records([r], json),
        None => {
            eprintln!("No {} found for: {value}", R::KIND);
            Ok(())
        }
    }
}

fn search<R: Record + Display + Serialize>(
    db: &Database<R>,
    query: &str,
    cutoff: f64,
    json: bool,
) -> anyhow::Result<()> {
    let hits = db.search_with_cutoff(query, cutoff)?;
    if json {
        let rows: Vec<_> = hits
            .iter()
            .map(|h| json!({ "score": h.score, "record": h.record }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else if hits.is_empty() {
        println!("No {} scored {cutoff} or more for: {query}", R::KIND);
    } else {
        for h in &hits {
            println!("{:6.2}  {}", h.score, h.record);
        }
    }
    Ok(())
}

fn subdivision(catalogs: &Catalogs, code: &str, json: bool) -> anyhow::Result<()> {
    let subs = catalogs.subdivisions();
    let Some(sub) = subs.find(SubdivisionField::Code, code) else {
        eprintln!("Subdivision {code} not found");
        return Ok(());
    };

    let country = subs.country_of(sub);
    let ancestors: Vec<_> = subs.ancestors(sub).collect();
    let children = subs.children_of(sub);

    if json {
        let view = json!({
            "subdivision": sub,
            "country": country,
            "ancestors": ancestors,
            "children": children,
        });
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    println!("{sub}");
    match country {
        Some(c) => println!("Country: {c}"),
        None => println!("Country: {} (not in catalog)", sub.country_code),
    }
    for (depth, parent) in ancestors.iter().enumerate() {
        println!("{}Parent: {parent}", "  ".repeat(depth));
    }
    if !children.is_empty() {
        println!("Children ({}):", children.len());
        for child in children {
            println!("- {child}");
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing();

    let owned;
    let catalogs: &Catalogs = match &args.data_dir {
        Some(dir) => {
            debug!(dir = %dir.display(), "loading catalogs from explicit directory");
            owned = Catalogs::load_from_dir(dir)?;
            &owned
        }
        None => Catalogs::load()?,
    };

    match args.command {
        Commands::Stats => {
            let stats = catalogs.stats();
            if args.json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("Catalog statistics:");
                println!("  Countries (ISO 3166-1): {}", stats.countries);
                println!("  Subdivisions (ISO 3166-2): {}", stats.subdivisions);
                println!("  Currencies (ISO 4217): {}", stats.currencies);
            }
        }

        Commands::List { catalog } => with_db!(catalogs, catalog, |db| list(db, args.json))?,

        Commands::Get {
            catalog,
            field,
            value,
        } => with_db!(catalogs, catalog, |db| get(db, &field, &value, args.json))?,

        Commands::Lookup { catalog, value } => {
            with_db!(catalogs, catalog, |db| lookup(db, &value, args.json))?
        }

        Commands::Search {
            catalog,
            query,
            cutoff,
        } => with_db!(catalogs, catalog, |db| search(db, &query, cutoff, args.json))?,

        Commands::Subdivision { code } => subdivision(catalogs, &code, args.json)?,
    }

    Ok(())
}
