// crates/isocodes-core/src/subdivisions.rs

//! Subdivision store with cross references.
//!
//! A subdivision points at its country (`country_code` → `Country.alpha_2`)
//! and optionally at a parent subdivision (`parent_code` → `Subdivision.code`).
//! Both are resolved by lookup on every call; nothing is cached and records
//! never hold references to each other.

use crate::database::Database;
use crate::error::{IsoError, Result};
use crate::model::{Country, CountryField, Subdivision, SubdivisionField};
use crate::text::fold_case;
use crate::traits::Record;
use std::collections::{HashMap, HashSet};
use std::ops::Deref;
use std::sync::Arc;

/// The ISO 3166-2 store plus the country store it resolves against.
///
/// Derefs to [`Database<Subdivision>`], so every record-store operation is
/// available directly.
#[derive(Debug, Clone)]
pub struct Subdivisions {
    db: Database<Subdivision>,
    countries: Arc<Database<Country>>,
}

impl Subdivisions {
    /// Wires the subdivision store to its country store.
    ///
    /// Fails with a schema error if any parent chain loops back on itself.
    /// Parent codes that point at no record are accepted and resolve to
    /// `None`.
    pub fn new(db: Database<Subdivision>, countries: Arc<Database<Country>>) -> Result<Self> {
        check_acyclic(&db)?;
        Ok(Self { db, countries })
    }

    pub fn countries(&self) -> &Database<Country> {
        &self.countries
    }

    /// The country owning `sub`, or `None` if the country store has no
    /// matching `alpha_2`.
    pub fn country_of(&self, sub: &Subdivision) -> Option<&Country> {
        self.countries.find(CountryField::Alpha2, &sub.country_code)
    }

    /// The direct parent of `sub`; `None` for top-level subdivisions.
    pub fn parent_of(&self, sub: &Subdivision) -> Option<&Subdivision> {
        let code = sub.parent_code.as_deref()?;
        self.db.find(SubdivisionField::Code, code)
    }

    /// Parent chain of `sub`, nearest first. Stops at the first missing link.
    pub fn ancestors<'a>(&'a self, sub: &'a Subdivision) -> Ancestors<'a> {
        Ancestors {
            subdivisions: self,
            next: self.parent_of(sub),
        }
    }

    /// Subdivisions whose parent is `sub`, in catalog order.
    pub fn children_of(&self, sub: &Subdivision) -> Vec<&Subdivision> {
        let code = fold_case(&sub.code);
        self.db
            .iter()
            .filter(|s| s.parent_code.as_deref().is_some_and(|p| fold_case(p) == code))
            .collect()
    }

    /// All subdivisions of the country with `alpha_2`, in catalog order.
    pub fn of_country(&self, alpha_2: &str) -> Vec<&Subdivision> {
        self.db
            .get_by(SubdivisionField::CountryCode, alpha_2)
            .map(|m| m.into_vec())
            .unwrap_or_default()
    }

    pub fn database(&self) -> &Database<Subdivision> {
        &self.db
    }
}

impl Deref for Subdivisions {
    type Target = Database<Subdivision>;

    fn deref(&self) -> &Self::Target {
        &self.db
    }
}

/// Iterator returned by [`Subdivisions::ancestors`].
#[derive(Debug, Clone)]
pub struct Ancestors<'a> {
    subdivisions: &'a Subdivisions,
    next: Option<&'a Subdivision>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a Subdivision;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.subdivisions.parent_of(current);
        Some(current)
    }
}

fn check_acyclic(db: &Database<Subdivision>) -> Result<()> {
    let by_code: HashMap<String, &Subdivision> =
        db.iter().map(|s| (fold_case(&s.code), s)).collect();

    for start in db {
        let mut seen = HashSet::new();
        let mut current = Some(start);
        while let Some(sub) = current {
            if !seen.insert(fold_case(&sub.code)) {
                return Err(IsoError::Schema {
                    catalog: Subdivision::CATALOG.to_string(),
                    message: format!("cyclic parent chain starting at {}", start.code),
                });
            }
            current = sub
                .parent_code
                .as_deref()
                .and_then(|p| by_code.get(&fold_case(p)).copied());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::model::SubdivisionRaw;

    fn sub(code: &str, name: &str, parent: Option<&str>) -> Subdivision {
        Subdivision::from_raw(SubdivisionRaw {
            code: code.to_string(),
            name: name.to_string(),
            subdivision_type: "Test".to_string(),
            parent: parent.map(str::to_string),
        })
    }

    fn countries() -> Arc<Database<Country>> {
        Arc::new(Database::new(vec![Country {
            name: "France".to_string(),
            alpha_2: "FR".to_string(),
            alpha_3: "FRA".to_string(),
            flag: String::new(),
            numeric: "250".to_string(),
            official_name: Some("French Republic".to_string()),
            common_name: None,
        }]))
    }

    fn france() -> Subdivisions {
        let db = Database::new(vec![
            sub("FR-ARA", "Auvergne-Rhône-Alpes", None),
            sub("FR-63", "Puy-de-Dôme", Some("ARA")),
            sub("FR-69", "Rhône", Some("ARA")),
            sub("FR-69M", "Métropole de Lyon", Some("69")),
            sub("FR-XX", "Orphan", Some("ZZ")),
            sub("DE-BY", "Bayern", None),
        ]);
        Subdivisions::new(db, countries()).unwrap()
    }

    #[test]
    fn resolves_country() {
        let subs = france();
        let puy = subs.find(SubdivisionField::Code, "FR-63").unwrap();
        assert_eq!(subs.country_of(puy).unwrap().name, "France");

        // no such country in the store
        let bayern = subs.find(SubdivisionField::Code, "DE-BY").unwrap();
        assert!(subs.country_of(bayern).is_none());
    }

    #[test]
    fn resolves_parent() {
        let subs = france();
        let puy = subs.find(SubdivisionField::Code, "FR-63").unwrap();
        assert_eq!(subs.parent_of(puy).unwrap().code, "FR-ARA");

        let ara = subs.parent_of(puy).unwrap();
        assert!(subs.parent_of(ara).is_none());

        let orphan = subs.find(SubdivisionField::Code, "FR-XX").unwrap();
        assert!(subs.parent_of(orphan).is_none());
    }

    #[test]
    fn ancestors_walk_to_the_root() {
        let subs = france();
        let lyon = subs.find(SubdivisionField::Code, "FR-69M").unwrap();
        let chain: Vec<_> = subs.ancestors(lyon).map(|s| s.code.as_str()).collect();
        assert_eq!(chain, ["FR-69", "FR-ARA"]);

        let ara = subs.find(SubdivisionField::Code, "FR-ARA").unwrap();
        assert_eq!(subs.ancestors(ara).count(), 0);
    }

    #[test]
    fn children_in_catalog_order() {
        let subs = france();
        let ara = subs.find(SubdivisionField::Code, "FR-ARA").unwrap();
        let kids: Vec<_> = subs.children_of(ara).iter().map(|s| s.code.as_str()).collect();
        assert_eq!(kids, ["FR-63", "FR-69"]);

        let puy = subs.find(SubdivisionField::Code, "FR-63").unwrap();
        assert!(subs.children_of(puy).is_empty());
    }

    #[test]
    fn of_country_filters_by_prefix() {
        let subs = france();
        assert_eq!(subs.of_country("fr").len(), 5);
        assert_eq!(subs.of_country("DE").len(), 1);
        assert!(subs.of_country("US").is_empty());
    }

    #[test]
    fn rejects_cyclic_parent_chains() {
        let db = Database::new(vec![
            sub("XX-A", "A", Some("B")),
            sub("XX-B", "B", Some("C")),
            sub("XX-C", "C", Some("A")),
        ]);
        let err = Subdivisions::new(db, countries()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Schema);
        assert!(err.to_string().contains("cyclic"));

        let db = Database::new(vec![sub("XX-A", "A", Some("A"))]);
        assert!(Subdivisions::new(db, countries()).is_err());
    }

    #[test]
    fn derefs_to_record_store() {
        let subs = france();
        assert_eq!(subs.len(), 6);
        let hit = subs.get([("code", "fr-69")]).unwrap().unwrap();
        assert_eq!(hit.one().unwrap().name, "Rhône");
        assert_eq!(subs.lookup("fr-ara").unwrap().unwrap().name, "Auvergne-Rhône-Alpes");
    }
}
