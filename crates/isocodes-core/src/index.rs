// crates/isocodes-core/src/index.rs

//! Exact lookup by binary search over a projected field.
//!
//! The index is only meaningful for fields whose values are unique within
//! the catalog. With duplicates, any one of the matching records may be
//! returned; [`crate::Database`] routes multi-result fields to a linear scan
//! instead.

use crate::traits::Record;
use std::cmp::Ordering;

/// Folding applied to both sides of the comparison.
pub type Fold = fn(&str) -> String;

/// A sorted projection of one field over a record slice.
///
/// Records for which the field is absent are left out.
#[derive(Debug)]
pub struct SortedIndex<'a, R: Record> {
    entries: Vec<(String, &'a R)>,
    fold: Fold,
}

impl<'a, R: Record> SortedIndex<'a, R> {
    pub fn build(records: &'a [R], field: R::Field, fold: Fold) -> Self {
        let mut entries: Vec<(String, &'a R)> = records
            .iter()
            .filter_map(|r| r.field(field).map(|v| (fold(v), r)))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        Self { entries, fold }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Binary search for `target`, folded the same way as the entries.
    pub fn find(&self, target: &str) -> Option<&'a R> {
        self.find_folded(&(self.fold)(target))
    }

    /// Binary search for a target the caller has already folded.
    ///
    /// The target is compared as is against the folded entries.
    pub fn find_folded(&self, target: &str) -> Option<&'a R> {
        let mut low = 0usize;
        let mut high = self.entries.len();
        while low < high {
            let mid = low + (high - low) / 2;
            match self.entries[mid].0.as_str().cmp(target) {
                Ordering::Less => low = mid + 1,
                Ordering::Greater => high = mid,
                Ordering::Equal => return Some(self.entries[mid].1),
            }
        }
        None
    }
}

/// One-shot lookup: build the projection for `field` and search it.
///
/// The projection is rebuilt on every call; catalogs hold at most a few
/// thousand records.
pub fn find_by_field<'a, R: Record>(
    records: &'a [R],
    field: R::Field,
    target: &str,
    fold: Fold,
) -> Option<&'a R> {
    SortedIndex::build(records, field, fold).find(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Country, CountryField};
    use crate::text::{fold_case, fold_key};

    fn country(name: &str, a2: &str, official: Option<&str>) -> Country {
        Country {
            name: name.to_string(),
            alpha_2: a2.to_string(),
            alpha_3: format!("{a2}X"),
            flag: String::new(),
            numeric: "000".to_string(),
            official_name: official.map(str::to_string),
            common_name: None,
        }
    }

    fn sample() -> Vec<Country> {
        vec![
            country("Zambia", "ZM", Some("Republic of Zambia")),
            country("Aruba", "AW", None),
            country("Réunion", "RE", None),
            country("Mexico", "MX", Some("United Mexican States")),
        ]
    }

    #[test]
    fn finds_case_insensitively() {
        let records = sample();
        let hit = find_by_field(&records, CountryField::Alpha2, "mx", fold_case).unwrap();
        assert_eq!(hit.name, "Mexico");
        let hit = find_by_field(&records, CountryField::Name, "ARUBA", fold_case).unwrap();
        assert_eq!(hit.alpha_2, "AW");
    }

    #[test]
    fn absent_values_are_skipped() {
        let records = sample();
        let index = SortedIndex::build(&records, CountryField::OfficialName, fold_case);
        assert_eq!(index.len(), 2);
        assert!(index.find("united mexican states").is_some());

        let index = SortedIndex::build(&records, CountryField::CommonName, fold_case);
        assert!(index.is_empty());
        assert!(index.find("anything").is_none());
    }

    #[test]
    fn missing_value_is_not_found() {
        let records = sample();
        assert!(find_by_field(&records, CountryField::Name, "Atlantis", fold_case).is_none());
        assert!(find_by_field(&records, CountryField::Name, "", fold_case).is_none());
    }

    #[test]
    fn fold_decides_accent_sensitivity() {
        let records = sample();
        assert!(find_by_field(&records, CountryField::Name, "reunion", fold_case).is_none());
        assert!(find_by_field(&records, CountryField::Name, "reunion", fold_key).is_some());
    }

    #[test]
    fn prefolded_target_skips_entry_fold() {
        let records = sample();
        let index = SortedIndex::build(&records, CountryField::Name, fold_case);
        // entries keep their accents, so an accent-stripped target misses
        assert!(index.find_folded(&fold_key("Réunion")).is_none());
        assert!(index.find_folded(&fold_key("Mexico")).is_some());
        assert!(index.find_folded("réunion").is_some());
    }

    #[test]
    fn every_record_is_reachable() {
        let records = sample();
        for r in &records {
            let hit = find_by_field(&records, CountryField::Alpha3, &r.alpha_3, fold_case);
            assert_eq!(hit, Some(r));
        }
    }
}
