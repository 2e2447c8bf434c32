// crates/isocodes-core/src/database.rs

//! # Record Store
//!
//! [`Database`] owns the immutable records of one catalog and answers the
//! three query shapes:
//!
//! - [`Database::get`]: exactly one `field = value` criterion, exact
//!   case-insensitive match
//! - [`Database::lookup`]: one value tried against the identifying fields
//!   of the record type, in priority order
//! - [`Database::search`]: fuzzy ranking over the searchable fields
//!
//! "Nothing found" is `None`, never an error. Errors are reserved for
//! misuse (see [`crate::error::IsoError`]).

use crate::error::{IsoError, Result};
use crate::fuzzy::{FuzzyMatcher, Scored};
use crate::index::{find_by_field, SortedIndex};
use crate::text::{fold_case, fold_key};
use crate::traits::{FieldName, Record};
use serde_json::Value;
use tracing::trace;

/// Minimum score a record needs to appear in [`Database::search`] results.
pub const DEFAULT_CUTOFF: f64 = 50.0;

/// Result of an exact `get`.
///
/// Unique fields yield [`Match::One`]; multi-result fields always yield
/// [`Match::Many`] (non-empty, catalog order), even with a single hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Match<'a, R> {
    One(&'a R),
    Many(Vec<&'a R>),
}

impl<'a, R> Match<'a, R> {
    /// The single record of a [`Match::One`].
    pub fn one(&self) -> Option<&'a R> {
        match self {
            Match::One(r) => Some(*r),
            Match::Many(_) => None,
        }
    }

    /// The records of a [`Match::Many`].
    pub fn many(&self) -> Option<&[&'a R]> {
        match self {
            Match::One(_) => None,
            Match::Many(v) => Some(v.as_slice()),
        }
    }

    pub fn as_slice(&self) -> &[&'a R] {
        match self {
            Match::One(r) => std::slice::from_ref(r),
            Match::Many(v) => v.as_slice(),
        }
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a R> + '_ {
        self.as_slice().iter().copied()
    }

    pub fn into_vec(self) -> Vec<&'a R> {
        match self {
            Match::One(r) => vec![r],
            Match::Many(v) => v,
        }
    }
}

/// The immutable record collection of one catalog.
///
/// Iteration order is catalog (document) order and never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Database<R: Record> {
    records: Vec<R>,
}

impl<R: Record> Database<R> {
    pub fn new(records: Vec<R>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.records.iter()
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Exact match on a single criterion given by field name.
    ///
    /// Fails when the number of criteria is not exactly one, when the field
    /// is not part of the schema, or when the value is not a JSON string.
    ///
    /// # Examples
    /// ```rust
    /// use isocodes_core::{Currency, Database};
    ///
    /// let db = Database::new(vec![
    ///     Currency { alpha_3: "SLE".into(), name: "Leone".into(), numeric: "925".into() },
    ///     Currency { alpha_3: "SLL".into(), name: "Leone".into(), numeric: "694".into() },
    /// ]);
    ///
    /// let hit = db.get([("alpha_3", "sll")]).unwrap().unwrap();
    /// assert_eq!(hit.one().unwrap().numeric, "694");
    ///
    /// let leones = db.get([("name", " LEONE ")]).unwrap().unwrap();
    /// assert_eq!(leones.len(), 2);
    ///
    /// assert!(db.get([("symbol", "Le")]).is_err());
    /// assert!(db.get([("numeric", 694)]).is_err());
    /// ```
    pub fn get<I, K, V>(&self, criteria: I) -> Result<Option<Match<'_, R>>>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let mut criteria: Vec<(String, Value)> = criteria
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        if criteria.len() != 1 {
            return Err(IsoError::CriteriaCount(criteria.len()));
        }
        let (name, value) = criteria.remove(0);

        let field = R::Field::from_name(&name).ok_or_else(|| IsoError::InvalidField {
            record: R::KIND,
            field: name.clone(),
            allowed: R::Field::names(),
        })?;

        let value = match value {
            Value::String(s) => s,
            other => {
                return Err(IsoError::InvalidValueType {
                    field: name,
                    value: other.to_string(),
                })
            }
        };

        Ok(self.get_by(field, &value))
    }

    /// [`Database::get`] with a caller-supplied result for "not found".
    pub fn get_or<'a, I, K, V>(
        &'a self,
        criteria: I,
        default: Match<'a, R>,
    ) -> Result<Match<'a, R>>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Ok(self.get(criteria)?.unwrap_or(default))
    }

    /// Typed form of [`Database::get`]; cannot fail.
    pub fn get_by(&self, field: R::Field, value: &str) -> Option<Match<'_, R>> {
        if R::is_multi_result(field) {
            let target = fold_case(value);
            let hits: Vec<&R> = self
                .records
                .iter()
                .filter(|r| r.field(field).is_some_and(|v| fold_case(v) == target))
                .collect();
            if hits.is_empty() {
                None
            } else {
                Some(Match::Many(hits))
            }
        } else {
            self.find(field, value).map(Match::One)
        }
    }

    /// Single-result, case-insensitive exact match on `field`.
    ///
    /// Intended for unique fields. On a multi-result field any one of the
    /// matching records may be returned.
    pub fn find(&self, field: R::Field, value: &str) -> Option<&R> {
        find_by_field(&self.records, field, value, fold_case)
    }

    /// Tries the identifying fields of `R` in order and returns the first
    /// hit.
    ///
    /// The query is trimmed, stripped of accents and lowercased; stored
    /// values are only lowercased. An accented stored value is therefore
    /// never matched by `lookup`; use [`Database::get`] for those.
    pub fn lookup(&self, value: &str) -> Result<Option<&R>> {
        self.lookup_in(value, R::lookup_fields())
    }

    /// [`Database::lookup`] with a caller-supplied result for "not found".
    pub fn lookup_or<'a>(&'a self, value: &str, default: &'a R) -> Result<&'a R> {
        Ok(self.lookup(value)?.unwrap_or(default))
    }

    /// [`Database::lookup`] over an explicit, ordered list of fields.
    pub fn lookup_in(&self, value: &str, fields: &[R::Field]) -> Result<Option<&R>> {
        self.ensure_searchable()?;

        let target = fold_key(value);
        let hit = fields.iter().find_map(|&field| {
            SortedIndex::build(&self.records, field, fold_case)
                .find_folded(&target)
                .map(|r| (field, r))
        });

        match hit {
            Some((field, record)) => {
                trace!(kind = R::KIND, %field, value, "lookup hit");
                Ok(Some(record))
            }
            None => {
                trace!(kind = R::KIND, value, "lookup miss");
                Ok(None)
            }
        }
    }

    /// Fuzzy search with [`DEFAULT_CUTOFF`].
    pub fn search(&self, query: &str) -> Result<Vec<Scored<'_, R>>> {
        self.search_with_cutoff(query, DEFAULT_CUTOFF)
    }

    /// Records scoring at least `cutoff` against `query`, best first.
    ///
    /// Equal scores keep catalog order. The store is not modified; scores
    /// live in the returned [`Scored`] entries only.
    pub fn search_with_cutoff(&self, query: &str, cutoff: f64) -> Result<Vec<Scored<'_, R>>> {
        self.ensure_searchable()?;

        let hits = FuzzyMatcher::new(query).rank(&self.records, R::searchable_fields(), cutoff);
        trace!(kind = R::KIND, query, cutoff, hits = hits.len(), "search");
        Ok(hits)
    }

    fn ensure_searchable(&self) -> Result<()> {
        if R::searchable_fields().is_empty() {
            Err(IsoError::NoSearchableFields(R::KIND))
        } else {
            Ok(())
        }
    }
}

impl<R: Record> FromIterator<R> for Database<R> {
    fn from_iter<T: IntoIterator<Item = R>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a, R: Record> IntoIterator for &'a Database<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
