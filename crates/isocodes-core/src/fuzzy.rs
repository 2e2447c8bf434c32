// crates/isocodes-core/src/fuzzy.rs

//! Composite similarity scoring for free-text search.
//!
//! Every score is on a 0–100 scale:
//! - [`ratio`]: whole-string similarity, `200 * lcs / (len_a + len_b)`
//!   (the normalized indel similarity)
//! - [`partial_ratio`]: best [`ratio`] of the shorter string against the
//!   windows of the longer one
//!
//! A record's score is the mean, over its present searchable fields, of
//! `(ratio + partial_ratio) / 2`. Both sides are compared in
//! [`fold_key`] form.

use crate::text::fold_key;
use crate::traits::Record;
use std::collections::HashSet;
use std::ops::Deref;

/// A record paired with the score it got for one search call.
///
/// The score lives here rather than on the record, so records stay
/// immutable and searches never interfere with each other.
#[derive(Debug, PartialEq)]
pub struct Scored<'a, R> {
    pub record: &'a R,
    pub score: f64,
}

impl<'a, R> Scored<'a, R> {
    pub fn record(&self) -> &'a R {
        self.record
    }

    pub fn match_score(&self) -> f64 {
        self.score
    }
}

impl<R> Clone for Scored<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Scored<'_, R> {}

impl<R> Deref for Scored<'_, R> {
    type Target = R;

    fn deref(&self) -> &R {
        self.record
    }
}

/// Length of the longest common subsequence.
fn lcs_len(a: &[char], b: &[char]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    let mut prev = vec![0usize; b.len() + 1];
    let mut cur = vec![0usize; b.len() + 1];
    for &x in a {
        for (j, &y) in b.iter().enumerate() {
            cur[j + 1] = if x == y {
                prev[j] + 1
            } else {
                prev[j + 1].max(cur[j])
            };
        }
        std::mem::swap(&mut prev, &mut cur);
    }
    prev[b.len()]
}

fn ratio_chars(a: &[char], b: &[char]) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 100.0;
    }
    200.0 * lcs_len(a, b) as f64 / total as f64
}

/// Scans the windows of `haystack` for the best match of `needle`
/// (`needle.len() <= haystack.len()`).
///
/// Candidates are the prefixes shorter than the needle, every full-length
/// window, and the suffixes shorter than the needle. A window whose outer
/// edge character does not occur in the needle is skipped: trimming that
/// character can only raise the score.
fn best_window(needle: &[char], haystack: &[char]) -> f64 {
    let n = needle.len();
    let h = haystack.len();
    let alphabet: HashSet<char> = needle.iter().copied().collect();
    let mut best = 0.0f64;

    for i in 1..n {
        if !alphabet.contains(&haystack[i - 1]) {
            continue;
        }
        best = best.max(ratio_chars(needle, &haystack[..i]));
        if best >= 100.0 {
            return best;
        }
    }

    for i in 0..(h - n) {
        if !alphabet.contains(&haystack[i + n - 1]) {
            continue;
        }
        best = best.max(ratio_chars(needle, &haystack[i..i + n]));
        if best >= 100.0 {
            return best;
        }
    }

    for i in (h - n)..h {
        if !alphabet.contains(&haystack[i]) {
            continue;
        }
        best = best.max(ratio_chars(needle, &haystack[i..]));
        if best >= 100.0 {
            return best;
        }
    }

    best
}

fn partial_ratio_chars(a: &[char], b: &[char]) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a.len() <= b.len() {
        best_window(a, b)
    } else {
        best_window(b, a)
    }
}

/// Whole-string similarity, 0–100. Two empty strings score 100.
///
/// ```rust
/// use isocodes_core::fuzzy::ratio;
///
/// assert_eq!(ratio("lek", "lek"), 100.0);
/// assert_eq!(ratio("abc", "xyz"), 0.0);
/// ```
pub fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    ratio_chars(&a, &b)
}

/// Best-matching-substring similarity, 0–100. Empty input scores 0.
///
/// ```rust
/// use isocodes_core::fuzzy::partial_ratio;
///
/// assert_eq!(partial_ratio("york", "new york"), 100.0);
/// ```
pub fn partial_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    partial_ratio_chars(&a, &b)
}

/// A prepared query: folded once, scored against many values.
#[derive(Debug, Clone)]
pub struct FuzzyMatcher {
    query: Vec<char>,
}

impl FuzzyMatcher {
    pub fn new(query: &str) -> Self {
        Self {
            query: fold_key(query).chars().collect(),
        }
    }

    /// Mean of [`ratio`] and [`partial_ratio`] against the folded `value`.
    pub fn score_value(&self, value: &str) -> f64 {
        let value: Vec<char> = fold_key(value).chars().collect();
        (ratio_chars(&self.query, &value) + partial_ratio_chars(&self.query, &value)) / 2.0
    }

    /// Mean field score over the `fields` present on `record`.
    ///
    /// Absent fields are skipped, not counted as zero. A record with no
    /// present field scores exactly 0.
    pub fn score_record<R: Record>(&self, record: &R, fields: &[R::Field]) -> f64 {
        let (total, used) = fields
            .iter()
            .filter_map(|&f| record.field(f))
            .fold((0.0f64, 0usize), |(total, used), value| {
                (total + self.score_value(value), used + 1)
            });

        if used == 0 {
            0.0
        } else {
            total / used as f64
        }
    }

    /// Scores every record, keeps those at or above `cutoff`, and sorts by
    /// descending score. Ties keep catalog order.
    pub fn rank<'a, R: Record>(
        &self,
        records: &'a [R],
        fields: &[R::Field],
        cutoff: f64,
    ) -> Vec<Scored<'a, R>> {
        let mut hits: Vec<Scored<'a, R>> = records
            .iter()
            .map(|record| Scored {
                record,
                score: self.score_record(record, fields),
            })
            .filter(|hit| hit.score >= cutoff)
            .collect();
        hits.sort_by(|a, b| b.score.total_cmp(&a.score));
        hits
    }
}
