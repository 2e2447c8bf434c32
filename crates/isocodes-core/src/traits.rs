// crates/isocodes-core/src/traits.rs
use crate::common::IsoCode;
use serde::de::DeserializeOwned;
use std::fmt;
use std::hash::Hash;

/// A closed enumeration of the fields of one record type.
///
/// This replaces dynamic attribute access: a field name coming from the
/// outside world is parsed once with [`FieldName::from_name`] and every
/// later access goes through [`Record::field`].
pub trait FieldName: Copy + Eq + Hash + fmt::Debug + fmt::Display + 'static {
    /// Every field of the schema, in declaration order.
    const ALL: &'static [Self];

    /// The schema name of the field (`"alpha_2"`, `"official_name"`, ...).
    fn as_str(self) -> &'static str;

    /// Parses a schema name. Returns `None` for names outside the schema.
    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.as_str() == name)
    }

    /// Comma-separated list of all schema names, for error messages.
    fn names() -> String {
        Self::ALL
            .iter()
            .map(|f| f.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// One immutable, schema-validated catalog entry.
///
/// Implementors declare which fields take part in fuzzy search, which
/// fields may hold duplicate values (so exact lookups must return every
/// match), and which identifying fields `lookup` tries, in order.
///
/// Equality and hashing cover the real fields only; search scores live in
/// a side table ([`crate::Scored`]), never on the record.
pub trait Record: Clone + fmt::Debug + Eq + Hash + Send + Sync + 'static {
    type Field: FieldName;

    /// Shape of one entry in the catalog document.
    type Raw: DeserializeOwned;

    /// Type name used in error messages (`"Country"`).
    const KIND: &'static str;

    /// The catalog this record type is loaded from.
    const CATALOG: IsoCode;

    /// Builds the typed record, computing derived fields.
    fn from_raw(raw: Self::Raw) -> Self;

    /// Value of `field`, or `None` if the field is absent on this record.
    fn field(&self, field: Self::Field) -> Option<&str>;

    /// Fields eligible for fuzzy search. Empty means neither `search` nor
    /// `lookup` is available.
    fn searchable_fields() -> &'static [Self::Field];

    /// Fields whose values are not unique within the catalog.
    fn multi_result_fields() -> &'static [Self::Field] {
        &[]
    }

    /// Identifying fields tried by `lookup`, in priority order.
    fn lookup_fields() -> &'static [Self::Field];

    fn is_multi_result(field: Self::Field) -> bool {
        Self::multi_result_fields().contains(&field)
    }
}
