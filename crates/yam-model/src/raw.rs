//! Raw, source-specific input rows.

use std::collections::BTreeMap;

/// One record of a source export prior to mapping: column name → cell value.
///
/// Created per input line by the ingest layer, consumed once by exactly one
/// adapter call. Columns an adapter does not recognize are simply never
/// looked up; absence and emptiness both read as "no value".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    fields: BTreeMap<String, String>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a row from `(column, value)` pairs; handy in tests and ingest.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let fields = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self { fields }
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(column.into(), value.into());
    }

    /// Raw cell value for a column, untrimmed.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    /// Trimmed cell value, only when it is non-empty after trimming.
    ///
    /// This is the presence predicate adapters use: a missing column and an
    /// empty-string placeholder both map the target field to `None`.
    pub fn non_empty(&self, column: &str) -> Option<&str> {
        self.get(column)
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Iterates over `(column, value)` pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
