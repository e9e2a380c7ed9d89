use crate::errors::{AppError, AppResult};
use std::collections::BTreeMap;

/// Search filter map sent as URL query parameters.
///
/// Mirrors the search form: only non-empty keys and values are retained, so
/// blank form fields never reach the query string. Iteration order is stable
/// (BTreeMap), which keeps request URLs reproducible in logs and tests.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Filters(BTreeMap<String, String>);

impl Filters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a filter, dropping it when the key or value is empty.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if key.is_empty() || value.is_empty() {
            return;
        }
        self.0.insert(key, value);
    }

    /// Parses a `key=value` pair as passed to the repeatable `--filter` flag.
    pub fn parse_pair(raw: &str) -> AppResult<(String, String)> {
        match raw.split_once('=') {
            Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
            _ => Err(AppError::InvalidInput(format!(
                "Filter must be key=value, got '{raw}'"
            ))),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, String)> for Filters {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        let mut filters = Filters::new();
        for (key, value) in iter {
            filters.insert(key, value);
        }
        filters
    }
}
