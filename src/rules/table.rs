//! Path → target lookup table.

use std::collections::HashMap;

use crate::rules::Rule;

/// Immutable mapping from exact request path to redirect target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RedirectTable {
    entries: HashMap<String, String>,
}

impl RedirectTable {
    /// Fold rules in order. A later rule for the same path replaces the earlier one.
    pub fn from_rules<I>(rules: I) -> Self
    where
        I: IntoIterator<Item = Rule>,
    {
        rules.into_iter().collect()
    }

    /// Exact-match lookup.
    pub fn get(&self, path: &str) -> Option<&str> {
        self.entries.get(path).map(String::as_str)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(p, t)| (p.as_str(), t.as_str()))
    }
}

impl FromIterator<Rule> for RedirectTable {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        iter.into_iter()
            .map(|rule| (rule.path, rule.target))
            .collect()
    }
}

impl<K, V> FromIterator<(K, V)> for RedirectTable
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut entries = HashMap::new();
        for (path, target) in iter {
            entries.insert(path.into(), target.into());
        }
        Self { entries }
    }
}

impl From<HashMap<String, String>> for RedirectTable {
    fn from(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }
}
