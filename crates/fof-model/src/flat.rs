use std::collections::HashMap;

/// One CSV row before type interpretation: column name to raw string.
///
/// Keeps insertion order for iteration while lookups go through a hash
/// index. Equality ignores order.
#[derive(Debug, Clone, Default)]
pub struct FlatRecord {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl FlatRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Set a column value, returning the previous value if the column existed.
    pub fn insert(
        &mut self,
        column: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        let column = column.into();
        let value = value.into();
        if let Some(&position) = self.index.get(&column) {
            return Some(std::mem::replace(&mut self.entries[position].1, value));
        }
        self.index.insert(column.clone(), self.entries.len());
        self.entries.push((column, value));
        None
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.index
            .get(column)
            .map(|&position| self.entries[position].1.as_str())
    }

    pub fn contains(&self, column: &str) -> bool {
        self.index.contains_key(column)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(column, _)| column.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(column, value)| (column.as_str(), value.as_str()))
    }
}

impl PartialEq for FlatRecord {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(column, value)| other.get(column) == Some(value))
    }
}

impl Eq for FlatRecord {}

impl<K, V> FromIterator<(K, V)> for FlatRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = FlatRecord::new();
        for (column, value) in iter {
            record.insert(column, value);
        }
        record
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for FlatRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}
