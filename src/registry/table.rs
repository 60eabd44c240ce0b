//! Insertion-ordered keyed collection.

use std::collections::HashMap;

/// A record addressable by a string key.
pub trait Keyed {
    fn key(&self) -> &str;
}

/// Records in insertion order with O(1) lookup by key.
///
/// Records are never removed, so indices into `rows` stay valid.
#[derive(Debug, Clone)]
pub struct Table<T> {
    rows: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T: Keyed> Table<T> {
    /// Insert a record. Returns the record back if its key is taken.
    pub fn insert(&mut self, row: T) -> Result<&T, T> {
        if self.contains(row.key()) {
            return Err(row);
        }
        let pos = self.rows.len();
        self.index.insert(row.key().to_string(), pos);
        self.rows.push(row);
        Ok(&self.rows[pos])
    }

    pub fn get(&self, key: &str) -> Option<&T> {
        self.index.get(key).map(|&i| &self.rows[i])
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut T> {
        self.index.get(key).map(|&i| &mut self.rows[i])
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}
