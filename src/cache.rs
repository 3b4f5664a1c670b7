use std::collections::HashMap;

use crate::api::DirectoryEntry;

/// Raw search responses keyed by the exact term that produced them.
///
/// Terms are not normalized: "En" and "en" are different keys.
#[derive(Debug, Default)]
pub struct QueryCache {
    entries: HashMap<String, Vec<DirectoryEntry>>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, term: &str) -> Option<&[DirectoryEntry]> {
        self.entries.get(term).map(Vec::as_slice)
    }

    pub fn contains(&self, term: &str) -> bool {
        self.entries.contains_key(term)
    }

    /// Store a response unless the term is already cached.
    ///
    /// Returns false (and keeps the first response) on a repeat.
    pub fn insert_once(&mut self, term: &str, entries: Vec<DirectoryEntry>) -> bool {
        if self.entries.contains_key(term) {
            return false;
        }
        self.entries.insert(term.to_string(), entries);
        true
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
