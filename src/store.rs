use std::collections::HashMap;

/// Insertion-ordered term → definition map. The first insert of a term wins.
#[derive(Debug, Default, Clone)]
pub struct TermStore {
    entries: Vec<(String, String)>,
    lookup: HashMap<String, usize>,
}

impl TermStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts the pair unless the term is already present. Returns `false` for duplicates.
    pub fn insert(&mut self, term: impl Into<String>, definition: impl Into<String>) -> bool {
        let term = term.into();
        if self.lookup.contains_key(&term) {
            return false;
        }
        self.lookup.insert(term.clone(), self.entries.len());
        self.entries.push((term, definition.into()));
        true
    }

    pub fn get(&self, term: &str) -> Option<&str> {
        self.lookup
            .get(term)
            .map(|&idx| self.entries[idx].1.as_str())
    }

    pub fn contains(&self, term: &str) -> bool {
        self.lookup.contains_key(term)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Terms in first-seen order.
    pub fn terms(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(term, _)| term.as_str())
    }

    /// `(term, definition)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries
            .iter()
            .map(|(term, definition)| (term.as_str(), definition.as_str()))
    }
}
