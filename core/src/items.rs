use std::collections::HashMap;
use std::hash::Hash;

/// Insertion-ordered map from item id to its token sequence.
///
/// Keys are unique. Inserting an existing key replaces its tokens and keeps the
/// key's original position. Iteration order is insertion order, which is the
/// tie-break order used by the rankers.
#[derive(Debug, Clone)]
pub struct TokenizedItems<K> {
    positions: HashMap<K, usize>,
    entries: Vec<(K, Vec<String>)>,
}

impl<K> Default for TokenizedItems<K> {
    fn default() -> Self { Self { positions: HashMap::new(), entries: Vec::new() } }
}

impl<K: Eq + Hash + Clone> TokenizedItems<K> {
    pub fn new() -> Self { Self::default() }

    /// Insert or replace. Returns the previous tokens when `id` was already present.
    pub fn insert(&mut self, id: K, tokens: Vec<String>) -> Option<Vec<String>> {
        match self.positions.get(&id) {
            Some(&pos) => Some(std::mem::replace(&mut self.entries[pos].1, tokens)),
            None => {
                self.positions.insert(id.clone(), self.entries.len());
                self.entries.push((id, tokens));
                None
            }
        }
    }

    pub fn get(&self, id: &K) -> Option<&[String]> {
        self.positions.get(id).map(|&pos| self.entries[pos].1.as_slice())
    }
}

impl<K> TokenizedItems<K> {
    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &[String])> {
        self.entries.iter().map(|(k, v)| (k, v.as_slice()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(k, _)| k)
    }
}

impl<K: Eq + Hash + Clone> FromIterator<(K, Vec<String>)> for TokenizedItems<K> {
    fn from_iter<I: IntoIterator<Item = (K, Vec<String>)>>(iter: I) -> Self {
        let mut items = Self::new();
        for (id, tokens) in iter {
            items.insert(id, tokens);
        }
        items
    }
}
