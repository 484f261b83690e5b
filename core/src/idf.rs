use crate::items::TokenizedItems;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdfVariant {
    /// `ln(N / f)`
    #[default]
    Standard,
    /// `ln(1 + N / f)`; a term present in every item keeps a positive weight.
    Smoothed,
}

impl IdfVariant {
    fn weight(self, num_items: usize, containing: u32) -> f64 {
        let ratio = num_items as f64 / containing as f64;
        match self {
            IdfVariant::Standard => ratio.ln(),
            IdfVariant::Smoothed => (1.0 + ratio).ln(),
        }
    }
}

/// Inverse document frequencies for one item set (files or sentences).
///
/// Holds an entry for every token that occurs in at least one item and nothing else.
/// A missing token means its IDF is unknown for this item set, not zero.
#[derive(Debug, Clone, Default)]
pub struct IdfTable {
    num_items: usize,
    idfs: HashMap<String, f64>,
}

impl IdfTable {
    pub fn get(&self, token: &str) -> Option<f64> { self.idfs.get(token).copied() }

    pub fn contains(&self, token: &str) -> bool { self.idfs.contains_key(token) }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize { self.idfs.len() }

    pub fn is_empty(&self) -> bool { self.idfs.is_empty() }

    /// Number of items the table was computed over.
    pub fn num_items(&self) -> usize { self.num_items }
}

impl<S: Into<String>> FromIterator<(S, f64)> for IdfTable {
    /// Build a table from precomputed values; `num_items` is left at 0.
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self { num_items: 0, idfs: iter.into_iter().map(|(t, v)| (t.into(), v)).collect() }
    }
}

/// Compute `ln(N / f)` for every token in `items`, where `f` counts the items
/// containing the token at least once.
pub fn compute_idfs<K>(items: &TokenizedItems<K>) -> IdfTable {
    compute_idfs_with(items, IdfVariant::Standard)
}

pub fn compute_idfs_with<K>(items: &TokenizedItems<K>, variant: IdfVariant) -> IdfTable {
    let mut df: HashMap<&str, u32> = HashMap::new();
    for (_, tokens) in items.iter() {
        let mut seen_in_item: HashSet<&str> = HashSet::new();
        for token in tokens {
            if seen_in_item.insert(token.as_str()) {
                *df.entry(token.as_str()).or_insert(0) += 1;
            }
        }
    }

    let num_items = items.len();
    let idfs = df
        .into_iter()
        .map(|(token, f)| (token.to_string(), variant.weight(num_items, f)))
        .collect::<HashMap<_, _>>();
    tracing::debug!(num_items, num_terms = idfs.len(), ?variant, "computed idfs");
    IdfTable { num_items, idfs }
}
