//! Document and sentence ranking.
//!
//! Both rankers sort with a stable sort, so items that tie on every score key
//! keep the order in which they were inserted into the [`TokenizedItems`].

use crate::idf::IdfTable;
use crate::items::TokenizedItems;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Deduplicated query terms, normalized with the same tokenizer as the corpus.
///
/// Ordered so that score sums are accumulated in the same order on every run.
pub type Query = BTreeSet<String>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredItem<K> {
    pub id: K,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredSentence<K> {
    pub id: K,
    /// Sum of the IDFs of query words that occur in the sentence.
    pub idf_sum: f64,
    /// Share of the sentence's tokens that are query words, repeats included.
    pub density: f64,
}

fn count(tokens: &[String], word: &str) -> usize {
    tokens.iter().filter(|t| t.as_str() == word).count()
}

fn descending(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

/// TF-IDF score of every file, best first, truncated to `n`.
///
/// `score = Σ idf(w) * count(w)` over query words. Words missing from `idfs`
/// contribute nothing.
pub fn score_files<K: Clone>(
    query: &Query,
    files: &TokenizedItems<K>,
    idfs: &IdfTable,
    n: usize,
) -> Vec<ScoredItem<K>> {
    let weights: Vec<(&str, f64)> = query
        .iter()
        .filter_map(|w| idfs.get(w).map(|idf| (w.as_str(), idf)))
        .collect();

    let mut scored: Vec<ScoredItem<K>> = files
        .iter()
        .map(|(id, tokens)| {
            let score = weights
                .iter()
                .fold(0.0, |acc, (w, idf)| acc + idf * count(tokens, w) as f64);
            ScoredItem { id: id.clone(), score }
        })
        .collect();

    scored.sort_by(|a, b| descending(a.score, b.score));
    scored.truncate(n);
    scored
}

/// Ids of the `n` files that best match `query` by TF-IDF.
pub fn top_files<K: Clone>(query: &Query, files: &TokenizedItems<K>, idfs: &IdfTable, n: usize) -> Vec<K> {
    score_files(query, files, idfs, n).into_iter().map(|s| s.id).collect()
}

/// Sentences ranked by matching-word IDF sum, then by query term density.
///
/// Sentences must have at least one token; the sentence builder filters empty ones.
pub fn score_sentences<K: Clone>(
    query: &Query,
    sentences: &TokenizedItems<K>,
    idfs: &IdfTable,
    n: usize,
) -> Vec<ScoredSentence<K>> {
    let mut scored: Vec<ScoredSentence<K>> = sentences
        .iter()
        .map(|(id, tokens)| {
            let mut idf_sum = 0.0;
            let mut matches = 0usize;
            for w in query {
                let c = count(tokens, w);
                if c > 0 {
                    idf_sum += idfs.get(w).unwrap_or(0.0);
                }
                matches += c;
            }
            debug_assert!(!tokens.is_empty(), "sentence with no tokens");
            let density = if tokens.is_empty() { 0.0 } else { matches as f64 / tokens.len() as f64 };
            ScoredSentence { id: id.clone(), idf_sum, density }
        })
        .collect();

    scored.sort_by(|a, b| {
        descending(a.idf_sum, b.idf_sum).then_with(|| descending(a.density, b.density))
    });
    scored.truncate(n);
    scored
}

/// Ids of the `n` best sentences for `query`.
pub fn top_sentences<K: Clone>(
    query: &Query,
    sentences: &TokenizedItems<K>,
    idfs: &IdfTable,
    n: usize,
) -> Vec<K> {
    score_sentences(query, sentences, idfs, n).into_iter().map(|s| s.id).collect()
}
