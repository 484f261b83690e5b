use crate::corpus::Corpus;
use crate::idf::{compute_idfs_with, IdfTable, IdfVariant};
use crate::items::TokenizedItems;
use crate::rank::{score_files, score_sentences, ScoredItem, ScoredSentence};
use crate::sentences::sentence_items;
use crate::tokenizer::Tokenizer;
use serde::Serialize;

#[derive(Debug, Clone, Copy)]
pub struct AnswerOptions {
    /// Documents whose sentences are considered.
    pub file_matches: usize,
    /// Sentences returned.
    pub sentence_matches: usize,
    pub idf: IdfVariant,
}

impl Default for AnswerOptions {
    fn default() -> Self {
        Self { file_matches: 1, sentence_matches: 1, idf: IdfVariant::Standard }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Answer {
    pub query: String,
    /// Normalized query terms in the order they were scored.
    pub terms: Vec<String>,
    pub files: Vec<ScoredItem<String>>,
    pub sentences: Vec<ScoredSentence<String>>,
}

impl Answer {
    pub fn sentence_texts(&self) -> impl Iterator<Item = &str> {
        self.sentences.iter().map(|s| s.id.as_str())
    }
}

/// Answers queries against a loaded corpus.
///
/// Document tokens and document-level IDFs are computed once in [`Answerer::new`].
/// Sentence-level IDFs depend on which documents matched and are rebuilt per query.
pub struct Answerer {
    corpus: Corpus,
    tokenizer: Tokenizer,
    options: AnswerOptions,
    file_words: TokenizedItems<String>,
    file_idfs: IdfTable,
}

impl Answerer {
    pub fn new(corpus: Corpus, tokenizer: Tokenizer, options: AnswerOptions) -> Self {
        let file_words: TokenizedItems<String> = corpus
            .iter()
            .map(|(name, text)| (name.to_string(), tokenizer.tokenize(text)))
            .collect();
        let file_idfs = compute_idfs_with(&file_words, options.idf);
        tracing::info!(num_docs = file_words.len(), num_terms = file_idfs.len(), "indexed corpus");
        Self { corpus, tokenizer, options, file_words, file_idfs }
    }

    pub fn answer(&self, query_text: &str) -> Answer {
        let query = self.tokenizer.query(query_text);
        if query.is_empty() {
            tracing::warn!(query = query_text, "query has no terms after normalization");
        }

        let files = score_files(&query, &self.file_words, &self.file_idfs, self.options.file_matches);
        let names: Vec<&str> = files.iter().map(|f| f.id.as_str()).collect();
        tracing::debug!(?names, "top files");

        let sentences = sentence_items(&names, &self.corpus, &self.tokenizer);
        let sentence_idfs = compute_idfs_with(&sentences, self.options.idf);
        let ranked = score_sentences(&query, &sentences, &sentence_idfs, self.options.sentence_matches);
        tracing::info!(terms = query.len(), files = files.len(), sentences = ranked.len(), "answered query");

        Answer { query: query_text.to_string(), terms: query.into_iter().collect(), files, sentences: ranked }
    }
}
