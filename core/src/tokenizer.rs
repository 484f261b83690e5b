use crate::error::{Error, Result};
use crate::rank::Query;
use lazy_static::lazy_static;
use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};
use std::collections::HashSet;
use std::path::Path;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    // Word runs (letters, digits, underscore, joined by ' or -) or runs of anything else.
    static ref RE: Regex =
        Regex::new(r"(?u)[\p{L}\p{N}_]+(?:['\-][\p{L}\p{N}_]+)*|[^\s\p{L}\p{N}_]+").expect("valid regex");
}

/// Standard English stopword list.
pub const ENGLISH_STOPWORDS: &[&str] = &[
    "i","me","my","myself","we","our","ours","ourselves","you","you're","you've","you'll","you'd","your","yours","yourself","yourselves",
    "he","him","his","himself","she","she's","her","hers","herself","it","it's","its","itself",
    "they","them","their","theirs","themselves","what","which","who","whom","this","that","that'll","these","those",
    "am","is","are","was","were","be","been","being","have","has","had","having","do","does","did","doing",
    "a","an","the","and","but","if","or","because","as","until","while","of","at","by","for","with","about","against","between",
    "into","through","during","before","after","above","below","to","from","up","down","in","out","on","off","over","under",
    "again","further","then","once","here","there","when","where","why","how","all","any","both","each","few","more","most",
    "other","some","such","no","nor","not","only","own","same","so","than","too","very","s","t","can","will","just",
    "don","don't","should","should've","now","d","ll","m","o","re","ve","y",
    "ain","aren","aren't","couldn","couldn't","didn","didn't","doesn","doesn't","hadn","hadn't","hasn","hasn't",
    "haven","haven't","isn","isn't","ma","mightn","mightn't","mustn","mustn't","needn","needn't","shan","shan't",
    "shouldn","shouldn't","wasn","wasn't","weren","weren't","won","won't","wouldn","wouldn't",
];

/// Normalizes raw text into word tokens.
///
/// The stopword set is fixed at construction; the same instance must be used for
/// documents, sentences and queries so their IDF values stay comparable.
pub struct Tokenizer {
    stopwords: HashSet<String>,
    stemmer: Option<Stemmer>,
}

impl Default for Tokenizer {
    fn default() -> Self { Self::english() }
}

impl Tokenizer {
    /// Tokenizer using [`ENGLISH_STOPWORDS`] and no stemming.
    pub fn english() -> Self {
        Self::with_stopwords(ENGLISH_STOPWORDS.iter().copied())
    }

    pub fn with_stopwords<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let stopwords = words.into_iter().map(|w| normalize(w.as_ref())).collect();
        Self { stopwords, stemmer: None }
    }

    /// Load a stopword list with one word per line. Blank lines and `#` comments are ignored.
    pub fn from_stopword_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|source| Error::Stopwords { path: path.to_path_buf(), source })?;
        let words = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !l.starts_with('#'));
        let tokenizer = Self::with_stopwords(words);
        tracing::debug!(path = %path.display(), stopwords = tokenizer.stopwords.len(), "loaded stopword list");
        Ok(tokenizer)
    }

    /// Enable or disable English Snowball stemming of surviving tokens.
    pub fn with_stemming(mut self, enabled: bool) -> Self {
        self.stemmer = enabled.then(|| Stemmer::create(Algorithm::English));
        self
    }

    pub fn is_stopword(&self, token: &str) -> bool { self.stopwords.contains(token) }

    /// Tokenize text in order: NFKC, lowercase, drop punctuation-only tokens and stopwords.
    /// A possessive `'s` is split off and dropped. Repeated words are kept.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let normalized = normalize(text);
        let mut tokens = Vec::new();
        for mat in RE.find_iter(&normalized) {
            let token = mat.as_str();
            if is_punctuation(token) || self.is_stopword(token) { continue; }
            let token = strip_possessive(token);
            if self.is_stopword(token) { continue; }
            let token = match &self.stemmer {
                Some(stemmer) => stemmer.stem(token).into_owned(),
                None => token.to_string(),
            };
            tokens.push(token);
        }
        tokens
    }

    /// Tokenize a user query into a deduplicated term set.
    pub fn query(&self, text: &str) -> Query {
        self.tokenize(text).into_iter().collect()
    }
}

/// NFKC, lowercase, and U+2019 folded to `'`. Applied to text and stopwords alike.
fn normalize(text: &str) -> String {
    text.nfkc().collect::<String>().to_lowercase().replace('\u{2019}', "'")
}

// Contractions such as "it's" are matched whole against the stopword list first.
fn strip_possessive(token: &str) -> &str {
    token.strip_suffix("'s").filter(|base| !base.is_empty()).unwrap_or(token)
}

/// True when every character is punctuation or a symbol (`_` included).
pub fn is_punctuation(token: &str) -> bool {
    token.chars().all(|c| !c.is_alphanumeric() && !c.is_whitespace())
}
