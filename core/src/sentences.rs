use crate::corpus::Corpus;
use crate::items::TokenizedItems;
use crate::tokenizer::Tokenizer;
use unicode_segmentation::UnicodeSegmentation;

/// Split text into passages on line breaks, then each passage on UAX #29 sentence boundaries.
pub fn split_sentences(text: &str) -> Vec<&str> {
    text.split('\n')
        .flat_map(|passage| passage.unicode_sentences())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Tokenized sentences of the given files, in file order then document order.
///
/// Sentences that tokenize to nothing are skipped, so every entry has at least one
/// token. Identical sentence texts collapse into a single entry.
pub fn sentence_items<S: AsRef<str>>(files: &[S], corpus: &Corpus, tokenizer: &Tokenizer) -> TokenizedItems<String> {
    let mut sentences = TokenizedItems::new();
    for name in files {
        let Some(text) = corpus.get(name.as_ref()) else {
            tracing::warn!(file = name.as_ref(), "selected file missing from corpus");
            continue;
        };
        for sentence in split_sentences(text) {
            let tokens = tokenizer.tokenize(sentence);
            if !tokens.is_empty() {
                sentences.insert(sentence.to_string(), tokens);
            }
        }
    }
    tracing::debug!(files = files.len(), sentences = sentences.len(), "built sentence universe");
    sentences
}
