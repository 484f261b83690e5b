pub mod answer;
pub mod corpus;
pub mod error;
pub mod idf;
pub mod items;
pub mod rank;
pub mod sentences;
pub mod tokenizer;

pub use answer::{Answer, AnswerOptions, Answerer};
pub use corpus::{load_corpus, Corpus};
pub use error::{Error, Result};
pub use idf::{compute_idfs, compute_idfs_with, IdfTable, IdfVariant};
pub use items::TokenizedItems;
pub use rank::{score_files, score_sentences, top_files, top_sentences, Query, ScoredItem, ScoredSentence};
pub use sentences::{sentence_items, split_sentences};
pub use tokenizer::Tokenizer;
