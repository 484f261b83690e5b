use anyhow::{Context, Result};
use clap::Parser;
use qa_core::{load_corpus, AnswerOptions, Answerer, IdfVariant, Tokenizer};
use std::io::{BufRead, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "questions")]
#[command(about = "Answer questions from a directory of text documents", long_about = None)]
pub struct Cli {
    /// Directory of plain-text documents
    pub corpus: PathBuf,
    /// Answer this query instead of prompting for one
    #[arg(short, long)]
    pub query: Option<String>,
    /// Number of top documents to draw sentences from
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    pub files: u64,
    /// Number of sentences to print
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    pub sentences: u64,
    /// Use smoothed IDF = ln(1 + N/df) instead of ln(N/df)
    #[arg(long, default_value_t = false)]
    pub smoothed_idf: bool,
    /// Apply English stemming to documents and queries
    #[arg(long, default_value_t = false)]
    pub stem: bool,
    /// Stopword list (one word per line) replacing the built-in English list
    #[arg(long)]
    pub stopwords: Option<PathBuf>,
    /// Print the full answer, with scores, as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

impl Cli {
    fn options(&self) -> Result<AnswerOptions> {
        Ok(AnswerOptions {
            file_matches: usize::try_from(self.files).context("--files out of range")?,
            sentence_matches: usize::try_from(self.sentences).context("--sentences out of range")?,
            idf: if self.smoothed_idf { IdfVariant::Smoothed } else { IdfVariant::Standard },
        })
    }

    fn tokenizer(&self) -> Result<Tokenizer> {
        let tokenizer = match &self.stopwords {
            Some(path) => Tokenizer::from_stopword_file(path)?,
            None => Tokenizer::english(),
        };
        Ok(tokenizer.with_stemming(self.stem))
    }
}

/// Load the corpus, read one query (from `--query` or `input`), and write the answer to `out`.
pub fn run<R: BufRead, W: Write>(cli: &Cli, input: &mut R, out: &mut W) -> Result<()> {
    let corpus = load_corpus(&cli.corpus)
        .with_context(|| format!("loading corpus from {}", cli.corpus.display()))?;
    let answerer = Answerer::new(corpus, cli.tokenizer()?, cli.options()?);

    let query = match &cli.query {
        Some(q) => q.clone(),
        None => prompt(input, out)?,
    };
    tracing::debug!(
        source = if cli.query.is_some() { "argument" } else { "prompt" },
        json = cli.json,
        stem = cli.stem,
        smoothed_idf = cli.smoothed_idf,
        "answering query"
    );

    let answer = answerer.answer(&query);
    if cli.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&answer)?)?;
    } else {
        for sentence in answer.sentence_texts() {
            writeln!(out, "{sentence}")?;
        }
    }
    Ok(())
}

fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<String> {
    write!(out, "Query: ")?;
    out.flush()?;
    let mut line = String::new();
    input.read_line(&mut line).context("reading query")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
