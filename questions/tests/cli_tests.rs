use clap::Parser;
use questions::{run, Cli};
use std::fs;
use std::io::{Cursor, Write};
use std::path::Path;
use std::process::{Command, Stdio};
use tempfile::tempdir;

fn write_corpus(dir: &Path) {
    fs::write(
        dir.join("search.txt"),
        "Breadth-first search explores the shallowest nodes first.\n\
         Depth-first search explores the deepest nodes first. A* search uses a heuristic.",
    )
    .unwrap();
    fs::write(
        dir.join("logic.txt"),
        "Propositional logic uses symbols. Model checking enumerates every model.",
    )
    .unwrap();
}

fn run_to_string(args: &[&str], stdin: &str) -> String {
    let cli = Cli::try_parse_from(args).unwrap();
    let mut input = Cursor::new(stdin.as_bytes().to_vec());
    let mut out = Vec::new();
    run(&cli, &mut input, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn prompts_and_prints_best_sentence() {
    let dir = tempdir().unwrap();
    write_corpus(dir.path());
    let corpus = dir.path().to_str().unwrap();

    let out = run_to_string(&["questions", corpus], "Which search uses a heuristic?\n");
    assert_eq!(out, "Query: A* search uses a heuristic.\n");
}

#[test]
fn query_flag_skips_prompt_and_prints_n_sentences() {
    let dir = tempdir().unwrap();
    write_corpus(dir.path());
    let corpus = dir.path().to_str().unwrap();

    let out = run_to_string(&["questions", corpus, "--query", "shallowest nodes", "--sentences", "2"], "");
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Breadth-first search explores the shallowest nodes first.",
            "Depth-first search explores the deepest nodes first.",
        ]
    );
}

#[test]
fn json_output_includes_scores() {
    let dir = tempdir().unwrap();
    write_corpus(dir.path());
    let corpus = dir.path().to_str().unwrap();

    let out = run_to_string(&["questions", corpus, "-q", "model checking", "--json", "--files", "2"], "");
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["query"], "model checking");
    assert_eq!(json["files"].as_array().unwrap().len(), 2);
    assert_eq!(json["files"][0]["id"], "logic.txt");
    assert_eq!(json["sentences"][0]["id"], "Model checking enumerates every model.");
}

#[test]
fn zero_matches_are_rejected() {
    assert!(Cli::try_parse_from(["questions", "corpus", "--sentences", "0"]).is_err());
    assert!(Cli::try_parse_from(["questions", "corpus", "--files", "0"]).is_err());
}

#[test]
fn missing_or_extra_corpus_argument_is_a_usage_error() {
    let bin = env!("CARGO_BIN_EXE_questions");

    let missing = Command::new(bin).output().unwrap();
    assert!(!missing.status.success());
    assert!(String::from_utf8_lossy(&missing.stderr).contains("Usage"));

    let extra = Command::new(bin).args(["one", "two"]).output().unwrap();
    assert!(!extra.status.success());
}

#[test]
fn binary_reads_query_from_stdin() {
    let dir = tempdir().unwrap();
    write_corpus(dir.path());

    let mut child = Command::new(env!("CARGO_BIN_EXE_questions"))
        .arg(dir.path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(b"propositional symbols\n").unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Query: Propositional logic uses symbols.\n");
}

#[test]
fn unreadable_corpus_exits_with_error() {
    let dir = tempdir().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_questions"))
        .arg(dir.path().join("does-not-exist"))
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("not a directory"));
}

#[test]
fn stem_flag_matches_inflected_forms() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "Owls sleep all day.").unwrap();
    fs::write(dir.path().join("b.txt"), "The fox runs quickly.").unwrap();
    let corpus = dir.path().to_str().unwrap();

    let plain = run_to_string(&["questions", corpus, "-q", "running"], "");
    assert_eq!(plain, "Owls sleep all day.\n");

    let stemmed = run_to_string(&["questions", corpus, "-q", "running", "--stem"], "");
    assert_eq!(stemmed, "The fox runs quickly.\n");
}

#[test]
fn stopwords_file_changes_the_winning_sentence() {
    let dir = tempdir().unwrap();
    let docs = dir.path().join("docs");
    fs::create_dir(&docs).unwrap();
    fs::write(docs.join("computing.txt"), "Quantum computing uses qubits. Classical computing uses bits.").unwrap();
    let stop = dir.path().join("stop.txt");
    fs::write(&stop, "# domain words\nquantum\n").unwrap();
    let corpus = docs.to_str().unwrap();

    let default = run_to_string(&["questions", corpus, "-q", "quantum classical"], "");
    assert_eq!(default, "Quantum computing uses qubits.\n");

    let custom = run_to_string(
        &["questions", corpus, "-q", "quantum classical", "--stopwords", stop.to_str().unwrap()],
        "",
    );
    assert_eq!(custom, "Classical computing uses bits.\n");
}

#[test]
fn smoothed_idf_keeps_shared_terms_positive() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "Data drives science.").unwrap();
    fs::write(dir.path().join("b.txt"), "Data needs cleaning.").unwrap();
    let corpus = dir.path().to_str().unwrap();

    let standard: serde_json::Value =
        serde_json::from_str(&run_to_string(&["questions", corpus, "-q", "data", "--json", "--files", "2"], "")).unwrap();
    assert_eq!(standard["files"][0]["score"].as_f64(), Some(0.0));

    let smoothed: serde_json::Value = serde_json::from_str(&run_to_string(
        &["questions", corpus, "-q", "data", "--json", "--files", "2", "--smoothed-idf"],
        "",
    ))
    .unwrap();
    let files = smoothed["files"].as_array().unwrap();
    assert_eq!(files.len(), 2);
    assert!(files.iter().all(|f| f["score"].as_f64().unwrap() > 0.0));
    assert!(smoothed["sentences"][0]["idf_sum"].as_f64().unwrap() > 0.0);
}

#[test]
fn missing_stopwords_file_exits_with_error() {
    let dir = tempdir().unwrap();
    write_corpus(dir.path());
    let output = Command::new(env!("CARGO_BIN_EXE_questions"))
        .arg(dir.path())
        .args(["--query", "search", "--stopwords"])
        .arg(dir.path().join("nope.txt"))
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("stopword list"));
    assert!(output.stdout.is_empty());
}
