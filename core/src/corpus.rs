use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Raw documents keyed by file name, iterated in file-name order.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    root: Option<PathBuf>,
    documents: BTreeMap<String, String>,
}

impl Corpus {
    /// Build an in-memory corpus.
    pub fn from_documents<I, N, T>(docs: I) -> Self
    where
        I: IntoIterator<Item = (N, T)>,
        N: Into<String>,
        T: Into<String>,
    {
        let documents = docs.into_iter().map(|(n, t)| (n.into(), t.into())).collect();
        Self { root: None, documents }
    }

    /// Directory the corpus was loaded from, if any.
    pub fn root(&self) -> Option<&Path> { self.root.as_deref() }

    pub fn get(&self, name: &str) -> Option<&str> { self.documents.get(name).map(String::as_str) }

    pub fn len(&self) -> usize { self.documents.len() }

    pub fn is_empty(&self) -> bool { self.documents.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.documents.iter().map(|(n, t)| (n.as_str(), t.as_str()))
    }
}

/// Read every regular file directly inside `dir` as UTF-8 text.
///
/// Subdirectories and dot-files are skipped. Any unreadable or non-UTF-8 file
/// aborts the load.
pub fn load_corpus<P: AsRef<Path>>(dir: P) -> Result<Corpus> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(Error::NotADirectory(dir.to_path_buf()));
    }

    let mut documents = BTreeMap::new();
    let walker = WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(true).sort_by_file_name();
    for entry in walker {
        let entry = entry.map_err(|e| {
            let path = e.path().map(Path::to_path_buf).unwrap_or_else(|| dir.to_path_buf());
            Error::io(path, e.into())
        })?;
        if !entry.file_type().is_file() { continue; }
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') { continue; }

        let text = std::fs::read_to_string(entry.path()).map_err(|e| Error::io(entry.path(), e))?;
        tracing::debug!(file = %name, bytes = text.len(), "loaded document");
        documents.insert(name, text);
    }

    if documents.is_empty() {
        return Err(Error::EmptyCorpus(dir.to_path_buf()));
    }
    tracing::info!(dir = %dir.display(), num_docs = documents.len(), "loaded corpus");
    Ok(Corpus { root: Some(dir.to_path_buf()), documents })
}
