use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use daybook_classifier::Stopwords;
use daybook_protocol::{JournalAnnotations, JournalResult};
use tracing::info;

/// Where a journal's backend annotations come from.
///
/// The NLP backend is a slow, fallible remote call; implementations own their
/// timeout and retry policy and hand back finished annotations.
pub trait AnnotationSource {
    fn fetch(&self) -> anyhow::Result<JournalAnnotations>;
}

/// Backend output saved to disk as JSON.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl AnnotationSource for JsonFileSource {
    fn fetch(&self) -> anyhow::Result<JournalAnnotations> {
        read_json(&self.path)
    }
}

/// Stored profiles written by `daybook analyze --format json`.
pub fn load_results(paths: &[PathBuf]) -> anyhow::Result<Vec<JournalResult>> {
    paths.iter().map(|path| read_json(path)).collect()
}

/// Reads a stopword list: archived lexicon if the file ends in `.rkyv`,
/// whitespace-delimited text otherwise. No path means no stopwords.
pub fn load_stopwords(path: Option<&Path>) -> anyhow::Result<Stopwords> {
    let Some(path) = path else {
        info!("no stopword list configured");
        return Ok(Stopwords::new());
    };

    let bytes = fs::read(path).with_context(|| format!("failed to read stopwords {path:?}"))?;
    let stopwords = if path.extension().is_some_and(|ext| ext == "rkyv") {
        Stopwords::from_archive(&bytes)
            .with_context(|| format!("failed to load lexicon {path:?}"))?
    } else {
        let text = String::from_utf8(bytes)
            .with_context(|| format!("stopword list {path:?} is not UTF-8"))?;
        Stopwords::from_text(&text)
    };

    info!(words = stopwords.len(), path = %path.display(), "loaded stopwords");
    Ok(stopwords)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = fs::read_to_string(path).with_context(|| format!("failed to read {path:?}"))?;
    serde_json::from_str(&raw).with_context(|| format!("failed to parse {path:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_text_and_archived_stopwords_agree() {
        let dir = tempfile::tempdir().expect("tempdir");
        let text_path = dir.path().join("generic_words.txt");
        let archive_path = dir.path().join("generic_words.rkyv");

        let mut file = fs::File::create(&text_path).expect("create list");
        writeln!(file, "thing\nday\ntime").expect("write list");

        let from_text = load_stopwords(Some(text_path.as_path())).expect("text list");
        fs::write(&archive_path, from_text.to_archive(1).expect("archive")).expect("write archive");
        let from_archive = load_stopwords(Some(archive_path.as_path())).expect("archived list");

        assert_eq!(from_text.len(), 3);
        assert_eq!(from_text, from_archive);
    }

    #[test]
    fn test_missing_path_means_empty_list() {
        assert!(load_stopwords(None).expect("no list").is_empty());
    }

    #[test]
    fn test_json_file_source() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("entry.json");
        fs::write(
            &path,
            r#"{"entities": [], "tokens": [], "documentSentiment": {"score": 0.2, "magnitude": 0.4}}"#,
        )
        .expect("write entry");

        let annotations = JsonFileSource::new(&path).fetch().expect("valid entry");
        assert_eq!(annotations.document_sentiment.magnitude, 0.4);
    }

    #[test]
    fn test_unreadable_json_reports_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").expect("write entry");

        let error = JsonFileSource::new(&path).fetch().unwrap_err();
        assert!(format!("{error:#}").contains("broken.json"));
    }
}
