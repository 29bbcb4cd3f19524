use std::collections::HashSet;

use daybook_protocol::Lexicon;
use rkyv::AlignedVec;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("stopword archive failed validation: {0}")]
    InvalidArchive(String),
    #[error("failed to archive stopwords: {0}")]
    Serialize(String),
}

/// Entity names that never make it into a profile.
///
/// Loaded once at startup and only read afterwards; share it behind an `Arc`.
/// Matching is exact and case-sensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stopwords {
    words: HashSet<String>,
}

impl Stopwords {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a whitespace-delimited word list.
    pub fn from_text(text: &str) -> Self {
        Self::from_words(text.split_whitespace())
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Loads a list archived with [`Stopwords::to_lexicon`].
    ///
    /// The bytes are copied into an aligned buffer first, so slices read
    /// straight from disk are fine.
    pub fn from_archive(bytes: &[u8]) -> Result<Self, LexiconError> {
        let mut aligned = AlignedVec::with_capacity(bytes.len());
        aligned.extend_from_slice(bytes);

        let lexicon = rkyv::check_archived_root::<Lexicon>(&aligned)
            .map_err(|e| LexiconError::InvalidArchive(e.to_string()))?;

        Ok(Self::from_words(lexicon.words.iter().map(|w| w.as_str())))
    }

    /// Sorted snapshot for archiving.
    pub fn to_lexicon(&self, version: u32) -> Lexicon {
        let mut words: Vec<String> = self.words.iter().cloned().collect();
        words.sort();
        Lexicon { version, words }
    }

    /// Archived [`Lexicon`] bytes, readable by [`Stopwords::from_archive`].
    pub fn to_archive(&self, version: u32) -> Result<Vec<u8>, LexiconError> {
        let bytes = rkyv::to_bytes::<_, 256>(&self.to_lexicon(version))
            .map_err(|e| LexiconError::Serialize(e.to_string()))?;
        Ok(bytes.to_vec())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.words.contains(name)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
