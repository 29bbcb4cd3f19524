use std::collections::HashMap;

use daybook_protocol::{DependencyLabel, SyntaxToken, TextSpan};

/// Token begin offset -> dependency label, for one document.
#[derive(Debug, Clone, Default)]
pub struct DependencyLabelMap {
    by_offset: HashMap<usize, DependencyLabel>,
}

impl DependencyLabelMap {
    /// Later tokens win if the backend reports two at the same offset.
    pub fn from_tokens(tokens: &[SyntaxToken]) -> Self {
        let by_offset = tokens
            .iter()
            .map(|t| (t.text.begin_offset, t.dependency_edge.label))
            .collect();
        Self { by_offset }
    }

    pub fn label_at(&self, offset: usize) -> Option<DependencyLabel> {
        self.by_offset.get(&offset).copied()
    }

    pub fn len(&self) -> usize {
        self.by_offset.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_offset.is_empty()
    }
}

/// Words of a mention with the byte offset each one starts at.
///
/// Walks the content one space-separated word at a time, advancing by the
/// word's UTF-8 length plus the separator. Empty pieces (runs of spaces) only
/// advance the offset.
pub fn mention_words(span: &TextSpan) -> impl Iterator<Item = (usize, &str)> {
    let mut offset = span.begin_offset;
    span.content.split(' ').filter_map(move |word| {
        let start = offset;
        offset += word.len() + 1;
        (!word.is_empty()).then_some((start, word))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mention_words_offsets() {
        let span = TextSpan::new("my old  job", 10);
        let words: Vec<(usize, &str)> = mention_words(&span).collect();

        assert_eq!(words, vec![(10, "my"), (13, "old"), (18, "job")]);
    }

    #[test]
    fn test_mention_words_count_bytes_not_chars() {
        // "café" is five bytes in UTF-8.
        let span = TextSpan::new("café visit", 0);
        let words: Vec<(usize, &str)> = mention_words(&span).collect();

        assert_eq!(words, vec![(0, "café"), (6, "visit")]);
    }

    #[test]
    fn test_missing_offset_is_none() {
        let map = DependencyLabelMap::from_tokens(&[
            SyntaxToken::new("I", 0, DependencyLabel::Nsubj),
            SyntaxToken::new("lost", 2, DependencyLabel::Root),
        ]);

        assert_eq!(map.len(), 2);
        assert_eq!(map.label_at(2), Some(DependencyLabel::Root));
        assert_eq!(map.label_at(3), None);
    }
}
