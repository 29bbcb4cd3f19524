use std::sync::Arc;

use daybook_classifier::{DependencyLabelMap, EntityClassifier, Stopwords};
use daybook_protocol::{
    AnnotatedEntity, JournalAnnotations, JournalResult, ScoredSentence, SentimentStat, SyntaxToken,
};
use daybook_score::combine_stat;
use tracing::debug;

use crate::config::AnalyzerConfig;
use crate::merge::Merger;
use crate::rank::rank;

/// Turns one document's annotations into its emotional profile.
#[derive(Debug, Clone)]
pub struct JournalAnalyzer {
    classifier: EntityClassifier,
    merger: Merger,
}

impl JournalAnalyzer {
    pub fn new(stopwords: Arc<Stopwords>, config: &AnalyzerConfig) -> Self {
        Self {
            classifier: EntityClassifier::new(stopwords).with_roles(config.allowed_roles),
            merger: config.merger(),
        }
    }

    pub fn analyze(&self, annotations: &JournalAnnotations) -> JournalResult {
        let mut result = self.analyze_parts(
            &annotations.entities,
            &annotations.tokens,
            annotations.document_sentiment,
        );

        result.sentences = annotations
            .sentences
            .iter()
            .map(|sentence| ScoredSentence {
                text: sentence.text.content.clone(),
                begin_offset: sentence.text.begin_offset,
                weight: combine_stat(&sentence.sentiment),
            })
            .collect();

        result
    }

    /// Classify, then merge and rank every category the same way.
    pub fn analyze_parts(
        &self,
        entities: &[AnnotatedEntity],
        tokens: &[SyntaxToken],
        document_sentiment: SentimentStat,
    ) -> JournalResult {
        let labels = DependencyLabelMap::from_tokens(tokens);
        let buckets = self.classifier.classify(entities, &labels);

        let ranked = buckets.map(|category, items| {
            let merged = self.merger.merge(&items);
            debug!(%category, before = items.len(), after = merged.len(), "merged category");
            rank(merged)
        });

        JournalResult {
            document_sentiment: combine_stat(&document_sentiment),
            entities: ranked,
            sentences: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use daybook_protocol::{DependencyLabel, EntityType, SentenceAnnotation, TextSpan};

    // "Work was awful. I hate my job but love my dog."
    fn annotations() -> JournalAnnotations {
        JournalAnnotations {
            entities: vec![
                AnnotatedEntity::new("Work", EntityType::Other, -0.8, 0.9).with_mention("Work", 0),
                AnnotatedEntity::new("job", EntityType::Other, -0.9, 1.8).with_mention("job", 26),
                AnnotatedEntity::new("my job", EntityType::Other, -0.7, 0.6)
                    .with_mention("my job", 23),
                AnnotatedEntity::new("dog", EntityType::Other, 0.9, 1.5).with_mention("dog", 42),
            ],
            tokens: vec![
                SyntaxToken::new("Work", 0, DependencyLabel::Nsubj),
                SyntaxToken::new("was", 5, DependencyLabel::Root),
                SyntaxToken::new("awful", 9, DependencyLabel::Acomp),
                SyntaxToken::new(".", 14, DependencyLabel::P),
                SyntaxToken::new("I", 16, DependencyLabel::Nsubj),
                SyntaxToken::new("hate", 18, DependencyLabel::Root),
                SyntaxToken::new("my", 23, DependencyLabel::Poss),
                SyntaxToken::new("job", 26, DependencyLabel::Dobj),
                SyntaxToken::new("but", 30, DependencyLabel::Cc),
                SyntaxToken::new("love", 34, DependencyLabel::Conj),
                SyntaxToken::new("my", 39, DependencyLabel::Poss),
                SyntaxToken::new("dog", 42, DependencyLabel::Dobj),
            ],
            document_sentiment: SentimentStat::new(-0.3, 2.4),
            sentences: vec![SentenceAnnotation {
                text: TextSpan::new("Work was awful.", 0),
                sentiment: SentimentStat::new(-0.8, 0.8),
            }],
        }
    }

    #[test]
    fn test_analyze_merges_and_ranks_other() {
        let analyzer = JournalAnalyzer::new(Arc::new(Stopwords::new()), &AnalyzerConfig::default());
        let result = analyzer.analyze(&annotations());

        // "Work" is a subject only; "job" and "my job" collapse under "job".
        let other: Vec<&str> = result.entities.other.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(other, vec!["dog", "job"]);

        let job = &result.entities.other[1];
        assert!((job.stat.score - (-0.8)).abs() < 1e-12);
        assert!((job.stat.magnitude - 2.4).abs() < 1e-12);
        assert!(result.document_sentiment < 0.0);
        assert_eq!(result.sentences.len(), 1);
        assert!(result.sentences[0].weight < 0.0);
    }

    #[test]
    fn test_empty_annotations() {
        let analyzer = JournalAnalyzer::new(Arc::new(Stopwords::new()), &AnalyzerConfig::default());
        let result = analyzer.analyze(&JournalAnnotations::default());

        assert_eq!(result.entities.total_len(), 0);
        assert_eq!(result.document_sentiment, 0.0);
        assert!(result.sentences.is_empty());
    }
}
