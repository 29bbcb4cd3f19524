//! Shapes of the NLP backend's output, as consumed by the pipeline.
//!
//! Field names follow the backend's JSON (camelCase); snake_case spellings are
//! accepted as aliases so hand-written fixtures stay readable.

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

use crate::labels::{DependencyLabel, EntityType};
use crate::model::SentimentStat;

/// A span of source text. `begin_offset` is a UTF-8 byte offset.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TextSpan {
    #[cfg_attr(feature = "serde", serde(default))]
    pub content: String,
    #[cfg_attr(feature = "serde", serde(default, alias = "begin_offset"))]
    pub begin_offset: usize,
}

impl TextSpan {
    pub fn new(content: impl Into<String>, begin_offset: usize) -> Self {
        Self {
            content: content.into(),
            begin_offset,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct Mention {
    pub text: TextSpan,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct AnnotatedEntity {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(rename = "type", default))]
    pub kind: EntityType,
    #[cfg_attr(feature = "serde", serde(default))]
    pub sentiment: SentimentStat,
    #[cfg_attr(feature = "serde", serde(default))]
    pub mentions: Vec<Mention>,
}

impl AnnotatedEntity {
    pub fn new(name: impl Into<String>, kind: EntityType, score: f64, magnitude: f64) -> Self {
        Self {
            name: name.into(),
            kind,
            sentiment: SentimentStat::new(score, magnitude),
            mentions: Vec::new(),
        }
    }

    pub fn with_mention(mut self, content: impl Into<String>, begin_offset: usize) -> Self {
        self.mentions.push(Mention {
            text: TextSpan::new(content, begin_offset),
        });
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DependencyEdge {
    #[cfg_attr(feature = "serde", serde(default, alias = "head_token_index"))]
    pub head_token_index: Option<i64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub label: DependencyLabel,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SyntaxToken {
    pub text: TextSpan,
    #[cfg_attr(feature = "serde", serde(default, alias = "dependency_edge"))]
    pub dependency_edge: DependencyEdge,
}

impl SyntaxToken {
    pub fn new(content: impl Into<String>, begin_offset: usize, label: DependencyLabel) -> Self {
        Self {
            text: TextSpan::new(content, begin_offset),
            dependency_edge: DependencyEdge {
                head_token_index: None,
                label,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct SentenceAnnotation {
    pub text: TextSpan,
    #[cfg_attr(feature = "serde", serde(default))]
    pub sentiment: SentimentStat,
}

/// Everything the backend reports about one journal entry.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct JournalAnnotations {
    #[cfg_attr(feature = "serde", serde(default))]
    pub entities: Vec<AnnotatedEntity>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub tokens: Vec<SyntaxToken>,
    #[cfg_attr(feature = "serde", serde(default, alias = "document_sentiment"))]
    pub document_sentiment: SentimentStat,
    #[cfg_attr(feature = "serde", serde(default))]
    pub sentences: Vec<SentenceAnnotation>,
}
