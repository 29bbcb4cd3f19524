pub mod classify;
pub mod labels;
pub mod stopwords;

pub use classify::{route, EntityClassifier};
pub use labels::{mention_words, DependencyLabelMap};
pub use stopwords::{LexiconError, Stopwords};
