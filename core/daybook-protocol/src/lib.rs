pub mod annotation;
pub mod labels;
pub mod model;

// Re-export core types for convenience
pub use annotation::{
    AnnotatedEntity, DependencyEdge, JournalAnnotations, Mention, SentenceAnnotation,
    SyntaxToken, TextSpan,
};
pub use labels::{DependencyLabel, EntityType, RoleFlags};
pub use model::*;
