pub mod analyzer;
pub mod config;
pub mod merge;
pub mod rank;
pub mod summary;

pub use analyzer::JournalAnalyzer;
pub use config::{parse_roles, AnalyzerConfig, SettingError};
pub use merge::{collapse_items, Grouping, Merger, ScorePolicy};
pub use rank::rank;
pub use summary::{pool, CrossJournalSummarizer, RISK_KEYWORD, RISK_THRESHOLD};
