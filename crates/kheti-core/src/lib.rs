//! Diagnosis resolution for plant disease classifier output.
//!
//! Turns a `(label, confidence, language)` triple into a health score and a
//! localized diagnosis drawn from a language-partitioned knowledge base.

pub mod error;
pub mod knowledge;
pub mod render;
pub mod report;
pub mod resolve;
pub mod severity;
pub mod types;

pub use error::{KhetiError, Result};
pub use knowledge::{parse_partition, KnowledgeBase, Partition};
pub use report::{AnalysisReport, DiagnosisEngine};
pub use resolve::resolve;
pub use severity::classify;
pub use types::{
    DiagnosisResult, KnowledgeBaseEntry, Language, MatchTier, Prediction, SeverityResult,
};
