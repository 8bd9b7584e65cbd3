// ── Error Types ──
//
// Every variant is a configuration error raised while loading the knowledge
// base. Resolving a label never fails.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum KhetiError {
    #[error("invalid knowledge partition in {origin}: {reason}")]
    InvalidPartition { origin: String, reason: String },

    #[error("unsupported language code {code:?} in {origin}")]
    UnsupportedLanguage { code: String, origin: String },

    #[error("knowledge partition {language} in {origin} has no entries")]
    EmptyPartition { language: String, origin: String },

    #[error("entry {key:?} in partition {language} has no description")]
    MissingDescription { language: String, key: String },

    #[error("duplicate key {key:?} in partition {language}")]
    DuplicateKey { language: String, key: String },

    #[error("language {language} is declared by more than one partition")]
    DuplicatePartition { language: String },

    #[error("no knowledge partition for language {language}")]
    MissingPartition { language: String },
}

pub type Result<T> = std::result::Result<T, KhetiError>;
