// ── Types ──

use serde::{Deserialize, Serialize};

/// A language partition of the knowledge base.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "ur")]
    Urdu,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::Urdu];

    /// Select the language for a request. Only `ur` picks Urdu; every other
    /// code, known or not, falls back to English.
    pub fn from_code(code: &str) -> Self {
        match code {
            "ur" => Language::Urdu,
            _ => Language::English,
        }
    }

    /// Strict lookup used when loading configuration.
    pub fn parse(code: &str) -> Option<Self> {
        match code.trim() {
            "en" => Some(Language::English),
            "ur" => Some(Language::Urdu),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Urdu => "ur",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A curated diagnosis: what the condition is and what to do about it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KnowledgeBaseEntry {
    pub key: String,
    pub description: String,
    /// Presented as a numbered list; order is meaningful.
    #[serde(default)]
    pub recommendations: Vec<String>,
}

/// Raw classifier output handed to the engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Prediction {
    pub label: String,
    pub confidence: f64,
    /// Opaque passthrough from the classifier.
    #[serde(default)]
    pub class_id: i64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SeverityResult {
    pub is_disease: bool,
    /// Always within `[0, 100]`.
    pub health_score: f64,
}

/// Which stage of the fallback chain produced a diagnosis.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    Exact,
    Substring,
    DiseasePattern,
    HealthyLeaf,
    Generic,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosisResult {
    pub description: String,
    pub recommendations: Vec<String>,
    pub rendered_message: String,
    pub tier: MatchTier,
    /// Knowledge base key that matched; `None` for the generic fallback.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_key: Option<String>,
}

impl std::fmt::Display for MatchTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchTier::Exact => write!(f, "exact"),
            MatchTier::Substring => write!(f, "substring"),
            MatchTier::DiseasePattern => write!(f, "disease-pattern"),
            MatchTier::HealthyLeaf => write!(f, "healthy-leaf"),
            MatchTier::Generic => write!(f, "generic"),
        }
    }
}
