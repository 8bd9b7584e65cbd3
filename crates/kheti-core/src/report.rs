// ── Analysis Report ──
//
// Composes severity and diagnosis into the envelope returned to callers.
// The two halves are independent; both only read the label.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::knowledge::KnowledgeBase;
use crate::resolve::resolve;
use crate::severity::classify;
use crate::types::{Language, Prediction};

pub const ANALYSIS_TYPE: &str = "plant_disease_detection";

/// Response envelope for one analyzed prediction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisReport {
    pub id: String,
    pub analysis_type: String,
    pub health_score: f64,
    pub disease_detected: Option<String>,
    pub disease_confidence: Option<f64>,
    pub growth_stage: Option<String>,
    /// The rendered diagnosis message.
    pub recommendations: String,
    /// Language code as supplied by the caller.
    pub language: String,
    pub created_at: DateTime<Utc>,
    pub predicted_class: String,
    pub confidence: f64,
}

/// Shares one immutable knowledge base across any number of requests.
#[derive(Debug, Clone)]
pub struct DiagnosisEngine {
    kb: Arc<KnowledgeBase>,
}

// ── Helpers ──

/// Round to `decimals` places, ties to even.
fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}

// ── Public API ──

impl DiagnosisEngine {
    pub fn new(kb: Arc<KnowledgeBase>) -> Self {
        Self { kb }
    }

    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.kb
    }

    /// Build the full report for a classifier prediction.
    pub fn analyze(&self, prediction: &Prediction, language: &str) -> AnalysisReport {
        let severity = classify(&prediction.label, prediction.confidence);
        let diagnosis = resolve(
            &self.kb,
            &prediction.label,
            prediction.confidence,
            Language::from_code(language),
        );

        let (disease_detected, disease_confidence) = if severity.is_disease {
            (
                Some(prediction.label.clone()),
                Some(round_to(prediction.confidence, 3)),
            )
        } else {
            (None, None)
        };

        AnalysisReport {
            id: Uuid::new_v4().to_string(),
            analysis_type: ANALYSIS_TYPE.to_string(),
            health_score: round_to(severity.health_score, 2),
            disease_detected,
            disease_confidence,
            growth_stage: None,
            recommendations: diagnosis.rendered_message,
            language: language.to_string(),
            created_at: Utc::now(),
            predicted_class: prediction.label.clone(),
            confidence: round_to(prediction.confidence, 3),
        }
    }
}

// ── Tests ──
