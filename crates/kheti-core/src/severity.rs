// ── Severity ──
//
// A label denotes a disease when it contains any of the keywords below.
// Containment is plain substring matching so compound labels such as
// "tomato leaf bacterial spot" are caught.

use crate::knowledge::normalize;
use crate::types::SeverityResult;

pub const DISEASE_KEYWORDS: [&str; 10] = [
    "blight",
    "spot",
    "rust",
    "rot",
    "mold",
    "virus",
    "mosaic",
    "mildew",
    "scab",
    "bacterial",
];

/// True if the label names a pathological condition rather than healthy tissue.
pub fn is_disease(label: &str) -> bool {
    let label = normalize(label);
    DISEASE_KEYWORDS.iter().any(|keyword| label.contains(keyword))
}

/// Derive a 0–100 health score from a label and the classifier's confidence.
///
/// Confident disease predictions push the score down, confident healthy
/// predictions push it up. Out-of-range confidences are clamped into the
/// score range, never rejected.
pub fn classify(label: &str, confidence: f64) -> SeverityResult {
    let is_disease = is_disease(label);
    let raw = if is_disease {
        100.0 - confidence * 100.0
    } else {
        confidence * 100.0
    };

    SeverityResult {
        is_disease,
        health_score: clamp_score(raw),
    }
}

fn clamp_score(score: f64) -> f64 {
    if score.is_nan() {
        0.0
    } else {
        score.clamp(0.0, 100.0)
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_containment() {
        assert!(classify("tomato leaf bacterial spot", 0.9).is_disease);
        assert!(classify("Corn RUST leaf", 0.5).is_disease);
        assert!(!classify("tomato leaf", 0.95).is_disease);
        assert!(!classify("blueberry leaf", 0.95).is_disease);
    }

    #[test]
    fn test_substring_not_whole_word() {
        // "carrot" contains "rot"
        assert!(is_disease("carrot leaf"));
    }

    #[test]
    fn test_health_score_formula() {
        let scab = classify("apple scab leaf", 0.8);
        assert!(scab.is_disease);
        assert!((scab.health_score - 20.0).abs() < 1e-9);

        let grape = classify("grape leaf", 0.9);
        assert!(!grape.is_disease);
        assert!((grape.health_score - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_out_of_range_confidence_is_clamped() {
        assert_eq!(classify("apple scab leaf", 1.5).health_score, 0.0);
        assert_eq!(classify("apple scab leaf", -0.5).health_score, 100.0);
        assert_eq!(classify("apple leaf", 1.5).health_score, 100.0);
        assert_eq!(classify("apple leaf", -0.2).health_score, 0.0);
        assert_eq!(classify("apple leaf", f64::NAN).health_score, 0.0);
    }

    #[test]
    fn test_empty_label_is_healthy() {
        let result = classify("   ", 0.4);
        assert!(!result.is_disease);
        assert!((result.health_score - 40.0).abs() < 1e-9);
    }
}
