// ── Message Rendering ──
//
// Layout of a rendered message:
//
//   {description}
//
//   Detected: {label} (Confidence: 67.9%)
//
//   Recommendations:
//   1. ...
//   2. ...
//
// The recommendations block is omitted when there is nothing to recommend.

use crate::types::{KnowledgeBaseEntry, Language};

// ── Types ──

/// Localized fixed strings for one language.
struct Phrases {
    detected: &'static str,
    confidence: &'static str,
    recommendations_header: &'static str,
    generic_care: &'static [&'static str],
}

static ENGLISH: Phrases = Phrases {
    detected: "Detected",
    confidence: "Confidence",
    recommendations_header: "Recommendations:",
    generic_care: &[
        "Continue monitoring your plant regularly",
        "Maintain proper watering and nutrition",
        "Watch for early signs of disease",
        "Practice good garden hygiene",
        "If you notice disease symptoms, take appropriate action immediately",
    ],
};

static URDU: Phrases = Phrases {
    detected: "پتہ چلا",
    confidence: "اعتماد",
    recommendations_header: "تجاویز:",
    generic_care: &[
        "اپنے پودے کی باقاعدہ نگرانی جاری رکھیں",
        "مناسب پانی اور غذائی اجزاء برقرار رکھیں",
        "بیماری کی ابتدائی علامات پر نظر رکھیں",
        "باغ کی اچھی حفظان صحت کا طریقہ اپنائیں",
    ],
};

fn phrases(language: Language) -> &'static Phrases {
    match language {
        Language::English => &ENGLISH,
        Language::Urdu => &URDU,
    }
}

// ── Public API ──

/// Format a confidence as a percentage with one decimal place.
/// The value is displayed as supplied, without clamping.
pub fn format_confidence(confidence: f64) -> String {
    format!("{:.1}%", confidence * 100.0)
}

/// Synthesized entry for labels nothing in the knowledge base matches.
/// The description echoes the label exactly as the classifier reported it.
pub fn generic_entry(label: &str, language: Language) -> KnowledgeBaseEntry {
    let phrases = phrases(language);
    KnowledgeBaseEntry {
        key: String::new(),
        description: format!("{}: {}", phrases.detected, label),
        recommendations: phrases.generic_care.iter().map(|s| s.to_string()).collect(),
    }
}

/// Render the final user-facing message for a resolved entry.
pub fn render_message(
    entry: &KnowledgeBaseEntry,
    label: &str,
    confidence: f64,
    language: Language,
) -> String {
    let phrases = phrases(language);
    let mut out = String::with_capacity(entry.description.len() + 64);

    out.push_str(&entry.description);
    out.push_str(&format!(
        "\n\n{}: {} ({}: {})",
        phrases.detected,
        label,
        phrases.confidence,
        format_confidence(confidence)
    ));

    if !entry.recommendations.is_empty() {
        out.push_str("\n\n");
        out.push_str(phrases.recommendations_header);
    }
    for (i, recommendation) in entry.recommendations.iter().enumerate() {
        out.push_str(&format!("\n{}. {}", i + 1, recommendation));
    }

    out
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn scab() -> KnowledgeBaseEntry {
        KnowledgeBaseEntry {
            key: "apple scab leaf".to_string(),
            description: "Apple Scab is a fungal disease.".to_string(),
            recommendations: vec![
                "Remove infected leaves".to_string(),
                "Apply fungicide".to_string(),
            ],
        }
    }

    #[test]
    fn test_format_confidence_rounding() {
        assert_eq!(format_confidence(0.6789), "67.9%");
        assert_eq!(format_confidence(1.0), "100.0%");
        assert_eq!(format_confidence(0.0), "0.0%");
    }

    #[test]
    fn test_format_confidence_is_not_clamped() {
        assert_eq!(format_confidence(1.5), "150.0%");
        assert_eq!(format_confidence(-0.25), "-25.0%");
    }

    #[test]
    fn test_render_english() {
        let message = render_message(&scab(), "Apple Scab Leaf", 0.6789, Language::English);
        insta::assert_snapshot!(message, @r"
        Apple Scab is a fungal disease.

        Detected: Apple Scab Leaf (Confidence: 67.9%)

        Recommendations:
        1. Remove infected leaves
        2. Apply fungicide
        ");
    }

    #[test]
    fn test_render_urdu_headers() {
        let message = render_message(&scab(), "apple scab leaf", 0.5, Language::Urdu);
        assert!(message.starts_with("Apple Scab is a fungal disease.\n\n"));
        assert!(message.contains("\n\nپتہ چلا: apple scab leaf (اعتماد: 50.0%)"));
        assert!(message.contains("\n\nتجاویز:\n1. Remove infected leaves\n2. Apply fungicide"));
    }

    #[test]
    fn test_render_without_recommendations() {
        let entry = KnowledgeBaseEntry {
            recommendations: Vec::new(),
            ..scab()
        };
        let message = render_message(&entry, "x", 0.25, Language::English);
        assert_eq!(
            message,
            "Apple Scab is a fungal disease.\n\nDetected: x (Confidence: 25.0%)"
        );
    }

    #[test]
    fn test_generic_entry_is_localized() {
        let en = generic_entry("Odd Label", Language::English);
        assert_eq!(en.description, "Detected: Odd Label");
        assert_eq!(en.recommendations.len(), 5);

        let ur = generic_entry("Odd Label", Language::Urdu);
        assert_eq!(ur.description, "پتہ چلا: Odd Label");
        assert_eq!(ur.recommendations.len(), 4);
    }
}
