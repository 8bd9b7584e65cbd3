// ── Diagnosis Resolution ──
//
// A label is resolved against one language partition by a fallback chain.
// The first tier that produces an entry wins:
//
//   1. exact         normalized label == key
//   2. substring     first key (declaration order) overlapping the label
//   3. pattern       symptom keyword table, see FALLBACK_RULES
//   4. healthy leaf  "<plant> leaf" for healthy-looking labels
//   5. generic       synthesized entry with a fixed care checklist
//
// Resolution never crosses partitions and never fails.

use log::debug;

use crate::knowledge::{normalize, KnowledgeBase, Partition};
use crate::render::{generic_entry, render_message};
use crate::severity::DISEASE_KEYWORDS;
use crate::types::{DiagnosisResult, KnowledgeBaseEntry, Language, MatchTier};

// ── Types ──

/// Symptom keywords mapped to preferred knowledge base keys.
#[derive(Debug, Clone, Copy)]
pub struct FallbackRule {
    /// The rule applies when the label contains any of these.
    pub keywords: &'static [&'static str],
    /// Candidate keys, tried in order.
    pub keys: &'static [&'static str],
}

/// Evaluated top to bottom. The specific blight variants must stay ahead of
/// the generic "blight" rule.
pub const FALLBACK_RULES: [FallbackRule; 12] = [
    FallbackRule {
        keywords: &["early blight"],
        keys: &["tomato early blight leaf", "potato leaf early blight"],
    },
    FallbackRule {
        keywords: &["late blight"],
        keys: &["tomato leaf late blight", "potato leaf late blight"],
    },
    FallbackRule {
        keywords: &["septoria", "leaf spot"],
        keys: &["tomato septoria leaf spot", "bell_pepper leaf spot"],
    },
    FallbackRule {
        keywords: &["rust"],
        keys: &["apple rust leaf", "corn rust leaf"],
    },
    FallbackRule {
        keywords: &["bacterial"],
        keys: &["tomato leaf bacterial spot", "bell_pepper leaf spot"],
    },
    FallbackRule {
        keywords: &["virus", "mosaic"],
        keys: &["tomato leaf mosaic virus", "tomato leaf yellow virus"],
    },
    FallbackRule {
        keywords: &["mold"],
        keys: &["tomato mold leaf"],
    },
    FallbackRule {
        keywords: &["mildew", "powdery"],
        keys: &["squash powdery mildew leaf"],
    },
    FallbackRule {
        keywords: &["scab"],
        keys: &["apple scab leaf"],
    },
    FallbackRule {
        keywords: &["rot"],
        keys: &["grape leaf black rot"],
    },
    FallbackRule {
        keywords: &["gray", "grey"],
        keys: &["corn gray leaf spot"],
    },
    FallbackRule {
        keywords: &["blight"],
        keys: &["corn leaf blight"],
    },
];

/// Tokens that mark a label as describing (possibly healthy) leaf tissue.
pub const HEALTHY_INDICATORS: [&str; 2] = ["leaf", "healthy"];

impl FallbackRule {
    pub fn applies_to(&self, label: &str) -> bool {
        self.keywords.iter().any(|k| label.contains(k))
    }
}

// ── Tiers ──

fn exact<'a>(partition: &'a Partition, label: &str) -> Option<&'a KnowledgeBaseEntry> {
    partition.get(label)
}

fn substring<'a>(partition: &'a Partition, label: &str) -> Option<&'a KnowledgeBaseEntry> {
    partition
        .entries()
        .iter()
        .find(|entry| label.contains(entry.key.as_str()) || entry.key.contains(label))
}

fn disease_pattern<'a>(partition: &'a Partition, label: &str) -> Option<&'a KnowledgeBaseEntry> {
    FALLBACK_RULES
        .iter()
        .filter(|rule| rule.applies_to(label))
        .find_map(|rule| rule.keys.iter().find_map(|key| partition.get(key)))
}

fn healthy_leaf<'a>(partition: &'a Partition, label: &str) -> Option<&'a KnowledgeBaseEntry> {
    let looks_healthy = HEALTHY_INDICATORS.iter().any(|t| label.contains(t))
        && !DISEASE_KEYWORDS.iter().any(|k| label.contains(k));
    if !looks_healthy {
        return None;
    }

    let plant = label.split("leaf").next().unwrap_or_default().trim();
    partition.get(&format!("{} leaf", plant))
}

/// Run tiers 1-4 over an already normalized label.
pub fn lookup<'a>(
    partition: &'a Partition,
    label: &str,
) -> Option<(&'a KnowledgeBaseEntry, MatchTier)> {
    // The empty string is a substring of every key; send it straight to the
    // generic fallback instead.
    if label.is_empty() {
        return None;
    }

    exact(partition, label)
        .map(|e| (e, MatchTier::Exact))
        .or_else(|| substring(partition, label).map(|e| (e, MatchTier::Substring)))
        .or_else(|| disease_pattern(partition, label).map(|e| (e, MatchTier::DiseasePattern)))
        .or_else(|| healthy_leaf(partition, label).map(|e| (e, MatchTier::HealthyLeaf)))
}

// ── Public API ──

/// Resolve a classifier label into a localized diagnosis.
pub fn resolve(
    kb: &KnowledgeBase,
    label: &str,
    confidence: f64,
    language: Language,
) -> DiagnosisResult {
    let partition = kb.partition(language);
    let normalized = normalize(label);

    let (entry, tier, matched_key) = match lookup(partition, &normalized) {
        Some((entry, tier)) => (entry.clone(), tier, Some(entry.key.clone())),
        None => (generic_entry(label, language), MatchTier::Generic, None),
    };

    debug!(
        "resolved {:?} [{}] via {} tier -> {}",
        label,
        language,
        tier,
        matched_key.as_deref().unwrap_or("<generic>")
    );

    let rendered_message = render_message(&entry, label, confidence, language);

    DiagnosisResult {
        description: entry.description,
        recommendations: entry.recommendations,
        rendered_message,
        tier,
        matched_key,
    }
}

// ── Tests ──
