// ── Knowledge Base ──
//
// One YAML document per language partition:
//
//   language: en
//   entries:
//     - key: apple scab leaf
//       description: ...
//       recommendations: [...]
//
// `entries` is a sequence so that declaration order survives loading. The
// substring tier of the resolver walks keys in exactly this order.

use std::collections::HashMap;

use serde::Deserialize;

use crate::error::{KhetiError, Result};
use crate::types::{KnowledgeBaseEntry, Language};

// ── Types ──

#[derive(Debug, Deserialize)]
struct PartitionDocument {
    language: String,
    #[serde(default)]
    entries: Vec<RawEntry>,
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    key: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    recommendations: Option<Vec<String>>,
}

/// The entries of a single language, in declaration order.
#[derive(Debug, Clone)]
pub struct Partition {
    language: Language,
    entries: Vec<KnowledgeBaseEntry>,
    index: HashMap<String, usize>,
}

/// Immutable, language-partitioned knowledge base. Every supported language
/// has exactly one non-empty partition.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    partitions: Vec<Partition>,
}

// ── Helpers ──

/// Canonical form used for keys and labels alike.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

fn position(language: Language) -> usize {
    Language::ALL
        .iter()
        .position(|l| *l == language)
        .unwrap_or_default()
}

// ── Public API ──

/// Parse and validate one partition document. `origin` names the source in
/// error messages (usually a file path).
pub fn parse_partition(input: &str, origin: &str) -> Result<Partition> {
    let doc: PartitionDocument =
        serde_yaml::from_str(input).map_err(|e| KhetiError::InvalidPartition {
            origin: origin.to_string(),
            reason: e.to_string(),
        })?;

    let language = Language::parse(&doc.language).ok_or_else(|| {
        KhetiError::UnsupportedLanguage {
            code: doc.language.clone(),
            origin: origin.to_string(),
        }
    })?;

    if doc.entries.is_empty() {
        return Err(KhetiError::EmptyPartition {
            language: language.to_string(),
            origin: origin.to_string(),
        });
    }

    let entries = doc
        .entries
        .into_iter()
        .map(|raw| {
            let key = normalize(&raw.key);
            match raw.description {
                Some(description) if !description.trim().is_empty() => Ok(KnowledgeBaseEntry {
                    key,
                    description,
                    recommendations: raw.recommendations.unwrap_or_default(),
                }),
                _ => Err(KhetiError::MissingDescription {
                    language: language.to_string(),
                    key,
                }),
            }
        })
        .collect::<Result<Vec<_>>>()?;

    Partition::new(language, entries)
}

impl Partition {
    /// Build a partition from entries already in declaration order.
    pub fn new(language: Language, entries: Vec<KnowledgeBaseEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(KhetiError::EmptyPartition {
                language: language.to_string(),
                origin: "<memory>".to_string(),
            });
        }

        let mut index = HashMap::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            if entry.description.trim().is_empty() {
                return Err(KhetiError::MissingDescription {
                    language: language.to_string(),
                    key: entry.key.clone(),
                });
            }
            if index.insert(entry.key.clone(), i).is_some() {
                return Err(KhetiError::DuplicateKey {
                    language: language.to_string(),
                    key: entry.key.clone(),
                });
            }
        }

        Ok(Self {
            language,
            entries,
            index,
        })
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Exact lookup by normalized key.
    pub fn get(&self, key: &str) -> Option<&KnowledgeBaseEntry> {
        self.index.get(key).map(|&i| &self.entries[i])
    }

    /// Entries in declaration order.
    pub fn entries(&self) -> &[KnowledgeBaseEntry] {
        &self.entries
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KnowledgeBase {
    /// Assemble partitions into a knowledge base. Every supported language
    /// must be covered exactly once.
    pub fn from_partitions(partitions: Vec<Partition>) -> Result<Self> {
        let mut slots: Vec<Option<Partition>> = Language::ALL.iter().map(|_| None).collect();

        for partition in partitions {
            let slot = &mut slots[position(partition.language)];
            if slot.is_some() {
                return Err(KhetiError::DuplicatePartition {
                    language: partition.language.to_string(),
                });
            }
            *slot = Some(partition);
        }

        let partitions = slots
            .into_iter()
            .zip(Language::ALL)
            .map(|(slot, language)| {
                slot.ok_or_else(|| KhetiError::MissingPartition {
                    language: language.to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { partitions })
    }

    pub fn partition(&self, language: Language) -> &Partition {
        &self.partitions[position(language)]
    }

    pub fn partitions(&self) -> impl Iterator<Item = &Partition> {
        self.partitions.iter()
    }
}

// ── Tests ──
