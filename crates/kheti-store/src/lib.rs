use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use kheti_core::{parse_partition, KnowledgeBase, Partition};
use log::{info, warn};
use walkdir::WalkDir;

// ── Constants ──

/// Partitions compiled into the binary, keyed by file name.
pub const BUNDLED_PARTITIONS: [(&str, &str); 2] = [
    ("en.yaml", include_str!("../../../knowledge/en.yaml")),
    ("ur.yaml", include_str!("../../../knowledge/ur.yaml")),
];

const PARTITION_EXTENSIONS: [&str; 2] = ["yaml", "yml"];

// ── Types ──

/// Handle to a knowledge directory on disk: one YAML file per language.
#[derive(Debug, Clone)]
pub struct KnowledgeStore {
    pub root: PathBuf,
}

// ── Helpers ──

fn is_partition_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| PARTITION_EXTENSIONS.contains(&e))
        .unwrap_or(false)
}

fn assemble(partitions: Vec<Partition>, origin: &str) -> Result<KnowledgeBase> {
    let kb = KnowledgeBase::from_partitions(partitions)
        .with_context(|| format!("assembling knowledge base from {origin}"))?;
    for partition in kb.partitions() {
        info!(
            "loaded {} entries for language {} from {}",
            partition.len(),
            partition.language(),
            origin
        );
    }
    Ok(kb)
}

// ── Public API ──

/// Build the knowledge base shipped with the crate.
pub fn bundled() -> Result<KnowledgeBase> {
    let partitions = BUNDLED_PARTITIONS
        .iter()
        .map(|(name, content)| {
            parse_partition(content, name)
                .with_context(|| format!("parsing bundled partition {name}"))
        })
        .collect::<Result<Vec<_>>>()?;
    assemble(partitions, "bundled data")
}

impl KnowledgeStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Write the bundled partitions into the directory.
    /// Idempotent: existing partition files are left untouched.
    pub fn init(&self) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(&self.root)
            .with_context(|| format!("creating directory: {}", self.root.display()))?;

        let mut written = Vec::new();
        for (name, content) in BUNDLED_PARTITIONS {
            let path = self.root.join(name);
            if path.exists() {
                continue;
            }
            fs::write(&path, content)
                .with_context(|| format!("writing partition: {}", path.display()))?;
            written.push(path);
        }

        Ok(written)
    }

    /// List partition files directly under the root, sorted by path.
    /// Other files are ignored with a warning.
    pub fn partition_files(&self) -> Result<Vec<PathBuf>> {
        if !self.root.is_dir() {
            bail!("knowledge directory not found: {}", self.root.display());
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            if !entry.file_type().is_file() {
                continue;
            }
            if is_partition_file(entry.path()) {
                files.push(entry.into_path());
            } else {
                warn!("ignoring non-partition file {}", entry.path().display());
            }
        }

        files.sort();
        Ok(files)
    }

    /// Read one partition file.
    pub fn read_partition(&self, path: &Path) -> Result<Partition> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading partition: {}", path.display()))?;
        let partition = parse_partition(&content, &path.display().to_string())?;
        Ok(partition)
    }

    /// Load and validate every partition into an immutable knowledge base.
    pub fn load(&self) -> Result<KnowledgeBase> {
        let files = self.partition_files()?;
        if files.is_empty() {
            bail!("no knowledge partitions in {}", self.root.display());
        }

        let partitions = files
            .iter()
            .map(|path| self.read_partition(path))
            .collect::<Result<Vec<_>>>()?;

        assemble(partitions, &self.root.display().to_string())
    }

    /// Check whether the directory holds at least one partition file.
    pub fn is_initialized(&self) -> bool {
        self.partition_files()
            .map(|files| !files.is_empty())
            .unwrap_or(false)
    }
}

// ── Tests ──
