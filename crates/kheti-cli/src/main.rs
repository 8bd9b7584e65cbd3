use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use kheti_core::{DiagnosisEngine, KnowledgeBase, Language, Prediction};
use kheti_store::KnowledgeStore;

// ── CLI Definition ──

#[derive(Parser)]
#[command(name = "kheti", about = "Plant disease diagnosis from classifier labels")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the bundled knowledge base into a directory
    Init {
        /// Directory to create (default: ./knowledge)
        #[arg(long, default_value = "knowledge")]
        path: PathBuf,
    },
    /// Load a knowledge base and report its partitions
    Validate {
        /// Knowledge directory (default: bundled data)
        #[arg(long, env = "KHETI_KB")]
        kb: Option<PathBuf>,
    },
    /// List the keys of one language partition in match order
    Keys {
        #[arg(long, default_value = "en")]
        lang: String,
        #[arg(long, env = "KHETI_KB")]
        kb: Option<PathBuf>,
    },
    /// Diagnose a classifier label
    Diagnose {
        /// Label as reported by the classifier
        label: String,
        /// Classifier confidence, normally within 0..=1
        #[arg(long, allow_negative_numbers = true)]
        confidence: f64,
        /// Response language (en, ur); unknown codes fall back to en
        #[arg(long, default_value = "en")]
        lang: String,
        /// Class index reported by the classifier
        #[arg(long, default_value_t = -1, allow_negative_numbers = true)]
        class_id: i64,
        #[arg(long, env = "KHETI_KB")]
        kb: Option<PathBuf>,
        /// Print only the rendered message instead of the JSON report
        #[arg(long)]
        message: bool,
    },
}

// ── Helpers ──

fn load_knowledge(kb: Option<&PathBuf>) -> Result<KnowledgeBase> {
    match kb {
        Some(path) => KnowledgeStore::new(path)
            .load()
            .with_context(|| format!("loading knowledge base from {}", path.display())),
        None => kheti_store::bundled(),
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init { path } => {
            let store = KnowledgeStore::new(&path);
            let written = store.init()?;
            for file in &written {
                println!("wrote {}", file.display());
            }
            println!("initialized knowledge base at {}", path.display());
        }
        Commands::Validate { kb } => {
            let engine = DiagnosisEngine::new(Arc::new(load_knowledge(kb.as_ref())?));
            for partition in engine.knowledge_base().partitions() {
                println!("{}: {} entries", partition.language(), partition.len());
            }
            println!("ok");
        }
        Commands::Keys { lang, kb } => {
            let knowledge = load_knowledge(kb.as_ref())?;
            for key in knowledge.partition(Language::from_code(&lang)).keys() {
                println!("{}", key);
            }
        }
        Commands::Diagnose {
            label,
            confidence,
            lang,
            class_id,
            kb,
            message,
        } => {
            let engine = DiagnosisEngine::new(Arc::new(load_knowledge(kb.as_ref())?));
            let prediction = Prediction {
                label,
                confidence,
                class_id,
            };
            let report = engine.analyze(&prediction, &lang);
            if message {
                println!("{}", report.recommendations);
            } else {
                let json = serde_json::to_string_pretty(&report).context("serializing report")?;
                println!("{}", json);
            }
        }
    }
    Ok(())
}

// ── Main ──

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {:#}", e);
        process::exit(1);
    }
}

// ── Tests ──
