//! casuist — case-based reasoning over ethical dilemmas
//!
//! Usage:
//!   casuist analyze --db precedents.json --situation dilemma.json
//!   casuist analyze --db ... --situation ... --strategy stakeholder
//!   casuist precedents --db precedents.json

use anyhow::{bail, Context, Result};
use casuist_core::{Conflict, Dilemma, ReasoningPath, Resolution};
use casuist_engine::{
    find_relevant_precedents, AdaptationEngine, ConflictDetector, ConflictResolver,
    ResolutionOptions, SimilarityWeights,
};
use casuist_store::PrecedentStore;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "casuist",
    about = "Case-based reasoning over ethical dilemmas",
    version = env!("CARGO_PKG_VERSION")
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full pipeline: retrieve, adapt, detect, resolve
    Analyze {
        /// Path to the precedent database (JSON)
        #[arg(long)]
        db: PathBuf,

        /// Path to the dilemma file (JSON with situation, title, stakeholders)
        #[arg(long)]
        situation: PathBuf,

        /// Resolution strategy (balance, stakeholder, compromise, pluralistic, fallback)
        #[arg(long)]
        strategy: Option<String>,

        /// Minimum similarity for a precedent to be considered
        #[arg(long)]
        threshold: Option<f64>,

        /// Weight of description overlap in similarity scoring
        #[arg(long, default_value_t = 0.5)]
        description_weight: f64,

        /// Weight of structural overlap in similarity scoring
        #[arg(long, default_value_t = 0.5)]
        structure_weight: f64,

        /// Force a specific precedent id instead of the top-ranked one
        #[arg(long)]
        precedent: Option<String>,

        /// Return unchanged deep copies instead of adapted reasoning
        #[arg(long, default_value_t = false)]
        skip_adaptation: bool,
    },
    /// List the precedents in a database
    Precedents {
        /// Path to the precedent database (JSON)
        #[arg(long)]
        db: PathBuf,
    },
}

#[derive(Serialize)]
struct RankedEntry {
    id: String,
    title: String,
    similarity: f64,
}

#[derive(Serialize)]
struct Report {
    generated_at: chrono::DateTime<chrono::Utc>,
    dilemma: String,
    ranked_precedents: Vec<RankedEntry>,
    selected_precedent: Option<String>,
    adapted_paths: Vec<ReasoningPath>,
    conflicts: Vec<Conflict>,
    resolutions: Vec<Resolution>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "casuist=info".into()),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Analyze {
            db,
            situation,
            strategy,
            threshold,
            description_weight,
            structure_weight,
            precedent,
            skip_adaptation,
        } => analyze(
            db,
            situation,
            strategy,
            threshold,
            SimilarityWeights {
                description: description_weight,
                structure: structure_weight,
            },
            precedent,
            skip_adaptation,
        ),
        Commands::Precedents { db } => list_precedents(db),
    }
}

#[allow(clippy::too_many_arguments)]
fn analyze(
    db: PathBuf,
    situation: PathBuf,
    strategy: Option<String>,
    threshold: Option<f64>,
    weights: SimilarityWeights,
    forced_precedent: Option<String>,
    skip_adaptation: bool,
) -> Result<()> {
    let store = PrecedentStore::load(&db)
        .with_context(|| format!("loading precedent database from {}", db.display()))?;
    let raw = std::fs::read_to_string(&situation)
        .with_context(|| format!("reading dilemma from {}", situation.display()))?;
    let dilemma: Dilemma = serde_json::from_str(&raw).context("parsing dilemma JSON")?;

    let ranked = find_relevant_precedents(
        &dilemma.situation,
        store.precedents(),
        threshold,
        weights,
    );
    info!(candidates = store.len(), relevant = ranked.len(), "retrieval complete");

    let selected = match &forced_precedent {
        Some(id) => match store.get(id) {
            Some(p) => Some(p),
            None => bail!("precedent '{}' not found in database", id),
        },
        None => ranked.first().map(|r| r.precedent),
    };

    let adaptation = AdaptationEngine::default();
    let adapted =
        adaptation.adapt_reasoning_paths(selected, Some(&dilemma.situation), skip_adaptation);

    let detector = ConflictDetector::new(adaptation.registry().clone());
    let conflicts = detector.detect_conflicts(&adapted);

    let resolver = ConflictResolver::new(adaptation.registry().clone());
    let outcome = resolver.resolve_conflicts(
        &adapted,
        &conflicts,
        &dilemma,
        None,
        &ResolutionOptions { strategy },
    );

    let report = Report {
        generated_at: chrono::Utc::now(),
        dilemma: dilemma.title.clone(),
        ranked_precedents: ranked
            .iter()
            .map(|r| RankedEntry {
                id: r.precedent.id.clone(),
                title: r.precedent.title.clone(),
                similarity: r.similarity,
            })
            .collect(),
        selected_precedent: selected.map(|p| p.id.clone()),
        adapted_paths: adapted,
        conflicts,
        resolutions: outcome.resolutions,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn list_precedents(db: PathBuf) -> Result<()> {
    let store = PrecedentStore::load(&db)
        .with_context(|| format!("loading precedent database from {}", db.display()))?;
    for precedent in store.iter() {
        println!(
            "{}  {}  ({} reasoning paths)",
            precedent.id,
            precedent.title,
            precedent.reasoning_paths.len()
        );
    }
    Ok(())
}
