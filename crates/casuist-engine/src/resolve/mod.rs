//! Strategy-based conflict resolution.
//!
//! Each strategy is a self-contained module implementing the
//! [`ResolutionStrategy`] trait, registered by name in the
//! [`ConflictResolver`]. The default strategy is `balance`; unknown strategy
//! names fall back to `fallback`. Conflicts involving frameworks the registry
//! marks unknown are always skipped, independent of strategy.

pub mod strategies;

use casuist_core::{Conflict, Dilemma, FrameworkRegistry, ReasoningPath, Resolution};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tracing::{debug, warn};

/// A pure resolution strategy: conflict + the two source paths + dilemma
/// context in, synthesized resolution out. Returning None skips the conflict
/// entirely (not an empty resolution).
pub trait ResolutionStrategy: Send + Sync {
    /// Registry name, e.g. "balance".
    fn name(&self) -> &'static str;

    fn resolve(
        &self,
        conflict: &Conflict,
        first: &ReasoningPath,
        second: &ReasoningPath,
        dilemma: &Dilemma,
        registry: &FrameworkRegistry,
    ) -> Option<Resolution>;
}

/// Options for a resolution run.
#[derive(Clone, Debug, Default)]
pub struct ResolutionOptions {
    /// Strategy name; None selects the default `balance`.
    pub strategy: Option<String>,
}

/// The output of a resolution run.
#[derive(Clone, Debug, Default)]
pub struct ResolutionOutcome {
    pub resolutions: Vec<Resolution>,
}

/// Weighted priority blend for pre-sorting conflicts when granular
/// action-relevance scores are supplied.
const SEVERITY_WEIGHT: f64 = 0.5;
const RELEVANCE_WEIGHT: f64 = 0.3;
const IMPORTANCE_WEIGHT: f64 = 0.2;

pub struct ConflictResolver {
    registry: FrameworkRegistry,
    strategies: HashMap<&'static str, Arc<dyn ResolutionStrategy>>,
}

impl Default for ConflictResolver {
    fn default() -> Self {
        Self::new(FrameworkRegistry::new())
    }
}

impl ConflictResolver {
    pub fn new(registry: FrameworkRegistry) -> Self {
        let mut strategies: HashMap<&'static str, Arc<dyn ResolutionStrategy>> = HashMap::new();
        let all: Vec<Arc<dyn ResolutionStrategy>> = vec![
            Arc::new(strategies::balance::BalanceStrategy),
            Arc::new(strategies::stakeholder::StakeholderStrategy),
            Arc::new(strategies::compromise::CompromiseStrategy),
            Arc::new(strategies::pluralistic::PluralisticStrategy),
            Arc::new(strategies::fallback::FallbackStrategy),
        ];
        for strategy in all {
            strategies.insert(strategy.name(), strategy);
        }
        Self {
            registry,
            strategies,
        }
    }

    pub fn strategy_names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.strategies.keys().copied().collect();
        names.sort();
        names
    }

    /// Resolve each conflict into a synthesized resolution record.
    ///
    /// With `granular_elements` (action -> relevance), conflicts are
    /// pre-sorted by weighted priority and each resolution is annotated with
    /// its relevance tier. Missing paths and unknown frameworks skip the
    /// conflict; nothing here errors.
    pub fn resolve_conflicts(
        &self,
        paths: &[ReasoningPath],
        conflicts: &[Conflict],
        dilemma: &Dilemma,
        granular_elements: Option<&BTreeMap<String, f64>>,
        options: &ResolutionOptions,
    ) -> ResolutionOutcome {
        let requested = options.strategy.as_deref().unwrap_or("balance");
        let strategy = match self.strategies.get(requested) {
            Some(strategy) => Arc::clone(strategy),
            None => {
                warn!(strategy = requested, "unknown resolution strategy; using fallback");
                Arc::clone(&self.strategies["fallback"])
            }
        };

        let mut ordered: Vec<&Conflict> = conflicts.iter().collect();
        if let Some(relevance) = granular_elements {
            ordered.sort_by(|a, b| {
                let pa = self.priority(a, relevance);
                let pb = self.priority(b, relevance);
                pb.partial_cmp(&pa).unwrap_or(std::cmp::Ordering::Equal)
            });
        }

        let mut resolutions = Vec::new();
        for conflict in ordered {
            let Some(first) = find_path(paths, &conflict.frameworks[0]) else {
                warn!(framework = %conflict.frameworks[0], "conflict references a missing path; skipping");
                continue;
            };
            let Some(second) = find_path(paths, &conflict.frameworks[1]) else {
                warn!(framework = %conflict.frameworks[1], "conflict references a missing path; skipping");
                continue;
            };
            // Unknown frameworks are skipped regardless of strategy.
            if self.registry.resolve(&first.framework).is_unknown
                || self.registry.resolve(&second.framework).is_unknown
            {
                debug!(
                    first = %first.framework,
                    second = %second.framework,
                    "skipping conflict involving unknown framework"
                );
                continue;
            }
            match strategy.resolve(conflict, first, second, dilemma, &self.registry) {
                Some(mut resolution) => {
                    if let Some(relevance) = granular_elements {
                        annotate_relevance(&mut resolution, conflict, relevance);
                    }
                    resolutions.push(resolution);
                }
                None => {
                    debug!(
                        strategy = strategy.name(),
                        action = %conflict.action,
                        "strategy declined to resolve conflict"
                    );
                }
            }
        }
        ResolutionOutcome { resolutions }
    }

    fn priority(&self, conflict: &Conflict, relevance: &BTreeMap<String, f64>) -> f64 {
        let importance = (self.registry.importance(&conflict.frameworks[0])
            + self.registry.importance(&conflict.frameworks[1]))
            / 2.0;
        SEVERITY_WEIGHT * conflict.severity.score()
            + RELEVANCE_WEIGHT * action_relevance(&conflict.action, relevance)
            + IMPORTANCE_WEIGHT * importance
    }
}

fn find_path<'a>(paths: &'a [ReasoningPath], framework: &str) -> Option<&'a ReasoningPath> {
    paths.iter().find(|p| p.framework == framework)
}

/// Relevance of a conflict's action descriptor: the max over both sides of a
/// "a vs b" descriptor. The 0.5 default applies per unscored action only, so
/// actions scored below it still lower the result.
pub(crate) fn action_relevance(action: &str, relevance: &BTreeMap<String, f64>) -> f64 {
    action
        .split(" vs ")
        .map(|part| relevance.get(part).copied().unwrap_or(0.5))
        .reduce(f64::max)
        .unwrap_or(0.5)
}

fn annotate_relevance(
    resolution: &mut Resolution,
    conflict: &Conflict,
    relevance: &BTreeMap<String, f64>,
) {
    let score = action_relevance(&conflict.action, relevance);
    let tier = if score > 0.8 {
        "highly relevant to"
    } else if score > 0.5 {
        "moderately relevant to"
    } else {
        "less central to"
    };
    if !resolution.argument.is_empty() {
        resolution.argument.push(' ');
    }
    resolution.argument.push_str(&format!(
        "This conflict concerns an aspect {} the dilemma.",
        tier
    ));
}
