//! Conflict detection between adapted reasoning paths.
//!
//! Scans every unordered pair of paths from distinct frameworks and
//! classifies the disagreement. Classification precedence per pair: action
//! (or cross-action) > priority > value. Detection is symmetric: swapping the
//! input order swaps the frameworks in the descriptor and changes nothing
//! else.

use casuist_core::{Conflict, ConflictType, FrameworkRegistry, ReasoningPath, Severity};
use std::collections::BTreeMap;
use tracing::debug;

/// Antonym pairs used for opposed-claim detection in argument text.
const ANTONYM_PAIRS: &[(&str, &str)] = &[
    ("harm", "benefit"),
    ("forbidden", "required"),
    ("impermissible", "permissible"),
    ("wrong", "right"),
    ("autonomy", "paternalism"),
    ("individual", "collective"),
    ("justice", "mercy"),
];

/// Default centrality when no relevance score is supplied for an action.
const DEFAULT_RELEVANCE: f64 = 0.5;

/// Pairwise conflict detector over adapted reasoning paths.
pub struct ConflictDetector {
    registry: FrameworkRegistry,
    relevance: BTreeMap<String, f64>,
}

impl Default for ConflictDetector {
    fn default() -> Self {
        Self::new(FrameworkRegistry::new())
    }
}

impl ConflictDetector {
    pub fn new(registry: FrameworkRegistry) -> Self {
        Self {
            registry,
            relevance: BTreeMap::new(),
        }
    }

    /// Supply externally computed action-relevance scores used for severity.
    pub fn with_relevance(mut self, relevance: BTreeMap<String, f64>) -> Self {
        self.relevance = relevance;
        self
    }

    /// Detect conflicts across every unordered pair of paths from distinct
    /// frameworks. Empty or single-path input yields no conflicts.
    pub fn detect_conflicts(&self, paths: &[ReasoningPath]) -> Vec<Conflict> {
        let mut conflicts = Vec::new();
        for i in 0..paths.len() {
            for j in (i + 1)..paths.len() {
                if let Some(conflict) = self.classify_pair(&paths[i], &paths[j]) {
                    conflicts.push(conflict);
                }
            }
        }
        debug!(paths = paths.len(), conflicts = conflicts.len(), "conflict scan complete");
        conflicts
    }

    fn classify_pair(&self, a: &ReasoningPath, b: &ReasoningPath) -> Option<Conflict> {
        let info_a = self.registry.resolve(&a.framework);
        let info_b = self.registry.resolve(&b.framework);
        // Same framework (by canonical identity) never conflicts with itself.
        if info_a.framework == info_b.framework {
            return None;
        }

        let conflict_type = if !a.conclusion.is_empty()
            && !b.conclusion.is_empty()
            && a.conclusion != b.conclusion
        {
            // Cross-action: the arguments do not even mention each other's
            // proposed action; the frameworks are arguing past one another.
            let engaged = argument_mentions(&a.argument, &b.conclusion)
                || argument_mentions(&b.argument, &a.conclusion);
            if engaged {
                ConflictType::Action
            } else {
                ConflictType::CrossAction
            }
        } else if a.conclusion == b.conclusion
            && !a.conclusion.is_empty()
            && (info_a.priority - info_b.priority).abs() > f64::EPSILON
        {
            ConflictType::Priority
        } else if opposed_claims(&a.argument, &b.argument) {
            ConflictType::Value
        } else {
            return None;
        };

        let action = contested_action(a, b);
        let severity = self.severity(&action, &a.framework, &b.framework);
        // Sorted names keep the description identical under input swap.
        let mut names = [info_a.name.clone(), info_b.name.clone()];
        names.sort();
        let description = format!(
            "{} conflict between {} and {} over '{}'",
            conflict_type, names[0], names[1], action
        );

        Some(Conflict {
            frameworks: [a.framework.clone(), b.framework.clone()],
            conflict_type,
            action,
            severity,
            description,
        })
    }

    fn severity(&self, action: &str, framework_a: &str, framework_b: &str) -> Severity {
        // The default applies per unscored action, not as a floor: a caller
        // scoring every side low must be able to drive severity down.
        let relevance = action
            .split(" vs ")
            .map(|part| {
                self.relevance
                    .get(part)
                    .copied()
                    .unwrap_or(DEFAULT_RELEVANCE)
            })
            .reduce(f64::max)
            .unwrap_or(DEFAULT_RELEVANCE);
        let importance = (self.registry.importance(framework_a)
            + self.registry.importance(framework_b))
            / 2.0;
        let score = 0.6 * relevance + 0.4 * importance;
        if score >= 0.75 {
            Severity::High
        } else if score >= 0.45 {
            Severity::Medium
        } else {
            Severity::Low
        }
    }
}

/// The action descriptor for a conflict. For differing conclusions the two
/// actions are joined in lexicographic order so detection stays symmetric.
fn contested_action(a: &ReasoningPath, b: &ReasoningPath) -> String {
    if a.conclusion == b.conclusion {
        a.conclusion.clone()
    } else if a.conclusion.is_empty() {
        b.conclusion.clone()
    } else if b.conclusion.is_empty() {
        a.conclusion.clone()
    } else {
        let (first, second) = if a.conclusion <= b.conclusion {
            (&a.conclusion, &b.conclusion)
        } else {
            (&b.conclusion, &a.conclusion)
        };
        format!("{} vs {}", first, second)
    }
}

fn argument_mentions(argument: &str, action: &str) -> bool {
    if action.is_empty() {
        return false;
    }
    let spaced = action.replace('_', " ");
    let lower = argument.to_lowercase();
    lower.contains(&action.to_lowercase()) || lower.contains(&spaced.to_lowercase())
}

/// Opposed-claim detection: antonym pairs split across the two arguments,
/// plus negation awareness (one side asserting what the other negates).
fn opposed_claims(first: &str, second: &str) -> bool {
    let a = first.to_lowercase();
    let b = second.to_lowercase();
    if a.is_empty() || b.is_empty() {
        return false;
    }
    for (x, y) in ANTONYM_PAIRS {
        if (a.contains(x) && b.contains(y)) || (a.contains(y) && b.contains(x)) {
            return true;
        }
    }
    // Negation-aware check over significant shared terms.
    for word in a.split_whitespace() {
        let word = word.trim_matches(|c: char| !c.is_alphanumeric());
        if word.len() > 4 && a.contains(&format!("not {}", word)) && b.contains(word)
            && !b.contains(&format!("not {}", word))
        {
            return true;
        }
    }
    for word in b.split_whitespace() {
        let word = word.trim_matches(|c: char| !c.is_alphanumeric());
        if word.len() > 4 && b.contains(&format!("not {}", word)) && a.contains(word)
            && !a.contains(&format!("not {}", word))
        {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use casuist_core::Strength;

    fn path(framework: &str, conclusion: &str, argument: &str) -> ReasoningPath {
        ReasoningPath::new(framework, conclusion, Strength::Moderate, argument)
    }

    #[test]
    fn same_framework_never_conflicts() {
        let detector = ConflictDetector::default();
        let paths = vec![
            path("Utilitarianism", "act", "argument one"),
            path("utilitarian", "other_act", "argument two"),
        ];
        assert!(detector.detect_conflicts(&paths).is_empty());
    }

    #[test]
    fn opposed_claims_via_antonyms() {
        assert!(opposed_claims(
            "this action causes grave harm to the patient",
            "this action is of great benefit to the patient"
        ));
        assert!(!opposed_claims("save the patient", "save the patient"));
    }

    #[test]
    fn opposed_claims_via_negation() {
        assert!(opposed_claims(
            "we should not deceive the committee",
            "we must deceive the committee to protect the patient"
        ));
    }

    #[test]
    fn contested_action_is_order_independent() {
        let a = path("Utilitarianism", "install_filters", "");
        let b = path("Rights-Based Ethics", "relocate_residents", "");
        assert_eq!(contested_action(&a, &b), contested_action(&b, &a));
    }
}
