//! Fallback strategy: minimal balanced recommendation built from whatever
//! principle fragments the argument text yields. Used when the requested
//! strategy name is unknown.

use super::{preferred_action, synthetic_label};
use crate::resolve::ResolutionStrategy;
use casuist_core::{Conflict, Dilemma, FrameworkRegistry, ReasoningPath, Resolution, Strength};

/// Keywords that mark a sentence as carrying a principle or value claim.
const PRINCIPLE_MARKERS: &[&str] = &[
    "duty", "right", "welfare", "care", "harm", "benefit", "virtue", "justice", "fair",
];

pub struct FallbackStrategy;

impl ResolutionStrategy for FallbackStrategy {
    fn name(&self) -> &'static str {
        "fallback"
    }

    fn resolve(
        &self,
        conflict: &Conflict,
        first: &ReasoningPath,
        second: &ReasoningPath,
        _dilemma: &Dilemma,
        registry: &FrameworkRegistry,
    ) -> Option<Resolution> {
        let mut fragments = principle_fragments(&first.argument);
        fragments.extend(principle_fragments(&second.argument));
        fragments.truncate(2);

        let mut argument = format!(
            "Fallback synthesis for the disagreement over '{}': insufficient basis \
             for a fuller reconciliation.",
            conflict.action
        );
        if !fragments.is_empty() {
            argument.push_str(&format!(" Principles in play: {}", fragments.join(" ")));
        }
        argument.push_str(
            " A balanced course is recommended: act on the better-supported conclusion \
             while preserving the other framework's core concern as a constraint.",
        );

        Some(Resolution {
            framework: synthetic_label(registry, &first.framework, &second.framework),
            action: preferred_action(first, second),
            strength: Strength::Moderate,
            argument,
            original_frameworks: vec![first.framework.clone(), second.framework.clone()],
            conflict_type: conflict.conflict_type,
            resolution_strategy: self.name().to_string(),
        })
    }
}

/// Sentences from an argument that mention a principle keyword.
fn principle_fragments(argument: &str) -> Vec<String> {
    argument
        .split_inclusive('.')
        .map(str::trim)
        .filter(|sentence| {
            let lower = sentence.to_lowercase();
            PRINCIPLE_MARKERS.iter().any(|marker| lower.contains(marker))
        })
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragments_filtered_by_markers() {
        let fragments = principle_fragments(
            "The weather was fine. The duty to rescue applies here. Lunch was eaten.",
        );
        assert_eq!(fragments, vec!["The duty to rescue applies here.".to_string()]);
    }
}
