//! Individual resolution strategies.
//!
//! Each strategy is a self-contained module. To add a new strategy:
//! 1. Create a new file in this directory
//! 2. Implement the ResolutionStrategy trait
//! 3. Add `pub mod <name>;` here
//! 4. Register it in ConflictResolver::new()

pub mod balance;
pub mod compromise;
pub mod fallback;
pub mod pluralistic;
pub mod stakeholder;

use casuist_core::{FrameworkRegistry, ReasoningPath};

/// Synthetic framework label for a resolution record.
pub(crate) fn synthetic_label(
    registry: &FrameworkRegistry,
    first: &str,
    second: &str,
) -> String {
    format!(
        "Reconciled({} + {})",
        registry.resolve(first).name,
        registry.resolve(second).name
    )
}

/// The first sentence of a path's argument, as its headline claim.
pub(crate) fn first_claim(path: &ReasoningPath) -> String {
    let argument = path.argument.trim();
    if argument.is_empty() {
        return format!("(no recorded argument for '{}')", path.conclusion);
    }
    match argument.split_inclusive('.').next() {
        Some(sentence) => sentence.trim().to_string(),
        None => argument.to_string(),
    }
}

/// The action a synthesis should carry forward: the stronger path's
/// conclusion, the first path's on ties, `review_required` when both are
/// silent.
pub(crate) fn preferred_action(first: &ReasoningPath, second: &ReasoningPath) -> String {
    if first.conclusion.is_empty() && second.conclusion.is_empty() {
        return "review_required".to_string();
    }
    if first.conclusion.is_empty() {
        return second.conclusion.clone();
    }
    if second.conclusion.is_empty() {
        return first.conclusion.clone();
    }
    if second.strength > first.strength {
        second.conclusion.clone()
    } else {
        first.conclusion.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use casuist_core::Strength;

    #[test]
    fn preferred_action_follows_strength() {
        let weak = ReasoningPath::new("Utilitarianism", "act_a", Strength::Weak, "");
        let strong = ReasoningPath::new("Care Ethics", "act_b", Strength::Strong, "");
        assert_eq!(preferred_action(&weak, &strong), "act_b");
        assert_eq!(preferred_action(&strong, &weak), "act_b");

        let tie = ReasoningPath::new("Care Ethics", "act_c", Strength::Weak, "");
        assert_eq!(preferred_action(&weak, &tie), "act_a");
    }

    #[test]
    fn first_claim_takes_first_sentence() {
        let path = ReasoningPath::new(
            "Utilitarianism",
            "act",
            Strength::Moderate,
            "Welfare is maximized by acting. Further detail follows.",
        );
        assert_eq!(first_claim(&path), "Welfare is maximized by acting.");
    }
}
