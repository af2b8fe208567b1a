//! Rule-dispatch adaptation engine.
//!
//! Each situational factor has one independent [`AdaptationRule`]. A rule
//! deep-copies the incoming path, resolves the factor's old and new values
//! through the shared normalization tables, and only then mutates the copy's
//! conclusion, strength, or argument. The full battery runs in a fixed order
//! over every reasoning path of the precedent.
//!
//! Hard contracts every rule honors:
//! - every exit path returns the copy, never the original;
//! - a factor absent from either situation is a no-op;
//! - equal normalized values leave the argument byte-identical (idempotence);
//! - argument edits are append-only.

pub mod factors;
pub mod rules;

use casuist_core::{FrameworkRegistry, Precedent, ReasoningPath, Situation};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use tracing::debug;

/// A pure per-factor adaptation rule.
pub trait AdaptationRule: Send + Sync {
    /// The situational parameter this rule watches.
    fn factor(&self) -> &'static str;

    /// Adapt one reasoning path to the factor's change between situations.
    /// Must return a copy; must not touch the input.
    fn apply(
        &self,
        path: &ReasoningPath,
        original: &Situation,
        updated: &Situation,
    ) -> ReasoningPath;
}

/// Direction of a normalized factor change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Increased,
    Decreased,
}

pub(crate) fn direction_of(old: f64, new: f64) -> Option<Direction> {
    if (old - new).abs() < f64::EPSILON {
        None
    } else if new > old {
        Some(Direction::Increased)
    } else {
        Some(Direction::Decreased)
    }
}

/// Append-only argument merge: trims trailing whitespace, joins with a single
/// space, never deletes prior content.
pub(crate) fn append_note(argument: &mut String, note: &str) {
    let note = note.trim();
    if note.is_empty() {
        return;
    }
    while argument.ends_with(char::is_whitespace) {
        argument.pop();
    }
    if !argument.is_empty() {
        argument.push(' ');
    }
    argument.push_str(note);
}

/// Deterministic phrasing choice: the same (framework, factor, direction)
/// seed always selects the same variant, so adapted text is reproducible.
pub(crate) fn pick<'a>(options: &[&'a str], seed: &str) -> &'a str {
    let mut hasher = DefaultHasher::new();
    seed.hash(&mut hasher);
    options[(hasher.finish() as usize) % options.len()]
}

/// The fixed-order rule battery.
pub fn default_rule_battery() -> Vec<Box<dyn AdaptationRule>> {
    vec![
        Box::new(rules::NumPeopleAffected),
        Box::new(rules::CertaintyOfOutcome),
        Box::new(rules::InformationAvailability),
        Box::new(rules::LifeAtStake),
        Box::new(rules::PropertyValue),
        Box::new(rules::MedicalTriageContext),
        Box::new(rules::TimePressure),
        Box::new(rules::ResourceDivisibility),
        Box::new(rules::AlternativesExhausted),
        Box::new(rules::RelationshipToBeneficiary),
    ]
}

/// Applies the rule battery to every reasoning path in a precedent.
pub struct AdaptationEngine {
    registry: FrameworkRegistry,
    rules: Vec<Box<dyn AdaptationRule>>,
}

impl Default for AdaptationEngine {
    fn default() -> Self {
        Self::new(FrameworkRegistry::new())
    }
}

impl AdaptationEngine {
    pub fn new(registry: FrameworkRegistry) -> Self {
        Self {
            registry,
            rules: default_rule_battery(),
        }
    }

    pub fn registry(&self) -> &FrameworkRegistry {
        &self.registry
    }

    /// Factor names in battery order.
    pub fn rule_factors(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.factor()).collect()
    }

    /// Adapt every reasoning path of `precedent` to `new_situation`.
    ///
    /// Fail-soft contract: a missing precedent yields an empty vec; a missing
    /// situation yields unchanged deep copies. `skip_argument_adaptation`
    /// bypasses all mutation and returns deep copies unchanged. The source
    /// precedent is never touched.
    pub fn adapt_reasoning_paths(
        &self,
        precedent: Option<&Precedent>,
        new_situation: Option<&Situation>,
        skip_argument_adaptation: bool,
    ) -> Vec<ReasoningPath> {
        let Some(precedent) = precedent else {
            debug!("adaptation requested without a precedent; returning empty set");
            return Vec::new();
        };
        let Some(new_situation) = new_situation else {
            debug!(
                precedent = %precedent.id,
                "adaptation requested without a new situation; returning unchanged copies"
            );
            return precedent.reasoning_paths.clone();
        };
        if skip_argument_adaptation {
            return precedent.reasoning_paths.clone();
        }
        precedent
            .reasoning_paths
            .iter()
            .map(|path| self.adapt_path(path, &precedent.situation, new_situation))
            .collect()
    }

    /// Run the full battery over one path.
    pub fn adapt_path(
        &self,
        path: &ReasoningPath,
        original: &Situation,
        updated: &Situation,
    ) -> ReasoningPath {
        let mut adapted = path.clone();
        for rule in &self.rules {
            let next = rule.apply(&adapted, original, updated);
            if next.strength != adapted.strength || next.conclusion != adapted.conclusion {
                debug!(
                    factor = rule.factor(),
                    framework = %adapted.framework,
                    old_strength = %adapted.strength,
                    new_strength = %next.strength,
                    "adaptation rule fired"
                );
            }
            adapted = next;
        }
        adapted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_note_is_append_only() {
        let mut argument = String::from("Original claim.  ");
        append_note(&mut argument, "New observation.");
        assert_eq!(argument, "Original claim. New observation.");
        assert!(argument.starts_with("Original claim."));

        let mut empty = String::new();
        append_note(&mut empty, "Standalone.");
        assert_eq!(empty, "Standalone.");
    }

    #[test]
    fn pick_is_deterministic() {
        let options = ["a", "b", "c"];
        let first = pick(&options, "Utilitarianism:num_people_affected:increased");
        let second = pick(&options, "Utilitarianism:num_people_affected:increased");
        assert_eq!(first, second);
    }

    #[test]
    fn battery_order_is_fixed() {
        let engine = AdaptationEngine::default();
        assert_eq!(
            engine.rule_factors(),
            vec![
                "num_people_affected",
                "certainty_of_outcome",
                "information_availability",
                "life_at_stake",
                "property_value",
                "medical_triage_context",
                "time_pressure",
                "resource_divisibility",
                "alternatives_exhausted",
                "relationship_to_beneficiary",
            ]
        );
    }
}
