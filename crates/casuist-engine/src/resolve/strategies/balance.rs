//! Balance strategy: state both claims, add contextual parameter analysis,
//! and issue generic oversight recommendations. The default strategy.

use super::{first_claim, preferred_action, synthetic_label};
use crate::resolve::ResolutionStrategy;
use casuist_core::{
    Conflict, Dilemma, FrameworkRegistry, ParamValue, ReasoningPath, Resolution, Strength,
};

pub struct BalanceStrategy;

impl ResolutionStrategy for BalanceStrategy {
    fn name(&self) -> &'static str {
        "balance"
    }

    fn resolve(
        &self,
        conflict: &Conflict,
        first: &ReasoningPath,
        second: &ReasoningPath,
        dilemma: &Dilemma,
        registry: &FrameworkRegistry,
    ) -> Option<Resolution> {
        // Both frameworks unresolvable means there is nothing to balance;
        // skip the conflict entirely rather than emit an empty resolution.
        if registry.get(&first.framework).is_none() && registry.get(&second.framework).is_none() {
            return None;
        }
        let name_first = registry.resolve(&first.framework).name;
        let name_second = registry.resolve(&second.framework).name;

        let mut argument = format!(
            "Balanced synthesis of {} and {} regarding '{}'.",
            name_first, name_second, conflict.action
        );
        argument.push_str(&format!(" {} holds: {}", name_first, first_claim(first)));
        argument.push_str(&format!(" {} holds: {}", name_second, first_claim(second)));

        let context = contextual_analysis(dilemma);
        if !context.is_empty() {
            argument.push_str(&format!(" Contextual analysis: {}", context));
        }
        argument.push_str(
            " Recommended oversight: review the decision with the affected parties, \
             set a checkpoint to revisit if key facts change, and document the grounds \
             for the chosen course.",
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

/// Up to three situational parameters, rendered for the argument text.
fn contextual_analysis(dilemma: &Dilemma) -> String {
    let rendered: Vec<String> = dilemma
        .situation
        .parameters
        .iter()
        .filter_map(|(name, raw)| {
            ParamValue::from_json(raw).map(|value| format!("{} is {}", name, value))
        })
        .take(3)
        .collect();
    if rendered.is_empty() {
        String::new()
    } else {
        format!("{}.", rendered.join("; "))
    }
}
