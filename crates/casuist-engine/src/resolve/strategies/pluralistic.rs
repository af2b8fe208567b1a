//! Pluralistic strategy: present both perspectives side-by-side with
//! reflective questions, explicitly declining to pick a winner.

use super::{first_claim, synthetic_label};
use crate::resolve::ResolutionStrategy;
use casuist_core::{
    Conflict, Dilemma, Framework, FrameworkRegistry, ReasoningPath, Resolution, Strength,
};

pub struct PluralisticStrategy;

impl ResolutionStrategy for PluralisticStrategy {
    fn name(&self) -> &'static str {
        "pluralistic"
    }

    fn resolve(
        &self,
        conflict: &Conflict,
        first: &ReasoningPath,
        second: &ReasoningPath,
        _dilemma: &Dilemma,
        registry: &FrameworkRegistry,
    ) -> Option<Resolution> {
        let name_first = registry.resolve(&first.framework).name;
        let name_second = registry.resolve(&second.framework).name;

        let argument = format!(
            "Both perspectives on '{}' are presented without adjudication. \
             {}: {} Reflective question: {} \
             {}: {} Reflective question: {} \
             No winner is declared; the confidence of this synthesis is variable \
             by design and rests with the reader's own weighting of the frameworks.",
            conflict.action,
            name_first,
            first_claim(first),
            reflective_question(&Framework::parse(&first.framework)),
            name_second,
            first_claim(second),
            reflective_question(&Framework::parse(&second.framework)),
        );

        Some(Resolution {
            framework: synthetic_label(registry, &first.framework, &second.framework),
            action: "deliberate_further".to_string(),
            strength: Strength::Moderate,
            argument,
            original_frameworks: vec![first.framework.clone(), second.framework.clone()],
            conflict_type: conflict.conflict_type,
            resolution_strategy: self.name().to_string(),
        })
    }
}

fn reflective_question(framework: &Framework) -> &'static str {
    match framework {
        Framework::Utilitarian => "Whose welfare is not yet counted in this calculus?",
        Framework::Deontological => {
            "Which duties would remain binding even if the outcome improved?"
        }
        Framework::VirtueEthics => "What would a person of practical wisdom do here, and why?",
        Framework::CareEthics => "Which relationships of dependence does this decision touch?",
        Framework::RightsBased => {
            "Whose rights function as constraints that no benefit can override?"
        }
        Framework::SocialContract => "Could every affected party accept this rule in advance?",
        Framework::NaturalLaw => "Does the proposed course attack a basic good directly?",
        Framework::Professional => "What does the governing code of practice require here?",
        Framework::Hybrid(_) | Framework::Unknown(_) => {
            "What considerations does this framework weigh that the other omits?"
        }
    }
}
