//! Compromise strategy: derive compromise points from framework-type and
//! dilemma-domain keywords, weighting the combined position by each path's
//! declared strength.

use super::{preferred_action, synthetic_label};
use crate::resolve::ResolutionStrategy;
use casuist_core::{
    Conflict, Dilemma, Framework, FrameworkRegistry, ReasoningPath, Resolution, Strength,
};

pub struct CompromiseStrategy;

impl ResolutionStrategy for CompromiseStrategy {
    fn name(&self) -> &'static str {
        "compromise"
    }

    fn resolve(
        &self,
        conflict: &Conflict,
        first: &ReasoningPath,
        second: &ReasoningPath,
        dilemma: &Dilemma,
        registry: &FrameworkRegistry,
    ) -> Option<Resolution> {
        let mut points: Vec<&'static str> = Vec::new();
        for path in [first, second] {
            if let Some(point) = framework_point(&Framework::parse(&path.framework)) {
                if !points.contains(&point) {
                    points.push(point);
                }
            }
        }
        points.extend(domain_points(dilemma));
        if points.is_empty() {
            return None;
        }

        let weight_first = first.strength.multiplier();
        let weight_second = second.strength.multiplier();
        let name_first = registry.resolve(&first.framework).name;
        let name_second = registry.resolve(&second.framework).name;
        let lead = if weight_second > weight_first {
            &name_second
        } else {
            &name_first
        };

        let argument = format!(
            "Compromise between {} and {} over '{}'. Compromise points: {}. \
             Weighted positions: {} ({:.1}) proposes '{}'; {} ({:.1}) proposes '{}'. \
             The combined position leans toward {}, with the other framework's \
             constraints honored as conditions on execution.",
            name_first,
            name_second,
            conflict.action,
            points.join("; "),
            name_first,
            weight_first,
            first.conclusion,
            name_second,
            weight_second,
            second.conclusion,
            lead
        );

        let average = (weight_first + weight_second) / 2.0;
        let strength = if average >= 1.2 {
            Strength::Strong
        } else if average <= 0.8 {
            Strength::Weak
        } else {
            Strength::Moderate
        };

        Some(Resolution {
            framework: synthetic_label(registry, &first.framework, &second.framework),
            action: preferred_action(first, second),
            strength,
            argument,
            original_frameworks: vec![first.framework.clone(), second.framework.clone()],
            conflict_type: conflict.conflict_type,
            resolution_strategy: self.name().to_string(),
        })
    }
}

/// What each framework type contributes to a compromise.
fn framework_point(framework: &Framework) -> Option<&'static str> {
    match framework {
        Framework::RightsBased => {
            Some("define inviolable rights constraints that any course must respect")
        }
        Framework::Utilitarian => {
            Some("quantify the expected benefits and harms of each available course")
        }
        Framework::VirtueEthics => {
            Some("ask what a person of practical wisdom would do in this position")
        }
        Framework::CareEthics => {
            Some("attend to the concrete needs of those in relationships of dependence")
        }
        Framework::SocialContract => {
            Some("test each course against principles all parties could accept in advance")
        }
        Framework::Professional => {
            Some("apply the governing professional code and its escalation channels")
        }
        Framework::NaturalLaw => Some("respect basic goods that may not be directly attacked"),
        Framework::Deontological => {
            Some("rule out courses that treat any person merely as a means")
        }
        Framework::Hybrid(_) | Framework::Unknown(_) => None,
    }
}

/// Dilemma-domain keywords add domain-specific compromise machinery.
fn domain_points(dilemma: &Dilemma) -> Vec<&'static str> {
    let text = format!("{} {}", dilemma.title, dilemma.description).to_lowercase();
    let mut points = Vec::new();
    if text.contains("medical") || text.contains("patient") || text.contains("clinical") {
        points.push("institute clinical review of the decision");
    }
    if text.contains("technology") || text.contains("data") || text.contains("software") {
        points.push("add audit and transparency mechanisms around the decision");
    }
    if text.contains("resource") || text.contains("alloc") || text.contains("scarce") {
        points.push("seek divisible or time-shared allocations before exclusive awards");
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_points_from_description() {
        let dilemma = Dilemma {
            description: "allocating a scarce medical resource".into(),
            ..Default::default()
        };
        let points = domain_points(&dilemma);
        assert_eq!(points.len(), 2);
    }

    #[test]
    fn unknown_frameworks_contribute_no_point() {
        assert!(framework_point(&Framework::Unknown("Mystery".into())).is_none());
        assert!(framework_point(&Framework::Utilitarian).is_some());
    }
}
