//! Stakeholder strategy: build an impact table and emphasize protection of
//! the least-powerful, most-impacted stakeholders.

use super::{preferred_action, synthetic_label};
use crate::resolve::ResolutionStrategy;
use casuist_core::{
    Conflict, Dilemma, FrameworkRegistry, ReasoningPath, Resolution, Severity, Strength,
};

pub struct StakeholderStrategy;

impl ResolutionStrategy for StakeholderStrategy {
    fn name(&self) -> &'static str {
        "stakeholder"
    }

    fn resolve(
        &self,
        conflict: &Conflict,
        first: &ReasoningPath,
        second: &ReasoningPath,
        dilemma: &Dilemma,
        registry: &FrameworkRegistry,
    ) -> Option<Resolution> {
        let stakeholders = infer_stakeholders(dilemma);
        let action = preferred_action(first, second);

        let impact = match conflict.severity {
            Severity::High => "severe",
            Severity::Medium => "substantial",
            Severity::Low => "limited",
        };
        let table: Vec<String> = stakeholders
            .iter()
            .map(|s| format!("- {}: {} impact if '{}' proceeds", s, impact, action))
            .collect();
        let protected = least_powerful(&stakeholders);

        let argument = format!(
            "Stakeholder analysis of the disagreement between {} and {} over '{}'. \
             Impact assessment: {} Priority is given to protecting {}, the least \
             powerful and most affected stakeholder; whichever course is taken must \
             include concrete safeguards for them.",
            registry.resolve(&first.framework).name,
            registry.resolve(&second.framework).name,
            conflict.action,
            table.join(" "),
            protected
        );

        Some(Resolution {
            framework: synthetic_label(registry, &first.framework, &second.framework),
            action,
            strength: Strength::Moderate,
            argument,
            original_frameworks: vec![first.framework.clone(), second.framework.clone()],
            conflict_type: conflict.conflict_type,
            resolution_strategy: self.name().to_string(),
        })
    }
}

/// Stakeholders from the dilemma when supplied, otherwise inferred from
/// title/description keywords.
fn infer_stakeholders(dilemma: &Dilemma) -> Vec<String> {
    if !dilemma.stakeholders.is_empty() {
        return dilemma.stakeholders.clone();
    }
    let text = format!("{} {}", dilemma.title, dilemma.description).to_lowercase();
    if text.contains("medical") || text.contains("patient") || text.contains("triage") {
        vec![
            "patients".to_string(),
            "medical staff".to_string(),
            "patient families".to_string(),
        ]
    } else if text.contains("pollution") || text.contains("environment") || text.contains("factory")
    {
        vec![
            "local residents".to_string(),
            "plant workers".to_string(),
            "future generations".to_string(),
        ]
    } else if text.contains("drug") || text.contains("theft") || text.contains("steal") {
        vec![
            "the patient".to_string(),
            "the pharmacist".to_string(),
            "the wider community".to_string(),
        ]
    } else {
        vec![
            "directly affected parties".to_string(),
            "the wider community".to_string(),
        ]
    }
}

/// Pick the stakeholder with the least standing to protect themselves:
/// future generations, patients, and residents before anyone else.
fn least_powerful(stakeholders: &[String]) -> String {
    for marker in ["future", "patient", "resident"] {
        if let Some(found) = stakeholders.iter().find(|s| s.to_lowercase().contains(marker)) {
            return found.clone();
        }
    }
    stakeholders
        .last()
        .cloned()
        .unwrap_or_else(|| "the most affected party".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infers_medical_stakeholders_from_title() {
        let dilemma = Dilemma {
            title: "Medical triage under scarcity".into(),
            ..Default::default()
        };
        let stakeholders = infer_stakeholders(&dilemma);
        assert!(stakeholders.iter().any(|s| s.contains("patients")));
    }

    #[test]
    fn supplied_stakeholders_win() {
        let dilemma = Dilemma {
            title: "Medical triage".into(),
            stakeholders: vec!["the board".into()],
            ..Default::default()
        };
        assert_eq!(infer_stakeholders(&dilemma), vec!["the board".to_string()]);
    }

    #[test]
    fn least_powerful_prefers_future_generations() {
        let stakeholders = vec![
            "plant workers".to_string(),
            "future generations".to_string(),
        ];
        assert_eq!(least_powerful(&stakeholders), "future generations");
    }
}
