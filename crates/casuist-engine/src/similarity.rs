//! Similarity-ranked precedent retrieval.
//!
//! Similarity is a hand-tuned scoring function over fixed keys, not an
//! embedding model: a weighted blend of description token overlap and
//! structural overlap of the parameter/contextual-factor sets.

use casuist_core::{ParamValue, Precedent, Situation};
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::debug;

/// Default minimum similarity for a precedent to be considered relevant.
pub const DEFAULT_THRESHOLD: f64 = 0.3;

/// Blend weights for the two similarity components. Weights are normalized
/// to sum to 1 before scoring, so results always stay in `[0, 1]`.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct SimilarityWeights {
    pub description: f64,
    pub structure: f64,
}

impl Default for SimilarityWeights {
    fn default() -> Self {
        Self {
            description: 0.5,
            structure: 0.5,
        }
    }
}

impl SimilarityWeights {
    fn normalized(self) -> (f64, f64) {
        let total = self.description.max(0.0) + self.structure.max(0.0);
        if total <= f64::EPSILON {
            (0.5, 0.5)
        } else {
            (self.description.max(0.0) / total, self.structure.max(0.0) / total)
        }
    }
}

/// A precedent with its similarity score against the query situation.
#[derive(Clone, Debug, Serialize)]
pub struct RankedPrecedent<'a> {
    pub precedent: &'a Precedent,
    pub similarity: f64,
}

/// Score a new situation against every precedent and return the relevant
/// ones, sorted descending by similarity. The sort is stable: precedents
/// with equal scores keep their database order.
///
/// An empty situation or empty database yields an empty result, not an error.
pub fn find_relevant_precedents<'a>(
    situation: &Situation,
    precedents: &'a [Precedent],
    threshold: Option<f64>,
    weights: SimilarityWeights,
) -> Vec<RankedPrecedent<'a>> {
    if situation.is_empty() || precedents.is_empty() {
        return Vec::new();
    }
    let threshold = threshold.unwrap_or(DEFAULT_THRESHOLD);
    let (description_weight, structure_weight) = weights.normalized();

    let mut ranked: Vec<RankedPrecedent<'a>> = precedents
        .iter()
        .map(|precedent| {
            let description = description_overlap(&situation.description, &precedent.situation);
            let structure = structural_overlap(situation, &precedent.situation);
            let similarity = description_weight * description + structure_weight * structure;
            RankedPrecedent {
                precedent,
                similarity,
            }
        })
        .filter(|r| r.similarity >= threshold)
        .collect();

    // sort_by is stable, so equal scores preserve database order.
    ranked.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    debug!(
        candidates = precedents.len(),
        relevant = ranked.len(),
        threshold,
        "ranked precedents"
    );
    ranked
}

/// Jaccard overlap of significant description tokens.
fn description_overlap(description: &str, other: &Situation) -> f64 {
    let a = tokens(description);
    let b = tokens(&other.description);
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let shared = a.intersection(&b).count() as f64;
    let union = a.union(&b).count() as f64;
    shared / union
}

fn tokens(text: &str) -> BTreeSet<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .map(|w| w.to_lowercase())
        .filter(|w| w.len() > 2)
        .collect()
}

/// Structural overlap: Jaccard of the factor-name sets, blended with the
/// fraction of shared factors whose normalized values agree.
fn structural_overlap(a: &Situation, b: &Situation) -> f64 {
    let names_a: BTreeSet<&str> = a.factor_names().into_iter().collect();
    let names_b: BTreeSet<&str> = b.factor_names().into_iter().collect();
    if names_a.is_empty() || names_b.is_empty() {
        return 0.0;
    }
    let shared: Vec<&&str> = names_a.intersection(&names_b).collect();
    let union = names_a.union(&names_b).count() as f64;
    let key_overlap = shared.len() as f64 / union;

    if shared.is_empty() {
        return 0.0;
    }
    let agreeing = shared
        .iter()
        .filter(|name| values_agree(a.parameter(name), b.parameter(name)))
        .count() as f64;
    let value_agreement = agreeing / shared.len() as f64;

    0.6 * key_overlap + 0.4 * value_agreement
}

fn values_agree(a: Option<ParamValue>, b: Option<ParamValue>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => match (a.as_number(), b.as_number()) {
            (Some(x), Some(y)) => (x - y).abs() < f64::EPSILON,
            _ => a.as_text() == b.as_text(),
        },
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn precedent(id: &str, description: &str) -> Precedent {
        Precedent {
            id: id.into(),
            title: id.into(),
            situation: Situation {
                description: description.into(),
                ..Default::default()
            },
            reasoning_paths: Vec::new(),
        }
    }

    #[test]
    fn empty_inputs_yield_empty_result() {
        let situation = Situation::default();
        assert!(find_relevant_precedents(
            &situation,
            &[precedent("p1", "a dilemma about medicine")],
            None,
            SimilarityWeights::default()
        )
        .is_empty());

        let situation = Situation {
            description: "a dilemma about medicine".into(),
            ..Default::default()
        };
        assert!(
            find_relevant_precedents(&situation, &[], None, SimilarityWeights::default())
                .is_empty()
        );
    }

    #[test]
    fn identical_description_scores_above_unrelated() {
        let situation = Situation {
            description: "stealing an overpriced drug to save a dying spouse".into(),
            ..Default::default()
        };
        let db = vec![
            precedent("unrelated", "rerouting a runaway trolley toward one worker"),
            precedent("match", "stealing an overpriced drug to save a dying spouse"),
        ];
        let ranked = find_relevant_precedents(&situation, &db, Some(0.0), SimilarityWeights::default());
        assert_eq!(ranked[0].precedent.id, "match");
        assert!(ranked[0].similarity > ranked[1].similarity);
    }

    #[test]
    fn weights_are_normalized() {
        let situation = Situation {
            description: "sharing scarce medicine among patients".into(),
            ..Default::default()
        };
        let db = vec![precedent("p", "sharing scarce medicine among patients")];
        let skewed = SimilarityWeights {
            description: 10.0,
            structure: 0.0,
        };
        let ranked = find_relevant_precedents(&situation, &db, Some(0.0), skewed);
        assert!(ranked[0].similarity <= 1.0);
        assert!(ranked[0].similarity > 0.99);
    }
}
