//! The per-factor adaptation rules.
//!
//! Every rule follows the same template: clone first, resolve both values,
//! normalize through the factor table, bail out unchanged on absence or
//! equality, then dispatch on the parsed framework. Frameworks documented as
//! invariant to a factor still get the change recorded in their argument
//! text; only the strength stays put.

use super::factors;
use super::{append_note, direction_of, pick, AdaptationRule, Direction};
use casuist_core::{Framework, ParamValue, ReasoningPath, Situation, Strength};

/// Conclusions counted as direct action for threshold rewrites.
pub const DIRECT_ACTIONS: &[&str] = &["direct_action", "steal_drug"];

/// Explicit table of forced strength transitions for information
/// availability under utilitarian reasoning. Kept as data, not inline
/// branching, so the domain threshold stays visible in one place.
pub const FORCED_INFORMATION_TRANSITIONS: &[(&str, &str, Strength)] =
    &[("complete", "incomplete", Strength::Weak)];

const SEEK_ALTERNATIVES: &str = "seek_alternatives";
const DEFAULT_DIRECT_ACTION: &str = "direct_action";

fn both_values(
    factor: &str,
    original: &Situation,
    updated: &Situation,
) -> Option<(ParamValue, ParamValue)> {
    // Absent from either situation means the rule must not fire at all.
    Some((original.parameter(factor)?, updated.parameter(factor)?))
}

fn neutral_note(path: &mut ReasoningPath, factor: &str, old: &str, new: &str) {
    append_note(
        &mut path.argument,
        &format!(
            "Context shift noted: '{}' changed from {} to {}; no framework-specific adjustment applies.",
            factor, old, new
        ),
    );
}

fn is_direct_action(conclusion: &str) -> bool {
    DIRECT_ACTIONS.contains(&conclusion)
}

// ---------------------------------------------------------------------------
// num_people_affected
// ---------------------------------------------------------------------------

/// Population scale. Aggregative frameworks respond; duty-based reasoning is
/// documented as numerically invariant.
pub struct NumPeopleAffected;

impl AdaptationRule for NumPeopleAffected {
    fn factor(&self) -> &'static str {
        "num_people_affected"
    }

    fn apply(
        &self,
        path: &ReasoningPath,
        original: &Situation,
        updated: &Situation,
    ) -> ReasoningPath {
        let mut copy = path.clone();
        let Some((old, new)) = both_values(self.factor(), original, updated) else {
            return copy;
        };
        let (Some(old_n), Some(new_n)) = (old.as_number(), new.as_number()) else {
            return copy;
        };
        let Some(direction) = direction_of(old_n, new_n) else {
            return copy;
        };

        match Framework::parse(&copy.framework) {
            Framework::Utilitarian => {
                let note = match direction {
                    Direction::Increased => pick(
                        &[
                            "The number of people affected has increased from {old} to {new}, strengthening the utilitarian case: more aggregate welfare is now at stake.",
                            "With the affected population increased from {old} to {new}, the welfare calculus weighs more heavily in favor of this conclusion; more people stand to gain.",
                        ],
                        "Utilitarianism:num_people_affected:increased",
                    ),
                    Direction::Decreased => pick(
                        &[
                            "The number of people affected has decreased from {old} to {new}, weakening the utilitarian case: less aggregate welfare rides on the outcome.",
                            "With the affected population decreased from {old} to {new}, fewer people are implicated and the welfare argument carries less force.",
                        ],
                        "Utilitarianism:num_people_affected:decreased",
                    ),
                };
                let note = note
                    .replace("{old}", &format!("{}", old_n))
                    .replace("{new}", &format!("{}", new_n));
                append_note(&mut copy.argument, &note);
                copy.strength = match direction {
                    Direction::Increased => copy.strength.stronger(),
                    Direction::Decreased => copy.strength.weaker(),
                };
            }
            Framework::Deontological => {
                // Documented invariant: duties bind regardless of scale.
                append_note(
                    &mut copy.argument,
                    &format!(
                        "The change in the number of people affected (from {} to {}) does not directly impact the duty-based analysis; obligations bind regardless of how many are involved.",
                        old_n, new_n
                    ),
                );
            }
            Framework::CareEthics => {
                append_note(
                    &mut copy.argument,
                    &format!(
                        "The number of people affected moved from {} to {}; care ethics attends to each concrete relationship rather than the aggregate count.",
                        old_n, new_n
                    ),
                );
            }
            Framework::RightsBased => {
                append_note(
                    &mut copy.argument,
                    &format!(
                        "The affected population changed from {} to {}; rights operate as side-constraints and are not summed across persons.",
                        old_n, new_n
                    ),
                );
            }
            Framework::VirtueEthics
            | Framework::SocialContract
            | Framework::NaturalLaw
            | Framework::Professional => {
                append_note(
                    &mut copy.argument,
                    &format!(
                        "The number of people affected changed from {} to {}; the framework's assessment of character and principle is unchanged in kind, though the scope widens.",
                        old_n, new_n
                    ),
                );
            }
            Framework::Hybrid(_) | Framework::Unknown(_) => {
                neutral_note(&mut copy, self.factor(), &old.as_text(), &new.as_text());
            }
        }
        copy
    }
}

// ---------------------------------------------------------------------------
// certainty_of_outcome
// ---------------------------------------------------------------------------

/// How certain the predicted outcome is. Consequence-sensitive reasoning
/// moves with it; duty-based reasoning records the change only.
pub struct CertaintyOfOutcome;

impl AdaptationRule for CertaintyOfOutcome {
    fn factor(&self) -> &'static str {
        "certainty_of_outcome"
    }

    fn apply(
        &self,
        path: &ReasoningPath,
        original: &Situation,
        updated: &Situation,
    ) -> ReasoningPath {
        let mut copy = path.clone();
        let Some((old, new)) = both_values(self.factor(), original, updated) else {
            return copy;
        };
        let (Some(old_n), Some(new_n)) = (
            factors::certainty_level(&old),
            factors::certainty_level(&new),
        ) else {
            return copy;
        };
        let Some(direction) = direction_of(old_n, new_n) else {
            return copy;
        };

        match Framework::parse(&copy.framework) {
            Framework::Utilitarian => {
                match direction {
                    Direction::Increased => {
                        append_note(
                            &mut copy.argument,
                            "The predicted outcome has become more certain, so the expected-welfare estimate is more reliable and the conclusion rests on firmer ground.",
                        );
                        copy.strength = copy.strength.stronger();
                    }
                    Direction::Decreased => {
                        append_note(
                            &mut copy.argument,
                            "The predicted outcome has become less certain; the expected-welfare estimate is correspondingly less reliable.",
                        );
                        copy.strength = copy.strength.weaker();
                    }
                }
            }
            Framework::Deontological => {
                // Documented invariant: rightness does not hinge on outcome odds.
                append_note(
                    &mut copy.argument,
                    "The shift in outcome certainty does not directly impact the duty-based analysis; the rightness of the act is not a function of its odds.",
                );
            }
            Framework::VirtueEthics
            | Framework::CareEthics
            | Framework::RightsBased
            | Framework::SocialContract
            | Framework::NaturalLaw
            | Framework::Professional => {
                let wording = match direction {
                    Direction::Increased => "more certain",
                    Direction::Decreased => "less certain",
                };
                append_note(
                    &mut copy.argument,
                    &format!(
                        "The outcome is now {}; this bears on prudence in execution rather than on the framework's core judgment.",
                        wording
                    ),
                );
            }
            Framework::Hybrid(_) | Framework::Unknown(_) => {
                neutral_note(&mut copy, self.factor(), &old.as_text(), &new.as_text());
            }
        }
        copy
    }
}

// ---------------------------------------------------------------------------
// information_availability
// ---------------------------------------------------------------------------

/// How much of the situation is actually known. Carries the one forced
/// transition (complete -> incomplete collapses utilitarian confidence).
pub struct InformationAvailability;

impl AdaptationRule for InformationAvailability {
    fn factor(&self) -> &'static str {
        "information_availability"
    }

    fn apply(
        &self,
        path: &ReasoningPath,
        original: &Situation,
        updated: &Situation,
    ) -> ReasoningPath {
        let mut copy = path.clone();
        let Some((old, new)) = both_values(self.factor(), original, updated) else {
            return copy;
        };
        let (Some((old_n, old_label)), Some((new_n, new_label))) = (
            factors::information_level(&old),
            factors::information_level(&new),
        ) else {
            return copy;
        };
        let Some(direction) = direction_of(old_n, new_n) else {
            return copy;
        };

        match Framework::parse(&copy.framework) {
            Framework::Utilitarian => {
                // Forced transitions take precedence over the ordinal step.
                if let (Some(old_label), Some(new_label)) = (old_label, new_label) {
                    if let Some((_, _, forced)) = FORCED_INFORMATION_TRANSITIONS
                        .iter()
                        .find(|(from, to, _)| *from == old_label && *to == new_label)
                    {
                        append_note(
                            &mut copy.argument,
                            "Information about the situation has collapsed from complete to incomplete; the welfare calculus can no longer be trusted, and confidence in this conclusion drops sharply.",
                        );
                        copy.strength = *forced;
                        return copy;
                    }
                }
                match direction {
                    Direction::Increased => {
                        append_note(
                            &mut copy.argument,
                            "More information about the situation is now available, improving the reliability of the welfare comparison.",
                        );
                        copy.strength = copy.strength.stronger();
                    }
                    Direction::Decreased => {
                        append_note(
                            &mut copy.argument,
                            "Less information about the situation is available, reducing the reliability of the welfare comparison.",
                        );
                        copy.strength = copy.strength.weaker();
                    }
                }
            }
            Framework::Deontological => {
                match direction {
                    Direction::Increased => {
                        append_note(
                            &mut copy.argument,
                            "Fuller information is available; the duty to act on an informed maxim can now be discharged with more confidence.",
                        );
                        copy.strength = copy.strength.stronger();
                    }
                    Direction::Decreased => {
                        append_note(
                            &mut copy.argument,
                            "Information has degraded; acting on an ill-informed maxim is itself a deontological concern.",
                        );
                        copy.strength = copy.strength.weaker();
                    }
                }
            }
            Framework::VirtueEthics
            | Framework::CareEthics
            | Framework::RightsBased
            | Framework::SocialContract
            | Framework::NaturalLaw
            | Framework::Professional => {
                let wording = match direction {
                    Direction::Increased => "improved",
                    Direction::Decreased => "deteriorated",
                };
                append_note(
                    &mut copy.argument,
                    &format!(
                        "The availability of information has {}; due diligence before acting matters accordingly.",
                        wording
                    ),
                );
            }
            Framework::Hybrid(_) | Framework::Unknown(_) => {
                neutral_note(&mut copy, self.factor(), &old.as_text(), &new.as_text());
            }
        }
        copy
    }
}

// ---------------------------------------------------------------------------
// life_at_stake
// ---------------------------------------------------------------------------

/// Life-versus-property stakes. A flip to life-at-stake strengthens every
/// known framework's case; the reverse weakens it.
pub struct LifeAtStake;

impl AdaptationRule for LifeAtStake {
    fn factor(&self) -> &'static str {
        "life_at_stake"
    }

    fn apply(
        &self,
        path: &ReasoningPath,
        original: &Situation,
        updated: &Situation,
    ) -> ReasoningPath {
        let mut copy = path.clone();
        let Some((old, new)) = both_values(self.factor(), original, updated) else {
            return copy;
        };
        let (Some(old_b), Some(new_b)) =
            (factors::life_at_stake(&old), factors::life_at_stake(&new))
        else {
            return copy;
        };
        if old_b == new_b {
            return copy;
        }

        let framework = Framework::parse(&copy.framework);
        if matches!(framework, Framework::Hybrid(_) | Framework::Unknown(_)) {
            neutral_note(&mut copy, self.factor(), &old.as_text(), &new.as_text());
            return copy;
        }

        if new_b {
            let note = match framework {
                Framework::Utilitarian => "A life is now at stake rather than property alone; the welfare differential between acting and not acting has grown enormously.",
                Framework::Deontological => "A life is now at stake; the duty to preserve life outranks duties concerning property.",
                Framework::CareEthics => "A life is now at stake; the caring response to a person in mortal need takes precedence over material considerations.",
                Framework::RightsBased => "A life is now at stake; the right to life dominates property rights in any ordering of claims.",
                _ => "A life is now at stake rather than property alone, which raises the moral stakes across the board.",
            };
            append_note(&mut copy.argument, note);
            copy.strength = copy.strength.stronger();
        } else {
            append_note(
                &mut copy.argument,
                "The stakes have shifted from life to property; the urgency that justified the strongest response has receded.",
            );
            copy.strength = copy.strength.weaker();
        }
        copy
    }
}

// ---------------------------------------------------------------------------
// property_value
// ---------------------------------------------------------------------------

/// Monetary value of the property at stake. Counts against direct action as
/// it rises; duty-based reasoning is documented as invariant to it.
pub struct PropertyValue;

impl AdaptationRule for PropertyValue {
    fn factor(&self) -> &'static str {
        "property_value"
    }

    fn apply(
        &self,
        path: &ReasoningPath,
        original: &Situation,
        updated: &Situation,
    ) -> ReasoningPath {
        let mut copy = path.clone();
        let Some((old, new)) = both_values(self.factor(), original, updated) else {
            return copy;
        };
        let (Some(old_n), Some(new_n)) = (old.as_number(), new.as_number()) else {
            return copy;
        };
        let Some(direction) = direction_of(old_n, new_n) else {
            return copy;
        };

        match Framework::parse(&copy.framework) {
            Framework::Utilitarian => match direction {
                Direction::Increased => {
                    append_note(
                        &mut copy.argument,
                        &format!(
                            "The property at stake is now valued higher ({} rather than {}); the cost side of the welfare ledger has grown.",
                            new_n, old_n
                        ),
                    );
                    copy.strength = copy.strength.weaker();
                }
                Direction::Decreased => {
                    append_note(
                        &mut copy.argument,
                        &format!(
                            "The property at stake is now valued lower ({} rather than {}); the cost side of the welfare ledger has shrunk.",
                            new_n, old_n
                        ),
                    );
                    copy.strength = copy.strength.stronger();
                }
            },
            Framework::Deontological => {
                // Documented invariant: the wrongness of taking is not priced.
                append_note(
                    &mut copy.argument,
                    &format!(
                        "The change in property value (from {} to {}) does not directly impact the duty-based analysis; the permissibility of taking is not a function of price.",
                        old_n, new_n
                    ),
                );
            }
            Framework::RightsBased => {
                append_note(
                    &mut copy.argument,
                    &format!(
                        "The property's value moved from {} to {}; the owner's right is the same right at any price, though remedies may scale.",
                        old_n, new_n
                    ),
                );
            }
            Framework::VirtueEthics
            | Framework::CareEthics
            | Framework::SocialContract
            | Framework::NaturalLaw
            | Framework::Professional => {
                append_note(
                    &mut copy.argument,
                    &format!(
                        "The value of the property at stake changed from {} to {}; this colors proportionality but not the framework's core judgment.",
                        old_n, new_n
                    ),
                );
            }
            Framework::Hybrid(_) | Framework::Unknown(_) => {
                neutral_note(&mut copy, self.factor(), &old.as_text(), &new.as_text());
            }
        }
        copy
    }
}

// ---------------------------------------------------------------------------
// medical_triage_context
// ---------------------------------------------------------------------------

/// Whether the dilemma sits inside a medical triage setting.
pub struct MedicalTriageContext;

impl AdaptationRule for MedicalTriageContext {
    fn factor(&self) -> &'static str {
        "medical_triage_context"
    }

    fn apply(
        &self,
        path: &ReasoningPath,
        original: &Situation,
        updated: &Situation,
    ) -> ReasoningPath {
        let mut copy = path.clone();
        let Some((old, new)) = both_values(self.factor(), original, updated) else {
            return copy;
        };
        let (Some(old_b), Some(new_b)) = (old.as_bool(), new.as_bool()) else {
            return copy;
        };
        if old_b == new_b {
            return copy;
        }

        match Framework::parse(&copy.framework) {
            Framework::Utilitarian => {
                if new_b {
                    append_note(
                        &mut copy.argument,
                        "The situation is now a medical triage context, where maximizing lives saved is the accepted and institutionally sanctioned norm.",
                    );
                    copy.strength = copy.strength.stronger();
                } else {
                    append_note(
                        &mut copy.argument,
                        "The situation is no longer a medical triage context; the special sanction for maximizing across patients falls away.",
                    );
                    copy.strength = copy.strength.weaker();
                }
            }
            Framework::Professional => {
                if new_b {
                    append_note(
                        &mut copy.argument,
                        "A medical triage context activates specific professional duties and protocols that support this conclusion.",
                    );
                    copy.strength = copy.strength.stronger();
                } else {
                    append_note(
                        &mut copy.argument,
                        "Outside a medical triage context, the specific professional protocols supporting this conclusion no longer apply.",
                    );
                    copy.strength = copy.strength.weaker();
                }
            }
            Framework::Deontological
            | Framework::VirtueEthics
            | Framework::CareEthics
            | Framework::RightsBased
            | Framework::SocialContract
            | Framework::NaturalLaw => {
                let wording = if new_b { "now" } else { "no longer" };
                append_note(
                    &mut copy.argument,
                    &format!(
                        "The dilemma is {} situated in a medical triage context; institutional framing shifts, but the framework's own analysis stands.",
                        wording
                    ),
                );
            }
            Framework::Hybrid(_) | Framework::Unknown(_) => {
                neutral_note(&mut copy, self.factor(), &old.as_text(), &new.as_text());
            }
        }
        copy
    }
}

// ---------------------------------------------------------------------------
// time_pressure
// ---------------------------------------------------------------------------

/// Urgency ordinal. Rising pressure strengthens welfare- and care-driven
/// cases for acting now; duty-based reasoning records it only.
pub struct TimePressure;

impl AdaptationRule for TimePressure {
    fn factor(&self) -> &'static str {
        "time_pressure"
    }

    fn apply(
        &self,
        path: &ReasoningPath,
        original: &Situation,
        updated: &Situation,
    ) -> ReasoningPath {
        let mut copy = path.clone();
        let Some((old, new)) = both_values(self.factor(), original, updated) else {
            return copy;
        };
        let (Some(old_n), Some(new_n)) = (
            factors::time_pressure_level(&old),
            factors::time_pressure_level(&new),
        ) else {
            return copy;
        };
        let Some(direction) = direction_of(old_n as f64, new_n as f64) else {
            return copy;
        };

        match Framework::parse(&copy.framework) {
            Framework::Utilitarian => match direction {
                Direction::Increased => {
                    append_note(
                        &mut copy.argument,
                        "Time pressure has risen; delay now carries a welfare cost of its own, which counts in favor of acting.",
                    );
                    copy.strength = copy.strength.stronger();
                }
                Direction::Decreased => {
                    append_note(
                        &mut copy.argument,
                        "Time pressure has eased; there is room to gather options before acting, which weakens the case for immediate action.",
                    );
                    copy.strength = copy.strength.weaker();
                }
            },
            Framework::CareEthics => match direction {
                Direction::Increased => {
                    append_note(
                        &mut copy.argument,
                        "The person in need cannot wait as long as before; responsiveness to urgent need is central to care.",
                    );
                    copy.strength = copy.strength.stronger();
                }
                Direction::Decreased => {
                    append_note(
                        &mut copy.argument,
                        "The urgency of the need has lessened; a more deliberate caring response is available.",
                    );
                    copy.strength = copy.strength.weaker();
                }
            },
            Framework::Deontological => {
                append_note(
                    &mut copy.argument,
                    "Time pressure has shifted; duties do not expire with the clock, though haste increases the risk of violating one inadvertently.",
                );
            }
            Framework::VirtueEthics
            | Framework::RightsBased
            | Framework::SocialContract
            | Framework::NaturalLaw
            | Framework::Professional => {
                let wording = match direction {
                    Direction::Increased => "risen",
                    Direction::Decreased => "eased",
                };
                append_note(
                    &mut copy.argument,
                    &format!(
                        "Time pressure has {}; practical judgment about when to act shifts, while the underlying assessment stands.",
                        wording
                    ),
                );
            }
            Framework::Hybrid(_) | Framework::Unknown(_) => {
                neutral_note(&mut copy, self.factor(), &old.as_text(), &new.as_text());
            }
        }
        copy
    }
}

// ---------------------------------------------------------------------------
// resource_divisibility
// ---------------------------------------------------------------------------

/// Whether the contested resource can be split. Indivisibility removes the
/// sharing compromise and sharpens the welfare case for decisive allocation.
pub struct ResourceDivisibility;

impl AdaptationRule for ResourceDivisibility {
    fn factor(&self) -> &'static str {
        "resource_divisibility"
    }

    fn apply(
        &self,
        path: &ReasoningPath,
        original: &Situation,
        updated: &Situation,
    ) -> ReasoningPath {
        let mut copy = path.clone();
        let Some((old, new)) = both_values(self.factor(), original, updated) else {
            return copy;
        };
        let (Some(old_b), Some(new_b)) =
            (factors::divisibility(&old), factors::divisibility(&new))
        else {
            return copy;
        };
        if old_b == new_b {
            return copy;
        }

        match Framework::parse(&copy.framework) {
            Framework::Utilitarian => {
                if !new_b {
                    append_note(
                        &mut copy.argument,
                        "The resource is now indivisible: allocation is all-or-nothing, and a decisive choice maximizes welfare better than an unavailable compromise.",
                    );
                    copy.strength = copy.strength.stronger();
                } else {
                    append_note(
                        &mut copy.argument,
                        "The resource is now divisible; a shared allocation becomes possible and weakens the case for an exclusive award.",
                    );
                    copy.strength = copy.strength.weaker();
                }
            }
            Framework::Deontological
            | Framework::VirtueEthics
            | Framework::CareEthics
            | Framework::RightsBased
            | Framework::SocialContract
            | Framework::NaturalLaw
            | Framework::Professional => {
                let wording = if new_b { "divisible" } else { "indivisible" };
                append_note(
                    &mut copy.argument,
                    &format!(
                        "The contested resource is now {}; the set of actions that can honor everyone's claims changes shape accordingly.",
                        wording
                    ),
                );
            }
            Framework::Hybrid(_) | Framework::Unknown(_) => {
                neutral_note(&mut copy, self.factor(), &old.as_text(), &new.as_text());
            }
        }
        copy
    }
}

// ---------------------------------------------------------------------------
// alternatives_exhausted
// ---------------------------------------------------------------------------

/// Whether alternative courses of action remain. Crossing this threshold
/// rewrites conclusions: direct action is only defensible as a last resort.
pub struct AlternativesExhausted;

impl AdaptationRule for AlternativesExhausted {
    fn factor(&self) -> &'static str {
        "alternatives_exhausted"
    }

    fn apply(
        &self,
        path: &ReasoningPath,
        original: &Situation,
        updated: &Situation,
    ) -> ReasoningPath {
        let mut copy = path.clone();
        let Some((old, new)) = both_values(self.factor(), original, updated) else {
            return copy;
        };
        let (Some(old_b), Some(new_b)) = (
            factors::alternatives_exhausted(&old),
            factors::alternatives_exhausted(&new),
        ) else {
            return copy;
        };
        if old_b == new_b {
            return copy;
        }

        let framework = Framework::parse(&copy.framework);
        if matches!(framework, Framework::Hybrid(_) | Framework::Unknown(_)) {
            neutral_note(&mut copy, self.factor(), &old.as_text(), &new.as_text());
            return copy;
        }

        if new_b {
            // available -> exhausted: direct action becomes a true last resort.
            if copy.conclusion == SEEK_ALTERNATIVES {
                append_note(
                    &mut copy.argument,
                    "All alternatives have now been exhausted; continuing to seek them is no longer a live option, and direct action stands as the remaining course.",
                );
                copy.conclusion = DEFAULT_DIRECT_ACTION.to_string();
                copy.strength = copy.strength.stronger();
            } else {
                append_note(
                    &mut copy.argument,
                    "All alternatives have now been exhausted, which strengthens the last-resort justification for this conclusion.",
                );
                copy.strength = copy.strength.stronger();
            }
        } else {
            // exhausted -> available: direct action loses its last-resort license.
            if is_direct_action(&copy.conclusion) {
                append_note(
                    &mut copy.argument,
                    "Alternatives are available again; direct action loses its last-resort justification and the untried options must be pursued first.",
                );
                copy.conclusion = SEEK_ALTERNATIVES.to_string();
                copy.strength = Strength::Weak;
            } else {
                append_note(
                    &mut copy.argument,
                    "Alternatives are available again; the necessity premise behind this conclusion is weaker than before.",
                );
                copy.strength = copy.strength.weaker();
            }
        }
        copy
    }
}

// ---------------------------------------------------------------------------
// relationship_to_beneficiary
// ---------------------------------------------------------------------------

/// Closeness of the relationship between agent and beneficiary. Central to
/// care ethics; impartial frameworks record it without moving.
pub struct RelationshipToBeneficiary;

impl AdaptationRule for RelationshipToBeneficiary {
    fn factor(&self) -> &'static str {
        "relationship_to_beneficiary"
    }

    fn apply(
        &self,
        path: &ReasoningPath,
        original: &Situation,
        updated: &Situation,
    ) -> ReasoningPath {
        let mut copy = path.clone();
        let Some((old, new)) = both_values(self.factor(), original, updated) else {
            return copy;
        };
        let (Some(old_tier), Some(new_tier)) = (
            factors::relationship_tier(&old),
            factors::relationship_tier(&new),
        ) else {
            return copy;
        };
        if old_tier == new_tier {
            return copy;
        }
        let old_word = old.as_text();
        let new_word = new.as_text();
        let closer = new_tier > old_tier;

        match Framework::parse(&copy.framework) {
            Framework::CareEthics => {
                if closer {
                    append_note(
                        &mut copy.argument,
                        &format!(
                            "The relationship to the beneficiary has shifted from {} to {}; care ethics gives decisive weight to close relationships of dependence and responsibility.",
                            old_word, new_word
                        ),
                    );
                    copy.strength = copy.strength.stronger();
                    // Crossing from stranger into close kinship rewrites a
                    // hedged conclusion into direct action.
                    if old_tier == 0
                        && new_tier >= factors::CLOSE_KINSHIP_TIER
                        && copy.conclusion == SEEK_ALTERNATIVES
                    {
                        append_note(
                            &mut copy.argument,
                            "For one's own closest kin, deferring to further search is no longer a caring response; acting directly is.",
                        );
                        copy.conclusion = DEFAULT_DIRECT_ACTION.to_string();
                    }
                } else {
                    append_note(
                        &mut copy.argument,
                        &format!(
                            "The relationship to the beneficiary has shifted from {} to {}; with the bond attenuated, the demands of care are correspondingly weaker.",
                            old_word, new_word
                        ),
                    );
                    copy.strength = copy.strength.weaker();
                    if old_tier >= factors::CLOSE_KINSHIP_TIER
                        && new_tier == 0
                        && is_direct_action(&copy.conclusion)
                    {
                        append_note(
                            &mut copy.argument,
                            "Toward a stranger, the partiality that licensed direct action no longer applies; alternatives should be sought instead.",
                        );
                        copy.conclusion = SEEK_ALTERNATIVES.to_string();
                    }
                }
            }
            Framework::VirtueEthics => {
                if closer {
                    append_note(
                        &mut copy.argument,
                        &format!(
                            "The beneficiary is now {} rather than {}; loyalty and fidelity to one's own are virtues that bear directly here.",
                            new_word, old_word
                        ),
                    );
                    copy.strength = copy.strength.stronger();
                } else {
                    append_note(
                        &mut copy.argument,
                        &format!(
                            "The beneficiary is now {} rather than {}; the special claims of loyalty recede.",
                            new_word, old_word
                        ),
                    );
                    copy.strength = copy.strength.weaker();
                }
            }
            Framework::Utilitarian => {
                append_note(
                    &mut copy.argument,
                    &format!(
                        "The relationship to the beneficiary changed from {} to {}; impartial aggregation does not directly weigh kinship, though proximity may affect outcome estimates.",
                        old_word, new_word
                    ),
                );
            }
            Framework::Deontological => {
                append_note(
                    &mut copy.argument,
                    &format!(
                        "The relationship to the beneficiary changed from {} to {}; Kantian duties bind impartially, and the change is recorded without altering the duty analysis.",
                        old_word, new_word
                    ),
                );
            }
            Framework::RightsBased
            | Framework::SocialContract
            | Framework::NaturalLaw
            | Framework::Professional => {
                append_note(
                    &mut copy.argument,
                    &format!(
                        "The relationship to the beneficiary changed from {} to {}; claims and obligations here attach to persons as such, not to kinship.",
                        old_word, new_word
                    ),
                );
            }
            Framework::Hybrid(_) | Framework::Unknown(_) => {
                neutral_note(&mut copy, self.factor(), &old_word, &new_word);
            }
        }
        copy
    }
}
