//! Core types for Casuist
//!
//! Precedents are read-only once loaded: adaptation always works on deep
//! copies (`ReasoningPath` is `Clone` and owns all of its data). Conflicts and
//! resolutions are created per request and discarded afterwards.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Canonical scalar form of a situational parameter.
///
/// Wire values arrive either as a raw scalar or wrapped in an object
/// (`{"value": ..., "description": ...}`). Every consumer resolves through
/// [`ParamValue::from_json`]; nothing downstream touches the raw shape.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Number(f64),
    Bool(bool),
    Text(String),
}

impl ParamValue {
    /// The single normalization point for parameter values.
    ///
    /// Unwraps `{value, description?}` records (recursively, in case the
    /// wrapped value is itself wrapped) and maps JSON scalars to the canonical
    /// form. Arrays, nulls, and objects without a `value` key resolve to None.
    pub fn from_json(raw: &serde_json::Value) -> Option<ParamValue> {
        match raw {
            serde_json::Value::Number(n) => n.as_f64().map(ParamValue::Number),
            serde_json::Value::Bool(b) => Some(ParamValue::Bool(*b)),
            serde_json::Value::String(s) => Some(ParamValue::Text(s.clone())),
            serde_json::Value::Object(map) => map.get("value").and_then(ParamValue::from_json),
            _ => None,
        }
    }

    /// Numeric view. Text values that parse as a number are accepted.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            ParamValue::Number(n) => Some(*n),
            ParamValue::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            ParamValue::Text(s) => s.trim().parse::<f64>().ok(),
        }
    }

    /// Boolean view. Accepts common textual spellings.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ParamValue::Bool(b) => Some(*b),
            ParamValue::Number(n) => Some(*n != 0.0),
            ParamValue::Text(s) => match s.trim().to_lowercase().as_str() {
                "true" | "yes" | "y" => Some(true),
                "false" | "no" | "n" => Some(false),
                _ => None,
            },
        }
    }

    /// Lowercased, trimmed textual view (numbers and bools formatted).
    pub fn as_text(&self) -> String {
        match self {
            ParamValue::Number(n) => format!("{}", n),
            ParamValue::Bool(b) => format!("{}", b),
            ParamValue::Text(s) => s.trim().to_lowercase(),
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Number(n) => write!(f, "{}", n),
            ParamValue::Bool(b) => write!(f, "{}", b),
            ParamValue::Text(s) => write!(f, "{}", s),
        }
    }
}

/// A relevance-annotated situational attribute, used as a fallback source
/// when a named parameter is absent from the parameters map.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ContextualFactor {
    pub factor: String,
    pub value: serde_json::Value,
    #[serde(default = "default_relevance")]
    pub relevance: f64,
}

fn default_relevance() -> f64 {
    0.5
}

/// A dilemma situation: free-text description plus named parameters and an
/// ordered list of contextual factors.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Situation {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub parameters: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    pub contextual_factors: Vec<ContextualFactor>,
}

impl Situation {
    /// Resolve a named factor: the parameters map takes precedence, the
    /// contextual-factors list is the fallback, absence from both is None.
    pub fn parameter(&self, name: &str) -> Option<ParamValue> {
        if let Some(raw) = self.parameters.get(name) {
            if let Some(value) = ParamValue::from_json(raw) {
                return Some(value);
            }
        }
        self.contextual_factors
            .iter()
            .find(|f| f.factor == name)
            .and_then(|f| ParamValue::from_json(&f.value))
    }

    /// Relevance of a contextual factor, if it is listed.
    pub fn factor_relevance(&self, name: &str) -> Option<f64> {
        self.contextual_factors
            .iter()
            .find(|f| f.factor == name)
            .map(|f| f.relevance)
    }

    /// All factor names visible in this situation (parameters and contextual
    /// factors combined, deduplicated).
    pub fn factor_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.parameters.keys().map(|k| k.as_str()).collect();
        for f in &self.contextual_factors {
            if !names.contains(&f.factor.as_str()) {
                names.push(f.factor.as_str());
            }
        }
        names
    }

    /// True when the situation carries no usable signal at all.
    pub fn is_empty(&self) -> bool {
        self.description.trim().is_empty()
            && self.parameters.is_empty()
            && self.contextual_factors.is_empty()
    }
}

/// Ordinal confidence label for a reasoning path.
///
/// `weak < moderate < strong` is the primary working range; the extremes
/// saturate rather than wrap.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Strength {
    VeryWeak,
    Weak,
    #[default]
    Moderate,
    Strong,
    VeryStrong,
}

impl Strength {
    /// One step up the ordinal scale, saturating at very_strong.
    pub fn stronger(self) -> Self {
        match self {
            Strength::VeryWeak => Strength::Weak,
            Strength::Weak => Strength::Moderate,
            Strength::Moderate => Strength::Strong,
            Strength::Strong | Strength::VeryStrong => Strength::VeryStrong,
        }
    }

    /// One step down the ordinal scale, saturating at very_weak.
    pub fn weaker(self) -> Self {
        match self {
            Strength::VeryStrong => Strength::Strong,
            Strength::Strong => Strength::Moderate,
            Strength::Moderate => Strength::Weak,
            Strength::Weak | Strength::VeryWeak => Strength::VeryWeak,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Strength::VeryWeak => "very_weak",
            Strength::Weak => "weak",
            Strength::Moderate => "moderate",
            Strength::Strong => "strong",
            Strength::VeryStrong => "very_strong",
        }
    }

    /// Weighting multiplier used when combining positions in compromise
    /// synthesis.
    pub fn multiplier(self) -> f64 {
        match self {
            Strength::VeryWeak => 0.6,
            Strength::Weak => 0.8,
            Strength::Moderate => 1.0,
            Strength::Strong => 1.2,
            Strength::VeryStrong => 1.4,
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One framework's recorded position on a dilemma: an action conclusion, a
/// confidence label, and the supporting argument text.
///
/// Strength and conclusion are only ever changed by an adaptation rule or a
/// resolution strategy, never silently.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ReasoningPath {
    pub framework: String,
    pub conclusion: String,
    #[serde(default)]
    pub strength: Strength,
    #[serde(default)]
    pub argument: String,
}

impl ReasoningPath {
    pub fn new(
        framework: impl Into<String>,
        conclusion: impl Into<String>,
        strength: Strength,
        argument: impl Into<String>,
    ) -> Self {
        Self {
            framework: framework.into(),
            conclusion: conclusion.into(),
            strength,
            argument: argument.into(),
        }
    }
}

/// A previously resolved dilemma with recorded per-framework reasoning.
///
/// Owned by the store and read-only downstream; every adaptation operates on
/// deep copies of the reasoning paths.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Precedent {
    #[serde(alias = "precedent_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub situation: Situation,
    #[serde(default)]
    pub reasoning_paths: Vec<ReasoningPath>,
}

/// Context for conflict resolution: the dilemma being analyzed.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Dilemma {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub situation: Situation,
    #[serde(default)]
    pub stakeholders: Vec<String>,
}

/// Classification of a disagreement between two frameworks' reasoning paths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictType {
    /// Different action conclusions on the same decision axis.
    Action,
    /// Same conclusion, but the frameworks' documented priorities differ.
    Priority,
    /// Semantically opposed claims in the argument text.
    Value,
    /// Different conclusions where the arguments do not even engage each
    /// other's proposed action.
    CrossAction,
}

impl fmt::Display for ConflictType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConflictType::Action => write!(f, "action"),
            ConflictType::Priority => write!(f, "priority"),
            ConflictType::Value => write!(f, "value"),
            ConflictType::CrossAction => write!(f, "cross_action"),
        }
    }
}

/// Ordinal severity of a detected conflict.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    /// Numeric weight used in resolution-priority scoring.
    pub fn score(self) -> f64 {
        match self {
            Severity::Low => 0.3,
            Severity::Medium => 0.6,
            Severity::High => 0.9,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Low => write!(f, "low"),
            Severity::Medium => write!(f, "medium"),
            Severity::High => write!(f, "high"),
        }
    }
}

/// A detected disagreement between two frameworks. Created by the conflict
/// detector, consumed by the resolver, and discarded after resolution.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Conflict {
    pub frameworks: [String; 2],
    pub conflict_type: ConflictType,
    pub action: String,
    pub severity: Severity,
    #[serde(default)]
    pub description: String,
}

impl Conflict {
    /// True when `name` is one of the two conflicting frameworks.
    pub fn involves(&self, name: &str) -> bool {
        self.frameworks[0] == name || self.frameworks[1] == name
    }
}

/// A synthesized reconciliation of one conflict. Created fresh per conflict
/// and never mutated afterwards.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Resolution {
    /// Synthetic label, e.g. `Reconciled(Utilitarianism + Care Ethics)`.
    pub framework: String,
    pub action: String,
    pub strength: Strength,
    pub argument: String,
    pub original_frameworks: Vec<String>,
    pub conflict_type: ConflictType,
    pub resolution_strategy: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strength_saturates_at_both_ends() {
        assert_eq!(Strength::VeryStrong.stronger(), Strength::VeryStrong);
        assert_eq!(Strength::VeryWeak.weaker(), Strength::VeryWeak);
        assert_eq!(Strength::Moderate.stronger(), Strength::Strong);
        assert_eq!(Strength::Moderate.weaker(), Strength::Weak);
    }

    #[test]
    fn param_value_unwraps_wrapped_records() {
        let raw = serde_json::json!({"value": 5, "description": "people affected"});
        assert_eq!(ParamValue::from_json(&raw), Some(ParamValue::Number(5.0)));

        let nested = serde_json::json!({"value": {"value": "complete"}});
        assert_eq!(
            ParamValue::from_json(&nested),
            Some(ParamValue::Text("complete".into()))
        );
    }

    #[test]
    fn situation_parameter_precedence() {
        let mut situation = Situation::default();
        situation
            .parameters
            .insert("time_pressure".into(), serde_json::json!("high"));
        situation.contextual_factors.push(ContextualFactor {
            factor: "time_pressure".into(),
            value: serde_json::json!("low"),
            relevance: 0.9,
        });
        // Parameters win over contextual factors for the same name.
        assert_eq!(
            situation.parameter("time_pressure"),
            Some(ParamValue::Text("high".into()))
        );
    }
}
