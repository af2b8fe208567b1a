//! Tests for casuist-core: parameter normalization, strength ordinal,
//! situation fallback, wire tolerance, and the framework registry.

use casuist_core::*;

// ===========================================================================
// ParamValue
// ===========================================================================

#[test]
fn param_value_from_raw_scalars() {
    assert_eq!(
        ParamValue::from_json(&serde_json::json!(5)),
        Some(ParamValue::Number(5.0))
    );
    assert_eq!(
        ParamValue::from_json(&serde_json::json!(true)),
        Some(ParamValue::Bool(true))
    );
    assert_eq!(
        ParamValue::from_json(&serde_json::json!("high")),
        Some(ParamValue::Text("high".into()))
    );
}

#[test]
fn param_value_from_wrapped_record() {
    let wrapped = serde_json::json!({"value": 10, "description": "people affected"});
    assert_eq!(
        ParamValue::from_json(&wrapped),
        Some(ParamValue::Number(10.0))
    );
    let bare_description = serde_json::json!({"description": "no value key"});
    assert_eq!(ParamValue::from_json(&bare_description), None);
}

#[test]
fn param_value_rejects_arrays_and_null() {
    assert_eq!(ParamValue::from_json(&serde_json::json!([1, 2])), None);
    assert_eq!(ParamValue::from_json(&serde_json::Value::Null), None);
}

#[test]
fn param_value_views() {
    assert_eq!(ParamValue::Text("42".into()).as_number(), Some(42.0));
    assert_eq!(ParamValue::Text("yes".into()).as_bool(), Some(true));
    assert_eq!(ParamValue::Text("No".into()).as_bool(), Some(false));
    assert_eq!(ParamValue::Text("maybe".into()).as_bool(), None);
    assert_eq!(ParamValue::Bool(true).as_number(), Some(1.0));
    assert_eq!(ParamValue::Text("  HIGH ".into()).as_text(), "high");
}

// ===========================================================================
// Situation
// ===========================================================================

#[test]
fn situation_falls_back_to_contextual_factors() {
    let situation: Situation = serde_json::from_value(serde_json::json!({
        "description": "a dilemma",
        "parameters": {"num_people_affected": {"value": 5}},
        "contextual_factors": [
            {"factor": "time_pressure", "value": "high", "relevance": 0.8}
        ]
    }))
    .unwrap();

    assert_eq!(
        situation.parameter("num_people_affected"),
        Some(ParamValue::Number(5.0))
    );
    // Absent from parameters, present in contextual factors.
    assert_eq!(
        situation.parameter("time_pressure"),
        Some(ParamValue::Text("high".into()))
    );
    assert_eq!(situation.parameter("absent_everywhere"), None);
    assert_eq!(situation.factor_relevance("time_pressure"), Some(0.8));
}

#[test]
fn situation_factor_names_deduplicated() {
    let situation: Situation = serde_json::from_value(serde_json::json!({
        "parameters": {"a": 1, "b": 2},
        "contextual_factors": [
            {"factor": "b", "value": 3},
            {"factor": "c", "value": 4}
        ]
    }))
    .unwrap();
    assert_eq!(situation.factor_names(), vec!["a", "b", "c"]);
}

#[test]
fn contextual_factor_relevance_defaults() {
    let factor: ContextualFactor =
        serde_json::from_value(serde_json::json!({"factor": "x", "value": 1})).unwrap();
    assert_eq!(factor.relevance, 0.5);
}

// ===========================================================================
// Strength
// ===========================================================================

#[test]
fn strength_ordering() {
    assert!(Strength::Weak < Strength::Moderate);
    assert!(Strength::Moderate < Strength::Strong);
    assert!(Strength::VeryWeak < Strength::VeryStrong);
}

#[test]
fn strength_steps_saturate() {
    assert_eq!(Strength::Strong.stronger(), Strength::VeryStrong);
    assert_eq!(Strength::VeryStrong.stronger(), Strength::VeryStrong);
    assert_eq!(Strength::Weak.weaker(), Strength::VeryWeak);
    assert_eq!(Strength::VeryWeak.weaker(), Strength::VeryWeak);
}

#[test]
fn strength_serializes_snake_case() {
    assert_eq!(
        serde_json::to_string(&Strength::VeryStrong).unwrap(),
        r#""very_strong""#
    );
    let back: Strength = serde_json::from_str(r#""moderate""#).unwrap();
    assert_eq!(back, Strength::Moderate);
}

#[test]
fn strength_multipliers_monotonic() {
    assert!(Strength::Weak.multiplier() < Strength::Moderate.multiplier());
    assert!(Strength::Moderate.multiplier() < Strength::Strong.multiplier());
}

// ===========================================================================
// Precedent wire tolerance
// ===========================================================================

#[test]
fn precedent_accepts_precedent_id_alias() {
    let precedent: Precedent = serde_json::from_value(serde_json::json!({
        "precedent_id": "heinz_dilemma",
        "situation": {"description": "the classic case"}
    }))
    .unwrap();
    assert_eq!(precedent.id, "heinz_dilemma");
    assert!(precedent.reasoning_paths.is_empty());
}

#[test]
fn reasoning_path_defaults() {
    let path: ReasoningPath = serde_json::from_value(serde_json::json!({
        "framework": "Utilitarianism",
        "conclusion": "steal_drug"
    }))
    .unwrap();
    assert_eq!(path.strength, Strength::Moderate);
    assert_eq!(path.argument, "");
}

// ===========================================================================
// Conflict / Resolution types
// ===========================================================================

#[test]
fn conflict_involves_both_frameworks() {
    let conflict = Conflict {
        frameworks: ["Utilitarianism".into(), "Care Ethics".into()],
        conflict_type: ConflictType::Action,
        action: "steal_drug".into(),
        severity: Severity::Medium,
        description: String::new(),
    };
    assert!(conflict.involves("Utilitarianism"));
    assert!(conflict.involves("Care Ethics"));
    assert!(!conflict.involves("Virtue Ethics"));
}

#[test]
fn severity_scores_ordered() {
    assert!(Severity::Low.score() < Severity::Medium.score());
    assert!(Severity::Medium.score() < Severity::High.score());
}

#[test]
fn conflict_type_serializes_snake_case() {
    assert_eq!(
        serde_json::to_string(&ConflictType::CrossAction).unwrap(),
        r#""cross_action""#
    );
}

// ===========================================================================
// Framework registry
// ===========================================================================

#[test]
fn framework_parse_is_alias_tolerant() {
    assert_eq!(Framework::parse("Utilitarianism"), Framework::Utilitarian);
    assert_eq!(Framework::parse("CONSEQUENTIALISM"), Framework::Utilitarian);
    assert_eq!(Framework::parse("kantian-deontology"), Framework::Deontological);
    assert_eq!(Framework::parse("Care Ethics"), Framework::CareEthics);
    assert_eq!(Framework::parse("rights_based"), Framework::RightsBased);
}

#[test]
fn framework_unknown_carries_raw_name() {
    let unknown = Framework::parse("Quantum Morality");
    assert!(unknown.is_unknown());
    assert_eq!(unknown.canonical_name(), "Quantum Morality");
}

#[test]
fn registry_get_none_for_unknown() {
    let registry = FrameworkRegistry::new();
    assert!(registry.get("Quantum Morality").is_none());
    let resolved = registry.resolve("Quantum Morality");
    assert!(resolved.is_unknown);
    assert_eq!(resolved.name, "Quantum Morality");
}

#[test]
fn registry_all_lists_known_frameworks() {
    let registry = FrameworkRegistry::new();
    assert!(registry.all().len() >= 8);
    assert!(registry
        .all()
        .iter()
        .any(|info| info.framework == Framework::Utilitarian));
}

#[test]
fn registry_importance_ranks_unknown_lowest() {
    let registry = FrameworkRegistry::new();
    assert!(registry.importance("Utilitarianism") > registry.importance("Quantum Morality"));
}
