//! Factor value normalization tables.
//!
//! Each situational factor has one fixed lookup that maps the canonical
//! [`ParamValue`] into the representation its rule compares on. Every rule
//! normalizes both the old and the new value through the same table before
//! deciding anything; unparseable values make the rule a no-op.

use casuist_core::ParamValue;

/// Information availability levels. Note that "incomplete" (0.2) sits below
/// "limited" - the label describes epistemic quality, not just quantity.
pub const INFORMATION_LEVELS: &[(&str, f64)] = &[
    ("complete", 1.0),
    ("substantial", 0.75),
    ("partial", 0.5),
    ("limited", 0.25),
    ("incomplete", 0.2),
    ("minimal", 0.1),
];

/// Normalize information availability to `(score, canonical label)`.
/// Numeric inputs are clamped to `[0, 1]` and carry no label.
pub fn information_level(value: &ParamValue) -> Option<(f64, Option<&'static str>)> {
    if let ParamValue::Text(_) = value {
        let text = value.as_text();
        return INFORMATION_LEVELS
            .iter()
            .find(|(label, _)| *label == text)
            .map(|(label, score)| (*score, Some(*label)));
    }
    value.as_number().map(|n| (n.clamp(0.0, 1.0), None))
}

/// Outcome certainty: numeric `[0, 1]` or a level word.
pub fn certainty_level(value: &ParamValue) -> Option<f64> {
    if let ParamValue::Text(_) = value {
        let score = match value.as_text().as_str() {
            "certain" => 1.0,
            "high" => 0.8,
            "probable" | "likely" => 0.7,
            "moderate" => 0.5,
            "low" | "unlikely" => 0.3,
            "uncertain" => 0.2,
            "unknown" => 0.1,
            _ => return None,
        };
        return Some(score);
    }
    value.as_number().map(|n| n.clamp(0.0, 1.0))
}

/// Time pressure ordinal: none 0, low 1, moderate 2, high 3, extreme 4.
pub fn time_pressure_level(value: &ParamValue) -> Option<i64> {
    if let ParamValue::Text(_) = value {
        let level = match value.as_text().as_str() {
            "none" => 0,
            "low" => 1,
            "moderate" | "medium" => 2,
            "high" => 3,
            "extreme" | "critical" => 4,
            _ => return None,
        };
        return Some(level);
    }
    value.as_number().map(|n| (n.round() as i64).clamp(0, 4))
}

/// Relationship closeness tiers. `stranger` is the floor; `child` and
/// `spouse` form the close kinship tier that triggers conclusion rewrites.
pub fn relationship_tier(value: &ParamValue) -> Option<i64> {
    let tier = match value.as_text().as_str() {
        "stranger" | "none" => 0,
        "acquaintance" | "colleague" | "neighbor" => 1,
        "friend" | "close friend" => 2,
        "family" | "relative" | "sibling" | "parent" => 3,
        "child" | "spouse" | "partner" => 4,
        _ => return None,
    };
    Some(tier)
}

/// The close-kinship threshold for the relationship rule.
pub const CLOSE_KINSHIP_TIER: i64 = 4;

/// Resource divisibility: true when the contested resource can be split.
pub fn divisibility(value: &ParamValue) -> Option<bool> {
    if let Some(b) = value.as_bool() {
        return Some(b);
    }
    match value.as_text().as_str() {
        "divisible" | "shareable" => Some(true),
        "indivisible" | "unsharable" | "all_or_nothing" => Some(false),
        _ => None,
    }
}

/// Alternatives exhausted: true when no alternative courses remain.
pub fn alternatives_exhausted(value: &ParamValue) -> Option<bool> {
    if let Some(b) = value.as_bool() {
        return Some(b);
    }
    match value.as_text().as_str() {
        "exhausted" | "none" | "none_remaining" => Some(true),
        "available" | "remaining" | "untried" => Some(false),
        _ => None,
    }
}

/// Life-vs-property stakes: true when a life is at stake.
pub fn life_at_stake(value: &ParamValue) -> Option<bool> {
    if let Some(b) = value.as_bool() {
        return Some(b);
    }
    match value.as_text().as_str() {
        "life" => Some(true),
        "property" => Some(false),
        _ => None,
    }
}
