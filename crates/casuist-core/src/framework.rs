//! Ethical framework enumeration and registry.
//!
//! Frameworks are a closed enumeration with an explicit hybrid/unknown escape
//! hatch. Dispatch everywhere is a pattern match on [`Framework`], never a
//! chain of substring comparisons; the only string handling is the alias
//! table inside [`Framework::parse`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// A known ethical framework, or a tagged escape for hybrids and strangers.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Framework {
    Utilitarian,
    Deontological,
    VirtueEthics,
    CareEthics,
    RightsBased,
    SocialContract,
    NaturalLaw,
    Professional,
    /// Composite frameworks, e.g. "Utilitarianism + Care Ethics".
    Hybrid(String),
    /// Anything the registry does not recognize; carries the raw name.
    Unknown(String),
}

impl Framework {
    /// Parse a display name into the closed enumeration.
    ///
    /// Matching is exact against the canonical name and a fixed alias table
    /// after normalization (lowercase, `-`/`_` folded to spaces). Names
    /// containing `+` or the word "hybrid" parse as `Hybrid`.
    pub fn parse(name: &str) -> Framework {
        let normalized = normalize(name);
        if normalized.is_empty() {
            return Framework::Unknown(name.to_string());
        }
        if name.contains('+') || normalized.contains("hybrid") {
            return Framework::Hybrid(name.trim().to_string());
        }
        match normalized.as_str() {
            "utilitarianism" | "utilitarian" | "consequentialism" | "consequentialist" => {
                Framework::Utilitarian
            }
            "kantian deontology" | "deontology" | "deontological" | "kantian"
            | "kantian ethics" | "duty ethics" => Framework::Deontological,
            "virtue ethics" | "virtue" | "aristotelian ethics" => Framework::VirtueEthics,
            "care ethics" | "ethics of care" | "care" => Framework::CareEthics,
            "rights based ethics" | "rights based" | "rights" | "natural rights" => {
                Framework::RightsBased
            }
            "social contract theory" | "social contract" | "contractarianism" => {
                Framework::SocialContract
            }
            "natural law" | "natural law theory" => Framework::NaturalLaw,
            "professional ethics" | "professional duty" => Framework::Professional,
            _ => Framework::Unknown(name.trim().to_string()),
        }
    }

    /// Canonical display name. Hybrid and unknown frameworks keep their raw
    /// name.
    pub fn canonical_name(&self) -> &str {
        match self {
            Framework::Utilitarian => "Utilitarianism",
            Framework::Deontological => "Kantian Deontology",
            Framework::VirtueEthics => "Virtue Ethics",
            Framework::CareEthics => "Care Ethics",
            Framework::RightsBased => "Rights-Based Ethics",
            Framework::SocialContract => "Social Contract Theory",
            Framework::NaturalLaw => "Natural Law",
            Framework::Professional => "Professional Ethics",
            Framework::Hybrid(name) | Framework::Unknown(name) => name.as_str(),
        }
    }

    pub fn is_hybrid(&self) -> bool {
        matches!(self, Framework::Hybrid(_))
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Framework::Unknown(_))
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical_name())
    }
}

fn normalize(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_space = true;
    for c in name.chars() {
        let c = match c {
            '-' | '_' => ' ',
            other => other.to_ascii_lowercase(),
        };
        if c == ' ' {
            if !last_space {
                out.push(' ');
            }
            last_space = true;
        } else {
            out.push(c);
            last_space = false;
        }
    }
    out.trim_end().to_string()
}

/// Immutable metadata for one framework.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrameworkInfo {
    pub framework: Framework,
    pub name: String,
    pub priority: f64,
    pub aliases: Vec<String>,
    pub is_hybrid: bool,
    pub is_unknown: bool,
}

/// Read-only framework metadata lookup. Safe to share across threads once
/// constructed.
#[derive(Clone, Debug)]
pub struct FrameworkRegistry {
    infos: Vec<FrameworkInfo>,
}

impl Default for FrameworkRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameworkRegistry {
    pub fn new() -> Self {
        let entry = |framework: Framework, priority: f64, aliases: &[&str]| FrameworkInfo {
            name: framework.canonical_name().to_string(),
            priority,
            aliases: aliases.iter().map(|a| a.to_string()).collect(),
            is_hybrid: false,
            is_unknown: false,
            framework,
        };
        Self {
            infos: vec![
                entry(
                    Framework::Utilitarian,
                    0.9,
                    &["Utilitarian", "Consequentialism"],
                ),
                entry(
                    Framework::Deontological,
                    0.9,
                    &["Deontology", "Kantian", "Duty Ethics"],
                ),
                entry(Framework::RightsBased, 0.85, &["Rights", "Natural Rights"]),
                entry(Framework::CareEthics, 0.75, &["Ethics of Care", "Care"]),
                entry(Framework::VirtueEthics, 0.7, &["Virtue", "Aristotelian Ethics"]),
                entry(
                    Framework::SocialContract,
                    0.7,
                    &["Social Contract", "Contractarianism"],
                ),
                entry(Framework::NaturalLaw, 0.65, &["Natural Law Theory"]),
                entry(Framework::Professional, 0.6, &["Professional Duty"]),
            ],
        }
    }

    /// Lookup by display name. Returns None for unknown frameworks; hybrids
    /// resolve to a synthesized entry.
    pub fn get(&self, name: &str) -> Option<FrameworkInfo> {
        match Framework::parse(name) {
            Framework::Unknown(_) => None,
            Framework::Hybrid(raw) => Some(FrameworkInfo {
                framework: Framework::Hybrid(raw.clone()),
                name: raw,
                priority: 0.8,
                aliases: Vec::new(),
                is_hybrid: true,
                is_unknown: false,
            }),
            known => self.infos.iter().find(|i| i.framework == known).cloned(),
        }
    }

    /// Total lookup: always produces metadata, flagging unknowns.
    pub fn resolve(&self, name: &str) -> FrameworkInfo {
        self.get(name).unwrap_or_else(|| FrameworkInfo {
            framework: Framework::Unknown(name.trim().to_string()),
            name: name.trim().to_string(),
            priority: 0.3,
            aliases: Vec::new(),
            is_hybrid: false,
            is_unknown: true,
        })
    }

    pub fn all(&self) -> &[FrameworkInfo] {
        &self.infos
    }

    /// Importance weight for severity/priority scoring. Hybrids get a small
    /// bonus on top of their priority; unknowns score low.
    pub fn importance(&self, name: &str) -> f64 {
        let info = self.resolve(name);
        if info.is_unknown {
            0.3
        } else if info.is_hybrid {
            (info.priority + 0.1).min(1.0)
        } else {
            info.priority
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_canonical_and_aliases() {
        assert_eq!(Framework::parse("Utilitarianism"), Framework::Utilitarian);
        assert_eq!(Framework::parse("utilitarian"), Framework::Utilitarian);
        assert_eq!(Framework::parse("Kantian Deontology"), Framework::Deontological);
        assert_eq!(Framework::parse("deontology"), Framework::Deontological);
        assert_eq!(Framework::parse("Rights-Based Ethics"), Framework::RightsBased);
        assert_eq!(Framework::parse("ethics_of_care"), Framework::CareEthics);
    }

    #[test]
    fn parse_hybrid_and_unknown() {
        assert!(Framework::parse("Utilitarianism + Care Ethics").is_hybrid());
        assert!(Framework::parse("Hybrid Consequentialism").is_hybrid());
        let unknown = Framework::parse("Klingon Honor Code");
        assert!(unknown.is_unknown());
        assert_eq!(unknown.canonical_name(), "Klingon Honor Code");
    }

    #[test]
    fn registry_lookup() {
        let registry = FrameworkRegistry::new();
        let info = registry.get("Utilitarianism").unwrap();
        assert_eq!(info.framework, Framework::Utilitarian);
        assert!(info.priority > 0.8);
        assert!(registry.get("Klingon Honor Code").is_none());
        assert!(registry.resolve("Klingon Honor Code").is_unknown);
    }

    #[test]
    fn hybrid_importance_bonus() {
        let registry = FrameworkRegistry::new();
        let plain = registry.importance("Professional Ethics");
        let hybrid = registry.importance("Professional Ethics + Care Ethics");
        assert!(hybrid > plain);
    }
}
