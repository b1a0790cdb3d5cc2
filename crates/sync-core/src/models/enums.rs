// Modified: 2025-09-20

//! Closed enumerations for the finding model (spec.md §3, §4.1, §9).
//!
//! Tagged variants over class hierarchies, per the teacher's habit
//! (`fedramp_core::types::RiskLevel`) and spec.md §9's explicit design
//! note: severities, confidences, efforts, layers, autofix levels, and
//! tools are closed enums, not open strings or a class hierarchy.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Finding severity. Declared in ascending order so `#[derive(Ord)]`
/// gives `Critical` the greatest value, matching spec.md §4.1's
/// `info(0) < low < medium < high < critical` ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        };
        write!(f, "{s}")
    }
}

/// Admission threshold for `IssueConfig.severity_threshold`. `Info`
/// admits every severity, including findings below `Low` would be if
/// such a thing existed — it is the "no filter" sentinel (spec.md §3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityThreshold {
    Info,
    Low,
    Medium,
    High,
    Critical,
}

impl SeverityThreshold {
    pub fn admits(&self, severity: Severity) -> bool {
        match self {
            SeverityThreshold::Info => true,
            SeverityThreshold::Low => severity >= Severity::Low,
            SeverityThreshold::Medium => severity >= Severity::Medium,
            SeverityThreshold::High => severity >= Severity::High,
            SeverityThreshold::Critical => severity >= Severity::Critical,
        }
    }
}

/// Finding confidence. Ascending order so `High` is greatest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Confidence::Low => "low",
            Confidence::Medium => "medium",
            Confidence::High => "high",
        };
        write!(f, "{s}")
    }
}

impl Confidence {
    /// `IssueConfig.confidence_threshold` admits iff `self >= threshold`.
    pub fn admits(&self, threshold: Confidence) -> bool {
        *self >= threshold
    }
}

/// Fix-size estimate (spec.md GLOSSARY).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effort {
    S,
    M,
    L,
}

impl fmt::Display for Effort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Effort::S => "S",
            Effort::M => "M",
            Effort::L => "L",
        };
        write!(f, "{s}")
    }
}

/// Classification of a finding's concern area (spec.md §3, §4.1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    Security,
    Architecture,
    Code,
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Layer::Security => "security",
            Layer::Architecture => "architecture",
            Layer::Code => "code",
        };
        write!(f, "{s}")
    }
}

/// Autofix level (spec.md GLOSSARY).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AutofixLevel {
    Safe,
    RequiresReview,
    None,
}

impl fmt::Display for AutofixLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AutofixLevel::Safe => "safe",
            AutofixLevel::RequiresReview => "requires_review",
            AutofixLevel::None => "none",
        };
        write!(f, "{s}")
    }
}

/// Analyzer tool identifier (spec.md §3). `Other` keeps ingestion total:
/// an unrecognized tool still produces a valid, conservatively-scored
/// finding rather than failing the whole run (SPEC_FULL.md §3).
///
/// Serialized as its plain lowercase string id (`"dependency-cruiser"`,
/// `"ruff"`, ...) rather than through derived enum tagging, so that an
/// unrecognized tool round-trips through `Other(String)` instead of
/// failing to deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Tool {
    Trunk,
    Eslint,
    Tsc,
    Jscpd,
    DependencyCruiser,
    Knip,
    Semgrep,
    Ruff,
    Mypy,
    Bandit,
    Pmd,
    Spotbugs,
    Other(String),
}

impl Serialize for Tool {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Tool {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Tool::from_str(&s).expect("Tool::from_str is infallible"))
    }
}

impl Tool {
    /// Lowercase canonical id, as used in fingerprints, labels, and
    /// fallback-index keys (spec.md §4.2, §4.5, §4.6).
    pub fn as_str(&self) -> &str {
        match self {
            Tool::Trunk => "trunk",
            Tool::Eslint => "eslint",
            Tool::Tsc => "tsc",
            Tool::Jscpd => "jscpd",
            Tool::DependencyCruiser => "dependency-cruiser",
            Tool::Knip => "knip",
            Tool::Semgrep => "semgrep",
            Tool::Ruff => "ruff",
            Tool::Mypy => "mypy",
            Tool::Bandit => "bandit",
            Tool::Pmd => "pmd",
            Tool::Spotbugs => "spotbugs",
            Tool::Other(s) => s.as_str(),
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Tool {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "trunk" => Tool::Trunk,
            "eslint" => Tool::Eslint,
            "tsc" => Tool::Tsc,
            "jscpd" => Tool::Jscpd,
            "dependency-cruiser" => Tool::DependencyCruiser,
            "knip" => Tool::Knip,
            "semgrep" => Tool::Semgrep,
            "ruff" => Tool::Ruff,
            "mypy" => Tool::Mypy,
            "bandit" => Tool::Bandit,
            "pmd" => Tool::Pmd,
            "spotbugs" => Tool::Spotbugs,
            other => Tool::Other(other.to_string()),
        })
    }
}
