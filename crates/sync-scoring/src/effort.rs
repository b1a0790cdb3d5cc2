// Modified: 2025-09-20

//! Effort-size estimation (spec.md §4.1).

use sync_core::{AutofixLevel, Effort, Tool};

use crate::autofix::classify_autofix;
use crate::input::RawSignal;

pub fn classify_effort(signal: &RawSignal) -> Effort {
    if classify_autofix(signal) != AutofixLevel::None {
        return Effort::S;
    }

    if signal.location_count > 3 {
        return Effort::L;
    }
    if signal.location_count > 1 {
        return Effort::M;
    }

    tool_heuristic(signal)
}

fn tool_heuristic(signal: &RawSignal) -> Effort {
    let rule_lower = signal.rule_id.to_lowercase();
    match signal.tool {
        Tool::Jscpd => Effort::M,
        Tool::DependencyCruiser => {
            if signal.rule_id == "cycle" {
                Effort::L
            } else {
                Effort::M
            }
        }
        Tool::Knip => Effort::S,
        Tool::Tsc | Tool::Mypy => Effort::M,
        Tool::Eslint => Effort::S,
        Tool::Other(ref name) if name == "prettier" => Effort::S,
        Tool::Ruff => {
            if signal.rule_id.starts_with('N') || signal.rule_id.starts_with('D') {
                Effort::S
            } else {
                Effort::M
            }
        }
        Tool::Bandit => {
            if rule_lower.contains("hardcoded") && (rule_lower.contains("secret") || rule_lower.contains("password")) {
                Effort::S
            } else {
                Effort::M
            }
        }
        Tool::Pmd => {
            if rule_lower.contains("unused") || rule_lower.contains("empty") {
                Effort::S
            } else {
                Effort::M
            }
        }
        Tool::Spotbugs => Effort::M,
        Tool::Trunk | Tool::Semgrep | Tool::Other(_) => Effort::M,
    }
}
