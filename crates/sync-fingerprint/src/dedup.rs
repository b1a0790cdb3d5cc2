// Modified: 2025-09-20

//! Finding deduplication (spec.md §4.3).

use std::collections::HashMap;

use sync_core::{Finding, Location};

/// Collapse findings sharing a fingerprint into one aggregate per
/// fingerprint, preserving the input order of first occurrence and
/// unioning locations (deduplicated by `(path, startLine)`). The first
/// group member's title/message/severity/etc. are kept; only the
/// `locations` list is merged.
pub fn dedupe(findings: Vec<Finding>) -> Vec<Finding> {
    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, Finding> = HashMap::new();

    for finding in findings {
        let key = finding.fingerprint.full().to_string();
        match groups.get_mut(&key) {
            None => {
                order.push(key.clone());
                groups.insert(key, finding);
            }
            Some(existing) => merge_locations(existing, finding.locations),
        }
    }

    order.into_iter().map(|key| groups.remove(&key).expect("key present by construction")).collect()
}

fn merge_locations(into: &mut Finding, incoming: Vec<Location>) {
    for loc in incoming {
        let already_present = into.locations.iter().any(|existing| existing.path == loc.path && existing.start_line == loc.start_line);
        if !already_present {
            into.locations.push(loc);
        }
    }
}
