use std::collections::{HashMap, HashSet};

use crate::models::Capability;

/// Re-insert the ancestors of every surviving capability so the filtered list
/// still forms a structurally valid tree.
///
/// Starting from the filtered ids, each capability's parent chain is walked
/// upward through `all_capabilities`, adding every newly seen ancestor. A
/// walk stops early at the first ancestor already included (its own chain was
/// added when it was), at a root, or at a parent id with no record — a
/// dangling or self-referential parent is treated as "no further ancestor".
/// Only ancestors are added, never siblings, and no id is ever added twice.
///
/// The result is the subsequence of `all_capabilities` whose id made the
/// final set, so output order is the catalogue's canonical order regardless
/// of the order of `filtered` or the order chains were walked.
pub fn preserve_capability_hierarchy(
    filtered: &[Capability],
    all_capabilities: &[Capability],
) -> Vec<Capability> {
    if filtered.is_empty() {
        return Vec::new();
    }

    let by_id: HashMap<&str, &Capability> = all_capabilities
        .iter()
        .map(|c| (c.id.as_str(), c))
        .collect();

    let mut keep: HashSet<&str> = filtered.iter().map(|c| c.id.as_str()).collect();
    for capability in filtered {
        let mut next = capability.parent_id.as_deref();
        while let Some(parent_id) = next {
            if !keep.insert(parent_id) {
                break;
            }
            next = by_id
                .get(parent_id)
                .and_then(|parent| parent.parent_id.as_deref());
        }
    }

    all_capabilities
        .iter()
        .filter(|c| keep.contains(c.id.as_str()))
        .cloned()
        .collect()
}
