use std::collections::{HashMap, HashSet};

use crate::models::ArtifactBundle;

/// Filter every collection in the bundle down to artifacts authored by one of
/// the selected creators.
///
/// An empty selection means the filter is inactive: the bundle passes through
/// unchanged. Otherwise an artifact survives iff the creator map has an entry
/// for its id *and* that creator is selected — artifacts with no recorded
/// creator drop out whenever the filter is active. Multiple selected creators
/// union.
pub fn filter_by_creator(
    bundle: ArtifactBundle,
    selected_creator_ids: &[String],
    creator_map: &HashMap<String, String>,
) -> ArtifactBundle {
    if selected_creator_ids.is_empty() {
        return bundle;
    }

    let selected: HashSet<&str> = selected_creator_ids.iter().map(String::as_str).collect();
    let authored_by_selected = |id: &str| {
        creator_map
            .get(id)
            .is_some_and(|creator| selected.contains(creator.as_str()))
    };

    tracing::debug!(
        selected = selected_creator_ids.len(),
        artifacts = bundle.len(),
        "applying creator filter"
    );

    let mut bundle = bundle;
    bundle.components.retain(|c| authored_by_selected(&c.id));
    bundle.capabilities.retain(|c| authored_by_selected(&c.id));
    bundle
        .acquired_entities
        .retain(|e| authored_by_selected(&e.id));
    bundle.vendors.retain(|v| authored_by_selected(&v.id));
    bundle.internal_teams.retain(|t| authored_by_selected(&t.id));
    bundle.relationships.retain(|r| authored_by_selected(&r.id));
    bundle
}
