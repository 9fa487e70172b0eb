use std::collections::{HashMap, HashSet, VecDeque};

use crate::models::{ArtifactBundle, Capability, DomainContext, UNASSIGNED_DOMAIN_ID};

use super::VisibilitySet;

/// Transitive closure of the child relation, starting from a set of directly
/// tagged capability ids.
///
/// Builds a child-adjacency index once and runs a single BFS over it, so the
/// result is independent of the order capabilities appear in and the
/// traversal terminates on any input — the visited set bounds it even if the
/// parent graph is malformed.
pub(crate) fn expand_descendants(
    direct_ids: &HashSet<String>,
    capabilities: &[Capability],
) -> HashSet<String> {
    let mut children_of: HashMap<&str, Vec<&str>> = HashMap::new();
    for capability in capabilities {
        if let Some(parent_id) = capability.parent_id.as_deref() {
            children_of
                .entry(parent_id)
                .or_default()
                .push(capability.id.as_str());
        }
    }

    let mut expanded: HashSet<String> = direct_ids.clone();
    let mut queue: VecDeque<&str> = direct_ids.iter().map(String::as_str).collect();
    while let Some(id) = queue.pop_front() {
        let Some(children) = children_of.get(id) else {
            continue;
        };
        for &child in children {
            if expanded.insert(child.to_string()) {
                queue.push_back(child);
            }
        }
    }
    expanded
}

/// Every artifact id reachable from any of the given domains.
///
/// Per domain, the reachable set unions three sources: the domain's directly
/// tagged capabilities expanded through all their descendants, its directly
/// tagged components, and the origin entities those components connect to via
/// relationship records. A domain id absent from both assignment maps
/// contributes nothing.
pub fn reachable_ids(domain_ids: &[String], ctx: &DomainContext<'_>) -> HashSet<String> {
    let mut reachable = HashSet::new();

    for domain_id in domain_ids {
        if let Some(capability_ids) = ctx.capability_assignments.get(domain_id) {
            let direct: HashSet<String> = capability_ids.iter().cloned().collect();
            reachable.extend(expand_descendants(&direct, ctx.capabilities));
        }

        if let Some(component_ids) = ctx.component_assignments.get(domain_id) {
            let tagged: HashSet<&str> = component_ids.iter().map(String::as_str).collect();
            for relationship in ctx.relationships {
                if tagged.contains(relationship.component_id.as_str()) {
                    reachable.insert(relationship.origin_entity_id.clone());
                }
            }
            reachable.extend(component_ids.iter().cloned());
        }
    }

    reachable
}

/// Every id the catalogue knows about: all capabilities, all components
/// tagged to any domain, and all origin entities targeted by a relationship.
/// Ids mentioned nowhere in these sources are outside the universe and are
/// never reported as unassigned.
fn known_universe(ctx: &DomainContext<'_>) -> HashSet<String> {
    let mut universe: HashSet<String> =
        ctx.capabilities.iter().map(|c| c.id.clone()).collect();
    for component_ids in ctx.component_assignments.values() {
        universe.extend(component_ids.iter().cloned());
    }
    universe.extend(
        ctx.relationships
            .iter()
            .map(|r| r.origin_entity_id.clone()),
    );
    universe
}

/// Every known artifact id not reachable from *any* domain.
///
/// The complement is taken over all domains the catalogue knows about, not
/// just a current selection: an artifact is unassigned precisely when no
/// domain at all reaches it.
pub fn unassigned_ids(ctx: &DomainContext<'_>) -> HashSet<String> {
    let assigned = reachable_ids(ctx.all_domain_ids, ctx);
    let mut universe = known_universe(ctx);
    universe.retain(|id| !assigned.contains(id));
    universe
}

/// The visibility predicate for a domain filter selection, without
/// materializing any artifact collection.
///
/// An empty selection deactivates the filter entirely. Otherwise the result
/// is the union of "reachable from a selected real domain" and, when the
/// [`UNASSIGNED_DOMAIN_ID`] token is selected, "reachable from no domain at
/// all" — the latter expressed as a complement over the all-domains reachable
/// set.
pub fn visible_artifact_ids(
    selected_domain_ids: &[String],
    ctx: &DomainContext<'_>,
) -> VisibilitySet {
    if selected_domain_ids.is_empty() {
        return VisibilitySet::All;
    }

    let real_domains: Vec<String> = selected_domain_ids
        .iter()
        .filter(|id| *id != UNASSIGNED_DOMAIN_ID)
        .cloned()
        .collect();
    let unassigned_selected = selected_domain_ids
        .iter()
        .any(|id| id == UNASSIGNED_DOMAIN_ID);

    let mut visible = VisibilitySet::Only(reachable_ids(&real_domains, ctx));
    if unassigned_selected {
        let assigned_to_any = reachable_ids(ctx.all_domain_ids, ctx);
        visible = visible.union(VisibilitySet::AllExcept(assigned_to_any));
    }
    visible
}

/// Materialized form of [`visible_artifact_ids`], for collaborators that want
/// a concrete id set instead of a predicate. The complement cases resolve
/// against the known universe; an empty selection therefore yields every
/// known id.
pub fn compute_visible_artifact_ids(
    selected_domain_ids: &[String],
    ctx: &DomainContext<'_>,
) -> HashSet<String> {
    match visible_artifact_ids(selected_domain_ids, ctx) {
        VisibilitySet::All => known_universe(ctx),
        VisibilitySet::Only(ids) => ids,
        VisibilitySet::AllExcept(excluded) => {
            let mut universe = known_universe(ctx);
            universe.retain(|id| !excluded.contains(id));
            universe
        }
    }
}

/// Filter every collection in the bundle down to artifacts visible under the
/// selected domains.
///
/// An empty selection means the filter is inactive: the bundle passes through
/// unchanged. Each collection is filtered by id membership, order preserved.
/// Relationships follow their source component — an edge stays visible
/// exactly when the component it hangs off does.
pub fn filter_by_domain(
    bundle: ArtifactBundle,
    selected_domain_ids: &[String],
    ctx: &DomainContext<'_>,
) -> ArtifactBundle {
    if selected_domain_ids.is_empty() {
        return bundle;
    }

    let visible = visible_artifact_ids(selected_domain_ids, ctx);

    tracing::debug!(
        selected = selected_domain_ids.len(),
        artifacts = bundle.len(),
        "applying domain filter"
    );

    let mut bundle = bundle;
    bundle.components.retain(|c| visible.contains(&c.id));
    bundle.capabilities.retain(|c| visible.contains(&c.id));
    bundle
        .acquired_entities
        .retain(|e| visible.contains(&e.id));
    bundle.vendors.retain(|v| visible.contains(&v.id));
    bundle.internal_teams.retain(|t| visible.contains(&t.id));
    bundle
        .relationships
        .retain(|r| visible.contains(&r.component_id));
    bundle
}
