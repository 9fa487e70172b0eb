use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{AcquiredEntity, Capability, Component, InternalTeam, OriginRelationship, Vendor};

/// The six-way heterogeneous collection the visibility filters operate on.
///
/// Same shape in and out: filtering only ever drops items, preserving each
/// collection's order, and never mutates or reorders survivors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArtifactBundle {
    #[serde(default)]
    pub components: Vec<Component>,
    #[serde(default)]
    pub capabilities: Vec<Capability>,
    #[serde(default)]
    pub acquired_entities: Vec<AcquiredEntity>,
    #[serde(default)]
    pub vendors: Vec<Vendor>,
    #[serde(default)]
    pub internal_teams: Vec<InternalTeam>,
    #[serde(default)]
    pub relationships: Vec<OriginRelationship>,
}

impl ArtifactBundle {
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
            && self.capabilities.is_empty()
            && self.acquired_entities.is_empty()
            && self.vendors.is_empty()
            && self.internal_teams.is_empty()
            && self.relationships.is_empty()
    }

    /// Total item count across all six collections.
    pub fn len(&self) -> usize {
        self.components.len()
            + self.capabilities.len()
            + self.acquired_entities.len()
            + self.vendors.len()
            + self.internal_teams.len()
            + self.relationships.len()
    }
}

/// Read-only snapshot of everything domain reachability needs.
///
/// Passed explicitly into each filtering call rather than held in shared
/// state, so the engine stays pure and trivially testable. The two assignment
/// maps are the only stored domain/artifact associations in the system.
#[derive(Debug, Clone, Copy)]
pub struct DomainContext<'a> {
    /// domain id → capability ids directly tagged to that domain.
    pub capability_assignments: &'a HashMap<String, Vec<String>>,
    /// domain id → component ids directly tagged to that domain.
    pub component_assignments: &'a HashMap<String, Vec<String>>,
    /// The full capability collection, used for descendant expansion.
    pub capabilities: &'a [Capability],
    /// All origin relationships, used for component → origin-entity adjacency.
    pub relationships: &'a [OriginRelationship],
    /// Every domain id the system knows about, selected or not.
    pub all_domain_ids: &'a [String],
}
