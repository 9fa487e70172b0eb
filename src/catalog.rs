//! Serde-backed catalogue snapshots and structural validation.
//!
//! A [`Catalog`] is the on-disk form of everything the filtering engine
//! consumes: the six artifact collections, the business-domain list, the two
//! domain assignment maps, and the creator map. The engine itself only ever
//! sees borrowed views ([`DomainContext`]) of a loaded snapshot.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{ArtifactBundle, Capability, Domain, DomainContext};

/// Structural defect in a catalogue snapshot.
///
/// The filtering engine itself is total and never returns these; they exist
/// so malformed snapshots are rejected eagerly at the load boundary instead
/// of silently producing wrong filter results. A parent cycle in particular
/// breaks the acyclicity invariant descendant expansion relies on.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("capability parent chain contains a cycle through '{capability_id}'")]
    ParentCycle { capability_id: String },

    #[error("capability '{capability_id}' references unknown parent '{parent_id}'")]
    UnknownParent {
        capability_id: String,
        parent_id: String,
    },

    #[error("duplicate capability id '{id}'")]
    DuplicateId { id: String },
}

/// A complete catalogue snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    /// Every business domain the system knows about.
    #[serde(default)]
    pub domains: Vec<Domain>,
    /// The six filterable collections.
    #[serde(default)]
    pub artifacts: ArtifactBundle,
    /// domain id → directly tagged capability ids.
    #[serde(default)]
    pub capability_assignments: HashMap<String, Vec<String>>,
    /// domain id → directly tagged component ids.
    #[serde(default)]
    pub component_assignments: HashMap<String, Vec<String>>,
    /// artifact id → creator id.
    #[serde(default)]
    pub creators: HashMap<String, String>,
}

impl Catalog {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("failed to parse catalogue JSON")
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("failed to read catalogue file {}", path.display()))?;
        Self::from_json_str(&json)
    }

    /// Ids of every known domain, in catalogue order.
    pub fn domain_ids(&self) -> Vec<String> {
        self.domains.iter().map(|d| d.id.clone()).collect()
    }

    /// Borrowed view of the snapshot for the domain-filtering functions.
    ///
    /// `all_domain_ids` is borrowed rather than derived here so the context
    /// can stay a cheap bundle of references; get it from [`Self::domain_ids`].
    pub fn context<'a>(&'a self, all_domain_ids: &'a [String]) -> DomainContext<'a> {
        DomainContext {
            capability_assignments: &self.capability_assignments,
            component_assignments: &self.component_assignments,
            capabilities: &self.artifacts.capabilities,
            relationships: &self.artifacts.relationships,
            all_domain_ids,
        }
    }

    /// Reject snapshots with a malformed capability graph: duplicate ids,
    /// dangling parent pointers, and parent cycles.
    pub fn validate(&self) -> std::result::Result<(), CatalogError> {
        let capabilities = &self.artifacts.capabilities;

        let mut seen: HashSet<&str> = HashSet::new();
        for capability in capabilities {
            if !seen.insert(capability.id.as_str()) {
                return Err(CatalogError::DuplicateId {
                    id: capability.id.clone(),
                });
            }
        }

        let by_id: HashMap<&str, &Capability> = capabilities
            .iter()
            .map(|c| (c.id.as_str(), c))
            .collect();

        for capability in capabilities {
            if let Some(parent_id) = capability.parent_id.as_deref() {
                if !by_id.contains_key(parent_id) {
                    return Err(CatalogError::UnknownParent {
                        capability_id: capability.id.clone(),
                        parent_id: parent_id.to_string(),
                    });
                }
            }
        }

        // Walk each parent chain once; chains ending in an already-cleared
        // capability are acyclic by induction.
        let mut cleared: HashSet<&str> = HashSet::new();
        for capability in capabilities {
            let mut path: Vec<&str> = Vec::new();
            let mut next = Some(capability.id.as_str());
            while let Some(id) = next {
                if cleared.contains(id) {
                    break;
                }
                if path.contains(&id) {
                    return Err(CatalogError::ParentCycle {
                        capability_id: id.to_string(),
                    });
                }
                path.push(id);
                next = by_id.get(id).and_then(|c| c.parent_id.as_deref());
            }
            cleared.extend(path);
        }

        Ok(())
    }
}
