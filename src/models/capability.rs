use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A business capability in the enterprise-architecture catalogue.
///
/// Capabilities form a hierarchical tree via `parent_id`: a capability with no
/// parent is a root, and `level` records its depth in the tree. The filtering
/// engine relies on the parent graph being acyclic — a cyclic catalogue is
/// rejected at load time by [`Catalog::validate`](crate::catalog::Catalog::validate),
/// not tolerated at filter time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Capability {
    pub id: String,
    pub name: String,
    /// Parent capability. `None` marks a tree root.
    pub parent_id: Option<String>,
    /// Depth tag: 0 for roots, parent level + 1 below.
    pub level: u32,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Capability {
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}
