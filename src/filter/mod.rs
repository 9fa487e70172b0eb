//! The artifact-visibility filtering engine.
//!
//! Pure, synchronous functions over immutable catalogue snapshots: given the
//! selected business-domain and/or creator filters, decide which subset of
//! the six artifact collections stays visible. Nothing here mutates an
//! entity, touches I/O, or caches across calls — repeated invocations with
//! the same inputs are idempotent.
//!
//! # Pipeline
//!
//! ```text
//! raw bundle ─▶ filter_by_creator ─▶ filter_by_domain ─▶ preserve_capability_hierarchy
//! ```
//!
//! Domain visibility is graph reachability: a domain reaches its directly
//! tagged capabilities plus all their descendants, its directly tagged
//! components, and the origin entities those components link to through
//! relationship records. The synthetic
//! [`UNASSIGNED_DOMAIN_ID`](crate::models::UNASSIGNED_DOMAIN_ID) token
//! selects the complement: everything no domain reaches at all. Both shapes
//! compose through [`VisibilitySet`].
//!
//! After domain filtering, [`preserve_capability_hierarchy`] re-inserts the
//! ancestors of surviving capabilities so the tree renders without dangling
//! orphans.

mod creator;
mod domain;
mod hierarchy;
mod visibility;

pub use creator::filter_by_creator;
pub use domain::{
    compute_visible_artifact_ids, filter_by_domain, reachable_ids, unassigned_ids,
    visible_artifact_ids,
};
pub use hierarchy::preserve_capability_hierarchy;
pub use visibility::VisibilitySet;
