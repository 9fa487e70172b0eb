//! Domain models for the capability catalogue.
//!
//! # Core Concepts
//!
//! ## Artifacts
//!
//! Five kinds of catalogued entity are subject to visibility filtering:
//!
//! - [`Component`]: A deployed system or application in the landscape.
//! - [`Capability`]: A business capability. Capabilities form a hierarchical
//!   tree via `parent_id`; the parent graph must be acyclic.
//! - [`AcquiredEntity`], [`Vendor`], [`InternalTeam`]: The three origin-entity
//!   kinds — where a component came from.
//!
//! ## Join records
//!
//! - [`OriginRelationship`]: A typed edge connecting a component to the origin
//!   entity that produced it. Not owned by either endpoint.
//!
//! ## Grouping
//!
//! - [`Domain`]: A business-domain grouping. Artifacts are associated with a
//!   domain either directly (tagged in an assignment map) or transitively
//!   (descendant capability, or component-linked origin entity). Membership
//!   beyond the direct tags is always derived, never stored.
//!
//! All ids are opaque strings, unique within their own type but treated as a
//! single shared namespace by the filtering engine.

mod bundle;
mod capability;
mod component;
mod domain;
mod origin;

pub use bundle::*;
pub use capability::*;
pub use component::*;
pub use domain::*;
pub use origin::*;
