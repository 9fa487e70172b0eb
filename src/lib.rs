//! Artifact-visibility filtering for capability-mapping catalogues.
//!
//! The catalogue holds components, a capability tree, and three kinds of
//! origin entity (acquired companies, vendors, internal teams) connected to
//! components by typed relationships. This crate answers one question: given
//! a set of selected business-domain filters (including the synthetic
//! "unassigned" pseudo-domain) and/or selected creator filters, which subset
//! of those collections stays visible?
//!
//! The interesting parts are graph reachability and set algebra, all of them
//! pure input→output functions in [`filter`]. The [`models`] module carries
//! the entity records, [`catalog`] the serde snapshot format and its
//! structural validation, and [`render`] an ASCII view of capability trees
//! for the CLI.

pub mod catalog;
pub mod filter;
pub mod models;
pub mod render;
