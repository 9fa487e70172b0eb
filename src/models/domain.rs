use serde::{Deserialize, Serialize};

/// A business-domain grouping for catalogue artifacts.
///
/// Domains never own their members. The ground-truth associations live in the
/// two assignment maps carried by the catalogue (domain → capability ids,
/// domain → component ids); every other form of membership — descendant
/// capabilities, component-linked origin entities, "unassigned" — is derived
/// by the filtering engine at query time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
}

/// Reserved filter token for the synthetic "unassigned" pseudo-domain.
///
/// Selecting it asks for every artifact that is not reachable from *any* known
/// domain. It is never a real domain id and is never passed to reachability.
pub const UNASSIGNED_DOMAIN_ID: &str = "__unassigned__";
