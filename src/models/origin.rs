use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A company brought into the organisation through acquisition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcquiredEntity {
    pub id: String,
    pub name: String,
    pub acquisition_date: Option<DateTime<Utc>>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An external vendor supplying purchased components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vendor {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An internal engineering team building components in-house.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InternalTeam {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// How a component relates to its origin entity.
///
/// - `AcquiredVia`: the component arrived with an acquired company
/// - `PurchasedFrom`: the component was bought from a vendor
/// - `BuiltBy`: the component was built by an internal team
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipType {
    AcquiredVia,
    PurchasedFrom,
    BuiltBy,
}

impl RelationshipType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AcquiredVia => "acquired_via",
            Self::PurchasedFrom => "purchased_from",
            Self::BuiltBy => "built_by",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "acquired_via" => Some(Self::AcquiredVia),
            "purchased_from" => Some(Self::PurchasedFrom),
            "built_by" => Some(Self::BuiltBy),
            _ => None,
        }
    }
}

/// A typed edge connecting a component to the entity that originated it.
///
/// Relationships are pure join records: they are not owned by either endpoint
/// and exist only so that domain reachability can follow a tagged component
/// outward to its acquired company, vendor, or internal team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OriginRelationship {
    pub id: String,
    pub component_id: String,
    pub origin_entity_id: String,
    pub relationship_type: RelationshipType,
    pub created_at: DateTime<Utc>,
}
