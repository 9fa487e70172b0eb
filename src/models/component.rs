use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A deployed system, application, or service in the architecture landscape.
///
/// Components are the concrete artifacts of the catalogue: they are tagged to
/// business domains directly and connect to origin entities through
/// [`OriginRelationship`](crate::models::OriginRelationship) records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
