//! Event review records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Reviewer summary embedded in a review
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reviewer {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// A review mirrored from the upstream API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub rating: u8,
    pub comment: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub client: Option<Reviewer>,
}
