//! Host application records: a client's request to become a host.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Application review state, owned by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    Pending,
    Approved,
    Rejected,
    #[serde(other)]
    Unknown,
}

/// Applicant summary embedded in the admin pending-applications listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Applicant {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// A host application mirrored from the upstream API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostApplication {
    pub id: String,
    #[serde(default)]
    pub status: Option<ApplicationStatus>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub experience: Option<String>,
    #[serde(default)]
    pub specialties: Vec<String>,
    #[serde(default)]
    pub portfolio: Option<String>,
    #[serde(default)]
    pub contact_number: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub applicant: Option<Applicant>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn application_status_parses_known_and_unknown_values() {
        let approved: ApplicationStatus = serde_json::from_str("\"APPROVED\"").unwrap();
        assert_eq!(approved, ApplicationStatus::Approved);

        let other: ApplicationStatus = serde_json::from_str("\"WITHDRAWN\"").unwrap();
        assert_eq!(other, ApplicationStatus::Unknown);
    }
}
