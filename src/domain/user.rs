//! User domain records and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::{ROLE_ADMIN, ROLE_CLIENT, ROLE_HOST};

/// User roles enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Client,
    Host,
    Admin,
}

impl UserRole {
    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }

    pub fn is_host(&self) -> bool {
        matches!(self, UserRole::Host)
    }

    /// Dashboard landing route for a role (mirrors the frontend navigation)
    pub fn dashboard_route(&self) -> &'static str {
        match self {
            UserRole::Client => "/clients/dashboard",
            UserRole::Host => "/host/dashboard",
            UserRole::Admin => "/admin/dashboard",
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ROLE_ADMIN => Ok(UserRole::Admin),
            ROLE_HOST => Ok(UserRole::Host),
            ROLE_CLIENT => Ok(UserRole::Client),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            UserRole::Admin => ROLE_ADMIN,
            UserRole::Host => ROLE_HOST,
            UserRole::Client => ROLE_CLIENT,
        };
        write!(f, "{}", s)
    }
}

/// Account standing, assigned by admins through the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountStatus {
    Active,
    Inactive,
    Suspended,
    Pending,
    #[serde(other)]
    Unknown,
}

/// Public profile record mirrored from the upstream API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<UserRole>,
    #[serde(default)]
    pub status: Option<AccountStatus>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub profile_photo: Option<String>,
    #[serde(default)]
    pub contact_number: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Identity returned to the browser after login: enough to route by role
/// and greet the user, nothing more.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id: String,
    pub email: String,
    pub role: UserRole,
    pub dashboard_route: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_display_and_parse() {
        for role in [UserRole::Client, UserRole::Host, UserRole::Admin] {
            let parsed: UserRole = role.to_string().parse().unwrap();
            assert_eq!(parsed, role);
        }
    }

    #[test]
    fn each_role_lands_on_its_own_dashboard() {
        assert_eq!(UserRole::Client.dashboard_route(), "/clients/dashboard");
        assert_eq!(UserRole::Host.dashboard_route(), "/host/dashboard");
        assert_eq!(UserRole::Admin.dashboard_route(), "/admin/dashboard");
    }

    #[test]
    fn unknown_account_status_is_tolerated() {
        let status: AccountStatus = serde_json::from_str("\"BANNED\"").unwrap();
        assert_eq!(status, AccountStatus::Unknown);
    }
}
