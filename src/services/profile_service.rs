//! Profile and host-application service.
//!
//! Public profile pages plus the client-side of the host approval
//! workflow: submitting an application and polling its status. Approval
//! itself is an admin/back-office concern.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use crate::domain::{Event, HostApplication, UserProfile};
use crate::errors::{AppError, AppResult};
use crate::upstream::Upstream;

/// Host application payload forwarded to the backend
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HostApplicationForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialties: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portfolio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// Profile service trait for dependency injection.
#[async_trait]
pub trait ProfileService: Send + Sync {
    /// Public profile for any user
    async fn profile(&self, user_id: &str) -> AppResult<UserProfile>;

    /// Events hosted by a user
    async fn hosted_events(&self, user_id: &str) -> AppResult<Vec<Event>>;

    /// Events a user has joined
    async fn joined_events(&self, user_id: &str) -> AppResult<Vec<Event>>;

    /// Submit a host application; returns the backend's message.
    /// On success the session must be re-established (the role changes
    /// once an admin approves), so the handler clears the cookie.
    async fn apply_host(&self, token: &str, form: HostApplicationForm) -> AppResult<String>;

    /// The current user's host application, if any
    async fn application_status(&self, token: &str) -> AppResult<Option<HostApplication>>;
}

/// Concrete implementation forwarding to the upstream API.
pub struct ProfileGateway {
    upstream: Arc<dyn Upstream>,
}

impl ProfileGateway {
    pub fn new(upstream: Arc<dyn Upstream>) -> Self {
        Self { upstream }
    }
}

#[async_trait]
impl ProfileService for ProfileGateway {
    async fn profile(&self, user_id: &str) -> AppResult<UserProfile> {
        let envelope = self
            .upstream
            .get(&format!("/user/profile/{user_id}"), &[], None)
            .await?;
        envelope.data_as()
    }

    async fn hosted_events(&self, user_id: &str) -> AppResult<Vec<Event>> {
        let envelope = self
            .upstream
            .get(&format!("/user/{user_id}/hosted-events"), &[], None)
            .await?;
        envelope.data_or_default()
    }

    async fn joined_events(&self, user_id: &str) -> AppResult<Vec<Event>> {
        let envelope = self
            .upstream
            .get(&format!("/user/{user_id}/joined-events"), &[], None)
            .await?;
        envelope.data_or_default()
    }

    async fn apply_host(&self, token: &str, form: HostApplicationForm) -> AppResult<String> {
        let payload: Value =
            serde_json::to_value(&form).map_err(|e| AppError::internal(e.to_string()))?;

        let envelope = self
            .upstream
            .post("/user/apply-host", Some(payload), Some(token))
            .await?;

        Ok(envelope.message_or("Host application submitted"))
    }

    async fn application_status(&self, token: &str) -> AppResult<Option<HostApplication>> {
        let envelope = self
            .upstream
            .get("/user/host-application-status", &[], Some(token))
            .await?;
        envelope.data_or_default()
    }
}
