//! Host event management service.
//!
//! Create/update/delete events and the host's own listings. Create and
//! update are forwarded as multipart: a `data` JSON part plus an optional
//! image `file` part, exactly the shape the backend ingests.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use super::event_service::EventFilters;
use crate::domain::Event;
use crate::errors::{AppError, AppResult};
use crate::types::ListMeta;
use crate::upstream::{FilePart, Upstream};

/// New event payload, serialized into the multipart `data` part
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventForm {
    pub title: String,
    pub category: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub location: String,
    pub joining_fee: f64,
    pub capacity: u32,
}

/// Partial event update; absent fields are left untouched upstream
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub joining_fee: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
}

fn to_value<T: Serialize>(payload: &T) -> AppResult<Value> {
    serde_json::to_value(payload).map_err(|e| AppError::internal(e.to_string()))
}

/// Host event management trait for dependency injection.
#[async_trait]
pub trait HostService: Send + Sync {
    /// The host's own events
    async fn my_events(
        &self,
        token: &str,
        filters: EventFilters,
    ) -> AppResult<(Vec<Event>, Option<ListMeta>)>;

    /// Create an event (optionally with a cover image)
    async fn create_event(
        &self,
        token: &str,
        form: EventForm,
        image: Option<FilePart>,
    ) -> AppResult<Event>;

    /// Update an event (optionally replacing the cover image)
    async fn update_event(
        &self,
        token: &str,
        event_id: &str,
        patch: EventPatch,
        image: Option<FilePart>,
    ) -> AppResult<Event>;

    /// Delete an event; returns the backend's message
    async fn delete_event(&self, token: &str, event_id: &str) -> AppResult<String>;
}

/// Concrete implementation forwarding to the upstream API.
pub struct HostGateway {
    upstream: Arc<dyn Upstream>,
}

impl HostGateway {
    pub fn new(upstream: Arc<dyn Upstream>) -> Self {
        Self { upstream }
    }
}

#[async_trait]
impl HostService for HostGateway {
    async fn my_events(
        &self,
        token: &str,
        filters: EventFilters,
    ) -> AppResult<(Vec<Event>, Option<ListMeta>)> {
        let envelope = self
            .upstream
            .get("/hosts/my-events", &filters.to_query(), Some(token))
            .await?;
        let events: Vec<Event> = envelope.data_or_default()?;
        Ok((events, envelope.meta))
    }

    async fn create_event(
        &self,
        token: &str,
        form: EventForm,
        image: Option<FilePart>,
    ) -> AppResult<Event> {
        let envelope = self
            .upstream
            .post_multipart("/hosts/create-event", to_value(&form)?, image, Some(token))
            .await?;
        envelope.data_as()
    }

    async fn update_event(
        &self,
        token: &str,
        event_id: &str,
        patch: EventPatch,
        image: Option<FilePart>,
    ) -> AppResult<Event> {
        let envelope = self
            .upstream
            .patch_multipart(
                &format!("/hosts/{event_id}"),
                to_value(&patch)?,
                image,
                Some(token),
            )
            .await?;
        envelope.data_as()
    }

    async fn delete_event(&self, token: &str, event_id: &str) -> AppResult<String> {
        let envelope = self
            .upstream
            .delete(&format!("/hosts/{event_id}"), Some(token))
            .await?;
        Ok(envelope.message_or("Event deleted"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_serializes_only_present_fields() {
        let patch = EventPatch {
            title: Some("New title".to_string()),
            capacity: Some(50),
            ..Default::default()
        };

        let value = to_value(&patch).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert_eq!(obj["title"], "New title");
        assert_eq!(obj["capacity"], 50);
    }

    #[test]
    fn form_uses_backend_field_names() {
        let form = EventForm {
            title: "Jazz Night".to_string(),
            category: "MUSIC".to_string(),
            description: "Live trio".to_string(),
            date: Utc::now(),
            location: "Blue Note".to_string(),
            joining_fee: 25.0,
            capacity: 80,
        };

        let value = to_value(&form).unwrap();
        assert!(value.get("joiningFee").is_some());
        assert!(value.get("joining_fee").is_none());
    }
}
