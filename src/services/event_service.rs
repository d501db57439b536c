//! Event browsing and review service.
//!
//! Read-side of the marketplace: listings with filters, single event
//! lookups, and reviews. All data comes straight from the upstream API.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use crate::config::MAX_PAGE_SIZE;
use crate::domain::{Event, Review};
use crate::errors::AppResult;
use crate::types::ListMeta;
use crate::upstream::Upstream;

/// Listing filters forwarded to the upstream events endpoint.
///
/// Category and status arrive from the UI in any case and with an `All`
/// sentinel for "no filter"; both quirks are normalized here.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventFilters {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub from_date: Option<String>,
    #[serde(default)]
    pub to_date: Option<String>,
    #[serde(default)]
    pub page: Option<u64>,
    #[serde(default)]
    pub limit: Option<u64>,
}

impl EventFilters {
    /// Render as upstream query parameters, dropping empty/`All` values
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();

        for (name, value) in [("category", &self.category), ("status", &self.status)] {
            if let Some(value) = value {
                if !value.is_empty() && !value.eq_ignore_ascii_case("all") {
                    query.push((name.to_string(), value.to_uppercase()));
                }
            }
        }
        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            query.push(("search".to_string(), search.to_string()));
        }
        if let Some(from) = &self.from_date {
            query.push(("fromDate".to_string(), from.clone()));
        }
        if let Some(to) = &self.to_date {
            query.push(("toDate".to_string(), to.clone()));
        }
        if let Some(page) = self.page {
            query.push(("page".to_string(), page.to_string()));
        }
        if let Some(limit) = self.limit {
            query.push(("limit".to_string(), limit.min(MAX_PAGE_SIZE).to_string()));
        }

        query
    }
}

/// Event browsing service trait for dependency injection.
#[async_trait]
pub trait EventService: Send + Sync {
    /// List events with filters; returns records plus upstream pagination meta
    async fn list(&self, filters: EventFilters) -> AppResult<(Vec<Event>, Option<ListMeta>)>;

    /// Fetch a single event
    async fn get(&self, event_id: &str) -> AppResult<Event>;

    /// List reviews for an event
    async fn reviews(&self, event_id: &str) -> AppResult<Vec<Review>>;

    /// Submit a review for an attended event; returns the backend's message
    async fn create_review(
        &self,
        token: &str,
        event_id: &str,
        rating: u8,
        comment: String,
    ) -> AppResult<String>;
}

/// Concrete implementation forwarding to the upstream API.
pub struct EventGateway {
    upstream: Arc<dyn Upstream>,
}

impl EventGateway {
    pub fn new(upstream: Arc<dyn Upstream>) -> Self {
        Self { upstream }
    }
}

#[async_trait]
impl EventService for EventGateway {
    async fn list(&self, filters: EventFilters) -> AppResult<(Vec<Event>, Option<ListMeta>)> {
        let envelope = self.upstream.get("/hosts", &filters.to_query(), None).await?;
        let events: Vec<Event> = envelope.data_or_default()?;
        Ok((events, envelope.meta))
    }

    async fn get(&self, event_id: &str) -> AppResult<Event> {
        let envelope = self
            .upstream
            .get(&format!("/hosts/{event_id}"), &[], None)
            .await?;
        envelope.data_as()
    }

    async fn reviews(&self, event_id: &str) -> AppResult<Vec<Review>> {
        let envelope = self
            .upstream
            .get(&format!("/review/{event_id}/reviews"), &[], None)
            .await?;
        envelope.data_or_default()
    }

    async fn create_review(
        &self,
        token: &str,
        event_id: &str,
        rating: u8,
        comment: String,
    ) -> AppResult<String> {
        let envelope = self
            .upstream
            .post(
                &format!("/review/{event_id}/reviews"),
                Some(json!({ "rating": rating, "comment": comment })),
                Some(token),
            )
            .await?;

        Ok(envelope.message_or("Review submitted"))
    }
}
