//! Admin moderation service.
//!
//! Everything behind the admin dashboard: account listings and status
//! changes, the host approval queue, event moderation, and the overview
//! stats. Each call forwards the admin's own token; the backend decides
//! what the admin may actually do.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::config::MAX_PAGE_SIZE;
use crate::domain::{DashboardStats, Event, HostApplication, UserProfile};
use crate::errors::AppResult;
use crate::types::ListMeta;
use crate::upstream::Upstream;

/// Search + pagination filters shared by the admin listings
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminListFilters {
    #[serde(default)]
    pub search_term: Option<String>,
    #[serde(default)]
    pub page: Option<u64>,
    #[serde(default)]
    pub limit: Option<u64>,
    #[serde(default)]
    pub sort_by: Option<String>,
    #[serde(default)]
    pub sort_order: Option<String>,
}

impl AdminListFilters {
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(term) = self.search_term.as_deref().filter(|s| !s.is_empty()) {
            query.push(("searchTerm".to_string(), term.to_string()));
        }
        if let Some(page) = self.page {
            query.push(("page".to_string(), page.to_string()));
        }
        if let Some(limit) = self.limit {
            query.push(("limit".to_string(), limit.min(MAX_PAGE_SIZE).to_string()));
        }
        if let Some(sort_by) = &self.sort_by {
            query.push(("sortBy".to_string(), sort_by.clone()));
        }
        if let Some(sort_order) = &self.sort_order {
            query.push(("sortOrder".to_string(), sort_order.clone()));
        }
        query
    }
}

/// A listing plus the upstream's pagination metadata
pub type Listing<T> = (Vec<T>, Option<ListMeta>);

/// Admin service trait for dependency injection.
#[async_trait]
pub trait AdminService: Send + Sync {
    // Account management
    async fn admins(&self, token: &str, filters: AdminListFilters) -> AppResult<Listing<UserProfile>>;
    async fn update_admin(&self, token: &str, admin_id: &str, patch: Value) -> AppResult<String>;
    async fn delete_admin(&self, token: &str, admin_id: &str) -> AppResult<String>;

    async fn users(&self, token: &str, filters: AdminListFilters) -> AppResult<Listing<UserProfile>>;
    async fn update_user_status(&self, token: &str, user_id: &str, status: String) -> AppResult<String>;
    async fn delete_user(&self, token: &str, user_id: &str) -> AppResult<String>;

    async fn hosts(&self, token: &str, filters: AdminListFilters) -> AppResult<Listing<UserProfile>>;
    async fn update_host_status(&self, token: &str, host_id: &str, status: String) -> AppResult<String>;
    async fn delete_host(&self, token: &str, host_id: &str) -> AppResult<String>;

    // Host approval queue
    async fn pending_host_applications(&self, token: &str) -> AppResult<Vec<HostApplication>>;
    async fn approve_host_application(&self, token: &str, application_id: &str) -> AppResult<String>;
    async fn reject_host_application(&self, token: &str, application_id: &str) -> AppResult<String>;

    // Event moderation
    async fn events(&self, token: &str, filters: AdminListFilters) -> AppResult<Listing<Event>>;
    async fn pending_events(&self, token: &str) -> AppResult<Vec<Event>>;
    async fn approve_event(&self, token: &str, event_id: &str) -> AppResult<String>;
    async fn reject_event(&self, token: &str, event_id: &str) -> AppResult<String>;
    async fn update_event_status(&self, token: &str, event_id: &str, status: String) -> AppResult<String>;
    async fn delete_event(&self, token: &str, event_id: &str) -> AppResult<String>;

    // Overview
    async fn dashboard_stats(&self, token: &str) -> AppResult<DashboardStats>;
}

/// Concrete implementation forwarding to the upstream API.
pub struct AdminGateway {
    upstream: Arc<dyn Upstream>,
}

impl AdminGateway {
    pub fn new(upstream: Arc<dyn Upstream>) -> Self {
        Self { upstream }
    }

    async fn listing<T>(
        &self,
        path: &str,
        token: &str,
        filters: AdminListFilters,
    ) -> AppResult<Listing<T>>
    where
        T: serde::de::DeserializeOwned,
    {
        let envelope = self.upstream.get(path, &filters.to_query(), Some(token)).await?;
        let items: Vec<T> = envelope.data_or_default()?;
        Ok((items, envelope.meta))
    }

    async fn action(&self, path: &str, token: &str, fallback: &str) -> AppResult<String> {
        let envelope = self.upstream.patch(path, None, Some(token)).await?;
        Ok(envelope.message_or(fallback))
    }

    async fn remove(&self, path: &str, token: &str, fallback: &str) -> AppResult<String> {
        let envelope = self.upstream.delete(path, Some(token)).await?;
        Ok(envelope.message_or(fallback))
    }
}

#[async_trait]
impl AdminService for AdminGateway {
    async fn admins(&self, token: &str, filters: AdminListFilters) -> AppResult<Listing<UserProfile>> {
        self.listing("/admin", token, filters).await
    }

    async fn update_admin(&self, token: &str, admin_id: &str, patch: Value) -> AppResult<String> {
        let envelope = self
            .upstream
            .patch(&format!("/admin/{admin_id}"), Some(patch), Some(token))
            .await?;
        Ok(envelope.message_or("Admin updated"))
    }

    async fn delete_admin(&self, token: &str, admin_id: &str) -> AppResult<String> {
        self.remove(&format!("/admin/{admin_id}"), token, "Admin deleted").await
    }

    async fn users(&self, token: &str, filters: AdminListFilters) -> AppResult<Listing<UserProfile>> {
        self.listing("/admin/users", token, filters).await
    }

    async fn update_user_status(&self, token: &str, user_id: &str, status: String) -> AppResult<String> {
        let envelope = self
            .upstream
            .patch(
                &format!("/admin/users/{user_id}/status"),
                Some(json!({ "status": status })),
                Some(token),
            )
            .await?;
        Ok(envelope.message_or("Status updated"))
    }

    async fn delete_user(&self, token: &str, user_id: &str) -> AppResult<String> {
        self.remove(&format!("/admin/users/{user_id}"), token, "User deleted").await
    }

    async fn hosts(&self, token: &str, filters: AdminListFilters) -> AppResult<Listing<UserProfile>> {
        self.listing("/admin/hosts", token, filters).await
    }

    async fn update_host_status(&self, token: &str, host_id: &str, status: String) -> AppResult<String> {
        let envelope = self
            .upstream
            .patch(
                &format!("/admin/hosts/{host_id}/status"),
                Some(json!({ "status": status })),
                Some(token),
            )
            .await?;
        Ok(envelope.message_or("Status updated"))
    }

    async fn delete_host(&self, token: &str, host_id: &str) -> AppResult<String> {
        self.remove(&format!("/admin/hosts/{host_id}"), token, "Host deleted").await
    }

    async fn pending_host_applications(&self, token: &str) -> AppResult<Vec<HostApplication>> {
        let envelope = self
            .upstream
            .get("/admin/pending-host-applications", &[], Some(token))
            .await?;
        envelope.data_or_default()
    }

    async fn approve_host_application(&self, token: &str, application_id: &str) -> AppResult<String> {
        self.action(&format!("/admin/{application_id}/approve"), token, "Application approved")
            .await
    }

    async fn reject_host_application(&self, token: &str, application_id: &str) -> AppResult<String> {
        self.action(&format!("/admin/{application_id}/reject"), token, "Application rejected")
            .await
    }

    async fn events(&self, token: &str, filters: AdminListFilters) -> AppResult<Listing<Event>> {
        self.listing("/admin/events", token, filters).await
    }

    async fn pending_events(&self, token: &str) -> AppResult<Vec<Event>> {
        let envelope = self
            .upstream
            .get("/admin/events/pending-event-applications", &[], Some(token))
            .await?;
        envelope.data_or_default()
    }

    async fn approve_event(&self, token: &str, event_id: &str) -> AppResult<String> {
        self.action(&format!("/admin/events/{event_id}/approve"), token, "Event approved")
            .await
    }

    async fn reject_event(&self, token: &str, event_id: &str) -> AppResult<String> {
        self.action(&format!("/admin/events/{event_id}/reject"), token, "Event rejected")
            .await
    }

    async fn update_event_status(&self, token: &str, event_id: &str, status: String) -> AppResult<String> {
        let envelope = self
            .upstream
            .patch(
                &format!("/admin/events/{event_id}/status"),
                Some(json!({ "status": status })),
                Some(token),
            )
            .await?;
        Ok(envelope.message_or("Event status updated"))
    }

    async fn delete_event(&self, token: &str, event_id: &str) -> AppResult<String> {
        self.remove(&format!("/admin/events/{event_id}"), token, "Event deleted").await
    }

    async fn dashboard_stats(&self, token: &str) -> AppResult<DashboardStats> {
        let envelope = self.upstream.get("/meta/dashboard-stats", &[], Some(token)).await?;
        envelope.data_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_render_camel_case_query() {
        let filters = AdminListFilters {
            search_term: Some("ada".to_string()),
            page: Some(2),
            sort_by: Some("createdAt".to_string()),
            sort_order: Some("desc".to_string()),
            ..Default::default()
        };

        let query = filters.to_query();
        assert!(query.contains(&("searchTerm".to_string(), "ada".to_string())));
        assert!(query.contains(&("sortBy".to_string(), "createdAt".to_string())));
        assert!(query.contains(&("sortOrder".to_string(), "desc".to_string())));
    }

    #[test]
    fn empty_search_term_is_dropped() {
        let filters = AdminListFilters {
            search_term: Some(String::new()),
            ..Default::default()
        };
        assert!(filters.to_query().is_empty());
    }

    #[test]
    fn oversized_limit_is_capped() {
        let filters = AdminListFilters {
            limit: Some(9999),
            ..Default::default()
        };
        let query = filters.to_query();
        assert!(query.contains(&("limit".to_string(), MAX_PAGE_SIZE.to_string())));
    }
}
