//! Aggregate metadata records for the home page and the admin overview.

use serde::{Deserialize, Serialize};

use super::event::Event;

/// Home page metadata: headline counts plus featured events
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeMeta {
    #[serde(default)]
    pub total_events: u64,
    #[serde(default)]
    pub total_hosts: u64,
    #[serde(default)]
    pub total_clients: u64,
    #[serde(default)]
    pub featured_events: Vec<Event>,
}

/// Totals block of the admin dashboard overview
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardTotals {
    #[serde(default)]
    pub users: u64,
    #[serde(default)]
    pub clients: u64,
    #[serde(default)]
    pub hosts: u64,
    #[serde(default)]
    pub events: u64,
    #[serde(default)]
    pub revenue: f64,
    #[serde(default)]
    pub paid_payments: u64,
    #[serde(default)]
    pub pending_host_applications: u64,
}

/// Admin dashboard overview mirrored from the upstream API
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[serde(default)]
    pub totals: DashboardTotals,
    /// Events that ran to completion
    #[serde(default)]
    pub success_count: u64,
    /// Event counts keyed by status label
    #[serde(default)]
    pub events_by_status: std::collections::HashMap<String, u64>,
}

impl DashboardStats {
    /// Share of events that completed, rounded to whole percent.
    /// Returns 0 when there are no events yet.
    pub fn success_percentage(&self) -> u64 {
        if self.totals.events == 0 {
            return 0;
        }
        (self.success_count * 100 + self.totals.events / 2) / self.totals.events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_percentage_handles_zero_events() {
        let stats = DashboardStats::default();
        assert_eq!(stats.success_percentage(), 0);
    }

    #[test]
    fn success_percentage_rounds() {
        let stats = DashboardStats {
            totals: DashboardTotals { events: 3, ..Default::default() },
            success_count: 2,
            ..Default::default()
        };
        assert_eq!(stats.success_percentage(), 67);
    }
}
