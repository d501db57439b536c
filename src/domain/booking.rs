//! Booking records: a client's participation in events.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::event::Event;

/// A booking as returned by the upstream my-bookings listing.
///
/// The upstream embeds the full event so the bookings page can render
/// badges and dates without extra round trips.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub joined_at: Option<DateTime<Utc>>,
    pub event: Event,
}

/// Whether the current viewer has joined a given event
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participation {
    #[serde(default)]
    pub is_joined: bool,
}

/// Outcome of a join request. When the event has a joining fee the backend
/// answers with a payment redirect URL instead of an immediate confirmation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinOutcome {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
