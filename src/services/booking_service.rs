//! Booking service - a client's participation in events.
//!
//! Join, leave, participation lookup, and the my-bookings listing. The
//! backend does the participant accounting and payment initiation; a join
//! reply may carry a payment redirect URL instead of a confirmation.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{Booking, JoinOutcome, Participation};
use crate::errors::AppResult;
use crate::upstream::Upstream;

/// Booking service trait for dependency injection.
#[async_trait]
pub trait BookingService: Send + Sync {
    /// Join an event. Paid events answer with a payment redirect URL.
    async fn join(&self, token: &str, event_id: &str) -> AppResult<JoinOutcome>;

    /// Leave an event; returns the backend's message
    async fn leave(&self, token: &str, event_id: &str) -> AppResult<String>;

    /// Whether the current user has joined the event
    async fn participation(&self, token: &str, event_id: &str) -> AppResult<Participation>;

    /// The current user's bookings
    async fn my_bookings(&self, token: &str) -> AppResult<Vec<Booking>>;
}

/// Concrete implementation forwarding to the upstream API.
pub struct BookingGateway {
    upstream: Arc<dyn Upstream>,
}

impl BookingGateway {
    pub fn new(upstream: Arc<dyn Upstream>) -> Self {
        Self { upstream }
    }
}

#[async_trait]
impl BookingService for BookingGateway {
    async fn join(&self, token: &str, event_id: &str) -> AppResult<JoinOutcome> {
        let envelope = self
            .upstream
            .post(&format!("/events/{event_id}/join"), None, Some(token))
            .await?;

        let mut outcome: JoinOutcome = envelope.data_or_default()?;
        if outcome.message.is_none() {
            outcome.message = envelope.message;
        }
        Ok(outcome)
    }

    async fn leave(&self, token: &str, event_id: &str) -> AppResult<String> {
        let envelope = self
            .upstream
            .post(&format!("/events/{event_id}/leave"), None, Some(token))
            .await?;

        Ok(envelope.message_or("You have left the event"))
    }

    async fn participation(&self, token: &str, event_id: &str) -> AppResult<Participation> {
        // An error here (e.g. older backends without the endpoint) is
        // treated as "not joined" rather than failing the page.
        match self
            .upstream
            .get(&format!("/events/{event_id}/participation-status"), &[], Some(token))
            .await
        {
            Ok(envelope) => envelope.data_or_default(),
            Err(_) => Ok(Participation::default()),
        }
    }

    async fn my_bookings(&self, token: &str) -> AppResult<Vec<Booking>> {
        let envelope = self.upstream.get("/events/my-bookings", &[], Some(token)).await?;
        envelope.data_or_default()
    }
}
