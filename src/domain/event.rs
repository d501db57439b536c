//! Event domain records and display-side rules.
//!
//! Events are mirrored from upstream API responses. The backend owns the
//! event lifecycle; everything here only decides how an event is presented
//! and which actions the UI offers. None of these checks are authoritative:
//! the upstream re-validates every mutation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Event lifecycle status, set exclusively by the backend.
///
/// `Unknown` absorbs values added upstream later so a single new status
/// cannot break deserialization of whole listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventStatus {
    Pending,
    Open,
    Full,
    Rejected,
    Cancelled,
    Completed,
    #[serde(other)]
    Unknown,
}

/// Visual tone for a status badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeTone {
    Yellow,
    Green,
    Orange,
    Red,
    Gray,
    Blue,
}

/// Label + tone pair rendered as a status badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusBadge {
    pub label: &'static str,
    pub tone: BadgeTone,
}

impl EventStatus {
    /// Map a status to its badge presentation
    pub fn badge(&self) -> StatusBadge {
        match self {
            EventStatus::Pending => StatusBadge { label: "PENDING", tone: BadgeTone::Yellow },
            EventStatus::Open => StatusBadge { label: "OPEN", tone: BadgeTone::Green },
            EventStatus::Full => StatusBadge { label: "FULL", tone: BadgeTone::Orange },
            EventStatus::Rejected => StatusBadge { label: "REJECTED", tone: BadgeTone::Red },
            EventStatus::Cancelled => StatusBadge { label: "CANCELLED", tone: BadgeTone::Gray },
            EventStatus::Completed => StatusBadge { label: "COMPLETED", tone: BadgeTone::Blue },
            EventStatus::Unknown => StatusBadge { label: "UNKNOWN", tone: BadgeTone::Gray },
        }
    }
}

impl std::fmt::Display for EventStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.badge().label)
    }
}

/// Host summary embedded in event responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventHost {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Event record mirrored from the upstream API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    pub date: DateTime<Utc>,
    pub location: String,
    #[serde(default)]
    pub joining_fee: f64,
    pub capacity: u32,
    #[serde(default)]
    pub participant_count: u32,
    pub status: EventStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<EventHost>,
}

/// Why the join action is disabled for the current viewer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JoinRefusal {
    AlreadyJoined,
    NotOpen,
    AtCapacity,
}

impl JoinRefusal {
    /// Message shown next to the disabled button
    pub fn message(&self) -> &'static str {
        match self {
            JoinRefusal::AlreadyJoined => "You have already joined this event",
            JoinRefusal::NotOpen => "This event is not open for registration",
            JoinRefusal::AtCapacity => "This event is full",
        }
    }
}

impl Event {
    /// Whether the event has reached its participant capacity
    pub fn is_full(&self) -> bool {
        self.participant_count >= self.capacity
    }

    /// Whether the event date is still ahead of `now`
    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        self.date > now
    }

    /// Why the viewer cannot join, or `None` when the join action is enabled.
    ///
    /// Join requires: status OPEN, free capacity, and not already joined.
    pub fn join_refusal(&self, already_joined: bool) -> Option<JoinRefusal> {
        if already_joined {
            return Some(JoinRefusal::AlreadyJoined);
        }
        if self.status != EventStatus::Open {
            return Some(JoinRefusal::NotOpen);
        }
        if self.is_full() {
            return Some(JoinRefusal::AtCapacity);
        }
        None
    }

    /// Whether the join action is enabled for the viewer
    pub fn can_join(&self, already_joined: bool) -> bool {
        self.join_refusal(already_joined).is_none()
    }

    /// Whether the owning host may still edit the event
    pub fn editable_by_host(&self) -> bool {
        matches!(self.status, EventStatus::Pending | EventStatus::Open)
    }

    /// Whether the cancel action is offered to the owning host
    pub fn cancellable(&self) -> bool {
        matches!(self.status, EventStatus::Pending | EventStatus::Open)
    }

    /// Reviews are only accepted for completed events
    pub fn reviewable(&self) -> bool {
        self.status == EventStatus::Completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn sample_event(status: EventStatus, capacity: u32, participants: u32) -> Event {
        Event {
            id: "evt-1".to_string(),
            title: "City Hike".to_string(),
            category: "HIKING".to_string(),
            description: "A relaxed morning hike".to_string(),
            date: Utc::now() + Duration::days(7),
            location: "North Trailhead".to_string(),
            joining_fee: 15.0,
            capacity,
            participant_count: participants,
            status,
            image: None,
            host: None,
        }
    }

    #[test]
    fn status_parses_from_screaming_snake_case() {
        let status: EventStatus = serde_json::from_str("\"CANCELLED\"").unwrap();
        assert_eq!(status, EventStatus::Cancelled);
    }

    #[test]
    fn unknown_status_does_not_fail_deserialization() {
        let status: EventStatus = serde_json::from_str("\"ARCHIVED\"").unwrap();
        assert_eq!(status, EventStatus::Unknown);
    }

    #[test]
    fn badge_mapping_matches_design() {
        assert_eq!(EventStatus::Pending.badge().tone, BadgeTone::Yellow);
        assert_eq!(EventStatus::Open.badge().tone, BadgeTone::Green);
        assert_eq!(EventStatus::Full.badge().tone, BadgeTone::Orange);
        assert_eq!(EventStatus::Rejected.badge().tone, BadgeTone::Red);
        assert_eq!(EventStatus::Cancelled.badge().tone, BadgeTone::Gray);
        assert_eq!(EventStatus::Completed.badge().tone, BadgeTone::Blue);
    }

    #[test]
    fn open_event_with_capacity_is_joinable() {
        let event = sample_event(EventStatus::Open, 10, 3);
        assert!(event.can_join(false));
    }

    #[test]
    fn join_disabled_when_already_joined() {
        let event = sample_event(EventStatus::Open, 10, 3);
        assert_eq!(event.join_refusal(true), Some(JoinRefusal::AlreadyJoined));
    }

    #[test]
    fn join_disabled_when_not_open() {
        for status in [
            EventStatus::Pending,
            EventStatus::Full,
            EventStatus::Rejected,
            EventStatus::Cancelled,
            EventStatus::Completed,
        ] {
            let event = sample_event(status, 10, 0);
            assert_eq!(event.join_refusal(false), Some(JoinRefusal::NotOpen));
        }
    }

    #[test]
    fn join_disabled_at_capacity() {
        let event = sample_event(EventStatus::Open, 5, 5);
        assert_eq!(event.join_refusal(false), Some(JoinRefusal::AtCapacity));
    }

    #[test]
    fn open_event_at_zero_participants_can_be_cancelled() {
        let event = sample_event(EventStatus::Open, 20, 0);
        assert!(event.cancellable());
    }

    #[test]
    fn completed_event_cannot_be_cancelled_but_can_be_reviewed() {
        let event = sample_event(EventStatus::Completed, 20, 18);
        assert!(!event.cancellable());
        assert!(event.reviewable());
    }

    #[test]
    fn event_deserializes_from_upstream_shape() {
        let json = r#"{
            "id": "evt-9",
            "title": "Jazz Night",
            "category": "MUSIC",
            "description": "Live trio",
            "date": "2026-10-01T19:00:00Z",
            "location": "Blue Note",
            "joiningFee": 25.5,
            "capacity": 80,
            "participantCount": 42,
            "status": "OPEN",
            "host": {"id": "u-1", "name": "Ada"}
        }"#;

        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.participant_count, 42);
        assert_eq!(event.status, EventStatus::Open);
        assert_eq!(event.host.unwrap().name.as_deref(), Some("Ada"));
    }
}
