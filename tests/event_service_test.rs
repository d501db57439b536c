//! Event and booking service unit tests against a mocked upstream.

use std::sync::Arc;

use serde_json::json;

use evently_web::errors::AppError;
use evently_web::services::{
    BookingGateway, BookingService, EventFilters, EventGateway, EventService,
};
use evently_web::upstream::{Envelope, MockUpstream};

fn envelope_from(value: serde_json::Value) -> Envelope {
    serde_json::from_value(value).unwrap()
}

#[tokio::test]
async fn listing_parses_events_and_meta() {
    let mut upstream = MockUpstream::new();
    upstream
        .expect_get()
        .withf(|path, query, token| {
            path == "/hosts"
                && query.contains(&("category".to_string(), "HIKING".to_string()))
                && token.is_none()
        })
        .returning(|_, _, _| {
            Ok(envelope_from(json!({
                "success": true,
                "data": [{
                    "id": "evt-1",
                    "title": "City Hike",
                    "category": "HIKING",
                    "date": "2026-09-01T09:00:00Z",
                    "location": "North Trailhead",
                    "capacity": 30,
                    "status": "OPEN"
                }],
                "meta": {"page": 1, "limit": 10, "total": 1}
            })))
        });

    let service = EventGateway::new(Arc::new(upstream));
    let filters = EventFilters {
        category: Some("hiking".to_string()),
        ..Default::default()
    };

    let (events, meta) = service.list(filters).await.unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, "evt-1");
    assert_eq!(meta.unwrap().total, Some(1));
}

#[tokio::test]
async fn listing_tolerates_missing_data() {
    let mut upstream = MockUpstream::new();
    upstream
        .expect_get()
        .returning(|_, _, _| Ok(envelope_from(json!({"success": true}))));

    let service = EventGateway::new(Arc::new(upstream));
    let (events, meta) = service.list(EventFilters::default()).await.unwrap();
    assert!(events.is_empty());
    assert!(meta.is_none());
}

#[tokio::test]
async fn event_lookup_forwards_the_path() {
    let mut upstream = MockUpstream::new();
    upstream
        .expect_get()
        .withf(|path, _, _| path == "/hosts/evt-7")
        .returning(|_, _, _| {
            Ok(envelope_from(json!({
                "success": true,
                "data": {
                    "id": "evt-7",
                    "title": "Jazz Night",
                    "category": "MUSIC",
                    "date": "2026-09-01T20:00:00Z",
                    "location": "Blue Note",
                    "capacity": 80,
                    "status": "OPEN"
                }
            })))
        });

    let service = EventGateway::new(Arc::new(upstream));
    let event = service.get("evt-7").await.unwrap();
    assert_eq!(event.title, "Jazz Night");
}

#[tokio::test]
async fn review_submission_carries_the_token_and_body() {
    let mut upstream = MockUpstream::new();
    upstream
        .expect_post()
        .withf(|path, body, token| {
            path == "/review/evt-1/reviews"
                && body.as_ref().map(|b| b["rating"] == 5).unwrap_or(false)
                && token == &Some("tok")
        })
        .returning(|_, _, _| {
            Ok(envelope_from(json!({
                "success": true,
                "message": "Review created"
            })))
        });

    let service = EventGateway::new(Arc::new(upstream));
    let message = service
        .create_review("tok", "evt-1", 5, "Great".to_string())
        .await
        .unwrap();
    assert_eq!(message, "Review created");
}

#[tokio::test]
async fn join_merges_the_envelope_message() {
    let mut upstream = MockUpstream::new();
    upstream
        .expect_post()
        .withf(|path, body, _| path == "/events/evt-1/join" && body.is_none())
        .returning(|_, _, _| {
            Ok(envelope_from(json!({
                "success": true,
                "message": "Joined successfully",
                "data": {}
            })))
        });

    let service = BookingGateway::new(Arc::new(upstream));
    let outcome = service.join("tok", "evt-1").await.unwrap();
    assert_eq!(outcome.message.as_deref(), Some("Joined successfully"));
    assert!(outcome.payment_url.is_none());
}

#[tokio::test]
async fn join_surfaces_the_payment_redirect() {
    let mut upstream = MockUpstream::new();
    upstream.expect_post().returning(|_, _, _| {
        Ok(envelope_from(json!({
            "success": true,
            "data": {"paymentUrl": "https://pay.example/tx/9"}
        })))
    });

    let service = BookingGateway::new(Arc::new(upstream));
    let outcome = service.join("tok", "evt-1").await.unwrap();
    assert_eq!(
        outcome.payment_url.as_deref(),
        Some("https://pay.example/tx/9")
    );
}

#[tokio::test]
async fn join_rejection_propagates_the_backend_message() {
    let mut upstream = MockUpstream::new();
    upstream.expect_post().returning(|_, _, _| {
        Err(AppError::upstream(
            409,
            Some("You have already joined this event".to_string()),
        ))
    });

    let service = BookingGateway::new(Arc::new(upstream));
    let err = service.join("tok", "evt-1").await.unwrap_err();
    assert!(matches!(err, AppError::Upstream { status: 409, .. }));
}

#[tokio::test]
async fn participation_errors_read_as_not_joined() {
    let mut upstream = MockUpstream::new();
    upstream
        .expect_get()
        .withf(|path, _, token| path == "/events/evt-1/participation-status" && token == &Some("tok"))
        .returning(|_, _, _| Err(AppError::upstream(404, None)));

    let service = BookingGateway::new(Arc::new(upstream));
    let participation = service.participation("tok", "evt-1").await.unwrap();
    assert!(!participation.is_joined);
}
