//! Integration tests for API endpoints.
//!
//! These tests wire the router to hand-written mock services, so every
//! request exercises routing, middleware, extractors, and response
//! shaping without a running upstream API.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use chrono::{Duration, Utc};
use serde_json::Value;
use tower::ServiceExt;

use evently_web::api::{create_router, AppState};
use evently_web::config::Config;
use evently_web::domain::{
    Booking, DashboardStats, DashboardTotals, Event, EventStatus, HomeMeta, HostApplication,
    JoinOutcome, Participation, PaymentRecord, Review, SessionUser, UserProfile, UserRole,
};
use evently_web::errors::{AppError, AppResult};
use evently_web::services::{
    AdminListFilters, AdminService, AuthService, BookingService, EventFilters, EventForm,
    EventPatch, EventService, HostApplicationForm, HostService, Listing, LoginOutcome,
    MetaService, PaymentService, ProfileService, RegisterForm,
};
use evently_web::types::{ListMeta, PaginationParams};
use evently_web::upstream::FilePart;

// =============================================================================
// Mock Services
// =============================================================================

const CLIENT_TOKEN: &str = "client-token";
const HOST_TOKEN: &str = "host-token";
const ADMIN_TOKEN: &str = "admin-token";

fn session_for(token: &str) -> AppResult<SessionUser> {
    let role = match token {
        CLIENT_TOKEN => UserRole::Client,
        HOST_TOKEN => UserRole::Host,
        ADMIN_TOKEN => UserRole::Admin,
        _ => return Err(AppError::Unauthorized),
    };
    Ok(SessionUser {
        id: format!("user-{}", role),
        email: format!("{}@example.com", role).to_lowercase(),
        role,
        dashboard_route: role.dashboard_route(),
    })
}

fn sample_event(id: &str) -> Event {
    Event {
        id: id.to_string(),
        title: "City Hike".to_string(),
        category: "HIKING".to_string(),
        description: "A relaxed morning hike".to_string(),
        date: Utc::now() + Duration::days(7),
        location: "North Trailhead".to_string(),
        joining_fee: 15.0,
        capacity: 30,
        participant_count: 12,
        status: EventStatus::Open,
        image: None,
        host: None,
    }
}

struct MockAuthService;

#[async_trait]
impl AuthService for MockAuthService {
    async fn login(&self, email: String, password: String) -> AppResult<LoginOutcome> {
        if password == "wrong" {
            return Err(AppError::upstream(401, Some("Invalid credentials".into())));
        }
        let token = match email.as_str() {
            "host@example.com" => HOST_TOKEN,
            "admin@example.com" => ADMIN_TOKEN,
            _ => CLIENT_TOKEN,
        };
        Ok(LoginOutcome {
            token: token.to_string(),
            user: session_for(token)?,
        })
    }

    async fn register(
        &self,
        _form: RegisterForm,
        _photo: Option<FilePart>,
    ) -> AppResult<LoginOutcome> {
        Ok(LoginOutcome {
            token: CLIENT_TOKEN.to_string(),
            user: session_for(CLIENT_TOKEN)?,
        })
    }

    async fn change_password(
        &self,
        _token: &str,
        _old_password: String,
        _new_password: String,
    ) -> AppResult<String> {
        Ok("Password changed successfully".to_string())
    }

    fn verify_session(&self, token: &str) -> AppResult<SessionUser> {
        session_for(token)
    }
}

struct MockEventService;

#[async_trait]
impl EventService for MockEventService {
    async fn list(&self, _filters: EventFilters) -> AppResult<(Vec<Event>, Option<ListMeta>)> {
        let meta = ListMeta {
            page: Some(1),
            limit: Some(10),
            total: Some(1),
            pages: Some(1),
        };
        Ok((vec![sample_event("evt-1")], Some(meta)))
    }

    async fn get(&self, event_id: &str) -> AppResult<Event> {
        if event_id == "missing" {
            return Err(AppError::NotFound);
        }
        Ok(sample_event(event_id))
    }

    async fn reviews(&self, _event_id: &str) -> AppResult<Vec<Review>> {
        Ok(vec![])
    }

    async fn create_review(
        &self,
        _token: &str,
        _event_id: &str,
        _rating: u8,
        _comment: String,
    ) -> AppResult<String> {
        Ok("Review submitted".to_string())
    }
}

struct MockBookingService;

#[async_trait]
impl BookingService for MockBookingService {
    async fn join(&self, _token: &str, _event_id: &str) -> AppResult<JoinOutcome> {
        Ok(JoinOutcome {
            payment_url: Some("https://pay.example/tx/1".to_string()),
            message: None,
        })
    }

    async fn leave(&self, _token: &str, _event_id: &str) -> AppResult<String> {
        Ok("You have left the event".to_string())
    }

    async fn participation(&self, _token: &str, _event_id: &str) -> AppResult<Participation> {
        Ok(Participation { is_joined: true })
    }

    async fn my_bookings(&self, _token: &str) -> AppResult<Vec<Booking>> {
        Ok(vec![])
    }
}

struct MockHostService;

#[async_trait]
impl HostService for MockHostService {
    async fn my_events(
        &self,
        _token: &str,
        _filters: EventFilters,
    ) -> AppResult<(Vec<Event>, Option<ListMeta>)> {
        Ok((vec![sample_event("evt-host-1")], None))
    }

    async fn create_event(
        &self,
        _token: &str,
        form: EventForm,
        _image: Option<FilePart>,
    ) -> AppResult<Event> {
        let mut event = sample_event("evt-new");
        event.title = form.title;
        event.status = EventStatus::Pending;
        Ok(event)
    }

    async fn update_event(
        &self,
        _token: &str,
        event_id: &str,
        _patch: EventPatch,
        _image: Option<FilePart>,
    ) -> AppResult<Event> {
        Ok(sample_event(event_id))
    }

    async fn delete_event(&self, _token: &str, _event_id: &str) -> AppResult<String> {
        Ok("Event deleted".to_string())
    }
}

struct MockProfileService;

#[async_trait]
impl ProfileService for MockProfileService {
    async fn profile(&self, user_id: &str) -> AppResult<UserProfile> {
        Ok(UserProfile {
            id: user_id.to_string(),
            name: "Ada".to_string(),
            email: None,
            role: Some(UserRole::Client),
            status: None,
            bio: None,
            profile_photo: None,
            contact_number: None,
            location: None,
            interests: vec![],
            created_at: None,
        })
    }

    async fn hosted_events(&self, _user_id: &str) -> AppResult<Vec<Event>> {
        Ok(vec![])
    }

    async fn joined_events(&self, _user_id: &str) -> AppResult<Vec<Event>> {
        Ok(vec![])
    }

    async fn apply_host(&self, _token: &str, _form: HostApplicationForm) -> AppResult<String> {
        Ok("Host application submitted".to_string())
    }

    async fn application_status(&self, _token: &str) -> AppResult<Option<HostApplication>> {
        Ok(None)
    }
}

struct MockAdminService;

#[async_trait]
impl AdminService for MockAdminService {
    async fn admins(
        &self,
        _token: &str,
        _filters: AdminListFilters,
    ) -> AppResult<Listing<UserProfile>> {
        Ok((vec![], None))
    }

    async fn update_admin(&self, _token: &str, _id: &str, _patch: Value) -> AppResult<String> {
        Ok("Admin updated".to_string())
    }

    async fn delete_admin(&self, _token: &str, _id: &str) -> AppResult<String> {
        Ok("Admin deleted".to_string())
    }

    async fn users(
        &self,
        _token: &str,
        _filters: AdminListFilters,
    ) -> AppResult<Listing<UserProfile>> {
        Ok((vec![], None))
    }

    async fn update_user_status(
        &self,
        _token: &str,
        _id: &str,
        status: String,
    ) -> AppResult<String> {
        Ok(format!("Status updated to {}", status))
    }

    async fn delete_user(&self, _token: &str, _id: &str) -> AppResult<String> {
        Ok("User deleted".to_string())
    }

    async fn hosts(
        &self,
        _token: &str,
        _filters: AdminListFilters,
    ) -> AppResult<Listing<UserProfile>> {
        Ok((vec![], None))
    }

    async fn update_host_status(
        &self,
        _token: &str,
        _id: &str,
        status: String,
    ) -> AppResult<String> {
        Ok(format!("Status updated to {}", status))
    }

    async fn delete_host(&self, _token: &str, _id: &str) -> AppResult<String> {
        Ok("Host deleted".to_string())
    }

    async fn pending_host_applications(&self, _token: &str) -> AppResult<Vec<HostApplication>> {
        Ok(vec![])
    }

    async fn approve_host_application(&self, _token: &str, _id: &str) -> AppResult<String> {
        Ok("Application approved".to_string())
    }

    async fn reject_host_application(&self, _token: &str, _id: &str) -> AppResult<String> {
        Ok("Application rejected".to_string())
    }

    async fn events(
        &self,
        _token: &str,
        _filters: AdminListFilters,
    ) -> AppResult<Listing<Event>> {
        Ok((vec![sample_event("evt-1")], None))
    }

    async fn pending_events(&self, _token: &str) -> AppResult<Vec<Event>> {
        Ok(vec![])
    }

    async fn approve_event(&self, _token: &str, _id: &str) -> AppResult<String> {
        Ok("Event approved".to_string())
    }

    async fn reject_event(&self, _token: &str, _id: &str) -> AppResult<String> {
        Ok("Event rejected".to_string())
    }

    async fn update_event_status(
        &self,
        _token: &str,
        _id: &str,
        status: String,
    ) -> AppResult<String> {
        Ok(format!("Event status updated to {}", status))
    }

    async fn delete_event(&self, _token: &str, _id: &str) -> AppResult<String> {
        Ok("Event deleted".to_string())
    }

    async fn dashboard_stats(&self, _token: &str) -> AppResult<DashboardStats> {
        Ok(DashboardStats {
            totals: DashboardTotals {
                users: 110,
                clients: 100,
                hosts: 10,
                events: 4,
                ..Default::default()
            },
            success_count: 3,
            ..Default::default()
        })
    }
}

struct MockPaymentService;

#[async_trait]
impl PaymentService for MockPaymentService {
    async fn history(
        &self,
        _token: &str,
        _params: PaginationParams,
        _status: Option<String>,
    ) -> AppResult<(Vec<PaymentRecord>, Option<ListMeta>)> {
        Ok((vec![], None))
    }
}

struct MockMetaService;

#[async_trait]
impl MetaService for MockMetaService {
    async fn home(&self) -> AppResult<HomeMeta> {
        Ok(HomeMeta {
            total_events: 42,
            total_hosts: 7,
            total_clients: 100,
            featured_events: vec![],
        })
    }
}

// =============================================================================
// Test Helpers
// =============================================================================

fn test_config() -> Config {
    Config {
        upstream_url: "http://localhost:5000/api/v1".to_string(),
        upstream_timeout_seconds: 5,
        server_host: "127.0.0.1".to_string(),
        server_port: 0,
        session_cookie: "accessToken".to_string(),
        cookie_secure: false,
    }
}

fn test_app() -> Router {
    let state = AppState::new(
        Arc::new(MockAuthService),
        Arc::new(MockEventService),
        Arc::new(MockBookingService),
        Arc::new(MockHostService),
        Arc::new(MockProfileService),
        Arc::new(MockAdminService),
        Arc::new(MockPaymentService),
        Arc::new(MockMetaService),
        test_config(),
    );
    create_router(state)
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn get_with_token(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

fn post_json(uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

// =============================================================================
// Public Routes
// =============================================================================

#[tokio::test]
async fn root_answers() {
    let response = test_app().oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn health_reports_upstream_reachable() {
    let response = test_app().oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["upstream"]["status"], "healthy");
}

#[tokio::test]
async fn event_listing_is_public_and_paginated() {
    let response = test_app().oneshot(get("/events?category=hiking")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"][0]["id"], "evt-1");
    assert_eq!(json["meta"]["total"], 1);
}

#[tokio::test]
async fn missing_event_answers_404_with_toast_body() {
    let response = test_app().oneshot(get("/events/missing")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["code"], "NOT_FOUND");
}

#[tokio::test]
async fn event_page_bundles_detail_and_reviews() {
    let response = test_app().oneshot(get("/events/evt-1/page")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["event"]["id"], "evt-1");
    assert!(json["data"]["reviews"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn event_page_offers_the_join_action_to_anonymous_viewers() {
    let response = test_app().oneshot(get("/events/evt-1/page")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["badge"]["label"], "OPEN");
    assert_eq!(json["data"]["badge"]["tone"], "green");
    assert_eq!(json["data"]["viewer"]["joined"], false);
    assert_eq!(json["data"]["viewer"]["canJoin"], true);
    assert_eq!(json["data"]["viewer"]["upcoming"], true);
    assert!(json["data"]["viewer"].get("joinDisabledReason").is_none());
}

#[tokio::test]
async fn event_page_disables_join_for_a_participant() {
    let response = test_app()
        .oneshot(get_with_token("/events/evt-1/page", CLIENT_TOKEN))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["viewer"]["joined"], true);
    assert_eq!(json["data"]["viewer"]["canJoin"], false);
    assert_eq!(
        json["data"]["viewer"]["joinDisabledReason"],
        "You have already joined this event"
    );
}

#[tokio::test]
async fn home_meta_is_public() {
    let response = test_app().oneshot(get("/meta/home")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["totalEvents"], 42);
}

// =============================================================================
// Authentication
// =============================================================================

#[tokio::test]
async fn login_sets_session_cookie_and_returns_dashboard_route() {
    let request = post_json(
        "/auth/login",
        None,
        serde_json::json!({"email": "host@example.com", "password": "secret1"}),
    );
    let response = test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .to_string();
    assert!(set_cookie.starts_with("accessToken=host-token"));
    assert!(set_cookie.contains("HttpOnly"));

    let json = body_json(response).await;
    assert_eq!(json["data"]["role"], "HOST");
    assert_eq!(json["data"]["dashboardRoute"], "/host/dashboard");
}

#[tokio::test]
async fn login_with_bad_email_is_rejected_before_forwarding() {
    let request = post_json(
        "/auth/login",
        None,
        serde_json::json!({"email": "not-an-email", "password": "secret1"}),
    );
    let response = test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn upstream_credential_rejection_surfaces_as_401() {
    let request = post_json(
        "/auth/login",
        None,
        serde_json::json!({"email": "ada@example.com", "password": "wrong"}),
    );
    let response = test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Invalid credentials");
}

#[tokio::test]
async fn session_cookie_authenticates_requests() {
    let request = Request::builder()
        .uri("/auth/me")
        .header(header::COOKIE, format!("accessToken={}", CLIENT_TOKEN))
        .body(Body::empty())
        .unwrap();
    let response = test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["role"], "CLIENT");
}

#[tokio::test]
async fn logout_clears_the_session_cookie() {
    let request = Request::builder()
        .method("POST")
        .uri("/auth/logout")
        .header(header::COOKIE, format!("accessToken={}", CLIENT_TOKEN))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{}"))
        .unwrap();
    let response = test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap();
    assert!(set_cookie.starts_with("accessToken=;"));
    assert!(set_cookie.contains("Max-Age=0"));
}

#[tokio::test]
async fn logout_without_a_cookie_still_expires_the_session() {
    let response = test_app()
        .oneshot(post_json("/auth/logout", None, serde_json::json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap();
    assert!(set_cookie.starts_with("accessToken=;"));
    assert!(set_cookie.contains("Max-Age=0"));
}

#[tokio::test]
async fn host_application_expires_a_header_authenticated_session() {
    let response = test_app()
        .oneshot(post_json(
            "/me/host-application",
            Some(CLIENT_TOKEN),
            serde_json::json!({"bio": "Seasoned trail guide", "location": "Dhaka"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap();
    assert!(set_cookie.starts_with("accessToken=;"));
    assert!(set_cookie.contains("Max-Age=0"));
}

// =============================================================================
// Role Gates
// =============================================================================

#[tokio::test]
async fn protected_routes_require_a_session() {
    let response = test_app().oneshot(get("/me/bookings")).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn garbage_token_answers_401_not_500() {
    let response = test_app()
        .oneshot(get_with_token("/me/bookings", "garbage"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn clients_cannot_reach_host_routes() {
    let response = test_app()
        .oneshot(get_with_token("/host/events", CLIENT_TOKEN))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn hosts_reach_their_event_listing() {
    let response = test_app()
        .oneshot(get_with_token("/host/events", HOST_TOKEN))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"][0]["id"], "evt-host-1");
    assert_eq!(json["data"][0]["badge"]["label"], "OPEN");
    assert_eq!(json["data"][0]["editable"], true);
    assert_eq!(json["data"][0]["cancellable"], true);
}

#[tokio::test]
async fn hosts_cannot_reach_admin_routes() {
    let response = test_app()
        .oneshot(get_with_token("/admin/stats", HOST_TOKEN))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn admins_reach_the_dashboard_stats() {
    let response = test_app()
        .oneshot(get_with_token("/admin/stats", ADMIN_TOKEN))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["totals"]["events"], 4);
    assert_eq!(json["data"]["successPercentage"], 75);
}

// =============================================================================
// Bookings and Reviews
// =============================================================================

#[tokio::test]
async fn joining_a_paid_event_returns_the_payment_redirect() {
    let response = test_app()
        .oneshot(post_json(
            "/events/evt-1/join",
            Some(CLIENT_TOKEN),
            serde_json::json!({}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["paymentUrl"], "https://pay.example/tx/1");
}

#[tokio::test]
async fn review_submission_requires_a_session() {
    let request = post_json(
        "/events/evt-1/reviews",
        None,
        serde_json::json!({"rating": 5, "comment": "Great"}),
    );
    let response = test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn out_of_range_rating_is_rejected() {
    let request = post_json(
        "/events/evt-1/reviews",
        Some(CLIENT_TOKEN),
        serde_json::json!({"rating": 9, "comment": "Great"}),
    );
    let response = test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn review_listing_stays_public_next_to_gated_submission() {
    let response = test_app().oneshot(get("/events/evt-1/reviews")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

// =============================================================================
// Host Event Management
// =============================================================================

#[tokio::test]
async fn host_creates_an_event_from_json() {
    let request = post_json(
        "/host/events",
        Some(HOST_TOKEN),
        serde_json::json!({
            "title": "Jazz Night",
            "category": "MUSIC",
            "description": "Live trio downtown",
            "date": (Utc::now() + Duration::days(14)).to_rfc3339(),
            "location": "Blue Note",
            "joiningFee": 25.0,
            "capacity": 80
        }),
    );
    let response = test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["data"]["title"], "Jazz Night");
    assert_eq!(json["data"]["status"], "PENDING");
}

#[tokio::test]
async fn unknown_category_is_rejected_at_the_edge() {
    let request = post_json(
        "/host/events",
        Some(HOST_TOKEN),
        serde_json::json!({
            "title": "Jazz Night",
            "category": "TIME_TRAVEL",
            "description": "Live trio downtown",
            "date": (Utc::now() + Duration::days(14)).to_rfc3339(),
            "location": "Blue Note",
            "joiningFee": 25.0,
            "capacity": 80
        }),
    );
    let response = test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// =============================================================================
// Admin Moderation
// =============================================================================

#[tokio::test]
async fn admin_updates_account_status_with_known_vocabulary() {
    let request = Request::builder()
        .method("PATCH")
        .uri("/admin/users/u-1/status")
        .header(header::AUTHORIZATION, format!("Bearer {}", ADMIN_TOKEN))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"status": "SUSPENDED"}"#))
        .unwrap();
    let response = test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Status updated to SUSPENDED");
}

#[tokio::test]
async fn admin_account_status_outside_vocabulary_is_rejected() {
    let request = Request::builder()
        .method("PATCH")
        .uri("/admin/users/u-1/status")
        .header(header::AUTHORIZATION, format!("Bearer {}", ADMIN_TOKEN))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"status": "BANNED"}"#))
        .unwrap();
    let response = test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
