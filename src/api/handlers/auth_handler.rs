//! Authentication handlers.
//!
//! Login and registration forward credentials to the backend; the token
//! it issues becomes an HttpOnly session cookie. Logout only clears the
//! cookie, the token itself stays valid until it expires upstream.

use axum::{
    extract::{Request, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Extension, Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::api::extractors::{parse_json_or_upload, ValidatedJson};
use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::config::{is_valid_interest, Config};
use crate::domain::SessionUser;
use crate::errors::AppResult;
use crate::services::RegisterForm;
use crate::types::ApiResponse;

static CONTACT_NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9]{7,15}$").expect("valid pattern"));

/// User login request
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Client registration request, matching the sign-up form
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
    #[validate(length(min = 5, message = "Bio must be at least 5 characters"))]
    pub bio: String,
    #[validate(regex(path = *CONTACT_NUMBER_RE, message = "Invalid contact number"))]
    pub contact_number: String,
    #[validate(length(min = 2, message = "Location must be at least 2 characters"))]
    pub location: String,
    #[validate(
        length(min = 1, message = "Select at least one interest"),
        custom(function = validate_interests, message = "Unknown interest")
    )]
    pub interests: Vec<String>,
}

fn validate_interests(interests: &[String]) -> Result<(), ValidationError> {
    if interests.iter().all(|i| is_valid_interest(i)) {
        Ok(())
    } else {
        Err(ValidationError::new("interest"))
    }
}

/// Password change request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    #[validate(length(min = 1, message = "Current password is required"))]
    pub old_password: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub new_password: String,
}

/// Create public authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/register", post(register))
        .route("/auth/logout", post(logout))
}

/// Create session routes (behind the auth middleware)
pub fn session_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/me", get(me))
        .route("/auth/change-password", post(change_password))
}

fn session_cookie(config: &Config, token: String) -> Cookie<'static> {
    Cookie::build((config.session_cookie.clone(), token))
        .path("/")
        .http_only(true)
        .secure(config.cookie_secure)
        .same_site(SameSite::Lax)
        .build()
}

/// An expired session cookie. Added (not removed) to the jar so the
/// Set-Cookie header goes out even when the request carried the token in
/// the Authorization header instead of the cookie.
pub(crate) fn removal_cookie(config: &Config) -> Cookie<'static> {
    let mut cookie = Cookie::build((config.session_cookie.clone(), ""))
        .path("/")
        .build();
    cookie.make_removal();
    cookie
}

/// Login and establish a session cookie
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<(CookieJar, Json<ApiResponse<SessionUser>>)> {
    let outcome = state
        .auth_service
        .login(payload.email, payload.password)
        .await?;

    let jar = jar.add(session_cookie(&state.config, outcome.token));
    Ok((
        jar,
        Json(ApiResponse::with_message(outcome.user, "Login successful")),
    ))
}

/// Register a client account and log them straight in.
///
/// Accepts plain JSON or the multipart shape with an optional profile
/// photo under the `file` part.
pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    req: Request,
) -> AppResult<(StatusCode, CookieJar, Json<ApiResponse<SessionUser>>)> {
    let (payload, photo) = parse_json_or_upload::<RegisterRequest>(req).await?;

    let form = RegisterForm {
        password: payload.password,
        name: payload.name,
        email: payload.email,
        bio: payload.bio,
        contact_number: payload.contact_number,
        location: payload.location,
        interests: payload.interests,
    };

    let outcome = state.auth_service.register(form, photo).await?;

    let jar = jar.add(session_cookie(&state.config, outcome.token));
    Ok((
        StatusCode::CREATED,
        jar,
        Json(ApiResponse::with_message(outcome.user, "Welcome aboard")),
    ))
}

/// Clear the session cookie
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<ApiResponse<()>>) {
    let jar = jar.add(removal_cookie(&state.config));
    (jar, Json(ApiResponse::message("Logged out")))
}

/// The logged-in user's session identity
pub async fn me(Extension(current): Extension<CurrentUser>) -> Json<ApiResponse<SessionUser>> {
    Json(ApiResponse::success(current.user))
}

/// Forward a password change for the logged-in user
pub async fn change_password(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    ValidatedJson(payload): ValidatedJson<ChangePasswordRequest>,
) -> AppResult<Json<ApiResponse<()>>> {
    let message = state
        .auth_service
        .change_password(&current.token, payload.old_password, payload.new_password)
        .await?;

    Ok(Json(ApiResponse::message(message)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_number_pattern() {
        assert!(CONTACT_NUMBER_RE.is_match("+8801712345678"));
        assert!(CONTACT_NUMBER_RE.is_match("0171234567"));
        assert!(!CONTACT_NUMBER_RE.is_match("12-34"));
        assert!(!CONTACT_NUMBER_RE.is_match("abc1234567"));
    }

    #[test]
    fn register_request_rejects_unknown_interest() {
        let payload = RegisterRequest {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            password: "secret1".into(),
            bio: "Curious traveller".into(),
            contact_number: "+8801712345678".into(),
            location: "Dhaka".into(),
            interests: vec!["SKYDIVING_ON_MARS".into()],
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn register_request_accepts_valid_form() {
        let payload = RegisterRequest {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            password: "secret1".into(),
            bio: "Curious traveller".into(),
            contact_number: "+8801712345678".into(),
            location: "Dhaka".into(),
            interests: vec!["HIKING".into(), "MUSIC".into()],
        };
        assert!(payload.validate().is_ok());
    }
}
