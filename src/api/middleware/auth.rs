//! Session authentication middleware.
//!
//! The access token is issued by the backend and carried either in the
//! session cookie (browser) or the Authorization header (programmatic).
//! We decode its claims for routing and role gates; authorization proper
//! happens upstream on every forwarded call.

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;

use crate::api::AppState;
use crate::config::BEARER_TOKEN_PREFIX;
use crate::domain::{SessionUser, UserRole};
use crate::errors::AppError;

/// Authenticated user extracted from the access token
#[derive(Clone, Debug)]
pub struct CurrentUser {
    pub user: SessionUser,
    /// The raw token, forwarded to the backend with every call
    pub token: String,
}

impl CurrentUser {
    pub fn is_admin(&self) -> bool {
        self.user.role == UserRole::Admin
    }

    pub fn is_host(&self) -> bool {
        self.user.role == UserRole::Host
    }
}

/// Pull the access token from the Authorization header or the session cookie.
///
/// Also used by public handlers that render viewer-specific data when a
/// session happens to be present.
pub fn session_token(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    if let Some(header) = headers.get(AUTHORIZATION).and_then(|h| h.to_str().ok()) {
        if let Some(token) = header.strip_prefix(BEARER_TOKEN_PREFIX) {
            return Some(token.to_string());
        }
    }

    let jar = CookieJar::from_headers(headers);
    jar.get(cookie_name).map(|c| c.value().to_string())
}

/// Session authentication middleware.
///
/// Decodes the access token and injects the CurrentUser into the request
/// extensions. Missing, malformed, and expired tokens all answer 401.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = session_token(request.headers(), &state.config.session_cookie)
        .ok_or(AppError::Unauthorized)?;

    let user = state.auth_service.verify_session(&token)?;

    request.extensions_mut().insert(CurrentUser { user, token });

    Ok(next.run(request).await)
}

/// Role gate for host-only routes. Admins pass too.
pub async fn require_host(request: Request, next: Next) -> Result<Response, AppError> {
    let user = request
        .extensions()
        .get::<CurrentUser>()
        .ok_or(AppError::Unauthorized)?;

    if user.is_host() || user.is_admin() {
        Ok(next.run(request).await)
    } else {
        Err(AppError::Forbidden)
    }
}

/// Role gate for admin-only routes.
pub async fn require_admin(request: Request, next: Next) -> Result<Response, AppError> {
    let user = request
        .extensions()
        .get::<CurrentUser>()
        .ok_or(AppError::Unauthorized)?;

    if user.is_admin() {
        Ok(next.run(request).await)
    } else {
        Err(AppError::Forbidden)
    }
}
