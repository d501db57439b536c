//! Application settings loaded from environment variables.

use std::env;

use super::constants::{
    DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT, DEFAULT_UPSTREAM_TIMEOUT_SECONDS,
    DEFAULT_UPSTREAM_URL, SESSION_COOKIE,
};

/// Application configuration
#[derive(Clone)]
pub struct Config {
    /// Base URL of the upstream REST API (no trailing slash)
    pub upstream_url: String,
    /// Upstream request timeout in seconds
    pub upstream_timeout_seconds: u64,
    pub server_host: String,
    pub server_port: u16,
    /// Name of the session cookie carrying the access token
    pub session_cookie: String,
    /// Mark the session cookie `Secure` (disable only for local development)
    pub cookie_secure: bool,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("upstream_url", &self.upstream_url)
            .field("upstream_timeout_seconds", &self.upstream_timeout_seconds)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("session_cookie", &self.session_cookie)
            .field("cookie_secure", &self.cookie_secure)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let upstream_url = env::var("UPSTREAM_API_URL")
            .unwrap_or_else(|_| DEFAULT_UPSTREAM_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Self {
            upstream_url,
            upstream_timeout_seconds: env::var("UPSTREAM_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_UPSTREAM_TIMEOUT_SECONDS),
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SERVER_PORT),
            session_cookie: env::var("SESSION_COOKIE")
                .unwrap_or_else(|_| SESSION_COOKIE.to_string()),
            cookie_secure: env::var("COOKIE_SECURE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(!cfg!(debug_assertions)),
        }
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_lists_upstream_url() {
        let config = Config {
            upstream_url: "http://localhost:5000/api/v1".to_string(),
            upstream_timeout_seconds: 30,
            server_host: "0.0.0.0".to_string(),
            server_port: 3000,
            session_cookie: "accessToken".to_string(),
            cookie_secure: false,
        };

        let rendered = format!("{:?}", config);
        assert!(rendered.contains("http://localhost:5000/api/v1"));
        assert!(rendered.contains("3000"));
    }
}
