//! Reqwest-based client for the upstream REST API.
//!
//! This is the only place that talks HTTP to the backend. It forwards the
//! caller's bearer token, normalizes the response envelope, and converts
//! `success: false` replies and transport failures into typed errors.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{multipart, Client, Method, RequestBuilder, StatusCode};
use serde_json::Value;

use super::envelope::Envelope;
use crate::config::Config;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// An uploaded file forwarded verbatim to the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePart {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Upstream API access trait for dependency injection.
///
/// Services depend on this seam instead of a concrete HTTP client so they
/// can be unit tested against mocks. The token lifetimes are spelled out
/// for mock generation.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait Upstream: Send + Sync {
    /// GET with query parameters
    async fn get<'a>(
        &self,
        path: &str,
        query: &[(String, String)],
        token: Option<&'a str>,
    ) -> AppResult<Envelope>;

    /// POST with an optional JSON body
    async fn post<'a>(
        &self,
        path: &str,
        body: Option<Value>,
        token: Option<&'a str>,
    ) -> AppResult<Envelope>;

    /// PATCH with an optional JSON body
    async fn patch<'a>(
        &self,
        path: &str,
        body: Option<Value>,
        token: Option<&'a str>,
    ) -> AppResult<Envelope>;

    /// DELETE
    async fn delete<'a>(&self, path: &str, token: Option<&'a str>) -> AppResult<Envelope>;

    /// POST multipart: a `data` JSON part plus an optional `file` part
    async fn post_multipart<'a>(
        &self,
        path: &str,
        data: Value,
        file: Option<FilePart>,
        token: Option<&'a str>,
    ) -> AppResult<Envelope>;

    /// PATCH multipart: a `data` JSON part plus an optional `file` part
    async fn patch_multipart<'a>(
        &self,
        path: &str,
        data: Value,
        file: Option<FilePart>,
        token: Option<&'a str>,
    ) -> AppResult<Envelope>;
}

/// Concrete upstream client over reqwest
#[derive(Debug, Clone)]
pub struct Backend {
    client: Client,
    base_url: String,
}

impl Backend {
    /// Build the shared HTTP client from configuration
    pub fn new(config: &Config) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.upstream_timeout_seconds))
            .user_agent(concat!("evently-web/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: config.upstream_url.clone(),
        })
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, url)
    }

    fn authorize(builder: RequestBuilder, token: Option<&str>) -> RequestBuilder {
        match token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Send a request and normalize the reply into an `Envelope`.
    ///
    /// Any JSON body is parsed regardless of HTTP status so that
    /// backend-reported failure messages survive to the toast. A reply is
    /// only treated as success when both the HTTP status and the
    /// envelope's own `success` flag (when present) agree.
    async fn send(&self, builder: RequestBuilder) -> AppResult<Envelope> {
        let response = builder.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        let envelope: Envelope = match serde_json::from_slice(&bytes) {
            Ok(envelope) => envelope,
            Err(e) => {
                if status.is_success() {
                    tracing::error!("Upstream returned non-JSON success body: {}", e);
                    return Err(AppError::internal("invalid upstream response"));
                }
                return Err(AppError::upstream(status.as_u16(), None));
            }
        };

        let reported_ok = envelope.success.unwrap_or(status.is_success());
        if !status.is_success() || !reported_ok {
            let code = envelope
                .status_code
                .filter(|c| StatusCode::from_u16(*c).is_ok())
                .unwrap_or_else(|| {
                    if status.is_success() {
                        StatusCode::BAD_REQUEST.as_u16()
                    } else {
                        status.as_u16()
                    }
                });
            return Err(AppError::upstream(code, envelope.message));
        }

        Ok(envelope)
    }

    fn build_form(data: Value, file: Option<FilePart>) -> AppResult<multipart::Form> {
        let mut form = multipart::Form::new().text("data", data.to_string());
        if let Some(file) = file {
            let mut part = multipart::Part::bytes(file.bytes).file_name(file.file_name);
            if let Some(content_type) = file.content_type {
                part = part.mime_str(&content_type)?;
            }
            form = form.part("file", part);
        }
        Ok(form)
    }
}

#[async_trait]
impl Upstream for Backend {
    async fn get<'a>(
        &self,
        path: &str,
        query: &[(String, String)],
        token: Option<&'a str>,
    ) -> AppResult<Envelope> {
        let builder = Self::authorize(self.request(Method::GET, path).query(query), token);
        self.send(builder).await
    }

    async fn post<'a>(
        &self,
        path: &str,
        body: Option<Value>,
        token: Option<&'a str>,
    ) -> AppResult<Envelope> {
        let mut builder = Self::authorize(self.request(Method::POST, path), token);
        if let Some(body) = body {
            builder = builder.json(&body);
        }
        self.send(builder).await
    }

    async fn patch<'a>(
        &self,
        path: &str,
        body: Option<Value>,
        token: Option<&'a str>,
    ) -> AppResult<Envelope> {
        let mut builder = Self::authorize(self.request(Method::PATCH, path), token);
        if let Some(body) = body {
            builder = builder.json(&body);
        }
        self.send(builder).await
    }

    async fn delete<'a>(&self, path: &str, token: Option<&'a str>) -> AppResult<Envelope> {
        let builder = Self::authorize(self.request(Method::DELETE, path), token);
        self.send(builder).await
    }

    async fn post_multipart<'a>(
        &self,
        path: &str,
        data: Value,
        file: Option<FilePart>,
        token: Option<&'a str>,
    ) -> AppResult<Envelope> {
        let form = Self::build_form(data, file)?;
        let builder = Self::authorize(self.request(Method::POST, path).multipart(form), token);
        self.send(builder).await
    }

    async fn patch_multipart<'a>(
        &self,
        path: &str,
        data: Value,
        file: Option<FilePart>,
        token: Option<&'a str>,
    ) -> AppResult<Envelope> {
        let form = Self::build_form(data, file)?;
        let builder = Self::authorize(self.request(Method::PATCH, path).multipart(form), token);
        self.send(builder).await
    }
}
