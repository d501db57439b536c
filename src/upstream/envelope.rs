//! The upstream response envelope.
//!
//! Every backend endpoint replies with the same wrapper:
//! `{ statusCode?, success?, message?, data?, meta? }`. Field presence
//! drifts between endpoints, so everything is optional and normalization
//! happens here rather than in every service.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::errors::{AppError, AppResult};
use crate::types::ListMeta;

/// Parsed upstream response envelope
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    #[serde(default)]
    pub status_code: Option<u16>,
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub meta: Option<ListMeta>,
}

impl Envelope {
    /// Deserialize the `data` payload into a typed record.
    ///
    /// A missing payload is an upstream contract violation for endpoints
    /// that promise one, reported as an internal error (and logged), not
    /// as a user-facing validation failure.
    pub fn data_as<T: DeserializeOwned>(&self) -> AppResult<T> {
        let value = self.data.clone().unwrap_or(Value::Null);
        serde_json::from_value(value).map_err(|e| {
            tracing::error!("Unexpected upstream payload shape: {}", e);
            AppError::internal(format!("unexpected upstream payload: {e}"))
        })
    }

    /// Deserialize the `data` payload, falling back to `T::default()`
    /// when the upstream omitted it (empty listings commonly do).
    pub fn data_or_default<T: DeserializeOwned + Default>(&self) -> AppResult<T> {
        match &self.data {
            None | Some(Value::Null) => Ok(T::default()),
            Some(value) => serde_json::from_value(value.clone()).map_err(|e| {
                tracing::error!("Unexpected upstream payload shape: {}", e);
                AppError::internal(format!("unexpected upstream payload: {e}"))
            }),
        }
    }

    /// The upstream message, or a fallback for endpoints that omit one
    pub fn message_or(&self, fallback: &str) -> String {
        self.message.clone().unwrap_or_else(|| fallback.to_string())
    }
}
