//! Multipart upload extraction.
//!
//! The backend ingests uploads as a `data` JSON part plus an optional
//! `file` part; browser forms submit the same shape to us. This module
//! parses that shape and validates the JSON part.

use axum::{
    extract::{FromRequest, Multipart, Request},
    http::header::CONTENT_TYPE,
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use validator::Validate;

use super::validated_json::format_validation_errors;
use crate::errors::{AppError, AppResult};
use crate::upstream::FilePart;

/// Consume a multipart body into the `data` JSON value and the optional file.
pub async fn read_upload(mut multipart: Multipart) -> AppResult<(Value, Option<FilePart>)> {
    let mut data: Option<Value> = None;
    let mut file: Option<FilePart> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(e.body_text()))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("data") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::validation(e.body_text()))?;
                let value = serde_json::from_str(&text)
                    .map_err(|_| AppError::validation("data part is not valid JSON"))?;
                data = Some(value);
            }
            Some("file") => {
                let file_name = field
                    .file_name()
                    .unwrap_or("upload")
                    .to_string();
                let content_type = field.content_type().map(str::to_string);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::validation(e.body_text()))?;
                file = Some(FilePart {
                    file_name,
                    content_type,
                    bytes: bytes.to_vec(),
                });
            }
            // Unknown parts are ignored, matching the backend's tolerance
            _ => {}
        }
    }

    let data = data.ok_or_else(|| AppError::validation("missing data part"))?;
    Ok((data, file))
}

/// Parse and validate the `data` part into a typed request.
pub async fn parse_upload<T>(multipart: Multipart) -> AppResult<(T, Option<FilePart>)>
where
    T: DeserializeOwned + Validate,
{
    let (data, file) = read_upload(multipart).await?;
    let payload: T =
        serde_json::from_value(data).map_err(|e| AppError::validation(e.to_string()))?;
    payload
        .validate()
        .map_err(|e| AppError::validation(format_validation_errors(&e)))?;
    Ok((payload, file))
}

/// Accept either a plain JSON body or the multipart upload shape.
///
/// Browser forms with a file submit multipart; everything else sends JSON.
pub async fn parse_json_or_upload<T>(req: Request) -> AppResult<(T, Option<FilePart>)>
where
    T: DeserializeOwned + Validate,
{
    let is_multipart = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.starts_with("multipart/form-data"))
        .unwrap_or(false);

    if is_multipart {
        let multipart = Multipart::from_request(req, &())
            .await
            .map_err(|e| AppError::validation(e.body_text()))?;
        parse_upload(multipart).await
    } else {
        let Json(payload) = Json::<T>::from_request(req, &())
            .await
            .map_err(|e| AppError::validation(e.body_text()))?;
        payload
            .validate()
            .map_err(|e| AppError::validation(format_validation_errors(&e)))?;
        Ok((payload, None))
    }
}
