// src/api/parser.rs
//! Turns a transport outcome into a decoded value or a single error.
//!
//! Failure sources are checked in order: transport failure, then an API error
//! payload, then the shape of the body. A body is never trusted when the
//! transport reported failure.

use super::transport::RawResponse;
use crate::constants::ERROR_BODY_PREVIEW_LENGTH;
use crate::error::{ApiError, ClientError, DecodeError, ErrorCode, Result, TransportError};
use crate::model::wire::decode_entity;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Decodes `outcome` as a `T`, naming `field` and `expected` in decode errors.
pub fn interpret<T: DeserializeOwned>(
    outcome: std::result::Result<RawResponse, TransportError>,
    field: &str,
    expected: &str,
) -> Result<T> {
    let response = match outcome {
        Ok(response) => response,
        Err(transport) => return Err(transport.into()),
    };

    let body = match serde_json::from_str::<Value>(&response.body) {
        Ok(body) => body,
        Err(_) if !response.is_success() => {
            return Err(status_error(&response).into());
        }
        Err(e) => return Err(DecodeError::from_serde(field, expected, e).into()),
    };

    if let Some(error) = relevant_error(None, detect_api_error(response.status, &body)) {
        return Err(error);
    }

    Ok(decode_entity(body, field, expected)?)
}

/// Picks the error to surface from the two failure sources of one call.
///
/// A transport failure always wins: whatever body arrived alongside it cannot
/// be trusted.
pub fn relevant_error(
    transport: Option<TransportError>,
    api: Option<ApiError>,
) -> Option<ClientError> {
    match (transport, api) {
        (Some(transport), _) => Some(ClientError::Transport(transport)),
        (None, Some(api)) => Some(ClientError::Api(api)),
        (None, None) => None,
    }
}

/// Extracts an API error from a decoded body.
///
/// The API marks errors with `"object": "error"`, but any non-empty `code`
/// counts too, even on a 2xx status. A non-2xx status without an error
/// payload still fails, with the status standing in for the code.
pub fn detect_api_error(status: u16, body: &Value) -> Option<ApiError> {
    let code = body
        .get("code")
        .and_then(Value::as_str)
        .filter(|code| !code.is_empty());
    let marked = body.get("object").and_then(Value::as_str) == Some("error");

    if code.is_some() || marked {
        let status = body
            .get("status")
            .and_then(Value::as_u64)
            .and_then(|s| u16::try_from(s).ok())
            .unwrap_or(status);
        return Some(ApiError {
            code: code
                .map(ErrorCode::from_api_response)
                .unwrap_or(ErrorCode::HttpStatus(status)),
            message: body
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            status,
        });
    }

    if !(200..300).contains(&status) {
        return Some(ApiError {
            code: ErrorCode::from_http_status(status),
            message: preview(&body.to_string()),
            status,
        });
    }

    None
}

fn status_error(response: &RawResponse) -> ApiError {
    ApiError {
        code: ErrorCode::from_http_status(response.status),
        message: format!("HTTP {}: {}", response.status, preview(&response.body)),
        status: response.status,
    }
}

fn preview(body: &str) -> String {
    if body.chars().count() > ERROR_BODY_PREVIEW_LENGTH {
        let cut: String = body.chars().take(ERROR_BODY_PREVIEW_LENGTH).collect();
        format!("{}...", cut)
    } else {
        body.to_string()
    }
}
