//! Decoding of self-contained license token URIs.
//!
//! A license URI is `data:application/json;base64,<payload>` where the
//! payload is the base64 of the token's JSON manifest. No network fetch is
//! ever needed to render a license.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_ENGINE;
use serde_json::{Map, Value};

use crate::error::DecodeError;

/// Fixed 29-character prefix every license token URI starts with.
pub const DATA_URI_PREFIX: &str = "data:application/json;base64,";

/// Decode a token URI into its manifest fields, in manifest order.
pub fn decode_license_manifest(uri: &str) -> Result<Map<String, Value>, DecodeError> {
    let payload = uri
        .strip_prefix(DATA_URI_PREFIX)
        .ok_or(DecodeError::MissingPrefix)?;
    let bytes = BASE64_ENGINE
        .decode(payload)
        .map_err(|e| DecodeError::Base64(e.to_string()))?;
    let value: Value =
        serde_json::from_slice(&bytes).map_err(|e| DecodeError::Json(e.to_string()))?;
    match value {
        Value::Object(fields) => Ok(fields),
        _ => Err(DecodeError::NotAnObject),
    }
}
