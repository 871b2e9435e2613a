//! Per-item failure types. Both are local to one enumeration index: the
//! loader logs them and skips the item, it never propagates them.

/// An external read (index or URI lookup) failed. The message is whatever
/// the reader implementation reported: network failure, contract rejection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadError(String);

impl ReadError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    pub fn message(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "read failed: {}", self.0)
    }
}

impl std::error::Error for ReadError {}

impl From<String> for ReadError {
    fn from(message: String) -> Self {
        Self(message)
    }
}

impl From<&str> for ReadError {
    fn from(message: &str) -> Self {
        Self(message.to_string())
    }
}

/// A fetched token URI could not be turned into a license manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// URI does not carry the `data:application/json;base64,` prefix.
    MissingPrefix,
    Base64(String),
    Json(String),
    /// Payload parsed but is not a JSON object, so there are no fields
    /// to merge into a record.
    NotAnObject,
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingPrefix => write!(f, "token URI is not a base64 JSON data-URI"),
            Self::Base64(msg) => write!(f, "invalid base64 payload: {msg}"),
            Self::Json(msg) => write!(f, "invalid JSON manifest: {msg}"),
            Self::NotAnObject => write!(f, "manifest is not a JSON object"),
        }
    }
}

impl std::error::Error for DecodeError {}
