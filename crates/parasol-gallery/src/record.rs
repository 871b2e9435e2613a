//! Core data types for the license gallery.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Wallet address owning licenses. Opaque to this crate; the reader
/// implementations decide what counts as a well-formed address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Account(pub String);

impl Account {
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for Account {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Account {
    fn from(address: &str) -> Self {
        Self(address.to_string())
    }
}

impl From<String> for Account {
    fn from(address: String) -> Self {
        Self(address)
    }
}

/// Identifier of one minted license. Ids are assigned sequentially from 1
/// by the mint, so 64 bits cover the full id space.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TokenId(pub u64);

impl std::fmt::Display for TokenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TokenId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// One owned license, decoded and ready to render.
///
/// `fields` carries whatever the token's JSON manifest contained (name,
/// description, image, attributes, ...) in manifest order; nothing is
/// schema-enforced. Serializing a record reproduces the flat
/// `{id, uri, ...manifest}` object shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LicenseRecord {
    pub id: TokenId,
    pub uri: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl LicenseRecord {
    /// Manifest field as a string, if present and string-typed.
    pub fn text_field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    pub fn name(&self) -> Option<&str> {
        self.text_field("name")
    }

    pub fn description(&self) -> Option<&str> {
        self.text_field("description")
    }

    pub fn image(&self) -> Option<&str> {
        self.text_field("image")
    }
}
