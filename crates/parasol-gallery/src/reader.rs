//! Reader traits the loader fans out over.
//!
//! Implementations wrap whatever transport the embedding application uses:
//! RPC view calls in a wallet front end, a sandbox handle in integration
//! tests, an in-memory fixture in unit tests. Failures are reported as
//! [`ReadError`]; the loader treats every failure as skip-this-item.

use std::future::Future;

use crate::error::ReadError;
use crate::record::{Account, TokenId};

/// Maps `(owner, index)` to the token id at that position of the owner's
/// enumeration. Zero-based; only indices below the owner's balance resolve.
pub trait TokenIndexReader {
    fn token_of_owner_by_index(
        &self,
        owner: &Account,
        index: u64,
    ) -> impl Future<Output = Result<TokenId, ReadError>> + Send;
}

/// Maps a token id to its self-contained metadata URI.
pub trait TokenUriReader {
    fn token_uri(
        &self,
        token_id: TokenId,
    ) -> impl Future<Output = Result<String, ReadError>> + Send;
}
