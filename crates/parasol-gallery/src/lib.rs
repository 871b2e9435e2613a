//! Client-side collection loading for Parasol license tokens.
//! Chain-agnostic: reads go through the reader traits, so the crate never
//! touches a wallet or an RPC transport itself.

mod decode;
mod error;
mod gallery;
mod loader;
mod reader;
mod record;

pub use decode::{DATA_URI_PREFIX, decode_license_manifest};
pub use error::{DecodeError, ReadError};
pub use gallery::LicenseGallery;
pub use loader::CollectionLoader;
pub use reader::{TokenIndexReader, TokenUriReader};
pub use record::{Account, LicenseRecord, TokenId};
