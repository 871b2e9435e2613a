use near_sdk::json_types::{U64, U128};
use near_sdk::store::{IterableMap, LookupMap};
use near_sdk::{AccountId, NearToken, PanicOnDefault, Promise, env, near};

pub mod constants;
mod errors;
mod guards;
mod validation;

mod events;

mod license;

mod admin;
mod storage;


pub use constants::*;
pub use errors::LicenseError;
pub use license::types::{
    LicenseContractMetadata, LicenseMetadata, NftDisplayMetadata, ProvenanceTrait,
};
pub use storage::StorageKey;

#[near(
    contract_state,
    contract_metadata(
        version = "0.1.0",
        link = "https://github.com/parasol-labs/parasol",
        standard(standard = "nep171", version = "1.2.0"),
        standard(standard = "nep177", version = "2.0.0"),
        standard(standard = "nep297", version = "1.0.0"),
    )
)]
#[derive(PanicOnDefault)]
pub struct Contract {
    pub version: String,

    pub owner_id: AccountId,

    // Token id invariant: ids are dense and 1-based, current_supply is the
    // highest id minted so far.
    pub current_supply: u64,
    pub max_supply: u64,

    // Substituted for empty mint inputs; admin-updatable.
    pub default_image_uri: String,
    pub default_provenance_cid: String,

    pub licenses: IterableMap<u64, LicenseMetadata>,
    // One-per-wallet invariant: a holder maps to exactly one token id, and
    // no transfer surface exists to change that.
    pub(crate) holders: LookupMap<AccountId, u64>,

    pub contract_metadata: LicenseContractMetadata,
}
