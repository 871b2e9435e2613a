use near_sdk::AccountId;
use near_sdk::json_types::Base64VecU8;
use near_sdk::near;

#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct LicenseMetadata {
    pub name: String,
    pub image_uri: String,
    pub provenance_cid: String,
    pub owner_id: AccountId,
    pub token_id: u64,
    pub minted_at_ms: u64,
}

#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct LicenseContractMetadata {
    pub spec: String,
    pub name: String,
    pub symbol: String,
    pub icon: Option<String>,
    pub base_uri: Option<String>,
    pub reference: Option<String>,
    pub reference_hash: Option<Base64VecU8>,
}

impl Default for LicenseContractMetadata {
    fn default() -> Self {
        Self {
            spec: "nft-2.0.0".to_string(),
            name: "Parasol Patent License".to_string(),
            symbol: "PARASOL".to_string(),
            icon: None,
            base_uri: None,
            reference: None,
            reference_hash: None,
        }
    }
}

/// Decoded form of the on-chain token manifest, for wallets that prefer a
/// plain view call over parsing the data URI themselves.
#[near(serializers = [json])]
pub struct NftDisplayMetadata {
    pub name: String,
    pub description: String,
    pub image: String,
    pub provenance_cid: String,
    pub token_id: u64,
    pub owner_id: AccountId,
}

#[near(serializers = [json])]
pub struct ProvenanceTrait {
    pub trait_type: String,
    pub value: String,
}
