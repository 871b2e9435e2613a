use crate::*;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_ENGINE;
use near_sdk::serde_json::json;

fn display_name(license: &LicenseMetadata) -> String {
    format!("Parasol {}", license.name)
}

#[near]
impl Contract {
    /// Full token manifest as a base64 data URI, the same shape wallets read
    /// from `tokenURI` on other chains.
    #[handle_result]
    pub fn token_uri(&self, token_id: U64) -> Result<String, LicenseError> {
        let license = self
            .licenses
            .get(&token_id.0)
            .ok_or_else(LicenseError::token_not_found)?;

        let manifest = json!({
            "name": display_name(license),
            "description": LICENSE_DESCRIPTION,
            "image": license.image_uri,
            "attributes": [
                {
                    "trait_type": PROVENANCE_TRAIT_TYPE,
                    "value": license.provenance_cid,
                }
            ],
        });

        let payload = BASE64_ENGINE.encode(manifest.to_string());
        Ok(format!("{DATA_URI_PREFIX}{payload}"))
    }

    #[handle_result]
    pub fn get_nft_metadata(&self, token_id: U64) -> Result<NftDisplayMetadata, LicenseError> {
        let license = self
            .licenses
            .get(&token_id.0)
            .ok_or_else(LicenseError::token_not_found)?;

        Ok(NftDisplayMetadata {
            name: display_name(license),
            description: LICENSE_DESCRIPTION.to_string(),
            image: license.image_uri.clone(),
            provenance_cid: license.provenance_cid.clone(),
            token_id: license.token_id,
            owner_id: license.owner_id.clone(),
        })
    }

    #[handle_result]
    pub fn get_provenance_trait(&self, token_id: U64) -> Result<ProvenanceTrait, LicenseError> {
        let license = self
            .licenses
            .get(&token_id.0)
            .ok_or_else(LicenseError::token_not_found)?;

        Ok(ProvenanceTrait {
            trait_type: PROVENANCE_TRAIT_TYPE.to_string(),
            value: license.provenance_cid.clone(),
        })
    }

    pub fn nft_metadata(&self) -> &LicenseContractMetadata {
        &self.contract_metadata
    }
}
