use near_sdk::AccountId;

use super::LICENSE;
use super::builder::EventBuilder;

pub fn emit_license_minted(
    owner_id: &AccountId,
    token_id: u64,
    name: &str,
    provenance_cid: &str,
) {
    EventBuilder::new(LICENSE, "license_minted", owner_id)
        .field("token_id", token_id)
        .field("name", name)
        .field("provenance_cid", provenance_cid)
        .emit();
}
