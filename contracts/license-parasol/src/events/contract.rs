use near_sdk::AccountId;

use super::CONTRACT;
use super::builder::EventBuilder;

pub fn emit_owner_transferred(old_owner: &AccountId, new_owner: &AccountId) {
    EventBuilder::new(CONTRACT, "owner_transferred", old_owner)
        .field("old_owner", old_owner)
        .field("new_owner", new_owner)
        .emit();
}

pub fn emit_default_uri_updated(owner_id: &AccountId, uri_type: &str, new_uri: &str) {
    EventBuilder::new(CONTRACT, "default_uri_updated", owner_id)
        .field("uri_type", uri_type)
        .field("new_uri", new_uri)
        .emit();
}
