use super::builder::Nep171Event;

const VERSION: &str = "1.2.0";

pub fn emit_mint(owner_id: &str, token_ids: &[String], memo: Option<&str>) {
    Nep171Event::new("nft_mint", VERSION)
        .field("owner_id", owner_id)
        .field("token_ids", token_ids)
        .field_opt("memo", memo)
        .emit();
}
