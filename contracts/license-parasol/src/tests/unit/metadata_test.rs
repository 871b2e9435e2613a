use crate::tests::test_utils::*;
use crate::*;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_ENGINE;
use near_sdk::serde_json::Value;
use near_sdk::testing_env;

// --- token_uri ---

#[test]
fn token_uri_is_base64_data_uri() {
    let mut contract = new_contract();
    let id = mint_license(&mut contract, &minter(), "Alpha");

    testing_env!(context(owner()).build());
    let uri = contract.token_uri(U64(id)).unwrap();
    assert!(uri.starts_with(DATA_URI_PREFIX));

    let payload = uri.strip_prefix(DATA_URI_PREFIX).unwrap();
    let decoded = BASE64_ENGINE.decode(payload).unwrap();
    let manifest: Value = near_sdk::serde_json::from_slice(&decoded).unwrap();

    assert_eq!(manifest["name"], "Parasol Alpha");
    assert_eq!(manifest["description"], LICENSE_DESCRIPTION);
    assert_eq!(manifest["image"], DEFAULT_IMAGE_URI);
    assert_eq!(
        manifest["attributes"][0]["trait_type"],
        PROVENANCE_TRAIT_TYPE
    );
    assert_eq!(manifest["attributes"][0]["value"], DEFAULT_PROVENANCE_CID);
}

#[test]
fn token_uri_unknown_token() {
    let contract = new_contract();
    testing_env!(context(owner()).build());
    let err = contract.token_uri(U64(9)).unwrap_err();
    assert!(matches!(err, LicenseError::NotFound(_)));
}

// --- get_nft_metadata ---

#[test]
fn nft_display_metadata_fields() {
    let mut contract = new_contract();
    let ctx = context_with_deposit(minter(), 1_000_000_000_000_000_000_000_000);
    testing_env!(ctx.build());
    let id = contract
        .mint_license(
            "Beta".to_string(),
            "ipfs://img".to_string(),
            "bafy-cid".to_string(),
        )
        .unwrap()
        .0;

    testing_env!(context(owner()).build());
    let meta = contract.get_nft_metadata(U64(id)).unwrap();
    assert_eq!(meta.name, "Parasol Beta");
    assert_eq!(meta.description, LICENSE_DESCRIPTION);
    assert_eq!(meta.image, "ipfs://img");
    assert_eq!(meta.provenance_cid, "bafy-cid");
    assert_eq!(meta.token_id, id);
    assert_eq!(meta.owner_id, minter());
}

#[test]
fn nft_display_metadata_unknown_token() {
    let contract = new_contract();
    testing_env!(context(owner()).build());
    assert!(contract.get_nft_metadata(U64(3)).is_err());
}

// --- get_provenance_trait ---

#[test]
fn provenance_trait_for_token() {
    let mut contract = new_contract();
    let id = mint_license(&mut contract, &minter(), "Alpha");

    testing_env!(context(owner()).build());
    let tr = contract.get_provenance_trait(U64(id)).unwrap();
    assert_eq!(tr.trait_type, PROVENANCE_TRAIT_TYPE);
    assert_eq!(tr.value, DEFAULT_PROVENANCE_CID);
}

// --- nft_metadata ---

#[test]
fn contract_metadata_defaults() {
    let contract = new_contract();
    let meta = contract.nft_metadata();
    assert_eq!(meta.spec, "nft-2.0.0");
    assert_eq!(meta.name, "Parasol Patent License");
    assert_eq!(meta.symbol, "PARASOL");
}

#[test]
fn contract_metadata_override_at_init() {
    testing_env!(context(owner()).build());
    let contract = Contract::new(
        owner(),
        Some(LicenseContractMetadata {
            name: "Custom".to_string(),
            ..Default::default()
        }),
    );
    assert_eq!(contract.nft_metadata().name, "Custom");
    assert_eq!(contract.nft_metadata().symbol, "PARASOL");
}
