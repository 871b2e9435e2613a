use crate::validation::*;
use crate::*;

// --- validate_name ---

#[test]
fn empty_name_is_valid() {
    assert!(validate_name("").is_ok());
}

#[test]
fn max_length_name_ok() {
    assert!(validate_name(&"x".repeat(MAX_NAME_LEN)).is_ok());
}

#[test]
fn overlong_name_invalid() {
    let err = validate_name(&"x".repeat(MAX_NAME_LEN + 1)).unwrap_err();
    assert!(matches!(err, LicenseError::InvalidInput(_)));
}

// --- validate_image_uri ---

#[test]
fn max_length_image_uri_ok() {
    assert!(validate_image_uri(&"u".repeat(MAX_IMAGE_URI_LEN)).is_ok());
}

#[test]
fn overlong_image_uri_invalid() {
    let err = validate_image_uri(&"u".repeat(MAX_IMAGE_URI_LEN + 1)).unwrap_err();
    assert!(matches!(err, LicenseError::InvalidInput(_)));
}

// --- validate_provenance_cid ---

#[test]
fn max_length_provenance_cid_ok() {
    assert!(validate_provenance_cid(&"c".repeat(MAX_PROVENANCE_CID_LEN)).is_ok());
}

#[test]
fn overlong_provenance_cid_invalid() {
    let err = validate_provenance_cid(&"c".repeat(MAX_PROVENANCE_CID_LEN + 1)).unwrap_err();
    assert!(matches!(err, LicenseError::InvalidInput(_)));
}

// --- validate_license_inputs ---

#[test]
fn combined_inputs_ok() {
    assert!(validate_license_inputs("Alpha", "ipfs://img", "bafy-cid").is_ok());
}

#[test]
fn combined_inputs_reject_any_overlong_field() {
    let long_name = "x".repeat(MAX_NAME_LEN + 1);
    assert!(validate_license_inputs(&long_name, "", "").is_err());

    let long_uri = "u".repeat(MAX_IMAGE_URI_LEN + 1);
    assert!(validate_license_inputs("Alpha", &long_uri, "").is_err());

    let long_cid = "c".repeat(MAX_PROVENANCE_CID_LEN + 1);
    assert!(validate_license_inputs("Alpha", "", &long_cid).is_err());
}
