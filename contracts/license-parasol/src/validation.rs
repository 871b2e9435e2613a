use crate::*;

pub(crate) fn validate_name(name: &str) -> Result<(), LicenseError> {
    if name.len() > MAX_NAME_LEN {
        return Err(LicenseError::InvalidInput(format!(
            "Name exceeds max length of {} bytes",
            MAX_NAME_LEN
        )));
    }
    Ok(())
}

pub(crate) fn validate_image_uri(image_uri: &str) -> Result<(), LicenseError> {
    if image_uri.len() > MAX_IMAGE_URI_LEN {
        return Err(LicenseError::InvalidInput(format!(
            "Image URI exceeds max length of {} bytes",
            MAX_IMAGE_URI_LEN
        )));
    }
    Ok(())
}

pub(crate) fn validate_provenance_cid(provenance_cid: &str) -> Result<(), LicenseError> {
    if provenance_cid.len() > MAX_PROVENANCE_CID_LEN {
        return Err(LicenseError::InvalidInput(format!(
            "Provenance CID exceeds max length of {} bytes",
            MAX_PROVENANCE_CID_LEN
        )));
    }
    Ok(())
}

pub(crate) fn validate_license_inputs(
    name: &str,
    image_uri: &str,
    provenance_cid: &str,
) -> Result<(), LicenseError> {
    validate_name(name)?;
    validate_image_uri(image_uri)?;
    validate_provenance_cid(provenance_cid)?;
    Ok(())
}
