use crate::*;

#[near]
impl Contract {
    #[init]
    pub fn new(
        owner_id: AccountId,
        contract_metadata: Option<LicenseContractMetadata>,
    ) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            owner_id,
            current_supply: 0,
            max_supply: MAX_SUPPLY,
            default_image_uri: DEFAULT_IMAGE_URI.to_string(),
            default_provenance_cid: DEFAULT_PROVENANCE_CID.to_string(),
            licenses: IterableMap::new(StorageKey::Licenses),
            holders: LookupMap::new(StorageKey::Holders),
            contract_metadata: contract_metadata.unwrap_or_default(),
        }
    }

    #[payable]
    #[handle_result]
    pub fn transfer_ownership(&mut self, new_owner: AccountId) -> Result<(), LicenseError> {
        crate::guards::check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        if new_owner == self.owner_id {
            return Err(LicenseError::InvalidInput(
                "New owner must differ from current owner".to_string(),
            ));
        }
        let old_owner = self.owner_id.clone();
        self.owner_id = new_owner;
        events::emit_owner_transferred(&old_owner, &self.owner_id);
        Ok(())
    }

    /// Replaces the artwork substituted into mints that leave `image_uri`
    /// empty. Already minted licenses keep their stored URI.
    #[payable]
    #[handle_result]
    pub fn update_default_image_uri(&mut self, new_uri: String) -> Result<(), LicenseError> {
        crate::guards::check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        if new_uri.is_empty() {
            return Err(LicenseError::InvalidInput(
                "Default image URI must not be empty".to_string(),
            ));
        }
        validation::validate_image_uri(&new_uri)?;
        self.default_image_uri = new_uri;
        events::emit_default_uri_updated(&self.owner_id, "image", &self.default_image_uri);
        Ok(())
    }

    #[payable]
    #[handle_result]
    pub fn update_default_provenance_cid(&mut self, new_cid: String) -> Result<(), LicenseError> {
        crate::guards::check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        if new_cid.is_empty() {
            return Err(LicenseError::InvalidInput(
                "Default provenance CID must not be empty".to_string(),
            ));
        }
        validation::validate_provenance_cid(&new_cid)?;
        self.default_provenance_cid = new_cid;
        events::emit_default_uri_updated(
            &self.owner_id,
            "provenance_cid",
            &self.default_provenance_cid,
        );
        Ok(())
    }

    pub fn get_owner(&self) -> &AccountId {
        &self.owner_id
    }

    pub fn get_version(&self) -> &str {
        &self.version
    }

    pub fn get_default_image_uri(&self) -> &str {
        &self.default_image_uri
    }

    pub fn get_default_provenance_cid(&self) -> &str {
        &self.default_provenance_cid
    }
}
