use crate::*;

#[near]
impl Contract {
    /// Mints a soulbound license to the caller, paid for by the attached
    /// deposit. Empty `image_uri` or `provenance_cid` fall back to the
    /// contract defaults.
    #[payable]
    #[handle_result]
    pub fn mint_license(
        &mut self,
        name: String,
        image_uri: String,
        provenance_cid: String,
    ) -> Result<U64, LicenseError> {
        let minter_id = env::predecessor_account_id();

        let before = env::storage_usage();
        let token_id = self.mint(&minter_id, name, image_uri, provenance_cid)?;
        let bytes_used = env::storage_usage().saturating_sub(before);
        self.charge_storage(&minter_id, bytes_used)?;

        let license = self
            .licenses
            .get(&token_id)
            .ok_or_else(LicenseError::token_not_found)?;
        events::emit_mint(minter_id.as_str(), &[token_id.to_string()], None);
        events::emit_license_minted(&minter_id, token_id, &license.name, &license.provenance_cid);

        Ok(U64(token_id))
    }
}

impl Contract {
    pub(crate) fn mint(
        &mut self,
        minter_id: &AccountId,
        name: String,
        image_uri: String,
        provenance_cid: String,
    ) -> Result<u64, LicenseError> {
        validation::validate_license_inputs(&name, &image_uri, &provenance_cid)?;

        if self.current_supply >= self.max_supply {
            return Err(LicenseError::max_supply_reached(self.max_supply));
        }
        if self.holders.contains_key(minter_id) {
            return Err(LicenseError::already_has_license(minter_id));
        }

        let token_id = self
            .current_supply
            .checked_add(1)
            .ok_or_else(|| LicenseError::InternalError("Token ID counter overflow".into()))?;

        let image_uri = if image_uri.is_empty() {
            self.default_image_uri.clone()
        } else {
            image_uri
        };
        let provenance_cid = if provenance_cid.is_empty() {
            self.default_provenance_cid.clone()
        } else {
            provenance_cid
        };

        let license = LicenseMetadata {
            name,
            image_uri,
            provenance_cid,
            owner_id: minter_id.clone(),
            token_id,
            minted_at_ms: env::block_timestamp_ms(),
        };

        self.licenses.insert(token_id, license);
        self.holders.insert(minter_id.clone(), token_id);
        self.current_supply = token_id;

        Ok(token_id)
    }

    pub(crate) fn charge_storage(
        &mut self,
        payer_id: &AccountId,
        bytes_used: u64,
    ) -> Result<(), LicenseError> {
        let cost = bytes_used as u128 * storage::storage_byte_cost();
        let attached = env::attached_deposit().as_yoctonear();
        if attached < cost {
            return Err(LicenseError::InsufficientDeposit(format!(
                "Mint requires {} yoctoNEAR for storage, got {}",
                cost, attached
            )));
        }

        let refund = attached - cost;
        if refund > 0 {
            let _ = Promise::new(payer_id.clone()).transfer(NearToken::from_yoctonear(refund));
        }
        Ok(())
    }
}
