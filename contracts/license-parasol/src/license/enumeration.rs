use crate::*;

#[near]
impl Contract {
    /// Token id held by `owner_id` at `index`. Every holder owns exactly one
    /// license, so only index 0 resolves.
    #[handle_result]
    pub fn token_of_owner_by_index(
        &self,
        owner_id: AccountId,
        index: U64,
    ) -> Result<U64, LicenseError> {
        let Some(token_id) = self.holders.get(&owner_id) else {
            return Err(LicenseError::no_license(&owner_id));
        };
        if index.0 >= 1 {
            return Err(LicenseError::index_out_of_bounds(index.0, 1));
        }
        Ok(U64(*token_id))
    }

    pub fn balance_of(&self, owner_id: AccountId) -> U64 {
        self.holders
            .get(&owner_id)
            .map(|_| U64(1))
            .unwrap_or(U64(0))
    }

    pub fn has_license(&self, owner_id: AccountId) -> bool {
        self.holders.contains_key(&owner_id)
    }

    pub fn total_supply(&self) -> U64 {
        U64(self.current_supply)
    }

    pub fn get_max_supply(&self) -> U64 {
        U64(self.max_supply)
    }

    pub fn get_license(&self, token_id: U64) -> Option<&LicenseMetadata> {
        self.licenses.get(&token_id.0)
    }

    pub fn get_licenses(
        &self,
        from_index: Option<U128>,
        limit: Option<u64>,
    ) -> Vec<&LicenseMetadata> {
        let start = from_index.map(|i| i.0 as usize).unwrap_or(0);
        let limit = limit.unwrap_or(50).min(100) as usize;

        self.licenses
            .iter()
            .skip(start)
            .take(limit)
            .map(|(_, license)| license)
            .collect()
    }
}
