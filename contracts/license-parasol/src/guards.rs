use crate::*;

pub(crate) fn check_one_yocto() -> Result<(), LicenseError> {
    if env::attached_deposit().as_yoctonear() != ONE_YOCTO.as_yoctonear() {
        return Err(LicenseError::InsufficientDeposit(
            "Requires attached deposit of exactly 1 yoctoNEAR".into(),
        ));
    }
    Ok(())
}

impl Contract {
    pub(crate) fn check_contract_owner(&self, actor_id: &AccountId) -> Result<(), LicenseError> {
        if actor_id != &self.owner_id {
            return Err(LicenseError::only_owner("contract owner"));
        }
        Ok(())
    }
}
