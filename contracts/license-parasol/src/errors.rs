use near_sdk_macros::NearSchema;

#[derive(NearSchema, near_sdk::FunctionError)]
#[abi(json)]
#[derive(Debug, Clone, serde::Serialize)]
pub enum LicenseError {
    Unauthorized(String),
    InvalidInput(String),
    NotFound(String),
    InvalidState(String),
    InsufficientDeposit(String),
    InternalError(String),
}

impl std::fmt::Display for LicenseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::NotFound(msg) => write!(f, "Not found: {}", msg),
            Self::InvalidState(msg) => write!(f, "Invalid state: {}", msg),
            Self::InsufficientDeposit(msg) => write!(f, "Insufficient deposit: {}", msg),
            Self::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl LicenseError {
    pub fn token_not_found() -> Self {
        Self::NotFound("License token not found".into())
    }
    pub fn no_license(owner_id: &near_sdk::AccountId) -> Self {
        Self::NotFound(format!("{} holds no license", owner_id))
    }
    pub fn index_out_of_bounds(index: u64, balance: u64) -> Self {
        Self::InvalidInput(format!(
            "Index {} out of bounds for balance {}",
            index, balance
        ))
    }
    pub fn max_supply_reached(max_supply: u64) -> Self {
        Self::InvalidState(format!(
            "Maximum supply of {} licenses reached",
            max_supply
        ))
    }
    pub fn already_has_license(owner_id: &near_sdk::AccountId) -> Self {
        Self::InvalidState(format!("{} already holds a license", owner_id))
    }
    pub fn only_owner(what: &str) -> Self {
        Self::Unauthorized(format!("Only {} can perform this action", what))
    }
}
