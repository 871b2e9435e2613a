mod builder;
mod types;

mod contract;
mod license;
mod nep171;

pub use contract::*;
pub use license::*;
pub use nep171::*;

pub(crate) const STANDARD: &str = "parasol";
pub(crate) const VERSION: &str = "1.0.0";
pub(crate) const PREFIX: &str = "EVENT_JSON:";

pub(crate) const LICENSE: &str = "LICENSE_UPDATE";
pub(crate) const CONTRACT: &str = "CONTRACT_UPDATE";
