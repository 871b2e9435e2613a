mod types;

pub use types::StorageKey;
pub(crate) use types::storage_byte_cost;
