mod enumeration;
mod metadata;
mod mint;
pub mod types;
