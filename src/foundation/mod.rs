/// Runtime configuration and the wiki's fixed endpoints.
pub mod config;
/// Crate-wide error type.
pub mod error;
