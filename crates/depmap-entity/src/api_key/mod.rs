//! API key domain entities.

pub mod model;
pub mod tier;

pub use model::ApiKey;
pub use tier::KeyTier;
