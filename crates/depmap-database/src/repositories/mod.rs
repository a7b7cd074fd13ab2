//! Entity-specific repositories composed over the generic engine.

pub mod organization;

pub use organization::OrganizationRepository;
