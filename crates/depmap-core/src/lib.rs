//! # depmap-core
//!
//! Core crate for the depmap data-access engine. Contains the entity
//! contract, configuration schemas, pagination/sorting/value types,
//! and the unified error system.
//!
//! This crate has **no** internal dependencies on other depmap crates.

pub mod config;
pub mod entity;
pub mod error;
pub mod result;
pub mod types;

pub use entity::Entity;
pub use error::AppError;
pub use result::AppResult;
