//! # depmap-entity
//!
//! Domain entity models for depmap. Every struct in this crate
//! represents a database table row. All entities derive `Debug`,
//! `Clone`, `Serialize`, `Deserialize`, and `sqlx::FromRow`, and
//! implement the [`depmap_core::Entity`] contract.

pub mod api_key;
pub mod dependency;
pub mod organization;
pub mod package;
pub mod repo;
