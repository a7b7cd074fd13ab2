//! Repository domain entities.

pub mod model;

pub use model::Repo;
