//! Dependency domain entities.

pub mod kind;
pub mod model;

pub use kind::DependencyKind;
pub use model::Dependency;
