//! Package domain entities.

pub mod model;

pub use model::Package;
