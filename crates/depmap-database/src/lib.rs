//! # depmap-database
//!
//! PostgreSQL connection management, the transactional data session,
//! and the generic repository engine for depmap entities.
//!
//! All writes go through a [`Session`]: a transaction begun on the pool,
//! staged by repository calls, and made durable only by an explicit
//! [`Session::commit`]. Dropping a session without committing rolls it
//! back.

pub mod connection;
pub mod instrument;
pub mod repositories;
pub mod repository;
pub mod session;

mod sql;
mod translate;

pub use connection::DatabasePool;
pub use instrument::Instrumented;
pub use repository::{DeleteMode, Repository};
pub use session::Session;
