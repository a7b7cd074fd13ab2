//! The transactional data session.
//!
//! A [`Session`] owns one database transaction for its whole lifetime.
//! Repository calls stage changes on it; nothing becomes durable until
//! [`Session::commit`]. Both `commit` and `rollback` consume the
//! transaction, after which every further use fails with
//! `INVALID_STATE`. A session dropped with its transaction still open
//! rolls back, so no exit path leaks uncommitted writes.

use std::fmt;

use sqlx::postgres::{PgConnection, PgPool};
use sqlx::{Postgres, Transaction};
use tracing::debug;

use depmap_core::error::AppError;
use depmap_core::result::AppResult;

use crate::translate;

/// One database transaction with explicit commit/rollback control.
pub struct Session {
    tx: Option<Transaction<'static, Postgres>>,
}

impl Session {
    /// Begin a transaction on the given pool.
    pub async fn begin(pool: &PgPool) -> AppResult<Self> {
        let tx = pool
            .begin()
            .await
            .map_err(|e| translate::storage_error("session", "begin", e))?;
        debug!("database session started");
        Ok(Self { tx: Some(tx) })
    }

    /// Whether the transaction is still open.
    pub fn is_active(&self) -> bool {
        self.tx.is_some()
    }

    /// Return the live connection for running queries inside this
    /// session's transaction.
    ///
    /// Composed entity repositories use this to run their own statements
    /// on the same transaction as the generic engine.
    pub fn connection(&mut self) -> AppResult<&mut PgConnection> {
        self.tx.as_deref_mut().ok_or_else(Self::finished)
    }

    /// Make all staged changes durable and consume the transaction.
    pub async fn commit(&mut self) -> AppResult<()> {
        let tx = self.tx.take().ok_or_else(Self::finished)?;
        tx.commit()
            .await
            .map_err(|e| translate::storage_error("session", "commit", e))?;
        debug!("database session committed");
        Ok(())
    }

    /// Discard all staged changes and consume the transaction.
    pub async fn rollback(&mut self) -> AppResult<()> {
        let tx = self.tx.take().ok_or_else(Self::finished)?;
        tx.rollback()
            .await
            .map_err(|e| translate::storage_error("session", "rollback", e))?;
        debug!("database session rolled back");
        Ok(())
    }

    fn finished() -> AppError {
        AppError::invalid_state("session already finished; begin a new session")
    }

    /// A session whose transaction is already consumed, for exercising
    /// the invalid-state paths without a database.
    #[cfg(test)]
    pub(crate) fn detached() -> Self {
        Self { tx: None }
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("active", &self.is_active())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use depmap_core::error::ErrorKind;

    #[test]
    fn test_finished_session_refuses_queries() {
        let mut session = Session::detached();
        assert!(!session.is_active());
        let err = session.connection().expect_err("should fail");
        assert_eq!(err.kind, ErrorKind::InvalidState);
    }

    #[tokio::test]
    async fn test_finished_session_refuses_commit_and_rollback() {
        let mut session = Session::detached();
        let err = session.commit().await.expect_err("should fail");
        assert_eq!(err.kind, ErrorKind::InvalidState);
        let err = session.rollback().await.expect_err("should fail");
        assert_eq!(err.kind, ErrorKind::InvalidState);
    }
}
