//! Shared plumbing for the SeaORM repositories.

use sea_orm::{DbErr, SqlErr};

use quill_core::error::RepoError;

/// Map a failed read.
pub(crate) fn query_err(err: DbErr) -> RepoError {
    match err {
        DbErr::Conn(e) => RepoError::Connection(e.to_string()),
        DbErr::ConnectionAcquire(e) => RepoError::Connection(e.to_string()),
        other => RepoError::Query(other.to_string()),
    }
}

/// Map a failed write, classifying constraint violations.
///
/// A foreign key violation means the referenced row is gone, which callers
/// treat the same as a guarded write that matched nothing.
pub(crate) fn write_err(err: DbErr) -> RepoError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(msg)) => {
            tracing::debug!(error = %msg, "Unique constraint violated");
            RepoError::Constraint("Entity already exists".to_string())
        }
        Some(SqlErr::ForeignKeyConstraintViolation(msg)) => {
            tracing::debug!(error = %msg, "Foreign key constraint violated");
            RepoError::NotFound
        }
        _ => query_err(err),
    }
}

/// A guarded update or delete must have touched a row.
pub(crate) fn ensure_affected(rows_affected: u64) -> Result<(), RepoError> {
    if rows_affected == 0 {
        return Err(RepoError::NotFound);
    }
    Ok(())
}
