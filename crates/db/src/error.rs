use allnote_core::error::CoreError;

/// Error returned by repository operations that convert request input
/// before touching the database.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    /// The input was rejected before any query ran (e.g. a malformed reference).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The query itself failed.
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl RepoError {
    /// Turn a violation of the unique constraint `constraint` into a
    /// [`CoreError::Conflict`]; any other error passes through unchanged.
    pub(crate) fn unique_violation(err: sqlx::Error, constraint: &str, message: &str) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.constraint() == Some(constraint) => {
                RepoError::Core(CoreError::Conflict(message.to_string()))
            }
            _ => RepoError::Database(err),
        }
    }
}
