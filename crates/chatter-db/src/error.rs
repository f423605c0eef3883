use rusqlite::ErrorCode;
use rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A UNIQUE column rejected the write.
    #[error("unique constraint violated")]
    UniqueViolation,
    #[error("database lock poisoned")]
    LockPoisoned,
    #[error("sqlite error: {0}")]
    Sqlite(rusqlite::Error),
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(e, _)
                if e.code == ErrorCode::ConstraintViolation
                    && e.extended_code == SQLITE_CONSTRAINT_UNIQUE =>
            {
                Self::UniqueViolation
            }
            _ => Self::Sqlite(err),
        }
    }
}
