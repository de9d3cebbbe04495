//! Session-level error type for the interactive console.

use bookclub_core::db::DbError;
use bookclub_core::{RepoError, ValidationError};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type SessionResult<T> = Result<T, SessionError>;

/// Failure that ends the interactive session.
///
/// Recoverable validation outcomes never reach this type; they are reported
/// inline and the field is prompted again.
#[derive(Debug)]
pub enum SessionError {
    /// Input stream reached end of file.
    InputClosed,
    Io(std::io::Error),
    Db(DbError),
    /// Integrity violation or storage failure surfaced during validation.
    Fatal(ValidationError),
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InputClosed => write!(f, "input closed"),
            Self::Io(err) => write!(f, "console i/o failed: {err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::Fatal(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InputClosed => None,
            Self::Io(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::Fatal(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for SessionError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<DbError> for SessionError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for SessionError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<RepoError> for SessionError {
    fn from(value: RepoError) -> Self {
        Self::Fatal(ValidationError::Repo(value))
    }
}

impl From<ValidationError> for SessionError {
    fn from(value: ValidationError) -> Self {
        Self::Fatal(value)
    }
}
