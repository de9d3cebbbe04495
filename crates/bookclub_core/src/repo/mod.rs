//! Repository layer contracts and the SQLite persistence implementation.
//!
//! # Responsibility
//! - Define per-aggregate lookup/write contracts for the catalog.
//! - Keep SQL inside named queries so callers never see statement text.
//! - Detect integrity violations in single-row lookups.
//!
//! # Invariants
//! - Lookups are pure reads.
//! - A lookup by primary or unique key returns at most one row; more rows is
//!   reported as `RepoError::IntegrityViolation` and is never recoverable.
//! - Listings return rows in insertion order.

use crate::db::migrations::{current_user_version, latest_version, REQUIRED_TABLES};
use crate::db::DbError;
use log::{debug, error};
use rusqlite::{Connection, Params, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod author_repo;
pub mod book_repo;
pub mod membership_repo;
pub mod publisher_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for catalog persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// Write targeted a record that does not exist.
    NotFound {
        entity: &'static str,
        key: String,
    },
    /// Persisted row cannot be mapped onto the domain model.
    InvalidData(String),
    /// A lookup that must match at most one row matched several.
    IntegrityViolation {
        query: &'static str,
        rows: usize,
    },
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound { entity, key } => write!(f, "{entity} not found: {key}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
            Self::IntegrityViolation { query, rows } => write!(
                f,
                "integrity violation: query `{query}` matched {rows} rows, expected at most one"
            ),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}"
            ),
            Self::MissingRequiredTable(table) => write!(f, "missing required table `{table}`"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Predefined parameterized statement, identified by name in log events.
#[derive(Debug, Clone, Copy)]
pub struct NamedQuery {
    pub name: &'static str,
    pub sql: &'static str,
}

impl NamedQuery {
    pub const fn new(name: &'static str, sql: &'static str) -> Self {
        Self { name, sql }
    }
}

/// Full catalog store: every repository contract on one handle.
pub trait BookClubStore:
    publisher_repo::PublisherRepository
    + author_repo::AuthorRepository
    + book_repo::BookRepository
    + membership_repo::MembershipRepository
{
}

impl<T> BookClubStore for T where
    T: publisher_repo::PublisherRepository
        + author_repo::AuthorRepository
        + book_repo::BookRepository
        + membership_repo::MembershipRepository
{
}

/// SQLite-backed catalog repository.
///
/// Borrowing a `Transaction` works through deref, so one repository can be
/// built per unit of work.
pub struct SqliteBookClubRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteBookClubRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    ///
    /// # Errors
    /// - `UninitializedConnection` when the schema version is not the latest.
    /// - `MissingRequiredTable` when a catalog table is absent.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        let expected_version = latest_version();
        let actual_version = current_user_version(conn)?;
        if actual_version != expected_version {
            return Err(RepoError::UninitializedConnection {
                expected_version,
                actual_version,
            });
        }

        for table in REQUIRED_TABLES {
            if !table_exists(conn, table)? {
                return Err(RepoError::MissingRequiredTable(table));
            }
        }

        Ok(Self { conn })
    }

    fn fetch_optional<T, P, F>(&self, query: &NamedQuery, params: P, map: F) -> RepoResult<Option<T>>
    where
        P: Params,
        F: Fn(&Row<'_>) -> RepoResult<T>,
    {
        debug!("event=query module=repo query={}", query.name);
        let mut stmt = self.conn.prepare_cached(query.sql)?;
        let mut rows = stmt.query(params)?;

        let first = match rows.next()? {
            Some(row) => map(row)?,
            None => return Ok(None),
        };

        let mut matched = 1;
        while rows.next()?.is_some() {
            matched += 1;
        }
        if matched > 1 {
            error!(
                "event=query module=repo status=error error_code=integrity_violation query={} rows={}",
                query.name, matched
            );
            return Err(RepoError::IntegrityViolation {
                query: query.name,
                rows: matched,
            });
        }

        Ok(Some(first))
    }

    fn fetch_all<T, P, F>(&self, query: &NamedQuery, params: P, map: F) -> RepoResult<Vec<T>>
    where
        P: Params,
        F: Fn(&Row<'_>) -> RepoResult<T>,
    {
        debug!("event=query module=repo query={}", query.name);
        let mut stmt = self.conn.prepare_cached(query.sql)?;
        let mut rows = stmt.query(params)?;
        let mut items = Vec::new();
        while let Some(row) = rows.next()? {
            items.push(map(row)?);
        }
        Ok(items)
    }
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}
