//! Authoring entity repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist all three authoring entity variants in `authoring_entities`.
//! - Map the stored discriminator back onto `AuthorKind`.
//!
//! # Invariants
//! - `head_writer`/`year_formed` are non-null exactly for writing groups.
//! - Rows with an unknown discriminator are rejected as invalid data.

use super::{NamedQuery, RepoError, RepoResult, SqliteBookClubRepository};
use crate::model::author::{AuthorKind, AuthoringEntity};
use log::info;
use rusqlite::{params, Row};

const RETURN_AUTHOR: NamedQuery = NamedQuery::new(
    "return_author",
    "SELECT email, authoring_entity_type, name, head_writer, year_formed
     FROM authoring_entities
     WHERE email = ?1;",
);
const RETURN_ALL_AUTHORS: NamedQuery = NamedQuery::new(
    "return_all_authors",
    "SELECT email, authoring_entity_type, name, head_writer, year_formed
     FROM authoring_entities
     ORDER BY rowid ASC;",
);

/// Repository interface for authoring entities of every variant.
pub trait AuthorRepository {
    fn create_author(&self, author: &AuthoringEntity) -> RepoResult<()>;
    fn get_author(&self, email: &str) -> RepoResult<Option<AuthoringEntity>>;
    fn list_authors(&self) -> RepoResult<Vec<AuthoringEntity>>;
}

impl AuthorRepository for SqliteBookClubRepository<'_> {
    fn create_author(&self, author: &AuthoringEntity) -> RepoResult<()> {
        let (head_writer, year_formed) = match &author.kind {
            AuthorKind::WritingGroup {
                head_writer,
                year_formed,
            } => (Some(head_writer.as_str()), Some(*year_formed)),
            AuthorKind::IndividualAuthor | AuthorKind::AdHocTeam => (None, None),
        };

        self.conn.execute(
            "INSERT INTO authoring_entities (
                email,
                authoring_entity_type,
                name,
                head_writer,
                year_formed
            ) VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                author.email.as_str(),
                author.kind.as_db_str(),
                author.name.as_str(),
                head_writer,
                year_formed,
            ],
        )?;
        info!(
            "event=author_create module=repo status=ok kind={}",
            author.kind.as_db_str()
        );
        Ok(())
    }

    fn get_author(&self, email: &str) -> RepoResult<Option<AuthoringEntity>> {
        self.fetch_optional(&RETURN_AUTHOR, [email], parse_author_row)
    }

    fn list_authors(&self) -> RepoResult<Vec<AuthoringEntity>> {
        self.fetch_all(&RETURN_ALL_AUTHORS, [], parse_author_row)
    }
}

pub(crate) fn parse_author_row(row: &Row<'_>) -> RepoResult<AuthoringEntity> {
    let email: String = row.get("email")?;
    let type_text: String = row.get("authoring_entity_type")?;
    let head_writer: Option<String> = row.get("head_writer")?;
    let year_formed: Option<i32> = row.get("year_formed")?;

    let kind = match type_text.as_str() {
        "individual_author" => AuthorKind::IndividualAuthor,
        "ad_hoc_team" => AuthorKind::AdHocTeam,
        "writing_group" => match (head_writer, year_formed) {
            (Some(head_writer), Some(year_formed)) => AuthorKind::WritingGroup {
                head_writer,
                year_formed,
            },
            _ => {
                return Err(RepoError::InvalidData(format!(
                    "writing group `{email}` is missing head_writer or year_formed"
                )));
            }
        },
        other => {
            return Err(RepoError::InvalidData(format!(
                "invalid authoring entity type `{other}` in authoring_entities.authoring_entity_type"
            )));
        }
    };

    Ok(AuthoringEntity {
        email,
        name: row.get("name")?,
        kind,
    })
}
