//! Publisher repository contract and SQLite implementation.
//!
//! # Invariants
//! - Publishers are never updated or deleted.
//! - Phone and email existence checks match exactly, without case folding.

use super::{NamedQuery, RepoResult, SqliteBookClubRepository};
use crate::model::publisher::Publisher;
use log::info;
use rusqlite::{params, Row};

const RETURN_PUBLISHER: NamedQuery = NamedQuery::new(
    "return_publisher",
    "SELECT name, phone, email FROM publishers WHERE name = ?1;",
);
const RETURN_PUBLISHER_PHONE: NamedQuery = NamedQuery::new(
    "return_publisher_phone",
    "SELECT name, phone, email FROM publishers WHERE phone = ?1;",
);
const RETURN_PUBLISHER_EMAIL: NamedQuery = NamedQuery::new(
    "return_publisher_email",
    "SELECT name, phone, email FROM publishers WHERE email = ?1;",
);
const RETURN_ALL_PUBLISHERS: NamedQuery = NamedQuery::new(
    "return_all_publishers",
    "SELECT name, phone, email FROM publishers ORDER BY rowid ASC;",
);

/// Repository interface for publishers.
pub trait PublisherRepository {
    fn create_publisher(&self, publisher: &Publisher) -> RepoResult<()>;
    fn get_publisher(&self, name: &str) -> RepoResult<Option<Publisher>>;
    fn publisher_phone_exists(&self, phone: &str) -> RepoResult<bool>;
    fn publisher_email_exists(&self, email: &str) -> RepoResult<bool>;
    fn list_publishers(&self) -> RepoResult<Vec<Publisher>>;
}

impl PublisherRepository for SqliteBookClubRepository<'_> {
    fn create_publisher(&self, publisher: &Publisher) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO publishers (name, phone, email) VALUES (?1, ?2, ?3);",
            params![
                publisher.name.as_str(),
                publisher.phone.as_str(),
                publisher.email.as_str(),
            ],
        )?;
        info!("event=publisher_create module=repo status=ok");
        Ok(())
    }

    fn get_publisher(&self, name: &str) -> RepoResult<Option<Publisher>> {
        self.fetch_optional(&RETURN_PUBLISHER, [name], parse_publisher_row)
    }

    fn publisher_phone_exists(&self, phone: &str) -> RepoResult<bool> {
        let found = self.fetch_optional(&RETURN_PUBLISHER_PHONE, [phone], parse_publisher_row)?;
        Ok(found.is_some())
    }

    fn publisher_email_exists(&self, email: &str) -> RepoResult<bool> {
        let found = self.fetch_optional(&RETURN_PUBLISHER_EMAIL, [email], parse_publisher_row)?;
        Ok(found.is_some())
    }

    fn list_publishers(&self) -> RepoResult<Vec<Publisher>> {
        self.fetch_all(&RETURN_ALL_PUBLISHERS, [], parse_publisher_row)
    }
}

fn parse_publisher_row(row: &Row<'_>) -> RepoResult<Publisher> {
    Ok(Publisher {
        name: row.get("name")?,
        phone: row.get("phone")?,
        email: row.get("email")?,
    })
}
