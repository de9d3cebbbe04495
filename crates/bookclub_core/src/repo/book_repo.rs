//! Book repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist, look up, reassign and delete books.
//! - Serve the composite `(title, author)` and `(title, publisher)` lookups.
//!
//! # Invariants
//! - Only the author reference of a stored book is ever updated.
//! - Delete and update report `NotFound` when no row changed.

use super::{NamedQuery, RepoError, RepoResult, SqliteBookClubRepository};
use crate::model::book::Book;
use log::info;
use rusqlite::{params, Row};

const RETURN_BOOK: NamedQuery = NamedQuery::new(
    "return_book",
    "SELECT isbn, title, year_published, publisher_name, authoring_entities_email
     FROM books
     WHERE isbn = ?1;",
);
const RETURN_BOOK_BY_AUTHOR: NamedQuery = NamedQuery::new(
    "return_book_by_author",
    "SELECT b.isbn, b.title, b.year_published, b.publisher_name, b.authoring_entities_email
     FROM books b
     INNER JOIN authoring_entities a ON a.email = b.authoring_entities_email
     WHERE b.title = ?1 AND a.email = ?2;",
);
const RETURN_BOOK_BY_PUBLISHER: NamedQuery = NamedQuery::new(
    "return_book_by_publisher",
    "SELECT b.isbn, b.title, b.year_published, b.publisher_name, b.authoring_entities_email
     FROM books b
     INNER JOIN publishers p ON p.name = b.publisher_name
     WHERE b.title = ?1 AND p.name = ?2;",
);
const RETURN_ALL_BOOKS: NamedQuery = NamedQuery::new(
    "return_all_books",
    "SELECT isbn, title, year_published, publisher_name, authoring_entities_email
     FROM books
     ORDER BY rowid ASC;",
);

/// Repository interface for books.
pub trait BookRepository {
    fn create_book(&self, book: &Book) -> RepoResult<()>;
    fn get_book(&self, isbn: &str) -> RepoResult<Option<Book>>;
    fn get_book_by_author(&self, title: &str, author_email: &str) -> RepoResult<Option<Book>>;
    fn get_book_by_publisher(&self, title: &str, publisher_name: &str)
        -> RepoResult<Option<Book>>;
    fn list_books(&self) -> RepoResult<Vec<Book>>;
    /// Points the book at a different authoring entity.
    fn update_book_author(&self, isbn: &str, author_email: &str) -> RepoResult<()>;
    fn delete_book(&self, isbn: &str) -> RepoResult<()>;
}

impl BookRepository for SqliteBookClubRepository<'_> {
    fn create_book(&self, book: &Book) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO books (
                isbn,
                title,
                year_published,
                publisher_name,
                authoring_entities_email
            ) VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                book.isbn.as_str(),
                book.title.as_str(),
                book.year_published,
                book.publisher_name.as_str(),
                book.author_email.as_str(),
            ],
        )?;
        info!("event=book_create module=repo status=ok");
        Ok(())
    }

    fn get_book(&self, isbn: &str) -> RepoResult<Option<Book>> {
        self.fetch_optional(&RETURN_BOOK, [isbn], parse_book_row)
    }

    fn get_book_by_author(&self, title: &str, author_email: &str) -> RepoResult<Option<Book>> {
        self.fetch_optional(
            &RETURN_BOOK_BY_AUTHOR,
            [title, author_email],
            parse_book_row,
        )
    }

    fn get_book_by_publisher(
        &self,
        title: &str,
        publisher_name: &str,
    ) -> RepoResult<Option<Book>> {
        self.fetch_optional(
            &RETURN_BOOK_BY_PUBLISHER,
            [title, publisher_name],
            parse_book_row,
        )
    }

    fn list_books(&self) -> RepoResult<Vec<Book>> {
        self.fetch_all(&RETURN_ALL_BOOKS, [], parse_book_row)
    }

    fn update_book_author(&self, isbn: &str, author_email: &str) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE books SET authoring_entities_email = ?2 WHERE isbn = ?1;",
            [isbn, author_email],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound {
                entity: "book",
                key: isbn.to_string(),
            });
        }

        info!("event=book_update_author module=repo status=ok");
        Ok(())
    }

    fn delete_book(&self, isbn: &str) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM books WHERE isbn = ?1;", [isbn])?;

        if changed == 0 {
            return Err(RepoError::NotFound {
                entity: "book",
                key: isbn.to_string(),
            });
        }

        info!("event=book_delete module=repo status=ok");
        Ok(())
    }
}

fn parse_book_row(row: &Row<'_>) -> RepoResult<Book> {
    Ok(Book {
        isbn: row.get("isbn")?,
        title: row.get("title")?,
        year_published: row.get("year_published")?,
        publisher_name: row.get("publisher_name")?,
        author_email: row.get("authoring_entities_email")?,
    })
}
