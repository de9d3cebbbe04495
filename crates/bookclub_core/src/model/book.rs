//! Book domain model.
//!
//! # Responsibility
//! - Define the book record and its references to publisher and author.
//!
//! # Invariants
//! - `isbn` is the primary key.
//! - `(title, publisher_name)` is unique across all books.
//! - `(title, author_email)` is unique across all books.
//! - `publisher_name` is fixed at creation; `author_email` may be reassigned.

use serde::{Deserialize, Serialize};

/// Published work credited to one authoring entity.
///
/// References are held by primary key so the record maps one-to-one onto the
/// `books` row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub isbn: String,
    pub title: String,
    pub year_published: i32,
    /// Primary key of the owning publisher.
    pub publisher_name: String,
    /// Primary key of the credited authoring entity.
    pub author_email: String,
}

impl Book {
    pub fn new(
        isbn: impl Into<String>,
        title: impl Into<String>,
        year_published: i32,
        publisher_name: impl Into<String>,
        author_email: impl Into<String>,
    ) -> Self {
        Self {
            isbn: isbn.into(),
            title: title.into(),
            year_published,
            publisher_name: publisher_name.into(),
            author_email: author_email.into(),
        }
    }

    /// Credits this book to a different authoring entity.
    ///
    /// Callers must have checked that the new author exists and has no other
    /// book with the same title.
    pub fn reassign_author(&mut self, author_email: impl Into<String>) {
        self.author_email = author_email.into();
    }
}
