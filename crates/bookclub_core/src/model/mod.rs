//! Book club domain model.
//!
//! # Responsibility
//! - Define the canonical records persisted by the catalog.
//! - Publish the column widths shared by validation and schema.
//!
//! # Invariants
//! - Every record is identified by its natural primary key (`name`, `email`,
//!   `isbn`); there are no surrogate ids.
//! - Records carry no enforcement logic; constraints are checked by
//!   `service::validation` before any write.

pub mod author;
pub mod book;
pub mod membership;
pub mod publisher;

/// `publishers.name` width.
pub const PUBLISHER_NAME_MAX_CHARS: usize = 80;
/// `publishers.phone` width.
pub const PUBLISHER_PHONE_MAX_CHARS: usize = 24;
/// `publishers.email` width.
pub const PUBLISHER_EMAIL_MAX_CHARS: usize = 80;

/// `books.isbn` width.
pub const BOOK_ISBN_MAX_CHARS: usize = 17;
/// `books.title` width.
pub const BOOK_TITLE_MAX_CHARS: usize = 80;

/// `authoring_entities.email` width, shared by every variant.
pub const AUTHOR_EMAIL_MAX_CHARS: usize = 30;
/// `authoring_entities.name` width, shared by every variant.
pub const AUTHOR_NAME_MAX_CHARS: usize = 80;
/// `authoring_entities.head_writer` width.
pub const HEAD_WRITER_MAX_CHARS: usize = 80;
