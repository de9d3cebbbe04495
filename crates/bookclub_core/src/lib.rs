//! Core domain logic for the book club catalog.
//! This crate is the single source of truth for catalog invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::author::{AuthorKind, AuthoringEntity};
pub use model::book::Book;
pub use model::membership::{Membership, MembershipOutcome};
pub use model::publisher::Publisher;
pub use repo::author_repo::AuthorRepository;
pub use repo::book_repo::BookRepository;
pub use repo::membership_repo::MembershipRepository;
pub use repo::publisher_repo::PublisherRepository;
pub use repo::{BookClubStore, NamedQuery, RepoError, RepoResult, SqliteBookClubRepository};
pub use service::book_club_service::{AuthorDetail, BookClubService, BookDetail};
pub use service::validation::{Field, ValidationError, ValidationResult, Validator};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
