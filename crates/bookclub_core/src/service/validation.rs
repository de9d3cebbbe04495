//! Field validation routines for catalog writes.
//!
//! # Responsibility
//! - Check every creatable field before it reaches storage: maximum length,
//!   integer format, primary/unique key availability and references.
//! - Produce a specific, user-facing outcome for each violated rule.
//!
//! # Invariants
//! - Validators never write.
//! - Every outcome except `ValidationError::Repo` is recoverable: the caller
//!   re-collects the same field and validates again.
//! - Lengths are counted in characters, matching SQLite `length()` on TEXT.

use crate::model::author::{AuthorKind, AuthoringEntity};
use crate::model::book::Book;
use crate::model::membership::Membership;
use crate::model::publisher::Publisher;
use crate::model::{
    AUTHOR_EMAIL_MAX_CHARS, AUTHOR_NAME_MAX_CHARS, BOOK_ISBN_MAX_CHARS, BOOK_TITLE_MAX_CHARS,
    HEAD_WRITER_MAX_CHARS, PUBLISHER_EMAIL_MAX_CHARS, PUBLISHER_NAME_MAX_CHARS,
    PUBLISHER_PHONE_MAX_CHARS,
};
use crate::repo::author_repo::AuthorRepository;
use crate::repo::book_repo::BookRepository;
use crate::repo::membership_repo::MembershipRepository;
use crate::repo::publisher_repo::PublisherRepository;
use crate::repo::{BookClubStore, RepoError};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ValidationResult<T> = Result<T, ValidationError>;

/// Input field being validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    PublisherName,
    PublisherPhone,
    PublisherEmail,
    Isbn,
    Title,
    YearPublished,
    AuthorName,
    AuthorEmail,
    HeadWriter,
    YearFormed,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Self::PublisherName => "publisher name",
            Self::PublisherPhone => "publisher phone",
            Self::PublisherEmail => "publisher email",
            Self::Isbn => "ISBN",
            Self::Title => "title",
            Self::YearPublished => "year published",
            Self::AuthorName => "author name",
            Self::AuthorEmail => "author email",
            Self::HeadWriter => "head writer",
            Self::YearFormed => "year formed",
        }
    }
}

/// Outcome of a rejected field or record.
#[derive(Debug)]
pub enum ValidationError {
    Empty { field: Field },
    TooLong { field: Field, max: usize },
    InvalidInteger { field: Field },
    DuplicatePublisher,
    DuplicatePublisherPhone,
    DuplicatePublisherEmail,
    DuplicateIsbn,
    DuplicateAuthor,
    /// `(title, author)` already used by another book.
    DuplicateTitleForAuthor,
    /// `(title, publisher)` already used by another book.
    DuplicateTitleForPublisher,
    DuplicateMembership,
    PublisherNotFound,
    AuthorNotFound,
    BookNotFound,
    /// Referenced authoring entity exists but is the wrong variant.
    WrongKind {
        expected: &'static str,
        found: &'static str,
    },
    /// Storage failure or integrity violation; not recoverable.
    Repo(RepoError),
}

impl ValidationError {
    /// Whether the caller may re-prompt instead of aborting.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Repo(_))
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "The {} cannot be empty", field.label()),
            Self::TooLong { max, .. } => {
                write!(f, "The input exceeds the maximum character length ({max})")
            }
            Self::InvalidInteger { .. } => write!(f, "The input is not an integer"),
            Self::DuplicatePublisher => write!(f, "That publisher already exists in the table"),
            Self::DuplicatePublisherPhone => {
                write!(f, "That phone number already exists in the table")
            }
            Self::DuplicatePublisherEmail => write!(f, "That email already exists in the table"),
            Self::DuplicateIsbn => write!(f, "That book already exists in the table"),
            Self::DuplicateAuthor => {
                write!(f, "That authoring entity already exists in the table")
            }
            Self::DuplicateTitleForAuthor => {
                write!(f, "The author has already written a book with this title")
            }
            Self::DuplicateTitleForPublisher => {
                write!(f, "The publisher has already published a book with this title")
            }
            Self::DuplicateMembership => write!(f, "The author is already part of that team"),
            Self::PublisherNotFound => write!(f, "The publisher doesn't exist in the table"),
            Self::AuthorNotFound => write!(f, "The author doesn't exist in the table"),
            Self::BookNotFound => write!(f, "That book doesn't exist in the table"),
            Self::WrongKind { expected, found } => {
                write!(f, "That authoring entity is a {found}, not a {expected}")
            }
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ValidationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for ValidationError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Per-field validators backed by a catalog store.
pub struct Validator<'s, S: BookClubStore + ?Sized> {
    store: &'s S,
}

impl<'s, S: BookClubStore + ?Sized> Validator<'s, S> {
    pub fn new(store: &'s S) -> Self {
        Self { store }
    }

    /// Name for a new publisher: bounded and not yet taken.
    pub fn new_publisher_name(&self, input: &str) -> ValidationResult<String> {
        check_text(Field::PublisherName, input, PUBLISHER_NAME_MAX_CHARS)?;
        if self.store.get_publisher(input)?.is_some() {
            return Err(ValidationError::DuplicatePublisher);
        }
        Ok(input.to_string())
    }

    pub fn new_publisher_phone(&self, input: &str) -> ValidationResult<String> {
        check_text(Field::PublisherPhone, input, PUBLISHER_PHONE_MAX_CHARS)?;
        if self.store.publisher_phone_exists(input)? {
            return Err(ValidationError::DuplicatePublisherPhone);
        }
        Ok(input.to_string())
    }

    pub fn new_publisher_email(&self, input: &str) -> ValidationResult<String> {
        check_text(Field::PublisherEmail, input, PUBLISHER_EMAIL_MAX_CHARS)?;
        if self.store.publisher_email_exists(input)? {
            return Err(ValidationError::DuplicatePublisherEmail);
        }
        Ok(input.to_string())
    }

    pub fn new_isbn(&self, input: &str) -> ValidationResult<String> {
        check_text(Field::Isbn, input, BOOK_ISBN_MAX_CHARS)?;
        if self.store.get_book(input)?.is_some() {
            return Err(ValidationError::DuplicateIsbn);
        }
        Ok(input.to_string())
    }

    /// Title alone only has a width; its uniqueness depends on the author and
    /// publisher checked later.
    pub fn title(&self, input: &str) -> ValidationResult<String> {
        check_text(Field::Title, input, BOOK_TITLE_MAX_CHARS)?;
        Ok(input.to_string())
    }

    pub fn year_published(&self, input: &str) -> ValidationResult<i32> {
        parse_integer(Field::YearPublished, input)
    }

    /// Author credited on a new book titled `title`.
    pub fn book_author(&self, title: &str, email: &str) -> ValidationResult<AuthoringEntity> {
        let author = self.existing_author(email)?;
        if self.store.get_book_by_author(title, email)?.is_some() {
            return Err(ValidationError::DuplicateTitleForAuthor);
        }
        Ok(author)
    }

    /// Publisher of a new book titled `title`.
    pub fn book_publisher(&self, title: &str, name: &str) -> ValidationResult<Publisher> {
        let publisher = self.existing_publisher(name)?;
        if self.store.get_book_by_publisher(title, name)?.is_some() {
            return Err(ValidationError::DuplicateTitleForPublisher);
        }
        Ok(publisher)
    }

    /// Replacement author for a stored book.
    ///
    /// The current author is accepted; any other author must not already
    /// have a book with the same title.
    pub fn replacement_author(&self, book: &Book, email: &str) -> ValidationResult<AuthoringEntity> {
        let author = self.existing_author(email)?;
        if let Some(clash) = self.store.get_book_by_author(&book.title, email)? {
            if clash.isbn != book.isbn {
                return Err(ValidationError::DuplicateTitleForAuthor);
            }
        }
        Ok(author)
    }

    pub fn new_author_name(&self, input: &str) -> ValidationResult<String> {
        check_text(Field::AuthorName, input, AUTHOR_NAME_MAX_CHARS)?;
        Ok(input.to_string())
    }

    /// Email for a new authoring entity of any variant.
    pub fn new_author_email(&self, input: &str) -> ValidationResult<String> {
        check_text(Field::AuthorEmail, input, AUTHOR_EMAIL_MAX_CHARS)?;
        if self.store.get_author(input)?.is_some() {
            return Err(ValidationError::DuplicateAuthor);
        }
        Ok(input.to_string())
    }

    pub fn head_writer(&self, input: &str) -> ValidationResult<String> {
        check_text(Field::HeadWriter, input, HEAD_WRITER_MAX_CHARS)?;
        Ok(input.to_string())
    }

    pub fn year_formed(&self, input: &str) -> ValidationResult<i32> {
        parse_integer(Field::YearFormed, input)
    }

    pub fn existing_publisher(&self, name: &str) -> ValidationResult<Publisher> {
        self.store
            .get_publisher(name)?
            .ok_or(ValidationError::PublisherNotFound)
    }

    pub fn existing_author(&self, email: &str) -> ValidationResult<AuthoringEntity> {
        self.store
            .get_author(email)?
            .ok_or(ValidationError::AuthorNotFound)
    }

    pub fn existing_book(&self, isbn: &str) -> ValidationResult<Book> {
        self.store.get_book(isbn)?.ok_or(ValidationError::BookNotFound)
    }

    pub fn existing_book_by_publisher(
        &self,
        title: &str,
        publisher_name: &str,
    ) -> ValidationResult<Book> {
        self.store
            .get_book_by_publisher(title, publisher_name)?
            .ok_or(ValidationError::BookNotFound)
    }

    pub fn individual_author(&self, email: &str) -> ValidationResult<AuthoringEntity> {
        self.author_of_kind(email, &AuthorKind::IndividualAuthor)
    }

    pub fn ad_hoc_team(&self, email: &str) -> ValidationResult<AuthoringEntity> {
        self.author_of_kind(email, &AuthorKind::AdHocTeam)
    }

    pub fn writing_group(&self, email: &str) -> ValidationResult<AuthoringEntity> {
        let author = self.existing_author(email)?;
        if !author.is_writing_group() {
            return Err(ValidationError::WrongKind {
                expected: "WritingGroup",
                found: author.kind.label(),
            });
        }
        Ok(author)
    }

    /// Pair not yet present in the membership relation.
    pub fn new_membership(&self, membership: &Membership) -> ValidationResult<()> {
        if self.store.membership_exists(membership)? {
            return Err(ValidationError::DuplicateMembership);
        }
        Ok(())
    }

    fn author_of_kind(&self, email: &str, expected: &AuthorKind) -> ValidationResult<AuthoringEntity> {
        let author = self.existing_author(email)?;
        if std::mem::discriminant(&author.kind) != std::mem::discriminant(expected) {
            return Err(ValidationError::WrongKind {
                expected: expected.label(),
                found: author.kind.label(),
            });
        }
        Ok(author)
    }
}

fn check_text(field: Field, input: &str, max: usize) -> ValidationResult<()> {
    if input.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }
    if input.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(())
}

fn parse_integer(field: Field, input: &str) -> ValidationResult<i32> {
    input
        .trim()
        .parse::<i32>()
        .map_err(|_| ValidationError::InvalidInteger { field })
}

#[cfg(test)]
mod tests {
    use super::{check_text, parse_integer, Field, ValidationError};

    #[test]
    fn check_text_accepts_exact_width_and_rejects_one_more() {
        let exact = "x".repeat(17);
        assert!(check_text(Field::Isbn, &exact, 17).is_ok());

        let over = "x".repeat(18);
        let err = check_text(Field::Isbn, &over, 17).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::TooLong {
                field: Field::Isbn,
                max: 17
            }
        ));
    }

    #[test]
    fn check_text_counts_characters_not_bytes() {
        let accented = "é".repeat(24);
        assert!(check_text(Field::PublisherPhone, &accented, 24).is_ok());
    }

    #[test]
    fn check_text_rejects_blank_input() {
        let err = check_text(Field::Title, "   ", 80).unwrap_err();
        assert!(matches!(err, ValidationError::Empty { field: Field::Title }));
    }

    #[test]
    fn parse_integer_trims_and_rejects_garbage() {
        assert_eq!(parse_integer(Field::YearPublished, " 2020 ").unwrap(), 2020);
        assert_eq!(parse_integer(Field::YearFormed, "-12").unwrap(), -12);

        let err = parse_integer(Field::YearPublished, "twenty").unwrap_err();
        assert!(matches!(
            err,
            ValidationError::InvalidInteger {
                field: Field::YearPublished
            }
        ));
        assert!(parse_integer(Field::YearPublished, "99999999999").is_err());
    }

    #[test]
    fn too_long_message_names_the_limit() {
        let err = ValidationError::TooLong {
            field: Field::PublisherName,
            max: 80,
        };
        assert_eq!(
            err.to_string(),
            "The input exceeds the maximum character length (80)"
        );
        assert!(err.is_recoverable());
    }
}
