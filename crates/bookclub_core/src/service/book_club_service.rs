//! Book club use-case service.
//!
//! # Responsibility
//! - Provide whole-record add/update/delete entry points that run every
//!   field validator before persisting.
//! - Assemble read models (book with publisher and author, author with
//!   team affiliations) from the repository.
//!
//! # Invariants
//! - Service APIs never bypass the validators in `service::validation`.
//! - No partial record is persisted: validation of every field completes
//!   before the single write.
//! - Service layer remains storage-agnostic.

use crate::model::author::{AuthorKind, AuthoringEntity};
use crate::model::book::Book;
use crate::model::membership::{Membership, MembershipOutcome};
use crate::model::publisher::Publisher;
use crate::repo::author_repo::AuthorRepository;
use crate::repo::book_repo::BookRepository;
use crate::repo::membership_repo::MembershipRepository;
use crate::repo::publisher_repo::PublisherRepository;
use crate::repo::{BookClubStore, RepoError};
use crate::service::validation::{ValidationError, ValidationResult, Validator};
use log::info;

/// Authoring entity with the names on the other side of its memberships.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorDetail {
    pub author: AuthoringEntity,
    /// Team names for an individual author, member names for an ad-hoc
    /// team, empty for a writing group.
    pub affiliations: Vec<String>,
}

/// Book joined with its publisher and credited author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDetail {
    pub book: Book,
    pub publisher: Publisher,
    pub author: AuthorDetail,
}

/// Catalog use-case facade over a store implementation.
pub struct BookClubService<S: BookClubStore> {
    store: S,
}

impl<S: BookClubStore> BookClubService<S> {
    /// Creates a service using the provided store implementation.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Field validators over the same store, for interactive collection.
    pub fn validator(&self) -> Validator<'_, S> {
        Validator::new(&self.store)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn add_publisher(&self, publisher: &Publisher) -> ValidationResult<()> {
        let validator = self.validator();
        validator.new_publisher_name(&publisher.name)?;
        validator.new_publisher_phone(&publisher.phone)?;
        validator.new_publisher_email(&publisher.email)?;
        self.store.create_publisher(publisher)?;
        Ok(())
    }

    /// Adds an authoring entity of any variant.
    pub fn add_author(&self, author: &AuthoringEntity) -> ValidationResult<()> {
        let validator = self.validator();
        validator.new_author_name(&author.name)?;
        validator.new_author_email(&author.email)?;
        if let AuthorKind::WritingGroup { head_writer, .. } = &author.kind {
            validator.head_writer(head_writer)?;
        }
        self.store.create_author(author)?;
        Ok(())
    }

    pub fn add_book(&self, book: &Book) -> ValidationResult<()> {
        let validator = self.validator();
        validator.new_isbn(&book.isbn)?;
        validator.title(&book.title)?;
        validator.book_author(&book.title, &book.author_email)?;
        validator.book_publisher(&book.title, &book.publisher_name)?;
        self.store.create_book(book)?;
        Ok(())
    }

    /// Appends an individual author to an ad-hoc team.
    ///
    /// Both emails must name entities of the right variant. An existing
    /// pair is reported as `MembershipOutcome::Duplicate`, not as an error.
    pub fn assign_to_team(
        &self,
        individual_author_email: &str,
        ad_hoc_team_email: &str,
    ) -> ValidationResult<MembershipOutcome> {
        let validator = self.validator();
        validator.individual_author(individual_author_email)?;
        validator.ad_hoc_team(ad_hoc_team_email)?;
        let membership = Membership::new(individual_author_email, ad_hoc_team_email);
        Ok(self.store.add_membership(&membership)?)
    }

    /// Deletes the book identified by title and publisher.
    ///
    /// Returns the removed record.
    pub fn delete_book(&self, title: &str, publisher_name: &str) -> ValidationResult<Book> {
        let book = self
            .validator()
            .existing_book_by_publisher(title, publisher_name)?;
        self.store.delete_book(&book.isbn)?;
        info!("event=book_delete module=service status=ok");
        Ok(book)
    }

    /// Credits the book identified by title and publisher to another author.
    ///
    /// Returns the updated record.
    pub fn reassign_book_author(
        &self,
        title: &str,
        publisher_name: &str,
        author_email: &str,
    ) -> ValidationResult<Book> {
        let validator = self.validator();
        let mut book = validator.existing_book_by_publisher(title, publisher_name)?;
        validator.replacement_author(&book, author_email)?;
        self.store.update_book_author(&book.isbn, author_email)?;
        book.reassign_author(author_email);
        info!("event=book_reassign_author module=service status=ok");
        Ok(book)
    }

    pub fn get_publisher(&self, name: &str) -> ValidationResult<Option<Publisher>> {
        Ok(self.store.get_publisher(name)?)
    }

    pub fn get_book(&self, isbn: &str) -> ValidationResult<Option<Book>> {
        Ok(self.store.get_book(isbn)?)
    }

    pub fn get_author(&self, email: &str) -> ValidationResult<Option<AuthoringEntity>> {
        Ok(self.store.get_author(email)?)
    }

    pub fn list_publishers(&self) -> ValidationResult<Vec<Publisher>> {
        Ok(self.store.list_publishers()?)
    }

    pub fn list_books(&self) -> ValidationResult<Vec<Book>> {
        Ok(self.store.list_books()?)
    }

    pub fn list_authors(&self) -> ValidationResult<Vec<AuthoringEntity>> {
        Ok(self.store.list_authors()?)
    }

    pub fn list_memberships(&self) -> ValidationResult<Vec<Membership>> {
        Ok(self.store.list_memberships()?)
    }

    pub fn has_writing_groups(&self) -> ValidationResult<bool> {
        Ok(self
            .store
            .list_authors()?
            .iter()
            .any(AuthoringEntity::is_writing_group))
    }

    pub fn author_detail(&self, email: &str) -> ValidationResult<Option<AuthorDetail>> {
        match self.store.get_author(email)? {
            Some(author) => Ok(Some(self.describe_author(author)?)),
            None => Ok(None),
        }
    }

    /// Loads a book together with its publisher and author.
    ///
    /// A book whose references cannot be resolved indicates a storage bug and
    /// is reported as `ValidationError::Repo`.
    pub fn book_detail(&self, isbn: &str) -> ValidationResult<Option<BookDetail>> {
        let Some(book) = self.store.get_book(isbn)? else {
            return Ok(None);
        };

        let publisher = self
            .store
            .get_publisher(&book.publisher_name)?
            .ok_or_else(|| dangling_reference("publisher", &book.publisher_name))?;
        let author = self
            .store
            .get_author(&book.author_email)?
            .ok_or_else(|| dangling_reference("authoring entity", &book.author_email))?;
        let author = self.describe_author(author)?;

        Ok(Some(BookDetail {
            book,
            publisher,
            author,
        }))
    }

    fn describe_author(&self, author: AuthoringEntity) -> ValidationResult<AuthorDetail> {
        let related = match author.kind {
            AuthorKind::IndividualAuthor => self.store.teams_of(&author.email)?,
            AuthorKind::AdHocTeam => self.store.members_of(&author.email)?,
            AuthorKind::WritingGroup { .. } => Vec::new(),
        };
        Ok(AuthorDetail {
            author,
            affiliations: related.into_iter().map(|entity| entity.name).collect(),
        })
    }
}

fn dangling_reference(entity: &'static str, key: &str) -> ValidationError {
    ValidationError::Repo(RepoError::NotFound {
        entity,
        key: key.to_string(),
    })
}
