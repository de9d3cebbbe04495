//! Menu/command dispatcher.
//!
//! # Responsibility
//! - Present the menus, collect each field through its validator, and hand
//!   whole records to `BookClubService`.
//! - Wrap every pass through the main menu in one SQLite transaction.
//!
//! # Invariants
//! - A record is persisted only after every field was accepted.
//! - A pass commits only when its action completes; end of input or a fatal
//!   error rolls the open pass back.

use crate::console::Console;
use crate::error::{SessionError, SessionResult};
use crate::render;
use bookclub_core::{
    AuthoringEntity, Book, BookClubService, MembershipOutcome, Publisher,
    SqliteBookClubRepository, ValidationError,
};
use log::info;
use rusqlite::Connection;
use std::io::{BufRead, Write};

type Service<'conn> = BookClubService<SqliteBookClubRepository<'conn>>;

const MAIN_MENU: &str = "\nMain Menu
1. Add object
2. List information
3. Delete a book
4. Update a book
5. List primary keys
0. Quit
 >> ";

const ADD_MENU: &str = "\nWhat would you like to add?
1. Publisher
2. Book
3. Writing group
4. Individual author
5. Ad hoc team
6. Assign an individual author to an ad hoc team
0. Back
 >> ";

const INFO_MENU: &str = "\nWhat would you like to see?
1. Publisher by name
2. Book by ISBN
3. Writing group by email
0. Back
 >> ";

const KEYS_MENU: &str = "\nWhich primary keys would you like to see?
1. Publishers
2. Books
3. Authoring entities
0. Back
 >> ";

enum Step {
    Continue,
    Quit,
}

/// Runs the main menu loop until the user quits or input ends.
pub fn run_session<R: BufRead, W: Write>(
    conn: &mut Connection,
    console: &mut Console<R, W>,
) -> SessionResult<()> {
    info!("event=session_start module=cli status=ok");
    loop {
        let tx = conn.transaction()?;
        let step = {
            let service = BookClubService::new(SqliteBookClubRepository::try_new(&tx)?);
            main_menu(&service, console)
        };

        match step {
            Ok(Step::Continue) => tx.commit()?,
            Ok(Step::Quit) => {
                tx.commit()?;
                info!("event=session_end module=cli status=ok reason=quit");
                return Ok(());
            }
            Err(SessionError::InputClosed) => {
                tx.rollback()?;
                info!("event=session_end module=cli status=ok reason=input_closed");
                return Ok(());
            }
            Err(err) => return Err(err),
        }
    }
}

fn main_menu<R: BufRead, W: Write>(
    service: &Service<'_>,
    console: &mut Console<R, W>,
) -> SessionResult<Step> {
    match console.choose(MAIN_MENU, 0, 5)? {
        1 => add_menu(service, console)?,
        2 => info_menu(service, console)?,
        3 => delete_book(service, console)?,
        4 => update_book(service, console)?,
        5 => keys_menu(service, console)?,
        _ => return Ok(Step::Quit),
    }
    Ok(Step::Continue)
}

fn add_menu<R: BufRead, W: Write>(
    service: &Service<'_>,
    console: &mut Console<R, W>,
) -> SessionResult<()> {
    match console.choose(ADD_MENU, 0, 6)? {
        1 => add_publisher(service, console),
        2 => add_book(service, console),
        3 => add_writing_group(service, console),
        4 => add_individual_author(service, console),
        5 => add_ad_hoc_team(service, console),
        6 => assign_to_team(service, console),
        _ => Ok(()),
    }
}

fn add_publisher<R: BufRead, W: Write>(
    service: &Service<'_>,
    console: &mut Console<R, W>,
) -> SessionResult<()> {
    let validator = service.validator();
    let name = console.collect("the publisher's name", |input| {
        validator.new_publisher_name(input)
    })?;
    let phone = console.collect("the publisher's phone number", |input| {
        validator.new_publisher_phone(input)
    })?;
    let email = console.collect("the publisher's email", |input| {
        validator.new_publisher_email(input)
    })?;

    let publisher = Publisher::new(name, phone, email);
    service.add_publisher(&publisher)?;
    console.say(&format!("Added publisher {}.", publisher.name))
}

fn add_book<R: BufRead, W: Write>(
    service: &Service<'_>,
    console: &mut Console<R, W>,
) -> SessionResult<()> {
    if service.list_publishers()?.is_empty() {
        return console.say("Cannot add a book; there are no publishers.");
    }
    if service.list_authors()?.is_empty() {
        return console.say("Cannot add a book; there are no authoring entities.");
    }

    let validator = service.validator();
    let isbn = console.collect("the book's ISBN", |input| validator.new_isbn(input))?;
    let title = console.collect("the book's title", |input| validator.title(input))?;
    let year_published = console.collect("the year the book was published", |input| {
        validator.year_published(input)
    })?;
    let author = console.collect("the authoring entity's email", |input| {
        validator.book_author(&title, input)
    })?;
    let publisher = console.collect("the publisher's name", |input| {
        validator.book_publisher(&title, input)
    })?;

    let book = Book::new(isbn, title, year_published, publisher.name, author.email);
    service.add_book(&book)?;
    console.say(&format!("Added book {}.", book.isbn))
}

fn add_writing_group<R: BufRead, W: Write>(
    service: &Service<'_>,
    console: &mut Console<R, W>,
) -> SessionResult<()> {
    let validator = service.validator();
    let email = console.collect("the writing group's email", |input| {
        validator.new_author_email(input)
    })?;
    let name = console.collect("the writing group's name", |input| {
        validator.new_author_name(input)
    })?;
    let head_writer = console.collect("the head writer's name", |input| {
        validator.head_writer(input)
    })?;
    let year_formed = console.collect("the year the group was formed", |input| {
        validator.year_formed(input)
    })?;

    let group = AuthoringEntity::writing_group(name, email, head_writer, year_formed);
    add_author(service, console, &group)
}

fn add_individual_author<R: BufRead, W: Write>(
    service: &Service<'_>,
    console: &mut Console<R, W>,
) -> SessionResult<()> {
    let validator = service.validator();
    let email = console.collect("the author's email", |input| {
        validator.new_author_email(input)
    })?;
    let name = console.collect("the author's name", |input| validator.new_author_name(input))?;

    add_author(service, console, &AuthoringEntity::individual_author(name, email))
}

fn add_ad_hoc_team<R: BufRead, W: Write>(
    service: &Service<'_>,
    console: &mut Console<R, W>,
) -> SessionResult<()> {
    let validator = service.validator();
    let email = console.collect("the team's email", |input| {
        validator.new_author_email(input)
    })?;
    let name = console.collect("the team's name", |input| validator.new_author_name(input))?;

    add_author(service, console, &AuthoringEntity::ad_hoc_team(name, email))
}

fn add_author<R: BufRead, W: Write>(
    service: &Service<'_>,
    console: &mut Console<R, W>,
    author: &AuthoringEntity,
) -> SessionResult<()> {
    service.add_author(author)?;
    console.say(&format!("Added {} {}.", author.kind.label(), author.email))
}

fn assign_to_team<R: BufRead, W: Write>(
    service: &Service<'_>,
    console: &mut Console<R, W>,
) -> SessionResult<()> {
    let authors = service.list_authors()?;
    if !authors.iter().any(AuthoringEntity::is_individual_author) {
        return console.say("Cannot assign to a team; there are no individual authors.");
    }
    if !authors.iter().any(AuthoringEntity::is_ad_hoc_team) {
        return console.say("Cannot assign to a team; there are no ad hoc teams.");
    }

    let validator = service.validator();
    loop {
        let individual = console.collect("the individual author's email", |input| {
            validator.individual_author(input)
        })?;
        let team = console.collect("the ad hoc team's email", |input| {
            validator.ad_hoc_team(input)
        })?;

        match service.assign_to_team(&individual.email, &team.email)? {
            MembershipOutcome::Added => {
                return console.say(&format!("Added {} to {}.", individual.name, team.name));
            }
            MembershipOutcome::Duplicate => console.reject(ValidationError::DuplicateMembership)?,
        }
    }
}

fn info_menu<R: BufRead, W: Write>(
    service: &Service<'_>,
    console: &mut Console<R, W>,
) -> SessionResult<()> {
    match console.choose(INFO_MENU, 0, 3)? {
        1 => {
            if service.list_publishers()?.is_empty() {
                return console.say("Cannot show info; there are no publishers.");
            }
            let validator = service.validator();
            let publisher = console.collect("the publisher's name", |input| {
                validator.existing_publisher(input)
            })?;
            console.say(&render::publisher(&publisher))
        }
        2 => {
            if service.list_books()?.is_empty() {
                return console.say("Cannot show info; there are no books.");
            }
            let detail = console.collect("the book's ISBN", |input| {
                service
                    .book_detail(input)?
                    .ok_or(ValidationError::BookNotFound)
            })?;
            console.say(&render::book(&detail))
        }
        3 => {
            if !service.has_writing_groups()? {
                return console.say("Cannot show info; there are no writing groups.");
            }
            let validator = service.validator();
            let detail = console.collect("the writing group's email", |input| {
                validator.writing_group(input)?;
                service
                    .author_detail(input)?
                    .ok_or(ValidationError::AuthorNotFound)
            })?;
            console.say(&render::author(&detail))
        }
        _ => Ok(()),
    }
}

fn delete_book<R: BufRead, W: Write>(
    service: &Service<'_>,
    console: &mut Console<R, W>,
) -> SessionResult<()> {
    if service.list_books()?.is_empty() {
        return console.say("Cannot delete a book; there are no books.");
    }

    let book = collect_book_by_publisher(service, console)?;
    let removed = service.delete_book(&book.title, &book.publisher_name)?;
    console.say(&format!("Deleted book {}.", removed.isbn))
}

fn update_book<R: BufRead, W: Write>(
    service: &Service<'_>,
    console: &mut Console<R, W>,
) -> SessionResult<()> {
    if service.list_books()?.is_empty() {
        return console.say("Cannot update a book; there are no books.");
    }

    let book = collect_book_by_publisher(service, console)?;
    let validator = service.validator();
    let author = console.collect("the new authoring entity's email", |input| {
        validator.replacement_author(&book, input)
    })?;
    let updated = service.reassign_book_author(&book.title, &book.publisher_name, &author.email)?;
    console.say(&format!(
        "Book {} is now credited to {}.",
        updated.isbn, updated.author_email
    ))
}

/// Prompts for title and publisher together until they name a book.
fn collect_book_by_publisher<R: BufRead, W: Write>(
    service: &Service<'_>,
    console: &mut Console<R, W>,
) -> SessionResult<Book> {
    let validator = service.validator();
    loop {
        let title = console.prompt("the book's title")?;
        let publisher_name = console.prompt("the publisher's name")?;
        match validator.existing_book_by_publisher(&title, &publisher_name) {
            Ok(book) => return Ok(book),
            Err(err) => console.reject(err)?,
        }
    }
}

fn keys_menu<R: BufRead, W: Write>(
    service: &Service<'_>,
    console: &mut Console<R, W>,
) -> SessionResult<()> {
    let lines: Vec<String> = match console.choose(KEYS_MENU, 0, 3)? {
        1 => {
            let publishers = service.list_publishers()?;
            if publishers.is_empty() {
                return console.say("Cannot show primary keys; there are no publishers.");
            }
            publishers.iter().map(render::publisher_key).collect()
        }
        2 => {
            let books = service.list_books()?;
            if books.is_empty() {
                return console.say("Cannot show primary keys; there are no books.");
            }
            books.iter().map(render::book_key).collect()
        }
        3 => {
            let authors = service.list_authors()?;
            if authors.is_empty() {
                return console.say("Cannot show primary keys; there are no authoring entities.");
            }
            authors.iter().map(render::author_key).collect()
        }
        _ => return Ok(()),
    };

    for line in lines {
        console.say(&line)?;
    }
    Ok(())
}
