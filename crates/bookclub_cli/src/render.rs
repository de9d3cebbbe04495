//! Text rendering of catalog records for the console.

use bookclub_core::{AuthorDetail, AuthorKind, AuthoringEntity, Book, BookDetail, Publisher};

pub fn publisher(publisher: &Publisher) -> String {
    format!(
        "Publisher\n\tName: {}\n\tPhone: {}\n\tEmail: {}",
        publisher.name, publisher.phone, publisher.email
    )
}

pub fn author(detail: &AuthorDetail) -> String {
    let author = &detail.author;
    let mut text = format!(
        "{}\n\tEmail: {}\n\tName: {}",
        author.kind.label(),
        author.email,
        author.name
    );
    match &author.kind {
        AuthorKind::WritingGroup {
            head_writer,
            year_formed,
        } => {
            text.push_str(&format!(
                "\n\tHead writer: {head_writer}\n\tYear formed: {year_formed}"
            ));
        }
        AuthorKind::IndividualAuthor => {
            text.push_str(&format!("\n\tTeams: {}", names(&detail.affiliations)));
        }
        AuthorKind::AdHocTeam => {
            text.push_str(&format!("\n\tMembers: {}", names(&detail.affiliations)));
        }
    }
    text
}

pub fn book(detail: &BookDetail) -> String {
    let book = &detail.book;
    format!(
        "Book\n\tISBN: {}\n\tTitle: {}\n\tYear published: {}\n{}\n{}",
        book.isbn,
        book.title,
        book.year_published,
        indent(&publisher(&detail.publisher)),
        indent(&author(&detail.author)),
    )
}

pub fn publisher_key(publisher: &Publisher) -> String {
    format!("Name: {}", publisher.name)
}

pub fn book_key(book: &Book) -> String {
    format!("Title: {}, ISBN: {}", book.title, book.isbn)
}

pub fn author_key(author: &AuthoringEntity) -> String {
    format!("Email: {}, Type: {}", author.email, author.kind.label())
}

fn names(values: &[String]) -> String {
    if values.is_empty() {
        "none".to_string()
    } else {
        values.join(", ")
    }
}

fn indent(block: &str) -> String {
    block
        .lines()
        .map(|line| format!("\t{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::{author, author_key, book, book_key};
    use bookclub_core::{AuthorDetail, AuthoringEntity, Book, BookDetail, Publisher};

    #[test]
    fn individual_author_lists_team_names() {
        let detail = AuthorDetail {
            author: AuthoringEntity::individual_author("Jane", "jane@x.com"),
            affiliations: vec!["Night Owls".to_string(), "Quills".to_string()],
        };
        assert_eq!(
            author(&detail),
            "IndividualAuthor\n\tEmail: jane@x.com\n\tName: Jane\n\tTeams: Night Owls, Quills"
        );
    }

    #[test]
    fn writing_group_shows_profile() {
        let detail = AuthorDetail {
            author: AuthoringEntity::writing_group("Inklings", "ink@x.com", "Lewis", 1933),
            affiliations: Vec::new(),
        };
        let text = author(&detail);
        assert!(text.starts_with("WritingGroup\n"));
        assert!(text.contains("\tHead writer: Lewis\n\tYear formed: 1933"));
    }

    #[test]
    fn ad_hoc_team_without_members_says_none() {
        let detail = AuthorDetail {
            author: AuthoringEntity::ad_hoc_team("Night Owls", "team@y.com"),
            affiliations: Vec::new(),
        };
        assert!(author(&detail).ends_with("\tMembers: none"));
    }

    #[test]
    fn book_nests_publisher_and_author() {
        let detail = BookDetail {
            book: Book::new("978-0-00-000000-0", "Foo", 2020, "Acme", "jane@x.com"),
            publisher: Publisher::new("Acme", "555-0100", "a@acme.com"),
            author: AuthorDetail {
                author: AuthoringEntity::individual_author("Jane", "jane@x.com"),
                affiliations: Vec::new(),
            },
        };
        let text = book(&detail);
        assert!(text.starts_with("Book\n\tISBN: 978-0-00-000000-0\n\tTitle: Foo\n"));
        assert!(text.contains("\tPublisher\n\t\tName: Acme\n"));
        assert!(text.contains("\tIndividualAuthor\n\t\tEmail: jane@x.com\n"));
    }

    #[test]
    fn key_lines_name_identity_fields() {
        let book = Book::new("111", "Foo", 2020, "Acme", "jane@x.com");
        assert_eq!(book_key(&book), "Title: Foo, ISBN: 111");
        let team = AuthoringEntity::ad_hoc_team("Night Owls", "team@y.com");
        assert_eq!(author_key(&team), "Email: team@y.com, Type: AdHocTeam");
    }
}
