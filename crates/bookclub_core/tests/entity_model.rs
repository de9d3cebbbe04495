use bookclub_core::{AuthorKind, AuthoringEntity, Book, Membership, Publisher};

#[test]
fn author_constructors_set_variant_tag() {
    let individual = AuthoringEntity::individual_author("Jane", "jane@x.com");
    assert!(individual.is_individual_author());
    assert_eq!(individual.kind.label(), "IndividualAuthor");

    let group = AuthoringEntity::writing_group("Inklings", "ink@x.com", "Tolkien", 1933);
    assert!(group.is_writing_group());
    assert_eq!(
        group.kind,
        AuthorKind::WritingGroup {
            head_writer: "Tolkien".to_string(),
            year_formed: 1933,
        }
    );

    let team = AuthoringEntity::ad_hoc_team("Night Shift", "team@y.com");
    assert!(team.is_ad_hoc_team());
    assert_eq!(team.kind.as_db_str(), "ad_hoc_team");
}

#[test]
fn reassign_author_changes_only_author_reference() {
    let mut book = Book::new("978-0-00-000000-0", "Foo", 2020, "Acme", "jane@x.com");
    book.reassign_author("team@y.com");

    assert_eq!(book.author_email, "team@y.com");
    assert_eq!(book.publisher_name, "Acme");
    assert_eq!(book.title, "Foo");
}

#[test]
fn writing_group_serializes_with_type_tag_and_profile() {
    let group = AuthoringEntity::writing_group("Inklings", "ink@x.com", "Tolkien", 1933);

    let json = serde_json::to_value(&group).unwrap();
    assert_eq!(json["type"], "writing_group");
    assert_eq!(json["email"], "ink@x.com");
    assert_eq!(json["head_writer"], "Tolkien");
    assert_eq!(json["year_formed"], 1933);

    let decoded: AuthoringEntity = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, group);
}

#[test]
fn individual_author_deserializes_from_tagged_json() {
    let value = serde_json::json!({
        "email": "jane@x.com",
        "name": "Jane",
        "type": "individual_author"
    });

    let author: AuthoringEntity = serde_json::from_value(value).unwrap();
    assert_eq!(author, AuthoringEntity::individual_author("Jane", "jane@x.com"));
}

#[test]
fn unknown_author_type_is_rejected() {
    let value = serde_json::json!({
        "email": "x@x.com",
        "name": "X",
        "type": "syndicate"
    });

    assert!(serde_json::from_value::<AuthoringEntity>(value).is_err());
}

#[test]
fn book_and_publisher_use_snake_case_wire_fields() {
    let book = Book::new("978-0-00-000000-0", "Foo", 2020, "Acme", "jane@x.com");
    let json = serde_json::to_value(&book).unwrap();
    assert_eq!(json["year_published"], 2020);
    assert_eq!(json["publisher_name"], "Acme");
    assert_eq!(json["author_email"], "jane@x.com");

    let publisher = Publisher::new("Acme", "555-0100", "a@acme.com");
    let json = serde_json::to_value(&publisher).unwrap();
    assert_eq!(json["phone"], "555-0100");
}

#[test]
fn membership_pairs_compare_by_both_emails() {
    let first = Membership::new("jane@x.com", "team@y.com");
    let same = Membership::new("jane@x.com", "team@y.com");
    let other = Membership::new("jane@x.com", "other@y.com");

    assert_eq!(first, same);
    assert_ne!(first, other);
}
