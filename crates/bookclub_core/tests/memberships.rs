use bookclub_core::db::open_db_in_memory;
use bookclub_core::{
    AuthorRepository, AuthoringEntity, BookClubService, Membership, MembershipOutcome,
    MembershipRepository, SqliteBookClubRepository, ValidationError,
};

#[test]
fn add_membership_reports_duplicate_and_keeps_relation_unchanged() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBookClubRepository::try_new(&conn).unwrap();
    seed_people(&repo);

    let pair = Membership::new("jane@x.com", "team@y.com");
    assert_eq!(repo.add_membership(&pair).unwrap(), MembershipOutcome::Added);
    assert_eq!(
        repo.add_membership(&pair).unwrap(),
        MembershipOutcome::Duplicate
    );

    assert_eq!(repo.list_memberships().unwrap(), vec![pair]);
}

#[test]
fn both_sides_are_derived_from_one_relation() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBookClubRepository::try_new(&conn).unwrap();
    seed_people(&repo);
    repo.create_author(&AuthoringEntity::individual_author("Ravi", "ravi@x.com"))
        .unwrap();
    repo.create_author(&AuthoringEntity::ad_hoc_team("Day Shift", "day@y.com"))
        .unwrap();

    repo.add_membership(&Membership::new("jane@x.com", "team@y.com"))
        .unwrap();
    repo.add_membership(&Membership::new("jane@x.com", "day@y.com"))
        .unwrap();
    repo.add_membership(&Membership::new("ravi@x.com", "team@y.com"))
        .unwrap();

    let jane_teams: Vec<_> = repo
        .teams_of("jane@x.com")
        .unwrap()
        .into_iter()
        .map(|team| team.email)
        .collect();
    assert_eq!(jane_teams, vec!["team@y.com", "day@y.com"]);

    let members: Vec<_> = repo
        .members_of("team@y.com")
        .unwrap()
        .into_iter()
        .map(|member| member.name)
        .collect();
    assert_eq!(members, vec!["Jane", "Ravi"]);

    assert!(repo.teams_of("ravi@x.com").unwrap().len() == 1);
    assert!(repo.members_of("nobody@y.com").unwrap().is_empty());
}

#[test]
fn service_assign_twice_yields_duplicate_outcome() {
    let conn = open_db_in_memory().unwrap();
    let service = BookClubService::new(SqliteBookClubRepository::try_new(&conn).unwrap());
    seed_people(service.store());

    assert_eq!(
        service.assign_to_team("jane@x.com", "team@y.com").unwrap(),
        MembershipOutcome::Added
    );
    assert_eq!(
        service.assign_to_team("jane@x.com", "team@y.com").unwrap(),
        MembershipOutcome::Duplicate
    );
    assert_eq!(service.list_memberships().unwrap().len(), 1);

    let err = service
        .validator()
        .new_membership(&Membership::new("jane@x.com", "team@y.com"))
        .unwrap_err();
    assert!(matches!(err, ValidationError::DuplicateMembership));
    assert_eq!(err.to_string(), "The author is already part of that team");
}

#[test]
fn service_assign_rejects_wrong_variants_and_unknown_emails() {
    let conn = open_db_in_memory().unwrap();
    let service = BookClubService::new(SqliteBookClubRepository::try_new(&conn).unwrap());
    seed_people(service.store());

    let swapped = service
        .assign_to_team("team@y.com", "jane@x.com")
        .unwrap_err();
    assert!(matches!(
        swapped,
        ValidationError::WrongKind {
            expected: "IndividualAuthor",
            found: "AdHocTeam"
        }
    ));

    let to_group = service
        .assign_to_team("jane@x.com", "ink@x.com")
        .unwrap_err();
    assert!(matches!(
        to_group,
        ValidationError::WrongKind {
            expected: "AdHocTeam",
            ..
        }
    ));

    let unknown = service
        .assign_to_team("ghost@x.com", "team@y.com")
        .unwrap_err();
    assert!(matches!(unknown, ValidationError::AuthorNotFound));
    assert!(service.list_memberships().unwrap().is_empty());
}

fn seed_people(repo: &SqliteBookClubRepository<'_>) {
    repo.create_author(&AuthoringEntity::individual_author("Jane", "jane@x.com"))
        .unwrap();
    repo.create_author(&AuthoringEntity::ad_hoc_team("Night Shift", "team@y.com"))
        .unwrap();
    repo.create_author(&AuthoringEntity::writing_group(
        "Inklings", "ink@x.com", "Tolkien", 1933,
    ))
    .unwrap();
}
