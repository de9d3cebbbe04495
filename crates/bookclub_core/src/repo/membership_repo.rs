//! Ad-hoc team membership repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Own the single authoritative `(individual author, ad-hoc team)` relation.
//! - Derive each side's view by filtering that relation.
//!
//! # Invariants
//! - `add_membership` never stores a pair twice; an existing pair yields
//!   `MembershipOutcome::Duplicate` and leaves the relation unchanged.
//! - Variant checks (individual vs team) are the caller's responsibility.

use super::author_repo::parse_author_row;
use super::{NamedQuery, RepoResult, SqliteBookClubRepository};
use crate::model::author::AuthoringEntity;
use crate::model::membership::{Membership, MembershipOutcome};
use log::info;
use rusqlite::{params, Row};

const RETURN_MEMBERSHIP: NamedQuery = NamedQuery::new(
    "return_membership",
    "SELECT individual_authors_email, ad_hoc_teams_email
     FROM ad_hoc_teams_member
     WHERE individual_authors_email = ?1 AND ad_hoc_teams_email = ?2;",
);
const RETURN_ALL_MEMBERSHIPS: NamedQuery = NamedQuery::new(
    "return_all_memberships",
    "SELECT individual_authors_email, ad_hoc_teams_email
     FROM ad_hoc_teams_member
     ORDER BY rowid ASC;",
);
const RETURN_TEAMS_OF_AUTHOR: NamedQuery = NamedQuery::new(
    "return_teams_of_author",
    "SELECT a.email, a.authoring_entity_type, a.name, a.head_writer, a.year_formed
     FROM ad_hoc_teams_member m
     INNER JOIN authoring_entities a ON a.email = m.ad_hoc_teams_email
     WHERE m.individual_authors_email = ?1
     ORDER BY m.rowid ASC;",
);
const RETURN_MEMBERS_OF_TEAM: NamedQuery = NamedQuery::new(
    "return_members_of_team",
    "SELECT a.email, a.authoring_entity_type, a.name, a.head_writer, a.year_formed
     FROM ad_hoc_teams_member m
     INNER JOIN authoring_entities a ON a.email = m.individual_authors_email
     WHERE m.ad_hoc_teams_email = ?1
     ORDER BY m.rowid ASC;",
);

/// Repository interface for the membership relation.
pub trait MembershipRepository {
    /// Appends the pair unless it is already present.
    fn add_membership(&self, membership: &Membership) -> RepoResult<MembershipOutcome>;
    fn membership_exists(&self, membership: &Membership) -> RepoResult<bool>;
    fn list_memberships(&self) -> RepoResult<Vec<Membership>>;
    /// Ad-hoc teams the individual author belongs to.
    fn teams_of(&self, individual_author_email: &str) -> RepoResult<Vec<AuthoringEntity>>;
    /// Individual authors belonging to the ad-hoc team.
    fn members_of(&self, ad_hoc_team_email: &str) -> RepoResult<Vec<AuthoringEntity>>;
}

impl MembershipRepository for SqliteBookClubRepository<'_> {
    fn add_membership(&self, membership: &Membership) -> RepoResult<MembershipOutcome> {
        if self.membership_exists(membership)? {
            info!("event=membership_add module=repo status=duplicate");
            return Ok(MembershipOutcome::Duplicate);
        }

        self.conn.execute(
            "INSERT INTO ad_hoc_teams_member (
                individual_authors_email,
                ad_hoc_teams_email
            ) VALUES (?1, ?2);",
            params![
                membership.individual_author_email.as_str(),
                membership.ad_hoc_team_email.as_str(),
            ],
        )?;
        info!("event=membership_add module=repo status=ok");
        Ok(MembershipOutcome::Added)
    }

    fn membership_exists(&self, membership: &Membership) -> RepoResult<bool> {
        let found = self.fetch_optional(
            &RETURN_MEMBERSHIP,
            [
                membership.individual_author_email.as_str(),
                membership.ad_hoc_team_email.as_str(),
            ],
            parse_membership_row,
        )?;
        Ok(found.is_some())
    }

    fn list_memberships(&self) -> RepoResult<Vec<Membership>> {
        self.fetch_all(&RETURN_ALL_MEMBERSHIPS, [], parse_membership_row)
    }

    fn teams_of(&self, individual_author_email: &str) -> RepoResult<Vec<AuthoringEntity>> {
        self.fetch_all(
            &RETURN_TEAMS_OF_AUTHOR,
            [individual_author_email],
            parse_author_row,
        )
    }

    fn members_of(&self, ad_hoc_team_email: &str) -> RepoResult<Vec<AuthoringEntity>> {
        self.fetch_all(&RETURN_MEMBERS_OF_TEAM, [ad_hoc_team_email], parse_author_row)
    }
}

fn parse_membership_row(row: &Row<'_>) -> RepoResult<Membership> {
    Ok(Membership {
        individual_author_email: row.get("individual_authors_email")?,
        ad_hoc_team_email: row.get("ad_hoc_teams_email")?,
    })
}
