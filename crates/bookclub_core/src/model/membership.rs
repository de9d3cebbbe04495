//! Ad-hoc team membership relation.
//!
//! # Invariants
//! - `individual_author_email` references an `IndividualAuthor`.
//! - `ad_hoc_team_email` references an `AdHocTeam`.
//! - A pair appears at most once in the relation.

use serde::{Deserialize, Serialize};

/// One (individual author, ad-hoc team) pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Membership {
    pub individual_author_email: String,
    pub ad_hoc_team_email: String,
}

impl Membership {
    pub fn new(
        individual_author_email: impl Into<String>,
        ad_hoc_team_email: impl Into<String>,
    ) -> Self {
        Self {
            individual_author_email: individual_author_email.into(),
            ad_hoc_team_email: ad_hoc_team_email.into(),
        }
    }
}

/// Result of appending a pair to the membership relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MembershipOutcome {
    /// Pair was not present and has been stored.
    Added,
    /// Pair already existed; the relation is unchanged.
    Duplicate,
}
