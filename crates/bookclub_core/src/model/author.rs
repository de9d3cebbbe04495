//! Authoring entity domain model.
//!
//! # Responsibility
//! - Represent individual authors, writing groups and ad-hoc teams as one
//!   record with a variant tag.
//!
//! # Invariants
//! - `email` is the primary key across all variants.
//! - Only `WritingGroup` carries head writer and formation year.

use serde::{Deserialize, Serialize};

/// Variant tag of an authoring entity, with variant-specific fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AuthorKind {
    /// Single person; may belong to any number of ad-hoc teams.
    IndividualAuthor,
    /// Standing group of writers led by a head writer.
    WritingGroup { head_writer: String, year_formed: i32 },
    /// Informal team whose members are individual authors.
    AdHocTeam,
}

impl AuthorKind {
    /// Storage discriminator written to `authoring_entities.authoring_entity_type`.
    pub fn as_db_str(&self) -> &'static str {
        match self {
            Self::IndividualAuthor => "individual_author",
            Self::WritingGroup { .. } => "writing_group",
            Self::AdHocTeam => "ad_hoc_team",
        }
    }

    /// Human-facing variant label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::IndividualAuthor => "IndividualAuthor",
            Self::WritingGroup { .. } => "WritingGroup",
            Self::AdHocTeam => "AdHocTeam",
        }
    }
}

/// Party credited as the author of a book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthoringEntity {
    pub email: String,
    pub name: String,
    #[serde(flatten)]
    pub kind: AuthorKind,
}

impl AuthoringEntity {
    pub fn individual_author(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
            kind: AuthorKind::IndividualAuthor,
        }
    }

    pub fn writing_group(
        name: impl Into<String>,
        email: impl Into<String>,
        head_writer: impl Into<String>,
        year_formed: i32,
    ) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
            kind: AuthorKind::WritingGroup {
                head_writer: head_writer.into(),
                year_formed,
            },
        }
    }

    pub fn ad_hoc_team(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
            kind: AuthorKind::AdHocTeam,
        }
    }

    pub fn is_individual_author(&self) -> bool {
        matches!(self.kind, AuthorKind::IndividualAuthor)
    }

    pub fn is_writing_group(&self) -> bool {
        matches!(self.kind, AuthorKind::WritingGroup { .. })
    }

    pub fn is_ad_hoc_team(&self) -> bool {
        matches!(self.kind, AuthorKind::AdHocTeam)
    }
}
