//! Publisher domain model.
//!
//! # Invariants
//! - `name` is the primary key.
//! - `phone` and `email` are each unique across all publishers.
//! - Publishers are append-only; there is no delete path.

use serde::{Deserialize, Serialize};

/// Publishing house that owns a set of books.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publisher {
    /// Primary key, at most `PUBLISHER_NAME_MAX_CHARS` characters.
    pub name: String,
    /// Unique contact phone, at most `PUBLISHER_PHONE_MAX_CHARS` characters.
    pub phone: String,
    /// Unique contact email, at most `PUBLISHER_EMAIL_MAX_CHARS` characters.
    pub email: String,
}

impl Publisher {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }
}
