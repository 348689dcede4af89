use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type CareerId = i32;

/// Column limits of the `careers` table.
pub const USERNAME_MAX_LENGTH: usize = 30;
pub const TITLE_MAX_LENGTH: usize = 50;

/// A persisted career listing.
///
/// Only rows that exist in storage are represented by this type, so `id` and
/// `created_datetime` are always present. Absence is expressed with
/// `Option<Career>` by the repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Career {
    pub id: CareerId,
    pub username: String,
    pub created_datetime: DateTime<Utc>,
    pub title: String,
    pub content: String,
}

/// A validated career that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCareer {
    pub username: String,
    pub title: String,
    pub content: String,
}

/// Replacement title and content for an existing career.
#[derive(Debug, Clone, PartialEq)]
pub struct CareerChanges {
    pub id: CareerId,
    pub title: String,
    pub content: String,
}
