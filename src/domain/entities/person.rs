//! Person role-links.

use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

/// Role a person holds on a movie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PersonRole {
    Actor,
    Director,
    Writer,
}

impl PersonRole {
    /// Value stored in `person_film_work.role`.
    pub fn as_str(&self) -> &'static str {
        match self {
            PersonRole::Actor => "actor",
            PersonRole::Director => "director",
            PersonRole::Writer => "writer",
        }
    }
}

impl fmt::Display for PersonRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown person role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for PersonRole {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "actor" => Ok(PersonRole::Actor),
            "director" => Ok(PersonRole::Director),
            "writer" => Ok(PersonRole::Writer),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

/// One person linked to one movie under one role.
///
/// A person holding several roles on the same movie has several links.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonLink {
    pub person_id: Uuid,
    pub full_name: String,
    pub role: PersonRole,
}

impl PersonLink {
    pub fn new(person_id: Uuid, full_name: String, role: PersonRole) -> Self {
        Self {
            person_id,
            full_name,
            role,
        }
    }
}
