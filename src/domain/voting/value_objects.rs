// src/domain/voting/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub Uuid);

impl UserId {
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<UserId> for Uuid {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticleId(pub Uuid);

impl ArticleId {
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<ArticleId> for Uuid {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Identifier of a single cast vote. Generated at construction time and
/// excluded from business equality of `ArticleVote`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VoteId(pub Uuid);

impl VoteId {
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl From<VoteId> for Uuid {
    fn from(value: VoteId) -> Self {
        value.0
    }
}

impl fmt::Display for VoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vote {
    Up,
    Down,
}

impl Vote {
    /// Storage form, matching the bounded `vote` column values.
    pub fn as_str(&self) -> &'static str {
        match self {
            Vote::Up => "up",
            Vote::Down => "down",
        }
    }

    /// Wire form used in API payloads.
    pub fn as_name(&self) -> &'static str {
        match self {
            Vote::Up => "UP",
            Vote::Down => "DOWN",
        }
    }
}

impl FromStr for Vote {
    type Err = DomainError;

    fn from_str(value: &str) -> DomainResult<Self> {
        match value.to_ascii_lowercase().as_str() {
            "up" => Ok(Vote::Up),
            "down" => Ok(Vote::Down),
            other => Err(DomainError::Validation(format!(
                "unknown vote value: {other}"
            ))),
        }
    }
}

impl fmt::Display for Vote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_name())
    }
}

impl Serialize for Vote {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_name())
    }
}

impl<'de> Deserialize<'de> for Vote {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

/// Reputation score provisioned by an external system. The domain does not
/// constrain the value, it only compares it against the voting threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Karma(pub i32);

impl Karma {
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    pub fn meets_or_exceeds(&self, threshold: i32) -> bool {
        self.0 >= threshold
    }
}

impl From<Karma> for i32 {
    fn from(value: Karma) -> Self {
        value.0
    }
}
