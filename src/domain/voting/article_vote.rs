// src/domain/voting/article_vote.rs
use crate::domain::voting::value_objects::{ArticleId, UserId, Vote, VoteId};

/// One accepted up/down vote by one user on one article. Immutable once
/// constructed.
#[derive(Debug, Clone)]
pub struct ArticleVote {
    id: VoteId,
    article_id: ArticleId,
    user_id: UserId,
    vote: Vote,
}

impl ArticleVote {
    pub fn new(article_id: ArticleId, user_id: UserId, vote: Vote) -> Self {
        Self {
            id: VoteId::generate(),
            article_id,
            user_id,
            vote,
        }
    }

    /// Rebuild a vote that already exists in storage, keeping its persisted
    /// identifier.
    pub fn from_parts(id: VoteId, article_id: ArticleId, user_id: UserId, vote: Vote) -> Self {
        Self {
            id,
            article_id,
            user_id,
            vote,
        }
    }

    pub fn id(&self) -> VoteId {
        self.id
    }

    pub fn article_id(&self) -> ArticleId {
        self.article_id
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn vote(&self) -> Vote {
        self.vote
    }
}

// Business equality: two votes are the same vote when user, article and
// direction match, regardless of the generated identifier.
impl PartialEq for ArticleVote {
    fn eq(&self, other: &Self) -> bool {
        self.article_id == other.article_id
            && self.user_id == other.user_id
            && self.vote == other.vote
    }
}

impl Eq for ArticleVote {}
