// src/application/dto/votes.rs
use crate::domain::voting::{ArticleId, UserId, Vote};

/// Outward-facing outcome of the vote-for-article use case, ready for the
/// HTTP adapter to map onto a response. `AlreadyVoted` covers both the
/// aggregate's own duplicate check and a lost persistence race.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoteForArticleResult {
    SuccessfullyVoted {
        user_id: UserId,
        article_id: ArticleId,
        vote: Vote,
    },
    AlreadyVoted {
        user_id: UserId,
        article_id: ArticleId,
    },
    InsufficientKarma {
        user_id: UserId,
    },
}
