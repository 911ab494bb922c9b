// src/domain/voting/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::voting::article_vote::ArticleVote;
use crate::domain::voting::value_objects::{ArticleId, UserId};
use crate::domain::voting::voting_user::VotingUser;
use async_trait::async_trait;

#[async_trait]
pub trait VotingUserRepository: Send + Sync {
    /// Load the voting user scoped to one article, including any vote they
    /// already cast on it. `DomainError::NotFound` when the user has no
    /// karma record.
    async fn find_voting_user(
        &self,
        article_id: ArticleId,
        user_id: UserId,
    ) -> DomainResult<VotingUser>;

    /// Persist a newly accepted vote. The storage layer enforces uniqueness
    /// of (user, article) and reports a duplicate as `DomainError::Conflict`;
    /// under concurrent requests that constraint, not the in-memory check, is
    /// what guarantees a single stored row.
    async fn save_vote(&self, vote: &ArticleVote) -> DomainResult<()>;
}
