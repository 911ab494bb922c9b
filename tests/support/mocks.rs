// tests/support/mocks.rs
use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use article_vote::domain::errors::{DomainError, DomainResult};
use article_vote::domain::voting::{
    ArticleId, ArticleVote, Karma, UserId, VotingUser, VotingUserRepository,
};

/// In-memory stand-in for the Postgres repository. Mirrors its two
/// guarantees: lookups fail for users without a karma record, and a second
/// vote for the same (user, article) pair is rejected with a conflict.
pub struct InMemoryVotingUserRepository {
    karma: HashMap<Uuid, i32>,
    votes: Mutex<Vec<ArticleVote>>,
}

impl InMemoryVotingUserRepository {
    pub fn with_karma(entries: &[(Uuid, i32)]) -> Self {
        Self {
            karma: entries.iter().copied().collect(),
            votes: Mutex::new(Vec::new()),
        }
    }

    /// Seed a pre-existing vote, as if a previous request had persisted it.
    pub fn seed_vote(&self, vote: ArticleVote) {
        self.votes.lock().unwrap().push(vote);
    }

    pub fn stored_vote_count(&self) -> usize {
        self.votes.lock().unwrap().len()
    }
}

#[async_trait]
impl VotingUserRepository for InMemoryVotingUserRepository {
    async fn find_voting_user(
        &self,
        article_id: ArticleId,
        user_id: UserId,
    ) -> DomainResult<VotingUser> {
        let karma = self
            .karma
            .get(&Uuid::from(user_id))
            .copied()
            .ok_or_else(|| DomainError::NotFound(format!("no karma record for user {user_id}")))?;

        let votes = self.votes.lock().unwrap();
        let article_vote = votes
            .iter()
            .find(|v| v.user_id() == user_id && v.article_id() == article_id)
            .cloned();

        Ok(VotingUser::new(user_id, Karma::new(karma), article_vote))
    }

    async fn save_vote(&self, vote: &ArticleVote) -> DomainResult<()> {
        let mut votes = self.votes.lock().unwrap();
        if votes
            .iter()
            .any(|v| v.user_id() == vote.user_id() && v.article_id() == vote.article_id())
        {
            return Err(DomainError::Conflict(
                "user has already voted for this article".into(),
            ));
        }
        votes.push(vote.clone());
        Ok(())
    }
}

/// Repository double for the duplicate-vote race: the scoped load sees no
/// prior vote, but by the time the insert runs a concurrent request has
/// already persisted one, so the unique constraint rejects it.
pub struct LostRaceVotingUserRepository {
    karma: i32,
}

impl LostRaceVotingUserRepository {
    pub fn with_karma(karma: i32) -> Self {
        Self { karma }
    }
}

#[async_trait]
impl VotingUserRepository for LostRaceVotingUserRepository {
    async fn find_voting_user(
        &self,
        _article_id: ArticleId,
        user_id: UserId,
    ) -> DomainResult<VotingUser> {
        Ok(VotingUser::new(user_id, Karma::new(self.karma), None))
    }

    async fn save_vote(&self, _vote: &ArticleVote) -> DomainResult<()> {
        Err(DomainError::Conflict(
            "user has already voted for this article".into(),
        ))
    }
}
