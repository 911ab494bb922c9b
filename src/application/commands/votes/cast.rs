// src/application/commands/votes/cast.rs
use super::service::VoteCommandService;
use crate::{
    application::{
        dto::VoteForArticleResult,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        errors::DomainError,
        voting::{ArticleId, ArticleVote, CastArticleVoteResult, UserId, Vote},
    },
};
use uuid::Uuid;

pub struct VoteForArticleCommand {
    pub user_id: Uuid,
    pub article_id: Uuid,
    pub vote: Vote,
}

impl VoteCommandService {
    pub async fn vote_for_article(
        &self,
        command: VoteForArticleCommand,
    ) -> ApplicationResult<VoteForArticleResult> {
        let user_id = UserId::new(command.user_id);
        let article_id = ArticleId::new(command.article_id);

        let mut voting_user = self
            .repo
            .find_voting_user(article_id, user_id)
            .await
            .map_err(|err| match err {
                DomainError::NotFound(msg) => ApplicationError::not_found(msg),
                other => ApplicationError::from(other),
            })?;

        let attempted_vote = ArticleVote::new(article_id, user_id, command.vote);

        match voting_user.cast_vote(attempted_vote.clone()) {
            CastArticleVoteResult::VoteSuccessfullyCast {
                user_id,
                article_id,
                vote,
            } => self.persist_vote(&attempted_vote, user_id, article_id, vote).await,
            CastArticleVoteResult::VoteAlreadyCast {
                user_id,
                article_id,
            } => Ok(VoteForArticleResult::AlreadyVoted {
                user_id,
                article_id,
            }),
            CastArticleVoteResult::InsufficientKarma { user_id } => {
                Ok(VoteForArticleResult::InsufficientKarma { user_id })
            }
        }
    }

    /// A `Conflict` from the insert means a concurrent request for the same
    /// (user, article) pair won the race after our scoped load; it surfaces
    /// as the already-voted outcome, never as a failure.
    async fn persist_vote(
        &self,
        attempted_vote: &ArticleVote,
        user_id: UserId,
        article_id: ArticleId,
        vote: Vote,
    ) -> ApplicationResult<VoteForArticleResult> {
        match self.repo.save_vote(attempted_vote).await {
            Ok(()) => {
                tracing::info!(%user_id, %article_id, vote = vote.as_name(), "vote cast");
                Ok(VoteForArticleResult::SuccessfullyVoted {
                    user_id,
                    article_id,
                    vote,
                })
            }
            Err(DomainError::Conflict(_)) => {
                tracing::debug!(%user_id, %article_id, "lost duplicate-vote race");
                Ok(VoteForArticleResult::AlreadyVoted {
                    user_id,
                    article_id,
                })
            }
            Err(other) => Err(other.into()),
        }
    }
}
