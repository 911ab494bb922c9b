// src/infrastructure/repositories/postgres_voting_user.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::voting::{
    ArticleId, ArticleVote, Karma, UserId, VoteId, VotingUser, VotingUserRepository,
};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

#[derive(Clone)]
pub struct PostgresVotingUserRepository {
    pool: PgPool,
}

impl PostgresVotingUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct VotingUserRow {
    user_id: Uuid,
    karma: i32,
    vote_id: Option<Uuid>,
    vote_article_id: Option<Uuid>,
    vote: Option<String>,
}

impl TryFrom<VotingUserRow> for VotingUser {
    type Error = DomainError;

    fn try_from(row: VotingUserRow) -> Result<Self, Self::Error> {
        let user_id = UserId::new(row.user_id);

        let article_vote = match (row.vote_id, row.vote_article_id, row.vote) {
            (Some(id), Some(article_id), Some(vote)) => Some(ArticleVote::from_parts(
                VoteId::new(id),
                ArticleId::new(article_id),
                user_id,
                vote.parse()?,
            )),
            _ => None,
        };

        Ok(VotingUser::new(user_id, Karma::new(row.karma), article_vote))
    }
}

#[async_trait]
impl VotingUserRepository for PostgresVotingUserRepository {
    async fn find_voting_user(
        &self,
        article_id: ArticleId,
        user_id: UserId,
    ) -> DomainResult<VotingUser> {
        let row = sqlx::query_as::<_, VotingUserRow>(
            "SELECT u.user_id, u.karma, v.id AS vote_id, v.article_id AS vote_article_id, v.vote
             FROM user_data u
             LEFT JOIN article_vote v ON v.user_id = u.user_id AND v.article_id = $1
             WHERE u.user_id = $2",
        )
        .bind(Uuid::from(article_id))
        .bind(Uuid::from(user_id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let row = row
            .ok_or_else(|| DomainError::NotFound(format!("no karma record for user {user_id}")))?;

        VotingUser::try_from(row)
    }

    async fn save_vote(&self, vote: &ArticleVote) -> DomainResult<()> {
        sqlx::query("INSERT INTO article_vote (id, user_id, article_id, vote) VALUES ($1, $2, $3, $4)")
            .bind(Uuid::from(vote.id()))
            .bind(Uuid::from(vote.user_id()))
            .bind(Uuid::from(vote.article_id()))
            .bind(vote.vote().as_str())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(())
    }
}
