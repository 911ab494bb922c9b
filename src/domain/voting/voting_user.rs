// src/domain/voting/voting_user.rs
use crate::domain::voting::article_vote::ArticleVote;
use crate::domain::voting::value_objects::{ArticleId, Karma, UserId, Vote};

/// Minimum karma required to cast a vote. Part of the business rule, not
/// deployment configuration.
pub const KARMA_THRESHOLD: i32 = 5;

/// Per-request aggregate: one user's karma plus their prior vote, if any, for
/// the single article the repository load was scoped to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VotingUser {
    pub id: UserId,
    pub karma: Karma,
    pub article_vote: Option<ArticleVote>,
}

/// Outcome of a vote attempt. All three cases are routine results of normal
/// operation, so they are values rather than errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CastArticleVoteResult {
    VoteSuccessfullyCast {
        user_id: UserId,
        article_id: ArticleId,
        vote: Vote,
    },
    VoteAlreadyCast {
        user_id: UserId,
        article_id: ArticleId,
    },
    InsufficientKarma {
        user_id: UserId,
    },
}

impl VotingUser {
    pub fn new(id: UserId, karma: Karma, article_vote: Option<ArticleVote>) -> Self {
        Self {
            id,
            karma,
            article_vote,
        }
    }

    /// Decide a vote attempt. The duplicate check runs before the karma
    /// check: a user who has already voted is told so even when their karma
    /// has since dropped below the threshold.
    pub fn cast_vote(&mut self, attempted_vote: ArticleVote) -> CastArticleVoteResult {
        if self.article_vote.is_some() {
            return CastArticleVoteResult::VoteAlreadyCast {
                user_id: self.id,
                article_id: attempted_vote.article_id(),
            };
        }

        if !self.karma.meets_or_exceeds(KARMA_THRESHOLD) {
            return CastArticleVoteResult::InsufficientKarma { user_id: self.id };
        }

        let result = CastArticleVoteResult::VoteSuccessfullyCast {
            user_id: attempted_vote.user_id(),
            article_id: attempted_vote.article_id(),
            vote: attempted_vote.vote(),
        };
        self.article_vote = Some(attempted_vote);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn user_id(value: &str) -> UserId {
        UserId::new(Uuid::parse_str(value).unwrap())
    }

    fn article_id(value: &str) -> ArticleId {
        ArticleId::new(Uuid::parse_str(value).unwrap())
    }

    fn voting_user(karma: i32) -> VotingUser {
        VotingUser::new(
            user_id("5e3f29f9-0000-0000-0000-000000000000"),
            Karma::new(karma),
            None,
        )
    }

    #[test]
    fn cast_vote_with_enough_karma_succeeds() {
        let voter = user_id("5e3f29f9-0000-0000-0000-000000000000");
        let article = article_id("c313a2b3-0000-0000-0000-000000000000");
        let mut user = voting_user(10);

        let result = user.cast_vote(ArticleVote::new(article, voter, Vote::Up));

        assert_eq!(
            result,
            CastArticleVoteResult::VoteSuccessfullyCast {
                user_id: voter,
                article_id: article,
                vote: Vote::Up,
            }
        );
    }

    #[test]
    fn cast_vote_records_the_vote_on_the_aggregate() {
        let voter = user_id("5e3f29f9-0000-0000-0000-000000000000");
        let article = article_id("c313a2b3-0000-0000-0000-000000000000");

        for vote in [Vote::Up, Vote::Down] {
            let mut user = voting_user(5);
            user.cast_vote(ArticleVote::new(article, voter, vote));
            assert_eq!(user.article_vote.as_ref().map(ArticleVote::vote), Some(vote));
        }
    }

    #[test]
    fn cast_vote_at_the_exact_threshold_succeeds() {
        let voter = user_id("5e3f29f9-0000-0000-0000-000000000000");
        let article = article_id("c313a2b3-0000-0000-0000-000000000000");
        let mut user = voting_user(KARMA_THRESHOLD);

        let result = user.cast_vote(ArticleVote::new(article, voter, Vote::Down));

        assert!(matches!(
            result,
            CastArticleVoteResult::VoteSuccessfullyCast { .. }
        ));
    }

    #[test]
    fn cast_vote_with_insufficient_karma_is_rejected() {
        let voter = user_id("5e3f29f9-0000-0000-0000-000000000000");
        let article = article_id("c313a2b3-0000-0000-0000-000000000000");
        let mut user = voting_user(4);

        let result = user.cast_vote(ArticleVote::new(article, voter, Vote::Up));

        assert_eq!(
            result,
            CastArticleVoteResult::InsufficientKarma { user_id: voter }
        );
        assert!(user.article_vote.is_none());
    }

    #[test]
    fn cast_vote_on_an_already_voted_article_is_rejected() {
        let voter = user_id("476820aa-0000-0000-0000-000000000000");
        let article = article_id("d07af0ab-0000-0000-0000-000000000000");
        let mut user = VotingUser::new(
            voter,
            Karma::new(100),
            Some(ArticleVote::new(article, voter, Vote::Down)),
        );

        let result = user.cast_vote(ArticleVote::new(article, voter, Vote::Up));

        assert_eq!(
            result,
            CastArticleVoteResult::VoteAlreadyCast {
                user_id: voter,
                article_id: article,
            }
        );
    }

    #[test]
    fn already_voted_takes_precedence_over_insufficient_karma() {
        let voter = user_id("476820aa-0000-0000-0000-000000000000");
        let article = article_id("d07af0ab-0000-0000-0000-000000000000");
        let mut user = VotingUser::new(
            voter,
            Karma::new(0),
            Some(ArticleVote::new(article, voter, Vote::Up)),
        );

        let result = user.cast_vote(ArticleVote::new(article, voter, Vote::Up));

        assert!(matches!(
            result,
            CastArticleVoteResult::VoteAlreadyCast { .. }
        ));
    }

    #[test]
    fn second_cast_on_a_fresh_aggregate_reports_already_cast() {
        let voter = user_id("9ab9ac19-0000-0000-0000-000000000000");
        let article = article_id("01ec495e-0000-0000-0000-000000000000");
        let mut user = VotingUser::new(voter, Karma::new(10), None);

        let first = user.cast_vote(ArticleVote::new(article, voter, Vote::Up));
        let second = user.cast_vote(ArticleVote::new(article, voter, Vote::Up));

        assert!(matches!(
            first,
            CastArticleVoteResult::VoteSuccessfullyCast { .. }
        ));
        assert_eq!(
            second,
            CastArticleVoteResult::VoteAlreadyCast {
                user_id: voter,
                article_id: article,
            }
        );
    }
}
