pub mod article_vote;
pub mod repository;
pub mod value_objects;
pub mod voting_user;

pub use article_vote::ArticleVote;
pub use repository::VotingUserRepository;
pub use value_objects::{ArticleId, Karma, UserId, Vote, VoteId};
pub use voting_user::{CastArticleVoteResult, KARMA_THRESHOLD, VotingUser};
