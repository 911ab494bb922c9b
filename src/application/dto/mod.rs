mod votes;

pub use votes::VoteForArticleResult;
