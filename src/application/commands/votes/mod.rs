// src/application/commands/votes/mod.rs
mod cast;
mod service;

pub use cast::VoteForArticleCommand;
pub use service::VoteCommandService;
