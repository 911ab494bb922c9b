// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_voting_user;

pub use error::map_sqlx;
pub use postgres_voting_user::PostgresVotingUserRepository;
