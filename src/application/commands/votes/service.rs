// src/application/commands/votes/service.rs
use std::sync::Arc;

use crate::domain::voting::VotingUserRepository;

pub struct VoteCommandService {
    pub(super) repo: Arc<dyn VotingUserRepository>,
}

impl VoteCommandService {
    pub fn new(repo: Arc<dyn VotingUserRepository>) -> Self {
        Self { repo }
    }
}
