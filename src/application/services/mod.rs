// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::commands::votes::VoteCommandService,
    domain::voting::VotingUserRepository,
};

pub struct ApplicationServices {
    pub vote_commands: Arc<VoteCommandService>,
}

impl ApplicationServices {
    pub fn new(voting_user_repo: Arc<dyn VotingUserRepository>) -> Self {
        let vote_commands = Arc::new(VoteCommandService::new(Arc::clone(&voting_user_repo)));

        Self { vote_commands }
    }
}
