use crate::modules::voters::adapters::outbound::voter_store::VoterStore;
use std::sync::Arc;
use std::time::Instant;

#[derive(Clone)]
pub struct AppState {
    pub voters: Arc<dyn VoterStore>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(voters: Arc<dyn VoterStore>) -> Self {
        Self {
            voters,
            started_at: Instant::now(),
        }
    }
}
