use crate::modules::voters::core::voter::{PollId, PollRecord, Voter, VoterId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("voter {0} already exists")]
    VoterAlreadyExists(VoterId),

    #[error("voter {0} does not exist")]
    VoterNotFound(VoterId),

    #[error("poll {poll_id} not found for voter {voter_id}")]
    PollNotFound { voter_id: VoterId, poll_id: PollId },

    #[error("poll {poll_id} already recorded for voter {voter_id}")]
    PollAlreadyExists { voter_id: VoterId, poll_id: PollId },

    #[error("voter {0} has no vote ids left")]
    VoteIdsExhausted(VoterId),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::VoterNotFound(_) | Self::PollNotFound { .. })
    }
}

/// Owner of every voter and the poll history nested in it.
///
/// Poll operations read the whole voter, edit its history and commit the
/// whole voter back through the same path as `update_voter`, all while
/// holding exclusive access to the collection.
#[async_trait]
pub trait VoterStore: Send + Sync {
    async fn add_voter(&self, voter: Voter) -> Result<(), StoreError>;
    async fn get_voter(&self, voter_id: VoterId) -> Result<Voter, StoreError>;
    async fn get_all_voters(&self) -> Vec<Voter>;
    async fn update_voter(&self, voter: Voter) -> Result<(), StoreError>;
    /// Removing an unknown voter is not an error.
    async fn delete_voter(&self, voter_id: VoterId);
    async fn delete_all(&self);
    async fn count(&self) -> usize;

    async fn get_voter_polls(&self, voter_id: VoterId) -> Result<Vec<PollRecord>, StoreError>;
    async fn get_voter_poll(
        &self,
        voter_id: VoterId,
        poll_id: PollId,
    ) -> Result<PollRecord, StoreError>;
    async fn add_voter_poll(
        &self,
        voter_id: VoterId,
        poll_id: PollId,
        vote_date: DateTime<Utc>,
    ) -> Result<PollRecord, StoreError>;
    async fn update_voter_poll(
        &self,
        voter_id: VoterId,
        poll_id: PollId,
        vote_date: DateTime<Utc>,
    ) -> Result<PollRecord, StoreError>;
    async fn delete_voter_poll(
        &self,
        voter_id: VoterId,
        poll_id: PollId,
    ) -> Result<(), StoreError>;
}
