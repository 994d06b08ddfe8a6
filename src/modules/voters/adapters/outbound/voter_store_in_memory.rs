use crate::modules::voters::adapters::outbound::voter_store::{StoreError, VoterStore};
use crate::modules::voters::core::poll_history::{
    first_duplicate_poll, highest_vote_id, position_of, vote_id_after,
};
use crate::modules::voters::core::voter::{PollId, PollRecord, VoteId, Voter, VoterId};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::debug;

struct VoterEntry {
    voter: Voter,
    // Never decreases, so a deleted record's vote id is not handed out again.
    highest_vote_id: VoteId,
}

#[derive(Default)]
pub struct InMemoryVoterStore {
    voters: RwLock<BTreeMap<VoterId, VoterEntry>>,
}

impl InMemoryVoterStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn ensure_unique_polls(voter: &Voter) -> Result<(), StoreError> {
    match first_duplicate_poll(&voter.poll_history) {
        Some(poll_id) => Err(StoreError::PollAlreadyExists {
            voter_id: voter.voter_id,
            poll_id,
        }),
        None => Ok(()),
    }
}

/// Whole-record replacement. Every committed change to an existing voter goes through here.
fn commit(voters: &mut BTreeMap<VoterId, VoterEntry>, voter: Voter) -> Result<(), StoreError> {
    ensure_unique_polls(&voter)?;
    let entry = voters
        .get_mut(&voter.voter_id)
        .ok_or(StoreError::VoterNotFound(voter.voter_id))?;
    entry.highest_vote_id = entry
        .highest_vote_id
        .max(highest_vote_id(&voter.poll_history));
    entry.voter = voter;
    Ok(())
}

fn read_voter(
    voters: &BTreeMap<VoterId, VoterEntry>,
    voter_id: VoterId,
) -> Result<&VoterEntry, StoreError> {
    voters
        .get(&voter_id)
        .ok_or(StoreError::VoterNotFound(voter_id))
}

#[async_trait::async_trait]
impl VoterStore for InMemoryVoterStore {
    async fn add_voter(&self, voter: Voter) -> Result<(), StoreError> {
        ensure_unique_polls(&voter)?;
        let mut guard = self.voters.write().await;
        if guard.contains_key(&voter.voter_id) {
            return Err(StoreError::VoterAlreadyExists(voter.voter_id));
        }
        debug!(voter_id = voter.voter_id, "voter added");
        guard.insert(
            voter.voter_id,
            VoterEntry {
                highest_vote_id: highest_vote_id(&voter.poll_history),
                voter,
            },
        );
        Ok(())
    }

    async fn get_voter(&self, voter_id: VoterId) -> Result<Voter, StoreError> {
        let guard = self.voters.read().await;
        read_voter(&guard, voter_id).map(|entry| entry.voter.clone())
    }

    async fn get_all_voters(&self) -> Vec<Voter> {
        let guard = self.voters.read().await;
        guard.values().map(|entry| entry.voter.clone()).collect()
    }

    async fn update_voter(&self, voter: Voter) -> Result<(), StoreError> {
        let voter_id = voter.voter_id;
        let mut guard = self.voters.write().await;
        commit(&mut guard, voter)?;
        debug!(voter_id, "voter replaced");
        Ok(())
    }

    async fn delete_voter(&self, voter_id: VoterId) {
        if self.voters.write().await.remove(&voter_id).is_some() {
            debug!(voter_id, "voter deleted");
        }
    }

    async fn delete_all(&self) {
        self.voters.write().await.clear();
        debug!("all voters deleted");
    }

    async fn count(&self) -> usize {
        self.voters.read().await.len()
    }

    async fn get_voter_polls(&self, voter_id: VoterId) -> Result<Vec<PollRecord>, StoreError> {
        let guard = self.voters.read().await;
        read_voter(&guard, voter_id).map(|entry| entry.voter.poll_history.clone())
    }

    async fn get_voter_poll(
        &self,
        voter_id: VoterId,
        poll_id: PollId,
    ) -> Result<PollRecord, StoreError> {
        let guard = self.voters.read().await;
        let history = &read_voter(&guard, voter_id)?.voter.poll_history;
        position_of(history, poll_id)
            .map(|i| history[i].clone())
            .ok_or(StoreError::PollNotFound { voter_id, poll_id })
    }

    async fn add_voter_poll(
        &self,
        voter_id: VoterId,
        poll_id: PollId,
        vote_date: DateTime<Utc>,
    ) -> Result<PollRecord, StoreError> {
        let mut guard = self.voters.write().await;
        let entry = read_voter(&guard, voter_id)?;
        let mut voter = entry.voter.clone();
        if position_of(&voter.poll_history, poll_id).is_some() {
            return Err(StoreError::PollAlreadyExists { voter_id, poll_id });
        }

        let vote_id = vote_id_after(entry.highest_vote_id)
            .ok_or(StoreError::VoteIdsExhausted(voter_id))?;
        let record = PollRecord {
            poll_id,
            vote_id,
            vote_date,
        };
        voter.poll_history.push(record.clone());
        commit(&mut guard, voter)?;
        debug!(voter_id, poll_id, vote_id = record.vote_id, "poll recorded");
        Ok(record)
    }

    async fn update_voter_poll(
        &self,
        voter_id: VoterId,
        poll_id: PollId,
        vote_date: DateTime<Utc>,
    ) -> Result<PollRecord, StoreError> {
        let mut guard = self.voters.write().await;
        let mut voter = read_voter(&guard, voter_id)?.voter.clone();
        let i = position_of(&voter.poll_history, poll_id)
            .ok_or(StoreError::PollNotFound { voter_id, poll_id })?;

        voter.poll_history[i].vote_date = vote_date;
        let record = voter.poll_history[i].clone();
        commit(&mut guard, voter)?;
        debug!(voter_id, poll_id, "poll vote date updated");
        Ok(record)
    }

    async fn delete_voter_poll(
        &self,
        voter_id: VoterId,
        poll_id: PollId,
    ) -> Result<(), StoreError> {
        let mut guard = self.voters.write().await;
        let mut voter = read_voter(&guard, voter_id)?.voter.clone();
        let i = position_of(&voter.poll_history, poll_id)
            .ok_or(StoreError::PollNotFound { voter_id, poll_id })?;

        voter.poll_history.remove(i);
        commit(&mut guard, voter)?;
        debug!(voter_id, poll_id, "poll deleted");
        Ok(())
    }
}
