use async_graphql::SimpleObject;
use chrono::{DateTime, Utc};

use crate::modules::voters::core::voter::{PollId, PollRecord, VoteId, Voter, VoterId};

#[derive(SimpleObject, Clone, Debug, PartialEq)]
pub struct GqlPollRecord {
    pub poll_id: PollId,
    pub vote_id: VoteId,
    pub vote_date: DateTime<Utc>,
}

impl From<PollRecord> for GqlPollRecord {
    fn from(r: PollRecord) -> Self {
        Self {
            poll_id: r.poll_id,
            vote_id: r.vote_id,
            vote_date: r.vote_date,
        }
    }
}

#[derive(SimpleObject, Clone, Debug, PartialEq)]
pub struct GqlVoter {
    pub voter_id: VoterId,
    pub name: String,
    pub email: String,
    pub poll_history: Vec<GqlPollRecord>,
}

impl From<Voter> for GqlVoter {
    fn from(v: Voter) -> Self {
        Self {
            voter_id: v.voter_id,
            name: v.name,
            email: v.email,
            poll_history: v.poll_history.into_iter().map(Into::into).collect(),
        }
    }
}
