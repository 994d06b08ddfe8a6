use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

pub type VoterId = i64;
pub type PollId = i64;
pub type VoteId = i64;

/// A single participation record, scoped to the voter that owns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PollRecord {
    pub poll_id: PollId,
    pub vote_id: VoteId,
    pub vote_date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Voter {
    pub voter_id: VoterId,
    pub name: String,
    pub email: String,
    #[serde(
        rename = "VoteHistory",
        default,
        deserialize_with = "null_as_empty_history"
    )]
    pub poll_history: Vec<PollRecord>,
}

impl Voter {
    pub fn new(voter_id: VoterId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            voter_id,
            name: name.into(),
            email: email.into(),
            poll_history: Vec::new(),
        }
    }
}

// Clients written against the original service send `"VoteHistory": null`.
fn null_as_empty_history<'de, D>(deserializer: D) -> Result<Vec<PollRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<PollRecord>>::deserialize(deserializer)?.unwrap_or_default())
}
