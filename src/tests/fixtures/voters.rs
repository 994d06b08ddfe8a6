// Shared test fixture for voters.
// The canonical voter is read from the same JSON shape clients send to POST /voters.

use crate::modules::voters::core::voter::{PollId, PollRecord, VoteId, Voter, VoterId};
use chrono::{DateTime, Utc};
use std::fs;

pub const VOTER_JSON_PATH: &str = "./src/tests/fixtures/json/voter.json";

pub struct VoterBuilder {
    inner: Voter,
}

impl Default for VoterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl VoterBuilder {
    pub fn new() -> Self {
        let json_str = fs::read_to_string(VOTER_JSON_PATH).unwrap();
        Self {
            inner: serde_json::from_str(&json_str).unwrap(),
        }
    }

    pub fn voter_id(mut self, v: VoterId) -> Self {
        self.inner.voter_id = v;
        self
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn email(mut self, v: impl Into<String>) -> Self {
        self.inner.email = v.into();
        self
    }

    pub fn poll(mut self, poll_id: PollId, vote_id: VoteId, vote_date: DateTime<Utc>) -> Self {
        self.inner.poll_history.push(PollRecord {
            poll_id,
            vote_id,
            vote_date,
        });
        self
    }

    pub fn build(self) -> Voter {
        self.inner
    }
}

#[cfg(test)]
mod voter_builder_tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = VoterBuilder::default().build();
        assert_eq!(built, Voter::new(1, "Jane Smith", "jane@example.com"));
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let date = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let custom = VoterBuilder::new()
            .voter_id(9)
            .name("John Doe")
            .email("john@example.com")
            .poll(4, 1, date)
            .build();

        assert_eq!(custom.voter_id, 9);
        assert_eq!(custom.name, "John Doe");
        assert_eq!(custom.email, "john@example.com");
        assert_eq!(
            custom.poll_history,
            vec![PollRecord {
                poll_id: 4,
                vote_id: 1,
                vote_date: date
            }]
        );
    }
}
