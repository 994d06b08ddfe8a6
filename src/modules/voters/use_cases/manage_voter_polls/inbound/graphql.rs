use async_graphql::{Context, Object, Result as GqlResult};
use chrono::{DateTime, Utc};

use crate::modules::voters::adapters::inbound::graphql_types::GqlPollRecord;
use crate::modules::voters::core::voter::{PollId, VoterId};
use crate::shell::state::AppState;

#[derive(Default)]
pub struct VoterPollQueries;

#[Object]
impl VoterPollQueries {
    async fn voter_polls(
        &self,
        context: &Context<'_>,
        voter_id: VoterId,
    ) -> GqlResult<Vec<GqlPollRecord>> {
        let state = context.data_unchecked::<AppState>();
        let polls = state
            .voters
            .get_voter_polls(voter_id)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(polls.into_iter().map(Into::into).collect())
    }

    async fn voter_poll(
        &self,
        context: &Context<'_>,
        voter_id: VoterId,
        poll_id: PollId,
    ) -> GqlResult<GqlPollRecord> {
        let state = context.data_unchecked::<AppState>();
        let poll = state
            .voters
            .get_voter_poll(voter_id, poll_id)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(poll.into())
    }
}

#[derive(Default)]
pub struct VoterPollMutations;

#[Object]
impl VoterPollMutations {
    /// Records a poll for the voter, dated now unless `voteDate` is given.
    async fn add_voter_poll(
        &self,
        context: &Context<'_>,
        voter_id: VoterId,
        poll_id: PollId,
        vote_date: Option<DateTime<Utc>>,
    ) -> GqlResult<GqlPollRecord> {
        let state = context.data_unchecked::<AppState>();
        let poll = state
            .voters
            .add_voter_poll(voter_id, poll_id, vote_date.unwrap_or_else(Utc::now))
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(poll.into())
    }

    async fn update_voter_poll(
        &self,
        context: &Context<'_>,
        voter_id: VoterId,
        poll_id: PollId,
        vote_date: DateTime<Utc>,
    ) -> GqlResult<GqlPollRecord> {
        let state = context.data_unchecked::<AppState>();
        let poll = state
            .voters
            .update_voter_poll(voter_id, poll_id, vote_date)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(poll.into())
    }

    async fn delete_voter_poll(
        &self,
        context: &Context<'_>,
        voter_id: VoterId,
        poll_id: PollId,
    ) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        state
            .voters
            .delete_voter_poll(voter_id, poll_id)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(true)
    }
}
