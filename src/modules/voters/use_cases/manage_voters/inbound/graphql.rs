use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::voters::adapters::inbound::graphql_types::GqlVoter;
use crate::modules::voters::core::voter::{Voter, VoterId};
use crate::shell::state::AppState;

#[derive(Default)]
pub struct VoterQueries;

#[Object]
impl VoterQueries {
    async fn voters(&self, context: &Context<'_>) -> GqlResult<Vec<GqlVoter>> {
        let state = context.data_unchecked::<AppState>();
        let voters = state.voters.get_all_voters().await;
        Ok(voters.into_iter().map(Into::into).collect())
    }

    async fn voter(&self, context: &Context<'_>, voter_id: VoterId) -> GqlResult<GqlVoter> {
        let state = context.data_unchecked::<AppState>();
        let voter = state
            .voters
            .get_voter(voter_id)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(voter.into())
    }
}

#[derive(Default)]
pub struct VoterMutations;

#[Object]
impl VoterMutations {
    async fn add_voter(
        &self,
        context: &Context<'_>,
        voter_id: VoterId,
        name: String,
        email: String,
    ) -> GqlResult<GqlVoter> {
        let state = context.data_unchecked::<AppState>();
        let voter = Voter::new(voter_id, name, email);
        state
            .voters
            .add_voter(voter.clone())
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(voter.into())
    }

    async fn delete_voter(&self, context: &Context<'_>, voter_id: VoterId) -> bool {
        let state = context.data_unchecked::<AppState>();
        state.voters.delete_voter(voter_id).await;
        true
    }

    async fn delete_all_voters(&self, context: &Context<'_>) -> bool {
        let state = context.data_unchecked::<AppState>();
        state.voters.delete_all().await;
        true
    }
}
