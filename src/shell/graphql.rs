use async_graphql::http::GraphiQLSource;
use async_graphql::{EmptySubscription, MergedObject, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, response::Html};

use crate::modules::voters::use_cases::manage_voter_polls::inbound::graphql::{
    VoterPollMutations, VoterPollQueries,
};
use crate::modules::voters::use_cases::manage_voters::inbound::graphql::{
    VoterMutations, VoterQueries,
};
use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(VoterQueries, VoterPollQueries);

#[derive(MergedObject, Default)]
pub struct MutationRoot(VoterMutations, VoterPollMutations);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn schema(state: AppState) -> AppSchema {
    Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .data(state)
    .finish()
}

pub async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

pub async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/gql").finish())
}
