use axum::{Extension, Router, routing::get};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::modules::voters::use_cases::manage_voter_polls::inbound::http as polls_http;
use crate::modules::voters::use_cases::manage_voters::inbound::http as voters_http;
use crate::modules::voters::use_cases::report_health::inbound::http as health_http;
use crate::shell::graphql;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let schema = graphql::schema(state.clone());

    Router::new()
        .route(
            "/voters",
            get(voters_http::list_voters)
                .post(voters_http::add_voter)
                .put(voters_http::update_voter)
                .delete(voters_http::delete_all_voters),
        )
        .route("/voters/health", get(health_http::handle))
        .route(
            "/voters/{id}",
            get(voters_http::get_voter).delete(voters_http::delete_voter),
        )
        .route("/voters/{id}/polls", get(polls_http::list_voter_polls))
        .route(
            "/voters/{id}/polls/{poll_id}",
            get(polls_http::get_voter_poll)
                .post(polls_http::add_voter_poll)
                .put(polls_http::update_voter_poll)
                .delete(polls_http::delete_voter_poll),
        )
        .route("/gql", get(graphql::graphiql).post(graphql::graphql))
        .layer(Extension(schema))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
