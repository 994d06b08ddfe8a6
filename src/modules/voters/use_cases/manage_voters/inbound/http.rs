use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::voters::adapters::inbound::api_error::ApiError;
use crate::modules::voters::core::voter::{Voter, VoterId};
use crate::shell::state::AppState;

pub async fn list_voters(State(state): State<AppState>) -> Json<Vec<Voter>> {
    Json(state.voters.get_all_voters().await)
}

pub async fn get_voter(
    State(state): State<AppState>,
    voter_id: Result<Path<VoterId>, PathRejection>,
) -> Result<Json<Voter>, ApiError> {
    let Path(voter_id) = voter_id?;
    Ok(Json(state.voters.get_voter(voter_id).await?))
}

pub async fn add_voter(
    State(state): State<AppState>,
    body: Result<Json<Voter>, JsonRejection>,
) -> Result<Json<Voter>, ApiError> {
    let Json(voter) = body?;
    state
        .voters
        .add_voter(voter.clone())
        .await
        .map_err(ApiError::from_voter_write)?;
    Ok(Json(voter))
}

pub async fn update_voter(
    State(state): State<AppState>,
    body: Result<Json<Voter>, JsonRejection>,
) -> Result<Json<Voter>, ApiError> {
    let Json(voter) = body?;
    state
        .voters
        .update_voter(voter.clone())
        .await
        .map_err(ApiError::from_voter_write)?;
    Ok(Json(voter))
}

pub async fn delete_voter(
    State(state): State<AppState>,
    voter_id: Result<Path<VoterId>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(voter_id) = voter_id?;
    state.voters.delete_voter(voter_id).await;
    Ok((StatusCode::OK, "Delete OK"))
}

pub async fn delete_all_voters(State(state): State<AppState>) -> impl IntoResponse {
    state.voters.delete_all().await;
    (StatusCode::OK, "Delete All OK")
}
