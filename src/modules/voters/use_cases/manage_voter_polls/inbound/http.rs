use axum::{
    Json,
    body::Bytes,
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::modules::voters::adapters::inbound::api_error::ApiError;
use crate::modules::voters::core::voter::{PollId, PollRecord, VoterId};
use crate::shell::state::AppState;

/// Poll bodies share the shape of a poll record; only `VoteDate` is read.
/// The poll id comes from the path and the vote id is assigned by the store.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PollBody {
    pub vote_date: Option<DateTime<Utc>>,
}

impl PollBody {
    pub fn parse(body: &[u8]) -> Result<Self, ApiError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        serde_json::from_slice(body).map_err(|e| ApiError::InvalidInput(e.to_string()))
    }
}

pub async fn list_voter_polls(
    State(state): State<AppState>,
    voter_id: Result<Path<VoterId>, PathRejection>,
) -> Result<Json<Vec<PollRecord>>, ApiError> {
    let Path(voter_id) = voter_id?;
    Ok(Json(state.voters.get_voter_polls(voter_id).await?))
}

pub async fn get_voter_poll(
    State(state): State<AppState>,
    ids: Result<Path<(VoterId, PollId)>, PathRejection>,
) -> Result<Json<PollRecord>, ApiError> {
    let Path((voter_id, poll_id)) = ids?;
    Ok(Json(state.voters.get_voter_poll(voter_id, poll_id).await?))
}

pub async fn add_voter_poll(
    State(state): State<AppState>,
    ids: Result<Path<(VoterId, PollId)>, PathRejection>,
    body: Bytes,
) -> Result<Json<PollRecord>, ApiError> {
    let Path((voter_id, poll_id)) = ids?;
    let vote_date = PollBody::parse(&body)?.vote_date.unwrap_or_else(Utc::now);
    let record = state
        .voters
        .add_voter_poll(voter_id, poll_id, vote_date)
        .await?;
    Ok(Json(record))
}

pub async fn update_voter_poll(
    State(state): State<AppState>,
    ids: Result<Path<(VoterId, PollId)>, PathRejection>,
    body: Bytes,
) -> Result<Json<PollRecord>, ApiError> {
    let Path((voter_id, poll_id)) = ids?;
    let vote_date = PollBody::parse(&body)?
        .vote_date
        .ok_or_else(|| ApiError::InvalidInput("VoteDate is required".into()))?;
    let record = state
        .voters
        .update_voter_poll(voter_id, poll_id, vote_date)
        .await?;
    Ok(Json(record))
}

pub async fn delete_voter_poll(
    State(state): State<AppState>,
    ids: Result<Path<(VoterId, PollId)>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path((voter_id, poll_id)) = ids?;
    state.voters.delete_voter_poll(voter_id, poll_id).await?;
    Ok((StatusCode::OK, "Delete OK"))
}
