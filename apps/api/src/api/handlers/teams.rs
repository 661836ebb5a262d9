use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::decode_json;
use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::domain::team::Team;

pub const TEAM_NOT_FOUND: &str = "team not found";

/// Request body for creating a team
///
/// Any `id` sent by the client is ignored; the store assigns it.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeamRequest {
    pub name: String,
    pub full_name: String,
    pub website: String,
    pub foundation_date: DateTime<Utc>,
}

/// Create a new team
///
/// POST /teams
pub async fn create_team(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Team>), ApiError> {
    let req: CreateTeamRequest = decode_json(&body)?;

    let team = Team::new(req.name, req.full_name, req.website, req.foundation_date)?;

    let created = state
        .teams
        .create_team(team)
        .await
        .map_err(|e| ApiError::internal_server_error(e.to_string()))?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// Get a team by ID
///
/// GET /teams/:id
pub async fn get_team(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Team>, ApiError> {
    let team = state
        .teams
        .get_team(&id)
        .await?
        .filter(|team| !team.is_empty())
        .ok_or_else(|| ApiError::not_found(TEAM_NOT_FOUND))?;

    Ok(Json(team))
}

/// List every team
///
/// GET /teams
pub async fn get_all_teams(State(state): State<AppState>) -> Result<Json<Vec<Team>>, ApiError> {
    let teams = state.teams.get_all_teams().await?;

    Ok(Json(teams))
}
