use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use super::decode_json;
use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::domain::championship::Championship;
use crate::domain::team::Team;

pub const CHAMPIONSHIP_NOT_FOUND: &str = "championship not found";

/// Request body for creating a championship
#[derive(Debug, Deserialize)]
pub struct CreateChampionshipRequest {
    pub name: String,
    pub season: String,
    pub teams: Vec<Team>,
}

/// Create a new championship
///
/// POST /championships
pub async fn create_championship(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Championship>), ApiError> {
    let req: CreateChampionshipRequest = decode_json(&body)?;

    let championship = Championship::new(req.name, req.season, req.teams)?;

    let created = state
        .championships
        .create_championship(championship)
        .await
        .map_err(|e| ApiError::internal_server_error(e.to_string()))?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// Get a championship by ID
///
/// GET /championships/:id
pub async fn get_championship(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Championship>, ApiError> {
    let championship = state
        .championships
        .get_championship(&id)
        .await?
        .filter(|championship| !championship.is_empty())
        .ok_or_else(|| ApiError::not_found(CHAMPIONSHIP_NOT_FOUND))?;

    Ok(Json(championship))
}
