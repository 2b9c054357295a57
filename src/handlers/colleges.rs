//! College cost query handlers
//!
//! Three read-only operations over the loaded dataset, plus the catch-all
//! for unknown routes. Validation order on the room-and-board endpoint is
//! part of the external contract: name presence, then include presence,
//! then include validity, then existence.

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::cost::compute_cost;
use crate::dataset::Dataset;
use crate::error::ApiError;

/// Shared state for the query handlers
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
}

#[derive(Debug, Deserialize)]
pub struct CostParams {
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RoomAndBoardParams {
    pub name: Option<String>,
    pub include: Option<String>,
}

/// Per-request cost figure for one college
#[derive(Debug, Serialize)]
pub struct CollegeCost {
    pub name: String,
    pub cost: f64,
}

/// Success envelope
#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    pub data: T,
}

// An empty query value counts as not supplied.
fn supplied(param: &Option<String>) -> Option<&str> {
    param.as_deref().filter(|value| !value.is_empty())
}

/// GET /colleges - return every record in the dataset
pub async fn list_colleges(State(state): State<AppState>) -> Json<Value> {
    Json(json!({ "data": state.dataset.records() }))
}

/// GET /college?name=X - total cost with room and board included by default
pub async fn college_cost(
    State(state): State<AppState>,
    Query(params): Query<CostParams>,
) -> Result<Json<DataResponse<CollegeCost>>, ApiError> {
    let name = supplied(&params.name).ok_or(ApiError::MissingName)?;
    let record = state.dataset.get(name).ok_or(ApiError::NotFound)?;

    Ok(Json(DataResponse {
        data: CollegeCost {
            name: record.name.clone(),
            cost: compute_cost(record, true),
        },
    }))
}

/// GET /college/room-and-board?name=X&include=true|false
///
/// Unlike `/college`, the include flag is required here; the asymmetry is
/// deliberate and callers depend on it.
pub async fn room_and_board_cost(
    State(state): State<AppState>,
    Query(params): Query<RoomAndBoardParams>,
) -> Result<Json<DataResponse<CollegeCost>>, ApiError> {
    let name = supplied(&params.name).ok_or(ApiError::MissingName)?;
    let include = supplied(&params.include).ok_or(ApiError::MissingInclude)?;

    let include = match include.to_ascii_lowercase().as_str() {
        "true" => true,
        "false" => false,
        _ => return Err(ApiError::InvalidInclude),
    };

    let record = state.dataset.get(name).ok_or(ApiError::NotFound)?;

    Ok(Json(DataResponse {
        data: CollegeCost {
            name: record.name.clone(),
            cost: compute_cost(record, include),
        },
    }))
}

/// Fallback for every path the API does not serve
pub async fn unknown_route() -> ApiError {
    ApiError::UnknownRoute
}
