use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use tracing::instrument;

use crate::{
    error::AppError,
    results::{dto::ResultsView, services},
    state::AppState,
};

pub fn results_routes() -> Router<AppState> {
    Router::new().route("/:route_path/results", get(get_results))
}

#[instrument(skip(state))]
pub async fn get_results(
    State(state): State<AppState>,
    Path(route_path): Path<String>,
) -> Result<Json<ResultsView>, AppError> {
    let (poll, tallies) = services::poll_results(&state, &route_path).await?;
    Ok(Json(ResultsView::new(poll, tallies)))
}
