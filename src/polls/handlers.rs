use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use tracing::instrument;

use crate::{
    error::AppError,
    extract::BodyJson,
    notify::{Notice, NoticeKind},
    polls::{
        dto::{CreatePollRequest, CreatePollResponse, PollView},
        services,
    },
    state::AppState,
};

pub fn poll_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_poll))
        .route("/:route_path", get(get_poll))
}

#[instrument(skip(state, payload))]
pub async fn create_poll(
    State(state): State<AppState>,
    BodyJson(payload): BodyJson<CreatePollRequest>,
) -> Result<Json<CreatePollResponse>, AppError> {
    let poll = services::create_poll(&state, payload).await?;

    state
        .notify(Notice {
            kind: NoticeKind::PollCreated,
            recipient: poll.email.clone(),
            poll_title: poll.title.clone(),
            link: state.config.poll_link(&poll.route_path),
            route_path: poll.route_path.clone(),
        })
        .await;

    Ok(Json(CreatePollResponse {
        poll_route_path: poll.route_path,
    }))
}

#[instrument(skip(state))]
pub async fn get_poll(
    State(state): State<AppState>,
    Path(route_path): Path<String>,
) -> Result<Json<PollView>, AppError> {
    let (poll, options) = services::load_poll(&state, &route_path).await?;
    Ok(Json(PollView::new(poll, options)))
}
