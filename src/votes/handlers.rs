use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use tracing::instrument;

use crate::{
    error::AppError,
    extract::BodyJson,
    notify::{Notice, NoticeKind},
    state::AppState,
    votes::{dto::BallotRequest, services},
};

pub fn vote_routes() -> Router<AppState> {
    Router::new().route("/:route_path", post(submit_vote))
}

#[instrument(skip(state, payload))]
pub async fn submit_vote(
    State(state): State<AppState>,
    Path(route_path): Path<String>,
    BodyJson(payload): BodyJson<BallotRequest>,
) -> Result<StatusCode, AppError> {
    let poll = services::submit_ballot(&state, &route_path, &payload.ratings).await?;

    if state.config.notify_on_vote {
        state
            .notify(Notice {
                kind: NoticeKind::VoteReceived,
                recipient: poll.email,
                poll_title: poll.title,
                link: state.config.results_link(&poll.route_path),
                route_path: poll.route_path,
            })
            .await;
    }

    Ok(StatusCode::NO_CONTENT)
}
