use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::polls::repo_types::{Poll, PollOption};

/// Request body for poll creation. `options` and `descriptions` are parallel.
#[derive(Debug, Deserialize)]
pub struct CreatePollRequest {
    pub title: String,
    pub email: String,
    #[serde(alias = "option")]
    pub options: Vec<String>,
    #[serde(default, alias = "description")]
    pub descriptions: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePollResponse {
    pub poll_route_path: String,
}

#[derive(Debug, Serialize)]
pub struct OptionView {
    pub id: i64,
    pub title: String,
    pub description: String,
}

/// Everything needed to render the ranking page.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PollView {
    pub title: String,
    pub email: String,
    pub route_path: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub options: Vec<OptionView>,
}

impl PollView {
    pub fn new(poll: Poll, options: Vec<PollOption>) -> Self {
        Self {
            title: poll.title,
            email: poll.email,
            route_path: poll.route_path,
            created_at: poll.created_at,
            options: options
                .into_iter()
                .map(|o| OptionView {
                    id: o.id,
                    title: o.title,
                    description: o.description,
                })
                .collect(),
        }
    }
}
