use std::collections::HashMap;

use tracing::info;

use crate::error::AppError;
use crate::polls::repo_types::{NewRating, Poll, PollOption};
use crate::polls::services::load_poll;
use crate::state::AppState;

/// Turns a ballot into one rating per option, in option order.
///
/// The ballot must name every option of the poll exactly once and nothing
/// else. Ratings are ranked-choice scores: with N options the top pick
/// scores N and the last scores 1.
pub fn build_ratings(
    options: &[PollOption],
    ballot: &HashMap<i64, i32>,
) -> Result<Vec<NewRating>, AppError> {
    if options.is_empty() {
        return Err(AppError::validation("Poll has no options to rate"));
    }

    if let Some(unknown) = ballot
        .keys()
        .copied()
        .filter(|id| !options.iter().any(|o| o.id == *id))
        .min()
    {
        return Err(AppError::validation(format!(
            "Option {unknown} does not belong to this poll"
        )));
    }

    let max = options.len() as i32;
    options
        .iter()
        .map(|o| {
            let rating = *ballot
                .get(&o.id)
                .ok_or_else(|| AppError::validation(format!("Missing rating for option {}", o.id)))?;
            if !(1..=max).contains(&rating) {
                return Err(AppError::validation(format!(
                    "Rating {rating} for option {} is outside 1..={max}",
                    o.id
                )));
            }
            Ok(NewRating {
                option_id: o.id,
                rating,
            })
        })
        .collect()
}

/// Records one ballot. Every submission counts; repeated ballots add rows.
pub async fn submit_ballot(
    state: &AppState,
    route_path: &str,
    ballot: &HashMap<i64, i32>,
) -> Result<Poll, AppError> {
    let (poll, options) = load_poll(state, route_path).await?;
    let ratings = build_ratings(&options, ballot)?;
    state.store.insert_ratings(&ratings).await?;
    info!(poll_id = poll.id, %route_path, ratings = ratings.len(), "ballot recorded");
    Ok(poll)
}
