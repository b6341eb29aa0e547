use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, info, warn};

use crate::error::AppError;
use crate::polls::dto::CreatePollRequest;
use crate::polls::repo_types::{NewOption, NewPoll, Poll, PollOption};
use crate::state::AppState;
use crate::token;

pub fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// Pairs each non-empty option title with the description at the same position.
///
/// `descriptions` must either be empty or exactly as long as `titles`, so a
/// skipped title never shifts the pairing of the ones after it.
pub fn collect_options(
    titles: &[String],
    descriptions: &[String],
) -> Result<Vec<NewOption>, AppError> {
    if !descriptions.is_empty() && descriptions.len() != titles.len() {
        return Err(AppError::validation(format!(
            "Got {} descriptions for {} options",
            descriptions.len(),
            titles.len()
        )));
    }

    let options: Vec<NewOption> = titles
        .iter()
        .enumerate()
        .filter_map(|(i, title)| {
            let title = title.trim();
            if title.is_empty() {
                return None;
            }
            let description = descriptions.get(i).map(|d| d.trim()).unwrap_or_default();
            Some(NewOption {
                title: title.to_string(),
                description: description.to_string(),
            })
        })
        .collect();

    if options.is_empty() {
        return Err(AppError::validation("At least one option is required"));
    }
    Ok(options)
}

fn validate(req: CreatePollRequest) -> Result<(NewPoll, Vec<NewOption>), AppError> {
    let title = req.title.trim().to_string();
    if title.is_empty() {
        return Err(AppError::validation("Title is required"));
    }

    let email = req.email.trim().to_lowercase();
    if !is_valid_email(&email) {
        return Err(AppError::validation("Invalid email"));
    }

    let options = collect_options(&req.options, &req.descriptions)?;
    Ok((NewPoll { title, email }, options))
}

/// Single-segment paths already routed by the app; a poll must never get one.
const RESERVED_ROUTE_PATHS: &[&str] = &["health"];

pub fn is_reserved_route_path(route_path: &str) -> bool {
    RESERVED_ROUTE_PATHS.contains(&route_path)
}

/// Stores a poll with its options under a freshly generated route path,
/// retrying with a new one whenever the generated path is already taken.
pub async fn create_poll(state: &AppState, req: CreatePollRequest) -> Result<Poll, AppError> {
    let (poll, options) = validate(req)?;
    let cfg = &state.config.token;
    let candidates = std::iter::repeat_with(|| token::generate(&cfg.alphabet, cfg.length))
        .take(cfg.max_attempts as usize);
    insert_with_route_paths(state, &poll, &options, candidates).await
}

async fn insert_with_route_paths<I>(
    state: &AppState,
    poll: &NewPoll,
    options: &[NewOption],
    candidates: I,
) -> Result<Poll, AppError>
where
    I: IntoIterator<Item = String>,
{
    let mut attempts = 0u32;
    for route_path in candidates {
        attempts += 1;
        if is_reserved_route_path(&route_path) {
            warn!(attempt = attempts, %route_path, "generated reserved route path");
            continue;
        }
        match state.store.create_poll(poll, &route_path, options).await? {
            Some(created) => {
                info!(
                    poll_id = created.id,
                    route_path = %created.route_path,
                    options = options.len(),
                    "poll created"
                );
                return Ok(created);
            }
            None => warn!(attempt = attempts, %route_path, "route path collision"),
        }
    }

    Err(AppError::RoutePathExhausted { attempts })
}

pub async fn find_poll(state: &AppState, route_path: &str) -> Result<Poll, AppError> {
    state
        .store
        .find_poll_by_route(route_path)
        .await?
        .ok_or_else(|| {
            debug!(%route_path, "unknown route path");
            AppError::PollNotFound
        })
}

pub async fn load_poll(
    state: &AppState,
    route_path: &str,
) -> Result<(Poll, Vec<PollOption>), AppError> {
    let poll = find_poll(state, route_path).await?;
    let options = state.store.list_options(poll.id).await?;
    Ok((poll, options))
}
