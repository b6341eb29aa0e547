use async_trait::async_trait;

use crate::polls::repo_types::{NewOption, NewPoll, NewRating, Poll, PollOption, RatingRow};

/// Persistence for polls, their options and submitted ratings.
#[async_trait]
pub trait PollStore: Send + Sync {
    /// Inserts the poll and all of its options atomically.
    /// Returns `None` (and stores nothing) when `route_path` is already taken.
    async fn create_poll(
        &self,
        poll: &NewPoll,
        route_path: &str,
        options: &[NewOption],
    ) -> anyhow::Result<Option<Poll>>;

    async fn find_poll_by_route(&self, route_path: &str) -> anyhow::Result<Option<Poll>>;

    /// Options of a poll in creation order.
    async fn list_options(&self, poll_id: i64) -> anyhow::Result<Vec<PollOption>>;

    /// Inserts one ballot's ratings atomically.
    async fn insert_ratings(&self, ratings: &[NewRating]) -> anyhow::Result<()>;

    /// Ratings joined with their option for the poll at `route_path`, in arrival order.
    async fn list_rating_rows(&self, route_path: &str) -> anyhow::Result<Vec<RatingRow>>;
}
