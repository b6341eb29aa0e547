use sqlx::FromRow;
use time::OffsetDateTime;

/// Poll record in the database.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Poll {
    pub id: i64,
    pub title: String,
    pub email: String,
    pub route_path: String, // public token used in URLs
    pub created_at: OffsetDateTime,
}

/// One candidate belonging to a poll.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct PollOption {
    pub id: i64,
    pub poll_id: i64,
    pub title: String,
    pub description: String,
}

/// Result of joining ratings with their option.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct RatingRow {
    pub option_id: i64,
    pub title: String,
    pub description: String,
    pub rating: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPoll {
    pub title: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOption {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewRating {
    pub option_id: i64,
    pub rating: i32,
}
