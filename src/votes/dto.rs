use serde::Deserialize;
use std::collections::HashMap;

/// A voter's ballot: option id → rating.
#[derive(Debug, Deserialize)]
pub struct BallotRequest {
    pub ratings: HashMap<i64, i32>,
}
