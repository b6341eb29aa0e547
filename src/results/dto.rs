use serde::Serialize;

use crate::polls::repo_types::Poll;
use crate::results::aggregate::OptionTally;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionResult {
    pub option_id: i64,
    pub title: String,
    pub description: String,
    pub ratings: Vec<i32>,
    pub votes: usize,
    pub average: Option<f64>,
}

impl From<OptionTally> for OptionResult {
    fn from(t: OptionTally) -> Self {
        Self {
            votes: t.votes(),
            average: t.average(),
            option_id: t.option_id,
            title: t.title,
            description: t.description,
            ratings: t.ratings,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsView {
    pub title: String,
    pub email: String,
    pub route_path: String,
    pub total_ballots: usize,
    pub options: Vec<OptionResult>,
}

impl ResultsView {
    pub fn new(poll: Poll, tallies: Vec<OptionTally>) -> Self {
        let total_ballots = tallies.iter().map(OptionTally::votes).max().unwrap_or(0);
        Self {
            title: poll.title,
            email: poll.email,
            route_path: poll.route_path,
            total_ballots,
            options: tallies.into_iter().map(OptionResult::from).collect(),
        }
    }
}
