use std::collections::HashMap;

use crate::polls::repo_types::RatingRow;

/// All ratings one option has received so far.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionTally {
    pub option_id: i64,
    pub title: String,
    pub description: String,
    pub ratings: Vec<i32>,
}

impl OptionTally {
    pub fn votes(&self) -> usize {
        self.ratings.len()
    }

    pub fn total(&self) -> i64 {
        self.ratings.iter().map(|&r| i64::from(r)).sum()
    }

    pub fn average(&self) -> Option<f64> {
        if self.ratings.is_empty() {
            None
        } else {
            Some(self.total() as f64 / self.ratings.len() as f64)
        }
    }
}

/// Folds joined rating rows into one tally per option.
///
/// Options appear in the order their first rating was seen and each
/// tally keeps its ratings in row order.
pub fn aggregate<I>(rows: I) -> Vec<OptionTally>
where
    I: IntoIterator<Item = RatingRow>,
{
    let mut index: HashMap<i64, usize> = HashMap::new();
    let mut tallies: Vec<OptionTally> = Vec::new();

    for row in rows {
        match index.get(&row.option_id) {
            Some(&i) => tallies[i].ratings.push(row.rating),
            None => {
                index.insert(row.option_id, tallies.len());
                tallies.push(OptionTally {
                    option_id: row.option_id,
                    title: row.title,
                    description: row.description,
                    ratings: vec![row.rating],
                });
            }
        }
    }

    tallies
}
