use crate::error::AppError;
use crate::polls::repo_types::Poll;
use crate::polls::services::find_poll;
use crate::results::aggregate::{aggregate, OptionTally};
use crate::state::AppState;

/// Rebuilds the per-option tallies for a poll from storage.
pub async fn poll_results(
    state: &AppState,
    route_path: &str,
) -> Result<(Poll, Vec<OptionTally>), AppError> {
    // The join alone can't tell an unknown poll from one without ratings.
    let poll = find_poll(state, route_path).await?;
    let rows = state.store.list_rating_rows(route_path).await?;
    Ok((poll, aggregate(rows)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polls::repo_types::NewRating;
    use crate::store::PollStore;
    use crate::testing::{fake_state, seed_poll, MemoryStore};
    use std::sync::Arc;

    #[tokio::test]
    async fn poll_without_ratings_has_empty_results() {
        let store = Arc::new(MemoryStore::default());
        let state = fake_state(store.clone());
        seed_poll(&store, "quiet1", &["A", "B"]).await;

        let (poll, tallies) = poll_results(&state, "quiet1").await.unwrap();
        assert_eq!(poll.route_path, "quiet1");
        assert!(tallies.is_empty());
    }

    #[tokio::test]
    async fn ratings_grouped_per_option() {
        let store = Arc::new(MemoryStore::default());
        let state = fake_state(store.clone());
        let (_, opts) = seed_poll(&store, "busy01", &["O1", "O2"]).await;
        let (o1, o2) = (opts[0].id, opts[1].id);

        for r in [
            NewRating { option_id: o1, rating: 3 },
            NewRating { option_id: o1, rating: 5 },
            NewRating { option_id: o2, rating: 2 },
        ] {
            store.insert_ratings(&[r]).await.unwrap();
        }

        let (_, tallies) = poll_results(&state, "busy01").await.unwrap();
        assert_eq!(tallies.len(), 2);
        assert_eq!(tallies[0].option_id, o1);
        assert_eq!(tallies[0].ratings, vec![3, 5]);
        assert_eq!(tallies[1].option_id, o2);
        assert_eq!(tallies[1].ratings, vec![2]);
    }

    #[tokio::test]
    async fn other_polls_do_not_leak_in() {
        let store = Arc::new(MemoryStore::default());
        let state = fake_state(store.clone());
        seed_poll(&store, "mine00", &["A"]).await;
        let (_, theirs) = seed_poll(&store, "theirs", &["B"]).await;
        store
            .insert_ratings(&[NewRating { option_id: theirs[0].id, rating: 1 }])
            .await
            .unwrap();

        let (_, tallies) = poll_results(&state, "mine00").await.unwrap();
        assert!(tallies.is_empty());
    }

    #[tokio::test]
    async fn unknown_poll_is_not_found() {
        let state = fake_state(Arc::new(MemoryStore::default()));
        assert!(matches!(
            poll_results(&state, "ghost0").await,
            Err(AppError::PollNotFound)
        ));
    }
}
