use anyhow::Context;
use async_trait::async_trait;
use sqlx::PgPool;

use crate::polls::repo_types::{NewOption, NewPoll, NewRating, Poll, PollOption, RatingRow};
use crate::store::PollStore;

/// Postgres-backed [`PollStore`].
#[derive(Clone)]
pub struct PgStore {
    db: PgPool,
}

impl PgStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PollStore for PgStore {
    async fn create_poll(
        &self,
        poll: &NewPoll,
        route_path: &str,
        options: &[NewOption],
    ) -> anyhow::Result<Option<Poll>> {
        // Rolled back on drop unless committed below.
        let mut tx = self.db.begin().await.context("begin create poll")?;

        let inserted = sqlx::query_as::<_, Poll>(
            r#"
            INSERT INTO polls (title, email, route_path)
            VALUES ($1, $2, $3)
            ON CONFLICT (route_path) DO NOTHING
            RETURNING id, title, email, route_path, created_at
            "#,
        )
        .bind(&poll.title)
        .bind(&poll.email)
        .bind(route_path)
        .fetch_optional(&mut *tx)
        .await
        .context("insert poll")?;

        let Some(inserted) = inserted else {
            return Ok(None);
        };

        for option in options {
            sqlx::query(
                r#"
                INSERT INTO options (title, description, poll_id)
                VALUES ($1, $2, $3)
                "#,
            )
            .bind(&option.title)
            .bind(&option.description)
            .bind(inserted.id)
            .execute(&mut *tx)
            .await
            .context("insert option")?;
        }

        tx.commit().await.context("commit create poll")?;
        Ok(Some(inserted))
    }

    async fn find_poll_by_route(&self, route_path: &str) -> anyhow::Result<Option<Poll>> {
        let poll = sqlx::query_as::<_, Poll>(
            r#"
            SELECT id, title, email, route_path, created_at
              FROM polls
             WHERE route_path = $1
            "#,
        )
        .bind(route_path)
        .fetch_optional(&self.db)
        .await
        .context("find poll by route path")?;
        Ok(poll)
    }

    async fn list_options(&self, poll_id: i64) -> anyhow::Result<Vec<PollOption>> {
        let rows = sqlx::query_as::<_, PollOption>(
            r#"
            SELECT id, poll_id, title, description
              FROM options
             WHERE poll_id = $1
             ORDER BY id ASC
            "#,
        )
        .bind(poll_id)
        .fetch_all(&self.db)
        .await
        .context("list options by poll")?;
        Ok(rows)
    }

    async fn insert_ratings(&self, ratings: &[NewRating]) -> anyhow::Result<()> {
        let mut tx = self.db.begin().await.context("begin insert ratings")?;
        for r in ratings {
            sqlx::query(
                r#"
                INSERT INTO ratings (rating, option_id)
                VALUES ($1, $2)
                "#,
            )
            .bind(r.rating)
            .bind(r.option_id)
            .execute(&mut *tx)
            .await
            .context("insert rating")?;
        }
        tx.commit().await.context("commit insert ratings")?;
        Ok(())
    }

    async fn list_rating_rows(&self, route_path: &str) -> anyhow::Result<Vec<RatingRow>> {
        let rows = sqlx::query_as::<_, RatingRow>(
            r#"
            SELECT o.id AS option_id, o.title, o.description, r.rating
              FROM ratings r
              JOIN options o ON o.id = r.option_id
              JOIN polls p ON p.id = o.poll_id
             WHERE p.route_path = $1
             ORDER BY r.id ASC
            "#,
        )
        .bind(route_path)
        .fetch_all(&self.db)
        .await
        .context("list ratings by poll")?;
        Ok(rows)
    }
}
