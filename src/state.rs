use crate::config::AppConfig;
use crate::notify::{LogNotifier, Notifier};
use crate::polls::repo::PgStore;
use crate::store::PollStore;
use anyhow::Context;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub store: Arc<dyn PollStore>,
    pub notifier: Arc<dyn Notifier>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);

        let db = sqlx::postgres::PgPoolOptions::new()
            .max_connections(config.db_max_connections)
            .connect(&config.database_url)
            .await
            .context("connect to database")?;

        // Run migrations if present
        if let Err(e) = sqlx::migrate!("./migrations").run(&db).await {
            tracing::warn!(error = %e, "migration failed; continuing");
        }

        let store = Arc::new(PgStore::new(db)) as Arc<dyn PollStore>;
        let notifier = Arc::new(LogNotifier) as Arc<dyn Notifier>;

        Ok(Self::from_parts(config, store, notifier))
    }

    pub fn from_parts(
        config: Arc<AppConfig>,
        store: Arc<dyn PollStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            config,
            store,
            notifier,
        }
    }

    /// Sends a notice, logging instead of failing the caller.
    pub async fn notify(&self, notice: crate::notify::Notice) {
        if let Err(e) = self.notifier.send(&notice).await {
            tracing::warn!(error = %e, kind = ?notice.kind, route_path = %notice.route_path, "notification failed");
        }
    }
}
