use async_trait::async_trait;
use serde::Serialize;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    PollCreated,
    VoteReceived,
}

/// Message for a poll owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub recipient: String,
    pub poll_title: String,
    pub route_path: String,
    pub link: String,
}

impl Notice {
    pub fn subject(&self) -> String {
        match self.kind {
            NoticeKind::PollCreated => format!("Your poll \"{}\" is ready", self.poll_title),
            NoticeKind::VoteReceived => format!("New vote on \"{}\"", self.poll_title),
        }
    }
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, notice: &Notice) -> anyhow::Result<()>;
}

/// Writes notices to the log instead of delivering them.
#[derive(Debug, Clone, Default)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn send(&self, notice: &Notice) -> anyhow::Result<()> {
        info!(
            kind = ?notice.kind,
            to = %notice.recipient,
            route_path = %notice.route_path,
            link = %notice.link,
            subject = %notice.subject(),
            "notice"
        );
        Ok(())
    }
}
