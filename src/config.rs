use anyhow::Context;

use crate::token::Alphabet;

const DEFAULT_ALPHABET: &str = "0123456789abcdefghijklmnopqrstuvwxyz";

/// Route path generation settings.
#[derive(Debug, Clone)]
pub struct TokenConfig {
    pub alphabet: Alphabet,
    pub length: usize,
    pub max_attempts: u32,
}

impl TokenConfig {
    /// Fails when the token space is too small to hold `expected_polls`
    /// with a comfortable collision margin.
    pub fn new(
        alphabet: &str,
        length: usize,
        max_attempts: u32,
        expected_polls: u64,
    ) -> anyhow::Result<Self> {
        let alphabet = Alphabet::new(alphabet)?;
        if length == 0 {
            anyhow::bail!("token length must be at least 1");
        }
        if max_attempts == 0 {
            anyhow::bail!("token max attempts must be at least 1");
        }
        let space = alphabet.space(length);
        let required = u128::from(expected_polls).saturating_mul(10);
        if space < required {
            anyhow::bail!(
                "token space {space} ({} chars ^ {length}) is too small for {expected_polls} polls",
                alphabet.len()
            );
        }
        Ok(Self {
            alphabet,
            length,
            max_attempts,
        })
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub db_max_connections: u32,
    pub public_base_url: String,
    pub token: TokenConfig,
    pub notify_on_vote: bool,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
        let db_max_connections = parse_var("DB_MAX_CONNECTIONS", 10)?;
        let public_base_url = std::env::var("PUBLIC_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:8080".into());

        let alphabet =
            std::env::var("TOKEN_ALPHABET").unwrap_or_else(|_| DEFAULT_ALPHABET.into());
        let token = TokenConfig::new(
            &alphabet,
            parse_var("TOKEN_LENGTH", 6)?,
            parse_var("TOKEN_MAX_ATTEMPTS", 8)?,
            parse_var("EXPECTED_POLL_VOLUME", 100_000)?,
        )
        .context("invalid token configuration")?;

        let notify_on_vote = std::env::var("NOTIFY_ON_VOTE")
            .map(|v| matches!(v.as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok(Self {
            database_url,
            db_max_connections,
            public_base_url,
            token,
            notify_on_vote,
        })
    }

    /// Shareable link for a poll.
    pub fn poll_link(&self, route_path: &str) -> String {
        format!("{}/{}", self.public_base_url.trim_end_matches('/'), route_path)
    }

    pub fn results_link(&self, route_path: &str) -> String {
        format!("{}/results", self.poll_link(route_path))
    }
}

fn parse_var<T>(name: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(name) {
        Ok(v) => v
            .parse::<T>()
            .with_context(|| format!("{name} has invalid value {v:?}")),
        Err(_) => Ok(default),
    }
}
