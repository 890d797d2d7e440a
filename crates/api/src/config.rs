use std::fmt::Display;
use std::str::FromStr;

use anyhow::{bail, Context};
use chrono::FixedOffset;

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("expected 'pretty' or 'json', got '{other}'")),
        }
    }
}

/// Settings for the hosted pretrained classifier.
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    /// Full model endpoint; requests are POSTed to it unchanged.
    pub url: String,
    /// Name stored with each entry as `remote:{model}`
    /// (default: `bert-base-uncased-emotion`).
    pub model: String,
    /// Optional bearer token.
    pub token: Option<String>,
    /// Per-request timeout in seconds (default: `10`).
    pub timeout_secs: u64,
}

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for running locally.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `127.0.0.1`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// SQLite connection string (default: `sqlite://moodlog.db`).
    pub database_url: String,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Offset used to bucket entries by local day and hour.
    pub utc_offset: FixedOffset,
    /// Hosted classifier; `None` means only the lexicon analyzer is used.
    pub classifier: Option<ClassifierConfig>,
    pub log_format: LogFormat,
}

/// Read `key`, falling back to `default`, and parse it.
fn env_or<T>(key: &str, default: &str) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    let raw = std::env::var(key).unwrap_or_else(|_| default.to_string());
    raw.trim()
        .parse()
        .map_err(|e| anyhow::anyhow!("{key} is invalid ('{raw}'): {e}"))
}

/// Read `key`, treating unset and blank values as `None`.
fn env_opt(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Offset east of UTC from a number of minutes.
pub fn offset_from_minutes(minutes: i32) -> anyhow::Result<FixedOffset> {
    minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
        .with_context(|| format!("UTC_OFFSET_MINUTES out of range: {minutes}"))
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default                     |
    /// |---------------------------|-----------------------------|
    /// | `HOST`                    | `127.0.0.1`                 |
    /// | `PORT`                    | `3000`                      |
    /// | `DATABASE_URL`            | `sqlite://moodlog.db`       |
    /// | `CORS_ORIGINS`            | `http://localhost:5173`     |
    /// | `REQUEST_TIMEOUT_SECS`    | `30`                        |
    /// | `UTC_OFFSET_MINUTES`      | `0`                         |
    /// | `CLASSIFIER_URL`          | unset (lexicon only)        |
    /// | `CLASSIFIER_MODEL`        | `bert-base-uncased-emotion` |
    /// | `CLASSIFIER_TOKEN`        | unset                       |
    /// | `CLASSIFIER_TIMEOUT_SECS` | `10`                        |
    /// | `LOG_FORMAT`              | `pretty`                    |
    pub fn from_env() -> anyhow::Result<Self> {
        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".into());
        let port: u16 = env_or("PORT", "3000")?;
        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://moodlog.db".into());

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = env_or("REQUEST_TIMEOUT_SECS", "30")?;
        if request_timeout_secs == 0 {
            bail!("REQUEST_TIMEOUT_SECS must be greater than zero");
        }

        let utc_offset = offset_from_minutes(env_or("UTC_OFFSET_MINUTES", "0")?)?;

        let classifier = match env_opt("CLASSIFIER_URL") {
            Some(url) => Some(ClassifierConfig {
                url,
                model: env_opt("CLASSIFIER_MODEL")
                    .unwrap_or_else(|| "bert-base-uncased-emotion".into()),
                token: env_opt("CLASSIFIER_TOKEN"),
                timeout_secs: env_or("CLASSIFIER_TIMEOUT_SECS", "10")?,
            }),
            None => None,
        };

        let log_format: LogFormat = env_or("LOG_FORMAT", "pretty")?;

        Ok(Self {
            host,
            port,
            database_url,
            cors_origins,
            request_timeout_secs,
            utc_offset,
            classifier,
            log_format,
        })
    }
}
