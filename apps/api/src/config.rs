use anyhow::{anyhow, bail, Result};

/// Application configuration loaded from environment variables.
/// Startup fails if a provided value cannot be parsed.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// OpenAI-compatible embeddings endpoint. `None` selects the local hashing embedder.
    pub embedding_url: Option<String>,
    pub embedding_model: String,
    pub embedding_api_key: Option<String>,
    pub embedding_timeout_secs: u64,
    pub embedding_dimensions: usize,
    pub max_upload_mb: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();

        let embedding_dimensions = parse_env("EMBEDDING_DIMENSIONS", defaults.embedding_dimensions)?;
        if embedding_dimensions == 0 {
            bail!("EMBEDDING_DIMENSIONS must be greater than zero");
        }

        Ok(Config {
            port: parse_env("PORT", defaults.port)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            embedding_url: optional_env("EMBEDDING_URL"),
            embedding_model: optional_env("EMBEDDING_MODEL").unwrap_or(defaults.embedding_model),
            embedding_api_key: optional_env("EMBEDDING_API_KEY"),
            embedding_timeout_secs: parse_env(
                "EMBEDDING_TIMEOUT_SECS",
                defaults.embedding_timeout_secs,
            )?,
            embedding_dimensions,
            max_upload_mb: parse_env("MAX_UPLOAD_MB", defaults.max_upload_mb)?,
        })
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_mb.saturating_mul(1024 * 1024)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            embedding_url: None,
            embedding_model: "all-MiniLM-L6-v2".to_string(),
            embedding_api_key: None,
            embedding_timeout_secs: 60,
            embedding_dimensions: 384,
            max_upload_mb: 25,
        }
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match optional_env(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| anyhow!("{key} has invalid value '{raw}': {e}")),
        None => Ok(default),
    }
}
