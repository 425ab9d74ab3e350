use std::fs;
use std::path::Path;
use serde::Deserialize;
use anyhow::{Context, Result};
use tracing::info;

pub const DEFAULT_BASE_URL: &str = "https://bet365-sports-odds.p.rapidapi.com";
const CONFIG_FILE: &str = "config.toml";

#[derive(Clone, Deserialize)]
pub struct Bet365Config {
    pub api_host: String,
    pub api_key: String,
    #[serde(default)]
    pub base_url: Option<String>,
}

impl Bet365Config {
    pub fn new(api_host: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            api_host: api_host.into(),
            api_key: api_key.into(),
            base_url: None,
        }
    }

    /// Base URL without a trailing slash, falling back to the public RapidAPI host.
    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .map(|url| url.trim_end_matches('/'))
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_BASE_URL)
    }
}

// The key never shows up in logs.
impl std::fmt::Debug for Bet365Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bet365Config")
            .field("api_host", &self.api_host)
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url())
            .finish()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub bet365: Bet365Config,
}

impl Config {
    /// Read `config.toml` from the working directory.
    pub fn new() -> Result<Self> {
        Self::from_file(CONFIG_FILE)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: Config = toml::from_str(&config_str)?;
        info!("Config: {:?}", config);
        Ok(config)
    }

    /// Build from `BET365_API_HOST`, `BET365_API_KEY` and optionally `BET365_BASE_URL`.
    /// A `.env` file in the working directory is honoured.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        let api_host = std::env::var("BET365_API_HOST").context("BET365_API_HOST is not set")?;
        let api_key = std::env::var("BET365_API_KEY").context("BET365_API_KEY is not set")?;
        let base_url = std::env::var("BET365_BASE_URL").ok();

        let config = Config {
            bet365: Bet365Config {
                api_host,
                api_key,
                base_url,
            },
        };
        info!("Config: {:?}", config);
        Ok(config)
    }

    /// `config.toml` when present, the environment otherwise.
    pub fn load() -> Result<Self> {
        if Path::new(CONFIG_FILE).exists() {
            Self::new()
        } else {
            Self::from_env()
        }
    }
}
