use serde::Deserialize;

use crate::services::SummaryMode;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Path of the JSON dataset loaded at startup
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Path of the logo shown in the page header
    #[serde(default = "default_logo_path")]
    pub logo_path: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Whether the summary figures are fixed placeholders or computed
    #[serde(default)]
    pub summary_mode: SummaryMode,
}

fn default_data_file() -> String {
    "recommendation_dataset.json".to_string()
}

fn default_logo_path() -> String {
    "jio.png".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            logo_path: default_logo_path(),
            host: default_host(),
            port: default_port(),
            summary_mode: SummaryMode::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Load configuration from explicit key/value pairs
    pub fn from_vars<I>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter::<_, Config>(vars)
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Address the listener binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
