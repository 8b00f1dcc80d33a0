use serde::{Deserialize, Serialize};
use tokio::{fs, io::AsyncReadExt, time::Duration};

use crate::error::Result;

const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_api_server")]
    pub api_server: String,
    /// 0 through 4, trace through error
    #[serde(default = "default_log_level")]
    pub log_level: u8,
    #[serde(default = "default_submit_cooldown")]
    pub submit_cooldown_seconds: u64,
    #[serde(default = "default_poll_interval")]
    pub leaderboard_poll_seconds: u64,
}

fn default_api_server() -> String {
    "http://0.0.0.0:8081".to_owned()
}
fn default_log_level() -> u8 {
    2
}
fn default_submit_cooldown() -> u64 {
    3
}
fn default_poll_interval() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_server: default_api_server(),
            log_level: default_log_level(),
            submit_cooldown_seconds: default_submit_cooldown(),
            leaderboard_poll_seconds: default_poll_interval(),
        }
    }
}

impl Config {
    pub fn cooldown(&self) -> Duration {
        Duration::from_secs(self.submit_cooldown_seconds)
    }
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.leaderboard_poll_seconds)
    }
}

/// Load the config from `CONFIG_PATH` (default `config.toml`), writing the
/// default file back when none exists.
pub async fn load() -> Result<Config> {
    let config_path = std::env::var("CONFIG_PATH")
        .ok()
        .unwrap_or(DEFAULT_CONFIG_PATH.into());

    if fs::metadata(&config_path).await.is_ok() {
        let mut buf = String::new();
        fs::File::open(&config_path)
            .await?
            .read_to_string(&mut buf)
            .await?;
        return Ok(toml::from_str(&buf)?);
    }

    let config = Config::default();
    let default_toml =
        toml::to_string_pretty(&config).expect("default config must serialize");
    fs::write(&config_path, default_toml).await?;
    Ok(config)
}
