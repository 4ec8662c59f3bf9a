use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VanguardConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    /// Ledger backend: "sled" (persistent) or "memory" (ephemeral).
    #[serde(default = "default_ledger_backend")]
    pub ledger_backend: String,
    /// Number of most-recent records covered by the rolling mean delta.
    #[serde(default = "default_analytics_window")]
    pub analytics_window: usize,
}

fn default_bind_addr() -> String {
    "127.0.0.1:8000".to_string()
}

fn default_data_dir() -> String {
    "data".to_string()
}

fn default_ledger_backend() -> String {
    "sled".to_string()
}

fn default_analytics_window() -> usize {
    50
}

impl Default for VanguardConfig {
    fn default() -> Self {
        VanguardConfig {
            bind_addr: default_bind_addr(),
            data_dir: default_data_dir(),
            ledger_backend: default_ledger_backend(),
            analytics_window: default_analytics_window(),
        }
    }
}

/// Load configuration: compiled defaults, then the TOML file, then
/// `VANGUARD_`-prefixed environment variables.
pub fn load_config(path: Option<&str>) -> Result<VanguardConfig, figment::Error> {
    let figment = Figment::from(Serialized::defaults(VanguardConfig::default()))
        .merge(Toml::file(path.unwrap_or("vanguard.toml")))
        .merge(Env::prefixed("VANGUARD_"));

    let config: VanguardConfig = figment.extract()?;

    if !matches!(config.ledger_backend.as_str(), "sled" | "memory") {
        return Err(figment::Error::from(format!(
            "unsupported ledger_backend '{}', expected 'sled' or 'memory'",
            config.ledger_backend
        )));
    }

    Ok(config)
}
