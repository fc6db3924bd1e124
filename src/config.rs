use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_alert_timeout_ms")]
    pub alert_timeout_ms: u64,
    #[serde(default = "default_payment_delay_ms")]
    pub payment_delay_ms: u64,
}

fn default_alert_timeout_ms() -> u64 {
    4000
}

fn default_payment_delay_ms() -> u64 {
    1000
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            alert_timeout_ms: default_alert_timeout_ms(),
            payment_delay_ms: default_payment_delay_ms(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            let config = Config::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(&config_path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("hostelman")
            .join("config.toml")
    }

    pub fn alert_timeout(&self) -> Duration {
        Duration::from_millis(self.ui.alert_timeout_ms)
    }

    pub fn payment_delay(&self) -> Duration {
        Duration::from_millis(self.ui.payment_delay_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ui: UiConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timings() {
        let config = Config::default();
        assert_eq!(config.alert_timeout(), Duration::from_millis(4000));
        assert_eq!(config.payment_delay(), Duration::from_millis(1000));
    }

    #[test]
    fn test_partial_toml_fills_in_defaults() {
        let config: Config = toml::from_str("[ui]\npayment_delay_ms = 250\n").unwrap();
        assert_eq!(config.ui.payment_delay_ms, 250);
        assert_eq!(config.ui.alert_timeout_ms, 4000);
    }
}
