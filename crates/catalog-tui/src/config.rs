use serde::{Deserialize, Serialize};
use std::{env, path::PathBuf};

/// Application configuration loaded from catalog-tui.toml
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_source_url")]
    pub source_url: String,
    #[serde(default = "default_placeholder_image")]
    pub placeholder_image: String,
    /// Delay between the last accepted keystroke and the search run.
    /// Carried over from the original viewer, where it simulated the
    /// latency of a real search backend.
    #[serde(default = "default_search_delay_ms")]
    pub search_delay_ms: u64,
}

fn default_source_url() -> String {
    "https://myntra-database-lt5b7yjpx-aloki9singh.vercel.app/clothing".to_string()
}

fn default_placeholder_image() -> String {
    "https://via.placeholder.com/150".to_string()
}

fn default_search_delay_ms() -> u64 {
    500
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_url: default_source_url(),
            placeholder_image: default_placeholder_image(),
            search_delay_ms: default_search_delay_ms(),
        }
    }
}

impl Config {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        const CONFIG_FILE: &str = "catalog-tui.toml";

        // Try current directory first
        if let Ok(content) = std::fs::read_to_string(CONFIG_FILE)
            && let Ok(config) = toml::from_str(&content)
        {
            log::debug!("Loaded config from {}", CONFIG_FILE);
            return config;
        }

        // Try home directory
        if let Some(home) = env::var_os("HOME") {
            let home_config = PathBuf::from(home).join(format!(".{}", CONFIG_FILE));
            if let Ok(content) = std::fs::read_to_string(&home_config)
                && let Ok(config) = toml::from_str(&content)
            {
                log::debug!("Loaded config from {}", home_config.display());
                return config;
            }
        }

        log::debug!("Using default config");
        Self::default()
    }
}
