use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use summit_core::FeedMeta;
use summit_engine::DEFAULT_SITE_ORIGIN;
use summit_logging::summit_info;

/// Run configuration, read from a RON file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_site_origin")]
    pub site_origin: String,
    pub feed: FeedMeta,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            site_origin: default_site_origin(),
            feed: FeedMeta::new(
                "Migraine World Summit 2025",
                "Expert interviews and discussions from the Migraine World Summit 2025",
                "https://migraineworldsummit.com/summit/2025-summit/",
                "en",
            ),
        }
    }
}

fn default_site_origin() -> String {
    DEFAULT_SITE_ORIGIN.to_string()
}

/// Load `path`, or the built-in 2025 summit configuration when no path is given.
///
/// Feed metadata is validated here so a bad file fails before any work starts.
pub fn load(path: Option<&Path>) -> anyhow::Result<AppConfig> {
    let config = match path {
        Some(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            let config: AppConfig = ron::from_str(&content)
                .with_context(|| format!("parsing config {}", path.display()))?;
            summit_info!("Loaded configuration from {:?}", path);
            config
        }
        None => AppConfig::default(),
    };
    config
        .feed
        .validate()
        .context("feed metadata in configuration is invalid")?;
    Ok(config)
}
