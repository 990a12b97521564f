use std::path::PathBuf;

use anyhow::{Context, Result};
use docfinder_app::config::AppConfig;

pub(crate) const DEFAULT_ANALYZER_URL: &str = "http://localhost:5000";

/// Server side settings, read from the environment.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Settings {
    /// Base url of the analysis service, `/api/analyze` gets appended.
    pub(crate) analyzer_url: String,
    /// Optional JSON file overriding the page config.
    pub(crate) page_config: Option<PathBuf>,
}

impl Settings {
    pub(crate) fn from_env() -> Self {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let analyzer_url = var("DOCFINDER_ANALYZER_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ANALYZER_URL.to_string());
        Self {
            analyzer_url,
            page_config: var("DOCFINDER_PAGE_CONFIG").map(PathBuf::from),
        }
    }

    pub(crate) fn analyze_url(&self) -> String {
        format!("{}/api/analyze", self.analyzer_url.trim_end_matches('/'))
    }

    pub(crate) fn load_page_config(&self) -> Result<AppConfig> {
        let Some(path) = &self.page_config else {
            return Ok(AppConfig::default());
        };
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading page config {}", path.display()))?;
        serde_json::from_str(&json)
            .with_context(|| format!("parsing page config {}", path.display()))
    }
}
