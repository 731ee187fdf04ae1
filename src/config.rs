// src/config.rs

//! Application configuration.
//!
//! Replaces the ad-hoc flag passing of earlier revisions with one explicit
//! struct. Every field has a serde default so partial TOML files work.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Wikipedia page listing current NFL stadiums.
pub const STADIUM_PAGE_URL: &str = "https://en.wikipedia.org/wiki/List_of_current_NFL_stadiums";

/// MediaWiki API endpoint for the same wiki.
pub const WIKI_API_URL: &str = "https://en.wikipedia.org/w/api.php";

/// Page title used for API-mode fetches.
pub const STADIUM_PAGE_TITLE: &str = "List_of_current_NFL_stadiums";

/// Site origin used to absolutize relative links from table cells.
pub const WIKI_ORIGIN: &str = "https://en.wikipedia.org";

/// Anchor id of the section heading directly above the stadium table.
/// Change this if the wiki section structure changes.
pub const STADIUM_SECTION_ANCHOR: &str = "List_of_current_stadiums";

/// Which `<table>` after the section anchor holds the data (1-based).
/// The page places an infobox table between the heading and the data table.
pub const TABLES_AFTER_ANCHOR: usize = 2;

/// CSS class carried by wiki data tables, used by the largest-table fallback.
pub const WIKITABLE_CLASS: &str = "wikitable";

/// Identifying client string attached to every request.
pub const CONTACT_USER_AGENT: &str = "nfl-stadiums/0.1 (stadium data refresh; contact via repository issues)";

/// Contact address sent in the `From` header on every request.
pub const CONTACT_ADDRESS: &str = "nfl-stadiums@users.noreply.github.com";

/// Browser-like user agents rotated when `add_user_agent` is enabled.
pub const BROWSER_USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:124.0) Gecko/20100101 Firefox/124.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.3 Safari/605.1.15",
];

/// How the page content is fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchMode {
    /// Direct page fetch returning full HTML
    #[default]
    Page,
    /// MediaWiki parse API returning an HTML fragment inside JSON
    Api,
}

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Reuse the flat-file cache from the previous run
    #[serde(default = "defaults::use_cache")]
    pub use_cache: bool,

    /// Verbose logging (debug level in the CLI)
    #[serde(default)]
    pub verbose: bool,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// Rotate a randomized browser-like user agent per request
    #[serde(default = "defaults::add_user_agent")]
    pub add_user_agent: bool,

    /// Page fetch vs. parse API
    #[serde(default)]
    pub fetch_mode: FetchMode,

    /// URL fetched in page mode
    #[serde(default = "defaults::page_url")]
    pub page_url: String,

    /// API endpoint queried in api mode
    #[serde(default = "defaults::api_url")]
    pub api_url: String,

    /// Page title queried in api mode
    #[serde(default = "defaults::page_title")]
    pub page_title: String,

    /// Directory holding the two cache artifacts
    #[serde(default = "defaults::cache_dir")]
    pub cache_dir: PathBuf,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return defaults if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 {
            return Err(AppError::config("timeout_secs must be > 0"));
        }
        if !self.page_url.starts_with("http") {
            return Err(AppError::config(format!(
                "page_url must be an absolute URL, got '{}'",
                self.page_url
            )));
        }
        if !self.api_url.starts_with("http") {
            return Err(AppError::config(format!(
                "api_url must be an absolute URL, got '{}'",
                self.api_url
            )));
        }
        if self.page_title.trim().is_empty() {
            return Err(AppError::config("page_title is empty"));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            use_cache: defaults::use_cache(),
            verbose: false,
            timeout_secs: defaults::timeout(),
            add_user_agent: defaults::add_user_agent(),
            fetch_mode: FetchMode::default(),
            page_url: defaults::page_url(),
            api_url: defaults::api_url(),
            page_title: defaults::page_title(),
            cache_dir: defaults::cache_dir(),
        }
    }
}

mod defaults {
    use std::path::PathBuf;

    pub fn use_cache() -> bool {
        true
    }

    pub fn timeout() -> u64 {
        5
    }

    pub fn add_user_agent() -> bool {
        true
    }

    pub fn page_url() -> String {
        super::STADIUM_PAGE_URL.to_string()
    }

    pub fn api_url() -> String {
        super::WIKI_API_URL.to_string()
    }

    pub fn page_title() -> String {
        super::STADIUM_PAGE_TITLE.to_string()
    }

    pub fn cache_dir() -> PathBuf {
        PathBuf::from("resources")
    }
}
