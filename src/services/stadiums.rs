// src/services/stadiums.rs

//! Stadium lookup facade.
//!
//! Builds the in-memory stadium list once (from cache when usable, otherwise
//! from a fresh fetch) and answers lookups against it. The list is read-only
//! after construction.

use scraper::Html;

use crate::config::{Config, FetchMode};
use crate::error::{AppError, Result};
use crate::models::{StadiumRecord, TeamDirectory};
use crate::services::{extractor, normalizer};
use crate::storage::CacheStore;
use crate::utils::http;

/// Result of a team lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum TeamStadiums {
    /// The team plays at exactly one venue
    Single(StadiumRecord),
    /// Genuine shared-stadium case: the team appears at several venues
    Shared(Vec<StadiumRecord>),
}

/// User-facing stadium directory.
pub struct StadiumService {
    directory: TeamDirectory,
    data: Vec<StadiumRecord>,
}

impl StadiumService {
    /// Build the service: check the cache, refresh from the wiki when the
    /// cache is unusable. A failed refresh is logged and leaves the service
    /// with empty data; it never takes the process down.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let directory = TeamDirectory::default();
        let cache = CacheStore::new(&config.cache_dir);

        let mut data = Vec::new();
        if config.use_cache {
            let cached = cache.load();
            if cached.is_miss() {
                log::info!("No cache available. If this is the first run this is normal.");
            } else {
                log::info!(
                    "Loaded {} stadiums from cache. Disable use_cache to refresh.",
                    cached.records.len()
                );
                data = cached.records;
            }
        }

        if data.is_empty() {
            match Self::refresh(&config, &cache, &directory) {
                Ok(records) => data = records,
                Err(error) => log::error!("Stadium refresh failed: {error}"),
            }
        }

        Ok(Self { directory, data })
    }

    /// Build a service over an already-materialized record list, bypassing
    /// cache and network entirely.
    pub fn with_records(records: Vec<StadiumRecord>) -> Self {
        Self {
            directory: TeamDirectory::default(),
            data: records,
        }
    }

    /// Fetch, extract, normalize and cache a fresh record list.
    fn refresh(
        config: &Config,
        cache: &CacheStore,
        directory: &TeamDirectory,
    ) -> Result<Vec<StadiumRecord>> {
        let client = http::create_client(config)?;

        let html = match config.fetch_mode {
            FetchMode::Page => {
                http::fetch_html(&client, &config.page_url, config.add_user_agent)?
            }
            FetchMode::Api => {
                http::fetch_parse_api(&client, &config.api_url, &config.page_title)?
            }
        };

        let document = Html::parse_document(&html);
        let mut records = extractor::extract_stadiums(&document)?;
        normalizer::annotate_current_teams(directory, &mut records);

        if let Err(error) = cache.save(&html, &records) {
            log::warn!("Failed to write stadium cache: {error}");
        }

        log::info!("Fetched {} stadiums from the wiki", records.len());
        Ok(records)
    }

    /// All stadium names, in extraction order.
    pub fn stadium_names(&self) -> Vec<String> {
        self.data.iter().map(|record| record.name.clone()).collect()
    }

    /// The full record list, in extraction order.
    pub fn records(&self) -> &[StadiumRecord] {
        &self.data
    }

    /// Find the stadium record(s) for a team given in any alias form.
    pub fn find_by_team(&self, query: &str) -> Result<TeamStadiums> {
        let code = self
            .directory
            .normalize(query)
            .ok_or_else(|| AppError::UnknownTeam(query.to_string()))?;

        let mut matches: Vec<StadiumRecord> = self
            .data
            .iter()
            .filter(|record| record.current_teams.iter().any(|team| *team == code))
            .cloned()
            .collect();

        if matches.is_empty() {
            return Err(AppError::NoDataForTeam(code));
        }
        if matches.len() == 1 {
            return Ok(TeamStadiums::Single(matches.remove(0)));
        }

        log::warn!(
            "Team {code} plays at {} stadiums according to the data; returning all of them",
            matches.len()
        );
        Ok(TeamStadiums::Shared(matches))
    }
}
