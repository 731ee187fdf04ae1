// src/services/mod.rs

//! Scraping and lookup services.

pub mod extractor;
pub mod normalizer;
pub mod stadiums;

pub use stadiums::{StadiumService, TeamStadiums};
