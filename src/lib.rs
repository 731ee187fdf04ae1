// src/lib.rs

//! NFL stadium directory scraped from Wikipedia.
//!
//! Fetches the list-of-current-stadiums table, normalizes raw team mentions
//! into canonical abbreviations and answers team lookups from an in-memory
//! list backed by a flat-file cache.

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;
pub mod utils;

pub use config::Config;
pub use error::{AppError, Result};
pub use models::{StadiumRecord, TeamDirectory};
pub use services::{StadiumService, TeamStadiums};
