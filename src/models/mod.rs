// src/models/mod.rs

//! Data structures for stadium records and team aliases.

mod stadium;
mod team;

pub use stadium::{Coordinates, StadiumRecord};
pub use team::{TEAM_ALIASES, TeamAliases, TeamDirectory};
