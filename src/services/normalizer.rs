// src/services/normalizer.rs

//! Team normalization pass over extracted records.

use crate::models::{StadiumRecord, TeamDirectory};

/// Resolve every raw team mention to a canonical code and derive the
/// shared-stadium flag.
///
/// Hits are collected in discovery order with duplicates dropped; mentions
/// that resolve to no current franchise are ignored.
pub fn annotate_current_teams(directory: &TeamDirectory, records: &mut [StadiumRecord]) {
    for record in records {
        let mut current_teams: Vec<String> = Vec::new();

        for mention in &record.teams {
            if let Some(code) = directory.normalize(mention) {
                if !current_teams.contains(&code) {
                    current_teams.push(code);
                }
            }
        }

        record.shared_stadium = current_teams.len() > 1;
        record.current_teams = current_teams;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with_teams(teams: &[&str]) -> StadiumRecord {
        StadiumRecord {
            name: "Test Stadium".to_string(),
            capacity: 70_000,
            img_url: String::new(),
            city: "Test City".to_string(),
            surface: "Grass".to_string(),
            roof_type: "Open".to_string(),
            teams: teams.iter().map(|t| t.to_string()).collect(),
            year_opened: 2000,
            shared_stadium: false,
            current_teams: Vec::new(),
            coordinates: None,
        }
    }

    #[test]
    fn test_single_team_not_shared() {
        let directory = TeamDirectory::default();
        let mut records = vec![record_with_teams(&["Detroit Lions"])];

        annotate_current_teams(&directory, &mut records);

        assert_eq!(records[0].current_teams, vec!["DET"]);
        assert!(!records[0].shared_stadium);
    }

    #[test]
    fn test_two_teams_shared() {
        let directory = TeamDirectory::default();
        let mut records = vec![record_with_teams(&["New York Giants", "New York Jets"])];

        annotate_current_teams(&directory, &mut records);

        assert_eq!(records[0].current_teams, vec!["NYG", "NYJ"]);
        assert!(records[0].shared_stadium);
    }

    #[test]
    fn test_unrecognized_mentions_are_dropped() {
        let directory = TeamDirectory::default();
        let mut records = vec![record_with_teams(&[
            "Detroit Lions",
            "London Monarchs", // defunct, not in the directory
        ])];

        annotate_current_teams(&directory, &mut records);

        assert_eq!(records[0].current_teams, vec!["DET"]);
        assert!(!records[0].shared_stadium);
    }

    #[test]
    fn test_duplicate_mentions_resolve_once() {
        let directory = TeamDirectory::default();
        let mut records = vec![record_with_teams(&["Detroit Lions", "Lions", "DET"])];

        annotate_current_teams(&directory, &mut records);

        assert_eq!(records[0].current_teams, vec!["DET"]);
        assert!(!records[0].shared_stadium);
    }

    #[test]
    fn test_shared_flag_invariant_holds() {
        let directory = TeamDirectory::default();
        let mut records = vec![
            record_with_teams(&[]),
            record_with_teams(&["Lions"]),
            record_with_teams(&["Giants", "Jets"]),
            record_with_teams(&["nobody"]),
        ];

        annotate_current_teams(&directory, &mut records);

        for record in &records {
            assert_eq!(record.shared_stadium, record.current_teams.len() > 1);
        }
    }
}
