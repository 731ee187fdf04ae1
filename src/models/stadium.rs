// src/models/stadium.rs

//! Stadium data structure.

use serde::{Deserialize, Serialize};

/// Geographic coordinates of a venue.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// One physical venue from the current-stadiums table.
///
/// Built once per extraction pass and immutable afterwards. Serialized
/// verbatim into the JSON cache artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StadiumRecord {
    /// Stadium name
    pub name: String,

    /// Seating capacity, thousands separators stripped
    pub capacity: u32,

    /// Absolute URL of the stadium image page
    pub img_url: String,

    /// City and state as printed in the table
    pub city: String,

    /// Playing surface
    pub surface: String,

    /// Roof type (Fixed, Retractable, Open)
    pub roof_type: String,

    /// Raw team mentions as they appear in the table, in document order
    pub teams: Vec<String>,

    /// Year the stadium opened
    pub year_opened: u16,

    /// True iff more than one canonical team resolves for this venue
    #[serde(default)]
    pub shared_stadium: bool,

    /// Canonical team codes in discovery order, duplicates dropped
    #[serde(default)]
    pub current_teams: Vec<String>,

    /// Venue coordinates, when the source provides them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> StadiumRecord {
        StadiumRecord {
            name: "Ford Field".to_string(),
            capacity: 65_000,
            img_url: "https://en.wikipedia.org/wiki/File:Ford_Field.jpg".to_string(),
            city: "Detroit, Michigan".to_string(),
            surface: "FieldTurf".to_string(),
            roof_type: "Fixed".to_string(),
            teams: vec!["Detroit Lions".to_string()],
            year_opened: 2002,
            shared_stadium: false,
            current_teams: vec!["DET".to_string()],
            coordinates: None,
        }
    }

    #[test]
    fn test_cache_field_names() {
        let json = serde_json::to_value(sample_record()).unwrap();

        assert_eq!(json["name"], "Ford Field");
        assert_eq!(json["capacity"], 65_000);
        assert_eq!(json["imgUrl"], "https://en.wikipedia.org/wiki/File:Ford_Field.jpg");
        assert_eq!(json["roofType"], "Fixed");
        assert_eq!(json["yearOpened"], 2002);
        assert_eq!(json["sharedStadium"], false);
        assert_eq!(json["currentTeams"][0], "DET");
        // Absent coordinates are omitted, not serialized as null
        assert!(json.get("coordinates").is_none());
    }

    #[test]
    fn test_json_round_trip() {
        let record = sample_record();
        let json = serde_json::to_string(&record).unwrap();
        let back: StadiumRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }

    #[test]
    fn test_deserialize_without_normalization_fields() {
        // Records written before the normalization pass still load
        let json = r#"{
            "name": "Lambeau Field",
            "capacity": 81441,
            "imgUrl": "",
            "city": "Green Bay, Wisconsin",
            "surface": "Hybrid grass",
            "roofType": "Open",
            "teams": ["Green Bay Packers"],
            "yearOpened": 1957
        }"#;

        let record: StadiumRecord = serde_json::from_str(json).unwrap();
        assert!(!record.shared_stadium);
        assert!(record.current_teams.is_empty());
        assert!(record.coordinates.is_none());
    }
}
