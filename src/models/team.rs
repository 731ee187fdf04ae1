// src/models/team.rs

//! Team alias reference table and normalization.

/// Alias spellings for one franchise. The canonical form is always the
/// upper-cased `city_short` code.
#[derive(Debug, Clone, Copy)]
pub struct TeamAliases {
    pub city_short: &'static str,
    pub alt_city_short: &'static str,
    pub long_name: &'static str,
    pub mascot: &'static str,
    pub mascot_short: &'static str,
}

/// All 32 current franchises.
pub const TEAM_ALIASES: &[TeamAliases] = &[
    TeamAliases {
        city_short: "ARI",
        alt_city_short: "ARZ",
        long_name: "Arizona Cardinals",
        mascot: "Cardinals",
        mascot_short: "Cards",
    },
    TeamAliases {
        city_short: "ATL",
        alt_city_short: "ATL",
        long_name: "Atlanta Falcons",
        mascot: "Falcons",
        mascot_short: "Falcons",
    },
    TeamAliases {
        city_short: "BAL",
        alt_city_short: "BLT",
        long_name: "Baltimore Ravens",
        mascot: "Ravens",
        mascot_short: "Ravens",
    },
    TeamAliases {
        city_short: "BUF",
        alt_city_short: "BUF",
        long_name: "Buffalo Bills",
        mascot: "Bills",
        mascot_short: "Bills",
    },
    TeamAliases {
        city_short: "CAR",
        alt_city_short: "CAR",
        long_name: "Carolina Panthers",
        mascot: "Panthers",
        mascot_short: "Panthers",
    },
    TeamAliases {
        city_short: "CHI",
        alt_city_short: "CHI",
        long_name: "Chicago Bears",
        mascot: "Bears",
        mascot_short: "Bears",
    },
    TeamAliases {
        city_short: "CIN",
        alt_city_short: "CIN",
        long_name: "Cincinnati Bengals",
        mascot: "Bengals",
        mascot_short: "Bengals",
    },
    TeamAliases {
        city_short: "CLE",
        alt_city_short: "CLV",
        long_name: "Cleveland Browns",
        mascot: "Browns",
        mascot_short: "Browns",
    },
    TeamAliases {
        city_short: "DAL",
        alt_city_short: "DAL",
        long_name: "Dallas Cowboys",
        mascot: "Cowboys",
        mascot_short: "Boys",
    },
    TeamAliases {
        city_short: "DEN",
        alt_city_short: "DEN",
        long_name: "Denver Broncos",
        mascot: "Broncos",
        mascot_short: "Broncos",
    },
    TeamAliases {
        city_short: "DET",
        alt_city_short: "DET",
        long_name: "Detroit Lions",
        mascot: "Lions",
        mascot_short: "Lions",
    },
    TeamAliases {
        city_short: "GB",
        alt_city_short: "GNB",
        long_name: "Green Bay Packers",
        mascot: "Packers",
        mascot_short: "Pack",
    },
    TeamAliases {
        city_short: "HOU",
        alt_city_short: "HST",
        long_name: "Houston Texans",
        mascot: "Texans",
        mascot_short: "Texans",
    },
    TeamAliases {
        city_short: "IND",
        alt_city_short: "IND",
        long_name: "Indianapolis Colts",
        mascot: "Colts",
        mascot_short: "Colts",
    },
    TeamAliases {
        city_short: "JAX",
        alt_city_short: "JAC",
        long_name: "Jacksonville Jaguars",
        mascot: "Jaguars",
        mascot_short: "Jags",
    },
    TeamAliases {
        city_short: "KC",
        alt_city_short: "KAN",
        long_name: "Kansas City Chiefs",
        mascot: "Chiefs",
        mascot_short: "Chiefs",
    },
    TeamAliases {
        city_short: "LV",
        alt_city_short: "LVR",
        long_name: "Las Vegas Raiders",
        mascot: "Raiders",
        mascot_short: "Raiders",
    },
    TeamAliases {
        city_short: "LAC",
        alt_city_short: "LAC",
        long_name: "Los Angeles Chargers",
        mascot: "Chargers",
        mascot_short: "Bolts",
    },
    TeamAliases {
        city_short: "LAR",
        alt_city_short: "LA",
        long_name: "Los Angeles Rams",
        mascot: "Rams",
        mascot_short: "Rams",
    },
    TeamAliases {
        city_short: "MIA",
        alt_city_short: "MIA",
        long_name: "Miami Dolphins",
        mascot: "Dolphins",
        mascot_short: "Fins",
    },
    TeamAliases {
        city_short: "MIN",
        alt_city_short: "MIN",
        long_name: "Minnesota Vikings",
        mascot: "Vikings",
        mascot_short: "Vikes",
    },
    TeamAliases {
        city_short: "NE",
        alt_city_short: "NWE",
        long_name: "New England Patriots",
        mascot: "Patriots",
        mascot_short: "Pats",
    },
    TeamAliases {
        city_short: "NO",
        alt_city_short: "NOR",
        long_name: "New Orleans Saints",
        mascot: "Saints",
        mascot_short: "Saints",
    },
    TeamAliases {
        city_short: "NYG",
        alt_city_short: "NYG",
        long_name: "New York Giants",
        mascot: "Giants",
        mascot_short: "G-Men",
    },
    TeamAliases {
        city_short: "NYJ",
        alt_city_short: "NYJ",
        long_name: "New York Jets",
        mascot: "Jets",
        mascot_short: "Jets",
    },
    TeamAliases {
        city_short: "PHI",
        alt_city_short: "PHI",
        long_name: "Philadelphia Eagles",
        mascot: "Eagles",
        mascot_short: "Birds",
    },
    TeamAliases {
        city_short: "PIT",
        alt_city_short: "PIT",
        long_name: "Pittsburgh Steelers",
        mascot: "Steelers",
        mascot_short: "Steelers",
    },
    TeamAliases {
        city_short: "SEA",
        alt_city_short: "SEA",
        long_name: "Seattle Seahawks",
        mascot: "Seahawks",
        mascot_short: "Hawks",
    },
    TeamAliases {
        city_short: "SF",
        alt_city_short: "SFO",
        long_name: "San Francisco 49ers",
        mascot: "49ers",
        mascot_short: "Niners",
    },
    TeamAliases {
        city_short: "TB",
        alt_city_short: "TAM",
        long_name: "Tampa Bay Buccaneers",
        mascot: "Buccaneers",
        mascot_short: "Bucs",
    },
    TeamAliases {
        city_short: "TEN",
        alt_city_short: "TEN",
        long_name: "Tennessee Titans",
        mascot: "Titans",
        mascot_short: "Titans",
    },
    TeamAliases {
        city_short: "WAS",
        alt_city_short: "WSH",
        long_name: "Washington Commanders",
        mascot: "Commanders",
        mascot_short: "Commanders",
    },
];

/// Immutable team reference table.
///
/// Holds five parallel, index-aligned, lower-cased alias lists. Built once
/// at startup and passed by reference wherever normalization is needed.
#[derive(Debug, Clone)]
pub struct TeamDirectory {
    city_short: Vec<String>,
    alt_city_short: Vec<String>,
    long_names: Vec<String>,
    mascots: Vec<String>,
    mascots_short: Vec<String>,
}

impl TeamDirectory {
    /// Build a directory from alias rows. Aliases are lower-cased here so
    /// lookups stay case-insensitive without per-call allocation games.
    pub fn new(rows: &[TeamAliases]) -> Self {
        Self {
            city_short: rows.iter().map(|r| r.city_short.to_lowercase()).collect(),
            alt_city_short: rows
                .iter()
                .map(|r| r.alt_city_short.to_lowercase())
                .collect(),
            long_names: rows.iter().map(|r| r.long_name.to_lowercase()).collect(),
            mascots: rows.iter().map(|r| r.mascot.to_lowercase()).collect(),
            mascots_short: rows
                .iter()
                .map(|r| r.mascot_short.to_lowercase())
                .collect(),
        }
    }

    /// Number of teams in the directory.
    pub fn len(&self) -> usize {
        self.city_short.len()
    }

    pub fn is_empty(&self) -> bool {
        self.city_short.is_empty()
    }

    /// Map a free-text team reference to its canonical code.
    ///
    /// The five alias lists are searched in a fixed priority order
    /// (city-short, alt-city-short, long name, mascot, short mascot), so a
    /// string appearing in several lists resolves via the earliest one.
    pub fn normalize(&self, raw: &str) -> Option<String> {
        let needle = raw.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }

        let lists = [
            &self.city_short,
            &self.alt_city_short,
            &self.long_names,
            &self.mascots,
            &self.mascots_short,
        ];

        for aliases in lists {
            if let Some(index) = aliases.iter().position(|alias| *alias == needle) {
                return Some(self.city_short[index].to_uppercase());
            }
        }
        None
    }
}

impl Default for TeamDirectory {
    fn default() -> Self {
        Self::new(TEAM_ALIASES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias_table_shape() {
        assert_eq!(TEAM_ALIASES.len(), 32);
        for row in TEAM_ALIASES {
            assert!(!row.city_short.is_empty());
            assert!(!row.alt_city_short.is_empty());
            assert!(!row.long_name.is_empty());
            assert!(!row.mascot.is_empty());
            assert!(!row.mascot_short.is_empty());
        }
    }

    #[test]
    fn test_canonical_codes_are_unique() {
        let mut codes: Vec<&str> = TEAM_ALIASES.iter().map(|r| r.city_short).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), 32);
    }

    #[test]
    fn test_normalize_all_five_alias_forms() {
        let directory = TeamDirectory::default();

        // Same canonical code regardless of the alias form supplied
        assert_eq!(directory.normalize("DET").as_deref(), Some("DET"));
        assert_eq!(directory.normalize("Detroit Lions").as_deref(), Some("DET"));
        assert_eq!(directory.normalize("Lions").as_deref(), Some("DET"));
        assert_eq!(directory.normalize("GNB").as_deref(), Some("GB"));
        assert_eq!(directory.normalize("Pack").as_deref(), Some("GB"));
        assert_eq!(directory.normalize("Niners").as_deref(), Some("SF"));
        assert_eq!(directory.normalize("la").as_deref(), Some("LAR"));
    }

    #[test]
    fn test_normalize_is_case_insensitive() {
        let directory = TeamDirectory::default();
        assert_eq!(directory.normalize("Lions"), directory.normalize("lions"));
        assert_eq!(directory.normalize("det"), directory.normalize("DET"));
        assert_eq!(
            directory.normalize("dEtRoIt LiOnS").as_deref(),
            Some("DET")
        );
    }

    #[test]
    fn test_normalize_trims_whitespace() {
        let directory = TeamDirectory::default();
        assert_eq!(directory.normalize("  Giants ").as_deref(), Some("NYG"));
    }

    #[test]
    fn test_normalize_unknown_input() {
        let directory = TeamDirectory::default();
        assert_eq!(directory.normalize("zzz"), None);
        assert_eq!(directory.normalize(""), None);
        assert_eq!(directory.normalize("   "), None);
    }

    #[test]
    fn test_priority_order_breaks_ties() {
        // "rex" is a city code for one team and a mascot for another;
        // the city-short list must win.
        let rows = [
            TeamAliases {
                city_short: "REX",
                alt_city_short: "RX",
                long_name: "River City Rexes",
                mascot: "Rexes",
                mascot_short: "Rex",
            },
            TeamAliases {
                city_short: "LKW",
                alt_city_short: "LW",
                long_name: "Lakewood Rex",
                mascot: "Rex",
                mascot_short: "Rexy",
            },
        ];
        let directory = TeamDirectory::new(&rows);

        assert_eq!(directory.normalize("rex").as_deref(), Some("REX"));
        assert_eq!(directory.normalize("rexy").as_deref(), Some("LKW"));
    }

    #[test]
    fn test_parallel_lists_stay_aligned() {
        let directory = TeamDirectory::default();
        assert_eq!(directory.len(), TEAM_ALIASES.len());

        // Every long name resolves to the code at its own index
        for row in TEAM_ALIASES {
            assert_eq!(
                directory.normalize(row.long_name).as_deref(),
                Some(row.city_short.to_uppercase().as_str()),
                "long name {} did not resolve to {}",
                row.long_name,
                row.city_short
            );
        }
    }
}
