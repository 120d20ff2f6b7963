use serde::{Deserialize, Serialize};

/// A league season.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Season {
    pub name: String,
    #[serde(rename = "formatName")]
    pub format: Option<String>,
    #[serde(rename = "regionName")]
    pub region: Option<String>,
    pub maps: Vec<String>,
    pub participating_teams: Vec<u32>,
    #[serde(rename = "matchesPlayedDuringSeason")]
    pub matches: Vec<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_round_trip() {
        let fixture = serde_json::json!({
          "name": "P7 Season 9",
          "formatName": null,
          "regionName": null,
          "maps": ["koth_product_rcx", "pl_vigil_rc8", "koth_synthetic_rc6a"],
          "participatingTeams": [8317, 8249, 8250],
          "matchesPlayedDuringSeason": [13004, 13005, 13008, 13009]
        });
        let season: Season = serde_json::from_value(fixture.clone()).unwrap();

        assert_eq!(season.name, "P7 Season 9");
        assert_eq!(season.format, None);
        assert_eq!(season.maps.len(), 3);
        assert_eq!(season.matches.first(), Some(&13004));
        assert_eq!(serde_json::to_value(&season).unwrap(), fixture);
    }

    #[test]
    fn test_season_with_format() {
        let season: Season = serde_json::from_value(serde_json::json!({
          "name": "Sixes S2",
          "formatName": "Sixes",
          "regionName": "NA Sixes",
          "maps": [],
          "participatingTeams": [],
          "matchesPlayedDuringSeason": []
        }))
        .unwrap();
        assert_eq!(season.format.as_deref(), Some("Sixes"));
        assert_eq!(season.region.as_deref(), Some("NA Sixes"));
        assert!(season.participating_teams.is_empty());
    }
}
