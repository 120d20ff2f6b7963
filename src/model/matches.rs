use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::timestamp;

/// A scheduled or played match between teams.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    #[serde(rename = "matchId")]
    pub id: u32,
    pub season_name: String,
    #[serde(rename = "divName")]
    pub division_name: String,
    pub season_id: u32,
    #[serde(rename = "matchDate")]
    pub date: String,
    #[serde(rename = "matchName")]
    pub name: String,
    /// Team id of the winner, once the match is decided.
    #[serde(default)]
    pub winner: Option<u32>,
    pub teams: Vec<MatchTeam>,
    pub maps: Vec<MatchMap>,
}

impl Match {
    pub fn scheduled(&self) -> Option<DateTime<Utc>> {
        timestamp(&self.date)
    }

    pub fn home(&self) -> Option<&MatchTeam> {
        self.teams.iter().find(|t| t.is_home)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchTeam {
    #[serde(rename = "teamName")]
    pub name: String,
    #[serde(rename = "teamTag")]
    pub tag: String,
    #[serde(rename = "teamId")]
    pub id: u32,
    pub is_home: bool,
    /// Match points as the API formats them, e.g. `"2.75"`.
    pub points: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchMap {
    #[serde(rename = "mapName")]
    pub name: String,
    pub home_score: u32,
    pub away_score: u32,
}
