use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::timestamp;

/// A team in a single season.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    #[serde(rename = "teamId")]
    pub id: u32,
    /// Ids of the same team in other seasons.
    pub linked_teams: Vec<u32>,
    pub season_id: u32,
    pub division_id: u32,
    pub division_name: String,
    pub team_leader: String,
    pub created_at: String,
    pub updated_at: String,
    pub tag: String,
    pub name: String,
    pub final_rank: Option<u32>,
    /// Roster in the order the API lists it.
    pub players: Vec<TeamPlayer>,
}

impl Team {
    pub fn created(&self) -> Option<DateTime<Utc>> {
        timestamp(&self.created_at)
    }

    pub fn updated(&self) -> Option<DateTime<Utc>> {
        timestamp(&self.updated_at)
    }

    pub fn leaders(&self) -> impl Iterator<Item = &TeamPlayer> + '_ {
        self.players.iter().filter(|p| p.is_leader)
    }
}

/// A roster entry on a team.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamPlayer {
    pub name: String,
    pub steam_id: String,
    pub is_leader: bool,
    pub joined_at: String,
}

impl TeamPlayer {
    pub fn joined(&self) -> Option<DateTime<Utc>> {
        timestamp(&self.joined_at)
    }
}
