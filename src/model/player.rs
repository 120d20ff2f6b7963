use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use super::common::timestamp;

/// A player profile, keyed by steam64 id.
///
/// `Player::default()` is what the API's "no such profile" answer maps to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub steam_id: String,
    pub avatar: String,
    pub name: String,
    pub updated_at: String,
    pub status: PlayerStatus,
    #[serde(rename = "banInformation")]
    pub ban: Option<Ban>,
    pub current_teams: CurrentTeams,
}

impl Player {
    /// `None` if `updated_at` is empty or not a valid timestamp.
    pub fn updated(&self) -> Option<DateTime<Utc>> {
        timestamp(&self.updated_at)
    }
}

/// Account flags shown on a profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStatus {
    pub is_verified: bool,
    pub is_banned: bool,
    pub is_on_probation: bool,
}

/// An active ban on a profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ban {
    pub ends_at: String,
    pub reason: String,
}

impl Ban {
    pub fn ends(&self) -> Option<DateTime<Utc>> {
        timestamp(&self.ends_at)
    }
}

/// Game formats a player can hold a team slot in.
#[derive(
    Debug,
    Clone,
    Copy,
    Hash,
    Eq,
    PartialEq,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum Format {
    Sixes,
    Highlander,
    Prolander,
}

/// The team a player is currently rostered on, per format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentTeams {
    pub sixes: Option<CurrentTeam>,
    pub highlander: Option<CurrentTeam>,
    pub prolander: Option<CurrentTeam>,
}

impl CurrentTeams {
    pub fn get(&self, format: Format) -> Option<&CurrentTeam> {
        match format {
            Format::Sixes => self.sixes.as_ref(),
            Format::Highlander => self.highlander.as_ref(),
            Format::Prolander => self.prolander.as_ref(),
        }
    }

    /// Teams the player is on, with the format each one plays.
    pub fn iter(&self) -> impl Iterator<Item = (Format, &CurrentTeam)> + '_ {
        Format::iter().filter_map(|format| self.get(format).map(|team| (format, team)))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentTeam {
    pub id: u32,
    pub tag: String,
    pub name: String,
    pub status: String,
    pub season_id: u32,
    pub division_id: u32,
    pub division_name: String,
}

/// A stint of a player on one team, as listed in their team history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerTeamHistory {
    pub format_id: u32,
    pub format_name: String,
    pub region_id: u32,
    pub region_name: String,
    pub season_id: u32,
    pub season_name: String,
    pub started_at: String,
    pub division_id: u32,
    pub division_name: String,
    /// `None` (or empty) while the player is still on the team.
    pub left_at: Option<String>,
    pub team_name: String,
    pub team_tag: String,
    pub team_id: u32,
    pub stats: TeamStats,
}

impl PlayerTeamHistory {
    pub fn is_current(&self) -> bool {
        self.left_at.as_deref().is_none_or(str::is_empty)
    }

    pub fn started(&self) -> Option<DateTime<Utc>> {
        timestamp(&self.started_at)
    }

    pub fn left(&self) -> Option<DateTime<Utc>> {
        self.left_at.as_deref().and_then(timestamp)
    }
}

/// Team record over a stint, with and without the player in the lineup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStats {
    pub wins: u32,
    pub wins_without: u32,
    pub loses: u32,
    pub loses_without: u32,
    pub games_played: u32,
    pub games_without: u32,
}
