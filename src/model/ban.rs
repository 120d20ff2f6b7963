use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::timestamp;

/// An entry of the league-wide ban list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkBan {
    pub steam_id: String,
    pub alias: String,
    pub expires_at: String,
    pub created_at: String,
    pub reason: String,
}

impl BulkBan {
    /// `None` if `expires_at` is empty or malformed; see [`parse_timestamp`](crate::parse_timestamp).
    pub fn expires(&self) -> Option<DateTime<Utc>> {
        timestamp(&self.expires_at)
    }

    pub fn created(&self) -> Option<DateTime<Utc>> {
        timestamp(&self.created_at)
    }
}
