use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Parse an RFC 3339 timestamp as returned by the API (`2023-02-12T21:48:27.196Z`).
///
/// The `DateTime` accessors on records (`Player::updated`, `BulkBan::expires`,
/// ...) return `None` for a value this rejects. Call it on the raw field to
/// tell a malformed timestamp from a missing one.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    Ok(DateTime::parse_from_rfc3339(raw)?.with_timezone(&Utc))
}

/// An empty or unparseable timestamp counts as absent.
pub(crate) fn timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if raw.is_empty() {
        return None;
    }
    parse_timestamp(raw).ok()
}

/// One page of identifiers matching a name search.
///
/// `results` is always present; a search without matches yields an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    #[serde(default)]
    pub results: Vec<String>,
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub total_hit_count: u32,
}

impl SearchResults {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Interpret the results as numeric ids, as returned by the team search.
    pub fn ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.results.iter().filter_map(|r| r.parse().ok())
    }
}
