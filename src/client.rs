use std::time::Duration;

use tracing::instrument;

use crate::error::Result;
use crate::model::*;
use crate::rate_limit::{RateLimit, RateLimiter};
use crate::rgl::{self, search::SearchTarget, Transport};

/// The main entry point for interacting with the RGL API.
///
/// `RglClient` wraps a [`reqwest::Client`] and a [`RateLimiter`] and exposes
/// one method per API resource. Clones share the HTTP connection pool and
/// the rate limiter.
///
/// Resources that do not exist are not errors: single-record lookups return
/// the record's `Default` value and list lookups return an empty `Vec`.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> rgl_api::Result<()> {
/// use rgl_api::RglClient;
///
/// let client = RglClient::new();
/// let player = client.get_player("76561198098770013").await?;
/// for (format, team) in player.current_teams.iter() {
///     println!("{format}: {}", team.name);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RglClient {
    transport: Transport,
}

impl RglClient {
    /// Create a new client limited to 2 requests per second.
    pub fn new() -> Self {
        Self::with_limiter(RateLimiter::default())
    }

    /// Create a client that never waits before sending a request.
    ///
    /// The caller is responsible for staying under the API's rate limit.
    pub fn unthrottled() -> Self {
        Self {
            transport: Transport::new(reqwest::Client::new(), None),
        }
    }

    /// Create a new client that draws from `limiter`, which may be shared
    /// with other clients.
    pub fn with_limiter(limiter: RateLimiter) -> Self {
        Self {
            transport: Transport::new(reqwest::Client::new(), Some(limiter)),
        }
    }

    /// Create a new client using the provided [`reqwest::Client`] and the
    /// default rate limit.
    ///
    /// Use this when you need to configure timeouts, proxies, headers, etc.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            transport: Transport::new(client, Some(RateLimiter::default())),
        }
    }

    /// Replace the rate limiter with a fresh one enforcing `limit`.
    pub fn with_rate_limit(mut self, limit: RateLimit) -> Result<Self> {
        self.transport.limiter = Some(RateLimiter::new(limit)?);
        Ok(self)
    }

    /// Send requests to `base_url` instead of `https://api.rgl.gg/v0`.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.transport.base_url = base_url.into();
        self
    }

    /// Give up on a call with [`RglError::LimiterCancelled`](crate::RglError::LimiterCancelled)
    /// if the rate limiter has not issued a token within `timeout`.
    pub fn with_acquire_timeout(mut self, timeout: Duration) -> Self {
        self.transport.acquire_timeout = Some(timeout);
        self
    }

    pub fn limiter(&self) -> Option<&RateLimiter> {
        self.transport.limiter.as_ref()
    }

    /// Fetch a player profile by steam64 id.
    ///
    /// Ids that do not start with the steam64 prefix are rejected without a
    /// request.
    #[instrument(skip(self))]
    pub async fn get_player(&self, steam_id: &str) -> Result<Player> {
        rgl::profile::get_player(&self.transport, steam_id).await
    }

    /// Fetch every team a player has been rostered on.
    #[instrument(skip(self))]
    pub async fn get_player_team_history(&self, steam_id: &str) -> Result<Vec<PlayerTeamHistory>> {
        rgl::profile::get_player_team_history(&self.transport, steam_id).await
    }

    /// Fetch several profiles in one request.
    ///
    /// Ids that are unknown or malformed are silently missing from the result.
    #[instrument(skip(self, steam_ids), fields(requested = steam_ids.len()))]
    pub async fn bulk_players<S>(&self, steam_ids: &[S]) -> Result<Vec<Player>>
    where
        S: AsRef<str>,
    {
        rgl::profile::bulk_players(&self.transport, steam_ids).await
    }

    /// Fetch a team by id.
    #[instrument(skip(self))]
    pub async fn get_team(&self, team_id: u32) -> Result<Team> {
        rgl::teams::get_team(&self.transport, team_id).await
    }

    /// Fetch a season by id.
    #[instrument(skip(self))]
    pub async fn get_season(&self, season_id: u32) -> Result<Season> {
        rgl::seasons::get_season(&self.transport, season_id).await
    }

    /// Fetch a match by id.
    #[instrument(skip(self))]
    pub async fn get_match(&self, match_id: u32) -> Result<Match> {
        rgl::matches::get_match(&self.transport, match_id).await
    }

    /// Search player aliases containing `query` (at least 2 characters).
    /// Results are steam ids.
    #[instrument(skip(self))]
    pub async fn search_players(&self, query: &str, take: u32, skip: u32) -> Result<SearchResults> {
        rgl::search::search(&self.transport, SearchTarget::Players, query, take, skip).await
    }

    /// Search team names containing `query` (at least 2 characters).
    /// Results are team ids.
    #[instrument(skip(self))]
    pub async fn search_teams(&self, query: &str, take: u32, skip: u32) -> Result<SearchResults> {
        rgl::search::search(&self.transport, SearchTarget::Teams, query, take, skip).await
    }

    /// Fetch a page of the ban list.
    #[instrument(skip(self))]
    pub async fn get_bans(&self, take: u32, skip: u32) -> Result<Vec<BulkBan>> {
        rgl::bans::get_bans(&self.transport, take, skip).await
    }
}

impl Default for RglClient {
    fn default() -> Self {
        Self::new()
    }
}
