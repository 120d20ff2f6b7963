use tracing::{debug, instrument};

use crate::error::Result;
use crate::model::Season;
use crate::rgl::{self, Transport};

#[instrument(skip(transport))]
pub(crate) async fn get_season(transport: &Transport, season_id: u32) -> Result<Season> {
    let season: Season =
        rgl::get_or_default(transport, &["seasons", season_id.to_string().as_str()]).await?;
    debug!(
        teams = season.participating_teams.len(),
        matches = season.matches.len(),
        "parsed season"
    );
    Ok(season)
}
