use tracing::{debug, instrument};

use crate::error::Result;
use crate::model::Team;
use crate::rgl::{self, Transport};

#[instrument(skip(transport))]
pub(crate) async fn get_team(transport: &Transport, team_id: u32) -> Result<Team> {
    let team: Team =
        rgl::get_or_default(transport, &["teams", team_id.to_string().as_str()]).await?;
    debug!(roster = team.players.len(), "parsed team");
    Ok(team)
}
