use tracing::instrument;

use crate::error::Result;
use crate::model::Match;
use crate::rgl::{self, Transport};

#[instrument(skip(transport))]
pub(crate) async fn get_match(transport: &Transport, match_id: u32) -> Result<Match> {
    rgl::get_or_default(transport, &["matches", match_id.to_string().as_str()]).await
}
