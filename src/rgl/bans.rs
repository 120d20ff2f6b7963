use tracing::{debug, instrument};

use crate::error::{Result, RglError};
use crate::model::BulkBan;
use crate::rgl::{self, Outcome, Transport};

/// Fetch one page of the ban list, newest first. Pages past the end are empty.
#[instrument(skip(transport))]
pub(crate) async fn get_bans(transport: &Transport, take: u32, skip: u32) -> Result<Vec<BulkBan>> {
    let (url, outcome) = transport
        .get(&["bans", "paged"], &[("take", take), ("skip", skip)])
        .await?;
    let bans: Vec<BulkBan> = match outcome {
        Outcome::Success(response) => rgl::decode(&url, response).await?,
        Outcome::RateLimited => return Err(RglError::RateLimited { url }),
        Outcome::NotFound => {
            return Err(RglError::UnexpectedStatus {
                url,
                status: reqwest::StatusCode::NOT_FOUND,
            })
        }
        Outcome::Rejected(response) => {
            return Err(RglError::UnexpectedStatus {
                url,
                status: response.status(),
            })
        }
    };
    debug!(count = bans.len(), "parsed bans page");
    Ok(bans)
}
