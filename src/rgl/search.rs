use serde::Serialize;
use tracing::{debug, instrument};

use crate::error::{Result, RglError};
use crate::model::SearchResults;
use crate::rgl::{self, Transport};

/// Shortest name fragment the search endpoints accept.
pub(crate) const MIN_QUERY_LEN: usize = 2;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchQuery<'a> {
    name_contains: &'a str,
}

#[derive(Debug, Clone, Copy, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub(crate) enum SearchTarget {
    Players,
    Teams,
}

fn validate_query(query: &str) -> Result<()> {
    if query.chars().count() < MIN_QUERY_LEN {
        return Err(RglError::QueryTooShort {
            query: query.to_owned(),
            min: MIN_QUERY_LEN,
        });
    }
    Ok(())
}

/// Search player aliases or team names containing `query`.
#[instrument(skip(transport))]
pub(crate) async fn search(
    transport: &Transport,
    target: SearchTarget,
    query: &str,
    take: u32,
    skip: u32,
) -> Result<SearchResults> {
    validate_query(query)?;
    let results: SearchResults = rgl::post_or_default(
        transport,
        &["search", target.to_string().as_str()],
        &[("take", take), ("skip", skip)],
        &SearchQuery {
            name_contains: query,
        },
    )
    .await?;
    debug!(
        count = results.count,
        total = results.total_hit_count,
        "parsed search results"
    );
    Ok(results)
}
