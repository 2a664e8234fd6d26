//! Query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for `GET /shows` (`?minEpisodes=`).
///
/// The raw string is kept so a non-integer value can be reported back in a
/// 422 rather than failing inside the extractor.
#[derive(Debug, Default, Deserialize)]
pub struct ShowListParams {
    #[serde(rename = "minEpisodes")]
    pub min_episodes: Option<String>,
}
