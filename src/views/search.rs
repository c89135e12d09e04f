//! University search and recommendation listings

use crate::api::types::{Recommendations, University};
use crate::api::ApiClient;
use crate::error::Result;

use super::shortlist::ShortlistView;

/// Search results shown at once
pub const SEARCH_LIMIT: usize = 30;

/// Recommendations shown per category
pub const RECOMMENDATIONS_PER_CATEGORY: usize = 5;

/// A search hit and whether it is already shortlisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub university: University,
    pub shortlisted: bool,
}

/// Searches and marks each hit already on `shortlist`.
///
/// Blank filters are not sent. At most [`SEARCH_LIMIT`] hits are returned.
pub async fn search(
    api: &ApiClient,
    country: Option<&str>,
    name: Option<&str>,
    shortlist: &ShortlistView,
) -> Result<Vec<SearchHit>> {
    let results = api.universities().search(country, name).await?;
    Ok(mark_hits(results.universities, shortlist))
}

pub(crate) fn mark_hits(universities: Vec<University>, shortlist: &ShortlistView) -> Vec<SearchHit> {
    universities
        .into_iter()
        .take(SEARCH_LIMIT)
        .map(|university| SearchHit {
            shortlisted: shortlist.contains(&university.name, &university.country),
            university,
        })
        .collect()
}

/// Recommendations with each category capped at
/// [`RECOMMENDATIONS_PER_CATEGORY`]
pub async fn recommendations(api: &ApiClient) -> Result<Recommendations> {
    Ok(cap_recommendations(api.universities().recommendations().await?))
}

pub(crate) fn cap_recommendations(mut recs: Recommendations) -> Recommendations {
    recs.dream.truncate(RECOMMENDATIONS_PER_CATEGORY);
    recs.target.truncate(RECOMMENDATIONS_PER_CATEGORY);
    recs.safe.truncate(RECOMMENDATIONS_PER_CATEGORY);
    recs
}
