//! `/universities` endpoints: search, shortlist, lock, recommendations

use super::client::ApiClient;
use super::types::{
    Ack, LockRequest, LockStatus, Recommendations, SearchResults, ShortlistCreate, ShortlistItem,
};
use crate::error::Result;

pub struct UniversitiesApi<'a> {
    client: &'a ApiClient,
}

impl<'a> UniversitiesApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `GET /universities/search?country=&name=`
    ///
    /// Blank filters are left out of the query string.
    pub async fn search(&self, country: Option<&str>, name: Option<&str>) -> Result<SearchResults> {
        self.client.get(&search_path(country, name)).await
    }

    /// `GET /universities/shortlist`, locked entries first
    pub async fn shortlist(&self) -> Result<Vec<ShortlistItem>> {
        self.client.get("/universities/shortlist").await
    }

    /// `POST /universities/shortlist`
    pub async fn add_shortlist(&self, entry: &ShortlistCreate) -> Result<ShortlistItem> {
        self.client.post("/universities/shortlist", entry).await
    }

    /// `DELETE /universities/shortlist/{id}`
    pub async fn remove_shortlist(&self, id: &str) -> Result<Ack> {
        self.client
            .delete(&format!("/universities/shortlist/{}", id))
            .await
    }

    /// `POST /universities/shortlist/{id}/lock`
    ///
    /// Setting the same value twice is harmless; the backend reports the
    /// resulting state either way.
    pub async fn set_lock(&self, id: &str, lock: bool) -> Result<LockStatus> {
        self.client
            .post(
                &format!("/universities/shortlist/{}/lock", id),
                &LockRequest { lock },
            )
            .await
    }

    /// `GET /universities/recommendations`
    pub async fn recommendations(&self) -> Result<Recommendations> {
        self.client.get("/universities/recommendations").await
    }
}

pub(crate) fn search_path(country: Option<&str>, name: Option<&str>) -> String {
    let mut query = url::form_urlencoded::Serializer::new(String::new());
    if let Some(country) = country.filter(|c| !c.is_empty()) {
        query.append_pair("country", country);
    }
    if let Some(name) = name.filter(|n| !n.is_empty()) {
        query.append_pair("name", name);
    }
    format!("/universities/search?{}", query.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_path_encodes_params() {
        assert_eq!(
            search_path(Some("United Kingdom"), None),
            "/universities/search?country=United+Kingdom"
        );
        assert_eq!(
            search_path(Some("Canada"), Some("Toronto")),
            "/universities/search?country=Canada&name=Toronto"
        );
    }

    #[test]
    fn test_search_path_skips_blank_filters() {
        assert_eq!(search_path(Some(""), None), "/universities/search?");
        assert_eq!(search_path(None, Some("MIT")), "/universities/search?name=MIT");
    }
}
