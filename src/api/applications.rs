//! `/applications` endpoint

use super::client::ApiClient;
use super::types::ApplicationGuidance;
use crate::error::Result;

pub struct ApplicationsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ApplicationsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `GET /applications`
    ///
    /// The backend answers 403 until at least one university is locked.
    pub async fn get(&self) -> Result<ApplicationGuidance> {
        self.client.get("/applications").await
    }
}
