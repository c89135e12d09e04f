//! `/dashboard` endpoint

use super::client::ApiClient;
use super::types::Dashboard;
use crate::error::Result;

pub struct DashboardApi<'a> {
    client: &'a ApiClient,
}

impl<'a> DashboardApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `GET /dashboard`
    pub async fn get(&self) -> Result<Dashboard> {
        self.client.get("/dashboard").await
    }
}
