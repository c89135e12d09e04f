//! `/profile` endpoints

use super::client::ApiClient;
use super::types::{OnboardingStatus, Profile, ProfileUpdate};
use crate::error::Result;

/// Onboarding profile
pub struct ProfileApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ProfileApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `GET /profile`
    pub async fn get(&self) -> Result<Profile> {
        self.client.get("/profile").await
    }

    /// `PUT /profile` with only the fields set in `update`
    pub async fn update(&self, update: &ProfileUpdate) -> Result<Profile> {
        self.client.put("/profile", update).await
    }

    /// `POST /profile/complete`
    pub async fn complete(&self) -> Result<OnboardingStatus> {
        self.client.post_empty("/profile/complete").await
    }
}
