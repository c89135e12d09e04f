//! `/auth` endpoints

use super::client::ApiClient;
use super::types::{AuthResponse, LoginRequest, SignupRequest, User};
use crate::error::Result;

/// Signup, login and identity check
pub struct AuthApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AuthApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `POST /auth/signup`
    pub async fn signup(&self, full_name: &str, email: &str, password: &str) -> Result<AuthResponse> {
        let body = SignupRequest {
            full_name: full_name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        self.client.post("/auth/signup", &body).await
    }

    /// `POST /auth/login`
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.client.post("/auth/login", &body).await
    }

    /// `GET /auth/me`, the identity check used to rehydrate a stored session
    pub async fn me(&self) -> Result<User> {
        self.client.get("/auth/me").await
    }
}
