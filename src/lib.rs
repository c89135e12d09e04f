//! Gradpath - client library for the study-abroad counselling API
//!
//! This library provides the typed API client, the session manager, and the
//! per-screen view state used by the `gradpath` terminal client.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//!
//! - `api`: Generic JSON request function and one wrapper per endpoint group
//! - `auth`: Session manager and durable token storage
//! - `views`: Local state and client-side policy for each screen
//! - `commands`: Terminal rendering of the views
//! - `config`: Configuration management and validation
//! - `error`: Error types and result aliases
//! - `logging`: Tracing subscriber setup
//! - `cli`: Command-line interface definition
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use gradpath::{ApiClient, Config, SessionManager};
//! use gradpath::auth::session::NoopNavigator;
//! use gradpath::auth::token_store;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load("config.yaml", &Default::default())?;
//!     config.validate()?;
//!
//!     let tokens = token_store::from_config(&config.session)?;
//!     let api = ApiClient::from_config(&config, tokens)?;
//!     let session = SessionManager::new(api, Arc::new(NoopNavigator));
//!     session.resolve().await;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod auth;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod views;

// Re-export commonly used types
pub use api::ApiClient;
pub use auth::session::{Gate, Navigator, Route, SessionManager, SessionState};
pub use auth::token_store::TokenStore;
pub use config::Config;
pub use error::{ApiError, GradpathError, Result};

#[cfg(test)]
pub mod test_utils;
