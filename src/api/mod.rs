//! Typed client for the counselling API
//!
//! [`ApiClient`] owns the one generic request function; each endpoint group
//! is a thin borrowed wrapper that fixes the path, method and response type
//! for one resource. None of the wrappers contain business logic.
//!
//! - [`auth`]          -- signup, login, identity check
//! - [`profile`]       -- onboarding profile
//! - [`dashboard`]     -- dashboard snapshot
//! - [`universities`]  -- search, shortlist, lock, recommendations
//! - [`todos`]         -- to-do list
//! - [`counsellor`]    -- AI counsellor chat
//! - [`applications`]  -- application guidance
//! - [`types`]         -- wire types

pub mod applications;
pub mod auth;
pub mod client;
pub mod counsellor;
pub mod dashboard;
pub mod profile;
pub mod todos;
pub mod types;
pub mod universities;

pub use client::ApiClient;
