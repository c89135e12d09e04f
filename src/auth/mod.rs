//! Authentication: token persistence and the session lifecycle
//!
//! - [`token_store`] -- durable storage for the bearer token
//! - [`session`]     -- the session manager state machine

pub mod session;
pub mod token_store;
