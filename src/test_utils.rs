//! Test utilities for Gradpath
//!
//! Fixture builders for wire types and an offline client, shared by the
//! unit tests.

use std::sync::Arc;

use crate::api::types::{ShortlistItem, Todo, University, User};
use crate::api::ApiClient;
use crate::auth::token_store::MemoryTokenStore;

/// Client pointed at the discard port; tests using it must not reach the
/// network
pub fn offline_client() -> ApiClient {
    ApiClient::new("http://127.0.0.1:9", Arc::new(MemoryTokenStore::default()))
        .expect("Failed to build offline client")
}

pub fn user() -> User {
    User {
        id: "u1".into(),
        email: "ada@example.com".into(),
        full_name: "Ada Lovelace".into(),
        is_active: true,
    }
}

pub fn university(name: &str, country: &str) -> University {
    University {
        name: name.into(),
        country: country.into(),
        domain: None,
        web_page: None,
        cost_level: None,
        acceptance_chance: None,
        fit_reason: None,
        risks: None,
        category: None,
    }
}

pub fn shortlist_item(id: &str, name: &str, locked: bool) -> ShortlistItem {
    ShortlistItem {
        id: id.into(),
        user_id: "u1".into(),
        name: name.into(),
        country: "Canada".into(),
        domain: None,
        web_page: None,
        category: None,
        cost_level: None,
        acceptance_chance: None,
        fit_reason: None,
        risks: None,
        locked,
    }
}

pub fn todo(id: &str, shortlist_id: Option<&str>, completed: bool) -> Todo {
    Todo {
        id: id.into(),
        user_id: Some("u1".into()),
        title: format!("task {}", id),
        description: None,
        completed,
        category: None,
        shortlist_id: shortlist_id.map(str::to_string),
    }
}

/// Assert that an error contains the expected message
///
/// # Panics
///
/// Panics if the result is Ok or if the error doesn't contain the expected message
pub fn assert_error_contains<T>(result: crate::error::Result<T>, expected: &str) {
    match result {
        Ok(_) => panic!("Expected error containing '{}' but got Ok", expected),
        Err(e) => {
            let error_msg = e.to_string();
            assert!(
                error_msg.contains(expected),
                "Error message '{}' does not contain '{}'",
                error_msg,
                expected
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GradpathError;

    #[test]
    fn test_assert_error_contains_success() {
        let result: crate::error::Result<()> =
            Err(GradpathError::Config("test error message".to_string()).into());
        assert_error_contains(result, "test error");
    }

    #[test]
    #[should_panic(expected = "Expected error containing")]
    fn test_assert_error_contains_ok() {
        assert_error_contains(Ok(()), "error");
    }

    #[test]
    fn test_fixtures_are_consistent() {
        assert!(shortlist_item("s1", "UBC", true).locked);
        assert_eq!(todo("t1", Some("s1"), false).shortlist_id.as_deref(), Some("s1"));
        assert_eq!(offline_client().base_url(), "http://127.0.0.1:9");
    }
}
