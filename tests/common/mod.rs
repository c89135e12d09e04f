use std::sync::Arc;

use serde_json::{json, Value};
use wiremock::MockServer;

use gradpath::auth::token_store::{MemoryTokenStore, TokenStore};
use gradpath::ApiClient;

/// Client for `server` with an in-memory token store
#[allow(dead_code)]
pub fn client_for(server: &MockServer, token: Option<&str>) -> (ApiClient, Arc<MemoryTokenStore>) {
    let store = Arc::new(match token {
        Some(t) => MemoryTokenStore::with_token(t),
        None => MemoryTokenStore::default(),
    });
    let tokens: Arc<dyn TokenStore> = store.clone();
    let client = ApiClient::new(server.uri(), tokens).expect("failed to build client");
    (client, store)
}

#[allow(dead_code)]
pub fn user_json() -> Value {
    json!({
        "id": "u1",
        "email": "ada@example.com",
        "full_name": "Ada Lovelace",
        "is_active": true
    })
}

#[allow(dead_code)]
pub fn shortlist_json(id: &str, name: &str, locked: bool) -> Value {
    json!({
        "id": id,
        "user_id": "u1",
        "name": name,
        "country": "Germany",
        "domain": null,
        "web_page": null,
        "category": "target",
        "cost_level": null,
        "acceptance_chance": null,
        "fit_reason": null,
        "risks": null,
        "locked": locked
    })
}

#[allow(dead_code)]
pub fn todo_json(id: &str, completed: bool, shortlist_id: Option<&str>) -> Value {
    json!({
        "id": id,
        "user_id": "u1",
        "title": format!("task {}", id),
        "description": null,
        "completed": completed,
        "category": "application",
        "shortlist_id": shortlist_id
    })
}

#[allow(dead_code)]
pub fn dashboard_json(stage: u32) -> Value {
    json!({
        "profile_summary": {
            "education": "Bachelor's in Computer Science",
            "target_intake": 2026,
            "countries": ["Germany", "Canada"],
            "budget": "₹10,00,000 - ₹25,00,000"
        },
        "profile_strength": {"academics": "Strong", "exams": "Average", "sop": "Weak"},
        "stage": stage,
        "stage_label": "Finalizing Universities",
        "onboarding_complete": true,
        "todos": [],
        "shortlisted_count": 1,
        "locked_count": 0
    })
}

/// Writes `contents` to a config file in a fresh temp dir
#[allow(dead_code)]
pub fn temp_config_file(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, contents).expect("failed to write config");
    (dir, path)
}
