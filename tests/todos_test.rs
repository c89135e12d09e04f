//! To-do board updates against a mock backend

mod common;

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{client_for, todo_json};
use gradpath::api::types::TodoCreate;
use gradpath::views::TodoBoard;

async fn board(server: &MockServer, todos: serde_json::Value) -> TodoBoard {
    Mock::given(method("GET"))
        .and(path("/todos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(todos))
        .mount(server)
        .await;
    let (client, _) = client_for(server, Some("tok"));
    TodoBoard::load(&client).await.expect("load should succeed")
}

#[tokio::test]
async fn test_set_completed_sends_patch_and_updates_locally() {
    let server = MockServer::start().await;
    let mut todos = board(&server, json!([todo_json("t1", false, None)])).await;

    Mock::given(method("PATCH"))
        .and(path("/todos/t1"))
        .and(body_json(json!({"completed": true})))
        .respond_with(ResponseTemplate::new(200).set_body_json(todo_json("t1", true, None)))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _) = client_for(&server, Some("tok"));
    todos.set_completed(&client, "t1", true).await.unwrap();

    assert!(todos.get("t1").unwrap().completed);
    assert_eq!(todos.completed_count(), 1);
}

#[tokio::test]
async fn test_failed_update_leaves_board_untouched() {
    let server = MockServer::start().await;
    let mut todos = board(&server, json!([todo_json("t1", false, None)])).await;

    Mock::given(method("PATCH"))
        .and(path("/todos/t1"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"detail": "boom"})))
        .mount(&server)
        .await;

    let (client, _) = client_for(&server, Some("tok"));
    let err = todos.set_completed(&client, "t1", true).await.unwrap_err();

    assert_eq!(err.to_string(), "boom");
    assert!(!todos.get("t1").unwrap().completed);
}

#[tokio::test]
async fn test_toggle_flips_current_value() {
    let server = MockServer::start().await;
    let mut todos = board(&server, json!([todo_json("t2", true, Some("s1"))])).await;

    Mock::given(method("PATCH"))
        .and(path("/todos/t2"))
        .and(body_json(json!({"completed": false})))
        .respond_with(ResponseTemplate::new(200).set_body_json(todo_json("t2", false, Some("s1"))))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _) = client_for(&server, Some("tok"));
    assert!(!todos.toggle(&client, "t2").await.unwrap());
    assert_eq!(todos.for_shortlist("s1").len(), 1);
}

#[tokio::test]
async fn test_toggle_unknown_id_sends_nothing() {
    let server = MockServer::start().await;
    let mut todos = board(&server, json!([])).await;

    Mock::given(method("PATCH"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let (client, _) = client_for(&server, Some("tok"));
    assert!(todos.toggle(&client, "missing").await.is_err());
}

#[tokio::test]
async fn test_create_and_delete() {
    let server = MockServer::start().await;
    let mut todos = board(&server, json!([todo_json("t1", false, None)])).await;

    Mock::given(method("POST"))
        .and(path("/todos"))
        .and(body_json(json!({"title": "Book IELTS"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "t9",
            "user_id": "u1",
            "title": "Book IELTS",
            "completed": false
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/todos/t1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _) = client_for(&server, Some("tok"));
    let created = todos
        .create(
            &client,
            &TodoCreate {
                title: "Book IELTS".into(),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(created.id, "t9");
    assert_eq!(todos.todos().len(), 2);

    todos.delete(&client, "t1").await.unwrap();
    assert!(todos.get("t1").is_none());
    assert!(todos.get("t9").is_some());
}
