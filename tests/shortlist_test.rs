//! Shortlist view: refetch after mutation and the unlock confirmation guard

mod common;

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{client_for, shortlist_json};
use gradpath::api::types::ShortlistCreate;
use gradpath::views::{LockOutcome, ShortlistView};

async fn mount_shortlist(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/universities/shortlist"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_unlocking_locked_item_needs_confirmation_and_sends_nothing() {
    let server = MockServer::start().await;
    mount_shortlist(&server, json!([shortlist_json("s1", "TU Munich", true)])).await;

    Mock::given(method("POST"))
        .and(path("/universities/shortlist/s1/lock"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"locked": false})))
        .expect(0)
        .mount(&server)
        .await;

    let (client, _) = client_for(&server, Some("tok"));
    let mut view = ShortlistView::load(&client).await.unwrap();

    match view.set_lock(&client, "s1", false).await.unwrap() {
        LockOutcome::NeedsConfirmation(pending) => {
            assert_eq!(pending.id, "s1");
            assert_eq!(pending.name, "TU Munich");
        }
        other => panic!("expected confirmation, got {:?}", other),
    }
    assert!(view.pending_unlock().is_some());

    let cancelled = view.cancel_unlock().expect("pending unlock");
    assert_eq!(cancelled.id, "s1");
    assert!(view.pending_unlock().is_none());
    assert!(view.get("s1").unwrap().locked);
}

#[tokio::test]
async fn test_confirmed_unlock_sends_one_call_and_refetches() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/universities/shortlist"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([shortlist_json("s1", "TU Munich", true)])),
        )
        .up_to_n_times(1)
        .mount(&server)
        .await;
    mount_shortlist(&server, json!([shortlist_json("s1", "TU Munich", false)])).await;

    Mock::given(method("POST"))
        .and(path("/universities/shortlist/s1/lock"))
        .and(body_json(json!({"lock": false})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"locked": false})))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _) = client_for(&server, Some("tok"));
    let mut view = ShortlistView::load(&client).await.unwrap();

    view.set_lock(&client, "s1", false).await.unwrap();
    let status = view
        .confirm_unlock(&client)
        .await
        .unwrap()
        .expect("an unlock was pending");

    assert!(!status.locked);
    assert!(view.pending_unlock().is_none());
    assert!(!view.get("s1").unwrap().locked);
}

#[tokio::test]
async fn test_confirm_without_pending_is_noop() {
    let server = MockServer::start().await;
    mount_shortlist(&server, json!([])).await;

    let (client, _) = client_for(&server, Some("tok"));
    let mut view = ShortlistView::load(&client).await.unwrap();
    assert!(view.confirm_unlock(&client).await.unwrap().is_none());
}

#[tokio::test]
async fn test_lock_goes_straight_through() {
    let server = MockServer::start().await;
    mount_shortlist(&server, json!([shortlist_json("s2", "ETH Zurich", false)])).await;

    Mock::given(method("POST"))
        .and(path("/universities/shortlist/s2/lock"))
        .and(body_json(json!({"lock": true})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"locked": true})))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _) = client_for(&server, Some("tok"));
    let mut view = ShortlistView::load(&client).await.unwrap();

    let outcome = view.set_lock(&client, "s2", true).await.unwrap();
    assert!(matches!(outcome, LockOutcome::Applied(status) if status.locked));
}

#[tokio::test]
async fn test_add_refetches_list() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/universities/shortlist"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    mount_shortlist(&server, json!([shortlist_json("s3", "RWTH Aachen", false)])).await;

    Mock::given(method("POST"))
        .and(path("/universities/shortlist"))
        .respond_with(ResponseTemplate::new(200).set_body_json(shortlist_json("s3", "RWTH Aachen", false)))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _) = client_for(&server, Some("tok"));
    let mut view = ShortlistView::load(&client).await.unwrap();
    assert!(view.items().is_empty());

    view.add(
        &client,
        &ShortlistCreate {
            name: "RWTH Aachen".into(),
            country: "Germany".into(),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert!(view.contains("RWTH Aachen", "Germany"));
}

#[tokio::test]
async fn test_failed_remove_keeps_items() {
    let server = MockServer::start().await;
    mount_shortlist(&server, json!([shortlist_json("s4", "KTH", false)])).await;

    Mock::given(method("DELETE"))
        .and(path("/universities/shortlist/s4"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "Not found"})))
        .mount(&server)
        .await;

    let (client, _) = client_for(&server, Some("tok"));
    let mut view = ShortlistView::load(&client).await.unwrap();

    let err = view.remove(&client, "s4").await.unwrap_err();
    assert_eq!(err.to_string(), "Not found");
    assert_eq!(view.items().len(), 1);
}
