// ============================================================================
// REST API Gateway Tests
// ============================================================================
//
// End-to-end coverage of the proxy routes:
// - Increment resolution on campaign and curator updates
// - Passthrough semantics for reads and pitch writes
// - Session-scoped curator updates
// - Upstream failure behavior (no write after a failed read)
//
// ============================================================================

use serde_json::{Value, json};

use test_utils::spawn_app;

#[tokio::test]
async fn update_campaign_resolves_accepted_count_increment() {
    let app = spawn_app().await;
    app.seed_entity("campaigns", "cmp_1", json!({"accepted_count": 7, "title": "Synthwave Summer"}))
        .await;

    let response = app
        .client
        .patch(app.url("/api/campaigns/cmp_1"))
        .json(&json!({"accepted_count_increment": 3}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["accepted_count"], json!(10));

    let stored = app.stored_entity("campaigns", "cmp_1").await.unwrap();
    assert_eq!(stored["accepted_count"], json!(10));
    assert!(stored.get("accepted_count_increment").is_none());
}

#[tokio::test]
async fn update_campaign_without_increment_forwards_payload_unchanged() {
    let app = spawn_app().await;
    app.seed_entity("campaigns", "cmp_1", json!({"accepted_count": 7}))
        .await;

    let response = app
        .client
        .patch(app.url("/api/campaigns/cmp_1"))
        .json(&json!({"status": "approved"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);

    let stored = app.stored_entity("campaigns", "cmp_1").await.unwrap();
    assert_eq!(stored["status"], json!("approved"));
    // The untouched base field survives the write
    assert_eq!(stored["accepted_count"], json!(7));
    assert_eq!(app.upstream_writes(), 1);
}

#[tokio::test]
async fn update_campaign_with_missing_base_field_counts_from_zero() {
    let app = spawn_app().await;
    app.seed_entity("campaigns", "cmp_2", json!({"title": "Lo-fi Nights"}))
        .await;

    let response = app
        .client
        .patch(app.url("/api/campaigns/cmp_2"))
        .json(&json!({"accepted_count_increment": 5}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["accepted_count"], json!(5));
}

#[tokio::test]
async fn increment_wins_over_raw_override_for_same_field() {
    let app = spawn_app().await;
    app.seed_entity("campaigns", "cmp_3", json!({"accepted_count": 7}))
        .await;

    let response = app
        .client
        .patch(app.url("/api/campaigns/cmp_3"))
        .json(&json!({"accepted_count": 100, "accepted_count_increment": 1}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    let stored = app.stored_entity("campaigns", "cmp_3").await.unwrap();
    assert_eq!(stored["accepted_count"], json!(8));
}

#[tokio::test]
async fn failed_upstream_read_returns_500_and_issues_no_write() {
    let app = spawn_app().await;
    app.seed_entity("campaigns", "cmp_1", json!({"accepted_count": 7}))
        .await;
    app.fail_upstream_reads();

    let response = app
        .client
        .patch(app.url("/api/campaigns/cmp_1"))
        .json(&json!({"accepted_count_increment": 3}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 500);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], json!("Failed to update campaign"));

    assert_eq!(app.upstream_writes(), 0);
    let stored = app.stored_entity("campaigns", "cmp_1").await.unwrap();
    assert_eq!(stored["accepted_count"], json!(7));
}

#[tokio::test]
async fn update_current_curator_resolves_credit_and_accepted_increments() {
    let app = spawn_app().await;
    app.seed_entity("curators", "cur_1", json!({"credits": 100, "accepted": 2}))
        .await;
    app.seed_session("tok-123", "cur_1").await;

    let response = app
        .client
        .patch(app.url("/api/curators/me"))
        .bearer_auth("tok-123")
        .json(&json!({"credits_increment": 50, "accepted_increment": 1}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["credits"], json!(150));
    assert_eq!(body["accepted"], json!(3));
}

#[tokio::test]
async fn update_current_curator_without_token_returns_401() {
    let app = spawn_app().await;

    let response = app
        .client
        .patch(app.url("/api/curators/me"))
        .json(&json!({"credits_increment": 50}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 401);
    assert_eq!(app.upstream_writes(), 0);
}

#[tokio::test]
async fn update_current_curator_with_unknown_token_returns_401() {
    let app = spawn_app().await;

    let response = app
        .client
        .patch(app.url("/api/curators/me"))
        .bearer_auth("tok-unknown")
        .json(&json!({"credits_increment": 50}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn fetch_curator_relays_the_stored_entity() {
    let app = spawn_app().await;
    app.seed_entity(
        "curators",
        "cur_7",
        json!({"name": "Nova", "credits": 40, "genres": ["house", "techno"]}),
    )
    .await;

    let response = app
        .client
        .get(app.url("/api/curators/cur_7"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["name"], json!("Nova"));
    assert_eq!(body["genres"], json!(["house", "techno"]));
}

#[tokio::test]
async fn update_pitch_is_a_passthrough_with_no_increment_resolution() {
    let app = spawn_app().await;
    app.seed_entity("pitches", "pit_1", json!({"plays": 1})).await;

    let response = app
        .client
        .patch(app.url("/api/pitches/pit_1"))
        .json(&json!({"plays_increment": 5, "status": "reviewed"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);

    // The sentinel forwards literally: pitch updates never merge.
    let stored = app.stored_entity("pitches", "pit_1").await.unwrap();
    assert_eq!(stored["plays_increment"], json!(5));
    assert_eq!(stored["status"], json!("reviewed"));
    assert_eq!(stored["plays"], json!(1));
}

#[tokio::test]
async fn create_pitch_returns_the_stored_entity_with_an_id() {
    let app = spawn_app().await;

    let response = app
        .client
        .post(app.url("/api/pitches"))
        .json(&json!({"campaignId": "cmp_1", "trackUrl": "https://cdn.example/track.mp3"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["campaignId"], json!("cmp_1"));
    assert!(body["id"].is_string());
}

#[tokio::test]
async fn health_reports_ok_while_the_store_is_reachable() {
    let app = spawn_app().await;

    let response = app.client.get(app.url("/health")).send().await.unwrap();
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(response.text().await.unwrap(), "OK");
}

#[tokio::test]
async fn failed_requests_land_on_the_audit_trail() {
    let app = spawn_app().await;
    app.fail_upstream_reads();

    let response = app
        .client
        .get(app.url("/api/curators/cur_1"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 500);

    let audit: Value = app
        .client
        .get(app.url("/admin/audit"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let events = audit.as_array().unwrap();
    assert!(!events.is_empty());
    assert_eq!(events[0]["kind"], json!("UPSTREAM_READ_FAILED"));
    assert_eq!(events[0]["entity"], json!("curator:cur_1"));
}
