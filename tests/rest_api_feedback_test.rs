// ============================================================================
// REST API Feedback Tests
// ============================================================================
//
// Coverage of POST /api/feedback:
// - Valid submissions return a generated id and echo every field
// - Missing required fields return 400 and reach no sink
//
// ============================================================================

use serde_json::{Value, json};

use test_utils::spawn_app;

#[tokio::test]
async fn feedback_with_required_fields_returns_id_and_echoes_everything() {
    let app = spawn_app().await;

    let response = app
        .client
        .post(app.url("/api/feedback"))
        .json(&json!({
            "pitchId": "pit_1",
            "curatorId": "cur_1",
            "mainReason": "vocals clash with the brief",
            "comments": "tempo feels rushed in the second verse"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();

    assert!(body["id"].is_i64());
    assert_eq!(body["pitchId"], json!("pit_1"));
    assert_eq!(body["curatorId"], json!("cur_1"));
    assert_eq!(body["mainReason"], json!("vocals clash with the brief"));
    assert_eq!(
        body["comments"],
        json!("tempo feels rushed in the second verse")
    );

    assert_eq!(app.sink.stored().await, 1);
}

#[tokio::test]
async fn feedback_missing_main_reason_returns_400_and_stores_nothing() {
    let app = spawn_app().await;

    let response = app
        .client
        .post(app.url("/api/feedback"))
        .json(&json!({
            "pitchId": "pit_1",
            "curatorId": "cur_1"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], json!("Missing required fields"));

    assert_eq!(app.sink.stored().await, 0);
}

#[tokio::test]
async fn feedback_missing_curator_id_returns_400() {
    let app = spawn_app().await;

    let response = app
        .client
        .post(app.url("/api/feedback"))
        .json(&json!({
            "pitchId": "pit_1",
            "mainReason": "off-brief"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], json!("Missing required fields"));
}
