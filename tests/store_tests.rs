//! Store behavior against a mocked backend: list bookkeeping, optimistic
//! chat appends, per-beach detection replacement, and the control-then-
//! refresh sequence of the AI-model store.

mod common;

use common::test_app;
use serde_json::json;
use shorewatch::{BeachRequest, BeachStatus, MessageKind, ModelAction};
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

fn beach_request(name: &str) -> BeachRequest {
    BeachRequest {
        name: name.to_string(),
        region: None,
        latitude: None,
        longitude: None,
        description: None,
        status: None,
    }
}

#[tokio::test]
async fn test_create_beach_appends_to_primary_list() {
    let (app, server) = test_app().await;

    Mock::given(method("GET"))
        .and(path("/api/beaches"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "name": "Hamdeok", "status": "ACTIVE"},
            {"id": 2, "name": "Jungmun", "status": "ACTIVE"}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/beaches"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(
            {"id": 5, "name": "Woljeong", "status": "ACTIVE"}
        )))
        .mount(&server)
        .await;

    app.beaches.fetch_all_beaches().await.unwrap();
    app.beaches.create_beach(beach_request("Woljeong")).await.unwrap();

    let beaches = app.beaches.beaches();
    assert_eq!(beaches.len(), 3);
    assert_eq!(beaches.last().unwrap().id, 5);
    // Created beach is not pushed into the managed list.
    assert!(app.beaches.my_beaches().is_empty());
}

#[tokio::test]
async fn test_delete_beach_removes_everywhere_and_clears_current() {
    let (app, server) = test_app().await;

    Mock::given(method("GET"))
        .and(path("/api/beaches"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 5, "name": "Woljeong", "status": "ACTIVE"},
            {"id": 6, "name": "Gwakji", "status": "ACTIVE"}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/beaches/my-beaches"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 5, "name": "Woljeong", "status": "ACTIVE"}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/beaches/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(
            {"id": 5, "name": "Woljeong", "status": "ACTIVE"}
        )))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/beaches/5"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    app.beaches.fetch_all_beaches().await.unwrap();
    app.beaches.fetch_my_beaches().await.unwrap();
    app.beaches.fetch_beach_by_id(5).await.unwrap();
    assert_eq!(app.beaches.current_beach().unwrap().id, 5);

    app.beaches.delete_beach(5).await.unwrap();

    assert!(app.beaches.beaches().iter().all(|b| b.id != 5));
    assert!(app.beaches.my_beaches().iter().all(|b| b.id != 5));
    assert!(app.beaches.current_beach().is_none());
}

#[tokio::test]
async fn test_toggle_status_alternates_with_backend() {
    let (app, server) = test_app().await;

    Mock::given(method("GET"))
        .and(path("/api/beaches"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "name": "Hamdeok", "status": "ACTIVE"}
        ])))
        .mount(&server)
        .await;
    // First toggle deactivates, second reactivates.
    Mock::given(method("PATCH"))
        .and(path("/api/beaches/1/toggle-status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(
            {"id": 1, "name": "Hamdeok", "status": "INACTIVE"}
        )))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/api/beaches/1/toggle-status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(
            {"id": 1, "name": "Hamdeok", "status": "ACTIVE"}
        )))
        .mount(&server)
        .await;

    app.beaches.fetch_all_beaches().await.unwrap();

    app.beaches.toggle_beach_status(1).await.unwrap();
    assert_eq!(app.beaches.beaches()[0].status, BeachStatus::Inactive);

    app.beaches.toggle_beach_status(1).await.unwrap();
    assert_eq!(app.beaches.beaches()[0].status, BeachStatus::Active);
}

#[tokio::test]
async fn test_update_beach_propagates_to_all_lists() {
    let (app, server) = test_app().await;

    Mock::given(method("GET"))
        .and(path("/api/beaches"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 7, "name": "Iho", "status": "ACTIVE"}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/beaches/my-beaches"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 7, "name": "Iho", "status": "ACTIVE"}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/beaches/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(
            {"id": 7, "name": "Iho Tewoo", "status": "ACTIVE"}
        )))
        .mount(&server)
        .await;

    app.beaches.fetch_all_beaches().await.unwrap();
    app.beaches.fetch_my_beaches().await.unwrap();

    app.beaches
        .update_beach(7, beach_request("Iho Tewoo"))
        .await
        .unwrap();

    assert_eq!(app.beaches.beaches()[0].name, "Iho Tewoo");
    assert_eq!(app.beaches.my_beaches()[0].name, "Iho Tewoo");
}

#[tokio::test]
async fn test_send_message_appends_user_then_ai() {
    let (app, server) = test_app().await;

    Mock::given(method("POST"))
        .and(path("/api/chatbot/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(
            {"response": "Hamdeok is quiet right now."}
        )))
        .mount(&server)
        .await;

    app.chatbot.send_message("How crowded is Hamdeok?").await.unwrap();

    let messages = app.chatbot.messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].kind, MessageKind::User);
    assert_eq!(messages[0].content, "How crowded is Hamdeok?");
    assert_eq!(messages[1].kind, MessageKind::Ai);
    assert_eq!(messages[1].content, "Hamdeok is quiet right now.");
}

#[tokio::test]
async fn test_send_message_falls_back_to_message_field() {
    let (app, server) = test_app().await;

    Mock::given(method("POST"))
        .and(path("/api/chatbot/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(
            {"message": "legacy reply"}
        )))
        .mount(&server)
        .await;

    app.chatbot.send_message("hi").await.unwrap();
    assert_eq!(app.chatbot.messages()[1].content, "legacy reply");
}

#[tokio::test]
async fn test_send_message_keeps_user_message_on_failure() {
    let (app, server) = test_app().await;

    Mock::given(method("POST"))
        .and(path("/api/chatbot/chat"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let result = app.chatbot.send_message("hi").await;
    assert!(result.is_err());

    // Optimistic append survives; no AI reply; error recorded.
    let messages = app.chatbot.messages();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].kind, MessageKind::User);
    assert_eq!(
        app.chatbot.error().as_deref(),
        Some("No response received from the chatbot.")
    );
    assert!(!app.chatbot.loading());
}

#[tokio::test]
async fn test_beach_detections_replaced_per_fetch() {
    let (app, server) = test_app().await;

    Mock::given(method("GET"))
        .and(path("/api/detections/beach/Hamdeok/latest"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "personCount": 14, "fallenCount": 0},
            {"id": 2, "personCount": 17, "fallenCount": 1}
        ])))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/detections/beach/Hamdeok/latest"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 3, "personCount": 21, "fallenCount": 0}
        ])))
        .mount(&server)
        .await;

    app.detections.fetch_beach_detections("Hamdeok").await.unwrap();
    assert_eq!(app.detections.beach_detections("Hamdeok").len(), 2);

    // Second fetch fully replaces the entry, no merge.
    app.detections.fetch_beach_detections("Hamdeok").await.unwrap();
    let detections = app.detections.beach_detections("Hamdeok");
    assert_eq!(detections.len(), 1);
    assert_eq!(detections[0].person_count, 21);

    assert!(app.detections.beach_detections("Jungmun").is_empty());
}

#[tokio::test]
async fn test_control_model_refreshes_status() {
    let (app, server) = test_app().await;

    Mock::given(method("POST"))
        .and(path("/api/ai-model/start"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/ai-model/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "RUNNING"})))
        .expect(1)
        .mount(&server)
        .await;

    app.ai_model.control_model(ModelAction::Start).await.unwrap();
    assert!(app.ai_model.is_running());
    assert!(!app.ai_model.is_stopped());
}

#[tokio::test]
async fn test_control_model_success_survives_failed_refresh() {
    let (app, server) = test_app().await;

    Mock::given(method("POST"))
        .and(path("/api/ai-model/stop"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/ai-model/status"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let result = app.ai_model.control_model(ModelAction::Stop).await;
    assert!(result.is_ok());
    assert!(app.ai_model.status().is_none());
}

#[tokio::test]
async fn test_failed_fetch_sets_error_and_clear_error_is_idempotent() {
    let (app, server) = test_app().await;

    Mock::given(method("GET"))
        .and(path("/api/beaches"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    assert!(app.beaches.fetch_all_beaches().await.is_err());
    assert_eq!(
        app.beaches.error().as_deref(),
        Some("Failed to fetch beach information.")
    );
    assert!(!app.beaches.loading());

    app.beaches.clear_error();
    assert!(app.beaches.error().is_none());
    app.beaches.clear_error();
    assert!(app.beaches.error().is_none());
}

#[tokio::test]
async fn test_fetch_by_region_does_not_touch_primary_list() {
    let (app, server) = test_app().await;

    Mock::given(method("GET"))
        .and(path("/api/beaches/region/Seogwipo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 2, "name": "Jungmun", "region": "Seogwipo", "status": "ACTIVE"}
        ])))
        .mount(&server)
        .await;

    let regional = app.beaches.fetch_beaches_by_region("Seogwipo").await.unwrap();
    assert_eq!(regional.len(), 1);
    assert!(app.beaches.beaches().is_empty());
}
