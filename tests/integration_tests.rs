// HTTP API tests for Housing Advisor

use actix_web::http::header::ContentType;
use actix_web::{http::StatusCode, test, web, App};
use housing_advisor::core::Advisor;
use housing_advisor::routes::{configure_routes, json_config, AppState};
use housing_advisor::services::SessionStore;
use serde_json::{json, Value};

fn app_state(max_sessions: u64) -> AppState {
    AppState {
        sessions: SessionStore::new(Advisor::default(), max_sessions, 60),
    }
}

macro_rules! init_app {
    () => {
        init_app!(100)
    };
    ($max_sessions:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(app_state($max_sessions)))
                .app_data(json_config())
                .configure(configure_routes),
        )
        .await
    };
}

const ANSWERS: [(&str, &str); 5] = [
    ("budget", "mid"),
    ("commute", "walk"),
    ("vibe", "lively"),
    ("amenities", "nightlife"),
    ("roommates", "roommates"),
];

#[actix_web::test]
async fn test_health() {
    let app = init_app!();
    let req = test::TestRequest::get().uri("/api/v1/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "healthy");
}

#[actix_web::test]
async fn test_lists_static_data() {
    let app = init_app!();

    let req = test::TestRequest::get().uri("/api/v1/questions").to_request();
    let questions: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(questions.as_array().map(Vec::len), Some(5));
    assert_eq!(questions[0]["id"], "budget");

    let req = test::TestRequest::get().uri("/api/v1/neighborhoods").to_request();
    let catalog: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(catalog[0]["id"], "sandy-hill");
    assert_eq!(catalog[0]["commuteMode"], "walk");
}

#[actix_web::test]
async fn test_full_session_flow() {
    let app = init_app!();

    let req = test::TestRequest::post().uri("/api/v1/sessions").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    let id = created["sessionId"].as_str().unwrap().to_string();
    assert_eq!(created["state"], json!({ "status": "asking", "questionIndex": 0 }));
    assert_eq!(created["currentQuestion"]["id"], "budget");

    // Recommendations are not available yet
    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/sessions/{}/recommendations", id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let mut last = Value::Null;
    for (question_id, value) in ANSWERS {
        let req = test::TestRequest::post()
            .uri(&format!("/api/v1/sessions/{}/answers", id))
            .set_json(json!({ "questionId": question_id, "value": value }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        last = test::read_body_json(resp).await;
    }

    assert_eq!(last["state"], json!({ "status": "complete" }));
    assert!(last.get("currentQuestion").is_none());
    assert_eq!(last["summary"][0], "Budget: $900–$1200");

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/sessions/{}/recommendations", id))
        .to_request();
    let recs: Value = test::call_and_read_body_json(&app, req).await;
    let picks = recs["recommendations"].as_array().unwrap();
    assert_eq!(picks.len(), 2);
    assert_eq!(picks[0]["id"], "sandy-hill");
    assert_eq!(picks[0]["score"], 12);

    // A completed session rejects further answers
    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/sessions/{}/answers", id))
        .set_json(json!({ "questionId": "budget", "value": "low" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let err: Value = test::read_body_json(resp).await;
    assert_eq!(err["error"], "session_already_complete");

    // Reset returns to the first question
    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/sessions/{}/reset", id))
        .to_request();
    let reset: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(reset["state"], json!({ "status": "asking", "questionIndex": 0 }));
    assert_eq!(reset["answers"], json!([]));
}

#[actix_web::test]
async fn test_invalid_answer_value() {
    let app = init_app!();

    let req = test::TestRequest::post().uri("/api/v1/sessions").to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let id = created["sessionId"].as_str().unwrap();

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/sessions/{}/answers", id))
        .set_json(json!({ "questionId": "budget", "value": "free" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let err: Value = test::read_body_json(resp).await;
    assert_eq!(err["error"], "invalid_answer_value");
    assert_eq!(err["status_code"], 400);
}

#[actix_web::test]
async fn test_empty_fields_fail_validation() {
    let app = init_app!();

    let req = test::TestRequest::post().uri("/api/v1/sessions").to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let id = created["sessionId"].as_str().unwrap();

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/sessions/{}/answers", id))
        .set_json(json!({ "questionId": "", "value": "low" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let err: Value = test::read_body_json(resp).await;
    assert_eq!(err["error"], "validation_failed");
}

#[actix_web::test]
async fn test_unknown_session() {
    let app = init_app!();

    let req = test::TestRequest::get().uri("/api/v1/sessions/nope").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_delete_session() {
    let app = init_app!();

    let req = test::TestRequest::post().uri("/api/v1/sessions").to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let id = created["sessionId"].as_str().unwrap();

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/sessions/{}", id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/sessions/{}", id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_malformed_json_body() {
    let app = init_app!();

    let req = test::TestRequest::post().uri("/api/v1/sessions").to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let id = created["sessionId"].as_str().unwrap();

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/sessions/{}/answers", id))
        .insert_header(ContentType::json())
        .set_payload(r#"{"questionId":"#)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let err: Value = test::read_body_json(resp).await;
    assert_eq!(err["error"], "invalid_json");
    assert_eq!(err["status_code"], 400);
}

#[actix_web::test]
async fn test_full_store_answers_service_unavailable() {
    let app = init_app!(2);

    let mut ids = Vec::new();
    for _ in 0..2 {
        let req = test::TestRequest::post().uri("/api/v1/sessions").to_request();
        let created: Value = test::call_and_read_body_json(&app, req).await;
        ids.push(created["sessionId"].as_str().unwrap().to_string());
    }
    for _ in 0..3 {
        for id in &ids {
            let req = test::TestRequest::get()
                .uri(&format!("/api/v1/sessions/{}", id))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK);
        }
    }

    let req = test::TestRequest::post().uri("/api/v1/sessions").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

    let err: Value = test::read_body_json(resp).await;
    assert_eq!(err["error"], "store_full");
}
