use axum::http::StatusCode;
use serde_json::{Value, json};
use uuid::Uuid;

use crate::common::{TestClient, TestStateBuilder, db, jwt, test_data};

async fn setup_with_user() -> (wk_api::ApiState, TestClient, Uuid, String) {
    let state = TestStateBuilder::new()
        .build()
        .await
        .expect("Failed to build test state");
    let router = wk_api::router::router().with_state(state.clone());
    let client = TestClient::new(router);

    let username = test_data::unique_username("quiz");
    let user_id = db::create_user_with_password(&state.pool, &username)
        .await
        .unwrap();
    let token = jwt::create_test_token(user_id, &username, &state.jwt_secret);

    (state, client, user_id, token)
}

async fn seed_words(state: &wk_api::ApiState, user_id: Uuid) -> Vec<Uuid> {
    let words = [
        ("gehen", "to walk", "হাঁটা"),
        ("essen", "to eat", "খাওয়া"),
        ("schlafen", "to sleep", "ঘুমানো"),
        ("lesen", "to read", "পড়া"),
        ("schreiben", "to write", "লেখা"),
    ];

    let mut ids = Vec::new();
    for (german, english, bengali) in words {
        let id = db::seed_vocab_entry(&state.pool, user_id, german, english, bengali, None)
            .await
            .unwrap();
        ids.push(id);
    }
    ids
}

#[tokio::test]
async fn test_next_question_shape() {
    let (state, client, user_id, token) = setup_with_user().await;
    let ids = seed_words(&state, user_id).await;

    let response = client
        .get_with_auth("/quiz/next", &token, &state.cookie_key)
        .await;

    response.assert_status(StatusCode::OK);
    let body: Value = response.json();

    let entry_id: Uuid = body["entry_id"].as_str().unwrap().parse().unwrap();
    assert!(ids.contains(&entry_id));
    assert!(!body["german"].as_str().unwrap().is_empty());

    let asked = body["asked_language"].as_str().unwrap();
    assert!(asked == "english" || asked == "bengali");

    let options = body["options"].as_array().unwrap();
    assert_eq!(options.len(), 4, "Always exactly four options");

    db::delete_user(&state.pool, user_id).await.unwrap();
}

#[tokio::test]
async fn test_next_question_options_contain_correct_answer() {
    let (state, client, user_id, token) = setup_with_user().await;
    seed_words(&state, user_id).await;

    let response = client
        .get_with_auth("/quiz/next", &token, &state.cookie_key)
        .await;
    let body: Value = response.json();

    let entry_id: Uuid = body["entry_id"].as_str().unwrap().parse().unwrap();
    let entries = client
        .get_with_auth("/vocab/list", &token, &state.cookie_key)
        .await;
    let entries: Vec<Value> = entries.json();
    let entry = entries
        .iter()
        .find(|e| e["id"].as_str().unwrap().parse::<Uuid>().unwrap() == entry_id)
        .unwrap();

    let correct = match body["asked_language"].as_str().unwrap() {
        "english" => entry["english"].as_str().unwrap(),
        _ => entry["bengali"].as_str().unwrap(),
    };
    let options: Vec<&str> = body["options"]
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o.as_str().unwrap())
        .collect();

    assert!(options.contains(&correct), "Correct answer must be offered");

    db::delete_user(&state.pool, user_id).await.unwrap();
}

#[tokio::test]
async fn test_next_question_with_no_vocabulary() {
    let (state, client, user_id, token) = setup_with_user().await;

    let response = client
        .get_with_auth("/quiz/next", &token, &state.cookie_key)
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("upload"));

    db::delete_user(&state.pool, user_id).await.unwrap();
}

#[tokio::test]
async fn test_next_card_returns_full_entry() {
    let (state, client, user_id, token) = setup_with_user().await;
    let ids = seed_words(&state, user_id).await;

    let response = client
        .get_with_auth("/quiz/next-card", &token, &state.cookie_key)
        .await;

    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    let entry_id: Uuid = body["id"].as_str().unwrap().parse().unwrap();
    assert!(ids.contains(&entry_id));
    // Swipe cards reveal everything at once
    assert!(body["german"].is_string());
    assert!(body["english"].is_string());
    assert!(body["bengali"].is_string());

    db::delete_user(&state.pool, user_id).await.unwrap();
}

#[tokio::test]
async fn test_correct_answer_updates_counters() {
    let (state, client, user_id, token) = setup_with_user().await;
    let entry_id = db::seed_vocab_entry(&state.pool, user_id, "gehen", "to walk", "হাঁটা", None)
        .await
        .unwrap();

    let response = client
        .post_json_with_auth(
            "/quiz/answer",
            &json!({ "entry_id": entry_id, "answer": "to walk", "asked_language": "english" }),
            &token,
            &state.cookie_key,
        )
        .await;

    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["is_correct"], true);
    assert_eq!(body["correct_answer"], "to walk");
    assert_eq!(body["entry"]["choice_attempts"], 1);
    assert_eq!(body["entry"]["choice_correct"], 1);
    assert_eq!(body["entry"]["choice_mistakes"], 0);
    assert_eq!(body["entry"]["practice_count"], 1);
    assert!(!body["entry"]["last_practiced_at"].is_null());

    db::delete_user(&state.pool, user_id).await.unwrap();
}

#[tokio::test]
async fn test_incorrect_answer_updates_counters() {
    let (state, client, user_id, token) = setup_with_user().await;
    let entry_id = db::seed_vocab_entry(&state.pool, user_id, "gehen", "to walk", "হাঁটা", None)
        .await
        .unwrap();

    let response = client
        .post_json_with_auth(
            "/quiz/answer",
            &json!({ "entry_id": entry_id, "answer": "to eat", "asked_language": "english" }),
            &token,
            &state.cookie_key,
        )
        .await;

    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["is_correct"], false);
    assert_eq!(body["correct_answer"], "to walk");
    assert_eq!(body["entry"]["choice_attempts"], 1);
    assert_eq!(body["entry"]["choice_correct"], 0);
    assert_eq!(body["entry"]["choice_mistakes"], 1);
    assert_eq!(body["entry"]["practice_count"], 1);

    db::delete_user(&state.pool, user_id).await.unwrap();
}

#[tokio::test]
async fn test_answer_comparison_ignores_case_and_whitespace() {
    let (state, client, user_id, token) = setup_with_user().await;
    let entry_id = db::seed_vocab_entry(&state.pool, user_id, "gehen", "to walk", "হাঁটা", None)
        .await
        .unwrap();

    let response = client
        .post_json_with_auth(
            "/quiz/answer",
            &json!({ "entry_id": entry_id, "answer": "  To   WALK ", "asked_language": "english" }),
            &token,
            &state.cookie_key,
        )
        .await;

    let body: Value = response.json();
    assert_eq!(body["is_correct"], true);

    db::delete_user(&state.pool, user_id).await.unwrap();
}

#[tokio::test]
async fn test_answer_in_bengali() {
    let (state, client, user_id, token) = setup_with_user().await;
    let entry_id = db::seed_vocab_entry(&state.pool, user_id, "gehen", "to walk", "হাঁটা", None)
        .await
        .unwrap();

    let response = client
        .post_json_with_auth(
            "/quiz/answer",
            &json!({ "entry_id": entry_id, "answer": "হাঁটা", "asked_language": "bengali" }),
            &token,
            &state.cookie_key,
        )
        .await;

    let body: Value = response.json();
    assert_eq!(body["is_correct"], true);
    assert_eq!(body["correct_answer"], "হাঁটা");

    db::delete_user(&state.pool, user_id).await.unwrap();
}

#[tokio::test]
async fn test_answer_rejects_empty_answer() {
    let (state, client, user_id, token) = setup_with_user().await;
    let entry_id = db::seed_vocab_entry(&state.pool, user_id, "gehen", "to walk", "হাঁটা", None)
        .await
        .unwrap();

    let response = client
        .post_json_with_auth(
            "/quiz/answer",
            &json!({ "entry_id": entry_id, "answer": "   ", "asked_language": "english" }),
            &token,
            &state.cookie_key,
        )
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    db::delete_user(&state.pool, user_id).await.unwrap();
}

#[tokio::test]
async fn test_answer_unknown_entry_is_404() {
    let (state, client, user_id, token) = setup_with_user().await;

    let response = client
        .post_json_with_auth(
            "/quiz/answer",
            &json!({ "entry_id": Uuid::new_v4(), "answer": "to walk", "asked_language": "english" }),
            &token,
            &state.cookie_key,
        )
        .await;

    response.assert_status(StatusCode::NOT_FOUND);

    db::delete_user(&state.pool, user_id).await.unwrap();
}

#[tokio::test]
async fn test_answer_cannot_touch_other_users_entry() {
    let (state, client, user_id, token) = setup_with_user().await;

    let other_username = test_data::unique_username("victim");
    let other_id = db::create_user_with_password(&state.pool, &other_username)
        .await
        .unwrap();
    let foreign_entry =
        db::seed_vocab_entry(&state.pool, other_id, "trinken", "to drink", "পান করা", None)
            .await
            .unwrap();

    let response = client
        .post_json_with_auth(
            "/quiz/answer",
            &json!({ "entry_id": foreign_entry, "answer": "to drink", "asked_language": "english" }),
            &token,
            &state.cookie_key,
        )
        .await;

    response.assert_status(StatusCode::NOT_FOUND);

    db::delete_user(&state.pool, user_id).await.unwrap();
    db::delete_user(&state.pool, other_id).await.unwrap();
}

#[tokio::test]
async fn test_mark_known_and_unknown_update_swipe_counters() {
    let (state, client, user_id, token) = setup_with_user().await;
    let entry_id = db::seed_vocab_entry(&state.pool, user_id, "gehen", "to walk", "হাঁটা", None)
        .await
        .unwrap();

    let response = client
        .post_json_with_auth(
            "/quiz/mark-known",
            &json!({ "entry_id": entry_id }),
            &token,
            &state.cookie_key,
        )
        .await;

    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["swipe_attempts"], 1);
    assert_eq!(body["swipe_known"], 1);
    assert_eq!(body["swipe_unknown"], 0);
    assert_eq!(body["practice_count"], 1);

    let response = client
        .post_json_with_auth(
            "/quiz/mark-unknown",
            &json!({ "entry_id": entry_id }),
            &token,
            &state.cookie_key,
        )
        .await;

    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["swipe_attempts"], 2);
    assert_eq!(body["swipe_known"], 1);
    assert_eq!(body["swipe_unknown"], 1);
    assert_eq!(body["practice_count"], 2);

    db::delete_user(&state.pool, user_id).await.unwrap();
}

#[tokio::test]
async fn test_quiz_endpoints_require_auth() {
    let state = TestStateBuilder::new()
        .build()
        .await
        .expect("Failed to build test state");
    let client = TestClient::new(wk_api::router::router().with_state(state));

    client
        .get("/quiz/next")
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
    client
        .post_json("/quiz/mark-known", &json!({ "entry_id": Uuid::new_v4() }))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}
