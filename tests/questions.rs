mod common;

use axum::http::{Method, StatusCode};
use serde_json::{json, Value};

use common::{app, assert_error, memory_pool, seed_category, seed_question, send};
use trivia_api::db::queries::questions::get_question_by_id;

fn ids(body: &Value) -> Vec<i64> {
    body["questions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["id"].as_i64().unwrap())
        .collect()
}

#[tokio::test]
async fn lists_first_page_with_categories() {
    let pool = memory_pool().await;
    let science = seed_category(&pool, "Science").await;
    for n in 1..=12 {
        seed_question(&pool, &format!("Question {n}"), science).await;
    }

    let (status, body) = send(&app(&pool), Method::GET, "/questions", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["total_questions"], 12);
    assert_eq!(body["current_category"], Value::Null);
    assert_eq!(body["categories"], json!({"1": "Science"}));
    assert_eq!(ids(&body), (1..=10).collect::<Vec<_>>());
}

#[tokio::test]
async fn third_page_holds_the_tail() {
    let pool = memory_pool().await;
    let science = seed_category(&pool, "Science").await;
    for n in 1..=25 {
        seed_question(&pool, &format!("Question {n}"), science).await;
    }

    let (status, body) = send(&app(&pool), Method::GET, "/questions?page=3", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![21, 22, 23, 24, 25]);
}

#[tokio::test]
async fn non_numeric_page_is_first_page() {
    let pool = memory_pool().await;
    let science = seed_category(&pool, "Science").await;
    seed_question(&pool, "Question 1", science).await;

    let (status, body) = send(&app(&pool), Method::GET, "/questions?page=abc", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![1]);
}

#[tokio::test]
async fn page_beyond_the_end_is_not_found() {
    let pool = memory_pool().await;
    let science = seed_category(&pool, "Science").await;
    seed_question(&pool, "Question 1", science).await;

    let (status, body) = send(&app(&pool), Method::GET, "/questions?page=1000", None).await;
    assert_error(status, &body, 404, "Not Found");
}

#[tokio::test]
async fn overflowing_page_is_not_found() {
    let pool = memory_pool().await;
    let science = seed_category(&pool, "Science").await;
    seed_question(&pool, "Question 1", science).await;

    let (status, body) = send(
        &app(&pool),
        Method::GET,
        "/questions?page=99999999999999999999999",
        None,
    )
    .await;
    assert_error(status, &body, 404, "Not Found");
}

#[tokio::test]
async fn deletes_question() {
    let pool = memory_pool().await;
    let science = seed_category(&pool, "Science").await;
    let id = seed_question(&pool, "who?", science).await;

    let (status, body) = send(&app(&pool), Method::DELETE, &format!("/questions/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["deleted"], id);
    assert_eq!(get_question_by_id(&pool, id).await.unwrap(), None);
}

#[tokio::test]
async fn deleting_missing_question_is_unprocessable() {
    let pool = memory_pool().await;
    let (status, body) = send(&app(&pool), Method::DELETE, "/questions/1000", None).await;
    assert_error(status, &body, 422, "Unprocessable Entity");
}

#[tokio::test]
async fn creates_question() {
    let pool = memory_pool().await;
    seed_category(&pool, "Science").await;
    let new_question = json!({
        "answer": "elsayed",
        "category": 1,
        "question": "who?",
        "difficulty": 2,
    });

    let (status, body) = send(&app(&pool), Method::POST, "/questions", Some(new_question)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["created"], 1);
    assert_eq!(body["total_questions"], 1);
    assert_eq!(body["questions"][0]["answer"], "elsayed");
}

#[tokio::test]
async fn accepts_string_encoded_numbers() {
    let pool = memory_pool().await;
    let new_question = json!({
        "answer": "Paris",
        "category": "3",
        "question": "Capital of France?",
        "difficulty": "1",
    });

    let (status, body) = send(&app(&pool), Method::POST, "/questions", Some(new_question)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["questions"][0]["category"], 3);
}

#[tokio::test]
async fn question_without_answer_is_unprocessable() {
    let pool = memory_pool().await;
    let incomplete = json!({"category": 1, "question": "who?", "difficulty": 2});

    let (status, body) = send(&app(&pool), Method::POST, "/questions", Some(incomplete)).await;
    assert_error(status, &body, 422, "Unprocessable Entity");
}

#[tokio::test]
async fn post_on_question_id_is_not_allowed() {
    let pool = memory_pool().await;
    let (status, body) = send(&app(&pool), Method::POST, "/questions/45", None).await;
    assert_error(status, &body, 405, "Method Not Allowed");
}

#[tokio::test]
async fn search_is_case_insensitive() {
    let pool = memory_pool().await;
    let science = seed_category(&pool, "Science").await;
    seed_question(&pool, "Which planet is the largest?", science).await;
    seed_question(&pool, "Who discovered penicillin?", science).await;
    seed_question(&pool, "which element has symbol O?", science).await;

    for term in ["which", "WHICH", "wHiCh"] {
        let (status, body) = send(
            &app(&pool),
            Method::POST,
            "/questions",
            Some(json!({"searchTerm": term})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["total_questions"], 2);
        assert_eq!(ids(&body), vec![1, 3]);
    }
}

#[tokio::test]
async fn search_accepts_snake_case_key() {
    let pool = memory_pool().await;
    let science = seed_category(&pool, "Science").await;
    seed_question(&pool, "Which planet is the largest?", science).await;

    let (status, body) = send(
        &app(&pool),
        Method::POST,
        "/questions",
        Some(json!({"search_term": "planet"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_questions"], 1);
}

#[tokio::test]
async fn search_without_hits_is_not_found() {
    let pool = memory_pool().await;
    let science = seed_category(&pool, "Science").await;
    seed_question(&pool, "Which planet is the largest?", science).await;

    let (status, body) = send(
        &app(&pool),
        Method::POST,
        "/questions",
        Some(json!({"searchTerm": "zebra"})),
    )
    .await;
    assert_error(status, &body, 404, "Not Found");
}

#[tokio::test]
async fn search_honours_page() {
    let pool = memory_pool().await;
    let science = seed_category(&pool, "Science").await;
    for n in 1..=12 {
        seed_question(&pool, &format!("Which number is {n}?"), science).await;
    }
    seed_question(&pool, "Who wrote Hamlet?", science).await;

    let (status, body) = send(
        &app(&pool),
        Method::POST,
        "/questions?page=2",
        Some(json!({"searchTerm": "which"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_questions"], 12);
    assert_eq!(ids(&body), vec![11, 12]);
}

#[tokio::test]
async fn create_honours_page() {
    let pool = memory_pool().await;
    let science = seed_category(&pool, "Science").await;
    for n in 1..=11 {
        seed_question(&pool, &format!("Question {n}"), science).await;
    }
    let new_question = json!({
        "answer": "elsayed",
        "category": science,
        "question": "who?",
        "difficulty": 2,
    });

    let (status, body) = send(
        &app(&pool),
        Method::POST,
        "/questions?page=2",
        Some(new_question),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["created"], 12);
    assert_eq!(body["total_questions"], 12);
    assert_eq!(ids(&body), vec![11, 12]);
}
