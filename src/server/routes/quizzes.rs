use axum::{extract::State, routing::post, Json, Router};

use crate::{
    server::{
        app::{AppState, Trivia},
        extractors::AppJson,
    },
    trivia::{requests::QuizPayload, service::QuizResponse},
};

use super::ApiResponse;

async fn next_question(
    State(trivia): State<Trivia>,
    AppJson(body): AppJson<QuizPayload>,
) -> ApiResponse<QuizResponse> {
    Ok(Json(trivia.next_quiz_question(body).await?))
}

pub fn quizzes_router() -> Router<AppState> {
    Router::new().route("/quizzes", post(next_question))
}
