use axum::{
    extract::{Query, State},
    routing::{delete, get},
    Json, Router,
};

use crate::{
    server::{
        app::{AppState, Trivia},
        deserializers::PageQuery,
        extractors::{AppJson, AppPath},
    },
    trivia::{
        requests::QuestionPayload,
        service::{DeletedResponse, QuestionListResponse, QuestionPostResponse},
    },
};

use super::ApiResponse;

async fn get_questions(
    State(trivia): State<Trivia>,
    Query(PageQuery { page }): Query<PageQuery>,
) -> ApiResponse<QuestionListResponse> {
    Ok(Json(trivia.list_questions(page).await?))
}

// searches when the body carries a non-empty searchTerm, creates otherwise
async fn post_question(
    State(trivia): State<Trivia>,
    Query(PageQuery { page }): Query<PageQuery>,
    AppJson(body): AppJson<QuestionPayload>,
) -> ApiResponse<QuestionPostResponse> {
    Ok(Json(trivia.post_question(body, page).await?))
}

async fn delete_question(
    State(trivia): State<Trivia>,
    AppPath(id): AppPath<i64>,
) -> ApiResponse<DeletedResponse> {
    Ok(Json(trivia.delete_question(id).await?))
}

pub fn questions_router() -> Router<AppState> {
    Router::new()
        .route("/questions", get(get_questions).post(post_question))
        .route("/questions/{id}", delete(delete_question))
}
