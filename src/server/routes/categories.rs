use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};

use crate::{
    server::{
        app::{AppState, Trivia},
        deserializers::PageQuery,
        extractors::{AppJson, AppPath},
    },
    trivia::{
        requests::CategoryPayload,
        service::{CategoriesResponse, CategoryCreatedResponse, CategoryQuestionsResponse},
    },
};

use super::ApiResponse;

async fn get_categories(State(trivia): State<Trivia>) -> ApiResponse<CategoriesResponse> {
    Ok(Json(trivia.list_categories().await?))
}

async fn create_category(
    State(trivia): State<Trivia>,
    AppJson(new_category): AppJson<CategoryPayload>,
) -> ApiResponse<CategoryCreatedResponse> {
    Ok(Json(trivia.create_category(new_category).await?))
}

async fn category_questions(
    State(trivia): State<Trivia>,
    AppPath(id): AppPath<i64>,
    Query(PageQuery { page }): Query<PageQuery>,
) -> ApiResponse<CategoryQuestionsResponse> {
    Ok(Json(trivia.questions_by_category(id, page).await?))
}

pub fn category_router() -> Router<AppState> {
    Router::new()
        .route("/categories", get(get_categories).post(create_category))
        .route("/categories/{id}/questions", get(category_questions))
}
