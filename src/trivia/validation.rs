//! Request checks that run before any repository is touched.

use std::collections::HashSet;

use crate::error::{ApiError, ApiResult};

use super::models::NewQuestion;
use super::requests::{CategoryPayload, QuestionPayload, QuizPayload};

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// The category type to create. Absent or blank is a bad request.
pub fn category_type(payload: CategoryPayload) -> ApiResult<String> {
    present(payload.kind).ok_or(ApiError::BadRequest)
}

/// A non-empty search term, if the payload asks for a search.
pub fn search_term(payload: &QuestionPayload) -> Option<&str> {
    payload
        .search_term
        .as_deref()
        .filter(|term| !term.is_empty())
}

/// All four question fields are required; a missing one cannot be written.
pub fn new_question(payload: QuestionPayload) -> ApiResult<NewQuestion> {
    match (
        present(payload.question),
        present(payload.answer),
        payload.category,
        payload.difficulty,
    ) {
        (Some(question), Some(answer), Some(category), Some(difficulty)) => Ok(NewQuestion {
            question,
            answer,
            category,
            difficulty,
        }),
        _ => Err(ApiError::Unprocessable),
    }
}

/// Quiz category id and the ids already served in this session.
pub fn quiz_request(payload: QuizPayload) -> ApiResult<(i64, HashSet<i64>)> {
    let category = payload
        .quiz_category
        .and_then(|c| c.id)
        .ok_or(ApiError::BadRequest)?;
    let previous = payload
        .previous_questions
        .unwrap_or_default()
        .into_iter()
        .collect();
    Ok((category, previous))
}
