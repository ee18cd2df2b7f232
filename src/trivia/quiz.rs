use std::collections::HashSet;

use crate::error::StoreError;

use super::models::Question;
use super::repository::QuestionRepository;

/// Category id meaning "every category".
pub const ALL_CATEGORIES: i64 = 0;

/// Picks the first question, in stored order, that was not served yet.
///
/// The pick is deterministic: the same stored order and exclusion set always
/// yield the same question.
pub fn select_next(
    questions: impl IntoIterator<Item = Question>,
    category: i64,
    excluded: &HashSet<i64>,
) -> Option<Question> {
    questions
        .into_iter()
        .filter(|q| category == ALL_CATEGORIES || q.category == category)
        .find(|q| !excluded.contains(&q.id))
}

/// Next unseen question for a quiz session. The caller owns the session and
/// passes every previously served id in `excluded`.
pub async fn next_question<R>(
    repo: &R,
    category: i64,
    excluded: &HashSet<i64>,
) -> Result<Option<Question>, StoreError>
where
    R: QuestionRepository + ?Sized,
{
    let candidates = if category == ALL_CATEGORIES {
        repo.list_all().await?
    } else {
        repo.filter_by_category(category).await?
    };
    Ok(select_next(candidates, category, excluded))
}
