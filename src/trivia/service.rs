use serde::Serialize;

use crate::error::{ApiError, ApiResult};

use super::models::{category_map, CategoryMap, Question};
use super::pagination::paginate;
use super::quiz;
use super::repository::{CategoryRepository, QuestionRepository};
use super::requests::{CategoryPayload, QuestionPayload, QuizPayload};
use super::validation;

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: CategoryMap,
}

#[derive(Debug, Serialize)]
pub struct CategoryCreatedResponse {
    pub success: bool,
    pub categories: CategoryMap,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct QuestionListResponse {
    pub success: bool,
    pub categories: CategoryMap,
    pub current_category: Option<String>,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted: i64,
}

#[derive(Debug, Serialize)]
pub struct CreatedQuestionResponse {
    pub success: bool,
    pub created: i64,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

#[derive(Debug, Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: String,
}

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<Question>,
}

/// Result of `POST /questions`, which searches when given a term and creates otherwise.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum QuestionPostResponse {
    Search(SearchResponse),
    Created(CreatedQuestionResponse),
}

/// The trivia operations, bound to a store and a page size.
#[derive(Clone)]
pub struct TriviaService<S> {
    store: S,
    page_size: usize,
}

impl<S> TriviaService<S>
where
    S: CategoryRepository + QuestionRepository,
{
    pub fn new(store: S, page_size: usize) -> Self {
        Self { store, page_size }
    }

    fn page_of(&self, questions: &[Question], page: usize) -> Vec<Question> {
        paginate(questions, page, self.page_size).to_vec()
    }

    pub async fn list_categories(&self) -> ApiResult<CategoriesResponse> {
        let categories = CategoryRepository::as_mapping(&self.store).await?;
        if categories.is_empty() {
            return Err(ApiError::NotFound);
        }
        Ok(CategoriesResponse {
            success: true,
            categories,
        })
    }

    pub async fn create_category(
        &self,
        payload: CategoryPayload,
    ) -> ApiResult<CategoryCreatedResponse> {
        let kind = validation::category_type(payload)?;
        let category = CategoryRepository::create(&self.store, &kind).await?;
        tracing::info!(id = category.id, "Created category");

        let categories = CategoryRepository::as_mapping(&self.store).await?;
        Ok(CategoryCreatedResponse {
            success: true,
            total: categories.len(),
            categories,
        })
    }

    pub async fn list_questions(&self, page: usize) -> ApiResult<QuestionListResponse> {
        let questions = QuestionRepository::list_all(&self.store).await?;
        let current = self.page_of(&questions, page);
        if current.is_empty() {
            return Err(ApiError::NotFound);
        }
        let categories = CategoryRepository::list_all(&self.store).await?;

        Ok(QuestionListResponse {
            success: true,
            categories: category_map(&categories),
            current_category: None,
            questions: current,
            total_questions: questions.len(),
        })
    }

    pub async fn delete_question(&self, id: i64) -> ApiResult<DeletedResponse> {
        QuestionRepository::delete_by_id(&self.store, id).await?;
        tracing::info!(id, "Deleted question");
        Ok(DeletedResponse {
            success: true,
            deleted: id,
        })
    }

    pub async fn post_question(
        &self,
        payload: QuestionPayload,
        page: usize,
    ) -> ApiResult<QuestionPostResponse> {
        match validation::search_term(&payload) {
            Some(term) => Ok(QuestionPostResponse::Search(
                self.search_questions(term, page).await?,
            )),
            None => Ok(QuestionPostResponse::Created(
                self.create_question(payload, page).await?,
            )),
        }
    }

    pub async fn create_question(
        &self,
        payload: QuestionPayload,
        page: usize,
    ) -> ApiResult<CreatedQuestionResponse> {
        let new = validation::new_question(payload)?;
        let created = QuestionRepository::insert(&self.store, new).await?;
        tracing::info!(id = created.id, category = created.category, "Created question");

        let questions = QuestionRepository::list_all(&self.store).await?;
        Ok(CreatedQuestionResponse {
            success: true,
            created: created.id,
            questions: self.page_of(&questions, page),
            total_questions: questions.len(),
        })
    }

    pub async fn search_questions(&self, term: &str, page: usize) -> ApiResult<SearchResponse> {
        let found = QuestionRepository::search(&self.store, term).await?;
        tracing::debug!(term, hits = found.len(), "Searched questions");
        if found.is_empty() {
            return Err(ApiError::NotFound);
        }
        Ok(SearchResponse {
            success: true,
            questions: self.page_of(&found, page),
            total_questions: found.len(),
        })
    }

    pub async fn questions_by_category(
        &self,
        category_id: i64,
        page: usize,
    ) -> ApiResult<CategoryQuestionsResponse> {
        let category = CategoryRepository::get_by_id(&self.store, category_id)
            .await?
            .ok_or(ApiError::BadRequest)?;
        let questions = QuestionRepository::filter_by_category(&self.store, category_id).await?;

        Ok(CategoryQuestionsResponse {
            success: true,
            questions: self.page_of(&questions, page),
            total_questions: questions.len(),
            current_category: category.kind,
        })
    }

    pub async fn next_quiz_question(&self, payload: QuizPayload) -> ApiResult<QuizResponse> {
        let (category, previous) = validation::quiz_request(payload)?;
        let question = quiz::next_question(&self.store, category, &previous).await?;

        // labels come from stored rows only, never from the request
        match &question {
            Some(q) => {
                tracing::debug!(id = q.id, category, "Serving quiz question");
                let label = q.category.to_string();
                crate::telemetry::QUIZ_SERVED_CNTR
                    .with_label_values(&[label.as_str()])
                    .inc();
            }
            None => {
                tracing::debug!(category, served = previous.len(), "Quiz exhausted");
                crate::telemetry::QUIZ_EXHAUSTED_CNTR.inc();
            }
        }

        Ok(QuizResponse {
            success: true,
            question,
        })
    }
}
