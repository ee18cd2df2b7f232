use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::error::StoreError;
use crate::trivia::repository::{CategoryRepository, QuestionRepository};

use super::queries::{categories, questions};
use super::{Category, NewQuestion, Question};

/// Both repositories over one SQLite pool.
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for SqliteStore {
    async fn list_all(&self) -> Result<Vec<Category>, StoreError> {
        Ok(categories::get_all_categories(&self.pool).await?)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Category>, StoreError> {
        Ok(categories::get_category(&self.pool, id).await?)
    }

    async fn create(&self, kind: &str) -> Result<Category, StoreError> {
        if kind.trim().is_empty() {
            return Err(StoreError::Validation("category type is empty".to_owned()));
        }
        let id = categories::create_category(&self.pool, kind).await?;
        Ok(Category {
            id,
            kind: kind.to_owned(),
        })
    }
}

#[async_trait]
impl QuestionRepository for SqliteStore {
    async fn list_all(&self) -> Result<Vec<Question>, StoreError> {
        Ok(questions::get_all_questions(&self.pool).await?)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Question>, StoreError> {
        Ok(questions::get_question_by_id(&self.pool, id).await?)
    }

    async fn insert(&self, new: NewQuestion) -> Result<Question, StoreError> {
        if new.question.trim().is_empty() || new.answer.trim().is_empty() {
            return Err(StoreError::Validation(
                "question and answer are required".to_owned(),
            ));
        }
        let id = questions::create_question(&self.pool, &new).await?;
        Ok(Question {
            id,
            question: new.question,
            answer: new.answer,
            category: new.category,
            difficulty: new.difficulty,
        })
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), StoreError> {
        match questions::delete_question(&self.pool, id).await? {
            0 => Err(StoreError::NotFound(id)),
            _ => Ok(()),
        }
    }

    async fn filter_by_category(&self, category: i64) -> Result<Vec<Question>, StoreError> {
        Ok(questions::get_questions_for_category(&self.pool, category).await?)
    }
}
