use async_trait::async_trait;

use crate::error::StoreError;

use super::models::{category_map, Category, CategoryMap, NewQuestion, Question};
use super::search;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// All categories ordered by id.
    async fn list_all(&self) -> Result<Vec<Category>, StoreError>;

    async fn get_by_id(&self, id: i64) -> Result<Option<Category>, StoreError>;

    /// Fails with [`StoreError::Validation`] on an empty `kind`.
    async fn create(&self, kind: &str) -> Result<Category, StoreError>;

    /// Empty when no categories exist.
    async fn as_mapping(&self) -> Result<CategoryMap, StoreError> {
        Ok(category_map(&self.list_all().await?))
    }
}

#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// All questions ordered by id.
    async fn list_all(&self) -> Result<Vec<Question>, StoreError>;

    async fn get_by_id(&self, id: i64) -> Result<Option<Question>, StoreError>;

    async fn insert(&self, question: NewQuestion) -> Result<Question, StoreError>;

    /// Fails with [`StoreError::NotFound`] when no question has this id.
    async fn delete_by_id(&self, id: i64) -> Result<(), StoreError>;

    async fn filter_by_category(&self, category: i64) -> Result<Vec<Question>, StoreError>;

    async fn search(&self, term: &str) -> Result<Vec<Question>, StoreError> {
        Ok(self
            .list_all()
            .await?
            .into_iter()
            .filter(|q| search::matches(&q.question, term))
            .collect())
    }
}
