//! Request logic of the trivia game: pagination, search, validation and the
//! quiz selection policy, on top of the category and question repositories.

pub mod models;
pub mod pagination;
pub mod quiz;
pub mod repository;
pub mod requests;
pub mod search;
pub mod service;
pub mod validation;

pub use models::{Category, CategoryMap, NewQuestion, Question};
pub use repository::{CategoryRepository, QuestionRepository};
pub use service::TriviaService;
