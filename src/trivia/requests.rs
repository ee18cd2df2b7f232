use serde::Deserialize;
use serde_aux::field_attributes::deserialize_option_number_from_string;

#[derive(Debug, Default, Deserialize)]
pub struct CategoryPayload {
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

/// Body of `POST /questions`, which either searches or creates.
#[derive(Debug, Default, Deserialize)]
pub struct QuestionPayload {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    // the web client sends category ids as strings
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    pub category: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    pub difficulty: Option<i64>,
    #[serde(default, rename = "searchTerm", alias = "search_term")]
    pub search_term: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct QuizPayload {
    #[serde(default)]
    pub previous_questions: Option<Vec<i64>>,
    #[serde(default)]
    pub quiz_category: Option<QuizCategory>,
}

#[derive(Debug, Default, Deserialize)]
pub struct QuizCategory {
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    pub id: Option<i64>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}
