/// Case-insensitive substring test used for question search.
pub fn matches(text: &str, term: &str) -> bool {
    text.to_lowercase().contains(&term.to_lowercase())
}
