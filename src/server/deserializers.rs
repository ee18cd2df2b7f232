use serde::{Deserialize, Deserializer};

// `?page=abc` and `?page=` fall back to the first page instead of rejecting the request
pub fn deserialize_page<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value
        .and_then(|v| parse_page(v.trim()))
        .filter(|page| *page >= 1)
        .unwrap_or(1))
}

// digits too large for usize still name a page past the end
fn parse_page(value: &str) -> Option<usize> {
    if !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) {
        Some(value.parse::<usize>().unwrap_or(usize::MAX))
    } else {
        None
    }
}

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    #[serde(default = "first_page", deserialize_with = "deserialize_page")]
    pub page: usize,
}

fn first_page() -> usize {
    1
}
