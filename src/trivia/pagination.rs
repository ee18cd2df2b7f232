pub const QUESTIONS_PER_PAGE: usize = 10;

/// Returns the 1-based `page` of `items`, `page_size` items at most.
///
/// Pages past the end are empty rather than an error. A page number of 0 is
/// treated as the first page.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.max(1).saturating_sub(1).saturating_mul(page_size);
    let end = start.saturating_add(page_size);
    let len = items.len();
    &items[start.min(len)..end.min(len)]
}
