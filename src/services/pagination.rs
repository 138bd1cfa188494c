/// Returns page `page_number` (one-based) of `items`, at most `page_size`
/// long. A page past the end is empty; callers report that as not found.
pub fn paginate<T>(items: Vec<T>, page_number: usize, page_size: usize) -> Vec<T> {
    let page_number = page_number.max(1);
    let start = (page_number - 1).saturating_mul(page_size);
    if start >= items.len() {
        return Vec::new();
    }

    items.into_iter().skip(start).take(page_size).collect()
}
