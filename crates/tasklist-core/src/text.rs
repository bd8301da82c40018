//! Text cleaning for user-entered task names.

/// Trim and collapse internal whitespace runs to a single space.
///
/// Returns `None` when nothing but whitespace was entered.
pub fn clean_task_name(raw: &str) -> Option<String> {
    let cleaned = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}
