/// One slot per item, by position. `None` means the item was left
/// unanswered; the engine propagates it instead of defaulting to 0.
pub type ResponseVector = Vec<Option<usize>>;

/// Count of answered slots, for progress display.
pub fn answered_count(responses: &ResponseVector) -> usize {
    responses.iter().filter(|r| r.is_some()).count()
}
