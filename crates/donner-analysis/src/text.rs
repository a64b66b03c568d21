//! Normalisation and char-boundary-safe context windows.
//!
//! Window arithmetic is in bytes; every edge is snapped to a char boundary so
//! slicing never panics on non-ASCII bulletins.

/// Uppercase a document once; all downstream matching uses the result.
pub fn normalize(document: &str) -> String {
    document.to_uppercase()
}

/// Largest char boundary `<= idx`, clamped to the text length.
pub fn floor_char_boundary(text: &str, idx: usize) -> usize {
    if idx >= text.len() {
        return text.len();
    }
    let mut i = idx;
    while !text.is_char_boundary(i) {
        i -= 1;
    }
    i
}

/// Smallest char boundary `>= idx`, clamped to the text length.
pub fn ceil_char_boundary(text: &str, idx: usize) -> usize {
    if idx >= text.len() {
        return text.len();
    }
    let mut i = idx;
    while !text.is_char_boundary(i) {
        i += 1;
    }
    i
}

/// Up to `len` bytes ending at `at`. Returns the window start and the slice.
pub fn window_before(text: &str, at: usize, len: usize) -> (usize, &str) {
    let end = floor_char_boundary(text, at);
    let start = ceil_char_boundary(text, end.saturating_sub(len));
    (start, &text[start..end])
}

/// Up to `len` bytes starting at `at`.
pub fn window_after(text: &str, at: usize, len: usize) -> &str {
    let start = floor_char_boundary(text, at);
    let end = floor_char_boundary(text, start.saturating_add(len));
    &text[start..end]
}

/// ASCII case-insensitive `ends_with`, ignoring trailing whitespace.
pub fn ends_with_word(text: &str, word: &str) -> bool {
    let trimmed = text.trim_end();
    if trimmed.len() < word.len() {
        return false;
    }
    let split = trimmed.len() - word.len();
    trimmed.is_char_boundary(split) && trimmed[split..].eq_ignore_ascii_case(word)
}

/// First char-count-limited prefix of `text`.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
