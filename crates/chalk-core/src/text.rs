//! Character-offset helpers over `&str`.
//!
//! Engines speak character offsets while Rust strings slice by bytes; everything that crosses
//! that boundary goes through here. Out-of-range offsets clamp to the end of the text.

/// Number of characters in `text`.
pub(crate) fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Byte index of the character at `char_offset` (or `text.len()` past the end).
pub(crate) fn byte_offset(text: &str, char_offset: usize) -> usize {
    text.char_indices()
        .nth(char_offset)
        .map(|(byte, _)| byte)
        .unwrap_or(text.len())
}

/// Slice `text` by a half-open character range.
pub(crate) fn slice(text: &str, start: usize, end: usize) -> &str {
    let start_byte = byte_offset(text, start);
    let end_byte = byte_offset(text, end.max(start));
    &text[start_byte..end_byte]
}

/// The character at `char_offset`, if any.
pub(crate) fn char_at(text: &str, char_offset: usize) -> Option<char> {
    text.chars().nth(char_offset)
}

/// Character offset of the last `'\n'` among the first `limit` characters.
pub(crate) fn last_line_feed_before(text: &str, limit: usize) -> Option<usize> {
    text.chars()
        .take(limit)
        .enumerate()
        .filter(|&(_, ch)| ch == '\n')
        .map(|(idx, _)| idx)
        .last()
}

/// `text[..start] + insert + text[end..]`, in character offsets.
pub(crate) fn splice(text: &str, start: usize, end: usize, insert: &str) -> String {
    let start_byte = byte_offset(text, start);
    let end_byte = byte_offset(text, end.max(start));
    let mut out = String::with_capacity(text.len() - (end_byte - start_byte) + insert.len());
    out.push_str(&text[..start_byte]);
    out.push_str(insert);
    out.push_str(&text[end_byte..]);
    out
}
