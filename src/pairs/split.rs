//! Buffer splitting around the current gap

use super::Gap;

/// Split `buffer` into the text before and after `gap`.
///
/// The gap's own content is excluded so the scanners search strictly outward
/// from it, regardless of what is currently selected. Returns `None` when the
/// gap is inverted or out of bounds; callers abort with no mutation.
pub fn split(buffer: &str, gap: Gap) -> Option<(&str, &str)> {
    if gap.end < gap.start {
        return None;
    }
    let start = byte_index(buffer, gap.start)?;
    let end = byte_index(buffer, gap.end)?;
    Some((&buffer[..start], &buffer[end..]))
}

/// Byte position of the `n`th Unicode scalar in `s`.
///
/// `n` equal to the scalar count maps to the buffer end; anything larger is
/// out of bounds.
fn byte_index(s: &str, n: usize) -> Option<usize> {
    if n == 0 {
        return Some(0);
    }
    match s.char_indices().nth(n) {
        Some((byte, _)) => Some(byte),
        None if s.chars().count() == n => Some(s.len()),
        None => None,
    }
}
