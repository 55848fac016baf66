//! Selection and removal spans for a located pair

use super::{EnclosingPair, Gap};

/// Span the select operation should produce, honoring the toggle rule.
///
/// The content span (delimiters excluded) is returned unless the gap already
/// covers exactly that span, in which case the full span (delimiters
/// included) is returned. Repeated invocations alternate between the two
/// framings of the same pair.
pub fn select_span(pair: &EnclosingPair, gap: Gap) -> (usize, usize) {
    let full = (pair.opening.offset, pair.closing.offset);
    let content = (pair.opening.offset + 1, pair.closing.offset - 1);
    if (gap.start, gap.end) == content {
        full
    } else {
        content
    }
}

/// The two single-character spans the unwrap operation deletes.
///
/// Closing side first (higher offset first), so applying them in order never
/// invalidates the opening offset. Callers apply both as one atomic edit.
pub fn removal_spans(pair: &EnclosingPair) -> [(usize, usize); 2] {
    let close = pair.closing.offset - 1;
    let open = pair.opening.offset;
    [(close, close + 1), (open, open + 1)]
}
