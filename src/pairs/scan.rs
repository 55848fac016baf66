//! Backward and forward delimiter scanners
//!
//! Both scans are linear over the text on one side of the gap. The backward
//! scan finds the nearest opener not balanced by anything to its right; the
//! forward scan finds the closer that balances a specific opener. Offsets are
//! Unicode scalar indices.

use super::catalog::{self, Direction, Family, MAX_KINDS};
use super::DelimiterMatch;

/// A closing character immediately preceded by this one is not counted, so
/// the `>` of an arrow token `=>` is never mistaken for a closing angle
/// bracket.
const SUPPRESSOR: char = '=';

/// Scan `before` backward for the nearest enclosing opener of `family`.
///
/// Per-kind counters track closers seen so far (not yet balanced by an opener
/// further left); an opener whose kind has a pending closer consumes it and
/// scanning continues past the balanced pair. An opener found while every
/// counter is zero is the innermost enclosing one. The local index equals the
/// absolute offset because `before` starts at buffer position 0.
pub fn find_opening(before: &str, family: Family) -> Option<DelimiterMatch> {
    let opens = catalog::descriptors_of(family, Direction::Open);
    let closes = catalog::descriptors_of(family, Direction::Close);
    let chars: Vec<char> = before.chars().collect();

    // Pending-closer counts, indexed by position in the closing-kind table.
    let mut pending = [0u32; MAX_KINDS];

    for p in (0..chars.len()).rev() {
        let ch = chars[p];

        // The open check runs first: quotes sit in both tables, and a quote
        // with no pending count is the enclosing opener.
        if let Some(open) = opens.iter().find(|d| d.character == ch) {
            let kind = catalog::closing_kind_index(open.paired, family)
                .expect("catalog tables are positionally aligned");
            if pending[kind] > 0 {
                // Balances a closer seen further right; skip the whole pair.
                pending[kind] -= 1;
                continue;
            }
            if pending[..closes.len()].iter().all(|&c| c == 0) {
                return Some(DelimiterMatch {
                    descriptor: open,
                    offset: p,
                });
            }
            // Some other kind still has a pending closer, so this opener is
            // not the innermost one.
            continue;
        }

        if let Some(close) = closes.iter().find(|d| d.character == ch) {
            let suppressed = p > 0 && chars[p - 1] == SUPPRESSOR;
            if !suppressed {
                let kind = catalog::closing_kind_index(close.character, family)
                    .expect("closing descriptor comes from the catalog");
                pending[kind] += 1;
            }
        }
    }

    None
}

/// Scan `after` forward for the closer balancing `opening`.
///
/// Only same-kind nesting matters here: other kinds cannot rebind this
/// opener's closer. The recorded offset is one past the closing character, so
/// pair spans are half-open `[opening, closing)`. `start_offset` is the
/// absolute position where `after` begins (the gap end).
pub fn find_closing(
    after: &str,
    opening: &DelimiterMatch,
    start_offset: usize,
) -> Option<DelimiterMatch> {
    let open_ch = opening.descriptor.character;
    let close_ch = opening.descriptor.paired;
    let closing = catalog::pair_of(opening.descriptor);

    let mut depth = 0u32;
    let mut prev: Option<char> = None;

    for (p, ch) in after.chars().enumerate() {
        // The close check runs first: quotes have the same character on both
        // ends, and the first quote seen closes the pair.
        if ch == close_ch {
            // Arrow tokens only exist for asymmetric pairs; a quote after `=`
            // is a real delimiter.
            let suppressed = close_ch != open_ch && prev == Some(SUPPRESSOR);
            if !suppressed {
                if depth == 0 {
                    return Some(DelimiterMatch {
                        descriptor: closing,
                        offset: start_offset + p + 1,
                    });
                }
                depth -= 1;
            }
        } else if ch == open_ch {
            depth += 1;
        }
        prev = Some(ch);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pairs::Gap;

    fn opening(before: &str, family: Family) -> Option<(char, usize)> {
        find_opening(before, family).map(|m| (m.descriptor.character, m.offset))
    }

    #[test]
    fn nearest_unmatched_opener_wins() {
        assert_eq!(opening("foo(bar,", Family::Bracket), Some(('(', 3)));
        assert_eq!(opening("(a(", Family::Bracket), Some(('(', 2)));
    }

    #[test]
    fn balanced_inner_pairs_are_skipped() {
        // The (c) pair left of the gap is already balanced
        assert_eq!(opening("{a (c) b", Family::Bracket), Some(('{', 0)));
    }

    #[test]
    fn mixed_kinds_track_separate_counters() {
        assert_eq!(opening("([a] {b}", Family::Bracket), Some(('(', 0)));
    }

    #[test]
    fn unmatched_closer_between_opener_and_gap_blocks_it() {
        assert_eq!(opening("( ] ", Family::Bracket), None);
    }

    #[test]
    fn arrow_token_is_not_a_closing_angle() {
        assert_eq!(opening("a < b =>", Family::Bracket), Some(('<', 2)));
    }

    #[test]
    fn plain_closing_angle_still_counts() {
        // No suppressor, so the > balances the < and nothing encloses the gap
        assert_eq!(opening("a < b > c", Family::Bracket), None);
    }

    #[test]
    fn nearest_quote_wins() {
        assert_eq!(opening("say \"he", Family::Quote), Some(('"', 4)));
        assert_eq!(opening("'a' or \"b", Family::Quote), Some(('"', 7)));
    }

    #[test]
    fn no_opener_in_plain_text() {
        assert_eq!(opening("no delimiters here", Family::Bracket), None);
        assert_eq!(opening("", Family::Bracket), None);
    }

    fn closing(after: &str, open_ch: char, start: usize) -> Option<usize> {
        let opens = catalog::descriptors_of(
            if open_ch == '"' || open_ch == '\'' || open_ch == '`' {
                Family::Quote
            } else {
                Family::Bracket
            },
            Direction::Open,
        );
        let desc = opens.iter().find(|d| d.character == open_ch).unwrap();
        let m = DelimiterMatch {
            descriptor: desc,
            offset: 0,
        };
        find_closing(after, &m, start).map(|c| c.offset)
    }

    #[test]
    fn first_balancing_closer_matches() {
        // Offset is one past the closer
        assert_eq!(closing(" baz)qux", '(', 8), Some(13));
        assert_eq!(closing(")", '(', 3), Some(4));
    }

    #[test]
    fn nested_same_kind_openers_are_counted() {
        assert_eq!(closing("a (b) c) d", '(', 0), Some(8));
    }

    #[test]
    fn other_kinds_do_not_affect_depth() {
        assert_eq!(closing("a [b) c", '(', 0), Some(5));
    }

    #[test]
    fn first_quote_closes() {
        assert_eq!(closing("llo\" now", '"', 7), Some(12));
    }

    #[test]
    fn arrow_token_is_not_a_closer_forward() {
        assert_eq!(closing(" a => b > c", '<', 0), Some(9));
    }

    #[test]
    fn unbalanced_after_text_returns_none() {
        assert_eq!(closing(" (b", '(', 0), None);
        assert_eq!(closing("", '(', 0), None);
    }

    #[test]
    fn scanner_offsets_compose_with_split() {
        let buffer = "foo(bar, baz)qux";
        let (before, after) = super::super::split(buffer, Gap::caret(8)).unwrap();
        let open = find_opening(before, Family::Bracket).unwrap();
        assert_eq!(open.offset, 3);
        let close = find_closing(after, &open, 8).unwrap();
        assert_eq!(close.offset, 13);
    }
}
