//! Editor state - cursor, selection, and viewport

use super::document::Document;
use crate::util::{char_type, CharType};

/// A position in the document (line and column)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    /// Line number (0-indexed)
    pub line: usize,
    /// Column number (0-indexed)
    pub column: usize,
}

impl Position {
    /// Create a new position
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// A text selection with anchor (start) and head (cursor end)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    /// Where the selection started (fixed point)
    pub anchor: Position,
    /// Where the cursor is (moving point)
    pub head: Position,
}

impl Selection {
    /// Create a new empty selection at a position
    pub fn new(pos: Position) -> Self {
        Self {
            anchor: pos,
            head: pos,
        }
    }

    /// Create a selection from anchor to head
    pub fn from_anchor_head(anchor: Position, head: Position) -> Self {
        Self { anchor, head }
    }

    /// Check if selection is empty (cursor without selection)
    pub fn is_empty(&self) -> bool {
        self.anchor == self.head
    }

    /// Get the start of the selection (smaller position)
    pub fn start(&self) -> Position {
        if self.anchor <= self.head {
            self.anchor
        } else {
            self.head
        }
    }

    /// Get the end of the selection (larger position)
    pub fn end(&self) -> Position {
        if self.anchor <= self.head {
            self.head
        } else {
            self.anchor
        }
    }

    /// Check if the selection is reversed (head before anchor)
    pub fn is_reversed(&self) -> bool {
        self.head < self.anchor
    }

    /// Extend selection to new head position
    pub fn extend_to(&mut self, pos: Position) {
        self.head = pos;
    }
}

/// Cursor position in the document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    /// Line number (0-indexed)
    pub line: usize,
    /// Column number (0-indexed)
    pub column: usize,
    /// Desired column for vertical movement (preserves position when moving through short lines)
    pub desired_column: Option<usize>,
}

impl Cursor {
    /// Create a new cursor at position (0, 0)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cursor at a specific position
    pub fn at(line: usize, column: usize) -> Self {
        Self {
            line,
            column,
            desired_column: None,
        }
    }

    /// Convert to Position (without desired_column)
    pub fn to_position(&self) -> Position {
        Position::new(self.line, self.column)
    }
}

/// Viewport state - what portion of the document is visible in the host view
#[derive(Debug, Clone)]
pub struct Viewport {
    /// First visible line (0-indexed)
    pub top_line: usize,
    /// Number of lines that fit in the viewport
    pub visible_lines: usize,
}

impl Viewport {
    pub fn new(visible_lines: usize) -> Self {
        Self {
            top_line: 0,
            visible_lines,
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(25)
    }
}

/// Editor state - the cursor, selection, and scroll position for a document
///
/// The pair operations read a single gap per invocation from the primary
/// selection; this state intentionally tracks one cursor.
#[derive(Debug, Clone)]
pub struct EditorState {
    /// The cursor
    pub cursor: Cursor,
    /// The selection (head tracks the cursor)
    pub selection: Selection,
    /// Viewport showing which portion of the document is visible
    pub viewport: Viewport,
    /// Number of lines of padding to maintain above/below cursor when scrolling
    pub scroll_padding: usize,
}

impl EditorState {
    /// Create a new editor state with default settings
    pub fn new() -> Self {
        let cursor = Cursor::new();
        Self {
            cursor,
            selection: Selection::new(cursor.to_position()),
            viewport: Viewport::default(),
            scroll_padding: 1,
        }
    }

    /// Collapse the selection to the cursor position
    pub fn clear_selection(&mut self) {
        self.selection = Selection::new(self.cursor.to_position());
    }

    /// Move the cursor to a position and collapse the selection to it
    pub fn set_cursor(&mut self, pos: Position) {
        self.cursor = Cursor::at(pos.line, pos.column);
        self.clear_selection();
    }

    /// Set primary cursor position from buffer offset (clears selection)
    pub fn set_cursor_from_offset(&mut self, document: &Document, offset: usize) {
        let (line, column) = document.offset_to_cursor(offset);
        self.set_cursor(Position::new(line, column));
    }

    /// Get buffer offset from cursor position
    pub fn cursor_offset(&self, document: &Document) -> usize {
        document.cursor_to_offset(self.cursor.line, self.cursor.column)
    }

    /// The selection as a half-open char-offset range
    pub fn selection_offsets(&self, document: &Document) -> (usize, usize) {
        let start = self.selection.start();
        let end = self.selection.end();
        (
            document.cursor_to_offset(start.line, start.column),
            document.cursor_to_offset(end.line, end.column),
        )
    }

    /// Select a char-offset range, leaving the cursor at the range end
    pub fn select_offsets(&mut self, document: &Document, start: usize, end: usize) {
        let (anchor_line, anchor_col) = document.offset_to_cursor(start);
        let (head_line, head_col) = document.offset_to_cursor(end);
        self.selection = Selection::from_anchor_head(
            Position::new(anchor_line, anchor_col),
            Position::new(head_line, head_col),
        );
        self.cursor = Cursor::at(head_line, head_col);
    }

    // =========================================================================
    // Movement
    // =========================================================================

    pub fn move_up(&mut self, document: &Document) {
        if self.cursor.line == 0 {
            self.cursor.column = 0;
            self.cursor.desired_column = None;
            return;
        }
        let desired = self.cursor.desired_column.unwrap_or(self.cursor.column);
        self.cursor.line -= 1;
        self.cursor.column = desired.min(document.line_length(self.cursor.line));
        self.cursor.desired_column = Some(desired);
    }

    pub fn move_down(&mut self, document: &Document) {
        let last_line = document.line_count().saturating_sub(1);
        if self.cursor.line >= last_line {
            self.cursor.column = document.line_length(last_line);
            self.cursor.desired_column = None;
            return;
        }
        let desired = self.cursor.desired_column.unwrap_or(self.cursor.column);
        self.cursor.line += 1;
        self.cursor.column = desired.min(document.line_length(self.cursor.line));
        self.cursor.desired_column = Some(desired);
    }

    pub fn move_left(&mut self, document: &Document) {
        if self.cursor.column > 0 {
            self.cursor.column -= 1;
        } else if self.cursor.line > 0 {
            self.cursor.line -= 1;
            self.cursor.column = document.line_length(self.cursor.line);
        }
        self.cursor.desired_column = None;
    }

    pub fn move_right(&mut self, document: &Document) {
        if self.cursor.column < document.line_length(self.cursor.line) {
            self.cursor.column += 1;
        } else if self.cursor.line + 1 < document.line_count() {
            self.cursor.line += 1;
            self.cursor.column = 0;
        }
        self.cursor.desired_column = None;
    }

    pub fn move_line_start(&mut self) {
        self.cursor.column = 0;
        self.cursor.desired_column = None;
    }

    pub fn move_line_end(&mut self, document: &Document) {
        self.cursor.column = document.line_length(self.cursor.line);
        self.cursor.desired_column = None;
    }

    /// Ensure the cursor is inside the viewport with the configured padding
    pub fn ensure_cursor_visible(&mut self, document: &Document) {
        let total_lines = document.line_count();
        if total_lines <= self.viewport.visible_lines || self.viewport.visible_lines == 0 {
            self.viewport.top_line = 0;
            return;
        }

        let padding = self.scroll_padding;
        let max_top = total_lines - self.viewport.visible_lines;
        let safe_top = self.viewport.top_line + padding;
        let safe_bottom = self.viewport.top_line
            + self
                .viewport
                .visible_lines
                .saturating_sub(padding)
                .saturating_sub(1);

        let line = self.cursor.line;
        if line < safe_top {
            self.viewport.top_line = line.saturating_sub(padding).min(max_top);
        } else if line > safe_bottom {
            self.viewport.top_line =
                (line + padding + 1).saturating_sub(self.viewport.visible_lines).min(max_top);
        }
    }

    /// Word span under the cursor, if any
    ///
    /// A word is a maximal run of word characters on the cursor's line.
    pub fn word_under_cursor(&self, document: &Document) -> Option<(Position, Position)> {
        let line_text = document.get_line(self.cursor.line)?;
        let chars: Vec<char> = line_text.trim_end_matches('\n').chars().collect();
        let col = self.cursor.column;

        // A cursor at the end of a word still counts as "on" it
        let probe = if col < chars.len() && char_type(chars[col]) == CharType::WordChar {
            col
        } else if col > 0 && col <= chars.len() && char_type(chars[col - 1]) == CharType::WordChar {
            col - 1
        } else {
            return None;
        };

        let mut start = probe;
        while start > 0 && char_type(chars[start - 1]) == CharType::WordChar {
            start -= 1;
        }
        let mut end = probe + 1;
        while end < chars.len() && char_type(chars[end]) == CharType::WordChar {
            end += 1;
        }

        Some((
            Position::new(self.cursor.line, start),
            Position::new(self.cursor.line, end),
        ))
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}
