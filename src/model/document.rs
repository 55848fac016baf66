//! Document model - the text buffer, its edit history, and offset conversion

use anyhow::Context;
use ropey::Rope;
use std::path::PathBuf;

use super::editor::Cursor;

/// Represents an edit operation for undo/redo functionality
#[derive(Debug, Clone)]
pub enum EditOperation {
    Insert {
        position: usize,
        text: String,
        cursor_before: Cursor,
        cursor_after: Cursor,
    },
    Delete {
        position: usize,
        text: String,
        cursor_before: Cursor,
        cursor_after: Cursor,
    },
    /// Replace operation - used when typing over a selection to make undo atomic
    Replace {
        position: usize,
        deleted_text: String,
        inserted_text: String,
        cursor_before: Cursor,
        cursor_after: Cursor,
    },
    /// Batch operation - groups multiple spans into one atomic undo/redo step
    Batch {
        /// Individual operations (applied in order for redo, reverse order for undo)
        operations: Vec<EditOperation>,
        cursor_before: Cursor,
        cursor_after: Cursor,
    },
}

/// Document state - the text buffer and associated file metadata
#[derive(Debug, Clone)]
pub struct Document {
    /// The text buffer
    pub buffer: Rope,
    /// Path to the file on disk (None for in-memory documents)
    pub file_path: Option<PathBuf>,
    /// Whether the buffer has unsaved changes
    pub is_modified: bool,
    /// Undo stack
    pub undo_stack: Vec<EditOperation>,
    /// Redo stack
    pub redo_stack: Vec<EditOperation>,
    /// Revision counter, incremented on each recorded edit
    pub revision: u64,
}

impl Document {
    /// Create a new empty document
    pub fn new() -> Self {
        Self::with_text("")
    }

    /// Create a document with initial text
    pub fn with_text(text: &str) -> Self {
        Self {
            buffer: Rope::from(text),
            file_path: None,
            is_modified: false,
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            revision: 0,
        }
    }

    /// Load a document from a file path
    pub fn from_file(path: PathBuf) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Ok(Self {
            buffer: Rope::from(content),
            file_path: Some(path),
            is_modified: false,
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            revision: 0,
        })
    }

    /// Get the number of lines in the document
    pub fn line_count(&self) -> usize {
        self.buffer.len_lines()
    }

    /// Get a line by index (allocates a String)
    pub fn get_line(&self, line_idx: usize) -> Option<String> {
        if line_idx < self.buffer.len_lines() {
            Some(self.buffer.line(line_idx).to_string())
        } else {
            None
        }
    }

    /// Get the length of a line (excluding newline character)
    pub fn line_length(&self, line_idx: usize) -> usize {
        if line_idx >= self.buffer.len_lines() {
            return 0;
        }
        let line = self.buffer.line(line_idx);
        line.len_chars().saturating_sub(
            if line.len_chars() > 0 && line.chars().last() == Some('\n') {
                1
            } else {
                0
            },
        )
    }

    /// Convert a (line, column) position to a buffer offset
    /// Uses ropey's O(log n) line_to_char method instead of O(n) iteration
    pub fn cursor_to_offset(&self, line: usize, column: usize) -> usize {
        if line >= self.buffer.len_lines() {
            return self.buffer.len_chars();
        }
        let line_start = self.buffer.line_to_char(line);
        line_start + column.min(self.line_length(line))
    }

    /// Convert a buffer offset to (line, column) position
    /// Uses ropey's O(log n) char_to_line method instead of O(n) iteration
    pub fn offset_to_cursor(&self, offset: usize) -> (usize, usize) {
        let clamped = offset.min(self.buffer.len_chars());
        let line = self.buffer.char_to_line(clamped);
        let line_start = self.buffer.line_to_char(line);
        (line, clamped - line_start)
    }

    /// The full buffer as a String
    ///
    /// The pair scanners work over a contiguous string; buffers at editor
    /// scale make this cheap enough per invocation.
    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    /// Text strictly before `offset` (char index)
    pub fn text_before(&self, offset: usize) -> String {
        let clamped = offset.min(self.buffer.len_chars());
        self.buffer.slice(..clamped).to_string()
    }

    /// Text from `offset` (char index) to the end of the buffer
    pub fn text_after(&self, offset: usize) -> String {
        let clamped = offset.min(self.buffer.len_chars());
        self.buffer.slice(clamped..).to_string()
    }

    /// Text covered by a half-open char range
    pub fn slice_text(&self, start: usize, end: usize) -> String {
        let len = self.buffer.len_chars();
        let start = start.min(len);
        let end = end.min(len).max(start);
        self.buffer.slice(start..end).to_string()
    }

    /// Push an edit operation onto the undo stack and clear redo stack
    pub fn push_edit(&mut self, op: EditOperation) {
        self.undo_stack.push(op);
        self.redo_stack.clear();
        self.is_modified = true;
        self.revision = self.revision.wrapping_add(1);
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
