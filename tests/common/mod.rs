//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use bracken::config::EditorConfig;
use bracken::model::{AppModel, Cursor, Document, Position, Selection};

/// Create a test model with given text and cursor position
pub fn test_model(text: &str, line: usize, column: usize) -> AppModel {
    let mut model = AppModel::with_document(Document::with_text(text), EditorConfig::default());
    model.editor.set_cursor(Position::new(line, column));
    model
}

/// Create a test model with the caret at an absolute char offset
pub fn test_model_at_offset(text: &str, offset: usize) -> AppModel {
    let mut model = AppModel::from_text(text);
    model.set_cursor_from_position(offset);
    model
}

/// Create a test model with given text and a selection (anchor to head)
/// The cursor will be at the head position
pub fn test_model_with_selection(
    text: &str,
    anchor_line: usize,
    anchor_col: usize,
    head_line: usize,
    head_col: usize,
) -> AppModel {
    let mut model = AppModel::with_document(Document::with_text(text), EditorConfig::default());
    model.editor.cursor = Cursor::at(head_line, head_col);
    model.editor.selection = Selection::from_anchor_head(
        Position::new(anchor_line, anchor_col),
        Position::new(head_line, head_col),
    );
    model
}

/// Create a test model selecting an absolute char-offset range
pub fn test_model_with_offset_selection(text: &str, start: usize, end: usize) -> AppModel {
    let mut model = AppModel::with_document(Document::with_text(text), EditorConfig::default());
    let document = model.document.clone();
    model.editor.select_offsets(&document, start, end);
    model
}

/// Helper to get buffer content as string
pub fn buffer_to_string(model: &AppModel) -> String {
    model.document.buffer.to_string()
}

/// The selection as a half-open char-offset range
pub fn selection_offsets(model: &AppModel) -> (usize, usize) {
    model.editor.selection_offsets(&model.document)
}
