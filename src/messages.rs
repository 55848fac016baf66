//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::pairs::Family;

/// Direction for cursor movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Editor-specific messages (cursor movement, selection)
#[derive(Debug, Clone)]
pub enum EditorMsg {
    // === Basic Movement ===
    /// Move cursor in a direction
    MoveCursor(Direction),
    /// Move cursor to start of line (Home key)
    MoveCursorLineStart,
    /// Move cursor to end of line (End key)
    MoveCursorLineEnd,
    /// Set cursor to specific position (from mouse click)
    SetCursorPosition { line: usize, column: usize },

    // === Selection Movement (Shift+key) ===
    /// Move cursor with selection (Shift+Arrow)
    MoveCursorWithSelection(Direction),

    // === Selection Commands ===
    /// Select all text (Cmd+A)
    SelectAll,
    /// Select word at cursor (double-click)
    SelectWord,
    /// Select entire line (triple-click)
    SelectLine,
    /// Clear the selection (collapse to cursor)
    ClearSelection,

    // === Structural Selection ===
    /// Select the span enclosed by the nearest pair of delimiters around the
    /// cursor or selection. Repeated invocation toggles between the enclosed
    /// content and the content plus its delimiters.
    SelectEnclosingPair(Family),
}

/// Document-specific messages (text editing, undo/redo)
#[derive(Debug, Clone)]
pub enum DocumentMsg {
    /// Insert a character at cursor
    InsertChar(char),
    /// Insert a newline at cursor
    InsertNewline,
    /// Delete character before cursor (Backspace)
    DeleteBackward,
    /// Delete character at cursor (Delete)
    DeleteForward,
    /// Undo last edit
    Undo,
    /// Redo last undone edit
    Redo,

    // === Structural Editing ===
    /// Delete the two delimiter characters of the nearest enclosing pair,
    /// leaving the enclosed content in place
    RemoveEnclosingPair(Family),
}

/// Top-level message type
#[derive(Debug, Clone)]
pub enum Msg {
    Editor(EditorMsg),
    Document(DocumentMsg),
}
