//! Application model - the complete state of the engine
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod document;
pub mod editor;

pub use document::{Document, EditOperation};
pub use editor::{Cursor, EditorState, Position, Selection, Viewport};

use crate::config::EditorConfig;

/// The complete application model: one document, one editor view, the config
#[derive(Debug, Clone)]
pub struct AppModel {
    /// The document being edited
    pub document: Document,
    /// Cursor, selection, and scroll state
    pub editor: EditorState,
    /// Persisted configuration
    pub config: EditorConfig,
}

impl AppModel {
    /// Create a model around an existing document, applying the config
    pub fn with_document(document: Document, config: EditorConfig) -> Self {
        let mut editor = EditorState::new();
        editor.scroll_padding = config.scroll_padding;
        Self {
            document,
            editor,
            config,
        }
    }

    /// Create a model from initial text with default config
    pub fn from_text(text: &str) -> Self {
        Self::with_document(Document::with_text(text), EditorConfig::default())
    }

    /// Get the document (read-only)
    #[inline]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Get the document (mutable)
    #[inline]
    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    /// Get the editor state (read-only)
    #[inline]
    pub fn editor(&self) -> &EditorState {
        &self.editor
    }

    /// Get the editor state (mutable)
    #[inline]
    pub fn editor_mut(&mut self) -> &mut EditorState {
        &mut self.editor
    }

    /// Get the buffer offset for the current cursor position
    pub fn cursor_buffer_position(&self) -> usize {
        self.editor.cursor_offset(&self.document)
    }

    /// Set cursor position from buffer offset (clears selection)
    pub fn set_cursor_from_position(&mut self, pos: usize) {
        let (line, column) = self.document.offset_to_cursor(pos);
        self.editor.set_cursor(Position::new(line, column));
    }

    /// Ensure cursor is visible in viewport (minimal scroll)
    pub fn ensure_cursor_visible(&mut self) {
        self.editor.ensure_cursor_visible(&self.document);
    }
}
