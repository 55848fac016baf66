//! Editor update functions for cursor movement and selection.

use crate::commands::Cmd;
use crate::messages::{Direction, EditorMsg};
use crate::model::{AppModel, Cursor, Position, Selection};
use crate::pairs::{self, Family, Gap};

/// Handle editor messages (cursor movement, selection)
pub fn update_editor(model: &mut AppModel, msg: EditorMsg) -> Option<Cmd> {
    match msg {
        EditorMsg::MoveCursor(direction) => {
            match direction {
                Direction::Up => model.editor.move_up(&model.document),
                Direction::Down => model.editor.move_down(&model.document),
                Direction::Left => model.editor.move_left(&model.document),
                Direction::Right => model.editor.move_right(&model.document),
            }
            model.editor.clear_selection();
            model.ensure_cursor_visible();
            Some(Cmd::Redraw)
        }

        EditorMsg::MoveCursorLineStart => {
            model.editor.move_line_start();
            model.editor.clear_selection();
            model.ensure_cursor_visible();
            Some(Cmd::Redraw)
        }

        EditorMsg::MoveCursorLineEnd => {
            model.editor.move_line_end(&model.document);
            model.editor.clear_selection();
            model.ensure_cursor_visible();
            Some(Cmd::Redraw)
        }

        EditorMsg::SetCursorPosition { line, column } => {
            let line = line.min(model.document().line_count().saturating_sub(1));
            let column = column.min(model.document().line_length(line));
            model.editor.set_cursor(Position::new(line, column));
            model.ensure_cursor_visible();
            Some(Cmd::Redraw)
        }

        EditorMsg::MoveCursorWithSelection(direction) => {
            match direction {
                Direction::Up => model.editor.move_up(&model.document),
                Direction::Down => model.editor.move_down(&model.document),
                Direction::Left => model.editor.move_left(&model.document),
                Direction::Right => model.editor.move_right(&model.document),
            }
            let head = model.editor.cursor.to_position();
            model.editor.selection.extend_to(head);
            model.ensure_cursor_visible();
            Some(Cmd::Redraw)
        }

        EditorMsg::SelectAll => {
            let end = model.document().buffer.len_chars();
            model.editor.select_offsets(&model.document, 0, end);
            Some(Cmd::Redraw)
        }

        EditorMsg::SelectWord => {
            if let Some((start, end)) = model.editor.word_under_cursor(&model.document) {
                model.editor.selection = Selection::from_anchor_head(start, end);
                model.editor.cursor = Cursor::at(end.line, end.column);
            }
            Some(Cmd::Redraw)
        }

        EditorMsg::SelectLine => {
            let line = model.editor.cursor.line;
            let start = model.document().cursor_to_offset(line, 0);
            let end = if line + 1 < model.document().line_count() {
                model.document().cursor_to_offset(line + 1, 0)
            } else {
                model.document().buffer.len_chars()
            };
            model.editor.select_offsets(&model.document, start, end);
            Some(Cmd::Redraw)
        }

        EditorMsg::ClearSelection => {
            model.editor.clear_selection();
            Some(Cmd::Redraw)
        }

        EditorMsg::SelectEnclosingPair(family) => select_enclosing_pair(model, family),
    }
}

// ============================================================================
// Structural Selection
// ============================================================================

/// Select the span enclosed by the nearest pair of `family` delimiters.
///
/// Repeated invocation toggles between the enclosed content and the content
/// plus the delimiters themselves. When no balanced pair encloses the gap the
/// buffer and selection are left untouched.
fn select_enclosing_pair(model: &mut AppModel, family: Family) -> Option<Cmd> {
    let (start, end) = model.editor.selection_offsets(&model.document);
    let gap = Gap::new(start, end);
    let buffer = model.document().text();

    let Some(pair) = pairs::find_enclosing(&buffer, gap, family) else {
        tracing::debug!(?family, start = gap.start, end = gap.end, "no enclosing pair");
        return None;
    };

    let (new_start, new_end) = pairs::select_span(&pair, gap);
    tracing::debug!(
        open = %pair.opening.descriptor.name,
        new_start,
        new_end,
        "selecting enclosed span"
    );

    model.editor.select_offsets(&model.document, new_start, new_end);
    model.ensure_cursor_visible();
    Some(Cmd::Redraw)
}

// ============================================================================
// Shared helpers
// ============================================================================

/// Delete the selected text, if any.
///
/// Returns the deletion start offset and the removed text so callers can
/// record the edit. Moves the cursor to the selection start and collapses the
/// selection. Does not touch the undo stack itself.
pub(crate) fn delete_selection(model: &mut AppModel) -> Option<(usize, String)> {
    if model.editor.selection.is_empty() {
        return None;
    }

    let (start_offset, end_offset) = model.editor.selection_offsets(&model.document);
    let deleted_text = model.document().slice_text(start_offset, end_offset);

    model.document_mut().buffer.remove(start_offset..end_offset);
    model.editor.set_cursor_from_offset(&model.document, start_offset);

    Some((start_offset, deleted_text))
}
