//! Document update functions for text editing and undo/redo

use crate::commands::Cmd;
use crate::messages::DocumentMsg;
use crate::model::{AppModel, EditOperation};
use crate::pairs::{self, Family, Gap};

use super::editor::delete_selection;

/// Handle document messages (text editing, undo/redo)
pub fn update_document(model: &mut AppModel, msg: DocumentMsg) -> Option<Cmd> {
    match msg {
        DocumentMsg::InsertChar(ch) => insert_text(model, &ch.to_string()),

        DocumentMsg::InsertNewline => insert_text(model, "\n"),

        DocumentMsg::DeleteBackward => {
            let cursor_before = model.editor.cursor;

            // Selection takes priority over single-character delete
            if let Some((pos, deleted_text)) = delete_selection(model) {
                let cursor_after = model.editor.cursor;
                model.document_mut().push_edit(EditOperation::Delete {
                    position: pos,
                    text: deleted_text,
                    cursor_before,
                    cursor_after,
                });
                model.ensure_cursor_visible();
                return Some(Cmd::Redraw);
            }

            let pos = model.cursor_buffer_position();
            if pos == 0 {
                return None;
            }
            let deleted_text = model.document().slice_text(pos - 1, pos);
            model.document_mut().buffer.remove(pos - 1..pos);
            model.editor.set_cursor_from_offset(&model.document, pos - 1);

            let cursor_after = model.editor.cursor;
            model.document_mut().push_edit(EditOperation::Delete {
                position: pos - 1,
                text: deleted_text,
                cursor_before,
                cursor_after,
            });

            model.ensure_cursor_visible();
            Some(Cmd::Redraw)
        }

        DocumentMsg::DeleteForward => {
            let cursor_before = model.editor.cursor;

            if let Some((pos, deleted_text)) = delete_selection(model) {
                let cursor_after = model.editor.cursor;
                model.document_mut().push_edit(EditOperation::Delete {
                    position: pos,
                    text: deleted_text,
                    cursor_before,
                    cursor_after,
                });
                model.ensure_cursor_visible();
                return Some(Cmd::Redraw);
            }

            let pos = model.cursor_buffer_position();
            if pos >= model.document().buffer.len_chars() {
                return None;
            }
            let deleted_text = model.document().slice_text(pos, pos + 1);
            model.document_mut().buffer.remove(pos..pos + 1);

            let cursor_after = model.editor.cursor;
            model.document_mut().push_edit(EditOperation::Delete {
                position: pos,
                text: deleted_text,
                cursor_before,
                cursor_after,
            });

            Some(Cmd::Redraw)
        }

        DocumentMsg::Undo => {
            if let Some(edit) = model.document_mut().undo_stack.pop() {
                apply_undo_operation(model, &edit);
                model.document_mut().redo_stack.push(edit);
                model.document_mut().is_modified = true;
                model.editor.clear_selection();
                model.ensure_cursor_visible();
            }
            Some(Cmd::Redraw)
        }

        DocumentMsg::Redo => {
            if let Some(edit) = model.document_mut().redo_stack.pop() {
                apply_redo_operation(model, &edit);
                model.document_mut().undo_stack.push(edit);
                model.document_mut().is_modified = true;
                model.editor.clear_selection();
                model.ensure_cursor_visible();
            }
            Some(Cmd::Redraw)
        }

        DocumentMsg::RemoveEnclosingPair(family) => remove_enclosing_pair(model, family),
    }
}

/// Insert text at the cursor, deleting the selection first if one exists.
///
/// A typed-over selection is recorded as a single Replace so undo is atomic.
fn insert_text(model: &mut AppModel, text: &str) -> Option<Cmd> {
    let cursor_before = model.editor.cursor;
    let char_len = text.chars().count();

    if let Some((pos, deleted_text)) = delete_selection(model) {
        model.document_mut().buffer.insert(pos, text);
        model.editor.set_cursor_from_offset(&model.document, pos + char_len);

        let cursor_after = model.editor.cursor;
        model.document_mut().push_edit(EditOperation::Replace {
            position: pos,
            deleted_text,
            inserted_text: text.to_string(),
            cursor_before,
            cursor_after,
        });
    } else {
        let pos = model.cursor_buffer_position();
        model.document_mut().buffer.insert(pos, text);
        model.editor.set_cursor_from_offset(&model.document, pos + char_len);

        let cursor_after = model.editor.cursor;
        model.document_mut().push_edit(EditOperation::Insert {
            position: pos,
            text: text.to_string(),
            cursor_before,
            cursor_after,
        });
    }

    model.ensure_cursor_visible();
    Some(Cmd::Redraw)
}

// ============================================================================
// Structural Editing
// ============================================================================

/// Delete the two delimiter characters of the nearest enclosing pair.
///
/// Both single-character deletions are computed up front and applied as one
/// undo-grouped batch, higher offset first, so no intermediate state is ever
/// observable and the enclosed content is preserved verbatim. When no
/// balanced pair encloses the gap the buffer and selection are untouched.
fn remove_enclosing_pair(model: &mut AppModel, family: Family) -> Option<Cmd> {
    let (start, end) = model.editor.selection_offsets(&model.document);
    let gap = Gap::new(start, end);
    let buffer = model.document().text();

    let Some(pair) = pairs::find_enclosing(&buffer, gap, family) else {
        tracing::debug!(?family, start = gap.start, end = gap.end, "no enclosing pair");
        return None;
    };

    let spans = pairs::removal_spans(&pair);
    let cursor_before = model.editor.cursor;
    // Endpoint offsets must be taken against the pre-deletion buffer
    let (anchor, head) = selection_endpoint_offsets(model);
    let had_selection = !model.editor.selection.is_empty();
    tracing::debug!(
        open = %pair.opening.descriptor.name,
        open_offset = pair.opening.offset,
        close_offset = pair.closing.offset,
        "removing delimiter pair"
    );

    let mut operations = Vec::with_capacity(spans.len());
    for (span_start, span_end) in spans {
        let deleted = model.document().slice_text(span_start, span_end);
        model.document_mut().buffer.remove(span_start..span_end);
        operations.push(EditOperation::Delete {
            position: span_start,
            text: deleted,
            cursor_before,
            cursor_after: cursor_before,
        });
    }

    // Both delimiter positions are gone; shift the selection endpoints left
    // past each removed character.
    let open_offset = pair.opening.offset;
    let close_offset = pair.closing.offset - 1;
    let remap = |offset: usize| {
        let mut shifted = offset;
        if offset > close_offset {
            shifted -= 1;
        }
        if offset > open_offset {
            shifted -= 1;
        }
        shifted
    };

    if had_selection {
        let new_anchor = remap(anchor);
        let new_head = remap(head);
        model
            .editor
            .select_offsets(&model.document, new_anchor, new_head);
    } else {
        model
            .editor
            .set_cursor_from_offset(&model.document, remap(head));
    }

    let cursor_after = model.editor.cursor;
    model.document_mut().push_edit(EditOperation::Batch {
        operations,
        cursor_before,
        cursor_after,
    });

    model.ensure_cursor_visible();
    Some(Cmd::Redraw)
}

/// Anchor and head of the selection as char offsets, in selection order
fn selection_endpoint_offsets(model: &AppModel) -> (usize, usize) {
    let anchor = model.editor.selection.anchor;
    let head = model.editor.selection.head;
    (
        model.document.cursor_to_offset(anchor.line, anchor.column),
        model.document.cursor_to_offset(head.line, head.column),
    )
}

// ============================================================================
// Undo / Redo
// ============================================================================

/// Apply an undo operation to the model (reverses the edit)
fn apply_undo_operation(model: &mut AppModel, edit: &EditOperation) {
    match edit {
        EditOperation::Insert {
            position,
            text,
            cursor_before,
            ..
        } => {
            model
                .document_mut()
                .buffer
                .remove(*position..*position + text.chars().count());
            model.editor.cursor = *cursor_before;
        }
        EditOperation::Delete {
            position,
            text,
            cursor_before,
            ..
        } => {
            model.document_mut().buffer.insert(*position, text);
            model.editor.cursor = *cursor_before;
        }
        EditOperation::Replace {
            position,
            deleted_text,
            inserted_text,
            cursor_before,
            ..
        } => {
            model
                .document_mut()
                .buffer
                .remove(*position..*position + inserted_text.chars().count());
            model.document_mut().buffer.insert(*position, deleted_text);
            model.editor.cursor = *cursor_before;
        }
        EditOperation::Batch {
            operations,
            cursor_before,
            ..
        } => {
            // Undo in reverse order
            for op in operations.iter().rev() {
                apply_undo_buffer_only(model, op);
            }
            model.editor.cursor = *cursor_before;
        }
    }
}

/// Apply undo to buffer only (for batch operations - cursor handled by the batch)
fn apply_undo_buffer_only(model: &mut AppModel, edit: &EditOperation) {
    match edit {
        EditOperation::Insert { position, text, .. } => {
            model
                .document_mut()
                .buffer
                .remove(*position..*position + text.chars().count());
        }
        EditOperation::Delete { position, text, .. } => {
            model.document_mut().buffer.insert(*position, text);
        }
        EditOperation::Replace {
            position,
            deleted_text,
            inserted_text,
            ..
        } => {
            model
                .document_mut()
                .buffer
                .remove(*position..*position + inserted_text.chars().count());
            model.document_mut().buffer.insert(*position, deleted_text);
        }
        EditOperation::Batch { operations, .. } => {
            for op in operations.iter().rev() {
                apply_undo_buffer_only(model, op);
            }
        }
    }
}

/// Apply a redo operation to the model (re-applies the edit)
fn apply_redo_operation(model: &mut AppModel, edit: &EditOperation) {
    match edit {
        EditOperation::Insert {
            position,
            text,
            cursor_after,
            ..
        } => {
            model.document_mut().buffer.insert(*position, text);
            model.editor.cursor = *cursor_after;
        }
        EditOperation::Delete {
            position,
            text,
            cursor_after,
            ..
        } => {
            model
                .document_mut()
                .buffer
                .remove(*position..*position + text.chars().count());
            model.editor.cursor = *cursor_after;
        }
        EditOperation::Replace {
            position,
            deleted_text,
            inserted_text,
            cursor_after,
            ..
        } => {
            model
                .document_mut()
                .buffer
                .remove(*position..*position + deleted_text.chars().count());
            model.document_mut().buffer.insert(*position, inserted_text);
            model.editor.cursor = *cursor_after;
        }
        EditOperation::Batch {
            operations,
            cursor_after,
            ..
        } => {
            // Redo in application order
            for op in operations.iter() {
                apply_redo_buffer_only(model, op);
            }
            model.editor.cursor = *cursor_after;
        }
    }
}

/// Apply redo to buffer only (for batch operations - cursor handled by the batch)
fn apply_redo_buffer_only(model: &mut AppModel, edit: &EditOperation) {
    match edit {
        EditOperation::Insert { position, text, .. } => {
            model.document_mut().buffer.insert(*position, text);
        }
        EditOperation::Delete { position, text, .. } => {
            model
                .document_mut()
                .buffer
                .remove(*position..*position + text.chars().count());
        }
        EditOperation::Replace {
            position,
            deleted_text,
            inserted_text,
            ..
        } => {
            model
                .document_mut()
                .buffer
                .remove(*position..*position + deleted_text.chars().count());
            model.document_mut().buffer.insert(*position, inserted_text);
        }
        EditOperation::Batch { operations, .. } => {
            for op in operations.iter() {
                apply_redo_buffer_only(model, op);
            }
        }
    }
}
