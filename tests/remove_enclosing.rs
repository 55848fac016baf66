//! Tests for deleting the two delimiter characters of an enclosing pair

mod common;

use common::{
    buffer_to_string, selection_offsets, test_model_at_offset, test_model_with_offset_selection,
};
use bracken::messages::{DocumentMsg, EditorMsg, Msg};
use bracken::pairs::Family;
use bracken::update::update;

fn remove(model: &mut bracken::AppModel, family: Family) {
    update(model, Msg::Document(DocumentMsg::RemoveEnclosingPair(family)));
}

// ============================================================================
// Brackets
// ============================================================================

#[test]
fn test_remove_preserves_enclosed_content() {
    let mut model = test_model_with_offset_selection("foo(bar, baz)qux", 4, 12);

    remove(&mut model, Family::Bracket);

    assert_eq!(buffer_to_string(&model), "foobar, bazqux");
}

#[test]
fn test_remove_from_caret() {
    let mut model = test_model_at_offset("foo(bar, baz)qux", 8);

    remove(&mut model, Family::Bracket);

    assert_eq!(buffer_to_string(&model), "foobar, bazqux");
    // Caret shifts left past the removed opener
    assert_eq!(model.cursor_buffer_position(), 7);
}

#[test]
fn test_remove_targets_innermost_pair() {
    let mut model = test_model_at_offset("(a(b)c)", 3);

    remove(&mut model, Family::Bracket);

    assert_eq!(buffer_to_string(&model), "(abc)");
}

#[test]
fn test_remove_keeps_selection_over_content() {
    let mut model = test_model_with_offset_selection("foo(bar, baz)qux", 4, 12);

    remove(&mut model, Family::Bracket);

    assert_eq!(selection_offsets(&model), (3, 11));
    assert_eq!(model.document.slice_text(3, 11), "bar, baz");
}

#[test]
fn test_remove_adjacent_pair() {
    let mut model = test_model_at_offset("a()b", 2);

    remove(&mut model, Family::Bracket);

    assert_eq!(buffer_to_string(&model), "ab");
    assert_eq!(model.cursor_buffer_position(), 1);
}

// ============================================================================
// Quotes
// ============================================================================

#[test]
fn test_remove_quotes_keeps_string_content() {
    let mut model = test_model_at_offset("say \"hello\" now", 7);

    remove(&mut model, Family::Quote);

    assert_eq!(buffer_to_string(&model), "say hello now");
}

#[test]
fn test_remove_quote_family_leaves_brackets_alone() {
    let mut model = test_model_at_offset("(\"a\")", 2);

    remove(&mut model, Family::Quote);

    assert_eq!(buffer_to_string(&model), "(a)");
}

// ============================================================================
// Failure modes
// ============================================================================

#[test]
fn test_remove_without_enclosing_pair_is_a_no_op() {
    let mut model = test_model_at_offset("no delimiters here", 5);
    let selection_before = selection_offsets(&model);

    remove(&mut model, Family::Bracket);
    remove(&mut model, Family::Quote);

    assert_eq!(buffer_to_string(&model), "no delimiters here");
    assert_eq!(selection_offsets(&model), selection_before);
    assert!(model.document.undo_stack.is_empty());
}

#[test]
fn test_remove_with_unbalanced_text_is_a_no_op() {
    let mut model = test_model_at_offset("(unclosed body", 6);

    remove(&mut model, Family::Bracket);

    assert_eq!(buffer_to_string(&model), "(unclosed body");
    assert!(model.document.undo_stack.is_empty());
}

// ============================================================================
// Undo / redo
// ============================================================================

#[test]
fn test_remove_undoes_as_one_step() {
    let mut model = test_model_at_offset("foo(bar, baz)qux", 8);

    remove(&mut model, Family::Bracket);
    assert_eq!(buffer_to_string(&model), "foobar, bazqux");

    update(&mut model, Msg::Document(DocumentMsg::Undo));
    assert_eq!(buffer_to_string(&model), "foo(bar, baz)qux");
    assert_eq!(model.cursor_buffer_position(), 8);
}

#[test]
fn test_remove_redo_reapplies_both_deletions() {
    let mut model = test_model_at_offset("(a(b)c)", 3);

    remove(&mut model, Family::Bracket);
    update(&mut model, Msg::Document(DocumentMsg::Undo));
    update(&mut model, Msg::Document(DocumentMsg::Redo));

    assert_eq!(buffer_to_string(&model), "(abc)");
}

// ============================================================================
// Select-then-remove round trip
// ============================================================================

#[test]
fn test_select_then_remove_round_trip() {
    let cases = [
        ("foo(bar, baz)qux", 8, Family::Bracket),
        ("(a(b)c)", 3, Family::Bracket),
        ("say \"hello\" now", 7, Family::Quote),
        ("[a {b (c) d} e]", 10, Family::Bracket),
    ];

    for (text, offset, family) in cases {
        let mut selected = test_model_at_offset(text, offset);
        update(
            &mut selected,
            Msg::Editor(EditorMsg::SelectEnclosingPair(family)),
        );
        let (sel_start, sel_end) = selection_offsets(&selected);
        let selected_text = selected.document.slice_text(sel_start, sel_end);

        // Removing from the original gap deletes exactly two characters and
        // leaves the span that select would have chosen untouched
        let mut removed = test_model_at_offset(text, offset);
        update(
            &mut removed,
            Msg::Document(DocumentMsg::RemoveEnclosingPair(family)),
        );
        let after = buffer_to_string(&removed);

        assert_eq!(after.chars().count(), text.chars().count() - 2, "{text}");
        assert!(after.contains(&selected_text), "{text}");
    }
}
