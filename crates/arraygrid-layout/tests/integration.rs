//! Integration tests for arraygrid-layout.
//!
//! These drive whole passes through the scripted host and check the list,
//! the stored geometry and what was painted.

use arraygrid_core::{CursorIcon, DrawCommand, Point, WidgetId};
use arraygrid_layout::{
    ColumnCount, GridConfig, GridFrame, LayoutEngine, ResizePhase, RowAction, StateStore, TrackedVec,
};
use arraygrid_test::{GridFixture, GridHarness, ScriptedHost, TextCells};
use proptest::prelude::*;

fn abcd() -> GridHarness<char> {
    let mut grid = GridHarness::new(vec!['A', 'B', 'C', 'D'], 3);
    grid.settle();
    grid
}

// =============================================================================
// Layout
// =============================================================================

#[test]
fn test_four_elements_three_wide() {
    let mut grid = abcd();
    grid.idle();

    let state = grid.state().unwrap();
    assert_eq!(state.row_heights().len(), 2);
    assert_eq!(state.column_widths().len(), 3);

    let drawn: Vec<usize> = grid.drawn().iter().map(|cell| cell.index).collect();
    assert_eq!(drawn, vec![0, 1, 2, 3]);
    grid.assert_painted("+");
    assert_eq!(grid.host().recording().texts().filter(|t| *t == "+").count(), 1);
}

#[test]
fn test_header_labels_columns() {
    let mut grid = abcd();
    grid.idle();
    let texts: Vec<&str> = grid.host().recording().texts().take(3).collect();
    assert_eq!(texts, vec!["0", "1", "2"]);
}

#[test]
fn test_content_rect_is_padded() {
    let mut grid = abcd();
    grid.idle();
    let first = &grid.drawn()[0];
    assert_eq!(first.rect.x, 2.0);
    assert_eq!(first.rect.y, 22.0);
    assert_eq!(first.rect.width, 96.0);
    assert_eq!(first.label, None);
    assert_eq!(first.label_width, 48.0);
}

#[test]
fn test_nested_content_indented_and_labelled() {
    let cells = TextCells::new().with_nested(|c: &char| c.is_lowercase().then(|| format!("{c}-fields")));
    let mut grid = GridHarness::new(vec!['a', 'B'], 2).with_cells(cells);
    grid.settle();

    let nested = &grid.drawn()[0];
    assert_eq!(nested.label.as_deref(), Some("a-fields"));
    assert_eq!(nested.rect.x, 12.0);
    assert_eq!(nested.rect.width, 86.0);

    let plain = &grid.drawn()[1];
    assert_eq!(plain.label, None);
    assert_eq!(plain.rect.x, 102.0);
}

#[test]
fn test_tall_element_grows_row_and_requests_relayout() {
    let mut grid = GridHarness::new(vec![10.0_f32, 60.0, 10.0], 2).with_measure(|h: &f32| *h);
    let first = grid.idle();
    assert!(first.height_changed);
    assert_eq!(grid.host().pending_relayouts(), 1);
    assert_eq!(grid.state().unwrap().row_heights(), &[64.0, 20.0]);
    assert_eq!(grid.preferred_height(), Some(20.0 + 64.0 + 20.0 + 10.0));
}

#[test]
fn test_column_change_resets_geometry() {
    let mut grid = abcd();
    grid.drag_boundary(0, 160.0);
    grid.assert_column_widths(&[160.0, 100.0, 100.0]);

    grid.set_columns(2);
    let outcome = grid.idle();
    assert!(outcome.reset);
    grid.assert_column_widths(&[100.0, 100.0]);
    assert_eq!(grid.state().unwrap().row_heights().len(), 3);
}

#[test]
fn test_zero_columns_clamped_to_one() {
    let mut grid = GridHarness::new(vec!['A', 'B'], 0);
    grid.settle();
    grid.assert_column_widths(&[100.0]);
    assert_eq!(grid.state().unwrap().row_heights().len(), 3);
}

#[test]
fn test_origin_follows_host() {
    let mut grid = abcd();
    grid.set_origin(Point::new(40.0, 300.0));
    grid.idle();
    assert_eq!(grid.state().unwrap().origin(), Point::new(40.0, 300.0));
    assert_eq!(grid.drawn()[0].rect.x, 42.0);
}

// =============================================================================
// Row actions
// =============================================================================

#[test]
fn test_delete_removes_and_shifts() {
    let mut grid = abcd();
    let outcome = grid.context_click(1, Some(RowAction::Delete));
    assert!(outcome.event_consumed);
    grid.assert_items(&['A', 'C', 'D']);
    assert!(grid.list().is_changed());

    let menu = &grid.host().menus()[0];
    assert_eq!(menu.index, 1);
    assert_eq!(menu.actions, RowAction::ALL.to_vec());
}

#[test]
fn test_duplicate_inserts_copy() {
    let mut grid = abcd();
    grid.context_click(2, Some(RowAction::Duplicate));
    grid.assert_items(&['A', 'B', 'C', 'C', 'D']);
}

#[test]
fn test_dismissed_menu_changes_nothing() {
    let mut grid = abcd();
    grid.list_mut().take_changed();
    let outcome = grid.context_click(0, None);
    assert!(outcome.event_consumed);
    grid.assert_items(&['A', 'B', 'C', 'D']);
    assert!(!grid.list().is_changed());
}

#[test]
fn test_delete_last_row_shrinks_height() {
    let mut grid = GridHarness::new(vec!['A', 'B', 'C'], 3);
    grid.settle();
    assert_eq!(grid.preferred_height(), Some(70.0));

    grid.context_click(2, Some(RowAction::Delete));
    grid.settle();
    assert_eq!(grid.preferred_height(), Some(50.0));
}

// =============================================================================
// Append
// =============================================================================

#[test]
fn test_append_inserts_default_at_end() {
    let mut grid = GridHarness::new(vec![String::from("x")], 2);
    grid.settle();
    let outcome = grid.click_append();
    assert!(outcome.event_consumed);
    grid.assert_items(&[String::from("x"), String::new()]);
}

#[test]
fn test_append_on_full_row_adds_row() {
    let mut grid = GridHarness::new(vec!['A', 'B'], 2);
    grid.settle();
    assert_eq!(grid.cell_rect(2).map(|r| r.y), Some(40.0));

    grid.click_append();
    grid.settle();
    assert_eq!(grid.state().unwrap().row_heights().len(), 2);
    assert!(grid.append_button().is_some());
}

#[test]
fn test_append_pass_paints_single_append_button() {
    let mut grid = abcd();
    grid.click_append();
    grid.assert_items(&['A', 'B', 'C', 'D', '\0']);
    assert_eq!(grid.host().recording().texts().filter(|t| *t == "+").count(), 1);

    grid.settle();
    grid.idle();
    assert_eq!(grid.host().recording().texts().filter(|t| *t == "+").count(), 1);
}

#[test]
fn test_click_beside_append_button_ignored() {
    let mut grid = abcd();
    let cell = grid.cell_rect(4).unwrap();
    grid.press(Point::new(cell.x + 10.0, cell.center().y));
    assert_eq!(grid.items().len(), 4);
}

// =============================================================================
// Resizing
// =============================================================================

#[test]
fn test_drag_resizes_column() {
    let mut grid = abcd();
    let outcome = grid.drag_boundary(1, 260.0);
    assert!(!outcome.event_consumed);
    grid.assert_column_widths(&[100.0, 160.0, 100.0]);
    assert_eq!(grid.state().unwrap().phase(), ResizePhase::Idle);
}

#[test]
fn test_drag_below_min_width_clamps() {
    let mut grid = abcd();
    grid.drag_boundary(0, 40.0);
    grid.assert_column_widths(&[100.0, 100.0, 100.0]);
}

#[test]
fn test_resize_state_across_passes() {
    let mut grid = abcd();
    let y = 5.0;

    let pressed = grid.press(Point::new(100.0, y));
    assert!(pressed.event_consumed);
    assert_eq!(grid.state().unwrap().phase(), ResizePhase::Resizing(0));
    assert!(grid.list().is_changed());

    // Wide active handle keeps the drag even though the pointer left the idle strip.
    grid.drag(Point::new(120.0, y));
    grid.drag(Point::new(140.0, y));
    grid.assert_column_widths(&[140.0, 100.0, 100.0]);

    grid.list_mut().take_changed();
    grid.release(Point::new(500.0, 500.0));
    assert_eq!(grid.state().unwrap().resizing(), None);
    assert!(grid.list().is_changed());
}

#[test]
fn test_handles_registered_as_cursor_regions() {
    let mut grid = abcd();
    grid.idle();
    let regions = grid
        .host()
        .commands()
        .iter()
        .filter(|cmd| {
            matches!(
                cmd,
                DrawCommand::Cursor {
                    cursor: CursorIcon::ResizeHorizontal,
                    ..
                }
            )
        })
        .count();
    assert_eq!(regions, 3);
}

#[test]
fn test_press_in_cell_body_does_not_resize() {
    let mut grid = abcd();
    grid.press(Point::new(50.0, 30.0));
    assert_eq!(grid.state().unwrap().resizing(), None);
}

// =============================================================================
// Relayout
// =============================================================================

#[test]
fn test_relayout_not_reissued_while_pending() {
    let mut grid = GridHarness::new(vec!['A'], 1);
    grid.idle();
    assert_eq!(grid.host().pending_relayouts(), 1);

    grid.click_append();
    let outcome = grid.idle();
    assert!(outcome.height_changed);
    assert!(!outcome.relayout_scheduled);
    assert_eq!(grid.host().pending_relayouts(), 1);

    grid.host_mut().run_relayouts();
    grid.click_append();
    let outcome = grid.idle();
    assert!(outcome.relayout_scheduled);
    assert_eq!(grid.host().pending_relayouts(), 1);
}

#[test]
fn test_second_grid_joins_pending_relayout() {
    let engine = LayoutEngine::default();
    let mut store = StateStore::new();
    let mut host = ScriptedHost::new();
    let mut cells = TextCells::new();
    let measure = |_: &char| 10.0_f32;
    let first = WidgetId::from_path("panel", "first");
    let second = WidgetId::from_path("panel", "second");
    let mut a = TrackedVec::new(vec!['A', 'B']);
    let mut b = TrackedVec::new(vec!['C', 'D', 'E']);

    let frame_a = GridFrame::new(first, Point::ORIGIN, ColumnCount::ONE);
    let frame_b = GridFrame::new(second, Point::new(0.0, 200.0), ColumnCount::ONE);
    let outcome = engine.pass(&mut store, frame_a, &mut a, &measure, &mut cells, &mut host);
    assert!(outcome.relayout_scheduled);
    let outcome = engine.pass(&mut store, frame_b, &mut b, &measure, &mut cells, &mut host);
    assert!(outcome.height_changed);
    assert!(!outcome.relayout_scheduled);

    assert_eq!(host.pending_relayouts(), 1);
    assert_eq!(host.run_relayouts(), vec![first, second]);
    assert!(!engine.relayout_pending());
}

#[test]
fn test_steady_state_does_not_relayout() {
    let mut grid = abcd();
    for _ in 0..3 {
        let outcome = grid.idle();
        assert!(!outcome.height_changed);
        assert!(!outcome.relayout_scheduled);
    }
    assert_eq!(grid.host().pending_relayouts(), 0);
}

#[test]
fn test_evicted_state_starts_fresh() {
    let mut grid = abcd();
    grid.drag_boundary(2, 380.0);
    let id = grid.id();
    assert!(grid.store_mut().evict(id).is_some());
    let outcome = grid.idle();
    assert!(outcome.reset);
    grid.assert_column_widths(&[100.0, 100.0, 100.0]);
}

// =============================================================================
// Fixtures & snapshots
// =============================================================================

#[test]
fn test_fixture_multiline_rows() {
    let fixture = GridFixture::from_toml_str(
        r#"
        columns = 2
        items = ["one", "two\nlines", "three"]

        [config]
        min_height = 18.0
        "#,
    )
    .unwrap();
    let mut grid = fixture.harness().unwrap();
    grid.settle();
    assert_eq!(grid.state().unwrap().row_heights(), &[36.0, 20.0]);
}

#[test]
fn test_snapshot_is_stable_between_idle_passes() {
    let mut grid = abcd();
    grid.idle();
    let first = grid.host().snapshot_json().unwrap();
    grid.idle();
    let second = grid.host().snapshot_json().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_custom_config_sizes() {
    let config = GridConfig {
        header_height: 0.0,
        bottom_padding: 0.0,
        ..GridConfig::default()
    };
    let mut grid = GridHarness::new(vec!['A'], 1).with_config(config);
    grid.settle();
    assert_eq!(grid.preferred_height(), Some(40.0));
}

proptest! {
    #[test]
    fn prop_dragging_never_below_min_width(targets in proptest::collection::vec(-200.0f32..600.0, 1..6)) {
        let mut grid = abcd();
        grid.press(Point::new(100.0, 5.0));
        for x in targets {
            grid.drag(Point::new(x, 5.0));
        }
        grid.release(Point::new(0.0, 0.0));
        let widths = grid.state().unwrap().column_widths();
        prop_assert!(widths.iter().all(|w| *w >= 100.0));
    }

    #[test]
    fn prop_append_count_matches_clicks(clicks in 0usize..6, columns in 1i64..5) {
        let mut grid = GridHarness::new(Vec::<u8>::new(), columns);
        grid.settle();
        for _ in 0..clicks {
            grid.click_append();
            grid.settle();
        }
        prop_assert_eq!(grid.items().len(), clicks);
    }
}
