use super::*;
use crate::draw::{BLACK, BLUE, Canvas, Color, GRAY, RED, Shading, WHITE};
use crate::input::{MouseButton, Tool};
use crate::util::Rect;

fn create_test_input_state() -> InputState {
    InputState::with_defaults(
        60,                  // width
        60,                  // height
        WHITE,               // background
        RED,                 // color
        1,                   // pen_size
        Tool::Pencil,        // tool
        Shading::default(),  // shading
        0,                   // max_undo_depth
    )
}

fn drag(state: &mut InputState, from: (i32, i32), to: (i32, i32)) {
    state.on_mouse_press(MouseButton::Left, from.0, from.1);
    state.on_mouse_motion(to.0, to.1);
    state.on_mouse_release(MouseButton::Left, to.0, to.1);
}

fn count(canvas: &Canvas, color: Color) -> usize {
    canvas.pixels().iter().filter(|&&p| p == color).count()
}

#[test]
fn test_pencil_press_stamps_dot_and_checkpoints() {
    let mut state = create_test_input_state();
    state.on_mouse_press(MouseButton::Left, 5, 5);

    assert_eq!(state.canvas.get(5, 5), Some(RED));
    assert_eq!(state.history.len(), 1);
    assert!(state.is_gesture_active());
}

#[test]
fn test_pencil_drag_paints_connected_stroke() {
    let mut state = create_test_input_state();
    state.on_mouse_press(MouseButton::Left, 2, 2);
    state.on_mouse_motion(12, 2);
    state.on_mouse_motion(12, 8);
    state.on_mouse_release(MouseButton::Left, 12, 8);

    for x in 2..=12 {
        assert_eq!(state.canvas.get(x, 2), Some(RED), "gap at ({x}, 2)");
    }
    for y in 2..=8 {
        assert_eq!(state.canvas.get(12, y), Some(RED), "gap at (12, {y})");
    }
    assert!(matches!(state.state, DrawingState::Idle));
    assert_eq!(state.history.len(), 1);
}

#[test]
fn test_thick_pencil_uses_pen_size() {
    let mut state = create_test_input_state();
    state.set_pen_size(6);
    drag(&mut state, (20, 20), (30, 20));

    assert_eq!(state.canvas.get(25, 23), Some(RED));
    assert_eq!(state.canvas.get(25, 27), Some(WHITE));
}

#[test]
fn test_eraser_paints_background() {
    let mut state = create_test_input_state();
    state.canvas.fill(BLACK);
    state.set_tool(Tool::Eraser);
    drag(&mut state, (0, 0), (9, 0));

    for x in 0..=9 {
        assert_eq!(state.canvas.get(x, 0), Some(WHITE));
    }
    assert_eq!(state.canvas.get(0, 1), Some(BLACK));
}

#[test]
fn test_shape_preview_does_not_touch_canvas() {
    let mut state = create_test_input_state();
    state.set_tool(Tool::Rectangle);
    state.on_mouse_press(MouseButton::Left, 10, 10);
    state.on_mouse_motion(30, 30);
    state.on_mouse_motion(40, 40);

    assert_eq!(count(&state.canvas, WHITE), 60 * 60);
    match state.preview() {
        Some(Preview::Shape(shape)) => {
            let mut scratch = Canvas::new(60, 60, WHITE);
            shape.render(&mut scratch);
            assert_eq!(scratch.get(40, 40), Some(RED));
            assert_eq!(scratch.get(30, 30), Some(WHITE));
        }
        other => panic!("expected shape preview, got {other:?}"),
    }

    state.on_mouse_release(MouseButton::Left, 40, 40);
    assert_eq!(state.canvas.get(10, 10), Some(RED));
    assert_eq!(state.canvas.get(40, 40), Some(RED));
    assert_eq!(state.canvas.get(30, 30), Some(WHITE));
    assert!(state.preview().is_none());
}

#[test]
fn test_rectangle_then_fill_paints_interior_only() {
    let mut state = create_test_input_state();
    state.set_color(Some(BLACK));
    state.set_tool(Tool::Rectangle);
    drag(&mut state, (10, 10), (50, 50));

    state.set_color(Some(RED));
    state.set_tool(Tool::Fill);
    state.on_mouse_press(MouseButton::Left, 30, 30);
    state.on_mouse_release(MouseButton::Left, 30, 30);

    assert_eq!(count(&state.canvas, RED), 39 * 39);
    for y in 0..60 {
        for x in 0..60 {
            let inside = (11..=49).contains(&x) && (11..=49).contains(&y);
            assert_eq!(state.canvas.get(x, y) == Some(RED), inside, "({x}, {y})");
        }
    }
}

#[test]
fn test_noop_fill_still_checkpoints() {
    let mut state = create_test_input_state();
    state.set_color(Some(WHITE));
    state.set_tool(Tool::Fill);
    let before = state.canvas.clone();

    state.on_mouse_press(MouseButton::Left, 5, 5);
    state.on_mouse_release(MouseButton::Left, 5, 5);

    assert_eq!(state.canvas, before);
    assert_eq!(state.history.len(), 1);
}

#[test]
fn test_undo_restores_state_before_each_gesture() {
    let mut state = create_test_input_state();
    let blank = state.canvas.clone();

    drag(&mut state, (0, 0), (10, 0));
    let after_first = state.canvas.clone();
    state.set_tool(Tool::Circle);
    drag(&mut state, (30, 30), (40, 30));
    assert_ne!(state.canvas, after_first);

    assert!(state.undo());
    assert_eq!(state.canvas, after_first);
    assert!(state.undo());
    assert_eq!(state.canvas, blank);
    assert!(!state.undo());
    assert_eq!(state.canvas, blank);
}

#[test]
fn test_events_while_idle_are_ignored() {
    let mut state = create_test_input_state();
    state.set_tool(Tool::Line);
    state.on_mouse_motion(10, 10);
    state.on_mouse_release(MouseButton::Left, 20, 20);

    assert_eq!(count(&state.canvas, WHITE), 60 * 60);
    assert!(state.history.is_empty());
}

#[test]
fn test_right_click_cancels_shape() {
    let mut state = create_test_input_state();
    state.set_tool(Tool::Oval);
    state.on_mouse_press(MouseButton::Left, 5, 5);
    state.on_mouse_motion(25, 25);
    state.on_mouse_press(MouseButton::Right, 25, 25);
    state.on_mouse_release(MouseButton::Left, 25, 25);

    assert!(matches!(state.state, DrawingState::Idle));
    assert_eq!(count(&state.canvas, WHITE), 60 * 60);
}

#[test]
fn test_cursor_marquee_never_mutates_pixels() {
    let mut state = create_test_input_state();
    state.canvas.set(15, 15, BLUE);
    let before = state.canvas.clone();
    state.set_tool(Tool::Cursor);

    state.on_mouse_press(MouseButton::Left, 10, 10);
    state.on_mouse_motion(20, 25);
    assert_eq!(
        state.preview(),
        Some(Preview::Marquee(Rect::new(10, 10, 10, 15).unwrap()))
    );
    state.on_mouse_release(MouseButton::Left, 20, 25);

    assert_eq!(state.canvas, before);
    assert!(state.selection.is_none());
}

#[test]
fn test_select_and_move_lifts_then_drops_with_drag_delta() {
    let mut state = create_test_input_state();
    state.canvas.set(12, 12, BLUE);
    state.set_tool(Tool::SelectAndMove);

    drag(&mut state, (10, 10), (20, 20));
    let selection = state.selection.as_ref().expect("selection lifted");
    assert_eq!(selection.origin, Rect::new(10, 10, 10, 10).unwrap());
    assert_eq!(state.canvas.get(12, 12), Some(WHITE));

    // grab anywhere and drag by (+15, +5)
    state.on_mouse_press(MouseButton::Left, 14, 14);
    state.on_mouse_motion(29, 19);
    match state.preview() {
        Some(Preview::FloatingSelection { x, y, .. }) => assert_eq!((x, y), (25, 15)),
        other => panic!("expected floating selection, got {other:?}"),
    }
    state.on_mouse_release(MouseButton::Left, 29, 19);

    assert!(state.selection.is_none());
    assert_eq!(state.canvas.get(27, 17), Some(BLUE));
    assert_eq!(count(&state.canvas, BLUE), 1);
}

#[test]
fn test_zero_area_marquee_selects_nothing() {
    let mut state = create_test_input_state();
    state.set_tool(Tool::SelectAndMove);
    state.on_mouse_press(MouseButton::Left, 10, 10);
    state.on_mouse_release(MouseButton::Left, 10, 10);

    assert!(state.selection.is_none());
    assert_eq!(count(&state.canvas, WHITE), 60 * 60);
}

#[test]
fn test_undo_discards_floating_selection() {
    let mut state = create_test_input_state();
    state.canvas.set(12, 12, BLUE);
    let before = state.canvas.clone();
    state.set_tool(Tool::SelectAndMove);
    drag(&mut state, (10, 10), (20, 20));
    assert!(state.selection.is_some());

    assert!(state.undo());
    assert!(state.selection.is_none());
    assert_eq!(state.canvas, before);
}

#[test]
fn test_switching_tool_drops_selection_in_place() {
    let mut state = create_test_input_state();
    state.canvas.set(12, 12, BLUE);
    let before = state.canvas.clone();
    state.set_tool(Tool::SelectAndMove);
    drag(&mut state, (10, 10), (20, 20));

    state.set_tool(Tool::Pencil);
    assert!(state.selection.is_none());
    assert_eq!(state.canvas, before);
}

#[test]
fn test_set_tool_cancels_gesture() {
    let mut state = create_test_input_state();
    state.set_tool(Tool::Line);
    state.on_mouse_press(MouseButton::Left, 0, 0);
    state.set_tool(Tool::Rectangle);

    assert!(matches!(state.state, DrawingState::Idle));
    assert_eq!(state.current_tool, Tool::Rectangle);
}

#[test]
fn test_rotate_selection_without_selection_is_noop() {
    let mut state = create_test_input_state();
    let before = state.canvas.clone();

    assert!(!state.rotate_selection());
    assert_eq!(state.canvas, before);
    assert!(state.history.is_empty());
}

#[test]
fn test_rotate_selection_rotates_in_place() {
    let mut state = create_test_input_state();
    // horizontal bar at the top of a 4x4 region
    for x in 10..14 {
        state.canvas.set(x, 10, BLUE);
    }
    state.set_tool(Tool::SelectAndMove);
    drag(&mut state, (10, 10), (14, 14));

    assert!(state.rotate_selection());
    assert!(state.selection.is_none());
    // the bar now runs down the right edge of the region
    for y in 10..14 {
        assert_eq!(state.canvas.get(13, y), Some(BLUE));
    }
    assert_eq!(state.canvas.get(10, 10), Some(WHITE));
}

#[test]
fn test_undo_after_selection_move_restores_pixels_in_place() {
    let mut state = create_test_input_state();
    state.canvas.set(12, 12, BLUE);
    state.set_tool(Tool::SelectAndMove);
    drag(&mut state, (10, 10), (20, 20));
    let lifted = state.canvas.clone();

    drag(&mut state, (14, 14), (29, 19));
    assert_eq!(state.canvas.get(27, 17), Some(BLUE));

    assert!(state.undo());
    assert!(state.selection.is_none());
    assert_eq!(count(&state.canvas, BLUE), 1);
    assert_eq!(state.canvas.get(12, 12), Some(BLUE));
    assert_eq!(state.canvas.get(27, 17), Some(WHITE));

    // one more undo lands on the same picture, taken before the lift
    assert!(state.undo());
    assert_eq!(state.canvas.get(12, 12), Some(BLUE));
    assert_ne!(state.canvas, lifted);
}

#[test]
fn test_undo_after_rotate_selection_restores_pixels_in_place() {
    let mut state = create_test_input_state();
    for x in 10..14 {
        state.canvas.set(x, 10, BLUE);
    }
    let before = state.canvas.clone();
    state.set_tool(Tool::SelectAndMove);
    drag(&mut state, (10, 10), (14, 14));

    assert!(state.rotate_selection());
    assert_eq!(state.canvas.get(13, 13), Some(BLUE));

    assert!(state.undo());
    assert!(state.selection.is_none());
    assert_eq!(state.canvas, before);
}

#[test]
fn test_set_color_cancel_is_noop() {
    let mut state = create_test_input_state();
    assert!(!state.set_color(None));
    assert_eq!(state.current_color, RED);
}

#[test]
fn test_set_color_leaves_eraser() {
    let mut state = create_test_input_state();
    state.set_tool(Tool::Eraser);
    assert!(state.set_color(Some(BLUE)));

    assert_eq!(state.current_color, BLUE);
    assert_eq!(state.current_tool, Tool::Pencil);
}

#[test]
fn test_pen_size_is_clamped() {
    let mut state = create_test_input_state();
    state.set_pen_size(0);
    assert_eq!(state.pen_size, MIN_PEN_SIZE);
    state.set_pen_size(500);
    assert_eq!(state.pen_size, MAX_PEN_SIZE);
    state.set_pen_size(12);
    assert_eq!(state.pen_size, 12);
}

#[test]
fn test_clear_canvas_is_undoable() {
    let mut state = create_test_input_state();
    drag(&mut state, (0, 0), (5, 5));
    let drawn = state.canvas.clone();

    state.clear_canvas();
    assert_eq!(count(&state.canvas, WHITE), 60 * 60);
    assert!(state.undo());
    assert_eq!(state.canvas, drawn);
}

#[test]
fn test_flip_actions_mirror_canvas() {
    let mut state = create_test_input_state();
    state.canvas.set(0, 0, BLUE);

    state.flip_horizontal();
    assert_eq!(state.canvas.get(59, 0), Some(BLUE));
    state.flip_vertical();
    assert_eq!(state.canvas.get(59, 59), Some(BLUE));
    assert_eq!(state.history.len(), 2);
}

#[test]
fn test_rotate_canvas_four_times_restores_square_canvas() {
    let mut state = create_test_input_state();
    state.set_tool(Tool::Triangle);
    drag(&mut state, (5, 5), (40, 30));
    let drawn = state.canvas.clone();

    for _ in 0..4 {
        state.rotate_canvas();
    }
    assert_eq!(state.canvas, drawn);
}

#[test]
fn test_resize_only_grows() {
    let mut state = create_test_input_state();
    state.canvas.set(59, 59, BLUE);

    assert!(!state.resize_canvas(40, 40));
    assert!(state.history.is_empty());

    assert!(state.resize_canvas(80, 30));
    assert_eq!((state.canvas.width(), state.canvas.height()), (80, 60));
    assert_eq!(state.canvas.get(59, 59), Some(BLUE));
    assert_eq!(state.canvas.get(79, 0), Some(WHITE));

    assert!(state.undo());
    assert_eq!((state.canvas.width(), state.canvas.height()), (60, 60));
}

#[test]
fn test_hover_shows_pen_cursor_for_freehand_tools() {
    let mut state = create_test_input_state();
    state.set_pen_size(10);
    state.on_mouse_hover(30, 30);
    assert_eq!(
        state.preview(),
        Some(Preview::PenCursor {
            x: 30,
            y: 30,
            radius: 5
        })
    );

    let frame = state.compose_preview();
    assert_eq!(frame.get(35, 30), Some(GRAY));
    assert_eq!(count(&state.canvas, WHITE), 60 * 60);

    state.set_tool(Tool::Fill);
    assert!(state.preview().is_none());
}

#[test]
fn test_three_d_rectangle_uses_shading_colors() {
    let mut state = create_test_input_state();
    state.set_tool(Tool::Rectangle3d);
    drag(&mut state, (10, 20), (30, 40));

    assert_eq!(state.canvas.get(25, 35), Some(RED));
    // shadow box sits up and to the right of the base
    assert_eq!(state.canvas.get(25, 15), Some(GRAY));
}

#[test]
fn test_flush_pending_drops_selection_for_export() {
    let mut state = create_test_input_state();
    state.canvas.set(12, 12, BLUE);
    state.set_tool(Tool::SelectAndMove);
    drag(&mut state, (10, 10), (20, 20));
    assert_eq!(state.canvas.get(12, 12), Some(WHITE));

    state.flush_pending();
    assert!(state.selection.is_none());
    assert_eq!(state.canvas.get(12, 12), Some(BLUE));
}

#[test]
fn test_gestures_released_far_off_canvas_are_clipped() {
    let far_ends = [(i32::MAX - 5, 20), (i32::MIN + 3, i32::MAX), (6030, 30)];
    for tool in Tool::ALL {
        for end in far_ends {
            let mut state = create_test_input_state();
            state.set_tool(tool);
            state.on_mouse_press(MouseButton::Left, 10, 10);
            state.on_mouse_motion(end.0, end.1);
            let _ = state.compose_preview();
            state.on_mouse_release(MouseButton::Left, end.0, end.1);

            assert!(!state.is_gesture_active(), "{tool} to {end:?}");
            assert_eq!(state.history.len(), 1, "{tool} to {end:?}");
        }
    }

    let mut state = create_test_input_state();
    state.set_tool(Tool::Rectangle3d);
    drag(&mut state, (10, 10), (i32::MAX - 5, 20));
    assert_eq!(state.canvas.get(59, 15), Some(RED));
}

#[test]
fn test_selection_dropped_far_away_leaves_canvas_blank() {
    let mut state = create_test_input_state();
    state.canvas.set(12, 12, BLUE);
    state.set_tool(Tool::SelectAndMove);
    drag(&mut state, (10, 10), (20, 20));

    state.on_mouse_press(MouseButton::Left, 15, 15);
    state.on_mouse_motion(i32::MAX, i32::MIN);
    let _ = state.compose_preview();
    state.on_mouse_release(MouseButton::Left, i32::MAX, i32::MIN);

    assert!(state.selection.is_none());
    assert_eq!(count(&state.canvas, WHITE), 60 * 60);
    assert!(state.undo());
    assert_eq!(state.canvas.get(12, 12), Some(BLUE));
}
