//! End-to-end placement scenarios driven through designer events

use micmaster_designer::{Canvas, DesignerEvent, DesignerState, Mode, Outcome, Point};

fn designer() -> DesignerState {
    DesignerState::with_canvas(Canvas::with_size(800.0, 600.0))
}

fn press_release(state: &mut DesignerState, down: Point, up: Point) -> Outcome {
    state.apply(DesignerEvent::PointerDown(down));
    state.apply(DesignerEvent::PointerUp(up))
}

#[test]
fn test_center_click_exports_origin() {
    let mut state = designer();
    let center = Point::new(400.0, 300.0);
    press_release(&mut state, center, center);

    assert_eq!(state.export_string(), "np.array([\n  [0.0000, 0.0000]\n])");
}

#[test]
fn test_click_offset_maps_to_meters() {
    let mut state = designer();
    let at = Point::new(475.0, 200.0);
    press_release(&mut state, at, at);

    assert_eq!(state.export_string(), "np.array([\n  [1.5000, 2.0000]\n])");
}

#[test]
fn test_delete_hovered_leaves_survivor() {
    let mut state = designer();
    let first = Point::new(400.0, 300.0);
    let second = Point::new(500.0, 300.0);
    press_release(&mut state, first, first);
    let Outcome::Added(doomed) = press_release(&mut state, second, second) else {
        panic!("second click should add");
    };

    state.apply(DesignerEvent::SetMode(Mode::Delete));
    state.apply(DesignerEvent::MarkerEnter(doomed));
    assert_eq!(
        press_release(&mut state, second, second),
        Outcome::Deleted(doomed)
    );

    assert_eq!(state.canvas().microphone_count(), 1);
    assert_eq!(state.export_string(), "np.array([\n  [0.0000, 0.0000]\n])");
}

#[test]
fn test_small_drag_still_adds() {
    let mut state = designer();
    let outcome = press_release(&mut state, Point::new(400.0, 300.0), Point::new(403.0, 302.0));

    assert!(matches!(outcome, Outcome::Added(_)));
    // Added at the release point.
    let mic = state.canvas().microphones().next().unwrap();
    assert_eq!((mic.x, mic.y), (0.06, -0.04));
}

#[test]
fn test_long_drag_adds_nothing() {
    let mut state = designer();
    let outcome = press_release(&mut state, Point::new(400.0, 300.0), Point::new(408.0, 300.0));

    assert_eq!(outcome, Outcome::Unchanged);
    assert_eq!(state.canvas().microphone_count(), 0);
}

#[test]
fn test_export_after_pan() {
    let mut state = designer();
    state.apply(DesignerEvent::SetMode(Mode::Pan));
    state.apply(DesignerEvent::PointerDown(Point::new(0.0, 0.0)));
    state.apply(DesignerEvent::PointerMove(Point::new(100.0, 0.0)));
    state.apply(DesignerEvent::PointerUp(Point::new(100.0, 0.0)));
    state.apply(DesignerEvent::SetMode(Mode::Add));

    // Origin now sits at (500, 300).
    press_release(&mut state, Point::new(500.0, 300.0), Point::new(500.0, 300.0));
    assert_eq!(state.export_string(), "np.array([\n  [0.0000, 0.0000]\n])");
}
