use micmaster_core::{CoordinateAxis, EditError};
use micmaster_designer::designer_state::{DesignerEvent, DesignerState, Outcome};
use micmaster_designer::interaction::Mode;
use micmaster_designer::model::Point;
use micmaster_designer::Canvas;

fn designer() -> DesignerState {
    DesignerState::with_canvas(Canvas::with_size(800.0, 600.0))
}

fn click(state: &mut DesignerState, at: Point) -> Outcome {
    state.apply(DesignerEvent::PointerDown(at));
    state.apply(DesignerEvent::PointerUp(at))
}

#[test]
fn test_add_grows_store_with_unique_id() {
    let mut state = designer();
    let mut seen = Vec::new();
    for i in 0..5 {
        let before = state.canvas().microphone_count();
        let outcome = click(&mut state, Point::new(100.0 + 40.0 * f64::from(i), 200.0));
        let Outcome::Added(id) = outcome else {
            panic!("expected an add, got {outcome:?}");
        };
        assert_eq!(state.canvas().microphone_count(), before + 1);
        assert!(!seen.contains(&id));
        seen.push(id);
    }
}

#[test]
fn test_delete_hovered() {
    let mut state = designer();
    let id = state.add_microphone(Point::new(1.0, 0.0));
    state.apply(DesignerEvent::SetMode(Mode::Delete));
    state.apply(DesignerEvent::MarkerEnter(id));

    assert_eq!(click(&mut state, Point::new(450.0, 300.0)), Outcome::Deleted(id));
    assert!(state.canvas().get_microphone(id).is_none());
    assert_eq!(state.hovered(), None);
}

#[test]
fn test_delete_without_hover_is_noop() {
    let mut state = designer();
    state.add_microphone(Point::new(1.0, 0.0));
    state.apply(DesignerEvent::SetMode(Mode::Delete));
    assert_eq!(click(&mut state, Point::new(450.0, 300.0)), Outcome::Unchanged);
    assert_eq!(state.canvas().microphone_count(), 1);
}

#[test]
fn test_edit_open_seeds_form() {
    let mut state = designer();
    let id = state.add_microphone(Point::new(1.25, -0.5));
    state.apply(DesignerEvent::SetMode(Mode::Edit));
    state.apply(DesignerEvent::MarkerEnter(id));

    assert_eq!(click(&mut state, Point::new(462.5, 325.0)), Outcome::EditOpened(id));
    assert_eq!(state.selected(), Some(id));
    let form = state.edit_form().unwrap();
    assert_eq!(form.text(CoordinateAxis::X), "1.25");
    assert_eq!(form.text(CoordinateAxis::Y), "-0.5");
}

#[test]
fn test_edit_without_hover_is_noop() {
    let mut state = designer();
    state.add_microphone(Point::new(0.0, 0.0));
    state.apply(DesignerEvent::SetMode(Mode::Edit));
    assert_eq!(click(&mut state, Point::new(400.0, 300.0)), Outcome::Unchanged);
    assert!(!state.is_edit_open());
}

#[test]
fn test_valid_edit_keeps_identity() {
    let mut state = designer();
    let id = state.add_microphone(Point::new(0.0, 0.0));
    state.add_microphone(Point::new(2.0, 2.0));
    state.apply(DesignerEvent::SetMode(Mode::Edit));
    state.apply(DesignerEvent::MarkerEnter(id));
    click(&mut state, Point::new(400.0, 300.0));

    state.apply(DesignerEvent::EditField {
        axis: CoordinateAxis::X,
        text: "3.5".to_string(),
    });
    state.apply(DesignerEvent::EditField {
        axis: CoordinateAxis::Y,
        text: "-1".to_string(),
    });
    assert_eq!(state.apply(DesignerEvent::SubmitEdit), Outcome::Edited(id));

    assert_eq!(state.canvas().microphone_count(), 2);
    let mic = state.canvas().get_microphone(id).unwrap();
    assert_eq!((mic.x, mic.y), (3.5, -1.0));
    assert!(!state.is_edit_open());
    assert_eq!(state.selected(), None);
    // Position in the collection is unchanged.
    assert_eq!(state.canvas().microphones().next().map(|m| m.id), Some(id));
}

#[test]
fn test_invalid_edit_leaves_everything() {
    let mut state = designer();
    let id = state.add_microphone(Point::new(0.5, 0.5));
    state.apply(DesignerEvent::SetMode(Mode::Edit));
    state.apply(DesignerEvent::MarkerEnter(id));
    click(&mut state, Point::new(425.0, 275.0));

    state.apply(DesignerEvent::EditField {
        axis: CoordinateAxis::X,
        text: "left".to_string(),
    });
    let outcome = state.apply(DesignerEvent::SubmitEdit);
    assert_eq!(
        outcome,
        Outcome::EditRejected(EditError::InvalidNumber {
            field: CoordinateAxis::X,
            input: "left".to_string()
        })
    );

    assert!(state.is_edit_open());
    assert_eq!(state.edit_form().unwrap().text(CoordinateAxis::X), "left");
    let mic = state.canvas().get_microphone(id).unwrap();
    assert_eq!((mic.x, mic.y), (0.5, 0.5));
    assert_eq!(state.canvas().microphone_count(), 1);
}

#[test]
fn test_cancel_discards_edits() {
    let mut state = designer();
    let id = state.add_microphone(Point::new(0.0, 0.0));
    state.apply(DesignerEvent::SetMode(Mode::Edit));
    state.apply(DesignerEvent::MarkerEnter(id));
    click(&mut state, Point::new(400.0, 300.0));
    state.apply(DesignerEvent::EditField {
        axis: CoordinateAxis::Y,
        text: "9".to_string(),
    });

    assert_eq!(state.apply(DesignerEvent::CancelEdit), Outcome::EditClosed);
    assert!(!state.is_edit_open());
    assert_eq!(state.selected(), None);
    assert_eq!(state.canvas().get_microphone(id).unwrap().y, 0.0);
    assert_eq!(state.apply(DesignerEvent::CancelEdit), Outcome::Unchanged);
}

#[test]
fn test_move_ignored_outside_pan_mode() {
    let mut state = designer();
    state.apply(DesignerEvent::PointerDown(Point::new(100.0, 100.0)));
    assert_eq!(
        state.apply(DesignerEvent::PointerMove(Point::new(200.0, 150.0))),
        Outcome::Unchanged
    );
    assert_eq!((state.canvas().pan_x(), state.canvas().pan_y()), (0.0, 0.0));
}

#[test]
fn test_zoom_events_stay_clamped() {
    let mut state = designer();
    for _ in 0..30 {
        state.apply(DesignerEvent::ZoomIn);
        assert!(state.canvas().zoom() <= 200.0);
    }
    for _ in 0..30 {
        state.apply(DesignerEvent::ZoomOut);
        assert!(state.canvas().zoom() >= 20.0);
    }
    state.apply(DesignerEvent::ResetView);
    assert_eq!(state.canvas().zoom(), 50.0);
}

#[test]
fn test_clear_all_drops_hover_and_selection() {
    let mut state = designer();
    let id = state.add_microphone(Point::new(0.0, 0.0));
    state.apply(DesignerEvent::SetMode(Mode::Edit));
    state.apply(DesignerEvent::MarkerEnter(id));
    assert_eq!(click(&mut state, Point::new(400.0, 300.0)), Outcome::EditOpened(id));
    assert_eq!(state.hovered(), Some(id));

    assert_eq!(state.apply(DesignerEvent::ClearAll), Outcome::Redraw);
    assert_eq!(state.canvas().microphone_count(), 0);
    assert_eq!(state.hovered(), None);
    assert_eq!(state.selected(), None);
    assert!(state.canvas().scene(state.hovered()).label.is_none());

    // A stale id from before the clear cannot be hovered again.
    assert_eq!(state.apply(DesignerEvent::MarkerEnter(id)), Outcome::Unchanged);
    assert_eq!(
        state.apply(DesignerEvent::SubmitEdit),
        Outcome::EditRejected(EditError::NoSelection)
    );
}
