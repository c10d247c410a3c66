use micmaster_designer::canvas::Canvas;
use micmaster_designer::interaction::Mode;
use micmaster_designer::model::Point;

#[test]
fn test_canvas_add_microphones() {
    let mut canvas = Canvas::new();
    let a = canvas.add_microphone(Point::new(0.0, 0.0));
    let b = canvas.add_microphone(Point::new(1.0, 2.0));

    assert_eq!(canvas.microphone_count(), 2);
    assert_ne!(a, b);
}

#[test]
fn test_canvas_add_at_screen() {
    let mut canvas = Canvas::with_size(800.0, 600.0);
    let id = canvas.add_microphone_at_screen(Point::new(500.0, 200.0));
    let mic = canvas.get_microphone(id).unwrap();
    assert_eq!((mic.x, mic.y), (2.0, 2.0));
}

#[test]
fn test_canvas_mode() {
    let mut canvas = Canvas::new();
    assert_eq!(canvas.mode(), Mode::Add);
    canvas.set_mode(Mode::Pan);
    assert_eq!(canvas.mode(), Mode::Pan);
}

#[test]
fn test_canvas_zoom() {
    let mut canvas = Canvas::new();
    canvas.viewport_mut().set_zoom(120.0);
    assert_eq!(canvas.zoom(), 120.0);

    canvas.viewport_mut().set_zoom(5.0); // Below range, clamps to the minimum
    assert_eq!(canvas.zoom(), 20.0);

    canvas.viewport_mut().set_zoom(500.0); // Above range, clamps to the maximum
    assert_eq!(canvas.zoom(), 200.0);
}

#[test]
fn test_canvas_remove_and_move() {
    let mut canvas = Canvas::new();
    let id = canvas.add_microphone(Point::new(0.0, 0.0));
    canvas.move_microphone(id, Point::new(-1.5, 0.25)).unwrap();
    assert_eq!(canvas.get_microphone(id).unwrap().position(), Point::new(-1.5, 0.25));

    let removed = canvas.remove_microphone(id).unwrap();
    assert_eq!(removed.id, id);
    assert!(canvas.remove_microphone(id).is_err());
    assert!(canvas.move_microphone(id, Point::new(0.0, 0.0)).is_err());
}

#[test]
fn test_canvas_clear() {
    let mut canvas = Canvas::new();
    canvas.add_microphone(Point::new(0.0, 0.0));
    canvas.clear();
    assert_eq!(canvas.microphone_count(), 0);
    assert_eq!(canvas.export_numpy(), "np.array([\n  \n])");
}

#[test]
fn test_canvas_hit_test() {
    let mut canvas = Canvas::with_size(800.0, 600.0);
    let id = canvas.add_microphone(Point::new(1.0, 1.0)); // (450, 250)
    assert_eq!(canvas.hit_test(Point::new(452.0, 251.0)), Some(id));
    assert_eq!(canvas.hit_test(Point::new(470.0, 250.0)), None);

    canvas.pan_by(20.0, 0.0);
    assert_eq!(canvas.hit_test(Point::new(470.0, 250.0)), Some(id));
}

#[test]
fn test_canvas_scene_tracks_state() {
    let mut canvas = Canvas::with_size(800.0, 600.0);
    let id = canvas.add_microphone(Point::new(0.0, 0.0));
    let scene = canvas.scene(Some(id));
    assert_eq!(scene.lines.len(), 42);
    assert_eq!(scene.circles.len(), 1);
    assert_eq!(scene.circles[0].center, Point::new(400.0, 300.0));
    assert!(scene.label.is_some());

    canvas.viewport_mut().set_zoom(100.0);
    let scene = canvas.scene(None);
    let first = &scene.lines[0];
    // Leftmost vertical line (x = -5 m) at zoom 100.
    assert_eq!(first.start.x, -100.0);
    assert!(scene.label.is_none());
}
