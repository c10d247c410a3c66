use micmaster_designer::model::Point;
use micmaster_designer::viewport::{Viewport, ZoomLimits};

#[test]
fn test_viewport_creation() {
    let vp = Viewport::new(1200.0, 800.0);
    assert_eq!(vp.zoom(), 50.0);
    assert_eq!(vp.pan_x(), 0.0);
    assert_eq!(vp.pan_y(), 0.0);
}

#[test]
fn test_grid_origin_at_canvas_center() {
    let vp = Viewport::new(1200.0, 800.0);
    let screen = vp.grid_to_screen(Point::new(0.0, 0.0));
    assert_eq!(screen, Point::new(600.0, 400.0));

    let grid = vp.screen_to_grid(Point::new(600.0, 400.0));
    assert!((grid.x - 0.0).abs() < 1e-12);
    assert!((grid.y - 0.0).abs() < 1e-12);
}

#[test]
fn test_grid_to_screen_positive_y_goes_up() {
    let vp = Viewport::new(1200.0, 800.0);
    let p0 = vp.grid_to_screen(Point::new(0.0, 0.0));
    let p1 = vp.grid_to_screen(Point::new(0.0, 1.0));
    assert!(p1.y < p0.y); // Higher grid Y = lower pixel Y (up on screen)
}

#[test]
fn test_grid_to_screen_positive_x_goes_right() {
    let vp = Viewport::new(1200.0, 800.0);
    let p0 = vp.grid_to_screen(Point::new(0.0, 0.0));
    let p1 = vp.grid_to_screen(Point::new(1.0, 0.0));
    assert!(p1.x > p0.x);
}

#[test]
fn test_screen_to_grid_with_zoom_and_pan() {
    let mut vp = Viewport::new(800.0, 600.0);
    vp.set_zoom(100.0);
    vp.set_pan(50.0, -20.0);
    // Origin moved to (450, 280); 100 px per meter.
    let grid = vp.screen_to_grid(Point::new(650.0, 180.0));
    assert!((grid.x - 2.0).abs() < 1e-12);
    assert!((grid.y - 1.0).abs() < 1e-12);
}

#[test]
fn test_roundtrip_conversion() {
    let mut vp = Viewport::new(1024.0, 768.0);
    vp.set_zoom(73.5);
    vp.set_pan(75.0, 125.0);

    let original = Point::new(-3.217, 4.5);
    let roundtrip = vp.screen_to_grid(vp.grid_to_screen(original));

    assert!((roundtrip.x - original.x).abs() < 1e-9);
    assert!((roundtrip.y - original.y).abs() < 1e-9);
}

#[test]
fn test_zoom_steps_clamp() {
    let mut vp = Viewport::new(800.0, 600.0);
    for _ in 0..20 {
        vp.zoom_in();
    }
    assert_eq!(vp.zoom(), 200.0);
    for _ in 0..40 {
        vp.zoom_out();
    }
    assert_eq!(vp.zoom(), 20.0);
}

#[test]
fn test_single_zoom_step() {
    let mut vp = Viewport::new(800.0, 600.0);
    vp.zoom_in();
    assert!((vp.zoom() - 60.0).abs() < 1e-9);
    vp.zoom_out();
    assert!((vp.zoom() - 50.0).abs() < 1e-9);
}

#[test]
fn test_resize_shifts_mapping() {
    let mut vp = Viewport::new(800.0, 600.0);
    let before = vp.screen_to_grid(Point::new(400.0, 300.0));
    vp.set_canvas_size(900.0, 600.0);
    let after = vp.screen_to_grid(Point::new(400.0, 300.0));
    assert_eq!(before.x, 0.0);
    assert_eq!(after.x, -1.0);
}

#[test]
fn test_reset() {
    let mut vp = Viewport::new(800.0, 600.0);
    vp.set_zoom(150.0);
    vp.pan_by(30.0, 40.0);
    vp.reset();
    assert_eq!(vp.zoom(), 50.0);
    assert_eq!((vp.pan_x(), vp.pan_y()), (0.0, 0.0));
}

#[test]
fn test_custom_limits() {
    let limits = ZoomLimits {
        initial: 500.0,
        min: 10.0,
        max: 100.0,
        step: 2.0,
    };
    let mut vp = Viewport::with_limits(800.0, 600.0, limits);
    assert_eq!(vp.zoom(), 100.0);
    vp.zoom_out();
    assert_eq!(vp.zoom(), 50.0);
}
