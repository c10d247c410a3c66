use micmaster_designer::designer_state::{DesignerEvent, DesignerState, Outcome};
use micmaster_designer::interaction::{is_click, Mode};
use micmaster_designer::model::Point;
use micmaster_designer::viewport::Viewport;
use micmaster_designer::Canvas;
use proptest::prelude::*;

proptest! {
    #[test]
    fn screen_grid_roundtrip(
        x in -50.0f64..50.0,
        y in -50.0f64..50.0,
        zoom in 20.0f64..200.0,
        pan_x in -500.0f64..500.0,
        pan_y in -500.0f64..500.0,
    ) {
        let mut viewport = Viewport::new(800.0, 600.0);
        viewport.set_zoom(zoom);
        viewport.set_pan(pan_x, pan_y);

        let back = viewport.screen_to_grid(viewport.grid_to_screen(Point::new(x, y)));
        prop_assert!((back.x - x).abs() < 1e-9);
        prop_assert!((back.y - y).abs() < 1e-9);
    }

    #[test]
    fn zoom_never_leaves_bounds(steps in proptest::collection::vec(any::<bool>(), 0..64)) {
        let mut viewport = Viewport::new(800.0, 600.0);
        for zoom_in in steps {
            if zoom_in {
                viewport.zoom_in();
            } else {
                viewport.zoom_out();
            }
            prop_assert!(viewport.zoom() >= 20.0);
            prop_assert!(viewport.zoom() <= 200.0);
        }
    }

    #[test]
    fn click_iff_within_threshold_on_both_axes(dx in -20.0f64..20.0, dy in -20.0f64..20.0) {
        let origin = Point::new(300.0, 300.0);
        let release = Point::new(300.0 + dx, 300.0 + dy);
        prop_assert_eq!(is_click(origin, release, 5.0), dx.abs() < 5.0 && dy.abs() < 5.0);
    }

    #[test]
    fn add_clicks_match_export_rows(
        clicks in proptest::collection::vec((0.0f64..800.0, 0.0f64..600.0), 0..16),
    ) {
        let mut state = DesignerState::with_canvas(Canvas::with_size(800.0, 600.0));
        prop_assert_eq!(state.mode(), Mode::Add);
        for (x, y) in &clicks {
            state.apply(DesignerEvent::PointerDown(Point::new(*x, *y)));
            let outcome = state.apply(DesignerEvent::PointerUp(Point::new(*x, *y)));
            prop_assert!(matches!(outcome, Outcome::Added(_)));
        }

        let export = state.export_string();
        prop_assert_eq!(export.matches('[').count(), clicks.len() + 1);
        prop_assert!(export.starts_with("np.array([\n  "));
        prop_assert!(export.ends_with("\n])"));
    }
}
