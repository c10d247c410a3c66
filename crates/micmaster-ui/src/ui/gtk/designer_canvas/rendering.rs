//! Cairo painting of a designer [`Scene`]

use super::*;
use gtk4::cairo::{Context, FontSlant, FontWeight};
use micmaster_designer::{Color, Scene, SceneLabel};
use std::f64::consts::TAU;

const LABEL_FONT_SIZE: f64 = 12.0;
const LABEL_PADDING: f64 = 4.0;
const LABEL_ALPHA: f64 = 0.8;

fn set_color(cr: &Context, color: Color) {
    let (r, g, b) = color.to_unit_rgb();
    cr.set_source_rgb(r, g, b);
}

impl DesignerCanvas {
    pub(super) fn draw(cr: &Context, scene: &Scene) {
        cr.set_source_rgb(1.0, 1.0, 1.0);
        let _ = cr.paint();

        for line in &scene.lines {
            set_color(cr, line.stroke);
            cr.set_line_width(line.width);
            cr.move_to(line.start.x, line.start.y);
            cr.line_to(line.end.x, line.end.y);
            let _ = cr.stroke();
        }

        for circle in &scene.circles {
            cr.new_path();
            cr.arc(circle.center.x, circle.center.y, circle.radius, 0.0, TAU);
            set_color(cr, circle.fill);
            let _ = cr.fill_preserve();
            set_color(cr, circle.stroke);
            cr.set_line_width(circle.stroke_width);
            let _ = cr.stroke();
        }

        if let Some(label) = &scene.label {
            Self::draw_label(cr, label);
        }
    }

    fn draw_label(cr: &Context, label: &SceneLabel) {
        cr.select_font_face("Sans", FontSlant::Normal, FontWeight::Normal);
        cr.set_font_size(LABEL_FONT_SIZE);
        let Ok(extents) = cr.text_extents(&label.text) else {
            return;
        };

        let width = extents.width() + 2.0 * LABEL_PADDING;
        let height = extents.height() + 2.0 * LABEL_PADDING;
        let (r, g, b) = label.background.to_unit_rgb();
        cr.set_source_rgba(r, g, b, LABEL_ALPHA);
        cr.rectangle(label.anchor.x, label.anchor.y, width, height);
        let _ = cr.fill();

        set_color(cr, label.foreground);
        cr.move_to(
            label.anchor.x + LABEL_PADDING - extents.x_bearing(),
            label.anchor.y + LABEL_PADDING - extents.y_bearing(),
        );
        let _ = cr.show_text(&label.text);
    }
}
