use gtk4::prelude::*;
use gtk4::{
    Application, ApplicationWindow, Box, CssProvider, EventControllerKey, HeaderBar, Label,
    Orientation, Paned,
};
use micmaster_settings::Config;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{info, warn};

use crate::helpers::designer_from_config;
use crate::ui::gtk::{DesignerCanvas, DesignerToolbox, EditDialog, ExportPanel};
use crate::ui::status::status_text;

pub const APP_ID: &str = "io.github.micmaster.MicMaster";

const STYLE: &str = "
.designer-canvas { background-color: #ffffff; }
.selected-tool { background-color: rgba(43, 108, 176, 0.3); }
.active-tool-chip { padding: 2px 8px; border-radius: 8px; }
.status-bar { padding: 2px 8px; font-size: smaller; }
";

/// Runs the GTK application until the window closes.
pub fn run(config: Config) -> anyhow::Result<()> {
    let app = Application::builder().application_id(APP_ID).build();

    app.connect_startup(|_| {
        load_css();
    });

    app.connect_activate(move |app| {
        build_window(app, &config);
    });

    // Command line arguments belong to the binary, not to GTK.
    let exit_code = app.run_with_args::<&str>(&[]);
    if exit_code != gtk4::glib::ExitCode::SUCCESS {
        anyhow::bail!("GTK application exited with an error");
    }
    Ok(())
}

fn build_window(app: &Application, config: &Config) {
    let state = Rc::new(RefCell::new(designer_from_config(config)));

    let window = ApplicationWindow::builder()
        .application(app)
        .title("MicMaster")
        .default_width(config.window.width as i32)
        .default_height(config.window.height as i32)
        .build();

    let header = HeaderBar::new();
    window.set_titlebar(Some(&header));

    let canvas = DesignerCanvas::new(state.clone());
    let toolbox = DesignerToolbox::new(canvas.clone());
    let export_panel = ExportPanel::new(canvas.clone());
    let _edit_dialog = EditDialog::new(&window, canvas.clone());

    let status_label = Label::new(Some(&status_text(&state.borrow())));
    status_label.add_css_class("status-bar");
    status_label.set_xalign(0.0);
    let status_outcome = status_label.clone();
    let state_status = state.clone();
    canvas.connect_outcome(move |_| {
        status_outcome.set_text(&status_text(&state_status.borrow()));
    });

    let paned = Paned::new(Orientation::Vertical);
    paned.set_start_child(Some(&canvas.widget));
    paned.set_end_child(Some(&export_panel.widget));
    paned.set_resize_end_child(false);
    paned.set_shrink_end_child(false);

    let main_box = Box::new(Orientation::Vertical, 0);
    main_box.append(&toolbox.widget);
    main_box.append(&paned);
    main_box.append(&status_label);
    window.set_child(Some(&main_box));

    let key_controller = EventControllerKey::new();
    let canvas_key = canvas.clone();
    key_controller.connect_key_pressed(move |_controller, keyval, _keycode, modifiers| {
        canvas_key.handle_key(keyval, modifiers)
    });
    window.add_controller(key_controller);

    info!("Main window ready");
    window.present();
    canvas.widget.grab_focus();
}

fn load_css() {
    let provider = CssProvider::new();
    provider.load_from_data(STYLE);

    match gtk4::gdk::Display::default() {
        Some(display) => gtk4::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
        ),
        None => warn!("No display available, skipping custom styles"),
    }
}
