use gtk4::prelude::*;
use gtk4::{Align, Box, Button, Image, Label, Orientation, Separator};
use micmaster_designer::{DesignerEvent, Mode};
use std::rc::Rc;

use super::designer_canvas::DesignerCanvas;
use crate::ui::tools::{DesignerTool, ToolbarAction};

pub struct DesignerToolbox {
    pub widget: Box,
    active_tool_label: Label,
    buttons: Vec<(DesignerTool, Button)>,
}

impl DesignerToolbox {
    pub fn new(canvas: Rc<DesignerCanvas>) -> Rc<Self> {
        let widget = Box::new(Orientation::Horizontal, 4);
        widget.add_css_class("designer-toolbox");
        widget.set_margin_top(5);
        widget.set_margin_bottom(5);
        widget.set_margin_start(5);
        widget.set_margin_end(5);

        let mut buttons = Vec::new();
        for tool in DesignerTool::ALL {
            let btn = Button::new();
            btn.set_size_request(40, 40);
            btn.set_tooltip_text(Some(tool.tooltip()));
            let icon = Image::from_icon_name(tool.icon());
            icon.set_pixel_size(20);
            btn.set_child(Some(&icon));

            let canvas_click = canvas.clone();
            btn.connect_clicked(move |_| {
                canvas_click.dispatch(DesignerEvent::SetMode(tool.mode()));
            });

            widget.append(&btn);
            buttons.push((tool, btn));
        }

        widget.append(&Separator::new(Orientation::Vertical));

        for action in ToolbarAction::ALL {
            let btn = Button::from_icon_name(action.icon());
            btn.set_tooltip_text(Some(action.tooltip()));
            let canvas_click = canvas.clone();
            btn.connect_clicked(move |_| {
                canvas_click.dispatch(action.event());
            });
            widget.append(&btn);
        }

        let active_tool_label = Label::new(None);
        active_tool_label.add_css_class("active-tool-chip");
        active_tool_label.set_hexpand(true);
        active_tool_label.set_halign(Align::End);
        widget.append(&active_tool_label);

        let toolbox = Rc::new(Self {
            widget,
            active_tool_label,
            buttons,
        });

        toolbox.refresh(canvas.state.borrow().mode());
        let toolbox_outcome = toolbox.clone();
        let state = canvas.state.clone();
        canvas.connect_outcome(move |_| {
            toolbox_outcome.refresh(state.borrow().mode());
        });

        toolbox
    }

    /// Highlights the button for `mode`.
    pub fn refresh(&self, mode: Mode) {
        let current = DesignerTool::from_mode(mode);
        self.active_tool_label
            .set_text(&format!("Active tool: {}", current.tooltip()));
        for (tool, btn) in &self.buttons {
            if *tool == current {
                btn.add_css_class("selected-tool");
            } else {
                btn.remove_css_class("selected-tool");
            }
        }
    }
}
