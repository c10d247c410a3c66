//! GTK 4 widgets for the microphone designer.

pub mod designer_canvas;
pub mod designer_toolbox;
pub mod edit_dialog;
pub mod export_panel;

pub use designer_canvas::DesignerCanvas;
pub use designer_toolbox::DesignerToolbox;
pub use edit_dialog::EditDialog;
pub use export_panel::ExportPanel;
