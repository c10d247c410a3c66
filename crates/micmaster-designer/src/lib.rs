//! # MicMaster Designer
//!
//! The microphone layout canvas: a 2-D grid in meters on which microphones
//! are added, deleted and edited, navigated with pan and zoom, and exported
//! as a NumPy array literal.
//!
//! ## Architecture
//!
//! ```text
//! DesignerState (view-model, event reducer)
//!   ├── Canvas
//!   │     ├── MicrophoneStore (insertion-ordered points)
//!   │     ├── Viewport (grid <-> screen transform, zoom, pan)
//!   │     └── Mode (pan / add / delete / edit)
//!   ├── DragState + click classification
//!   └── EditForm (coordinate text buffers)
//!
//! Renderer (Scene: grid lines, markers, hover label)
//! Export (np.array string)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use micmaster_designer::{DesignerEvent, DesignerState, Point};
//!
//! let mut state = DesignerState::new();
//! state.apply(DesignerEvent::Resize { width: 800.0, height: 600.0 });
//! state.apply(DesignerEvent::PointerDown(Point::new(400.0, 300.0)));
//! state.apply(DesignerEvent::PointerUp(Point::new(400.0, 300.0)));
//!
//! assert_eq!(state.export_string(), "np.array([\n  [0.0000, 0.0000]\n])");
//! ```

pub mod canvas;
pub mod designer_state;
pub mod edit_form;
pub mod export;
pub mod interaction;
pub mod microphone_store;
pub mod model;
pub mod renderer;
pub mod viewport;

pub use canvas::Canvas;
pub use designer_state::{reduce, DesignerEvent, DesignerState, Outcome};
pub use edit_form::EditForm;
pub use export::numpy_array_string;
pub use interaction::{classify_release, is_click, ClickAction, DragState, Mode};
pub use microphone_store::MicrophoneStore;
pub use model::{Microphone, MicrophoneId, Point};
pub use renderer::{
    marker_at, render_scene, Color, GridSpec, LineOrientation, Scene, SceneCircle, SceneLabel,
    SceneLine,
};
pub use viewport::{Viewport, ZoomLimits};
