//! Canvas for placing microphones.
//!
//! Owns the microphone store, the viewport and the active interaction mode.
//! Gesture handling lives in [`crate::designer_state`]; this type only exposes
//! the operations those gestures resolve to.

use tracing::info;

use crate::export::numpy_array_string;
use crate::interaction::Mode;
use crate::microphone_store::MicrophoneStore;
use crate::model::{Microphone, MicrophoneId, Point};
use crate::renderer::{marker_at, render_scene, GridSpec, Scene};
use crate::viewport::{Viewport, ZoomLimits};
use micmaster_core::constants::{DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH};
use micmaster_core::StoreError;

/// Canvas state managing microphones and view navigation.
#[derive(Debug, Clone)]
pub struct Canvas {
    store: MicrophoneStore,
    mode: Mode,
    viewport: Viewport,
    grid: GridSpec,
}

impl Canvas {
    /// Creates a new canvas.
    pub fn new() -> Self {
        Self::with_size(DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT)
    }

    /// Creates a canvas with specified dimensions.
    pub fn with_size(width: f64, height: f64) -> Self {
        Self {
            store: MicrophoneStore::new(),
            mode: Mode::default(),
            viewport: Viewport::new(width, height),
            grid: GridSpec::default(),
        }
    }

    /// Creates a canvas with custom zoom bounds and grid.
    pub fn with_settings(width: f64, height: f64, limits: ZoomLimits, grid: GridSpec) -> Self {
        Self {
            store: MicrophoneStore::new(),
            mode: Mode::default(),
            viewport: Viewport::with_limits(width, height, limits),
            grid,
        }
    }

    /// Sets the interaction mode.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// Gets the current interaction mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    pub fn grid(&self) -> &GridSpec {
        &self.grid
    }

    /// Returns the number of microphones on the canvas.
    pub fn microphone_count(&self) -> usize {
        self.store.len()
    }

    /// Microphones in insertion order.
    pub fn microphones(&self) -> impl DoubleEndedIterator<Item = &Microphone> {
        self.store.iter()
    }

    pub fn contains(&self, id: MicrophoneId) -> bool {
        self.store.contains(id)
    }

    pub fn get_microphone(&self, id: MicrophoneId) -> Option<&Microphone> {
        self.store.get(id)
    }

    /// Adds a microphone at a grid position.
    pub fn add_microphone(&mut self, position: Point) -> MicrophoneId {
        let id = self.store.add(position);
        info!(%id, x = position.x, y = position.y, "Added microphone");
        id
    }

    /// Adds a microphone under a screen position.
    pub fn add_microphone_at_screen(&mut self, screen: Point) -> MicrophoneId {
        let position = self.viewport.screen_to_grid(screen);
        self.add_microphone(position)
    }

    /// Removes a microphone.
    pub fn remove_microphone(&mut self, id: MicrophoneId) -> Result<Microphone, StoreError> {
        let removed = self.store.remove(id)?;
        info!(%id, "Deleted microphone");
        Ok(removed)
    }

    /// Moves a microphone to new grid coordinates, keeping its id.
    pub fn move_microphone(&mut self, id: MicrophoneId, position: Point) -> Result<(), StoreError> {
        self.store.set_position(id, position)?;
        info!(%id, x = position.x, y = position.y, "Updated microphone");
        Ok(())
    }

    /// Removes every microphone.
    pub fn clear(&mut self) {
        self.store.clear();
    }

    pub fn set_canvas_size(&mut self, width: f64, height: f64) {
        self.viewport.set_canvas_size(width, height);
    }

    pub fn zoom(&self) -> f64 {
        self.viewport.zoom()
    }

    pub fn zoom_in(&mut self) {
        self.viewport.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.viewport.zoom_out();
    }

    pub fn pan_x(&self) -> f64 {
        self.viewport.pan_x()
    }

    pub fn pan_y(&self) -> f64 {
        self.viewport.pan_y()
    }

    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.viewport.pan_by(dx, dy);
    }

    pub fn reset_view(&mut self) {
        self.viewport.reset();
    }

    pub fn grid_to_screen(&self, point: Point) -> Point {
        self.viewport.grid_to_screen(point)
    }

    pub fn screen_to_grid(&self, point: Point) -> Point {
        self.viewport.screen_to_grid(point)
    }

    /// Topmost microphone under a screen point.
    pub fn hit_test(&self, screen: Point) -> Option<MicrophoneId> {
        marker_at(&self.store, &self.viewport, screen)
    }

    /// Builds the frame for the current state.
    pub fn scene(&self, hovered: Option<MicrophoneId>) -> Scene {
        render_scene(&self.store, &self.viewport, hovered, &self.grid)
    }

    /// The `np.array([...])` export of all microphones.
    pub fn export_numpy(&self) -> String {
        numpy_array_string(self.store.iter())
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}
