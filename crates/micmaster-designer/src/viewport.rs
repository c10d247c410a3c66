//! Viewport and coordinate transformation for canvas rendering.
//!
//! Handles conversion between pixel coordinates (screen space) and grid
//! coordinates (meters). Manages zoom and pan with the grid origin at the
//! center of the canvas.

use std::fmt;

use micmaster_core::constants::{
    DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM, ZOOM_STEP,
};

use crate::model::Point;

/// Zoom bounds and step for a viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomLimits {
    pub initial: f64,
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            initial: DEFAULT_ZOOM,
            min: MIN_ZOOM,
            max: MAX_ZOOM,
            step: ZOOM_STEP,
        }
    }
}

/// Represents the viewport transformation state (zoom and pan).
#[derive(Debug, Clone)]
pub struct Viewport {
    zoom: f64,
    pan_x: f64,
    pan_y: f64,
    canvas_width: f64,
    canvas_height: f64,
    limits: ZoomLimits,
}

impl Viewport {
    /// Creates a new viewport with initial dimensions.
    /// The grid origin starts at the canvas center with no pan.
    pub fn new(canvas_width: f64, canvas_height: f64) -> Self {
        Self::with_limits(canvas_width, canvas_height, ZoomLimits::default())
    }

    /// Creates a viewport with custom zoom bounds.
    pub fn with_limits(canvas_width: f64, canvas_height: f64, limits: ZoomLimits) -> Self {
        Self {
            zoom: limits.initial.clamp(limits.min, limits.max),
            pan_x: 0.0,
            pan_y: 0.0,
            canvas_width,
            canvas_height,
            limits,
        }
    }

    /// Gets the canvas width.
    pub fn canvas_width(&self) -> f64 {
        self.canvas_width
    }

    /// Gets the canvas height.
    pub fn canvas_height(&self) -> f64 {
        self.canvas_height
    }

    /// Sets the canvas dimensions (called by the surface before drawing and
    /// before each pointer event). Changing the size mid-drag shifts the grid
    /// position under a fixed screen point.
    pub fn set_canvas_size(&mut self, width: f64, height: f64) {
        self.canvas_width = width;
        self.canvas_height = height;
    }

    /// Gets the current zoom in pixels per meter.
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Gets the zoom bounds.
    pub fn limits(&self) -> ZoomLimits {
        self.limits
    }

    /// Sets the zoom, clamped to the configured bounds.
    pub fn set_zoom(&mut self, zoom: f64) {
        if zoom.is_finite() {
            self.zoom = zoom.clamp(self.limits.min, self.limits.max);
        }
    }

    /// Zooms in by one step.
    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom * self.limits.step);
    }

    /// Zooms out by one step.
    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom / self.limits.step);
    }

    /// Resets zoom to its initial value.
    pub fn reset_zoom(&mut self) {
        self.set_zoom(self.limits.initial);
    }

    /// Gets the pan offset (X coordinate, pixels).
    pub fn pan_x(&self) -> f64 {
        self.pan_x
    }

    /// Gets the pan offset (Y coordinate, pixels).
    pub fn pan_y(&self) -> f64 {
        self.pan_y
    }

    /// Sets the pan offset.
    pub fn set_pan(&mut self, x: f64, y: f64) {
        self.pan_x = x;
        self.pan_y = y;
    }

    /// Pans by a pixel delta.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// Resets pan to (0, 0).
    pub fn reset_pan(&mut self) {
        self.pan_x = 0.0;
        self.pan_y = 0.0;
    }

    /// Converts grid coordinates (meters) to pixel coordinates.
    ///
    /// Formula:
    /// ```text
    /// pixel_x =  grid_x * zoom + canvas_width / 2  + pan_x
    /// pixel_y = -grid_y * zoom + canvas_height / 2 + pan_y  // Flip Y-axis
    /// ```
    pub fn grid_to_screen(&self, point: Point) -> Point {
        Point::new(
            point.x * self.zoom + self.canvas_width / 2.0 + self.pan_x,
            -point.y * self.zoom + self.canvas_height / 2.0 + self.pan_y,
        )
    }

    /// Converts pixel coordinates to grid coordinates (meters).
    ///
    /// Exact inverse of [`Viewport::grid_to_screen`]:
    /// ```text
    /// grid_x =  (pixel_x - canvas_width / 2  - pan_x) / zoom
    /// grid_y = -(pixel_y - canvas_height / 2 - pan_y) / zoom
    /// ```
    pub fn screen_to_grid(&self, point: Point) -> Point {
        Point::new(
            (point.x - self.canvas_width / 2.0 - self.pan_x) / self.zoom,
            -((point.y - self.canvas_height / 2.0 - self.pan_y) / self.zoom),
        )
    }

    /// Resets viewport to default state (initial zoom, no pan).
    pub fn reset(&mut self) {
        self.reset_zoom();
        self.reset_pan();
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Zoom: {:.1} px/m | Pan: ({:.1}, {:.1})",
            self.zoom, self.pan_x, self.pan_y
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT)
    }
}
