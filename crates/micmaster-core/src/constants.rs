//! Editor-wide constants.
//!
//! Values shared between the designer model, the renderer and the front end.
//! Settings may override the view and grid values at startup.

/// Initial zoom in pixels per meter.
pub const DEFAULT_ZOOM: f64 = 50.0;

/// Smallest allowed zoom (pixels per meter).
pub const MIN_ZOOM: f64 = 20.0;

/// Largest allowed zoom (pixels per meter).
pub const MAX_ZOOM: f64 = 200.0;

/// Multiplier applied by a single zoom-in step (zoom-out divides by it).
pub const ZOOM_STEP: f64 = 1.2;

/// Side length of the drawn grid in meters.
pub const GRID_SIZE_M: f64 = 10.0;

/// Number of grid divisions per axis (0.5 m spacing with the default size).
pub const GRID_DIVISIONS: u32 = 20;

/// Upper bound on grid divisions per axis accepted from settings.
pub const MAX_GRID_DIVISIONS: u32 = 1000;

/// Upper bound on the grid side length in meters accepted from settings.
pub const MAX_GRID_SIZE_M: f64 = 10_000.0;

/// A release closer than this to the press, on both axes, counts as a click.
pub const CLICK_THRESHOLD_PX: f64 = 5.0;

/// Marker circle radius in screen pixels.
pub const MARKER_RADIUS_PX: f64 = 6.0;

/// Marker outline width in screen pixels.
pub const MARKER_STROKE_WIDTH_PX: f64 = 2.0;

/// Hover label offset from the marker center, in screen pixels.
pub const LABEL_OFFSET_PX: (f64, f64) = (10.0, -30.0);

/// Decimal places used for labels and the exported array.
pub const COORDINATE_DECIMALS: usize = 4;

/// Default canvas size used before the surface reports its real size.
pub const DEFAULT_CANVAS_WIDTH: f64 = 1200.0;
pub const DEFAULT_CANVAS_HEIGHT: f64 = 800.0;

pub mod colors {
    //! Renderer colors as 0xRRGGBB.

    pub const GRID_LINE: u32 = 0xdddddd;
    pub const GRID_AXIS: u32 = 0x666666;
    pub const MARKER_FILL: u32 = 0x2b6cb0;
    pub const MARKER_HOVER_FILL: u32 = 0x4299e1;
    pub const MARKER_STROKE: u32 = 0xffffff;
    pub const LABEL_BACKGROUND: u32 = 0x000000;
    pub const LABEL_TEXT: u32 = 0xffffff;
}

/// Stroke widths for grid lines.
pub const GRID_LINE_WIDTH: f64 = 1.0;
pub const GRID_AXIS_WIDTH: f64 = 2.0;
