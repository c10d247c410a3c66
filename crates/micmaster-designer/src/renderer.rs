//! Scene builder for the microphone canvas.
//!
//! Produces a backend-neutral description of one frame: grid lines, one
//! marker per microphone and the optional hover label. Everything is derived
//! from the current store, viewport and hover state on every call; nothing is
//! cached between frames.
//!
//! The GTK front end paints a [`Scene`] with cairo, tests inspect it directly.

use micmaster_core::constants::{
    colors, GRID_AXIS_WIDTH, GRID_DIVISIONS, GRID_LINE_WIDTH, GRID_SIZE_M, LABEL_OFFSET_PX,
    MARKER_RADIUS_PX, MARKER_STROKE_WIDTH_PX, MAX_GRID_DIVISIONS,
};
use micmaster_core::format_meters_label;

use crate::microphone_store::MicrophoneStore;
use crate::model::{MicrophoneId, Point};
use crate::viewport::Viewport;

/// An sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Builds a color from `0xRRGGBB`.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }

    /// Channels scaled to `0.0..=1.0`, as cairo expects.
    pub fn to_unit_rgb(self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }
}

/// Extent and subdivision of the drawn grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    /// Side length in meters, centered on the origin.
    pub size_m: f64,
    /// Divisions per axis.
    pub divisions: u32,
}

impl GridSpec {
    /// Divisions actually drawn, clamped to `[1, MAX_GRID_DIVISIONS]`.
    pub fn drawn_divisions(&self) -> u32 {
        self.divisions.clamp(1, MAX_GRID_DIVISIONS)
    }

    /// Spacing between adjacent lines in meters.
    pub fn step(&self) -> f64 {
        self.size_m / f64::from(self.drawn_divisions())
    }
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            size_m: GRID_SIZE_M,
            divisions: GRID_DIVISIONS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOrientation {
    Vertical,
    Horizontal,
}

/// A stroked grid line in screen space.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneLine {
    pub orientation: LineOrientation,
    /// Grid coordinate the line sits on (x for vertical, y for horizontal).
    pub offset_m: f64,
    pub start: Point,
    pub end: Point,
    pub stroke: Color,
    pub width: f64,
    /// True for the line through zero.
    pub is_axis: bool,
}

/// A microphone marker in screen space.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneCircle {
    pub id: MicrophoneId,
    pub center: Point,
    pub radius: f64,
    pub fill: Color,
    pub stroke: Color,
    pub stroke_width: f64,
    pub hovered: bool,
}

/// Floating coordinate label for the hovered microphone.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneLabel {
    /// Top-left corner of the label in screen space.
    pub anchor: Point,
    pub text: String,
    pub background: Color,
    pub foreground: Color,
}

/// Everything needed to paint one frame.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scene {
    pub lines: Vec<SceneLine>,
    pub circles: Vec<SceneCircle>,
    pub label: Option<SceneLabel>,
}

/// Builds the grid lines for the current viewport.
///
/// Emits `divisions + 1` vertical lines followed by `divisions + 1`
/// horizontal lines, each spanning the full grid extent.
pub fn grid_lines(viewport: &Viewport, grid: &GridSpec) -> Vec<SceneLine> {
    let half = grid.size_m / 2.0;
    let step = grid.step();
    let divisions = grid.drawn_divisions();
    let count = divisions + 1;
    let mut lines = Vec::with_capacity(2 * count as usize);

    for orientation in [LineOrientation::Vertical, LineOrientation::Horizontal] {
        for i in 0..count {
            // Index-based offsets avoid drift from repeated float addition.
            let offset = -half + f64::from(i) * step;
            let is_axis = u64::from(i) * 2 == u64::from(divisions);
            let (start, end) = match orientation {
                LineOrientation::Vertical => (Point::new(offset, -half), Point::new(offset, half)),
                LineOrientation::Horizontal => {
                    (Point::new(-half, offset), Point::new(half, offset))
                }
            };

            lines.push(SceneLine {
                orientation,
                offset_m: offset,
                start: viewport.grid_to_screen(start),
                end: viewport.grid_to_screen(end),
                stroke: Color::from_hex(if is_axis {
                    colors::GRID_AXIS
                } else {
                    colors::GRID_LINE
                }),
                width: if is_axis {
                    GRID_AXIS_WIDTH
                } else {
                    GRID_LINE_WIDTH
                },
                is_axis,
            });
        }
    }

    lines
}

/// Builds one marker per microphone, in store order.
pub fn markers(
    store: &MicrophoneStore,
    viewport: &Viewport,
    hovered: Option<MicrophoneId>,
) -> Vec<SceneCircle> {
    store
        .iter()
        .map(|mic| {
            let is_hovered = hovered == Some(mic.id);
            SceneCircle {
                id: mic.id,
                center: viewport.grid_to_screen(mic.position()),
                radius: MARKER_RADIUS_PX,
                fill: Color::from_hex(if is_hovered {
                    colors::MARKER_HOVER_FILL
                } else {
                    colors::MARKER_FILL
                }),
                stroke: Color::from_hex(colors::MARKER_STROKE),
                stroke_width: MARKER_STROKE_WIDTH_PX,
                hovered: is_hovered,
            }
        })
        .collect()
}

/// Builds the hover label, if a hovered microphone exists.
pub fn hover_label(
    store: &MicrophoneStore,
    viewport: &Viewport,
    hovered: Option<MicrophoneId>,
) -> Option<SceneLabel> {
    let mic = store.get(hovered?)?;
    let screen = viewport.grid_to_screen(mic.position());
    Some(SceneLabel {
        anchor: Point::new(screen.x + LABEL_OFFSET_PX.0, screen.y + LABEL_OFFSET_PX.1),
        text: format_meters_label(mic.x, mic.y),
        background: Color::from_hex(colors::LABEL_BACKGROUND),
        foreground: Color::from_hex(colors::LABEL_TEXT),
    })
}

/// Builds the complete scene for one frame.
pub fn render_scene(
    store: &MicrophoneStore,
    viewport: &Viewport,
    hovered: Option<MicrophoneId>,
    grid: &GridSpec,
) -> Scene {
    Scene {
        lines: grid_lines(viewport, grid),
        circles: markers(store, viewport, hovered),
        label: hover_label(store, viewport, hovered),
    }
}

/// Returns the topmost marker whose painted area contains `screen`.
///
/// The painted area includes the outer half of the outline. Later markers
/// are drawn on top, so the search runs back to front.
pub fn marker_at(
    store: &MicrophoneStore,
    viewport: &Viewport,
    screen: Point,
) -> Option<MicrophoneId> {
    let hit_radius = MARKER_RADIUS_PX + MARKER_STROKE_WIDTH_PX / 2.0;
    store
        .iter()
        .rev()
        .find(|mic| viewport.grid_to_screen(mic.position()).distance_to(&screen) <= hit_radius)
        .map(|mic| mic.id)
}
