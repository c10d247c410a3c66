//! Data model for the microphone layout.
//!
//! Grid points are in meters with +Y up. Screen points are in pixels with +Y
//! down; both use [`Point`], the owning context decides the space.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 2-D point.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Session-unique microphone identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MicrophoneId(pub u64);

impl MicrophoneId {
    /// Raw numeric value.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for MicrophoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mic-{}", self.0)
    }
}

/// A microphone placed on the grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Microphone {
    pub id: MicrophoneId,
    /// X position in meters.
    pub x: f64,
    /// Y position in meters (+Y up).
    pub y: f64,
}

impl Microphone {
    /// Creates a microphone at the given grid position.
    pub fn new(id: MicrophoneId, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }

    /// Grid position as a point.
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Replaces the coordinates, keeping the identity.
    pub fn set_position(&mut self, position: Point) {
        self.x = position.x;
        self.y = position.y;
    }
}
