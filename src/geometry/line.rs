//! The renderable strike-line descriptor.

use super::space::Point;
use crate::game::Triple;
use serde::{Deserialize, Serialize};

/// Orientation of a strike line, matching the kind of the winning triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    /// Across a row.
    Horizontal,
    /// Down a column.
    Vertical,
    /// Along the main diagonal (top-left to bottom-right).
    Diagonal,
    /// Along the anti-diagonal (top-right to bottom-left).
    AntiDiagonal,
}

/// Geometric description of the overlay line drawn across a winning
/// triple.
///
/// All coordinates are relative to the board container's origin, never
/// the raw viewport, which decouples the descriptor from scroll or
/// screen placement.
///
/// Diagonal lines are modeled as a horizontal segment of the computed
/// length rotated about its LEFT anchor (the origin point), not about
/// the segment's own center. `rotation_degrees` is measured from the
/// positive x-axis and is present only for diagonal orientations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineDescriptor {
    /// Line orientation.
    pub orientation: Orientation,
    /// Anchor point of the line, relative to the board origin.
    pub origin: Point,
    /// Length of the segment.
    pub length: f64,
    /// Stroke thickness.
    pub thickness: f64,
    /// Rotation about the origin, degrees from the positive x-axis.
    /// Present only for `Diagonal` and `AntiDiagonal` orientations.
    pub rotation_degrees: Option<f64>,
}

impl LineDescriptor {
    /// Endpoints of the line's center stroke, relative to the board
    /// origin. Useful for renderers that draw point-to-point rather
    /// than rotate-a-rectangle.
    pub fn endpoints(&self) -> (Point, Point) {
        match self.orientation {
            Orientation::Horizontal => {
                let y = self.origin.y + self.thickness / 2.0;
                (
                    Point::new(self.origin.x, y),
                    Point::new(self.origin.x + self.length, y),
                )
            }
            Orientation::Vertical => {
                let x = self.origin.x + self.thickness / 2.0;
                (
                    Point::new(x, self.origin.y),
                    Point::new(x, self.origin.y + self.length),
                )
            }
            Orientation::Diagonal | Orientation::AntiDiagonal => {
                let theta = self.rotation_degrees.unwrap_or(0.0).to_radians();
                (
                    self.origin,
                    Point::new(
                        self.origin.x + self.length * theta.cos(),
                        self.origin.y + self.length * theta.sin(),
                    ),
                )
            }
        }
    }
}

/// Error raised by the geometry calculator.
#[derive(Debug, Clone, PartialEq, derive_more::Display)]
pub enum GeometryError {
    /// The triple is not one of the 8 canonical winning triples.
    ///
    /// This is a programming-contract violation and surfaces as a hard
    /// failure rather than a degenerate zero-length line.
    #[display("Triple {} is not a canonical winning triple", _0)]
    UnknownTriple(Triple),
}

impl std::error::Error for GeometryError {}
