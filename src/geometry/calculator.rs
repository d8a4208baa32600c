//! The winning-line geometry calculator.
//!
//! Transforms a winning triple plus the live rendered rectangle of each
//! board cell into a [`LineDescriptor`] suitable for overlay rendering.
//! The calculator performs no layout reads itself; rectangles arrive
//! from the shell (directly or via [`LayoutProvider`]), which keeps this
//! module pure and unit-testable.

use super::line::{GeometryError, LineDescriptor, Orientation};
use super::space::{Point, Rect};
use crate::game::{Position, Triple, TripleKind};
use tracing::instrument;

/// Fixed stroke thickness of the strike line.
pub const STROKE_THICKNESS: f64 = 6.0;

/// Capability supplying live cell layout to the calculator.
///
/// The shell implements this from whatever it rendered last; tests
/// implement it from fixed rectangles.
pub trait LayoutProvider {
    /// The board container's own bounding-box origin, in viewport
    /// coordinates.
    fn board_origin(&self) -> Point;

    /// The rendered bounding box of the given cell, in viewport
    /// coordinates.
    fn cell_rect(&self, pos: Position) -> Rect;
}

/// Computes the strike line for a winning triple.
///
/// `cell_rects[i]` is the rendered bounding box of cell `i` in viewport
/// coordinates; `board_origin` is the board container's origin. All
/// output coordinates are relative to `board_origin`.
///
/// # Errors
///
/// [`GeometryError::UnknownTriple`] if the triple is not one of the 8
/// canonical winning triples.
#[instrument(skip(cell_rects))]
pub fn compute_line(
    triple: Triple,
    cell_rects: &[Rect; 9],
    board_origin: Point,
) -> Result<LineDescriptor, GeometryError> {
    let kind = triple.kind().ok_or(GeometryError::UnknownTriple(triple))?;

    let [first, _, third] = triple.cells().map(|pos| cell_rects[pos.to_index()]);

    let line = match kind {
        TripleKind::Row => {
            let center_y = first.center().y - board_origin.y;
            LineDescriptor {
                orientation: Orientation::Horizontal,
                origin: Point::new(
                    first.left() - board_origin.x,
                    center_y - STROKE_THICKNESS / 2.0,
                ),
                length: third.right() - first.left(),
                thickness: STROKE_THICKNESS,
                rotation_degrees: None,
            }
        }
        TripleKind::Column => {
            let center_x = first.center().x - board_origin.x;
            LineDescriptor {
                orientation: Orientation::Vertical,
                origin: Point::new(
                    center_x - STROKE_THICKNESS / 2.0,
                    first.top() - board_origin.y,
                ),
                length: third.bottom() - first.top(),
                thickness: STROKE_THICKNESS,
                rotation_degrees: None,
            }
        }
        TripleKind::MainDiagonal | TripleKind::AntiDiagonal => {
            let start = first.center();
            let end = third.center();
            let dx = end.x - start.x;
            let dy = end.y - start.y;
            let orientation = if kind == TripleKind::MainDiagonal {
                Orientation::Diagonal
            } else {
                Orientation::AntiDiagonal
            };
            LineDescriptor {
                orientation,
                origin: Point::new(start.x - board_origin.x, start.y - board_origin.y),
                length: start.distance_to(end),
                thickness: STROKE_THICKNESS,
                rotation_degrees: Some(dy.atan2(dx).to_degrees()),
            }
        }
    };

    Ok(line)
}

/// Gathers rectangles from a [`LayoutProvider`] and computes the line.
#[instrument(skip(provider))]
pub fn compute_line_from(
    provider: &impl LayoutProvider,
    triple: Triple,
) -> Result<LineDescriptor, GeometryError> {
    let cell_rects = Position::ALL.map(|pos| provider.cell_rect(pos));
    compute_line(triple, &cell_rects, provider.board_origin())
}
