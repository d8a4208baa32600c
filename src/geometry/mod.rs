//! Winning-line geometry: maps a winning triple plus live cell layout
//! to a renderable line descriptor.

mod calculator;
mod line;
mod space;

pub use calculator::{LayoutProvider, STROKE_THICKNESS, compute_line, compute_line_from};
pub use line::{GeometryError, LineDescriptor, Orientation};
pub use space::{Point, Rect};
