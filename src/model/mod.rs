//! Data model types for road reconstruction.

mod point;
mod polyline;
mod road;
mod segment;

pub use point::Point;
pub use polyline::Polyline;
pub use road::{Road, WidthSource};
pub use segment::RawSegment;
