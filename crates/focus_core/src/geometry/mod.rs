//! Proximity geometry
//!
//! Distances from a point to segments and bounded planar rectangles, and the
//! world-space rectangle spanned by a board's mesh bounds.

mod distance;
mod rect;

pub use distance::{
    point_to_rectangle_distance, point_to_segment_distance, project_onto_plane,
    DEFAULT_SURFACE_INSET,
};
pub use rect::Rectangle;
