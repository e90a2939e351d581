//! World-space board rectangles

use super::distance::point_to_rectangle_distance;
use crate::math::{BoundingBox, Pose, Vec3};

/// Four coplanar corners of a board face
///
/// Corner order follows the board's local axes: `v1` at (max.x, max.y), `v2`
/// at (min.x, max.y), `v3` at (min.x, min.y), `v4` at (max.x, min.y). The
/// spanning edges are `v2 - v1` and `v4 - v1`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rectangle {
    pub corners: [Vec3; 4],
}

impl Rectangle {
    pub fn new(v1: Vec3, v2: Vec3, v3: Vec3, v4: Vec3) -> Self {
        Self {
            corners: [v1, v2, v3, v4],
        }
    }

    /// The XY face of local `bounds` placed at the world `pose`
    ///
    /// Returns `None` for empty bounds. Depth (Z extent) is ignored.
    pub fn from_bounds(bounds: &BoundingBox, pose: &Pose) -> Option<Self> {
        if bounds.is_empty() {
            return None;
        }

        let t = pose.position;
        let right = pose.right();
        let up = pose.up();
        let corner = |x: f32, y: f32| t + right * x + up * y;

        Some(Self::new(
            corner(bounds.max.x, bounds.max.y),
            corner(bounds.min.x, bounds.max.y),
            corner(bounds.min.x, bounds.min.y),
            corner(bounds.max.x, bounds.min.y),
        ))
    }

    /// Distance from `point` to this rectangle
    pub fn distance(&self, point: Vec3, inset: f32) -> f32 {
        let [v1, v2, v3, v4] = self.corners;
        point_to_rectangle_distance(point, v1, v2, v3, v4, inset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::DEFAULT_SURFACE_INSET;
    use crate::math::Quat;
    use std::f32::consts::FRAC_PI_2;

    fn meter_board() -> BoundingBox {
        BoundingBox::new(Vec3::new(-0.5, -0.5, -0.01), Vec3::new(0.5, 0.5, 0.01))
    }

    #[test]
    fn test_from_bounds_identity_pose() {
        let rect = Rectangle::from_bounds(&meter_board(), &Pose::IDENTITY).unwrap();

        assert_eq!(rect.corners[0], Vec3::new(0.5, 0.5, 0.0));
        assert_eq!(rect.corners[1], Vec3::new(-0.5, 0.5, 0.0));
        assert_eq!(rect.corners[2], Vec3::new(-0.5, -0.5, 0.0));
        assert_eq!(rect.corners[3], Vec3::new(0.5, -0.5, 0.0));
    }

    #[test]
    fn test_from_bounds_rotated_board() {
        // board on a wall facing +X, 2 m away
        let pose = Pose::new(
            Vec3::new(-2.0, 1.5, 0.0),
            Quat::from_axis_angle(Vec3::UP, FRAC_PI_2),
        );
        let rect = Rectangle::from_bounds(&meter_board(), &pose).unwrap();

        // the face lies in the wall plane, centred on the pose
        assert!(rect.corners.iter().all(|c| (c.x + 2.0).abs() < 1e-5));
        let [v1, _, v3, _] = rect.corners;
        assert!(((v1 + v3) * 0.5 - pose.position).length() < 1e-5);

        let in_front = pose.position + Vec3::RIGHT * 0.05;
        assert!((rect.distance(in_front, DEFAULT_SURFACE_INSET) - 0.05).abs() < 1e-5);
    }

    #[test]
    fn test_empty_bounds_have_no_rectangle() {
        assert!(Rectangle::from_bounds(&BoundingBox::empty(), &Pose::IDENTITY).is_none());
    }
}
