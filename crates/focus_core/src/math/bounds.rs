//! Axis-aligned mesh bounds

use super::Vec3;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in an entity's local space
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: Vec3,
    pub max: Vec3,
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::empty()
    }
}

impl BoundingBox {
    /// Create an empty bounding box
    pub fn empty() -> Self {
        Self {
            min: Vec3::new(f32::INFINITY, f32::INFINITY, f32::INFINITY),
            max: Vec3::new(f32::NEG_INFINITY, f32::NEG_INFINITY, f32::NEG_INFINITY),
        }
    }

    /// Create from min and max points
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Create from center and half-extents
    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Smallest box containing every point
    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Self {
        let mut bbox = Self::empty();
        for point in points {
            bbox.expand_to_include(point);
        }
        bbox
    }

    /// Check if the bounding box is empty
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Get the center point
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Get the size (width, height, depth)
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Expand to include a point
    pub fn expand_to_include(&mut self, point: Vec3) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    /// Merge with another bounding box
    pub fn merge(&mut self, other: &BoundingBox) {
        if other.is_empty() {
            return;
        }
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
    }

    /// Check if a point is inside
    pub fn contains_point(&self, point: Vec3) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounding_box() {
        let bbox = BoundingBox::new(Vec3::new(-1.0, -1.0, -1.0), Vec3::new(1.0, 1.0, 1.0));

        assert!(bbox.contains_point(Vec3::ZERO));
        assert!(!bbox.contains_point(Vec3::new(2.0, 0.0, 0.0)));
        assert_eq!(bbox.center(), Vec3::ZERO);
        assert_eq!(bbox.size(), Vec3::new(2.0, 2.0, 2.0));
    }

    #[test]
    fn test_empty_and_merge() {
        let mut bbox = BoundingBox::empty();
        assert!(bbox.is_empty());

        bbox.merge(&BoundingBox::empty());
        assert!(bbox.is_empty());

        bbox.merge(&BoundingBox::from_center_half_extents(Vec3::ZERO, Vec3::new(0.5, 0.5, 0.0)));
        assert!(!bbox.is_empty());
        assert_eq!(bbox.min, Vec3::new(-0.5, -0.5, 0.0));
    }

    #[test]
    fn test_from_points() {
        let bbox = BoundingBox::from_points([
            Vec3::new(0.2, -0.1, 0.0),
            Vec3::new(-0.3, 0.4, 0.01),
            Vec3::new(0.0, 0.0, -0.01),
        ]);

        assert_eq!(bbox.min, Vec3::new(-0.3, -0.1, -0.01));
        assert_eq!(bbox.max, Vec3::new(0.2, 0.4, 0.01));
        assert!(BoundingBox::from_points([]).is_empty());
    }
}
