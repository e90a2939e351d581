//! Rigid poses

use super::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Position and orientation, no scale
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Pose {
    pub const IDENTITY: Pose = Pose {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
    };

    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    /// Pose at `position` with no rotation
    pub fn at(x: f32, y: f32, z: f32) -> Self {
        Self::new(Vec3::new(x, y, z), Quat::IDENTITY)
    }

    /// `self` applied after `child`: maps child-local space through this pose
    pub fn compose(&self, child: &Pose) -> Pose {
        Pose {
            position: self.position + self.rotation * child.position,
            rotation: (self.rotation * child.rotation).normalize(),
        }
    }

    /// The pose mapping this pose's space back to its parent's
    pub fn inverse(&self) -> Pose {
        let rotation = self.rotation.inverse();
        Pose {
            position: rotation * -self.position,
            rotation,
        }
    }

    /// Transform a point from local to parent space
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.position + self.rotation * point
    }

    /// Express `world` relative to this pose
    pub fn relative(&self, world: &Pose) -> Pose {
        self.inverse().compose(world)
    }

    /// Rotated +X axis
    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::RIGHT
    }

    /// Rotated +Y axis
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::UP
    }

    pub fn approx_eq(&self, other: &Pose, eps: f32) -> bool {
        (self.position - other.position).length() < eps
            && self.rotation.approx_eq(&other.rotation, eps)
    }
}
