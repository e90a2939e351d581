//! Math utilities for spatial scenes

mod bounds;
mod pose;
mod quat;
mod vec3;

pub use bounds::BoundingBox;
pub use pose::Pose;
pub use quat::Quat;
pub use vec3::Vec3;
