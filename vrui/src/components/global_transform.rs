use glam::{Affine3A, Vec3};

use crate::util;

/// Component used to represent the global transform of an entity.
/// This is the transformation from local to global space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalTransform(pub Affine3A);

impl Default for GlobalTransform {
    fn default() -> Self {
        Self(Affine3A::IDENTITY)
    }
}

impl GlobalTransform {
    /// Convenience function to convert the [`GlobalTransform`] into a [`rapier3d::na::Isometry3`]
    pub fn to_isometry(&self) -> rapier3d::na::Isometry3<f32> {
        util::isometry_from_affine(&self.0)
    }

    /// Position of the entity in global space
    pub fn translation(&self) -> Vec3 {
        self.0.translation.into()
    }

    /// The direction the entity is facing, ie. its -Z axis, in global space
    pub fn forward(&self) -> Vec3 {
        self.0.transform_vector3(Vec3::NEG_Z).normalize_or_zero()
    }

    /// Convert a point in global space into this entity's local space
    pub fn inverse_transform_point(&self, global_point: Vec3) -> Vec3 {
        self.0.inverse().transform_point3(global_point)
    }
}
