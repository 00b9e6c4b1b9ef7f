use glam::{Affine3A, Vec3};
use rapier3d::na;

#[inline]
/// Convert a [`glam::Affine3A`] into a [`rapier3d::na::Isometry3`]. Scale is discarded.
pub fn isometry_from_affine(a: &Affine3A) -> na::Isometry3<f32> {
    let (_, r, t) = a.to_scale_rotation_translation();
    let translation = na::Translation3::new(t.x, t.y, t.z);
    let rotation = na::UnitQuaternion::new_unchecked(na::Quaternion::new(r.w, r.x, r.y, r.z));

    na::Isometry3::from_parts(translation, rotation)
}

#[inline]
pub fn point_from_vec3(v: Vec3) -> na::Point3<f32> {
    na::Point3::new(v.x, v.y, v.z)
}

#[inline]
pub fn vector_from_vec3(v: Vec3) -> na::Vector3<f32> {
    na::Vector3::new(v.x, v.y, v.z)
}
