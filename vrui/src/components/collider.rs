use rapier3d::prelude::ColliderHandle;

/// A component that links a UI node to the collider the pointer ray is tested against
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collider {
    /// A handle to the collider in the `PhysicsContext`
    pub handle: ColliderHandle,
}
