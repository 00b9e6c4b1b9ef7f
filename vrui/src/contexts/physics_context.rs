use hecs::Entity;
use rapier3d::prelude::*;

use crate::components::Collider as ColliderComponent;

pub const DEFAULT_COLLISION_GROUP: Group = Group::GROUP_1;
pub const UI_COLLISION_GROUP: Group = Group::GROUP_2;

/// Half the thickness of the collider given to a UI surface
pub const UI_SURFACE_HALF_DEPTH: f32 = 0.001;

/// Holds the colliders the pointer ray is tested against.
///
/// UI surfaces don't take part in the simulation, so there's no physics pipeline here: only the
/// sets and the query pipeline needed to answer ray casts.
pub struct PhysicsContext {
    pub query_pipeline: QueryPipeline,
    pub colliders: ColliderSet,
    pub rigid_bodies: RigidBodySet,
    pub island_manager: IslandManager,
}

impl Default for PhysicsContext {
    fn default() -> Self {
        PhysicsContext {
            query_pipeline: QueryPipeline::new(),
            colliders: ColliderSet::new(),
            rigid_bodies: RigidBodySet::new(),
            island_manager: IslandManager::new(),
        }
    }
}

impl PhysicsContext {
    /// Refresh the query pipeline. Must be called after colliders are added, moved or removed.
    pub fn update(&mut self) {
        self.query_pipeline
            .update(&self.rigid_bodies, &self.colliders);
    }

    /// Insert a collider for `entity`, storing the entity in the collider's user data so ray
    /// casts can find their way back to it.
    pub fn insert_collider(
        &mut self,
        entity: Entity,
        mut collider: Collider,
        groups: InteractionGroups,
    ) -> ColliderComponent {
        collider.user_data = entity.to_bits().get() as _;
        collider.set_collision_groups(groups);
        let handle = self.colliders.insert(collider);
        ColliderComponent { handle }
    }

    /// Remove a collider previously added with [`PhysicsContext::insert_collider`]
    pub fn remove_collider(&mut self, collider: &ColliderComponent) {
        self.colliders.remove(
            collider.handle,
            &mut self.island_manager,
            &mut self.rigid_bodies,
            false,
        );
    }

    /// The entity a collider was inserted for, if it's still around
    pub fn entity_for_collider(&self, handle: ColliderHandle) -> Option<Entity> {
        let collider = self.colliders.get(handle)?;
        Entity::from_bits(collider.user_data as u64)
    }

    /// Cast a ray and collect every collider it passes through, nearest first.
    pub fn cast_ray_all(
        &self,
        ray: &Ray,
        max_toi: f32,
        groups: InteractionGroups,
    ) -> Vec<(ColliderHandle, f32)> {
        let filter = QueryFilter::new().groups(groups);
        let mut hits = Vec::new();
        self.query_pipeline.intersections_with_ray(
            &self.rigid_bodies,
            &self.colliders,
            ray,
            max_toi,
            true,
            filter,
            |handle, intersection| {
                hits.push((handle, intersection.toi));
                true
            },
        );
        hits.sort_by(|a, b| a.1.total_cmp(&b.1));
        hits
    }
}
