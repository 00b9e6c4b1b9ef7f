use glam::{Affine3A, Vec2, Vec3};
use hecs::{Entity, World};
use log::{debug, trace};
use rapier3d::prelude::{ColliderBuilder, Group, InteractionGroups, Ray};

use crate::{
    components::{Capabilities, Collider, GlobalTransform, Parent, UiEvents, UiNode},
    contexts::{
        physics_context::{UI_COLLISION_GROUP, UI_SURFACE_HALF_DEPTH},
        PhysicsContext,
    },
    events::{PointerEventData, UiEvent, UiEventKind},
    util, VruiResult,
};

/// Parent chains longer than this are assumed to be cyclic
const MAX_HANDLER_DEPTH: usize = 64;

/// A ray cast from a pointer, in global space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerRay {
    /// Where the ray starts
    pub origin: Vec3,
    /// Which way it's going. Always normalized
    pub direction: Vec3,
}

impl PointerRay {
    /// Create a new ray, normalizing `direction`
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        PointerRay {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// A ray starting at the transform's origin, pointing along its forward axis
    pub fn from_transform(transform: &GlobalTransform) -> Self {
        PointerRay::new(transform.translation(), transform.forward())
    }

    /// The point `distance` along the ray
    pub fn point_at(&self, distance: f32) -> Vec3 {
        self.origin + self.direction * distance
    }
}

/// Something the pointer ray hit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaycastHit {
    /// The UI node that was hit
    pub node: Entity,
    /// Where it was hit, in global space
    pub world_position: Vec3,
    /// How far along the ray the hit was
    pub distance: f32,
}

/// The UI scene graph, as seen by the pointer router.
///
/// Nodes are read only from the router's point of view, apart from the events it dispatches.
/// A missing node, component or capability is never an error: the event just isn't delivered.
pub trait UiScene {
    /// Every UI node the ray passes through, nearest first
    fn raycast_all(&self, ray: &PointerRay) -> Vec<RaycastHit>;

    /// The closest node, starting at `node` and walking up its parents, that can handle
    /// events requiring `capability`
    fn find_handler(&self, node: Entity, capability: Capabilities) -> Option<Entity>;

    /// Convert a point from global space into `node`'s local space
    fn inverse_transform_point(&self, node: Entity, world_point: Vec3) -> Option<Vec3>;

    /// Deliver an event to `target`
    fn dispatch(&mut self, target: Entity, kind: UiEventKind, data: &PointerEventData);
}

/// Parameters used when casting the pointer ray into the world
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaycastSettings {
    /// Hits closer than this are ignored
    pub near_clip: f32,
    /// Hits further than this are ignored
    pub max_distance: f32,
    /// Extra collision groups, besides UI surfaces, that the ray can hit
    pub extra_groups: Group,
}

impl Default for RaycastSettings {
    fn default() -> Self {
        RaycastSettings {
            near_clip: 0.01,
            max_distance: 40.0,
            extra_groups: Group::empty(),
        }
    }
}

/// The default [`UiScene`]: nodes are entities in a hecs `World`, surfaces are colliders in a
/// [`PhysicsContext`], and events are pushed into each node's [`UiEvents`] inbox.
pub struct WorldScene<'a> {
    world: &'a mut World,
    physics_context: &'a PhysicsContext,
    settings: RaycastSettings,
}

impl<'a> WorldScene<'a> {
    /// Wrap a world and physics context for the duration of a tick
    pub fn new(
        world: &'a mut World,
        physics_context: &'a PhysicsContext,
        settings: RaycastSettings,
    ) -> Self {
        WorldScene {
            world,
            physics_context,
            settings,
        }
    }
}

impl<'a> UiScene for WorldScene<'a> {
    fn raycast_all(&self, ray: &PointerRay) -> Vec<RaycastHit> {
        let groups = UI_COLLISION_GROUP | self.settings.extra_groups;
        let rapier_ray = Ray::new(
            util::point_from_vec3(ray.origin),
            util::vector_from_vec3(ray.direction),
        );

        self.physics_context
            .cast_ray_all(
                &rapier_ray,
                self.settings.max_distance,
                InteractionGroups::new(groups, groups),
            )
            .into_iter()
            .filter(|(_, toi)| *toi >= self.settings.near_clip)
            .filter_map(|(handle, toi)| {
                let node = self.physics_context.entity_for_collider(handle)?;
                if self.world.get::<&UiNode>(node).is_err() {
                    trace!(
                        "[VRUI_SCENE] Ray hit an entity that isn't a UI node: {:?}",
                        node
                    );
                    return None;
                }
                Some(RaycastHit {
                    node,
                    world_position: ray.point_at(toi),
                    distance: toi,
                })
            })
            .collect()
    }

    fn find_handler(&self, node: Entity, capability: Capabilities) -> Option<Entity> {
        let mut current = node;
        for _ in 0..MAX_HANDLER_DEPTH {
            if let Ok(ui_node) = self.world.get::<&UiNode>(current) {
                if ui_node.handles(capability) {
                    return Some(current);
                }
            }
            current = self.world.get::<&Parent>(current).ok()?.0;
        }
        None
    }

    fn inverse_transform_point(&self, node: Entity, world_point: Vec3) -> Option<Vec3> {
        self.world
            .get::<&GlobalTransform>(node)
            .ok()
            .map(|transform| transform.inverse_transform_point(world_point))
    }

    fn dispatch(&mut self, target: Entity, kind: UiEventKind, data: &PointerEventData) {
        match self.world.get::<&mut UiEvents>(target) {
            Ok(mut inbox) => inbox.push(UiEvent { kind, data: *data }),
            Err(_) => trace!(
                "[VRUI_SCENE] Dropping {:?} for {:?}, it has no inbox",
                kind,
                target
            ),
        }
    }
}

/// Everything needed to add a node to the UI scene
#[derive(Debug, Clone)]
pub struct UiNodeDescriptor<'a> {
    /// Name of the node, used in logs
    pub name: &'a str,
    /// Events the node can handle
    pub capabilities: Capabilities,
    /// Where the node is, in global space. The surface faces +Z
    pub transform: Affine3A,
    /// Width and height of the surface in metres. Nodes without a size can't be hit directly,
    /// but still handle events bubbling up from their children
    pub world_size: Option<Vec2>,
    /// The node's parent, if it has one
    pub parent: Option<Entity>,
}

/// Convenience function to add a UI node to a World, along with a collider for its surface
pub fn add_ui_node_to_world(
    descriptor: UiNodeDescriptor,
    physics_context: &mut PhysicsContext,
    world: &mut World,
) -> VruiResult<Entity> {
    if let Some(parent) = descriptor.parent {
        if !world.contains(parent) {
            return Err(hecs::NoSuchEntity.into());
        }
    }

    let global_transform = GlobalTransform(descriptor.transform);
    let entity = world.spawn((
        UiNode::new(descriptor.name, descriptor.capabilities),
        global_transform,
        UiEvents::default(),
    ));

    if let Some(parent) = descriptor.parent {
        world.insert_one(entity, Parent(parent))?;
    }

    if let Some(world_size) = descriptor.world_size {
        let (half_width, half_height) = (world_size.x / 2., world_size.y / 2.);
        let collider = ColliderBuilder::cuboid(half_width, half_height, UI_SURFACE_HALF_DEPTH)
            .sensor(true)
            .position(global_transform.to_isometry())
            .build();
        let collider = physics_context.insert_collider(
            entity,
            collider,
            InteractionGroups::new(UI_COLLISION_GROUP, UI_COLLISION_GROUP),
        );
        world.insert_one(entity, collider)?;
        physics_context.update();
    }

    debug!(
        "[VRUI_SCENE] Added node {} ({:?}) as {:?}",
        descriptor.name, descriptor.capabilities, entity
    );
    Ok(entity)
}

/// Remove a UI node, and its collider, from the World
pub fn remove_ui_node_from_world(
    entity: Entity,
    physics_context: &mut PhysicsContext,
    world: &mut World,
) -> VruiResult<()> {
    let collider = world.get::<&Collider>(entity).ok().map(|c| *c);
    if let Some(collider) = collider {
        physics_context.remove_collider(&collider);
        physics_context.update();
    }
    world.despawn(entity)?;
    debug!("[VRUI_SCENE] Removed node {:?}", entity);
    Ok(())
}
