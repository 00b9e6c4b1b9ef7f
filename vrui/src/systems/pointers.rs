use hecs::{With, World};
use log::trace;

use crate::{
    components::{GlobalTransform, Pointer, Visible},
    contexts::{InputContext, PhysicsContext},
    router::PointerRouter,
    scene::{PointerRay, WorldScene},
    Engine,
};

/// Pointers system
/// Allows users to interact with UI nodes using their controllers
pub fn pointers_system(engine: &mut Engine) {
    let world = &mut engine.world;
    let input_context = &engine.input_context;
    let physics_context = &engine.physics_context;
    let pointer_router = &mut engine.pointer_router;

    pointers_system_inner(world, input_context, physics_context, pointer_router);
}

pub fn pointers_system_inner(
    world: &mut World,
    input_context: &InputContext,
    physics_context: &PhysicsContext,
    pointer_router: &mut PointerRouter,
) {
    let active_hand = pointer_router.active_hand();
    let use_external_position_source = pointer_router.config().use_external_position_source;
    let mut active_pointer = None;

    for (_, (pointer, global_transform)) in
        world.query_mut::<With<(&mut Pointer, &mut GlobalTransform), &Visible>>()
    {
        let hand = input_context.hand(pointer.handedness);
        pointer.trigger_value = hand.trigger_analog();

        if !use_external_position_source {
            global_transform.0 = hand.stage_from_aim();
        }

        if pointer.handedness == active_hand {
            active_pointer = Some(*global_transform);
        }
    }

    // No visible pointer for this hand means there's nothing to cast from.
    let Some(global_from_pointer) = active_pointer else {
        trace!("[VRUI_POINTERS] No visible {:?} pointer", active_hand);
        return;
    };

    let ray = PointerRay::from_transform(&global_from_pointer);
    let settings = pointer_router.config().raycast_settings();
    let mut scene = WorldScene::new(world, physics_context, settings);
    pointer_router.process(&ray, input_context, &mut scene);
}
