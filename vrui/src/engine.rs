use log::{debug, info};

use crate::{
    config::PointerRouterConfig,
    contexts::{InputContext, PhysicsContext},
    router::PointerRouter,
    schedule::ScheduleHook,
    systems::pointers_system,
    VruiResult,
};

/// Builder for `Engine`.
#[derive(Default)]
pub struct EngineBuilder {
    config: Option<PointerRouterConfig>,
}

impl EngineBuilder {
    /// Create an `EngineBuilder`
    pub fn new() -> Self {
        Default::default()
    }

    /// Set the pointer router configuration
    pub fn config(&mut self, config: PointerRouterConfig) -> &mut Self {
        self.config = Some(config);
        self
    }

    /// Build the `Engine`, validating the configuration
    pub fn build(&mut self) -> VruiResult<Engine> {
        let config = self.config.take().unwrap_or_default();
        config.validate()?;
        info!(
            "[VRUI_ENGINE] Pointer router running in {:?} with the {:?} hand",
            config.hooks, config.active_hand
        );
        debug!(
            "[VRUI_ENGINE] Caster fov {}°, near clip {}",
            config.caster_field_of_view, config.caster_near_clip
        );

        Ok(Engine {
            world: Default::default(),
            input_context: Default::default(),
            physics_context: Default::default(),
            pointer_router: PointerRouter::new(config),
            frame: 0,
        })
    }
}

/// The vrui Engine
/// Owns the UI world and everything the pointer router needs from the host.
/// **IMPORTANT**: make sure you call `end_frame` at the end of each frame
pub struct Engine {
    /// World
    pub world: hecs::World,
    /// Controller input, updated by the host
    pub input_context: InputContext,
    /// UI surface colliders
    pub physics_context: PhysicsContext,
    /// The pointer router
    pub pointer_router: PointerRouter,
    frame: u64,
}

impl Engine {
    /// Called by the host at each point in its frame. Runs the pointers system if the router
    /// is registered for `hook`.
    pub fn run_hook(&mut self, hook: ScheduleHook) {
        if self.pointer_router.config().runs_in(hook) {
            pointers_system(self);
        }
    }

    /// Called by the host once the frame has been rendered.
    pub fn end_frame(&mut self) {
        self.pointer_router.on_frame_boundary();
        self.frame += 1;
    }

    /// How many frames have ended since the engine was built
    pub fn frame(&self) -> u64 {
        self.frame
    }
}
