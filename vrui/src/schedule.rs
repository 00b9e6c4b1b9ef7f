use serde::{Deserialize, Serialize};

/// The points in the host's frame where the pointer router can run.
///
/// Hosts call [`crate::Engine::run_hook`] at each of these; the router only runs for the hooks
/// listed in its configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScheduleHook {
    /// Once per frame, before the simulation is updated
    Update,
    /// Once per physics step
    FixedUpdate,
    /// Once per frame, after the simulation has been updated
    LateUpdate,
    /// Just before the frame is rendered, after poses have been predicted
    BeforeRender,
}

/// A one-shot continuation that fires at the next frame boundary.
///
/// Arming an already pending deferral does nothing, so two requests before the boundary
/// collapse into one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameDeferral {
    pending: bool,
}

impl FrameDeferral {
    /// Schedule the continuation for the next frame boundary
    pub fn arm(&mut self) {
        self.pending = true;
    }

    /// Drop the continuation without running it
    pub fn cancel(&mut self) {
        self.pending = false;
    }

    /// Is the continuation waiting for a frame boundary?
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Signal a frame boundary. Returns true if the continuation should run now.
    pub fn on_frame_boundary(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }
}
