use log::warn;
use rapier3d::prelude::Group;
use serde::{Deserialize, Serialize};

use crate::{
    components::Handedness,
    input::{ControllerBinding, Thumbstick},
    scene::RaycastSettings,
    schedule::ScheduleHook,
    VruiError, VruiResult,
};

/// Settings for the [`crate::router::PointerRouter`].
///
/// Every field has a default, so a config file only needs to list what it changes:
/// ```
/// let config = vrui::config::PointerRouterConfig::from_json(r#"{ "active_hand": "Left" }"#)
///     .unwrap();
/// assert_eq!(config.active_hand, vrui::components::Handedness::Left);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointerRouterConfig {
    /// Which hand the pointer ray is cast from
    pub active_hand: Handedness,
    /// Which thumbstick sends scroll events. `None` disables scrolling
    pub scroll_binding: Option<Thumbstick>,
    /// Scroll input is multiplied by this before being sent
    pub scroll_multiplier: f32,
    /// Controller inputs that count as pressing the pointer
    pub controller_bindings: Vec<ControllerBinding>,
    /// How far, in the hit node's local space, the pointer must move while pressed before the
    /// press becomes a drag
    pub drag_threshold: f32,
    /// Field of view of the caster in degrees. Doesn't affect hit testing; exposed for hosts
    /// that render the caster
    pub caster_field_of_view: f32,
    /// Hits closer to the pointer than this are ignored
    pub caster_near_clip: f32,
    /// Hits further from the pointer than this are ignored
    pub max_raycast_distance: f32,
    /// Bits of extra collision groups the pointer can hit, so physics objects with a `UiNode`
    /// can receive pointer events
    pub physics_raycast_groups: Option<u32>,
    /// If true, the host positions the `Pointer` entity itself and the pointers system leaves
    /// its transform alone. Otherwise it's set from the controller's aim pose every tick
    pub use_external_position_source: bool,
    /// The schedule hooks the router runs in
    pub hooks: Vec<ScheduleHook>,
}

impl Default for PointerRouterConfig {
    fn default() -> Self {
        PointerRouterConfig {
            active_hand: Handedness::Right,
            scroll_binding: Some(Thumbstick::RightThumbstick),
            scroll_multiplier: 2.0,
            controller_bindings: vec![ControllerBinding::RightTrigger],
            drag_threshold: 0.01,
            caster_field_of_view: 5.0,
            caster_near_clip: 0.01,
            max_raycast_distance: 40.0,
            physics_raycast_groups: None,
            use_external_position_source: false,
            hooks: vec![ScheduleHook::Update],
        }
    }
}

impl PointerRouterConfig {
    /// Parse a config from JSON and validate it
    pub fn from_json(json: &str) -> VruiResult<Self> {
        let config: PointerRouterConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every value is in range
    pub fn validate(&self) -> VruiResult<()> {
        if !self.drag_threshold.is_finite() || self.drag_threshold < 0. {
            return Err(invalid(format!(
                "drag_threshold must be a non-negative number, got {}",
                self.drag_threshold
            )));
        }
        if !self.scroll_multiplier.is_finite() {
            return Err(invalid("scroll_multiplier must be finite".to_string()));
        }
        if !(self.caster_near_clip > 0.) {
            return Err(invalid(format!(
                "caster_near_clip must be positive, got {}",
                self.caster_near_clip
            )));
        }
        if !(self.max_raycast_distance > self.caster_near_clip) {
            return Err(invalid(format!(
                "max_raycast_distance ({}) must be greater than caster_near_clip ({})",
                self.max_raycast_distance, self.caster_near_clip
            )));
        }
        if !(self.caster_field_of_view > 0. && self.caster_field_of_view < 180.) {
            return Err(invalid(format!(
                "caster_field_of_view must be between 0 and 180 degrees, got {}",
                self.caster_field_of_view
            )));
        }
        if self.hooks.is_empty() {
            return Err(invalid(
                "hooks is empty, so the router would never run".to_string(),
            ));
        }
        if self.controller_bindings.is_empty() {
            warn!("[VRUI_CONFIG] No controller bindings, only the UI action can press the pointer");
        }
        Ok(())
    }

    /// Is the router registered to run in this hook?
    pub fn runs_in(&self, hook: ScheduleHook) -> bool {
        self.hooks.contains(&hook)
    }

    /// The ray casting parameters for this config
    pub fn raycast_settings(&self) -> RaycastSettings {
        RaycastSettings {
            near_clip: self.caster_near_clip,
            max_distance: self.max_raycast_distance,
            extra_groups: self
                .physics_raycast_groups
                .map(Group::from_bits_truncate)
                .unwrap_or_else(Group::empty),
        }
    }
}

fn invalid(message: String) -> VruiError {
    VruiError::InvalidConfig(message)
}
