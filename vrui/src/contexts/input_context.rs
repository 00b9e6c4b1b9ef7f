use glam::{Affine3A, Vec2};

use crate::{
    components::Handedness,
    input::{ControllerBinding, InputSource, Thumbstick},
};

/// Analog values above this count as the button being pressed
pub const ANALOG_BUTTON_THRESHOLD: f32 = 0.1;

/// A raw sample of one controller, as read from the XR runtime by the host
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HandInputState {
    /// A on the right controller, X on the left
    pub primary_button: bool,
    /// B on the right controller, Y on the left
    pub secondary_button: bool,
    /// Menu button. Only the left controller has one on Oculus Touch
    pub menu_button: bool,
    /// Thumbstick pressed in
    pub thumbstick_click: bool,
    /// How far the grip is squeezed, `0.0..=1.0`
    pub grip_analog: f32,
    /// How far the trigger is pulled, `0.0..=1.0`
    pub trigger_analog: f32,
    /// Thumbstick position
    pub thumbstick_xy: Vec2,
    /// Pose of the controller's aim space, relative to the stage
    pub stage_from_aim: Affine3A,
}

#[derive(Debug, Default)]
pub struct HandInputContext {
    // boolean input
    primary_button: bool,
    primary_button_prev: bool,
    secondary_button: bool,
    secondary_button_prev: bool,
    menu_button: bool,
    menu_button_prev: bool,
    grip_button: bool,
    grip_button_prev: bool,
    trigger_button: bool,
    trigger_button_prev: bool,
    thumbstick_click: bool,
    thumbstick_click_prev: bool,
    // float input
    grip_analog: f32,
    trigger_analog: f32,
    // vec2 input
    thumbstick_xy: Vec2,
    // pose input
    stage_from_aim: Affine3A,
}

impl HandInputContext {
    pub fn primary_button(&self) -> bool {
        self.primary_button
    }
    pub fn primary_button_just_pressed(&self) -> bool {
        self.primary_button && !self.primary_button_prev
    }
    pub fn primary_button_just_released(&self) -> bool {
        !self.primary_button && self.primary_button_prev
    }
    pub fn secondary_button(&self) -> bool {
        self.secondary_button
    }
    pub fn secondary_button_just_pressed(&self) -> bool {
        self.secondary_button && !self.secondary_button_prev
    }
    pub fn secondary_button_just_released(&self) -> bool {
        !self.secondary_button && self.secondary_button_prev
    }
    pub fn menu_button(&self) -> bool {
        self.menu_button
    }
    pub fn menu_button_just_pressed(&self) -> bool {
        self.menu_button && !self.menu_button_prev
    }
    pub fn menu_button_just_released(&self) -> bool {
        !self.menu_button && self.menu_button_prev
    }
    pub fn grip_button(&self) -> bool {
        self.grip_button
    }
    pub fn grip_button_just_pressed(&self) -> bool {
        self.grip_button && !self.grip_button_prev
    }
    pub fn grip_button_just_released(&self) -> bool {
        !self.grip_button && self.grip_button_prev
    }
    pub fn trigger_button(&self) -> bool {
        self.trigger_button
    }
    pub fn trigger_button_just_pressed(&self) -> bool {
        self.trigger_button && !self.trigger_button_prev
    }
    pub fn trigger_button_just_released(&self) -> bool {
        !self.trigger_button && self.trigger_button_prev
    }
    pub fn thumbstick_click(&self) -> bool {
        self.thumbstick_click
    }
    pub fn thumbstick_click_just_pressed(&self) -> bool {
        self.thumbstick_click && !self.thumbstick_click_prev
    }
    pub fn thumbstick_click_just_released(&self) -> bool {
        !self.thumbstick_click && self.thumbstick_click_prev
    }
    pub fn grip_analog(&self) -> f32 {
        self.grip_analog
    }
    pub fn trigger_analog(&self) -> f32 {
        self.trigger_analog
    }
    pub fn thumbstick_xy(&self) -> Vec2 {
        self.thumbstick_xy
    }
    pub fn stage_from_aim(&self) -> Affine3A {
        self.stage_from_aim
    }

    fn update(&mut self, state: &HandInputState) {
        self.primary_button_prev = self.primary_button;
        self.secondary_button_prev = self.secondary_button;
        self.menu_button_prev = self.menu_button;
        self.grip_button_prev = self.grip_button;
        self.trigger_button_prev = self.trigger_button;
        self.thumbstick_click_prev = self.thumbstick_click;

        self.primary_button = state.primary_button;
        self.secondary_button = state.secondary_button;
        self.menu_button = state.menu_button;
        self.thumbstick_click = state.thumbstick_click;
        self.grip_analog = state.grip_analog;
        self.grip_button = self.grip_analog > ANALOG_BUTTON_THRESHOLD;
        self.trigger_analog = state.trigger_analog;
        self.trigger_button = self.trigger_analog > ANALOG_BUTTON_THRESHOLD;
        self.thumbstick_xy = state.thumbstick_xy;
        self.stage_from_aim = state.stage_from_aim;
    }
}

#[derive(Debug, Default)]
/// Context that holds input state. Allows the pointer router to query for input without having
/// to worry about XR runtime internals.
///
/// The host is responsible for sampling the controllers and calling [`InputContext::update`]
/// once per frame, before any pointer systems run.
pub struct InputContext {
    pub left: HandInputContext,
    pub right: HandInputContext,
    /// Value of the host's UI action, if it has one bound
    ui_action: Option<f32>,
}

impl InputContext {
    /// Synchronize the context state with fresh samples from the controllers.
    pub fn update(
        &mut self,
        left: &HandInputState,
        right: &HandInputState,
        ui_action: Option<f32>,
    ) {
        self.left.update(left);
        self.right.update(right);
        self.ui_action = ui_action;
    }

    /// Get the context for one hand
    pub fn hand(&self, handedness: Handedness) -> &HandInputContext {
        match handedness {
            Handedness::Left => &self.left,
            Handedness::Right => &self.right,
        }
    }

    /// Current value of the UI action
    pub fn ui_action(&self) -> Option<f32> {
        self.ui_action
    }
}

impl InputSource for InputContext {
    fn is_action_active(&self) -> bool {
        // Only a full press activates the action.
        self.ui_action.map_or(false, |value| value >= 1.0)
    }

    fn is_binding_active(&self, binding: ControllerBinding) -> bool {
        match binding {
            ControllerBinding::None => false,
            ControllerBinding::LeftTrigger => self.left.trigger_button(),
            ControllerBinding::RightTrigger => self.right.trigger_button(),
            ControllerBinding::LeftGrip => self.left.grip_button(),
            ControllerBinding::RightGrip => self.right.grip_button(),
            ControllerBinding::AButton => self.right.primary_button(),
            ControllerBinding::BButton => self.right.secondary_button(),
            ControllerBinding::XButton => self.left.primary_button(),
            ControllerBinding::YButton => self.left.secondary_button(),
            ControllerBinding::LeftThumbstickClick => self.left.thumbstick_click(),
            ControllerBinding::RightThumbstickClick => self.right.thumbstick_click(),
        }
    }

    fn axis(&self, thumbstick: Thumbstick) -> Vec2 {
        match thumbstick {
            Thumbstick::LeftThumbstick => self.left.thumbstick_xy(),
            Thumbstick::RightThumbstick => self.right.thumbstick_xy(),
        }
    }
}
