use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A control on an Oculus Touch style controller that can activate the pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControllerBinding {
    /// Never active
    None,
    /// Left trigger, past its button threshold
    LeftTrigger,
    /// Right trigger, past its button threshold
    RightTrigger,
    /// Left grip, past its button threshold
    LeftGrip,
    /// Right grip, past its button threshold
    RightGrip,
    /// A button on the right controller
    AButton,
    /// B button on the right controller
    BButton,
    /// X button on the left controller
    XButton,
    /// Y button on the left controller
    YButton,
    /// Clicking in the left thumbstick
    LeftThumbstickClick,
    /// Clicking in the right thumbstick
    RightThumbstickClick,
}

/// A two axis input the router can scroll with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Thumbstick {
    /// Left controller thumbstick
    LeftThumbstick,
    /// Right controller thumbstick
    RightThumbstick,
}

/// Where the pointer router gets its input from.
///
/// The router polls these once per tick and never holds onto the results.
pub trait InputSource {
    /// Is the host's UI action ("click") fully pressed?
    fn is_action_active(&self) -> bool;

    /// Is this controller binding currently pressed?
    fn is_binding_active(&self, binding: ControllerBinding) -> bool;

    /// Current position of the given thumbstick, each axis in `-1.0..=1.0`
    fn axis(&self, thumbstick: Thumbstick) -> Vec2;
}
