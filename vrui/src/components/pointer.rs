use super::hand::Handedness;

/// A component added to an entity to allow users to interact with UI nodes using their
/// controllers. The ray is cast along the entity's forward (-Z) axis.
///
/// Only the pointer matching the router's active hand is used, and only while it is `Visible`.
#[derive(Debug, Clone, Copy)]
pub struct Pointer {
    /// Which hand is the pointer in?
    pub handedness: Handedness,
    /// How much has the trigger been pulled down?
    pub trigger_value: f32,
}

impl Pointer {
    /// Shortcut helper to create a left pointer
    pub fn left() -> Pointer {
        Pointer {
            handedness: Handedness::Left,
            trigger_value: 0.0,
        }
    }

    /// Shortcut helper to create a right pointer
    pub fn right() -> Pointer {
        Pointer {
            handedness: Handedness::Right,
            trigger_value: 0.0,
        }
    }
}
