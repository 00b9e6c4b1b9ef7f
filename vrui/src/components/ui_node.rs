use bitflags::bitflags;

bitflags! {
    /// The set of event-handling roles a UI node supports
    pub struct Capabilities: u32 {
        /// Receives pointer down, pointer up and click events
        const CLICKABLE = 0b0001;
        /// Receives begin drag, drag and end drag events
        const DRAGGABLE = 0b0010;
        /// Receives scroll events
        const SCROLLABLE = 0b0100;
        /// Receives pointer enter and pointer exit events
        const HOVER_SENSITIVE = 0b1000;
    }
}

/// A component added to an entity to make it part of the UI scene
///
/// A node doesn't need any capabilities of its own: events are delivered to the closest node
/// up the `Parent` chain that can handle them, so a label inside a button still clicks the
/// button.
#[derive(Debug, Clone)]
pub struct UiNode {
    /// Human readable name, used in logs
    pub name: String,
    /// What this node can handle
    pub capabilities: Capabilities,
}

impl UiNode {
    /// Convenience function to create a new node
    pub fn new(name: &str, capabilities: Capabilities) -> Self {
        UiNode {
            name: name.to_string(),
            capabilities,
        }
    }

    /// Can this node handle events requiring `capability`?
    pub fn handles(&self, capability: Capabilities) -> bool {
        self.capabilities.contains(capability)
    }
}
