/// Link between a UI node and its rapier collider
pub mod collider;
/// Local to global transform
pub mod global_transform;
/// Which hand an entity belongs to
pub mod hand;
/// Parent/child relationships between UI nodes
pub mod parent;
/// Controller pointers
pub mod pointer;
/// Per-node event inbox
pub mod ui_events;
/// UI nodes and their capabilities
pub mod ui_node;
/// Visibility
pub mod visible;

pub use collider::Collider;
pub use global_transform::GlobalTransform;
pub use hand::Handedness;
pub use parent::Parent;
pub use pointer::Pointer;
pub use ui_events::UiEvents;
pub use ui_node::{Capabilities, UiNode};
pub use visible::Visible;
