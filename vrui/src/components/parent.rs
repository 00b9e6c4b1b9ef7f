use hecs::Entity;

/// Component added to indicate that a UI node has a parent
/// Used when searching for the node that handles an event
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parent(pub Entity);
