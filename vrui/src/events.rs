use glam::Vec2;
use hecs::Entity;

use crate::{components::Handedness, scene::RaycastHit};

/// The kinds of event the pointer router can send to a UI node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UiEventKind {
    /// The pointer started pointing at the node
    PointerEnter,
    /// The pointer stopped pointing at the node
    PointerExit,
    /// Input went down while pointing at the node
    PointerDown,
    /// Input was released after going down on the node
    PointerUp,
    /// Input went down and was released on the same node without dragging
    PointerClick,
    /// The pointer moved past the drag threshold while pressed
    BeginDrag,
    /// Sent every tick while the node is being dragged
    Drag,
    /// The drag finished
    EndDrag,
    /// The scroll stick moved while pointing at the node
    Scroll,
    /// The pointer was released over the node
    Deselect,
}

/// The pointer's state at the time an event was sent
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerEventData {
    /// What the pointer is pointing at this tick
    pub current_raycast: Option<RaycastHit>,
    /// What the pointer was pointing at when it was last pressed
    pub press_raycast: Option<RaycastHit>,
    /// Scroll amount this tick, already scaled
    pub scroll_delta: Vec2,
    /// The node currently pressed, if any
    pub pointer_press: Option<Entity>,
    /// The node currently dragged, if any
    pub pointer_drag: Option<Entity>,
    /// The hand casting the pointer
    pub handedness: Handedness,
}

impl PointerEventData {
    /// Forget the current raycast
    pub fn clear_current_raycast(&mut self) {
        self.current_raycast = None;
    }
}

/// An event delivered to a UI node
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UiEvent {
    /// What happened
    pub kind: UiEventKind,
    /// Pointer state when it happened
    pub data: PointerEventData,
}
