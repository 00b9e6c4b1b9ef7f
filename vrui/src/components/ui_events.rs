use crate::events::UiEvent;

/// An inbox for events the pointer router sends to a UI node.
///
/// Nodes without this component still take part in hit testing, but events sent to them are
/// dropped. Drain it each frame, otherwise it'll keep growing.
#[derive(Debug, Clone, Default)]
pub struct UiEvents {
    events: Vec<UiEvent>,
}

impl UiEvents {
    /// Add an event to the inbox
    pub fn push(&mut self, event: UiEvent) {
        self.events.push(event);
    }

    /// Events received since the inbox was last drained
    pub fn events(&self) -> &[UiEvent] {
        &self.events
    }

    /// Take all pending events
    pub fn drain(&mut self) -> Vec<UiEvent> {
        std::mem::take(&mut self.events)
    }

    /// Have any events been received?
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
