use glam::Vec3;
use hecs::Entity;
use log::debug;

use crate::{
    components::{Capabilities, Handedness},
    config::PointerRouterConfig,
    events::{PointerEventData, UiEventKind},
    input::InputSource,
    scene::{PointerRay, RaycastHit, UiScene},
    schedule::FrameDeferral,
};

/// Scroll input with a squared length below this is treated as the stick being centred
const SCROLL_EPSILON: f32 = 1e-6;

/// What the pointer is doing, as observed after the last tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouterState {
    /// Not pressed
    Idle,
    /// Pressed, but not moved far enough to drag
    Pressed,
    /// Pressed and moved past the drag threshold
    Dragging,
    /// The scroll stick was moved last tick
    Scrolling,
    /// A drag ended while the pointer was held; waiting for the frame boundary before
    /// processing any more input
    ScrollReset,
}

/// Routes pointer input to UI nodes.
///
/// The router emulates a mouse on top of a single ray cast from the controller: each tick it
/// finds what the ray hits, then sends hover, press, click, drag and scroll events to the nodes
/// able to handle them. At most one node is pressed and one dragged at any time.
///
/// When a drag target disappears while the pointer is still held (a scroll view snapping back,
/// say), the router ends the drag and stops processing until the next frame boundary, so the
/// release can't be mistaken for a click in the same tick.
#[derive(Debug)]
pub struct PointerRouter {
    config: PointerRouterConfig,
    event_data: PointerEventData,
    hovered: Option<Entity>,
    releasing: Option<Entity>,
    initial_pointer_position: Vec3,
    cached_drag_delta: Vec3,
    drag_began: bool,
    drag_cancelled: bool,
    input_down: bool,
    last_input_down: bool,
    is_scrolling: bool,
    was_scrolling: bool,
    scroll_reset: FrameDeferral,
}

impl PointerRouter {
    /// Create a router. The config is expected to have been validated already.
    pub fn new(config: PointerRouterConfig) -> Self {
        let event_data = PointerEventData {
            handedness: config.active_hand,
            ..Default::default()
        };
        PointerRouter {
            config,
            event_data,
            hovered: None,
            releasing: None,
            initial_pointer_position: Vec3::ZERO,
            cached_drag_delta: Vec3::ZERO,
            drag_began: false,
            drag_cancelled: false,
            input_down: false,
            last_input_down: false,
            is_scrolling: false,
            was_scrolling: false,
            scroll_reset: FrameDeferral::default(),
        }
    }

    /// The router's configuration
    pub fn config(&self) -> &PointerRouterConfig {
        &self.config
    }

    /// The hand the pointer is cast from
    pub fn active_hand(&self) -> Handedness {
        self.config.active_hand
    }

    /// Switch the hand the pointer is cast from. Takes effect next tick.
    pub fn set_active_hand(&mut self, hand: Handedness) {
        if self.config.active_hand != hand {
            debug!("[VRUI_POINTERS] Switching pointer to {:?} hand", hand);
        }
        self.config.active_hand = hand;
        self.event_data.handedness = hand;
    }

    /// The node currently pressed
    pub fn pressing(&self) -> Option<Entity> {
        self.event_data.pointer_press
    }

    /// The node currently dragged
    pub fn dragging(&self) -> Option<Entity> {
        self.event_data.pointer_drag
    }

    /// The click handler under the pointer when it was last released
    pub fn releasing(&self) -> Option<Entity> {
        self.releasing
    }

    /// The hover handler the pointer is currently over
    pub fn hovered(&self) -> Option<Entity> {
        self.hovered
    }

    /// What the pointer hit on the last tick it processed
    pub fn current_hit(&self) -> Option<RaycastHit> {
        self.event_data.current_raycast
    }

    /// Is the router waiting for a frame boundary after a drag was cut short?
    pub fn scrolling_stopped(&self) -> bool {
        self.scroll_reset.is_pending()
    }

    /// What the pointer is doing
    pub fn state(&self) -> RouterState {
        if self.scroll_reset.is_pending() {
            RouterState::ScrollReset
        } else if self.is_scrolling {
            RouterState::Scrolling
        } else if self.last_input_down && self.drag_began {
            RouterState::Dragging
        } else if self.last_input_down {
            RouterState::Pressed
        } else {
            RouterState::Idle
        }
    }

    /// Must be called by the host at the end of every frame.
    pub fn on_frame_boundary(&mut self) {
        if self.scroll_reset.on_frame_boundary() {
            debug!("[VRUI_POINTERS] Scroll reset complete, resuming input");
        }
    }

    /// Stop waiting for the frame boundary and resume processing on the next tick.
    pub fn cancel_scroll_reset(&mut self) {
        self.scroll_reset.cancel();
    }

    /// Process one tick of input.
    pub fn process(
        &mut self,
        ray: &PointerRay,
        input: &impl InputSource,
        scene: &mut impl UiScene,
    ) {
        if self.scroll_reset.is_pending() {
            return;
        }

        self.event_data.current_raycast = scene.raycast_all(ray).first().copied();

        let scroll_delta = self
            .config
            .scroll_binding
            .map(|thumbstick| input.axis(thumbstick))
            .unwrap_or_default();
        self.is_scrolling = scroll_delta.length_squared() > SCROLL_EPSILON;
        self.event_data.scroll_delta = if self.is_scrolling {
            scroll_delta * self.config.scroll_multiplier
        } else {
            Default::default()
        };

        if !self.is_scrolling && !self.was_scrolling {
            self.handle_hover(scene);
        }

        // Handle drag
        self.execute(scene, self.event_data.pointer_drag, UiEventKind::Drag);

        if self.is_scrolling {
            self.cancel_drag(scene);
            let scroll_handler = self.current_handler(scene, Capabilities::SCROLLABLE);
            self.execute(scene, scroll_handler, UiEventKind::Scroll);
            return;
        }

        self.input_down = self.input_ready(input);

        if self.input_down && !self.last_input_down {
            self.press_down(scene);
        } else if self.input_down {
            self.press(scene);
        } else if self.last_input_down {
            self.release(scene);
        } else {
            self.was_scrolling = false;
        }

        self.last_input_down = self.input_down;
    }

    fn input_ready(&self, input: &impl InputSource) -> bool {
        input.is_action_active()
            || self
                .config
                .controller_bindings
                .iter()
                .any(|binding| input.is_binding_active(*binding))
    }

    fn handle_hover(&mut self, scene: &mut impl UiScene) {
        let target = self.current_handler(scene, Capabilities::HOVER_SENSITIVE);
        if target == self.hovered {
            return;
        }

        self.execute(scene, self.hovered, UiEventKind::PointerExit);
        self.hovered = target;
        self.execute(scene, target, UiEventKind::PointerEnter);
    }

    fn press_down(&mut self, scene: &mut impl UiScene) {
        self.event_data.press_raycast = self.event_data.current_raycast;
        self.drag_cancelled = false;
        let initial_press = self.press_handler(scene, Capabilities::CLICKABLE);

        if !self.was_scrolling {
            self.set_pressing(initial_press);
            self.execute(scene, self.event_data.pointer_press, UiEventKind::PointerDown);
        }

        let drag_target = self.press_handler(scene, Capabilities::DRAGGABLE);
        self.set_dragging(scene, drag_target);
        if self.scroll_reset.is_pending() {
            return;
        }

        self.drag_began = false;
        self.cached_drag_delta = Vec3::ZERO;
        if self.event_data.pointer_drag.is_some() {
            if let Some(position) = self.local_pointer_position(scene) {
                self.initial_pointer_position = position;
            }
        }
    }

    fn press(&mut self, scene: &mut impl UiScene) {
        self.event_data.press_raycast = self.event_data.current_raycast;

        if !self.was_scrolling {
            let previous = self.event_data.pointer_press;
            let target = self.press_handler(scene, Capabilities::CLICKABLE);

            // The pressed node only changes hands when the pointer moves onto a different
            // click handler; moving off onto nothing keeps nothing pressed.
            if target != previous {
                self.execute(scene, previous, UiEventKind::PointerUp);
                self.set_pressing(target);
                self.execute(scene, target, UiEventKind::PointerDown);
            }
        }

        // A scroll ended this press's drag; it stays ended until the next press.
        if self.drag_cancelled {
            return;
        }

        let drag_target = self.press_handler(scene, Capabilities::DRAGGABLE);
        self.set_dragging(scene, drag_target);
        if self.scroll_reset.is_pending() {
            return;
        }

        if self.event_data.pointer_drag.is_none() {
            return;
        }
        let Some(position) = self.local_pointer_position(scene) else {
            return;
        };

        let change_in_pointer = position - self.initial_pointer_position;
        if change_in_pointer.length() > self.config.drag_threshold {
            self.cached_drag_delta = change_in_pointer;
            if !self.drag_began {
                self.drag_began = true;
                self.execute(scene, self.event_data.pointer_drag, UiEventKind::BeginDrag);
            }
        }
    }

    fn release(&mut self, scene: &mut impl UiScene) {
        self.was_scrolling = false;

        // Use the displacement cached while dragging rather than the live position, the
        // pointer may have already left the node.
        let dragged = (self.event_data.pointer_drag.is_some() || self.drag_cancelled)
            && self.cached_drag_delta.length() > self.config.drag_threshold;

        self.releasing = self.current_handler(scene, Capabilities::CLICKABLE);

        if !dragged && self.event_data.pointer_press == self.releasing {
            self.execute(scene, self.event_data.pointer_press, UiEventKind::PointerClick);
        }

        self.execute(scene, self.event_data.pointer_press, UiEventKind::PointerUp);
        self.execute(scene, self.event_data.pointer_drag, UiEventKind::EndDrag);
        self.execute(scene, self.releasing, UiEventKind::Deselect);

        self.clear_all(scene);
    }

    fn clear_all(&mut self, scene: &mut impl UiScene) {
        self.set_pressing(None);
        self.set_dragging(scene, None);

        self.initial_pointer_position = Vec3::ZERO;
        self.cached_drag_delta = Vec3::ZERO;
        self.drag_began = false;
        self.drag_cancelled = false;
        self.event_data.clear_current_raycast();
    }

    /// End the drag without waiting for a release. No more drag events reach the node until the
    /// pointer is pressed again.
    fn cancel_drag(&mut self, scene: &mut impl UiScene) {
        let Some(dragging) = self.event_data.pointer_drag else {
            return;
        };
        debug!("[VRUI_POINTERS] Scroll ended drag on {:?}", dragging);
        self.execute(scene, Some(dragging), UiEventKind::EndDrag);
        self.event_data.pointer_drag = None;
        self.drag_began = false;
        self.drag_cancelled = true;
    }

    fn set_pressing(&mut self, pressing: Option<Entity>) {
        self.event_data.pointer_press = pressing;
    }

    fn set_dragging(&mut self, scene: &mut impl UiScene, dragging: Option<Entity>) {
        if self.event_data.pointer_drag.is_some() && dragging.is_none() && self.input_down {
            debug!("[VRUI_POINTERS] Drag target lost while held, pausing until the next frame");
            self.was_scrolling = true;
            self.execute(scene, self.event_data.pointer_drag, UiEventKind::EndDrag);
            self.scroll_reset.arm();
        }

        self.event_data.pointer_drag = dragging;
    }

    /// The handler for `capability` under the pointer this tick
    fn current_handler(&self, scene: &impl UiScene, capability: Capabilities) -> Option<Entity> {
        let hit = self.event_data.current_raycast?;
        scene.find_handler(hit.node, capability)
    }

    /// The handler for `capability` under the pointer when it was pressed
    fn press_handler(&self, scene: &impl UiScene, capability: Capabilities) -> Option<Entity> {
        let hit = self.event_data.press_raycast?;
        scene.find_handler(hit.node, capability)
    }

    /// Where the pointer is, in the local space of the node it's hitting
    fn local_pointer_position(&self, scene: &impl UiScene) -> Option<Vec3> {
        let hit = self.event_data.current_raycast?;
        scene.inverse_transform_point(hit.node, hit.world_position)
    }

    fn execute(&self, scene: &mut impl UiScene, target: Option<Entity>, kind: UiEventKind) {
        if let Some(target) = target {
            scene.dispatch(target, kind, &self.event_data);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::Cell, collections::HashMap};

    use glam::Vec2;
    use hecs::World;

    use crate::{
        contexts::{input_context::HandInputState, InputContext},
        input::Thumbstick,
    };

    /// A scene that hits whatever it's told to, uses global space as every node's local space
    /// and records the events it receives.
    #[derive(Default)]
    struct RecordingScene {
        hit: Option<RaycastHit>,
        capabilities: HashMap<Entity, Capabilities>,
        parents: HashMap<Entity, Entity>,
        events: Vec<(Entity, UiEventKind)>,
        raycasts: Cell<usize>,
    }

    impl RecordingScene {
        fn point_at(&mut self, node: Option<Entity>, position: Vec3) {
            self.hit = node.map(|node| RaycastHit {
                node,
                world_position: position,
                distance: 1.0,
            });
        }

        fn take_events(&mut self) -> Vec<(Entity, UiEventKind)> {
            std::mem::take(&mut self.events)
        }

        fn events_of(&self, kind: UiEventKind) -> usize {
            self.events.iter().filter(|(_, k)| *k == kind).count()
        }
    }

    impl UiScene for RecordingScene {
        fn raycast_all(&self, _ray: &PointerRay) -> Vec<RaycastHit> {
            self.raycasts.set(self.raycasts.get() + 1);
            self.hit.into_iter().collect()
        }

        fn find_handler(&self, node: Entity, capability: Capabilities) -> Option<Entity> {
            let mut current = node;
            loop {
                if self
                    .capabilities
                    .get(&current)
                    .map_or(false, |c| c.contains(capability))
                {
                    return Some(current);
                }
                current = *self.parents.get(&current)?;
            }
        }

        fn inverse_transform_point(&self, _node: Entity, world_point: Vec3) -> Option<Vec3> {
            Some(world_point)
        }

        fn dispatch(&mut self, target: Entity, kind: UiEventKind, _data: &PointerEventData) {
            self.events.push((target, kind));
        }
    }

    struct Fixture {
        router: PointerRouter,
        scene: RecordingScene,
        input: InputContext,
        world: World,
    }

    impl Fixture {
        fn new() -> Self {
            Fixture {
                router: PointerRouter::new(PointerRouterConfig::default()),
                scene: RecordingScene::default(),
                input: InputContext::default(),
                world: World::default(),
            }
        }

        fn node(&mut self, capabilities: Capabilities) -> Entity {
            let node = self.world.spawn(());
            self.scene.capabilities.insert(node, capabilities);
            node
        }

        fn set_input(&mut self, trigger_analog: f32, right_thumbstick: Vec2) {
            let right = HandInputState {
                trigger_analog,
                thumbstick_xy: right_thumbstick,
                ..Default::default()
            };
            self.input.update(&Default::default(), &right, None);
        }

        fn tick(&mut self) {
            let ray = PointerRay::new(Vec3::ZERO, Vec3::NEG_Z);
            self.router.process(&ray, &self.input, &mut self.scene);
        }

        fn press(&mut self) {
            self.set_input(1.0, Vec2::ZERO);
            self.tick();
        }

        fn release(&mut self) {
            self.set_input(0.0, Vec2::ZERO);
            self.tick();
        }
    }

    #[test]
    pub fn test_no_hit_no_events() {
        let mut fixture = Fixture::new();

        fixture.tick();
        fixture.press();
        fixture.press();
        fixture.set_input(1.0, Vec2::new(0.0, 0.5));
        fixture.tick();
        fixture.release();

        assert!(fixture.scene.events.is_empty());
        assert_eq!(fixture.router.pressing(), None);
        assert_eq!(fixture.router.state(), RouterState::Idle);
    }

    #[test]
    pub fn test_press_down_is_edge_triggered() {
        let mut fixture = Fixture::new();
        let button = fixture.node(Capabilities::CLICKABLE);
        fixture.scene.point_at(Some(button), Vec3::ZERO);

        fixture.press();
        assert_eq!(fixture.router.pressing(), Some(button));
        assert_eq!(fixture.router.state(), RouterState::Pressed);

        fixture.press();
        fixture.press();
        assert_eq!(
            fixture.scene.take_events(),
            vec![(button, UiEventKind::PointerDown)]
        );

        fixture.release();
        fixture.press();
        assert_eq!(
            fixture.scene.events_of(UiEventKind::PointerDown),
            1,
            "a new press interval gets a new press down"
        );
    }

    #[test]
    pub fn test_click_within_threshold() {
        let mut fixture = Fixture::new();
        let button = fixture.node(Capabilities::CLICKABLE | Capabilities::DRAGGABLE);

        fixture.scene.point_at(Some(button), Vec3::ZERO);
        fixture.press();
        fixture.scene.point_at(Some(button), Vec3::new(0., 0.005, 0.));
        fixture.press();
        fixture.release();

        assert_eq!(
            fixture.scene.take_events(),
            vec![
                (button, UiEventKind::PointerDown),
                (button, UiEventKind::Drag),
                (button, UiEventKind::Drag),
                (button, UiEventKind::PointerClick),
                (button, UiEventKind::PointerUp),
                (button, UiEventKind::EndDrag),
                (button, UiEventKind::Deselect),
            ]
        );
        assert_eq!(fixture.router.pressing(), None);
        assert_eq!(fixture.router.dragging(), None);
        assert_eq!(fixture.router.releasing(), Some(button));
    }

    #[test]
    pub fn test_drag_past_threshold_suppresses_click() {
        let mut fixture = Fixture::new();
        let slider = fixture.node(Capabilities::CLICKABLE | Capabilities::DRAGGABLE);

        fixture.scene.point_at(Some(slider), Vec3::ZERO);
        fixture.press();
        fixture.scene.point_at(Some(slider), Vec3::new(0., 0.02, 0.));
        fixture.press();
        assert_eq!(fixture.router.state(), RouterState::Dragging);
        fixture.scene.point_at(Some(slider), Vec3::new(0., 0.03, 0.));
        fixture.press();
        fixture.release();

        assert_eq!(fixture.scene.events_of(UiEventKind::BeginDrag), 1);
        assert_eq!(fixture.scene.events_of(UiEventKind::PointerClick), 0);
        assert_eq!(fixture.scene.events_of(UiEventKind::PointerUp), 1);
        assert_eq!(fixture.scene.events_of(UiEventKind::EndDrag), 1);
    }

    #[test]
    pub fn test_drag_uses_cached_delta_on_release() {
        let mut fixture = Fixture::new();
        let slider = fixture.node(Capabilities::CLICKABLE | Capabilities::DRAGGABLE);

        fixture.scene.point_at(Some(slider), Vec3::ZERO);
        fixture.press();
        fixture.scene.point_at(Some(slider), Vec3::new(0.05, 0., 0.));
        fixture.press();
        // Back where we started: the live delta is zero, but we dragged.
        fixture.scene.point_at(Some(slider), Vec3::ZERO);
        fixture.press();
        fixture.release();

        assert_eq!(fixture.scene.events_of(UiEventKind::PointerClick), 0);
    }

    #[test]
    pub fn test_release_elsewhere_does_not_click() {
        let mut fixture = Fixture::new();
        let ok = fixture.node(Capabilities::CLICKABLE);
        let cancel = fixture.node(Capabilities::CLICKABLE);

        fixture.scene.point_at(Some(ok), Vec3::ZERO);
        fixture.press();
        fixture.scene.point_at(Some(cancel), Vec3::new(0.3, 0., 0.));
        fixture.press();
        fixture.scene.point_at(None, Vec3::ZERO);
        fixture.press();
        fixture.release();

        assert_eq!(
            fixture.scene.take_events(),
            vec![
                (ok, UiEventKind::PointerDown),
                // Moving onto another click handler hands the press over
                (ok, UiEventKind::PointerUp),
                (cancel, UiEventKind::PointerDown),
                // Moving off onto nothing ends the press without a new target
                (cancel, UiEventKind::PointerUp),
            ]
        );
        assert_eq!(fixture.router.releasing(), None);
    }

    #[test]
    pub fn test_release_on_new_target_clicks_it() {
        let mut fixture = Fixture::new();
        let ok = fixture.node(Capabilities::CLICKABLE);
        let cancel = fixture.node(Capabilities::CLICKABLE);

        fixture.scene.point_at(Some(ok), Vec3::ZERO);
        fixture.press();
        fixture.scene.point_at(Some(cancel), Vec3::new(0.3, 0., 0.));
        fixture.press();
        fixture.release();

        // The press followed the pointer, so the node it was released on is the one clicked.
        assert_eq!(
            fixture.scene.take_events(),
            vec![
                (ok, UiEventKind::PointerDown),
                (ok, UiEventKind::PointerUp),
                (cancel, UiEventKind::PointerDown),
                (cancel, UiEventKind::PointerClick),
                (cancel, UiEventKind::PointerUp),
                (cancel, UiEventKind::Deselect),
            ]
        );
        assert_eq!(fixture.router.releasing(), Some(cancel));
    }

    #[test]
    pub fn test_release_over_nothing_after_losing_press() {
        let mut fixture = Fixture::new();
        let button = fixture.node(Capabilities::CLICKABLE);

        fixture.scene.point_at(Some(button), Vec3::ZERO);
        fixture.press();
        fixture.scene.point_at(None, Vec3::ZERO);
        fixture.release();

        // Released over nothing, so nothing was clicked, but the press still ends.
        assert_eq!(
            fixture.scene.take_events(),
            vec![
                (button, UiEventKind::PointerDown),
                (button, UiEventKind::PointerUp),
            ]
        );
    }

    #[test]
    pub fn test_events_bubble_to_handlers() {
        let mut fixture = Fixture::new();
        let button = fixture.node(Capabilities::CLICKABLE);
        let label = fixture.node(Capabilities::empty());
        fixture.scene.parents.insert(label, button);

        fixture.scene.point_at(Some(label), Vec3::ZERO);
        fixture.press();
        fixture.release();

        assert_eq!(fixture.scene.events_of(UiEventKind::PointerClick), 1);
        assert!(fixture.scene.events.iter().all(|(target, _)| *target == button));
    }

    #[test]
    pub fn test_hover_enter_and_exit() {
        let mut fixture = Fixture::new();
        let first = fixture.node(Capabilities::HOVER_SENSITIVE);
        let second = fixture.node(Capabilities::HOVER_SENSITIVE);

        fixture.scene.point_at(Some(first), Vec3::ZERO);
        fixture.tick();
        fixture.tick();
        assert_eq!(fixture.router.hovered(), Some(first));
        fixture.scene.point_at(Some(second), Vec3::ZERO);
        fixture.tick();
        fixture.scene.point_at(None, Vec3::ZERO);
        fixture.tick();

        assert_eq!(
            fixture.scene.take_events(),
            vec![
                (first, UiEventKind::PointerEnter),
                (first, UiEventKind::PointerExit),
                (second, UiEventKind::PointerEnter),
                (second, UiEventKind::PointerExit),
            ]
        );
        assert_eq!(fixture.router.hovered(), None);
    }

    #[test]
    pub fn test_scroll_ends_drag_and_suppresses_press() {
        let mut fixture = Fixture::new();
        let list = fixture.node(
            Capabilities::SCROLLABLE | Capabilities::DRAGGABLE | Capabilities::HOVER_SENSITIVE,
        );
        let item = fixture.node(Capabilities::CLICKABLE | Capabilities::HOVER_SENSITIVE);
        fixture.scene.parents.insert(item, list);

        fixture.scene.point_at(Some(item), Vec3::ZERO);
        fixture.press();
        assert_eq!(fixture.router.dragging(), Some(list));
        fixture.scene.take_events();

        // Scroll while held, and move onto the list itself.
        fixture.scene.point_at(Some(list), Vec3::new(0., 0.5, 0.));
        fixture.set_input(1.0, Vec2::new(0.0, 0.5));
        fixture.tick();
        assert_eq!(fixture.router.state(), RouterState::Scrolling);

        assert_eq!(
            fixture.scene.take_events(),
            vec![
                (list, UiEventKind::Drag),
                (list, UiEventKind::EndDrag),
                (list, UiEventKind::Scroll),
            ]
        );
        // The press didn't move onto the list, and there was no hover change.
        assert_eq!(fixture.router.pressing(), Some(item));
        assert_eq!(fixture.router.hovered(), Some(item));
        assert_eq!(fixture.router.dragging(), None);
    }

    #[test]
    pub fn test_drag_stays_ended_after_scroll() {
        let mut fixture = Fixture::new();
        let list = fixture.node(Capabilities::SCROLLABLE | Capabilities::DRAGGABLE);

        fixture.scene.point_at(Some(list), Vec3::ZERO);
        fixture.press();
        fixture.scene.point_at(Some(list), Vec3::new(0.05, 0., 0.));
        fixture.press();
        assert_eq!(fixture.router.state(), RouterState::Dragging);
        fixture.scene.take_events();

        // Two ticks of scrolling: the drag ends on the first one only.
        fixture.set_input(1.0, Vec2::new(0.0, 0.5));
        fixture.tick();
        fixture.tick();
        assert_eq!(
            fixture.scene.take_events(),
            vec![
                (list, UiEventKind::Drag),
                (list, UiEventKind::EndDrag),
                (list, UiEventKind::Scroll),
                (list, UiEventKind::Scroll),
            ]
        );

        // Keep holding and moving once the stick is let go.
        fixture.set_input(1.0, Vec2::ZERO);
        fixture.scene.point_at(Some(list), Vec3::new(0.1, 0., 0.));
        fixture.tick();
        fixture.scene.point_at(Some(list), Vec3::new(0.2, 0., 0.));
        fixture.tick();
        assert_eq!(fixture.router.dragging(), None);
        assert_eq!(fixture.router.state(), RouterState::Pressed);
        assert!(fixture.scene.take_events().is_empty());
        assert!(!fixture.router.scrolling_stopped());

        // Releasing doesn't end the drag a second time, or click.
        fixture.release();
        assert!(fixture.scene.take_events().is_empty());

        // The next press drags again from scratch.
        fixture.scene.point_at(Some(list), Vec3::ZERO);
        fixture.press();
        fixture.scene.point_at(Some(list), Vec3::new(0.05, 0., 0.));
        fixture.press();
        assert_eq!(fixture.router.dragging(), Some(list));
        assert_eq!(fixture.scene.events_of(UiEventKind::BeginDrag), 1);
    }

    #[test]
    pub fn test_scroll_delta_is_scaled() {
        struct Scroller(Vec2);
        impl InputSource for Scroller {
            fn is_action_active(&self) -> bool {
                false
            }
            fn is_binding_active(&self, _: crate::input::ControllerBinding) -> bool {
                false
            }
            fn axis(&self, thumbstick: Thumbstick) -> Vec2 {
                match thumbstick {
                    Thumbstick::LeftThumbstick => self.0,
                    Thumbstick::RightThumbstick => Vec2::ZERO,
                }
            }
        }

        struct DeltaScene(Entity, Vec<Vec2>);
        impl UiScene for DeltaScene {
            fn raycast_all(&self, ray: &PointerRay) -> Vec<RaycastHit> {
                vec![RaycastHit {
                    node: self.0,
                    world_position: ray.point_at(1.0),
                    distance: 1.0,
                }]
            }
            fn find_handler(&self, node: Entity, _: Capabilities) -> Option<Entity> {
                Some(node)
            }
            fn inverse_transform_point(&self, _: Entity, p: Vec3) -> Option<Vec3> {
                Some(p)
            }
            fn dispatch(&mut self, _: Entity, kind: UiEventKind, data: &PointerEventData) {
                if kind == UiEventKind::Scroll {
                    self.1.push(data.scroll_delta);
                }
            }
        }

        let mut world = World::default();
        let mut scene = DeltaScene(world.spawn(()), vec![]);
        let mut router = PointerRouter::new(PointerRouterConfig {
            scroll_binding: Some(Thumbstick::LeftThumbstick),
            ..Default::default()
        });
        let ray = PointerRay::new(Vec3::ZERO, Vec3::NEG_Z);

        router.process(&ray, &Scroller(Vec2::new(0.25, -0.5)), &mut scene);
        router.process(&ray, &Scroller(Vec2::ZERO), &mut scene);
        assert_eq!(scene.1, vec![Vec2::new(0.5, -1.0)]);

        let mut router = PointerRouter::new(PointerRouterConfig {
            scroll_binding: None,
            ..Default::default()
        });
        router.process(&ray, &Scroller(Vec2::new(0.25, -0.5)), &mut scene);
        assert_eq!(scene.1.len(), 1);
    }

    #[test]
    pub fn test_lost_drag_target_pauses_until_frame_boundary() {
        let mut fixture = Fixture::new();
        let list = fixture.node(Capabilities::DRAGGABLE | Capabilities::CLICKABLE);

        fixture.scene.point_at(Some(list), Vec3::ZERO);
        fixture.press();
        fixture.scene.take_events();

        // The pointer slides off the list while still held. With no hit, events still go to
        // the nodes already pressed and dragged so they can finish; nothing new is targeted.
        fixture.scene.point_at(None, Vec3::ZERO);
        fixture.press();
        assert!(fixture.router.scrolling_stopped());
        assert_eq!(fixture.router.state(), RouterState::ScrollReset);
        assert_eq!(fixture.router.dragging(), None);
        assert_eq!(
            fixture.scene.take_events(),
            vec![
                (list, UiEventKind::Drag),
                (list, UiEventKind::PointerUp),
                (list, UiEventKind::EndDrag),
            ]
        );

        // Nothing happens until the frame boundary, not even a ray cast.
        let raycasts = fixture.scene.raycasts.get();
        fixture.scene.point_at(Some(list), Vec3::ZERO);
        fixture.press();
        fixture.release();
        assert_eq!(fixture.scene.raycasts.get(), raycasts);
        assert!(fixture.scene.events.is_empty());

        fixture.router.on_frame_boundary();
        assert!(!fixture.router.scrolling_stopped());
        fixture.tick();
        assert_eq!(fixture.scene.raycasts.get(), raycasts + 1);
    }

    #[test]
    pub fn test_after_scroll_reset_no_press_until_released() {
        let mut fixture = Fixture::new();
        let list = fixture.node(Capabilities::DRAGGABLE);
        let button = fixture.node(Capabilities::CLICKABLE);

        fixture.scene.point_at(Some(list), Vec3::ZERO);
        fixture.press();
        fixture.scene.point_at(None, Vec3::ZERO);
        fixture.press();
        fixture.router.on_frame_boundary();
        fixture.scene.take_events();

        // Still held: the router shouldn't start pressing things it passes over.
        fixture.scene.point_at(Some(button), Vec3::ZERO);
        fixture.press();
        assert_eq!(fixture.router.pressing(), None);
        assert!(fixture.scene.take_events().is_empty());

        fixture.release();
        fixture.press();
        assert_eq!(fixture.router.pressing(), Some(button));
        assert_eq!(
            fixture.scene.take_events(),
            vec![
                // Releasing over a button deselects it, even if it wasn't pressed
                (button, UiEventKind::Deselect),
                (button, UiEventKind::PointerDown),
            ]
        );
    }

    #[test]
    pub fn test_cancel_scroll_reset() {
        let mut fixture = Fixture::new();
        let list = fixture.node(Capabilities::DRAGGABLE);

        fixture.scene.point_at(Some(list), Vec3::ZERO);
        fixture.press();
        fixture.scene.point_at(None, Vec3::ZERO);
        fixture.press();
        assert!(fixture.router.scrolling_stopped());

        fixture.router.cancel_scroll_reset();
        let raycasts = fixture.scene.raycasts.get();
        fixture.release();
        assert_eq!(fixture.scene.raycasts.get(), raycasts + 1);
        assert_eq!(fixture.router.state(), RouterState::Idle);
    }

    #[test]
    pub fn test_ui_action_and_bindings() {
        let mut fixture = Fixture::new();
        let button = fixture.node(Capabilities::CLICKABLE);
        fixture.scene.point_at(Some(button), Vec3::ZERO);

        // The left trigger isn't bound by default.
        let left = HandInputState {
            trigger_analog: 1.0,
            ..Default::default()
        };
        fixture.input.update(&left, &Default::default(), None);
        fixture.tick();
        assert_eq!(fixture.router.pressing(), None);

        fixture
            .input
            .update(&Default::default(), &Default::default(), Some(1.0));
        fixture.tick();
        assert_eq!(fixture.router.pressing(), Some(button));

        fixture.router.set_active_hand(Handedness::Left);
        assert_eq!(fixture.router.active_hand(), Handedness::Left);
    }
}
