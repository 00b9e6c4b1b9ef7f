#![deny(missing_docs)]

//! Pointer-driven UI for VR. 👉
//!
//! `vrui` lets players interact with world-space UI using a ray cast from their controller, the
//! same way they would with a mouse on a flat screen. Each tick the [`router::PointerRouter`]
//! casts a ray from the active hand, works out what it's pointing at and sends press, click,
//! drag, scroll and hover events to the UI nodes that can handle them.
//!
//! # Getting started
//! Build an [`Engine`] with [`EngineBuilder`], add some UI with
//! [`scene::add_ui_node_to_world`] and a [`components::Pointer`] for each hand, then each frame:
//!
//! 1. Feed controller state into [`contexts::InputContext::update`]
//! 1. Call [`Engine::run_hook`] for every [`schedule::ScheduleHook`] your host exposes
//! 1. Call [`Engine::end_frame`] once the frame has been rendered
//!
//! Events land in the [`components::UiEvents`] inbox of each node.

pub use engine::{Engine, EngineBuilder};
pub use glam;
pub use hecs;
pub use rapier3d;
pub use vrui_error::{VruiError, VruiResult};

/// Components are data attached to entities in the UI world
pub mod components;
/// Configuration for the pointer router
pub mod config;
/// Contexts are wrappers around state that comes from outside the UI world
pub mod contexts;
mod engine;
/// Events delivered to UI nodes
pub mod events;
/// Abstraction over controller input
pub mod input;
/// The pointer router state machine
pub mod router;
/// Abstraction over the UI scene graph, and the default hecs + rapier implementation
pub mod scene;
/// Scheduling hooks and frame-boundary continuations
pub mod schedule;
/// Systems are functions called each tick to update the UI world
pub mod systems;
mod util;
mod vrui_error;
