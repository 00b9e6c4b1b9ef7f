#![allow(missing_docs)]
pub mod input_context;
pub mod physics_context;

pub use input_context::{HandInputContext, HandInputState, InputContext};
pub use physics_context::PhysicsContext;
