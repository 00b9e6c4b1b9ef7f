#![allow(missing_docs)]
pub mod pointers;

pub use pointers::pointers_system;
