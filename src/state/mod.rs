//! State Module - Runtime control state systems
//!
//! The interactive side of the crate, kept apart from the rotation engine:
//!
//! - **Input** - crossterm bridge: event conversion, polling, mouse capture
//! - **Controls** - hit regions, binding registry, hover tracking, debounced
//!   resize relayout

pub mod controls;
pub mod input;

pub use controls::*;
pub use input::*;
