//! Core module - app states, events, and shared primitives.
//!
//! This module provides the foundation that all other launcher plugins build upon.

mod events;
mod plugin;
mod states;
mod tween;

pub use events::*;
pub use plugin::CorePlugin;
pub use states::*;
pub use tween::*;
