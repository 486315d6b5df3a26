//! `tundra_core`
//!
//! Contracts between scene objects and the engine around them.
//!
//! Design goals:
//! - Objects never own engine resources; they hold handles.
//! - Traits for abstraction and dependency injection, so objects run headless.
//! - Deterministic math, no `unsafe`.

pub mod config;
pub mod event;
pub mod math;
pub mod physics;
pub mod render;
pub mod resources;
pub mod scene;

pub mod prelude {
    //! Commonly used exports.

    pub use crate::config::*;
    pub use crate::event::*;
    pub use crate::math::*;
    pub use crate::physics::*;
    pub use crate::render::*;
    pub use crate::resources::*;
    pub use crate::scene::*;
}
