//! `tundra_demo`
//!
//! - `ProjectileBox`: a thrown-or-placed cube scene object
//! - Headless physics host and scene for running objects without an engine
//! - Demo scene and fixed-timestep runner used by the `box_demo` binary

pub mod headless;
pub mod projectile_box;
pub mod runner;

pub use headless::{HeadlessPhysics, HeadlessScene};
pub use projectile_box::{BoxKind, ProjectileBox};
