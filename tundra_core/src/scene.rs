//! Scene objects and the context they run in.
//!
//! A `PhysicsObject` is anything the engine simulates and draws. It does not
//! own its body: the host does, and the object reaches it through
//! `host()`/`host_mut()`.

use serde::{Deserialize, Serialize};

use crate::{
    math::{Quat, Vec3},
    physics::{base_configure, RigidBodyConstructionInfo, RigidBodyHost},
    render::Graphics,
};

/// Opaque entity id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u64);

/// Timing context handed to every hook.
#[derive(Debug, Clone, Default)]
pub struct Game {
    tick: u64,
    elapsed: f32,
    delta: f32,
}

impl Game {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of completed ticks.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Simulated seconds since start.
    pub fn elapsed_secs(&self) -> f32 {
        self.elapsed
    }

    /// Length of the most recent tick.
    pub fn delta(&self) -> f32 {
        self.delta
    }

    /// Moves the clock forward by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.tick += 1;
        self.delta = dt;
        self.elapsed += dt;
    }
}

/// A simulated, renderable scene object.
pub trait PhysicsObject: Send + Sync {
    /// Adjusts construction info before the body exists.
    ///
    /// Overrides should call `base_configure` first.
    fn configure(info: &mut RigidBodyConstructionInfo)
    where
        Self: Sized,
    {
        base_configure(info);
    }

    fn host(&self) -> &dyn RigidBodyHost;

    fn host_mut(&mut self) -> &mut dyn RigidBodyHost;

    fn update(&mut self, game: &Game, delta: f32) -> anyhow::Result<()>;

    fn render(&self, game: &Game, graphics: &mut dyn Graphics) -> anyhow::Result<()>;

    /// Called for every contact the host reports with `other`.
    fn on_collision(&mut self, _other: &dyn PhysicsObject) {}

    /// Whether this object was launched with a direction, if it tracks that at all.
    fn directional(&self) -> Option<bool> {
        None
    }

    fn position(&self) -> Vec3 {
        self.host().position()
    }

    fn rotation(&self) -> Quat {
        self.host().rotation()
    }

    /// Removes the object from the scene. Idempotent.
    fn kill(&mut self) {
        self.host_mut().kill();
    }

    fn is_alive(&self) -> bool {
        self.host().is_alive()
    }
}
