//! Projectile box.
//!
//! A small cube that is either placed at rest (a target) or thrown with an
//! initial velocity. A thrown box destroys any resting box it touches; no
//! other pairing has an effect.

use tracing::debug;
use tundra_core::{
    math::{Mat4, Quat, Vec3},
    physics::{base_configure, BodyDesc, PhysicsHost, RigidBodyConstructionInfo, RigidBodyHost},
    render::Graphics,
    resources::Model,
    scene::{Game, PhysicsObject},
};

/// Uniform scale of every box.
pub const BOX_SCALE: f32 = 0.2;
pub const BOX_MASS: f32 = 1.0;
/// Launch velocity is `direction * SPEED_FACTOR`.
pub const SPEED_FACTOR: f32 = 5.0;
pub const THROWN_COLOUR: Vec3 = Vec3::splat(0.2);
pub const TARGET_COLOUR: Vec3 = Vec3::splat(0.8);
pub const BOX_MODEL: Model = Model::CUBE;

/// How a box was created. Fixed for its lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoxKind {
    /// Placed at rest.
    Static,
    /// Thrown with an initial direction.
    Directional,
}

pub struct ProjectileBox {
    kind: BoxKind,
    body: Box<dyn RigidBodyHost>,
}

impl ProjectileBox {
    /// Spawns a box moving at `direction * SPEED_FACTOR`.
    ///
    /// `direction` is not normalized; its length scales the speed.
    pub fn thrown(
        host: &mut dyn PhysicsHost,
        game: &Game,
        position: Vec3,
        direction: Vec3,
    ) -> anyhow::Result<Self> {
        let mut body = host.construct(&Self::desc(position), &<Self as PhysicsObject>::configure)?;
        body.body_mut().set_linear_velocity(direction * SPEED_FACTOR);
        debug!(tick = game.tick(), ?position, ?direction, "Thrown box spawned");
        Ok(Self {
            kind: BoxKind::Directional,
            body,
        })
    }

    /// Spawns a box at rest.
    pub fn placed(host: &mut dyn PhysicsHost, game: &Game, position: Vec3) -> anyhow::Result<Self> {
        let body = host.construct(&Self::desc(position), &<Self as PhysicsObject>::configure)?;
        debug!(tick = game.tick(), ?position, "Target box placed");
        Ok(Self {
            kind: BoxKind::Static,
            body,
        })
    }

    fn desc(position: Vec3) -> BodyDesc {
        BodyDesc {
            position,
            model: BOX_MODEL,
            orientation: Quat::IDENTITY,
            scale: Vec3::splat(BOX_SCALE),
            mass: BOX_MASS,
        }
    }

    pub fn kind(&self) -> BoxKind {
        self.kind
    }

    pub fn is_directional(&self) -> bool {
        self.kind == BoxKind::Directional
    }

    pub fn colour(&self) -> Vec3 {
        match self.kind {
            BoxKind::Directional => THROWN_COLOUR,
            BoxKind::Static => TARGET_COLOUR,
        }
    }

    /// Model-to-world transform from the body's current pose.
    pub fn transform(&self) -> Mat4 {
        Mat4::IDENTITY
            .translate(self.body.position())
            .scale(BOX_SCALE)
            .rotate(self.body.rotation())
    }
}

impl PhysicsObject for ProjectileBox {
    fn configure(info: &mut RigidBodyConstructionInfo) {
        base_configure(info);
        info.mass = BOX_MASS;
    }

    fn host(&self) -> &dyn RigidBodyHost {
        self.body.as_ref()
    }

    fn host_mut(&mut self) -> &mut dyn RigidBodyHost {
        self.body.as_mut()
    }

    fn update(&mut self, _game: &Game, _delta: f32) -> anyhow::Result<()> {
        Ok(())
    }

    fn render(&self, _game: &Game, graphics: &mut dyn Graphics) -> anyhow::Result<()> {
        graphics.set_colour(self.colour());
        graphics.draw_model(BOX_MODEL, self.transform());
        Ok(())
    }

    fn on_collision(&mut self, other: &dyn PhysicsObject) {
        if !self.is_directional() && other.directional() == Some(true) {
            debug!(position = ?self.body.position(), "Target box hit by thrown box");
            self.kill();
        }
    }

    fn directional(&self) -> Option<bool> {
        Some(self.is_directional())
    }
}
