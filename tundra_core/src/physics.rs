//! Physics host contracts.
//!
//! The engine owns rigid bodies; scene objects only describe the body they
//! want (`BodyDesc`), tweak its construction info through a configure hook,
//! and then read or nudge it through a `RigidBodyHost` handle.

use crate::{
    math::{Quat, Vec3},
    resources::Model,
};

/// Friction applied by `base_configure`.
pub const DEFAULT_FRICTION: f32 = 0.5;
/// Restitution applied by `base_configure`.
pub const DEFAULT_RESTITUTION: f32 = 0.0;

/// What a scene object asks the host to build.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyDesc {
    pub position: Vec3,
    pub model: Model,
    pub orientation: Quat,
    pub scale: Vec3,
    pub mass: f32,
}

/// Construction record handed to `configure` before the body exists.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigidBodyConstructionInfo {
    pub mass: f32,
    pub local_inertia: Vec3,
    pub friction: f32,
    pub restitution: f32,
    pub linear_damping: f32,
    pub angular_damping: f32,
}

impl RigidBodyConstructionInfo {
    /// Base-level info for a solid cube of the given mass and half extents.
    pub fn for_cube(mass: f32, half_extents: Vec3) -> Self {
        Self {
            mass,
            local_inertia: cube_inertia(mass, half_extents),
            friction: 0.0,
            restitution: 0.0,
            linear_damping: 0.0,
            angular_damping: 0.0,
        }
    }
}

/// Diagonal inertia tensor of a solid box.
pub fn cube_inertia(mass: f32, half_extents: Vec3) -> Vec3 {
    let (x2, y2, z2) = (
        4.0 * half_extents.x * half_extents.x,
        4.0 * half_extents.y * half_extents.y,
        4.0 * half_extents.z * half_extents.z,
    );
    Vec3::new(
        mass / 12.0 * (y2 + z2),
        mass / 12.0 * (x2 + z2),
        mass / 12.0 * (x2 + y2),
    )
}

/// Engine defaults every object configure hook should start from.
pub fn base_configure(info: &mut RigidBodyConstructionInfo) {
    info.friction = DEFAULT_FRICTION;
    info.restitution = DEFAULT_RESTITUTION;
}

/// Direct access to body properties.
pub trait BodyHandle: Send + Sync {
    fn linear_velocity(&self) -> Vec3;
    fn set_linear_velocity(&mut self, velocity: Vec3);
}

/// A host-owned body, as seen by the object it belongs to.
pub trait RigidBodyHost: Send + Sync {
    /// Current world position.
    fn position(&self) -> Vec3;
    /// Current orientation.
    fn rotation(&self) -> Quat;
    fn body_mut(&mut self) -> &mut dyn BodyHandle;
    /// Removes the body from simulation and rendering. Calling it again is a no-op.
    fn kill(&mut self);
    fn is_alive(&self) -> bool;
}

/// Body factory.
pub trait PhysicsHost: Send + Sync {
    /// Creates a body for `desc`.
    ///
    /// The host fills in base construction info, calls `configure` exactly
    /// once, and only then instantiates the body. Invalid geometry fails.
    fn construct(
        &mut self,
        desc: &BodyDesc,
        configure: &dyn Fn(&mut RigidBodyConstructionInfo),
    ) -> anyhow::Result<Box<dyn RigidBodyHost>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_configure_keeps_mass() {
        let mut info = RigidBodyConstructionInfo::for_cube(3.0, Vec3::splat(0.2));
        base_configure(&mut info);
        assert_eq!(info.mass, 3.0);
        assert_eq!(info.friction, DEFAULT_FRICTION);
        assert_eq!(info.restitution, DEFAULT_RESTITUTION);
    }

    #[test]
    fn cube_inertia_is_symmetric_for_cubes() {
        let i = cube_inertia(1.0, Vec3::splat(0.5));
        assert!((i.x - 1.0 / 6.0).abs() < 1e-6);
        assert_eq!(i.x, i.y);
        assert_eq!(i.y, i.z);
    }
}
