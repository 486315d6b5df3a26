//! Shared fixtures for the integration tests.

use tundra_core::{math::Vec3, scene::EntityId};
use tundra_demo::{HeadlessScene, ProjectileBox};

/// Installs a test-writer subscriber once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("debug")
        .with_test_writer()
        .try_init();
}

pub fn place(scene: &mut HeadlessScene, at: Vec3) -> anyhow::Result<EntityId> {
    scene.spawn(|host, game| ProjectileBox::placed(host, game, at))
}

pub fn throw(scene: &mut HeadlessScene, at: Vec3, direction: Vec3) -> anyhow::Result<EntityId> {
    scene.spawn(|host, game| ProjectileBox::thrown(host, game, at, direction))
}

/// `directional()` of a live entity.
pub fn directional(scene: &HeadlessScene, id: EntityId) -> Option<bool> {
    scene.get(id).and_then(|o| o.directional())
}

/// Position of a live entity.
pub fn position(scene: &HeadlessScene, id: EntityId) -> Option<Vec3> {
    scene.get(id).map(|o| o.position())
}
