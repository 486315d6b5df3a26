//! Headless engine.
//!
//! Stand-ins for the physics host and scene so objects can run without a
//! real engine. Bodies move kinematically (position += velocity * dt, no
//! forces) and contacts are plain overlap tests between axis-aligned boxes.
//! Good enough for tests and the demo; not a physics engine.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use anyhow::{bail, Context};
use tracing::{debug, trace};
use tundra_core::{
    event::ContactQueue,
    math::{Quat, Vec3},
    physics::{BodyDesc, BodyHandle, PhysicsHost, RigidBodyConstructionInfo, RigidBodyHost},
    render::Graphics,
    resources::ModelLibrary,
    scene::{EntityId, Game, PhysicsObject},
};

/// Stable id of a body inside `HeadlessPhysics`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyId(pub usize);

/// Everything the headless host knows about one body.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyState {
    pub position: Vec3,
    pub rotation: Quat,
    pub velocity: Vec3,
    pub half_extents: Vec3,
    pub info: RigidBodyConstructionInfo,
    pub alive: bool,
    /// Number of `set_linear_velocity` calls.
    pub velocity_writes: u32,
    /// Number of effective kills (0 or 1).
    pub kills: u32,
}

type SharedState = Arc<RwLock<BodyState>>;

fn read(state: &SharedState) -> RwLockReadGuard<'_, BodyState> {
    state.read().unwrap_or_else(PoisonError::into_inner)
}

fn write(state: &SharedState) -> RwLockWriteGuard<'_, BodyState> {
    state.write().unwrap_or_else(PoisonError::into_inner)
}

/// Handle given to the object that owns a body.
pub struct HeadlessBody {
    id: BodyId,
    state: SharedState,
}

impl BodyHandle for HeadlessBody {
    fn linear_velocity(&self) -> Vec3 {
        read(&self.state).velocity
    }

    fn set_linear_velocity(&mut self, velocity: Vec3) {
        let mut s = write(&self.state);
        s.velocity = velocity;
        s.velocity_writes += 1;
    }
}

impl RigidBodyHost for HeadlessBody {
    fn position(&self) -> Vec3 {
        read(&self.state).position
    }

    fn rotation(&self) -> Quat {
        read(&self.state).rotation
    }

    fn body_mut(&mut self) -> &mut dyn BodyHandle {
        self
    }

    fn kill(&mut self) {
        let mut s = write(&self.state);
        if !s.alive {
            trace!(body = ?self.id, "Kill on dead body ignored");
            return;
        }
        s.alive = false;
        s.kills += 1;
        debug!(body = ?self.id, "Body removed");
    }

    fn is_alive(&self) -> bool {
        read(&self.state).alive
    }
}

/// Kinematic body host.
///
/// `BodyId`s are handed out in construction order and never reused; dead
/// bodies are dropped by `reclaim`.
#[derive(Default)]
pub struct HeadlessPhysics {
    pub models: ModelLibrary,
    bodies: Vec<(BodyId, SharedState)>,
    next_id: usize,
}

impl HeadlessPhysics {
    fn validate(&self, desc: &BodyDesc) -> anyhow::Result<()> {
        if !desc.position.is_finite() {
            bail!("body position must be finite, got {:?}", desc.position);
        }
        let s = desc.scale;
        if !s.is_finite() || s.x <= 0.0 || s.y <= 0.0 || s.z <= 0.0 {
            bail!("body scale must be positive, got {:?}", s);
        }
        if !desc.mass.is_finite() || desc.mass < 0.0 {
            bail!("body mass must be non-negative, got {}", desc.mass);
        }
        if !self.models.contains(desc.model) {
            bail!("unknown model {:?}", desc.model);
        }
        Ok(())
    }

    /// Most recently constructed body, if still held.
    pub fn last_body(&self) -> Option<BodyId> {
        self.bodies.last().map(|(id, _)| *id)
    }

    /// Total bodies ever constructed; the id the next body will get.
    pub fn constructed(&self) -> usize {
        self.next_id
    }

    /// Bodies currently held, dead ones included until `reclaim`.
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn live(&self) -> usize {
        self.bodies.iter().filter(|(_, s)| read(s).alive).count()
    }

    /// Snapshot of a body's state.
    pub fn state(&self, id: BodyId) -> Option<BodyState> {
        self.bodies
            .iter()
            .find(|(b, _)| *b == id)
            .map(|(_, s)| read(s).clone())
    }

    /// Kills and drops every body with an id of at least `mark`.
    ///
    /// Handles to those bodies that are still around report dead.
    pub fn discard_since(&mut self, mark: usize) {
        self.bodies.retain(|(id, s)| {
            if id.0 < mark {
                return true;
            }
            write(s).alive = false;
            debug!(body = ?id, "Body discarded");
            false
        });
    }

    /// Drops dead bodies. Returns how many were dropped.
    pub fn reclaim(&mut self) -> usize {
        let before = self.bodies.len();
        self.bodies.retain(|(_, s)| read(s).alive);
        before - self.bodies.len()
    }

    /// Advances live bodies by their velocity.
    pub fn step(&mut self, dt: f32) {
        for (_, body) in &self.bodies {
            let mut s = write(body);
            if s.alive {
                s.position = s.position + s.velocity * dt;
            }
        }
    }

    /// Pairs of live bodies whose boxes overlap, older body first.
    pub fn contacts(&self) -> Vec<(BodyId, BodyId)> {
        let live: Vec<(BodyId, Vec3, Vec3)> = self
            .bodies
            .iter()
            .filter_map(|(id, b)| {
                let s = read(b);
                s.alive.then_some((*id, s.position, s.half_extents))
            })
            .collect();

        let mut out = Vec::new();
        for (n, &(i, pa, ha)) in live.iter().enumerate() {
            for &(j, pb, hb) in &live[n + 1..] {
                let d = pa - pb;
                if d.x.abs() <= ha.x + hb.x && d.y.abs() <= ha.y + hb.y && d.z.abs() <= ha.z + hb.z
                {
                    out.push((i, j));
                }
            }
        }
        out
    }
}

impl PhysicsHost for HeadlessPhysics {
    fn construct(
        &mut self,
        desc: &BodyDesc,
        configure: &dyn Fn(&mut RigidBodyConstructionInfo),
    ) -> anyhow::Result<Box<dyn RigidBodyHost>> {
        self.validate(desc)?;
        let half_extent = self
            .models
            .get(desc.model)
            .map(|m| m.half_extent)
            .context("model vanished during construction")?;
        let half_extents = desc.scale * half_extent;

        let mut info = RigidBodyConstructionInfo::for_cube(desc.mass, half_extents);
        configure(&mut info);
        if !info.mass.is_finite() || info.mass < 0.0 {
            bail!("configured mass must be non-negative, got {}", info.mass);
        }

        let id = BodyId(self.next_id);
        self.next_id += 1;
        let state = Arc::new(RwLock::new(BodyState {
            position: desc.position,
            rotation: desc.orientation.normalize(),
            velocity: Vec3::ZERO,
            half_extents,
            info,
            alive: true,
            velocity_writes: 0,
            kills: 0,
        }));
        self.bodies.push((id, Arc::clone(&state)));
        trace!(body = ?id, position = ?desc.position, mass = info.mass, "Body constructed");

        Ok(Box::new(HeadlessBody { id, state }))
    }
}

struct Slot {
    id: EntityId,
    body: BodyId,
    object: Box<dyn PhysicsObject>,
}

/// Returns `(&mut slots[i], &slots[j])`. `i != j`.
fn pair_mut(slots: &mut [Slot], i: usize, j: usize) -> (&mut Slot, &Slot) {
    if i < j {
        let (lo, hi) = slots.split_at_mut(j);
        (&mut lo[i], &hi[0])
    } else {
        let (lo, hi) = slots.split_at_mut(i);
        (&mut hi[0], &lo[j])
    }
}

/// Flat list of objects driven by a fixed tick.
#[derive(Default)]
pub struct HeadlessScene {
    game: Game,
    physics: HeadlessPhysics,
    slots: Vec<Slot>,
    contacts: ContactQueue,
    next_id: u64,
    spawned: u64,
    killed: u64,
}

impl HeadlessScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an object built by `make`, which must construct exactly one body.
    ///
    /// On failure every body `make` constructed is discarded.
    pub fn spawn<T, F>(&mut self, make: F) -> anyhow::Result<EntityId>
    where
        T: PhysicsObject + 'static,
        F: FnOnce(&mut dyn PhysicsHost, &Game) -> anyhow::Result<T>,
    {
        let mark = self.physics.constructed();
        let object = match make(&mut self.physics, &self.game) {
            Ok(object) => object,
            Err(e) => {
                self.physics.discard_since(mark);
                return Err(e);
            }
        };
        let built = self.physics.constructed() - mark;
        if built != 1 {
            self.physics.discard_since(mark);
            bail!("spawn must construct exactly one body, constructed {built}");
        }
        let body = BodyId(mark);

        let id = EntityId(self.next_id);
        self.next_id += 1;
        self.spawned += 1;
        self.slots.push(Slot {
            id,
            body,
            object: Box::new(object),
        });
        debug!(entity = ?id, body = ?body, "Entity spawned");
        Ok(id)
    }

    /// Queues a contact for delivery on the next step.
    pub fn inject_contact(&mut self, a: EntityId, b: EntityId) {
        self.contacts.push(a, b);
    }

    /// Kills an entity from outside. Returns false if it is already gone.
    pub fn kill(&mut self, id: EntityId) -> bool {
        match self.slots.iter_mut().find(|s| s.id == id) {
            Some(slot) => {
                slot.object.kill();
                true
            }
            None => false,
        }
    }

    /// Runs one tick: update, physics, contacts, render, cull.
    pub fn step(&mut self, dt: f32, graphics: &mut dyn Graphics) -> anyhow::Result<()> {
        self.game.advance(dt);

        for slot in self.slots.iter_mut().filter(|s| s.object.is_alive()) {
            slot.object
                .update(&self.game, dt)
                .with_context(|| format!("update {:?}", slot.id))?;
        }

        self.physics.step(dt);
        for (a, b) in self.physics.contacts() {
            if let (Some(ea), Some(eb)) = (self.entity_of(a), self.entity_of(b)) {
                self.contacts.push(ea, eb);
            }
        }
        self.dispatch_contacts();

        graphics.begin_frame();
        for slot in self.slots.iter().filter(|s| s.object.is_alive()) {
            slot.object
                .render(&self.game, graphics)
                .with_context(|| format!("render {:?}", slot.id))?;
        }
        graphics.end_frame();

        self.cull();
        trace!(tick = self.game.tick(), alive = self.slots.len(), "Scene stepped");
        Ok(())
    }

    fn entity_of(&self, body: BodyId) -> Option<EntityId> {
        self.slots.iter().find(|s| s.body == body).map(|s| s.id)
    }

    fn index_of(&self, id: EntityId) -> Option<usize> {
        self.slots.iter().position(|s| s.id == id)
    }

    fn dispatch_contacts(&mut self) {
        for contact in self.contacts.drain() {
            let (Some(i), Some(j)) = (self.index_of(contact.a), self.index_of(contact.b)) else {
                continue;
            };
            if i == j {
                continue;
            }
            let (a, b) = pair_mut(&mut self.slots, i, j);
            a.object.on_collision(b.object.as_ref());
            let (b, a) = pair_mut(&mut self.slots, j, i);
            b.object.on_collision(a.object.as_ref());
        }
    }

    fn cull(&mut self) {
        let before = self.slots.len();
        self.slots.retain(|s| {
            let alive = s.object.is_alive();
            if !alive {
                debug!(entity = ?s.id, "Entity removed from scene");
            }
            alive
        });
        self.killed += (before - self.slots.len()) as u64;
        let dropped = self.physics.reclaim();
        if dropped > 0 {
            trace!(dropped, "Dead bodies reclaimed");
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn physics(&self) -> &HeadlessPhysics {
        &self.physics
    }

    pub fn get(&self, id: EntityId) -> Option<&dyn PhysicsObject> {
        self.slots
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.object.as_ref())
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.index_of(id).is_some()
    }

    pub fn alive(&self) -> usize {
        self.slots.len()
    }

    pub fn spawned(&self) -> u64 {
        self.spawned
    }

    pub fn killed(&self) -> u64 {
        self.killed
    }
}
