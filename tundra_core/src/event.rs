//! Contact events.
//!
//! Hosts push one `Contact` per touching pair per step; the scene drains them
//! and calls `on_collision` on both sides. Duplicates are delivered as-is.

use std::collections::VecDeque;

use crate::scene::EntityId;

/// Two entities touching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contact {
    pub a: EntityId,
    pub b: EntityId,
}

/// FIFO of pending contacts.
#[derive(Debug, Default)]
pub struct ContactQueue {
    pending: VecDeque<Contact>,
}

impl ContactQueue {
    pub fn push(&mut self, a: EntityId, b: EntityId) {
        self.pending.push_back(Contact { a, b });
    }

    /// Drains all queued contacts in arrival order.
    pub fn drain(&mut self) -> Vec<Contact> {
        self.pending.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
