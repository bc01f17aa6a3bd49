//! # Entity — Lightweight Identifiers for Game Objects
//!
//! An [`Entity`] is just a number — it doesn't "contain" anything. The
//! [`World`](super::world::World) maps entities to their component slots;
//! this separation of identity from data is the core of the pattern.
//!
//! ## Design: monotonic ids, no recycling
//!
//! Ids are handed out from a monotonically increasing counter and are never
//! reused within a session. That makes every stale handle trivially
//! detectable — a despawned entity's id simply stops resolving — without
//! needing generation counters. Sessions are short-lived enough that a u64
//! cannot wrap.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A handle to an entity in the [`World`](super::world::World).
///
/// Only valid for the `World` that created it. Lookups with the id of a
/// despawned entity safely return nothing.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Entity(pub(crate) u64);

impl Entity {
    /// The raw id. Useful for diagnostics and object-registry keys.
    pub fn id(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Hands out fresh entity ids.
#[derive(Debug, Default)]
pub(crate) struct EntityAllocator {
    next: u64,
}

impl EntityAllocator {
    pub fn new() -> Self {
        Self { next: 0 }
    }

    /// Allocate a fresh [`Entity`]. Ids strictly increase and are never
    /// recycled.
    pub fn allocate(&mut self) -> Entity {
        let entity = Entity(self.next);
        self.next += 1;
        entity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_sequential() {
        let mut alloc = EntityAllocator::new();
        let e0 = alloc.allocate();
        let e1 = alloc.allocate();
        assert_eq!(e0.id(), 0);
        assert_eq!(e1.id(), 1);
        assert_ne!(e0, e1);
    }

    #[test]
    fn ids_never_repeat() {
        let mut alloc = EntityAllocator::new();
        let mut seen = std::collections::HashSet::new();
        for _ in 0..1000 {
            assert!(seen.insert(alloc.allocate()));
        }
    }
}
