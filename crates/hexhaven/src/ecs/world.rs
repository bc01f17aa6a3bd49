//! # World — The Central Container
//!
//! The [`World`] exclusively owns all entities and their components for the
//! duration of one game session. Systems never own entities; they borrow
//! the World for one tick.
//!
//! ## Storage
//!
//! ```text
//! entities: [Entity(0), Entity(3), Entity(7)]      ← insertion order
//! slots:    [ [slots0], [slots1],  [slots2] ]      ← parallel rows
//! index:    {0 → 0, 3 → 1, 7 → 2}                  ← id → row
//! ```
//!
//! Each row is a sparse array of component slots indexed by
//! [`ComponentKind`] — the closed component set makes a fixed-size array
//! per entity cheaper and simpler than type-erased columns. Despawning
//! swap-removes the row and fixes up the moved entity's index.
//!
//! ## Mutation during a tick
//!
//! Systems iterate snapshots of matching entity ids, so spawning during a
//! tick is safe. Despawning goes through [`World::queue_despawn`]; the
//! queue is applied after the full system pass, so no system ever observes
//! a half-removed entity mid-iteration.

use std::collections::HashMap;

use crate::components::{Component, ComponentKind};

use super::entity::{Entity, EntityAllocator};
use super::system::{Schedule, System};

type SlotRow = [Option<Component>; ComponentKind::COUNT];

/// The entity/component store.
#[derive(Default)]
pub struct World {
    allocator: EntityAllocator,
    /// Alive entities in insertion order.
    entities: Vec<Entity>,
    /// Component slot rows, parallel to `entities`.
    slots: Vec<SlotRow>,
    /// Entity id → row index.
    index: HashMap<u64, usize>,
    schedule: Schedule,
    despawn_queue: Vec<Entity>,
}

impl World {
    pub fn new() -> Self {
        Self {
            allocator: EntityAllocator::new(),
            entities: Vec::new(),
            slots: Vec::new(),
            index: HashMap::new(),
            schedule: Schedule::new(),
            despawn_queue: Vec::new(),
        }
    }

    // ── Entity lifecycle ─────────────────────────────────────────────

    /// Create a fresh entity with no components. Ids increase monotonically
    /// and are never reused within a session.
    pub fn spawn(&mut self) -> Entity {
        let entity = self.allocator.allocate();
        self.index.insert(entity.id(), self.entities.len());
        self.entities.push(entity);
        self.slots.push(std::array::from_fn(|_| None));
        entity
    }

    /// Remove an entity and all its components immediately.
    ///
    /// Must not be called from a system while a tick is in flight — use
    /// [`World::queue_despawn`] there. Returns `true` if the entity was
    /// alive.
    pub fn despawn(&mut self, entity: Entity) -> bool {
        let Some(row) = self.index.remove(&entity.id()) else {
            return false;
        };
        self.entities.swap_remove(row);
        self.slots.swap_remove(row);
        // Fix up the entity that was swapped into the vacated row.
        if let Some(moved) = self.entities.get(row) {
            self.index.insert(moved.id(), row);
        }
        true
    }

    /// Queue an entity for removal at the end of the current tick.
    pub fn queue_despawn(&mut self, entity: Entity) {
        self.despawn_queue.push(entity);
    }

    pub fn is_alive(&self, entity: Entity) -> bool {
        self.index.contains_key(&entity.id())
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// All alive entities, in insertion order of the underlying storage.
    /// Callers must not depend on this ordering for correctness.
    pub fn entities(&self) -> impl Iterator<Item = Entity> + '_ {
        self.entities.iter().copied()
    }

    // ── Component access ─────────────────────────────────────────────

    /// Attach a component. At most one component per kind: inserting a
    /// kind the entity already has replaces it. Returns `false` if the
    /// entity is not alive.
    pub fn insert(&mut self, entity: Entity, component: impl Into<Component>) -> bool {
        let Some(&row) = self.index.get(&entity.id()) else {
            return false;
        };
        let component = component.into();
        let slot = component.kind().index();
        self.slots[row][slot] = Some(component);
        true
    }

    /// Detach and return a component, or `None` if absent.
    pub fn remove(&mut self, entity: Entity, kind: ComponentKind) -> Option<Component> {
        let &row = self.index.get(&entity.id())?;
        self.slots[row][kind.index()].take()
    }

    /// The entity's component of the given kind, or `None` if the entity is
    /// dead or doesn't have one.
    pub fn get(&self, entity: Entity, kind: ComponentKind) -> Option<&Component> {
        let &row = self.index.get(&entity.id())?;
        self.slots[row][kind.index()].as_ref()
    }

    pub fn get_mut(&mut self, entity: Entity, kind: ComponentKind) -> Option<&mut Component> {
        let &row = self.index.get(&entity.id())?;
        self.slots[row][kind.index()].as_mut()
    }

    pub fn has(&self, entity: Entity, kind: ComponentKind) -> bool {
        self.get(entity, kind).is_some()
    }

    /// All entities holding **every** requested kind, as a snapshot in
    /// storage order. Safe to iterate while mutating components.
    pub fn query(&self, kinds: &[ComponentKind]) -> Vec<Entity> {
        self.entities
            .iter()
            .zip(&self.slots)
            .filter(|(_, row)| kinds.iter().all(|k| row[k.index()].is_some()))
            .map(|(e, _)| *e)
            .collect()
    }

    // ── Systems ──────────────────────────────────────────────────────

    /// Append a system. Execution order is registration order.
    pub fn add_system<S: System + 'static>(&mut self, system: S) {
        self.schedule.add_system(system);
    }

    /// Run one tick: every system once, in order, with the simulated time
    /// delta, then apply deferred despawns.
    ///
    /// The schedule is taken out of the world while it runs so systems can
    /// freely borrow the world (extract/reinsert pattern).
    pub fn update(&mut self, dt: f32) {
        let mut schedule = std::mem::take(&mut self.schedule);
        schedule.run(self, dt);
        // Keep systems registered during the pass; they start next tick.
        schedule.append(std::mem::take(&mut self.schedule));
        self.schedule = schedule;

        let queued = std::mem::take(&mut self.despawn_queue);
        for entity in queued {
            self.despawn(entity);
        }
    }

    pub fn system_count(&self) -> usize {
        self.schedule.len()
    }
}
