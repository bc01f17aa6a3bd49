//! # Systems — Per-Tick World Transformers
//!
//! Each system is a plain function over `(&mut World, dt)` registered with
//! the schedule in a fixed order. They iterate id snapshots from
//! [`World::query`], so component mutations never invalidate iteration.
//!
//! Movement deliberately snaps an entity straight onto the next waypoint
//! each tick — there is no sub-tick interpolation of position. A renderer
//! that wants smooth motion interpolates on its own side between ticks.

use crate::components::{Component, ComponentKind};
use crate::ecs::World;

/// Construction progress gained per simulated second on a building site.
pub const CONSTRUCTION_PER_SECOND: f32 = 0.5;

/// Production progress gained per simulated second in a working building.
pub const PRODUCTION_PER_SECOND: f32 = 0.25;

/// Walk every moving entity one waypoint along its path.
///
/// When the current position already equals the next waypoint the index
/// advances first; once the path is exhausted `is_moving` clears and the
/// path resets.
pub fn movement_system(world: &mut World, _dt: f32) {
    for entity in world.query(&[ComponentKind::Position, ComponentKind::Movement]) {
        let Some(pos) = world
            .get(entity, ComponentKind::Position)
            .and_then(Component::as_position)
            .map(|p| p.hex)
        else {
            continue;
        };
        let Some(movement) = world
            .get(entity, ComponentKind::Movement)
            .and_then(Component::as_movement)
        else {
            continue;
        };
        if !movement.is_moving {
            continue;
        }
        let Some(path) = movement.path.as_ref() else {
            continue;
        };

        let mut next = movement.next;
        if path.get(next) == Some(&pos) {
            next += 1;
        }
        let waypoint = path.get(next).copied();

        if let Some(movement) = world
            .get_mut(entity, ComponentKind::Movement)
            .and_then(Component::as_movement_mut)
        {
            match waypoint {
                Some(_) => movement.next = next,
                None => {
                    // Path exhausted: back to idle.
                    movement.is_moving = false;
                    movement.path = None;
                    movement.next = 0;
                }
            }
        }
        if let (Some(hex), Some(p)) = (
            waypoint,
            world
                .get_mut(entity, ComponentKind::Position)
                .and_then(Component::as_position_mut),
        ) {
            p.hex = hex;
        }
    }
}

/// Advance construction on every unfinished building site.
pub fn construction_system(world: &mut World, dt: f32) {
    for entity in world.query(&[ComponentKind::Building]) {
        let Some(building) = world
            .get_mut(entity, ComponentKind::Building)
            .and_then(Component::as_building_mut)
        else {
            continue;
        };
        if building.is_constructed() {
            continue;
        }
        building.construction = (building.construction + dt * CONSTRUCTION_PER_SECOND).min(1.0);
        if building.is_constructed() {
            log::debug!("{entity} finished construction ({:?})", building.kind);
        }
    }
}

/// Accrue production progress in constructed buildings; on wrap, deposit
/// one ware into the building's own inventory.
///
/// Moving finished wares anywhere beyond the producing building's
/// inventory is the job of external transport logic.
pub fn production_system(world: &mut World, dt: f32) {
    for entity in world.query(&[ComponentKind::Production, ComponentKind::Building]) {
        let constructed = world
            .get(entity, ComponentKind::Building)
            .and_then(Component::as_building)
            .is_some_and(|b| b.is_constructed());
        if !constructed {
            continue;
        }

        let Some(production) = world
            .get_mut(entity, ComponentKind::Production)
            .and_then(Component::as_production_mut)
        else {
            continue;
        };
        let Some(ware) = production.ware else {
            continue;
        };

        production.progress += dt * PRODUCTION_PER_SECOND;
        if production.progress < 1.0 {
            continue;
        }
        production.progress = 0.0;

        if let Some(inventory) = world
            .get_mut(entity, ComponentKind::Inventory)
            .and_then(Component::as_inventory_mut)
        {
            inventory.add(ware, 1);
        }
        log::debug!("{entity} produced one {ware:?}");
    }
}
