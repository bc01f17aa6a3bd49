//! # Spawn — Entity Factories
//!
//! Entities are assembled from coherent component bundles in one place, so
//! every worker or building in a session has the same capability shape.
//! Callers get back the plain [`Entity`] handle.

use crate::components::{
    Building, BuildingKind, Health, Inventory, Movement, Owner, Position, Production, Sprite,
    Worker,
};
use crate::ecs::{Entity, World};
use crate::hex::Hex;
use crate::map::{PlayerId, Ware};

const BUILDING_MAX_HEALTH: f32 = 100.0;

/// A worker unit: position + sprite + movement + worker + inventory +
/// owner.
pub fn spawn_worker(world: &mut World, hex: Hex, player: PlayerId) -> Entity {
    let entity = world.spawn();
    world.insert(entity, Position { hex });
    world.insert(entity, Sprite { id: "worker".to_string() });
    world.insert(entity, Movement::default());
    world.insert(entity, Worker::default());
    world.insert(entity, Inventory::default());
    world.insert(entity, Owner { player });
    entity
}

/// A building site: position + sprite + building + production + inventory
/// + health + owner. Construction starts at zero; the construction system
/// brings it up to a working building.
pub fn spawn_building(world: &mut World, hex: Hex, kind: BuildingKind, player: PlayerId) -> Entity {
    let entity = world.spawn();
    world.insert(entity, Position { hex });
    world.insert(entity, Sprite { id: sprite_id(kind).to_string() });
    world.insert(entity, Building::site(kind));
    world.insert(
        entity,
        Production {
            ware: produced_ware(kind),
            progress: 0.0,
        },
    );
    world.insert(entity, Inventory::default());
    world.insert(entity, Health::full(BUILDING_MAX_HEALTH));
    world.insert(entity, Owner { player });
    entity
}

fn sprite_id(kind: BuildingKind) -> &'static str {
    match kind {
        BuildingKind::Headquarters => "headquarters",
        BuildingKind::Woodcutter => "woodcutter",
        BuildingKind::Quarry => "quarry",
        BuildingKind::Farm => "farm",
    }
}

/// What a building of this kind produces, if anything.
fn produced_ware(kind: BuildingKind) -> Option<Ware> {
    match kind {
        BuildingKind::Headquarters => None,
        BuildingKind::Woodcutter => Some(Ware::Wood),
        BuildingKind::Quarry => Some(Ware::Stone),
        BuildingKind::Farm => Some(Ware::Food),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Component, ComponentKind};

    #[test]
    fn worker_bundle_shape() {
        let mut world = World::new();
        let e = spawn_worker(&mut world, Hex::new(1, 2), 0);
        for kind in [
            ComponentKind::Position,
            ComponentKind::Sprite,
            ComponentKind::Movement,
            ComponentKind::Worker,
            ComponentKind::Inventory,
            ComponentKind::Owner,
        ] {
            assert!(world.has(e, kind), "worker missing {kind:?}");
        }
        assert!(!world.has(e, ComponentKind::Building));
        assert!(!world.has(e, ComponentKind::Production));
    }

    #[test]
    fn building_bundle_shape() {
        let mut world = World::new();
        let e = spawn_building(&mut world, Hex::new(0, 0), BuildingKind::Quarry, 1);
        for kind in [
            ComponentKind::Position,
            ComponentKind::Sprite,
            ComponentKind::Building,
            ComponentKind::Production,
            ComponentKind::Inventory,
            ComponentKind::Health,
            ComponentKind::Owner,
        ] {
            assert!(world.has(e, kind), "building missing {kind:?}");
        }
        let production = world
            .get(e, ComponentKind::Production)
            .and_then(Component::as_production)
            .unwrap();
        assert_eq!(production.ware, Some(Ware::Stone));
    }

    #[test]
    fn headquarters_produces_nothing() {
        let mut world = World::new();
        let e = spawn_building(&mut world, Hex::new(0, 0), BuildingKind::Headquarters, 0);
        let production = world
            .get(e, ComponentKind::Production)
            .and_then(Component::as_production)
            .unwrap();
        assert_eq!(production.ware, None);
    }

    #[test]
    fn owner_is_recorded() {
        let mut world = World::new();
        let e = spawn_worker(&mut world, Hex::new(0, 0), 3);
        let owner = world
            .get(e, ComponentKind::Owner)
            .and_then(Component::as_owner)
            .unwrap();
        assert_eq!(owner.player, 3);
    }
}
