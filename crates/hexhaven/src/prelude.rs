//! Convenience re-exports — `use hexhaven::prelude::*` for the common
//! items.

pub use crate::components::{
    Building, BuildingKind, Component, ComponentKind, Health, Inventory, Movement, Owner,
    Position, Production, Sprite, Worker,
};
pub use crate::ecs::{Entity, Schedule, System, World};
pub use crate::engine::{Engine, EngineState, Player};
pub use crate::hex::{DIRECTIONS, Hex};
pub use crate::map::{Deposit, Field, GameMap, MapObject, PlayerId, Terrain, Ware};
pub use crate::pathfinding::{find_path, reachable_hexes, step_cost};
pub use crate::spawn::{spawn_building, spawn_worker};
pub use crate::time::{Clock, DriverState, FixedStep, ManualClock, SystemClock, TICK_SECONDS};
