//! # Components — The Closed Capability Set
//!
//! Game objects are composed from a fixed set of capabilities. Unlike a
//! type-erased ECS, the set is closed by design: [`Component`] is a tagged
//! variant over exactly nine capability types, and [`ComponentKind`] is the
//! discriminator used to key per-entity component slots and tag queries.
//!
//! An entity holds at most one component per kind; adding a second replaces
//! the first. See [`World`](crate::ecs::World) for the storage.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::hex::Hex;
use crate::map::{PlayerId, Ware};

/// Where an entity stands on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub hex: Hex,
}

/// Which sprite the renderer should draw for this entity. The core never
/// interprets the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprite {
    pub id: String,
}

/// Path-following state. The movement system walks `path` one waypoint per
/// tick; positions snap to waypoints, there is no sub-tick interpolation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Movement {
    pub path: Option<Vec<Hex>>,
    /// Index of the next waypoint in `path`.
    pub next: usize,
    pub is_moving: bool,
}

impl Movement {
    /// Start following a path. An empty path leaves the entity idle.
    pub fn follow(&mut self, path: Vec<Hex>) {
        self.is_moving = !path.is_empty();
        self.next = 0;
        self.path = if path.is_empty() { None } else { Some(path) };
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Health {
    pub current: f32,
    pub max: f32,
}

impl Health {
    pub fn full(max: f32) -> Self {
        Self { current: max, max }
    }
}

/// Wares held by an entity, keyed by ware kind.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Inventory {
    pub wares: HashMap<Ware, u32>,
}

impl Inventory {
    pub fn count(&self, ware: Ware) -> u32 {
        self.wares.get(&ware).copied().unwrap_or(0)
    }

    pub fn add(&mut self, ware: Ware, amount: u32) {
        *self.wares.entry(ware).or_insert(0) += amount;
    }
}

/// Marks an entity as a worker unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Worker {
    pub carrying: Option<Ware>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuildingKind {
    Headquarters,
    Woodcutter,
    Quarry,
    Farm,
}

/// A building footprint. `construction` runs from 0.0 (site) to 1.0
/// (fully constructed); production only happens once construction is done.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub kind: BuildingKind,
    pub construction: f32,
}

impl Building {
    pub fn constructed(kind: BuildingKind) -> Self {
        Self {
            kind,
            construction: 1.0,
        }
    }

    pub fn site(kind: BuildingKind) -> Self {
        Self {
            kind,
            construction: 0.0,
        }
    }

    pub fn is_constructed(&self) -> bool {
        self.construction >= 1.0
    }
}

/// Production state. `ware` is what the building is currently producing
/// (`None` = idle); `progress` accrues toward 1.0, at which point one ware
/// is emitted and progress resets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Production {
    pub ware: Option<Ware>,
    pub progress: f32,
}

impl Production {
    pub fn of(ware: Ware) -> Self {
        Self {
            ware: Some(ware),
            progress: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub player: PlayerId,
}

/// Generates the closed component enum, its kind discriminator, and typed
/// accessors in one place so the three can never drift apart.
macro_rules! components {
    ($($variant:ident($ty:ty) => $as:ident, $as_mut:ident;)+) => {
        /// A component instance attached to an entity.
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        pub enum Component {
            $($variant($ty),)+
        }

        /// The capability tag discriminating [`Component`] variants.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum ComponentKind {
            $($variant,)+
        }

        impl Component {
            /// The capability tag of this component.
            pub fn kind(&self) -> ComponentKind {
                match self {
                    $(Component::$variant(_) => ComponentKind::$variant,)+
                }
            }

            $(
                pub fn $as(&self) -> Option<&$ty> {
                    match self {
                        Component::$variant(c) => Some(c),
                        _ => None,
                    }
                }

                pub fn $as_mut(&mut self) -> Option<&mut $ty> {
                    match self {
                        Component::$variant(c) => Some(c),
                        _ => None,
                    }
                }
            )+
        }

        $(
            impl From<$ty> for Component {
                fn from(c: $ty) -> Self {
                    Component::$variant(c)
                }
            }
        )+

        impl ComponentKind {
            /// Number of capability kinds; sizes the per-entity slot array.
            pub const COUNT: usize = [$(stringify!($variant)),+].len();

            /// Every kind, in slot order.
            pub const ALL: [ComponentKind; Self::COUNT] = [
                $(ComponentKind::$variant,)+
            ];
        }
    };
}

components! {
    Position(Position) => as_position, as_position_mut;
    Sprite(Sprite) => as_sprite, as_sprite_mut;
    Movement(Movement) => as_movement, as_movement_mut;
    Health(Health) => as_health, as_health_mut;
    Inventory(Inventory) => as_inventory, as_inventory_mut;
    Worker(Worker) => as_worker, as_worker_mut;
    Building(Building) => as_building, as_building_mut;
    Production(Production) => as_production, as_production_mut;
    Owner(Owner) => as_owner, as_owner_mut;
}

impl ComponentKind {
    /// Slot index of this kind.
    pub fn index(self) -> usize {
        self as usize
    }
}
