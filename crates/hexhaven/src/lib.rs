//! # Hexhaven — Deterministic Hex-Grid Simulation Core
//!
//! The simulation core of a hexagonal-grid strategy game: coordinate
//! geometry, a terrain-weighted A* pathfinder, and an entity/component
//! scheduler advanced at a fixed 30 ticks per second. Rendering, input,
//! asset loading, UI, and map generation are external collaborators that
//! consume the read/query surface; the core depends on none of them.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`hex`] | Flat-top axial geometry: pixel conversion, neighbors, distance, range, lines |
//! | [`map`] | Bounded field grid (terrain, resources, elevation) + object registry |
//! | [`ecs`] | Entity store with a closed component set, tag queries, system schedule |
//! | [`components`] | The nine capability components and their discriminator |
//! | [`spawn`] | Entity factories bundling coherent component sets |
//! | [`systems`] | Movement, construction, and production tick systems |
//! | [`pathfinding`] | Weighted A* and cost-bounded reachability over the map |
//! | [`time`] | Injected clocks and the fixed-step driver state machine |
//! | [`engine`] | Facade owning map + world + driver; control and query surface |
//!
//! Start with [`prelude`] and an [`Engine`](engine::Engine).

pub mod components;
pub mod ecs;
pub mod engine;
pub mod hex;
pub mod map;
pub mod pathfinding;
pub mod prelude;
pub mod spawn;
pub mod systems;
pub mod time;
