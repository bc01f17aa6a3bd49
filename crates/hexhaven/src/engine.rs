//! # Engine — The Simulation Facade
//!
//! [`Engine`] wires the pieces together: it owns the populated
//! [`GameMap`], the [`World`] with the core systems registered, the
//! fixed-step driver, and the player roster. External collaborators
//! (renderer, UI) talk to it through the control surface
//! (`start`/`stop`/`set_speed`/pause) plus read-only queries; all world
//! mutation between ticks goes through factories or systems.
//!
//! The host calls [`Engine::pump`] once per frame. Each call performs one
//! driver check and runs at most one tick.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::ecs::World;
use crate::hex::Hex;
use crate::map::{GameMap, PlayerId};
use crate::pathfinding;
use crate::systems;
use crate::time::{Clock, FixedStep, SystemClock, TICK_SECONDS};

/// A participant in the session. Field and component ownership reference
/// players by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
}

/// Read-only snapshot of the engine for UI overlays and telemetry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineState {
    pub running: bool,
    pub paused: bool,
    pub speed: f32,
    pub tick: u64,
    pub map_width: u32,
    pub map_height: u32,
    pub entity_count: usize,
    pub players: Vec<Player>,
}

/// The deterministic fixed-tick simulation engine.
pub struct Engine {
    map: GameMap,
    world: World,
    driver: FixedStep,
    clock: Box<dyn Clock>,
    players: Vec<Player>,
    tick: u64,
}

impl Engine {
    /// Build an engine over a fully populated map, using wall-clock time.
    /// The core systems (movement, construction, production) are
    /// registered in that order.
    pub fn new(map: GameMap, players: Vec<Player>) -> Self {
        Self::with_clock(map, players, Box::new(SystemClock::new()))
    }

    /// Build an engine with an injected time source (deterministic tests,
    /// headless runs).
    pub fn with_clock(map: GameMap, players: Vec<Player>, clock: Box<dyn Clock>) -> Self {
        let mut world = World::new();
        world.add_system(systems::movement_system);
        world.add_system(systems::construction_system);
        world.add_system(systems::production_system);
        Self {
            map,
            world,
            driver: FixedStep::new(),
            clock,
            players,
            tick: 0,
        }
    }

    // ── Control surface ──────────────────────────────────────────────

    pub fn start(&mut self) {
        self.driver.start(self.clock.now());
        log::info!("engine started ({} players)", self.players.len());
    }

    pub fn stop(&mut self) {
        self.driver.stop();
        log::info!("engine stopped at tick {}", self.tick);
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.driver.set_speed(speed);
        log::debug!("speed set to {}", self.driver.speed());
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.driver.set_paused(paused);
    }

    pub fn toggle_pause(&mut self) {
        self.driver.toggle_pause();
    }

    /// One host-frame callback: check the driver and run at most one tick.
    /// Returns `true` if a tick ran.
    pub fn pump(&mut self) -> bool {
        if !self.driver.check(self.clock.now()) {
            return false;
        }
        self.world.update(TICK_SECONDS);
        self.tick += 1;
        true
    }

    /// Snapshot of the control state for the UI.
    pub fn state(&self) -> EngineState {
        EngineState {
            running: self.driver.is_running(),
            paused: self.driver.is_paused(),
            speed: self.driver.speed(),
            tick: self.tick,
            map_width: self.map.width(),
            map_height: self.map.height(),
            entity_count: self.world.entity_count(),
            players: self.players.clone(),
        }
    }

    // ── Read/query surface ───────────────────────────────────────────

    pub fn map(&self) -> &GameMap {
        &self.map
    }

    /// Mutable map access for setup (generators run before `start`).
    pub fn map_mut(&mut self) -> &mut GameMap {
        &mut self.map
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable world access for factories and command handling between
    /// ticks.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Shortest weighted path on the current map. Pure query; safe to call
    /// between ticks or from systems.
    pub fn find_path(&self, start: Hex, goal: Hex) -> Option<Vec<Hex>> {
        pathfinding::find_path(&self.map, start, goal)
    }

    /// Cost-bounded reachability on the current map.
    pub fn reachable_hexes(&self, start: Hex, max_cost: f32) -> HashSet<Hex> {
        pathfinding::reachable_hexes(&self.map, start, max_cost)
    }
}
