//! Headless simulation run: populate a small map, spawn a settlement, and
//! drive the engine with a manual clock for twenty simulated seconds.
//!
//! Run with `RUST_LOG=debug cargo run --example headless` to watch
//! construction and production events.

use std::rc::Rc;
use std::time::Duration;

use hexhaven::prelude::*;

/// A manual clock the demo and the engine can both hold.
#[derive(Clone, Default)]
struct SharedClock(Rc<ManualClock>);

impl Clock for SharedClock {
    fn now(&self) -> Duration {
        self.0.now()
    }
}

fn build_map() -> GameMap {
    let mut map = GameMap::new(8, 6);
    // A lake in the middle and a mountain ridge along the east edge.
    for (col, row) in [(3, 2), (4, 2), (3, 3)] {
        map.field_mut(Hex::from_offset(col, row)).unwrap().terrain = Terrain::Water;
    }
    for row in 0..6 {
        let field = map.field_mut(Hex::from_offset(7, row)).unwrap();
        field.terrain = Terrain::Mountain;
        field.elevation = 2;
    }
    map.field_mut(Hex::from_offset(6, 1)).unwrap().resource = Some(Deposit {
        ware: Ware::Wood,
        amount: 40,
    });
    map
}

fn main() {
    env_logger::init();

    let clock = SharedClock::default();
    let players = vec![Player {
        id: 0,
        name: "Red".to_string(),
    }];
    let mut engine = Engine::with_clock(build_map(), players, Box::new(clock.clone()));

    let hq_hex = Hex::from_offset(1, 1);
    let lumber_hex = Hex::from_offset(5, 1);
    let hq = spawn_building(engine.world_mut(), hq_hex, BuildingKind::Headquarters, 0);
    let lumber = spawn_building(engine.world_mut(), lumber_hex, BuildingKind::Woodcutter, 0);
    let worker = spawn_worker(engine.world_mut(), hq_hex, 0);

    // Send the worker to the woodcutter; the path skirts the lake.
    let path = engine
        .find_path(hq_hex, lumber_hex)
        .expect("woodcutter is reachable from the HQ");
    log::info!("worker path: {} waypoints", path.len());
    if let Some(m) = engine
        .world_mut()
        .get_mut(worker, ComponentKind::Movement)
        .and_then(Component::as_movement_mut)
    {
        m.follow(path);
    }

    engine.start();
    engine.set_speed(2.0);

    // 5 ms host frames for 20 simulated seconds at speed 2.
    while clock.now() < Duration::from_secs(10) {
        clock.0.advance(Duration::from_millis(5));
        engine.pump();
    }
    engine.stop();

    let state = engine.state();
    println!(
        "{}",
        serde_json::to_string_pretty(&state).expect("state serializes")
    );

    for entity in [hq, lumber, worker] {
        let pos = engine
            .world()
            .get(entity, ComponentKind::Position)
            .and_then(Component::as_position)
            .map(|p| p.hex);
        let wood = engine
            .world()
            .get(entity, ComponentKind::Inventory)
            .and_then(Component::as_inventory)
            .map(|inv| inv.count(Ware::Wood))
            .unwrap_or(0);
        log::info!("{entity}: pos {pos:?}, wood {wood}");
    }
}
