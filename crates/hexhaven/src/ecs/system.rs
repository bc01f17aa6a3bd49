//! # System — Functions That Advance the World
//!
//! A system is just a function that takes `&mut World` and the simulated
//! time for the current tick. No parameter injection, no dependency graph,
//! no parallelism: systems run strictly in registration order, which makes
//! tick execution deterministic.

use super::world::World;

/// A system that can be executed on a [`World`] once per tick.
///
/// Any `FnMut(&mut World, f32)` implements this trait, so closures and
/// function pointers work directly. `dt` is the simulated time advanced by
/// this tick, in seconds.
pub trait System {
    fn run(&mut self, world: &mut World, dt: f32);
}

impl<F: FnMut(&mut World, f32)> System for F {
    fn run(&mut self, world: &mut World, dt: f32) {
        (self)(world, dt);
    }
}

/// A boxed [`System`] with a short name for diagnostics.
struct NamedSystem {
    name: String,
    system: Box<dyn System>,
}

/// An ordered list of systems. Execution order is registration order.
#[derive(Default)]
pub struct Schedule {
    systems: Vec<NamedSystem>,
}

impl Schedule {
    pub fn new() -> Self {
        Self {
            systems: Vec::new(),
        }
    }

    /// Append a system to the end of the schedule.
    pub fn add_system<S: System + 'static>(&mut self, system: S) {
        self.systems.push(NamedSystem {
            name: short_system_name(std::any::type_name::<S>()),
            system: Box::new(system),
        });
    }

    /// Move all of `other`'s systems onto the end of this schedule.
    pub(crate) fn append(&mut self, other: Schedule) {
        self.systems.extend(other.systems);
    }

    /// Run all systems in order on the given world.
    pub fn run(&mut self, world: &mut World, dt: f32) {
        for ns in &mut self.systems {
            ns.system.run(world, dt);
        }
    }

    pub fn len(&self) -> usize {
        self.systems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }

    /// Registered system names, in execution order.
    pub fn names(&self) -> Vec<&str> {
        self.systems.iter().map(|ns| ns.name.as_str()).collect()
    }
}

/// Strip the module path from a fully-qualified type name, keeping only the
/// last meaningful segment (`hexhaven::systems::movement_system` →
/// `movement_system`, `{{closure}}` → `<closure>`).
fn short_system_name(full: &str) -> String {
    let name = full.rsplit("::").next().unwrap_or(full);
    if name.contains("closure") {
        "<closure>".to_string()
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dummy_system(_world: &mut World, _dt: f32) {}

    #[test]
    fn schedule_captures_system_name() {
        let mut schedule = Schedule::new();
        schedule.add_system(dummy_system);
        assert_eq!(schedule.names(), vec!["dummy_system"]);
    }

    #[test]
    fn closure_system_name() {
        let mut schedule = Schedule::new();
        schedule.add_system(|_world: &mut World, _dt: f32| {});
        assert_eq!(schedule.names(), vec!["<closure>"]);
    }

    #[test]
    fn systems_run_in_registration_order() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let order = Rc::new(RefCell::new(Vec::new()));
        let mut schedule = Schedule::new();
        for label in ["a", "b", "c"] {
            let order = Rc::clone(&order);
            schedule.add_system(move |_: &mut World, _: f32| {
                order.borrow_mut().push(label);
            });
        }

        let mut world = World::new();
        schedule.run(&mut world, 1.0 / 30.0);
        assert_eq!(*order.borrow(), vec!["a", "b", "c"]);
    }
}
