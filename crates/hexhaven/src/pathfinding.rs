//! # Pathfinding — Weighted A* Over Hex Terrain
//!
//! Classic grid A*, specialized for terrain-weighted hex maps, plus a
//! Dijkstra-style cost-bounded reachability flood. Both are pure queries:
//! they read the map, keep all working state on the stack of one call, and
//! return owned results, so independent calls are safe to run concurrently.
//!
//! ## Cost model
//!
//! Stepping onto a field costs its terrain base cost (see
//! [`Terrain::movement_cost`](crate::map::Terrain::movement_cost)) plus
//! `0.5 × |Δelevation|` between the source and destination fields. Water is
//! impassable. Since every passable step costs at least 1.0, the hex
//! distance to the goal is an admissible and consistent heuristic.
//!
//! ## Determinism
//!
//! Neighbors expand in the fixed order of [`crate::hex::DIRECTIONS`], and
//! the open list is scanned linearly with a strict `<` comparison, so the
//! first node encountered at the minimal fCost wins. Identical inputs
//! always produce identical paths.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::hex::Hex;
use crate::map::GameMap;

/// Upper bound on node expansions per search. Hitting the cap yields a
/// normal "no path" result; it exists to bound worst-case latency on
/// pathological maps, not to signal an error.
const MAX_EXPANSIONS: usize = 10_000;

/// A node in the in-flight search, owned by one `find_path` call.
struct PathNode {
    hex: Hex,
    /// Accumulated cost from the start.
    g: f32,
    /// Heuristic estimate to the goal.
    h: f32,
    /// Arena index of the predecessor, for path reconstruction.
    parent: Option<usize>,
}

impl PathNode {
    fn f(&self) -> f32 {
        self.g + self.h
    }
}

/// Cost of stepping from the field at `from` onto the field at `to`.
///
/// `None` if either hex is outside the map or the destination terrain is
/// impassable. Directionally symmetric: the elevation term uses the
/// absolute delta.
pub fn step_cost(map: &GameMap, from: Hex, to: Hex) -> Option<f32> {
    let from_field = map.field(from)?;
    let to_field = map.field(to)?;
    let base = to_field.terrain.movement_cost()?;
    let climb = (from_field.elevation as f32 - to_field.elevation as f32).abs();
    Some(base + 0.5 * climb)
}

/// Shortest weighted path from `start` to `goal`, endpoints inclusive.
///
/// Returns `None` — explicitly "unreachable" — when either endpoint is out
/// of bounds, when the open set empties, or when the expansion cap is
/// reached. Returns `[start]` when `start == goal`.
pub fn find_path(map: &GameMap, start: Hex, goal: Hex) -> Option<Vec<Hex>> {
    if !map.is_valid(start) || !map.is_valid(goal) {
        return None;
    }
    if start == goal {
        return Some(vec![start]);
    }

    let mut nodes = vec![PathNode {
        hex: start,
        g: 0.0,
        h: start.distance(goal) as f32,
        parent: None,
    }];
    // Open list holds arena indices in insertion order; the lookup map
    // avoids a linear "is this hex already open" scan per neighbor.
    let mut open: Vec<usize> = vec![0];
    let mut open_by_hex: HashMap<Hex, usize> = HashMap::from([(start, 0)]);
    let mut closed: HashSet<Hex> = HashSet::new();

    let mut expansions = 0;
    while !open.is_empty() && expansions < MAX_EXPANSIONS {
        expansions += 1;

        // First entry at the minimal fCost wins: strict `<` keeps the
        // earliest-inserted node on ties.
        let mut best = 0;
        for i in 1..open.len() {
            if nodes[open[i]].f() < nodes[open[best]].f() {
                best = i;
            }
        }
        let current = open.remove(best);
        let current_hex = nodes[current].hex;

        if current_hex == goal {
            return Some(reconstruct(&nodes, current));
        }

        open_by_hex.remove(&current_hex);
        closed.insert(current_hex);

        for neighbor in current_hex.neighbors() {
            if closed.contains(&neighbor) || !map.is_walkable(neighbor) {
                continue;
            }
            let Some(step) = step_cost(map, current_hex, neighbor) else {
                continue;
            };
            let tentative_g = nodes[current].g + step;

            if let Some(&existing) = open_by_hex.get(&neighbor) {
                // Already open: update in place if we found a cheaper route.
                if tentative_g < nodes[existing].g {
                    nodes[existing].g = tentative_g;
                    nodes[existing].parent = Some(current);
                }
            } else {
                let idx = nodes.len();
                nodes.push(PathNode {
                    hex: neighbor,
                    g: tentative_g,
                    h: neighbor.distance(goal) as f32,
                    parent: Some(current),
                });
                open.push(idx);
                open_by_hex.insert(neighbor, idx);
            }
        }
    }

    None
}

/// Follow parent links back to the start, then reverse.
fn reconstruct(nodes: &[PathNode], mut current: usize) -> Vec<Hex> {
    let mut path = vec![nodes[current].hex];
    while let Some(parent) = nodes[current].parent {
        current = parent;
        path.push(nodes[current].hex);
    }
    path.reverse();
    path
}

/// Every hex reachable from `start` within a cumulative cost of
/// `max_cost`, including `start` itself at cost 0.
///
/// Cost-bounded flood expansion with a best-cost map: a hex already
/// reached at a cheaper cost is never revisited. An out-of-bounds start
/// yields the empty set.
pub fn reachable_hexes(map: &GameMap, start: Hex, max_cost: f32) -> HashSet<Hex> {
    if !map.is_valid(start) {
        return HashSet::new();
    }

    let mut best: HashMap<Hex, f32> = HashMap::from([(start, 0.0)]);
    let mut frontier: VecDeque<Hex> = VecDeque::from([start]);

    while let Some(current) = frontier.pop_front() {
        let current_cost = best[&current];
        for neighbor in current.neighbors() {
            if !map.is_walkable(neighbor) {
                continue;
            }
            let Some(step) = step_cost(map, current, neighbor) else {
                continue;
            };
            let cost = current_cost + step;
            if cost > max_cost {
                continue;
            }
            if best.get(&neighbor).is_none_or(|&known| cost < known) {
                best.insert(neighbor, cost);
                frontier.push_back(neighbor);
            }
        }
    }

    best.into_keys().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::Terrain;

    fn grass_map(width: u32, height: u32) -> GameMap {
        GameMap::new(width, height)
    }

    fn set_terrain(map: &mut GameMap, col: i32, row: i32, terrain: Terrain) {
        map.field_mut(Hex::from_offset(col, row)).unwrap().terrain = terrain;
    }

    fn set_elevation(map: &mut GameMap, col: i32, row: i32, elevation: u32) {
        map.field_mut(Hex::from_offset(col, row)).unwrap().elevation = elevation;
    }

    fn path_cost(map: &GameMap, path: &[Hex]) -> f32 {
        path.windows(2)
            .map(|w| step_cost(map, w[0], w[1]).unwrap())
            .sum()
    }

    /// Independent reference: relax every edge until costs stop changing.
    fn reference_best_cost(map: &GameMap, start: Hex, goal: Hex) -> Option<f32> {
        let mut best: HashMap<Hex, f32> = HashMap::from([(start, 0.0)]);
        loop {
            let mut changed = false;
            let hexes: Vec<Hex> = best.keys().copied().collect();
            for hex in hexes {
                let from_cost = best[&hex];
                for n in hex.neighbors() {
                    if !map.is_walkable(n) {
                        continue;
                    }
                    let Some(step) = step_cost(map, hex, n) else {
                        continue;
                    };
                    let cost = from_cost + step;
                    if best.get(&n).is_none_or(|&known| cost < known - 1e-6) {
                        best.insert(n, cost);
                        changed = true;
                    }
                }
            }
            if !changed {
                break;
            }
        }
        best.get(&goal).copied()
    }

    #[test]
    fn straight_line_on_grass() {
        let map = grass_map(3, 3);
        let start = Hex::new(0, 0);
        let goal = Hex::new(2, 0);
        let path = find_path(&map, start, goal).unwrap();
        assert_eq!(path, vec![Hex::new(0, 0), Hex::new(1, 0), Hex::new(2, 0)]);
        assert_eq!(path_cost(&map, &path), 2.0);
    }

    #[test]
    fn routes_around_water() {
        let mut map = grass_map(3, 3);
        set_terrain(&mut map, 1, 0, Terrain::Water);

        let start = Hex::new(0, 0);
        let goal = Hex::new(2, 0);
        let path = find_path(&map, start, goal).unwrap();

        assert_eq!(*path.first().unwrap(), start);
        assert_eq!(*path.last().unwrap(), goal);
        assert!(!path.contains(&Hex::new(1, 0)), "must not cross water");
        for pair in path.windows(2) {
            assert_eq!(pair[0].distance(pair[1]), 1);
        }
        assert_eq!(
            path_cost(&map, &path),
            reference_best_cost(&map, start, goal).unwrap()
        );
    }

    #[test]
    fn start_equals_goal() {
        let map = grass_map(3, 3);
        let h = Hex::new(1, 1);
        assert_eq!(find_path(&map, h, h), Some(vec![h]));
    }

    #[test]
    fn out_of_bounds_endpoints_are_unreachable() {
        let map = grass_map(3, 3);
        let inside = Hex::new(0, 0);
        let outside = Hex::from_offset(5, 5);
        assert_eq!(find_path(&map, inside, outside), None);
        assert_eq!(find_path(&map, outside, inside), None);
    }

    #[test]
    fn water_locked_island_is_unreachable() {
        let mut map = grass_map(5, 5);
        let goal = Hex::from_offset(2, 2);
        for n in goal.neighbors() {
            let (col, row) = n.to_offset();
            set_terrain(&mut map, col, row, Terrain::Water);
        }
        assert_eq!(find_path(&map, Hex::new(0, 0), goal), None);
    }

    #[test]
    fn expansion_cap_yields_no_path() {
        // 130 × 130 = 16,900 walkable fields, so the open set cannot empty
        // before the expansion cap; the search must still report a plain
        // no-path, not hang or panic.
        let mut map = grass_map(130, 130);
        let goal = Hex::from_offset(100, 100);
        for n in goal.neighbors() {
            let (col, row) = n.to_offset();
            set_terrain(&mut map, col, row, Terrain::Water);
        }
        assert_eq!(find_path(&map, Hex::new(0, 0), goal), None);
    }

    #[test]
    fn prefers_cheap_terrain() {
        // A mountain ridge on the direct line makes the grass detour cheaper.
        let mut map = grass_map(5, 5);
        set_terrain(&mut map, 1, 0, Terrain::Mountain);
        set_terrain(&mut map, 2, 0, Terrain::Mountain);

        let start = Hex::from_offset(0, 0);
        let goal = Hex::from_offset(3, 0);
        let path = find_path(&map, start, goal).unwrap();
        assert_eq!(
            path_cost(&map, &path),
            reference_best_cost(&map, start, goal).unwrap()
        );
    }

    #[test]
    fn elevation_delta_adds_cost() {
        let map_flat = grass_map(3, 1);
        let mut map_hill = grass_map(3, 1);
        set_elevation(&mut map_hill, 1, 0, 2);

        let start = Hex::from_offset(0, 0);
        let goal = Hex::from_offset(2, 0);
        let flat = find_path(&map_flat, start, goal).unwrap();
        let hill = find_path(&map_hill, start, goal).unwrap();
        // 1×1 rows leave no detour; the climb costs 2 × (0.5 × 2) extra.
        assert_eq!(path_cost(&map_flat, &flat), 2.0);
        assert_eq!(path_cost(&map_hill, &hill), 4.0);
    }

    #[test]
    fn minimal_cost_matches_reference_on_mixed_maps() {
        let mut map = grass_map(5, 5);
        set_terrain(&mut map, 1, 1, Terrain::Swamp);
        set_terrain(&mut map, 2, 1, Terrain::Desert);
        set_terrain(&mut map, 3, 1, Terrain::Snow);
        set_terrain(&mut map, 1, 3, Terrain::Water);
        set_elevation(&mut map, 2, 2, 3);
        set_elevation(&mut map, 3, 2, 1);

        let start = Hex::from_offset(0, 0);
        for row in 0..5 {
            for col in 0..5 {
                let goal = Hex::from_offset(col, row);
                let found = find_path(&map, start, goal).map(|p| path_cost(&map, &p));
                let expected = reference_best_cost(&map, start, goal);
                match (found, expected) {
                    (Some(a), Some(b)) => {
                        assert!((a - b).abs() < 1e-4, "goal {goal}: {a} vs {b}")
                    }
                    (None, None) => {}
                    other => panic!("goal {goal}: mismatch {other:?}"),
                }
            }
        }
    }

    #[test]
    fn reachable_zero_budget_is_just_start() {
        let map = grass_map(3, 3);
        let start = Hex::new(1, 1);
        let set = reachable_hexes(&map, start, 0.0);
        assert_eq!(set, HashSet::from([start]));
    }

    #[test]
    fn reachable_one_step_on_grass() {
        let map = grass_map(5, 5);
        let start = Hex::from_offset(2, 2);
        let set = reachable_hexes(&map, start, 1.0);
        assert!(set.contains(&start));
        for n in start.neighbors() {
            assert!(set.contains(&n), "neighbor {n} missing");
        }
        assert_eq!(set.len(), 7);
    }

    #[test]
    fn reachable_excludes_water_and_respects_budget() {
        let mut map = grass_map(3, 3);
        set_terrain(&mut map, 1, 0, Terrain::Water);
        let start = Hex::new(0, 0);
        let set = reachable_hexes(&map, start, 1.0);
        assert!(!set.contains(&Hex::new(1, 0)));
        // The far corner costs more than 1.0 from the start.
        assert!(!set.contains(&Hex::new(2, 0)));
    }

    #[test]
    fn reachable_from_invalid_start_is_empty() {
        let map = grass_map(2, 2);
        assert!(reachable_hexes(&map, Hex::from_offset(7, 7), 5.0).is_empty());
    }
}
