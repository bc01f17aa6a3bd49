//! # Map — Bounded Hex Field Grid
//!
//! The map is a pure data container: a `width × height` rectangle of
//! [`Field`]s stored row-major and addressed by offset coordinates, plus a
//! registry of placed objects keyed by id. The only logic here is bounds
//! checking — everything outside the rectangle is an explicit "no field".
//!
//! A map generator (an external collaborator) is expected to fully populate
//! terrain, resources, and elevation before the engine starts;
//! [`GameMap::new`] just gives it a consistent all-grass canvas to write
//! into.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::hex::Hex;

/// Identifies a player in the session. Field and component ownership both
/// use this.
pub type PlayerId = u8;

/// Terrain of a single field. Determines the per-step movement cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Terrain {
    Water,
    Grass,
    Desert,
    Mountain,
    Snow,
    Swamp,
}

impl Terrain {
    /// Base cost of stepping onto a field of this terrain. `None` means
    /// impassable.
    pub fn movement_cost(self) -> Option<f32> {
        match self {
            Terrain::Water => None,
            Terrain::Grass => Some(1.0),
            Terrain::Desert => Some(1.2),
            Terrain::Snow => Some(1.5),
            Terrain::Swamp => Some(1.8),
            Terrain::Mountain => Some(2.0),
        }
    }
}

/// A harvestable ware. Used both for field deposits and entity inventories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ware {
    Wood,
    Stone,
    Gold,
    Food,
}

/// A resource deposit on a field. A field with no deposit simply has
/// `resource: None`, so a deposit always carries a meaningful amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deposit {
    pub ware: Ware,
    pub amount: u32,
}

/// One hex field of the map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub hex: Hex,
    pub terrain: Terrain,
    pub resource: Option<Deposit>,
    pub elevation: u32,
    pub owner: Option<PlayerId>,
}

impl Field {
    fn blank(hex: Hex) -> Self {
        Self {
            hex,
            terrain: Terrain::Grass,
            resource: None,
            elevation: 0,
            owner: None,
        }
    }
}

/// An object placed on the map (a building footprint, a flag, a rock).
///
/// The registry is plain data today; the pathfinder's walkability check is
/// the place a blocking flag would be consulted once objects can obstruct
/// movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapObject {
    pub hex: Hex,
    pub owner: Option<PlayerId>,
}

/// The bounded rectangular hex map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameMap {
    width: u32,
    height: u32,
    /// Row-major, indexed by offset coordinates: `fields[row * width + col]`.
    fields: Vec<Field>,
    objects: HashMap<u64, MapObject>,
    next_object_id: u64,
}

impl GameMap {
    /// Create a map of the given dimensions with every field initialized to
    /// flat grass, ready for a generator to overwrite.
    pub fn new(width: u32, height: u32) -> Self {
        let mut fields = Vec::with_capacity((width * height) as usize);
        for row in 0..height as i32 {
            for col in 0..width as i32 {
                fields.push(Field::blank(Hex::from_offset(col, row)));
            }
        }
        Self {
            width,
            height,
            fields,
            objects: HashMap::new(),
            next_object_id: 0,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether the hex falls inside the map rectangle.
    pub fn is_valid(&self, hex: Hex) -> bool {
        let (col, row) = hex.to_offset();
        col >= 0 && row >= 0 && (col as u32) < self.width && (row as u32) < self.height
    }

    /// The field at `hex`, or `None` outside the map.
    pub fn field(&self, hex: Hex) -> Option<&Field> {
        if !self.is_valid(hex) {
            return None;
        }
        let (col, row) = hex.to_offset();
        self.fields.get((row as u32 * self.width + col as u32) as usize)
    }

    /// Mutable field access for generators and editors. External readers
    /// must not mutate fields between ticks through this.
    pub fn field_mut(&mut self, hex: Hex) -> Option<&mut Field> {
        if !self.is_valid(hex) {
            return None;
        }
        let (col, row) = hex.to_offset();
        self.fields.get_mut((row as u32 * self.width + col as u32) as usize)
    }

    /// All fields in row-major order, for the renderer.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Whether an entity can stand on this hex: inside the map and not
    /// water. Placed objects do not obstruct movement yet.
    pub fn is_walkable(&self, hex: Hex) -> bool {
        match self.field(hex) {
            Some(f) => f.terrain.movement_cost().is_some(),
            None => false,
        }
    }

    // ── Placed objects ───────────────────────────────────────────────

    /// Register a placed object, returning its id.
    pub fn place_object(&mut self, object: MapObject) -> u64 {
        let id = self.next_object_id;
        self.next_object_id += 1;
        self.objects.insert(id, object);
        id
    }

    pub fn object(&self, id: u64) -> Option<&MapObject> {
        self.objects.get(&id)
    }

    /// Remove a placed object. Returns it if it existed.
    pub fn remove_object(&mut self, id: u64) -> Option<MapObject> {
        self.objects.remove(&id)
    }

    pub fn objects(&self) -> impl Iterator<Item = (u64, &MapObject)> {
        self.objects.iter().map(|(id, obj)| (*id, obj))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terrain_costs() {
        assert_eq!(Terrain::Grass.movement_cost(), Some(1.0));
        assert_eq!(Terrain::Desert.movement_cost(), Some(1.2));
        assert_eq!(Terrain::Snow.movement_cost(), Some(1.5));
        assert_eq!(Terrain::Swamp.movement_cost(), Some(1.8));
        assert_eq!(Terrain::Mountain.movement_cost(), Some(2.0));
        assert_eq!(Terrain::Water.movement_cost(), None);
    }

    #[test]
    fn every_in_bounds_hex_has_a_field() {
        let map = GameMap::new(6, 4);
        for row in 0..4 {
            for col in 0..6 {
                let hex = Hex::from_offset(col, row);
                assert!(map.is_valid(hex));
                let field = map.field(hex).unwrap();
                assert_eq!(field.hex, hex);
            }
        }
        assert_eq!(map.fields().len(), 24);
    }

    #[test]
    fn out_of_bounds_is_no_field() {
        let map = GameMap::new(3, 3);
        for hex in [
            Hex::from_offset(-1, 0),
            Hex::from_offset(0, -1),
            Hex::from_offset(3, 0),
            Hex::from_offset(0, 3),
        ] {
            assert!(!map.is_valid(hex));
            assert!(map.field(hex).is_none());
        }
    }

    #[test]
    fn water_is_not_walkable() {
        let mut map = GameMap::new(3, 3);
        let hex = Hex::from_offset(1, 1);
        assert!(map.is_walkable(hex));
        map.field_mut(hex).unwrap().terrain = Terrain::Water;
        assert!(!map.is_walkable(hex));
        assert!(!map.is_walkable(Hex::from_offset(9, 9)));
    }

    #[test]
    fn object_registry() {
        let mut map = GameMap::new(3, 3);
        let a = map.place_object(MapObject {
            hex: Hex::from_offset(0, 0),
            owner: Some(1),
        });
        let b = map.place_object(MapObject {
            hex: Hex::from_offset(1, 0),
            owner: None,
        });
        assert_ne!(a, b);
        assert_eq!(map.object(a).unwrap().owner, Some(1));
        assert_eq!(map.objects().count(), 2);

        let removed = map.remove_object(a).unwrap();
        assert_eq!(removed.hex, Hex::from_offset(0, 0));
        assert!(map.object(a).is_none());
    }

    #[test]
    fn map_serializes() {
        let map = GameMap::new(2, 2);
        let json = serde_json::to_string(&map).unwrap();
        let back: GameMap = serde_json::from_str(&json).unwrap();
        assert_eq!(back.width(), 2);
        assert_eq!(back.fields(), map.fields());
    }
}
