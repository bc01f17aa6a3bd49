//! # Hex — Flat-Top Axial Grid Geometry
//!
//! All grid math lives here: pixel conversion, neighbor enumeration,
//! distance, range, and line interpolation over a flat-top hex grid.
//!
//! ## Coordinates
//!
//! A [`Hex`] stores axial coordinates `(q, r)`. The third cube coordinate
//! `s = -q - r` is derivable and never stored. The map addresses fields by
//! rectangular offset coordinates `(col, row)`; [`Hex::from_offset`] and
//! [`Hex::to_offset`] convert between the two schemes using odd-row
//! staggering and are exact inverses of each other.
//!
//! ## Neighbor ordering
//!
//! [`Hex::neighbors`] always yields the six adjacent hexes in the order of
//! [`DIRECTIONS`]. Downstream consumers (notably the pathfinder's expansion
//! order) rely on this being fixed, so it is part of the contract.

use glam::Vec2;
use serde::{Deserialize, Serialize};

const SQRT_3: f32 = 1.732_050_8;

/// The six axial direction offsets, in the fixed enumeration order used by
/// [`Hex::neighbors`].
pub const DIRECTIONS: [Hex; 6] = [
    Hex { q: 1, r: 0 },
    Hex { q: 1, r: -1 },
    Hex { q: 0, r: -1 },
    Hex { q: -1, r: 0 },
    Hex { q: -1, r: 1 },
    Hex { q: 0, r: 1 },
];

/// An axial hex coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hex {
    pub q: i32,
    pub r: i32,
}

impl Hex {
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// The implicit third cube coordinate. `q + r + s == 0` always holds.
    pub fn s(self) -> i32 {
        -self.q - self.r
    }

    /// Hex distance: `(|Δq| + |Δq+Δr| + |Δr|) / 2`.
    ///
    /// Zero iff `self == other`; symmetric; satisfies the triangle
    /// inequality.
    pub fn distance(self, other: Hex) -> i32 {
        let dq = self.q - other.q;
        let dr = self.r - other.r;
        (dq.abs() + (dq + dr).abs() + dr.abs()) / 2
    }

    /// The six adjacent hexes, in the fixed order of [`DIRECTIONS`].
    pub fn neighbors(self) -> [Hex; 6] {
        DIRECTIONS.map(|d| Hex::new(self.q + d.q, self.r + d.r))
    }

    /// Every hex within `range` steps of `self`, including `self`.
    ///
    /// For range `R` this is exactly `3R² + 3R + 1` hexes.
    pub fn range(self, range: i32) -> Vec<Hex> {
        let mut out = Vec::new();
        for dq in -range..=range {
            let lo = (-range).max(-dq - range);
            let hi = range.min(-dq + range);
            for dr in lo..=hi {
                out.push(Hex::new(self.q + dq, self.r + dr));
            }
        }
        out
    }

    /// The `distance + 1` hexes on the straight line from `self` to `to`,
    /// inclusive of both endpoints. Each interpolated point is snapped with
    /// [`Hex::round`]. Used for range/line-of-sight visualization, not for
    /// pathfinding.
    pub fn line(self, to: Hex) -> Vec<Hex> {
        let n = self.distance(to);
        if n == 0 {
            return vec![self];
        }
        let mut out = Vec::with_capacity(n as usize + 1);
        for i in 0..=n {
            let t = i as f32 / n as f32;
            let fq = self.q as f32 + (to.q - self.q) as f32 * t;
            let fr = self.r as f32 + (to.r - self.r) as f32 * t;
            out.push(Hex::round(fq, fr));
        }
        out
    }

    /// Snap fractional axial coordinates to the nearest hex.
    ///
    /// Rounds q, r, and s independently, then recomputes whichever got the
    /// largest rounding error from the other two so that `q + r + s == 0`
    /// holds again. Ties are resolved by checking r before s.
    pub fn round(fq: f32, fr: f32) -> Hex {
        let fs = -fq - fr;
        let mut q = fq.round();
        let mut r = fr.round();
        let s = fs.round();

        let dq = (q - fq).abs();
        let dr = (r - fr).abs();
        let ds = (s - fs).abs();

        if dq > dr && dq > ds {
            q = -r - s;
        } else if dr >= ds {
            r = -q - s;
        }
        // When s has the largest error, q and r are already consistent.

        Hex::new(q as i32, r as i32)
    }

    /// Center of this hex in pixel space. `size` is the hex circumradius in
    /// output units.
    pub fn to_pixel(self, size: f32) -> Vec2 {
        let x = size * 1.5 * self.q as f32;
        let y = size * (SQRT_3 / 2.0 * self.q as f32 + SQRT_3 * self.r as f32);
        Vec2::new(x, y)
    }

    /// The hex containing the given pixel-space point. Inverse of
    /// [`Hex::to_pixel`] up to the rounding step.
    pub fn from_pixel(point: Vec2, size: f32) -> Hex {
        let fq = 2.0 / 3.0 * point.x / size;
        let fr = (-1.0 / 3.0 * point.x + SQRT_3 / 3.0 * point.y) / size;
        Hex::round(fq, fr)
    }

    /// Convert rectangular offset coordinates (odd rows staggered) to axial.
    pub fn from_offset(col: i32, row: i32) -> Hex {
        Hex::new(col - (row - (row & 1)) / 2, row)
    }

    /// Convert back to rectangular offset coordinates. Exact inverse of
    /// [`Hex::from_offset`] for every coordinate.
    pub fn to_offset(self) -> (i32, i32) {
        (self.q + (self.r - (self.r & 1)) / 2, self.r)
    }
}

impl std::fmt::Display for Hex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.q, self.r)
    }
}
