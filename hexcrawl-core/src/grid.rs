//! Axial hex-grid primitives

use serde::{Deserialize, Serialize};
use std::fmt;

/// Axial hex coordinates; (0,0) is the map center
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Axial {
    pub q: i32,
    pub r: i32,
}

impl Axial {
    pub const ORIGIN: Axial = Axial::new(0, 0);

    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Ring this hex belongs to (hex-grid distance from the center)
    pub fn distance_to_center(&self) -> u32 {
        ((self.q.abs() + self.r.abs() + (self.q + self.r).abs()) / 2) as u32
    }

    /// Distance between two hexes
    pub fn distance_to(&self, other: Axial) -> u32 {
        let dq = (self.q - other.q).abs();
        let dr = (self.r - other.r).abs();
        let ds = ((self.q + self.r) - (other.q + other.r)).abs();
        ((dq + dr + ds) / 2) as u32
    }

    /// Get neighbor in direction (0-5)
    pub fn neighbor(&self, direction: u8) -> Axial {
        let (dq, dr) = DIRECTIONS[direction as usize % 6];
        Axial::new(self.q + dq, self.r + dr)
    }
}

/// Direction vectors in axial coordinates (dq, dr)
/// Index: 0=N, 1=NE, 2=SE, 3=S, 4=SW, 5=NW
pub const DIRECTIONS: [(i32, i32); 6] = [
    (0, -1),  // N
    (1, -1),  // NE
    (1, 0),   // SE
    (0, 1),   // S
    (-1, 1),  // SW
    (-1, 0),  // NW
];

/// Compass tags naming the six ring corners, in traversal order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CornerTag {
    N,
    NE,
    SE,
    S,
    SW,
    NW,
}

impl CornerTag {
    pub const ALL: [CornerTag; 6] = [
        CornerTag::N,
        CornerTag::NE,
        CornerTag::SE,
        CornerTag::S,
        CornerTag::SW,
        CornerTag::NW,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            CornerTag::N => "N",
            CornerTag::NE => "NE",
            CornerTag::SE => "SE",
            CornerTag::S => "S",
            CornerTag::SW => "SW",
            CornerTag::NW => "NW",
        }
    }

    /// The corner hex of ring `ring` carrying this tag
    pub fn corner_of_ring(self, ring: u32) -> Axial {
        let (dq, dr) = DIRECTIONS[self as usize];
        Axial::new(dq * ring as i32, dr * ring as i32)
    }
}

impl fmt::Display for CornerTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        assert_eq!(Axial::new(0, 0).distance_to_center(), 0);
        assert_eq!(Axial::new(1, 0).distance_to_center(), 1);
        assert_eq!(Axial::new(2, 2).distance_to_center(), 4);
        assert_eq!(Axial::new(0, -3).distance_to_center(), 3);
    }

    #[test]
    fn test_neighbors_cycle_back() {
        let start = Axial::new(2, -1);
        let mut pos = start;
        // One step in each direction and its opposite lands back home
        for dir in 0..6u8 {
            pos = pos.neighbor(dir).neighbor((dir + 3) % 6);
        }
        assert_eq!(pos, start);
    }

    #[test]
    fn test_corners_sit_on_their_ring() {
        for ring in 1..=5 {
            for tag in CornerTag::ALL {
                assert_eq!(tag.corner_of_ring(ring).distance_to_center(), ring);
            }
        }
    }

    #[test]
    fn test_north_corner() {
        assert_eq!(CornerTag::N.corner_of_ring(3), Axial::new(0, -3));
        assert_eq!(CornerTag::NE.corner_of_ring(1), Axial::new(1, -1));
    }
}
