//! Ring coordinate generation and label assignment
//!
//! Every hex on the map is addressed by a human-readable label derived from
//! its ring and the compass corner whose side it sits on: `"0"` for the
//! center, `"NE3"` for the north-east corner of ring 3, `"NE3-1"` and
//! `"NE3-2"` for the hexes walked after it on that side. Storage keys rows
//! by these labels and the renderer places tiles by them, so the traversal
//! below is the single source of truth for which hexes exist and in what
//! order.

use crate::grid::{Axial, CornerTag, DIRECTIONS};

/// One hex of a generated ring
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RingHex {
    pub coord: Axial,
    pub label: String,
}

/// Generate ring `ring` as an ordered walk of its six sides.
///
/// Ring 0 is the single center hex, labeled `"0"`. Ring k >= 1 has exactly
/// 6k hexes: corner `i` sits at `DIRECTIONS[i] * k`, and the side starting
/// there takes k steps toward corner `i + 1`. Step 0 of a side is the corner
/// hex (`"N3"`); steps 1..k are suffixed with their step index (`"N3-1"`),
/// a counter scoped to that (corner tag, ring) pair — each tag owns exactly
/// one side of its ring.
///
/// Deterministic and stateless: the same ring always yields the same
/// sequence of coordinates and labels.
pub fn generate_ring(ring: u32) -> Vec<RingHex> {
    if ring == 0 {
        return vec![RingHex {
            coord: Axial::ORIGIN,
            label: "0".to_string(),
        }];
    }

    let mut hexes = Vec::with_capacity(6 * ring as usize);
    let mut pos = CornerTag::N.corner_of_ring(ring);

    for (side, tag) in CornerTag::ALL.into_iter().enumerate() {
        // The side from corner i to corner i+1 runs two direction slots
        // ahead of the corner's own direction.
        let (dq, dr) = DIRECTIONS[(side + 2) % 6];
        for step in 0..ring {
            let label = if step == 0 {
                format!("{tag}{ring}")
            } else {
                format!("{tag}{ring}-{step}")
            };
            hexes.push(RingHex { coord: pos, label });
            pos = Axial::new(pos.q + dq, pos.r + dr);
        }
    }

    hexes
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ring_zero_is_center() {
        let ring = generate_ring(0);
        assert_eq!(ring.len(), 1);
        assert_eq!(ring[0].label, "0");
        assert_eq!(ring[0].coord, Axial::ORIGIN);
    }

    #[test]
    fn test_ring_sizes() {
        for k in 1..=8 {
            assert_eq!(generate_ring(k).len(), 6 * k as usize);
        }
    }

    #[test]
    fn test_ring_one_corners() {
        let ring = generate_ring(1);
        let expected = [
            ("N1", Axial::new(0, -1)),
            ("NE1", Axial::new(1, -1)),
            ("SE1", Axial::new(1, 0)),
            ("S1", Axial::new(0, 1)),
            ("SW1", Axial::new(-1, 1)),
            ("NW1", Axial::new(-1, 0)),
        ];
        assert_eq!(ring.len(), expected.len());
        for (hex, (label, coord)) in ring.iter().zip(expected) {
            assert_eq!(hex.label, label);
            assert_eq!(hex.coord, coord);
        }
    }

    #[test]
    fn test_ring_two_labels() {
        let ring = generate_ring(2);
        assert_eq!(ring.len(), 12);

        let n2 = ring.iter().find(|h| h.label == "N2").unwrap();
        assert_eq!(n2.coord, Axial::new(0, -2));

        // One intermediate hex per side, suffixed -1
        for tag in ["N", "NE", "SE", "S", "SW", "NW"] {
            assert!(ring.iter().any(|h| h.label == format!("{tag}2")));
            assert!(ring.iter().any(|h| h.label == format!("{tag}2-1")));
            assert!(!ring.iter().any(|h| h.label == format!("{tag}2-2")));
        }
    }

    #[test]
    fn test_every_hex_on_its_ring() {
        for k in 0..=6 {
            for hex in generate_ring(k) {
                assert_eq!(hex.coord.distance_to_center(), k, "{}", hex.label);
            }
        }
    }

    #[test]
    fn test_walk_is_contiguous() {
        for k in 1..=5 {
            let ring = generate_ring(k);
            for pair in ring.windows(2) {
                assert_eq!(pair[0].coord.distance_to(pair[1].coord), 1);
            }
            // the walk closes back to its starting corner
            let first = ring.first().unwrap();
            let last = ring.last().unwrap();
            assert_eq!(first.coord.distance_to(last.coord), 1);
        }
    }

    #[test]
    fn test_labels_unique_across_rings() {
        let mut labels = HashSet::new();
        let mut total = 0;
        for k in 0..=5 {
            let ring = generate_ring(k);
            total += ring.len();
            labels.extend(ring.into_iter().map(|h| h.label));
        }
        assert_eq!(labels.len(), total);
        assert_eq!(total, 1 + 6 + 12 + 18 + 24 + 30);
    }

    #[test]
    fn test_coords_unique_across_rings() {
        let mut coords = HashSet::new();
        let mut total = 0;
        for k in 0..=5 {
            let ring = generate_ring(k);
            total += ring.len();
            coords.extend(ring.into_iter().map(|h| h.coord));
        }
        assert_eq!(coords.len(), total);
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(generate_ring(4), generate_ring(4));
    }
}
