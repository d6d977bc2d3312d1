//! Layout building: rings 0..=N projected to pixel space

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::geometry::{self, PixelPoint};
use crate::ring::generate_ring;

/// A renderable hex: label, axial coordinates, ring and pixel center
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LaidOutHex {
    pub label: String,
    pub q: i32,
    pub r: i32,
    pub ring: u32,
    pub pixel_x: f64,
    pub pixel_y: f64,
}

/// Build the layout for rings 0..=ring_count.
///
/// Output is ordered rings ascending, each ring in its traversal order, and
/// normalized so the center hex `"0"` sits at pixel (0,0) for any size.
pub fn build_layout(ring_count: u32, hex_size: f64) -> Result<Vec<LaidOutHex>> {
    // validate before anything is generated
    geometry::check_hex_size(hex_size)?;

    let mut hexes = Vec::new();
    for ring in 0..=ring_count {
        for hex in generate_ring(ring) {
            let center = geometry::project(hex.coord, hex_size)?;
            hexes.push(LaidOutHex {
                label: hex.label,
                q: hex.coord.q,
                r: hex.coord.r,
                ring,
                pixel_x: center.x,
                pixel_y: center.y,
            });
        }
    }

    // Re-anchor on the center hex
    let center = hexes
        .iter()
        .find(|h| h.label == "0")
        .map(|h| PixelPoint::new(h.pixel_x, h.pixel_y))
        .ok_or(CoreError::CenterMissing)?;
    for hex in &mut hexes {
        hex.pixel_x -= center.x;
        hex.pixel_y -= center.y;
    }

    Ok(hexes)
}

/// Parse the stringified ring count stored in map metadata.
///
/// Both the server (which rows must exist) and the renderer (how many rings
/// to lay out) read the same stored value through this function.
pub fn parse_ring_count(value: &str) -> Result<u32> {
    match value.trim().parse::<i64>() {
        Ok(n) if (0..=i64::from(u32::MAX)).contains(&n) => Ok(n as u32),
        _ => Err(CoreError::InvalidRingCount(value.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_hex_layout() {
        let layout = build_layout(0, 50.0).unwrap();
        assert_eq!(layout.len(), 1);
        assert_eq!(layout[0].label, "0");
        assert_eq!(layout[0].pixel_x, 0.0);
        assert_eq!(layout[0].pixel_y, 0.0);
    }

    #[test]
    fn test_layout_counts() {
        // 1 + 6 + 12 + 18 + 24
        assert_eq!(build_layout(4, 50.0).unwrap().len(), 61);
    }

    #[test]
    fn test_center_always_at_origin() {
        for (rings, size) in [(0, 50.0), (3, 12.5), (6, 80.0)] {
            let layout = build_layout(rings, size).unwrap();
            let center = layout.iter().find(|h| h.label == "0").unwrap();
            assert_eq!(center.pixel_x, 0.0);
            assert_eq!(center.pixel_y, 0.0);
        }
    }

    #[test]
    fn test_rings_ascend_in_traversal_order() {
        let layout = build_layout(3, 50.0).unwrap();
        let rings: Vec<u32> = layout.iter().map(|h| h.ring).collect();
        let mut sorted = rings.clone();
        sorted.sort();
        assert_eq!(rings, sorted);
        assert_eq!(layout[0].label, "0");
        assert_eq!(layout[1].label, "N1");
    }

    #[test]
    fn test_idempotent() {
        assert_eq!(build_layout(4, 50.0).unwrap(), build_layout(4, 50.0).unwrap());
    }

    #[test]
    fn test_invalid_size_fails_fast() {
        for size in [0.0, -2.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                build_layout(3, size),
                Err(CoreError::InvalidHexSize(_))
            ));
        }
    }

    #[test]
    fn test_parse_ring_count() {
        assert_eq!(parse_ring_count("4").unwrap(), 4);
        assert_eq!(parse_ring_count(" 0 ").unwrap(), 0);
        assert!(matches!(
            parse_ring_count("-1"),
            Err(CoreError::InvalidRingCount(_))
        ));
        assert!(matches!(
            parse_ring_count("2.5"),
            Err(CoreError::InvalidRingCount(_))
        ));
        assert!(matches!(
            parse_ring_count("many"),
            Err(CoreError::InvalidRingCount(_))
        ));
        assert!(matches!(
            parse_ring_count(""),
            Err(CoreError::InvalidRingCount(_))
        ));
    }
}
