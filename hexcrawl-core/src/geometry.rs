//! Flat-top hexagon pixel geometry
//!
//! Size is the hex radius (center to vertex). The renderer and the layout
//! builder both go through `project`, so tiles and storage rows can never
//! drift apart.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::grid::Axial;

/// Hex radius used when no size is configured
pub const DEFAULT_HEX_SIZE: f64 = 50.0;

/// A 2D point in pixel space
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(self, other: PixelPoint) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Convert axial coordinates to odd-column offset coordinates.
///
/// `q & 1` is q's parity, 0 or 1 also for negative q.
pub fn axial_to_offset(coord: Axial) -> (i32, i32) {
    let col = coord.q;
    let row = coord.r + (coord.q - (coord.q & 1)) / 2;
    (col, row)
}

/// Project an axial coordinate to its pixel center.
///
/// Rejects zero, negative and non-finite sizes.
pub fn project(coord: Axial, size: f64) -> Result<PixelPoint> {
    check_hex_size(size)?;
    let (col, row) = axial_to_offset(coord);
    Ok(offset_to_pixel(col, row, size))
}

/// Pixel center of a hex at offset coordinates (col, row)
fn offset_to_pixel(col: i32, row: i32, size: f64) -> PixelPoint {
    let w = 2.0 * size;
    let h = 3.0_f64.sqrt() * size;
    let x = col as f64 * (0.75 * w);
    let y = row as f64 * h + if col & 1 != 0 { h / 2.0 } else { 0.0 };
    PixelPoint::new(x, y)
}

pub(crate) fn check_hex_size(size: f64) -> Result<()> {
    if !size.is_finite() || size <= 0.0 {
        return Err(CoreError::InvalidHexSize(size));
    }
    Ok(())
}

/// The six corner points of a hex centered at `center`: flat-top, first
/// vertex at 0°, then every 60°.
pub fn hex_corners(center: PixelPoint, size: f64) -> [PixelPoint; 6] {
    std::array::from_fn(|i| {
        let angle = ((60 * i) as f64).to_radians();
        PixelPoint::new(
            center.x + size * angle.cos(),
            center.y + size * angle.sin(),
        )
    })
}

/// Midpoints of the six edges; edge `i` joins corners `i` and `i + 1`.
///
/// Edge `i` of a hex is geometrically coincident with edge `(i + 3) % 6` of
/// the neighbor across it, which keeps linear features seamless between
/// adjacent tiles.
pub fn edge_midpoints(center: PixelPoint, size: f64) -> [PixelPoint; 6] {
    let corners = hex_corners(center, size);
    std::array::from_fn(|i| {
        let a = corners[i];
        let b = corners[(i + 1) % 6];
        PixelPoint::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_axial_to_offset() {
        assert_eq!(axial_to_offset(Axial::new(0, 0)), (0, 0));
        assert_eq!(axial_to_offset(Axial::new(1, 0)), (1, 0));
        assert_eq!(axial_to_offset(Axial::new(2, -1)), (2, 0));
        assert_eq!(axial_to_offset(Axial::new(3, -1)), (3, 0));
    }

    #[test]
    fn test_axial_to_offset_negative_parity() {
        // (q - (q & 1)) / 2 must stay exact for negative odd q
        assert_eq!(axial_to_offset(Axial::new(-1, 0)), (-1, -1));
        assert_eq!(axial_to_offset(Axial::new(-2, 1)), (-2, 0));
        assert_eq!(axial_to_offset(Axial::new(-3, 1)), (-3, -1));
    }

    #[test]
    fn test_project_origin() {
        let p = project(Axial::ORIGIN, 50.0).unwrap();
        assert!(p.x.abs() < EPS && p.y.abs() < EPS);
    }

    #[test]
    fn test_project_spot_values() {
        let size = 50.0;
        let h = 3.0_f64.sqrt() * size;

        // one column east: x advances by 0.75 * width, odd column drops h/2
        let p = project(Axial::new(1, 0), size).unwrap();
        assert!((p.x - 75.0).abs() < EPS);
        assert!((p.y - h / 2.0).abs() < EPS);

        // due north: one full row up
        let p = project(Axial::new(0, -1), size).unwrap();
        assert!(p.x.abs() < EPS);
        assert!((p.y + h).abs() < EPS);
    }

    #[test]
    fn test_project_rejects_bad_sizes() {
        for size in [0.0, -1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                project(Axial::ORIGIN, size),
                Err(CoreError::InvalidHexSize(_))
            ));
        }
    }

    #[test]
    fn test_corners_are_regular() {
        let center = PixelPoint::new(120.0, -40.0);
        let size = 37.5;
        let corners = hex_corners(center, size);
        for c in corners {
            assert!((center.distance_to(c) - size).abs() < 1e-9);
        }
        // consecutive corners are one side length apart (side == radius)
        for i in 0..6 {
            let d = corners[i].distance_to(corners[(i + 1) % 6]);
            assert!((d - size).abs() < 1e-9);
        }
    }

    #[test]
    fn test_first_corner_at_zero_degrees() {
        let corners = hex_corners(PixelPoint::new(0.0, 0.0), 10.0);
        assert!((corners[0].x - 10.0).abs() < EPS);
        assert!(corners[0].y.abs() < EPS);
    }

    #[test]
    fn test_shared_edges_coincide() {
        let size = 50.0;
        let a = Axial::new(2, -1);
        // check every neighbor of `a`
        for dir in 0..6u8 {
            let b = a.neighbor(dir);
            let ca = project(a, size).unwrap();
            let cb = project(b, size).unwrap();
            let mids_a = edge_midpoints(ca, size);
            let mids_b = edge_midpoints(cb, size);

            // some edge midpoint of a must coincide with one of b
            let coincide = mids_a.iter().any(|ma| {
                mids_b.iter().any(|mb| ma.distance_to(*mb) < 1e-6)
            });
            assert!(coincide, "no shared edge between {a:?} and {b:?}");
        }
    }

    #[test]
    fn test_opposite_edges_pair_up() {
        let size = 40.0;
        let a = Axial::new(0, 0);
        let b = a.neighbor(2); // SE neighbor
        let mids_a = edge_midpoints(project(a, size).unwrap(), size);
        let mids_b = edge_midpoints(project(b, size).unwrap(), size);

        // find the coincident pair and check the (i + 3) % 6 relation
        let mut found = None;
        for (i, ma) in mids_a.iter().enumerate() {
            for (j, mb) in mids_b.iter().enumerate() {
                if ma.distance_to(*mb) < 1e-6 {
                    found = Some((i, j));
                }
            }
        }
        let (i, j) = found.expect("neighbors must share an edge");
        assert_eq!((i + 3) % 6, j);
    }
}
