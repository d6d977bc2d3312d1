//! Hexcrawl Core - shared campaign-map geometry and content model
//!
//! This crate provides the logic both the server and the renderer must agree
//! on, bit for bit:
//! - Ring coordinate generation with stable, human-readable labels
//! - Axial-to-pixel projection for the flat-top hex layout
//! - Layout building across rings 0..=N, normalized on the center hex
//! - Typed hex content records and the palette/taxonomy tables
//!
//! Everything here is pure and synchronous: no I/O, no shared state, safe to
//! call from any thread.

pub mod content;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod layout;
pub mod ring;

// Re-exports for convenient access
pub use content::{HexRecord, HexStatus, Terrain};
pub use error::{CoreError, Result};
pub use geometry::{
    axial_to_offset, edge_midpoints, hex_corners, project, PixelPoint, DEFAULT_HEX_SIZE,
};
pub use grid::{Axial, CornerTag, DIRECTIONS};
pub use layout::{build_layout, parse_ring_count, LaidOutHex};
pub use ring::{generate_ring, RingHex};
