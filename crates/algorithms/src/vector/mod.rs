//! Vector analysis algorithms
//!
//! Geometric operations on labeled point sites:
//! - Planar geometry: point buffering and polygon intersection
//! - Buffer: one polygon per point at a uniform radius
//! - Overlap: pairwise intersection test over all buffers

mod buffer;
mod overlap;
mod planar;

pub use buffer::{buffer_point, generate_buffers, BufferGenerator, BufferParams};
pub use overlap::{
    candidate_pair_count, candidate_pairs, find_overlaps, OverlapDetector, OverlapPair,
};
pub use planar::PlanarGeometry;
