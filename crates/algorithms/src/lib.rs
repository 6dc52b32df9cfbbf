//! # geobuffer Algorithms
//!
//! Vector analysis algorithms for geobuffer.
//!
//! ## Available Algorithms
//!
//! - **vector::PlanarGeometry**: circle buffering and the `intersects`
//!   predicate on planar coordinates
//! - **vector::generate_buffers**: one buffer polygon per labeled point
//! - **vector::find_overlaps**: every unordered pair of intersecting buffers

pub mod vector;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::vector::{
        buffer_point, candidate_pair_count, candidate_pairs, find_overlaps, generate_buffers,
        BufferGenerator, BufferParams, OverlapDetector, OverlapPair, PlanarGeometry,
    };
    pub use geobuffer_core::prelude::*;
}
