//! # geobuffer Core
//!
//! Core types, capability traits and I/O for the geobuffer toolkit.
//!
//! This crate provides:
//! - `LabeledGeometry<G>`: a geometry paired with its `Attributes`
//! - `GeometryProvider`: the point / buffer / intersects capability
//! - `Exporter`: the capability that persists buffer geometries
//! - GeoJSON writers and a JSON site-list reader
//! - `Algorithm` trait for a consistent API across algorithms

pub mod error;
pub mod geometry;
pub mod io;
pub mod vector;

pub use error::{Error, Result};
pub use geometry::GeometryProvider;
pub use io::Exporter;
pub use vector::{
    make_labeled, reference_sites, Attributes, Buffer, LabeledGeometry, LabeledPoint, Site,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::geometry::GeometryProvider;
    pub use crate::io::Exporter;
    pub use crate::vector::{make_labeled, Attributes, Buffer, LabeledGeometry, LabeledPoint};
    pub use crate::Algorithm;
}

/// Core trait for all algorithms in geobuffer.
///
/// Algorithms are pure functions that transform input data according to parameters.
pub trait Algorithm {
    /// Input type for the algorithm
    type Input;
    /// Output type for the algorithm
    type Output;
    /// Parameters controlling algorithm behavior
    type Params: Default;
    /// Error type for algorithm execution
    type Error: std::error::Error;

    /// Returns the algorithm name
    fn name(&self) -> &'static str;

    /// Returns a description of what the algorithm does
    fn description(&self) -> &'static str;

    /// Execute the algorithm
    fn execute(&self, input: Self::Input, params: Self::Params) -> std::result::Result<Self::Output, Self::Error>;

    /// Execute with default parameters
    fn execute_default(&self, input: Self::Input) -> std::result::Result<Self::Output, Self::Error> {
        self.execute(input, Self::Params::default())
    }
}
