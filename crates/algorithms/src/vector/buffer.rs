//! Buffer operations
//!
//! Create buffer zones around labeled points. Each point becomes a circle
//! approximated as a polygon; the buffer keeps a copy of the point's
//! attributes.

use geo::{Geometry, LineString, Point, Polygon};
use geobuffer_core::{Algorithm, Buffer, Error, GeometryProvider, LabeledPoint, Result};
use std::f64::consts::PI;
use tracing::debug;

use super::planar::PlanarGeometry;

/// Parameters for buffer operations
#[derive(Debug, Clone)]
pub struct BufferParams {
    /// Buffer distance, in coordinate units
    pub distance: f64,
}

impl Default for BufferParams {
    fn default() -> Self {
        Self { distance: 5000.0 }
    }
}

/// Buffer generation algorithm over an injected geometry provider
#[derive(Debug, Clone, Default)]
pub struct BufferGenerator<P = PlanarGeometry> {
    provider: P,
}

impl<P: GeometryProvider> BufferGenerator<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }
}

impl<P: GeometryProvider> Algorithm for BufferGenerator<P> {
    type Input = Vec<LabeledPoint>;
    type Output = Vec<Buffer>;
    type Params = BufferParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "Buffer"
    }

    fn description(&self) -> &'static str {
        "Fixed-radius buffer around each labeled point"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        generate_buffers(&input, params.distance, &self.provider)
    }
}

/// Create a circular buffer around a point.
///
/// Generates a polygon approximating a circle with the given number
/// of segments (at least 4). The ring starts at angle 0 and is closed.
///
/// # Arguments
/// * `point` - Center point
/// * `radius` - Circle radius
/// * `segments` - Number of segments approximating the circle
///
/// # Returns
/// A polygon approximating a circle
pub fn buffer_point(point: &Point<f64>, radius: f64, segments: usize) -> Polygon<f64> {
    let n = segments.max(4);
    let r = radius.abs();
    let cx = point.x();
    let cy = point.y();

    let mut coords = Vec::with_capacity(n + 1);
    for i in 0..n {
        let angle = 2.0 * PI * i as f64 / n as f64;
        coords.push((cx + r * angle.cos(), cy + r * angle.sin()));
    }
    // Close the ring
    coords.push(coords[0]);

    Polygon::new(LineString::from(coords), vec![])
}

/// Buffer every labeled point by `radius`.
///
/// Output order matches input order; each buffer carries a copy of its
/// point's attributes. The radius is handed to the provider unchecked, so
/// an invalid radius surfaces as the provider's error. The first provider
/// failure aborts the whole pass.
///
/// # Arguments
/// * `points` - Labeled input points
/// * `radius` - Buffer radius in coordinate units
/// * `provider` - Geometry engine performing the buffering
///
/// # Returns
/// One buffer per input point
pub fn generate_buffers<P: GeometryProvider>(
    points: &[LabeledPoint],
    radius: f64,
    provider: &P,
) -> Result<Vec<Buffer>> {
    points
        .iter()
        .map(|point| {
            let polygon = provider.buffer(&Geometry::Point(point.geometry), radius)?;
            debug!(
                "Buffered {} ({}, {}) with {} vertices",
                point.name(),
                point.geometry.x(),
                point.geometry.y(),
                polygon.exterior().0.len()
            );
            Ok(Buffer::new(polygon, point.attributes.clone()))
        })
        .collect()
}
