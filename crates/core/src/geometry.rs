//! Geometry capability consumed by the buffering and overlap algorithms.
//!
//! Algorithms never build polygons or evaluate predicates themselves; they go
//! through a [`GeometryProvider`] so the engine can be swapped (a planar
//! implementation lives in `geobuffer-algorithms`, tests use fakes).

use geo_types::{Geometry, Point, Polygon};

use crate::error::{Error, Result};

/// Point construction, buffering and the intersection predicate.
pub trait GeometryProvider {
    /// Build a point from a longitude/latitude pair.
    ///
    /// The default implementation only rejects non-finite coordinates.
    fn point(&self, lon: f64, lat: f64) -> Result<Point<f64>> {
        if !lon.is_finite() || !lat.is_finite() {
            return Err(Error::Geometry(format!(
                "invalid coordinate ({}, {})",
                lon, lat
            )));
        }
        Ok(Point::new(lon, lat))
    }

    /// Expand `geometry` outward by `radius`, returning the buffer polygon.
    fn buffer(&self, geometry: &Geometry<f64>, radius: f64) -> Result<Polygon<f64>>;

    /// Whether two polygons share at least one point, boundary included.
    fn intersects(&self, a: &Polygon<f64>, b: &Polygon<f64>) -> Result<bool>;
}

impl<P: GeometryProvider + ?Sized> GeometryProvider for &P {
    fn point(&self, lon: f64, lat: f64) -> Result<Point<f64>> {
        (**self).point(lon, lat)
    }

    fn buffer(&self, geometry: &Geometry<f64>, radius: f64) -> Result<Polygon<f64>> {
        (**self).buffer(geometry, radius)
    }

    fn intersects(&self, a: &Polygon<f64>, b: &Polygon<f64>) -> Result<bool> {
        (**self).intersects(a, b)
    }
}
