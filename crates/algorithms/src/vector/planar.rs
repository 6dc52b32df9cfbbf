//! Planar geometry provider
//!
//! Works directly in the units of the input coordinates. For
//! longitude/latitude input a radius is therefore interpreted in degrees:
//! no reprojection happens before buffering, so buffers around geographic
//! coordinates are circles in degree space, not on the ground.

use geo::{Geometry, Intersects, Polygon};
use geobuffer_core::{Error, GeometryProvider, Result};

use super::buffer::buffer_point;

/// Default number of segments used to approximate a circle
pub const DEFAULT_SEGMENTS: usize = 32;

/// Geometry provider over planar coordinates, backed by `geo`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanarGeometry {
    /// Number of segments approximating each buffer circle (at least 4)
    pub segments: usize,
}

impl PlanarGeometry {
    pub fn new(segments: usize) -> Self {
        Self {
            segments: segments.max(4),
        }
    }
}

impl Default for PlanarGeometry {
    fn default() -> Self {
        Self::new(DEFAULT_SEGMENTS)
    }
}

fn check_polygon(polygon: &Polygon<f64>) -> Result<()> {
    let ring = polygon.exterior();
    if ring.0.len() < 4 {
        return Err(Error::Geometry(format!(
            "polygon ring has {} coordinates, need at least 4",
            ring.0.len()
        )));
    }
    if ring.coords().any(|c| !c.x.is_finite() || !c.y.is_finite()) {
        return Err(Error::Geometry("polygon has non-finite coordinates".into()));
    }
    Ok(())
}

impl GeometryProvider for PlanarGeometry {
    fn buffer(&self, geometry: &Geometry<f64>, radius: f64) -> Result<Polygon<f64>> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(Error::Geometry(format!("invalid buffer radius {}", radius)));
        }
        match geometry {
            Geometry::Point(p) => {
                if !p.x().is_finite() || !p.y().is_finite() {
                    return Err(Error::Geometry(format!(
                        "invalid coordinate ({}, {})",
                        p.x(),
                        p.y()
                    )));
                }
                Ok(buffer_point(p, radius, self.segments))
            }
            _ => Err(Error::Geometry(
                "planar buffering supports point geometries only".into(),
            )),
        }
    }

    fn intersects(&self, a: &Polygon<f64>, b: &Polygon<f64>) -> Result<bool> {
        check_polygon(a)?;
        check_polygon(b)?;
        Ok(a.intersects(b))
    }
}
