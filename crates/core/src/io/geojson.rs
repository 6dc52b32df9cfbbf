//! GeoJSON writers
//!
//! Two layouts are supported:
//! - `lines`: one bare geometry object per line, no attributes. This is the
//!   layout downstream consumers of `buffers.geojson` already read.
//! - `collection`: a single RFC 7946 `FeatureCollection` whose features carry
//!   the geometry and the `name` property.

use geo_types::{LineString, Polygon};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

use crate::error::{Error, Result};
use crate::io::Exporter;
use crate::vector::{Attributes, Buffer};

/// GeoJSON geometry object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GeoJsonGeometry {
    Polygon { coordinates: Vec<Vec<[f64; 2]>> },
}

fn ring(line: &LineString<f64>) -> Vec<[f64; 2]> {
    line.coords().map(|c| [c.x, c.y]).collect()
}

impl From<&Polygon<f64>> for GeoJsonGeometry {
    fn from(polygon: &Polygon<f64>) -> Self {
        let coordinates = std::iter::once(polygon.exterior())
            .chain(polygon.interiors())
            .map(ring)
            .collect();
        GeoJsonGeometry::Polygon { coordinates }
    }
}

#[derive(Serialize)]
struct Feature<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    geometry: GeoJsonGeometry,
    properties: &'a Attributes,
}

#[derive(Serialize)]
struct FeatureCollection<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    features: Vec<Feature<'a>>,
}

/// Output layout for exported buffers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// One geometry object per line
    #[default]
    Lines,
    /// A single FeatureCollection document
    Collection,
}

impl ExportFormat {
    /// Exporter writing this layout to `path`
    pub fn exporter(self, path: impl Into<PathBuf>) -> Box<dyn Exporter> {
        match self {
            ExportFormat::Lines => Box::new(GeoJsonLinesExporter::new(path)),
            ExportFormat::Collection => Box::new(GeoJsonCollectionExporter::new(path)),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "lines" | "geojsonl" | "ndjson" => Ok(ExportFormat::Lines),
            "collection" | "fc" | "geojson" => Ok(ExportFormat::Collection),
            _ => Err(Error::InvalidParameter {
                name: "format",
                value: s.to_string(),
                reason: "expected 'lines' or 'collection'".to_string(),
            }),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Lines => write!(f, "lines"),
            ExportFormat::Collection => write!(f, "collection"),
        }
    }
}

/// Write each buffer geometry as one GeoJSON object per line.
///
/// Returns the number of lines written.
pub fn write_geojson_lines<W: Write>(writer: &mut W, buffers: &[Buffer]) -> Result<usize> {
    for buffer in buffers {
        serde_json::to_writer(&mut *writer, &GeoJsonGeometry::from(&buffer.geometry))?;
        writer.write_all(b"\n")?;
    }
    Ok(buffers.len())
}

/// Write all buffers as a single FeatureCollection with `name` properties.
///
/// Returns the number of features written.
pub fn write_geojson_collection<W: Write>(writer: &mut W, buffers: &[Buffer]) -> Result<usize> {
    let collection = FeatureCollection {
        kind: "FeatureCollection",
        features: buffers
            .iter()
            .map(|b| Feature {
                kind: "Feature",
                geometry: GeoJsonGeometry::from(&b.geometry),
                properties: &b.attributes,
            })
            .collect(),
    };
    serde_json::to_writer(&mut *writer, &collection)?;
    writer.write_all(b"\n")?;
    Ok(buffers.len())
}

fn write_file<F>(path: &Path, buffers: &[Buffer], write: F) -> Result<usize>
where
    F: FnOnce(&mut BufWriter<File>, &[Buffer]) -> Result<usize>,
{
    let mut writer = BufWriter::new(File::create(path)?);
    let written = write(&mut writer, buffers)?;
    writer.flush()?;
    debug!("Wrote {} records to {}", written, path.display());
    Ok(written)
}

/// Exporter for the line-per-geometry layout
#[derive(Debug, Clone)]
pub struct GeoJsonLinesExporter {
    path: PathBuf,
}

impl GeoJsonLinesExporter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Exporter for GeoJsonLinesExporter {
    fn export(&self, buffers: &[Buffer]) -> Result<usize> {
        write_file(&self.path, buffers, |w, b| write_geojson_lines(w, b))
    }
}

/// Exporter for the FeatureCollection layout
#[derive(Debug, Clone)]
pub struct GeoJsonCollectionExporter {
    path: PathBuf,
}

impl GeoJsonCollectionExporter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Exporter for GeoJsonCollectionExporter {
    fn export(&self, buffers: &[Buffer]) -> Result<usize> {
        write_file(&self.path, buffers, |w, b| write_geojson_collection(w, b))
    }
}
