//! I/O for buffer geometries and input sites

mod geojson;
mod sites;

pub use geojson::{
    write_geojson_collection, write_geojson_lines, ExportFormat, GeoJsonCollectionExporter,
    GeoJsonGeometry, GeoJsonLinesExporter,
};
pub use sites::{read_sites, read_sites_from_reader};

use crate::error::Result;
use crate::vector::Buffer;

/// Destination for buffer geometries.
///
/// An export is one scoped write: the destination is acquired, every record
/// is written, and the destination is released on every exit path. A failure
/// aborts the export; records already written are left in place.
pub trait Exporter {
    /// Write `buffers`, returning the number of records written.
    fn export(&self, buffers: &[Buffer]) -> Result<usize>;
}

impl<E: Exporter + ?Sized> Exporter for Box<E> {
    fn export(&self, buffers: &[Buffer]) -> Result<usize> {
        (**self).export(buffers)
    }
}
